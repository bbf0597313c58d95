use serde::{Deserialize, Serialize};

// 通知类别
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Assignment,
    Attendance,
    Fee,
    General,
    Exam,
    Library,
}

impl<'de> Deserialize<'de> for NotificationKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotificationKind::Assignment => write!(f, "assignment"),
            NotificationKind::Attendance => write!(f, "attendance"),
            NotificationKind::Fee => write!(f, "fee"),
            NotificationKind::General => write!(f, "general"),
            NotificationKind::Exam => write!(f, "exam"),
            NotificationKind::Library => write!(f, "library"),
        }
    }
}

impl std::str::FromStr for NotificationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "assignment" => Ok(NotificationKind::Assignment),
            "attendance" => Ok(NotificationKind::Attendance),
            "fee" => Ok(NotificationKind::Fee),
            "general" => Ok(NotificationKind::General),
            "exam" => Ok(NotificationKind::Exam),
            "library" => Ok(NotificationKind::Library),
            _ => Err(format!(
                "无效的通知类别: '{s}'. 支持: assignment, attendance, fee, general, exam, library"
            )),
        }
    }
}

// 通知：创建后只允许翻转已读标记
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: i64,
    pub recipient_id: i64,
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
    pub is_read: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub expires_at: Option<chrono::DateTime<chrono::Utc>>,
}
