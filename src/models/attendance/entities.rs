use serde::{Deserialize, Serialize};

// 考勤状态
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    Present,
    Absent,
}

impl AttendanceStatus {
    /// 透视表/导出中的单字符形式
    pub fn as_mark(&self) -> char {
        match self {
            AttendanceStatus::Present => 'P',
            AttendanceStatus::Absent => 'A',
        }
    }
}

impl<'de> Deserialize<'de> for AttendanceStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "present" => Ok(AttendanceStatus::Present),
            "absent" => Ok(AttendanceStatus::Absent),
            _ => Err(serde::de::Error::custom(format!(
                "无效的考勤状态: '{s}'. 支持的状态: present, absent"
            ))),
        }
    }
}

impl std::fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttendanceStatus::Present => write!(f, "present"),
            AttendanceStatus::Absent => write!(f, "absent"),
        }
    }
}

impl std::str::FromStr for AttendanceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "present" => Ok(AttendanceStatus::Present),
            "absent" => Ok(AttendanceStatus::Absent),
            _ => Err(format!("Invalid attendance status: {s}")),
        }
    }
}

// 考勤记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: i64,
    pub roll_number: i32,
    pub class_name: String,
    pub date: chrono::NaiveDate,
    pub status: AttendanceStatus,
}
