use serde::{Deserialize, Serialize};

// 校园事件类型
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Academic,
    Sports,
    Cultural,
    Social,
    Holiday,
}

impl<'de> Deserialize<'de> for EventType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventType::Academic => write!(f, "academic"),
            EventType::Sports => write!(f, "sports"),
            EventType::Cultural => write!(f, "cultural"),
            EventType::Social => write!(f, "social"),
            EventType::Holiday => write!(f, "holiday"),
        }
    }
}

impl std::str::FromStr for EventType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "academic" => Ok(EventType::Academic),
            "sports" => Ok(EventType::Sports),
            "cultural" => Ok(EventType::Cultural),
            "social" => Ok(EventType::Social),
            "holiday" => Ok(EventType::Holiday),
            _ => Err(format!(
                "无效的事件类型: '{s}'. 支持: academic, sports, cultural, social, holiday"
            )),
        }
    }
}

// 校园事件
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchoolEvent {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub event_type: EventType,
    pub start_date: chrono::DateTime<chrono::Utc>,
    pub end_date: chrono::DateTime<chrono::Utc>,
    pub location: String,
    pub organizer_id: i64,
    pub is_public: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
