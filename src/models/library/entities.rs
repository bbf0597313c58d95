use serde::{Deserialize, Serialize};

// 馆藏状态
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BookStatus {
    Available,
    Borrowed,
    Lost,
    Damaged,
}

impl<'de> Deserialize<'de> for BookStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for BookStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BookStatus::Available => write!(f, "available"),
            BookStatus::Borrowed => write!(f, "borrowed"),
            BookStatus::Lost => write!(f, "lost"),
            BookStatus::Damaged => write!(f, "damaged"),
        }
    }
}

impl std::str::FromStr for BookStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(BookStatus::Available),
            "borrowed" => Ok(BookStatus::Borrowed),
            "lost" => Ok(BookStatus::Lost),
            "damaged" => Ok(BookStatus::Damaged),
            _ => Err(format!(
                "无效的馆藏状态: '{s}'. 支持的状态: available, borrowed, lost, damaged"
            )),
        }
    }
}

// 馆藏图书
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibraryBook {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub category: String,
    pub publisher: String,
    pub publication_year: i32,
    pub pages: i32,
    pub status: BookStatus,
    pub added_at: chrono::DateTime<chrono::Utc>,
}

// 借阅记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookLoan {
    pub id: i64,
    pub book_id: i64,
    pub borrower_id: i64,
    pub borrow_date: chrono::NaiveDate,
    pub due_date: chrono::NaiveDate,
    pub return_date: Option<chrono::NaiveDate>,
    /// 逾期罚金；按期归还恒为 0
    pub fine_amount: i64,
    pub is_returned: bool,
}
