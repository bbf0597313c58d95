use serde::{Deserialize, Serialize};

// 缴费单状态
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Overdue,
    Cancelled,
}

impl<'de> Deserialize<'de> for PaymentStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentStatus::Pending => write!(f, "pending"),
            PaymentStatus::Paid => write!(f, "paid"),
            PaymentStatus::Overdue => write!(f, "overdue"),
            PaymentStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl std::str::FromStr for PaymentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(PaymentStatus::Pending),
            "paid" => Ok(PaymentStatus::Paid),
            "overdue" => Ok(PaymentStatus::Overdue),
            "cancelled" => Ok(PaymentStatus::Cancelled),
            _ => Err(format!(
                "无效的缴费状态: '{s}'. 支持的状态: pending, paid, overdue, cancelled"
            )),
        }
    }
}

// 缴费单
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeePayment {
    pub id: i64,
    pub student_profile_id: i64,
    /// 金额，最小货币单位
    pub amount: i64,
    pub due_date: chrono::NaiveDate,
    pub payment_date: Option<chrono::NaiveDate>,
    pub status: PaymentStatus,
    pub payment_method: Option<String>,
    pub transaction_id: Option<String>,
    pub notes: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
