use serde::{Deserialize, Serialize};

// 档案审批状态：注册后待管理员审批
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum ProfileStatus {
    Pending, // 待审批
    Active,  // 已生效
}

impl<'de> Deserialize<'de> for ProfileStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "pending" => Ok(ProfileStatus::Pending),
            "active" => Ok(ProfileStatus::Active),
            _ => Err(serde::de::Error::custom(format!(
                "无效的档案状态: '{s}'. 支持的状态: pending, active"
            ))),
        }
    }
}

impl std::fmt::Display for ProfileStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProfileStatus::Pending => write!(f, "pending"),
            ProfileStatus::Active => write!(f, "active"),
        }
    }
}

impl std::str::FromStr for ProfileStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ProfileStatus::Pending),
            "active" => Ok(ProfileStatus::Active),
            _ => Err(format!("Invalid profile status: {s}")),
        }
    }
}

// 学生档案
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentProfile {
    pub id: i64,
    pub user_id: i64,
    pub class_name: String,
    pub roll_number: i32,
    /// 学年基础费用
    pub fee: Option<i64>,
    pub mobile: Option<String>,
    pub status: ProfileStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 学生档案 + 账号信息的联合视图
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentDetail {
    #[serde(flatten)]
    pub profile: StudentProfile,
    pub username: String,
    pub full_name: String,
    pub email: String,
}
