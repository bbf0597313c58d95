use serde::{Deserialize, Serialize};

// 考试类型
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExamType {
    Midterm,
    Final,
    Quiz,
    Assignment,
}

impl<'de> Deserialize<'de> for ExamType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for ExamType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExamType::Midterm => write!(f, "midterm"),
            ExamType::Final => write!(f, "final"),
            ExamType::Quiz => write!(f, "quiz"),
            ExamType::Assignment => write!(f, "assignment"),
        }
    }
}

impl std::str::FromStr for ExamType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "midterm" => Ok(ExamType::Midterm),
            "final" => Ok(ExamType::Final),
            "quiz" => Ok(ExamType::Quiz),
            "assignment" => Ok(ExamType::Assignment),
            _ => Err(format!(
                "无效的考试类型: '{s}'. 支持的类型: midterm, final, quiz, assignment"
            )),
        }
    }
}

// 考试
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exam {
    pub id: i64,
    pub name: String,
    pub exam_type: ExamType,
    /// 科目名（纯标签）
    pub subject: String,
    pub class_name: String,
    pub exam_date: chrono::DateTime<chrono::Utc>,
    pub duration_minutes: i32,
    pub max_marks: i32,
    pub instructions: String,
    pub created_by: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// 考试成绩
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExamResult {
    pub id: i64,
    pub exam_id: i64,
    pub student_profile_id: i64,
    pub marks_obtained: i32,
    /// 由成绩计算器在保存前算出
    pub grade: String,
    pub remarks: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// 学业快照：按 (学生, 学期) 派生缓存，按需重算
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentPerformance {
    pub id: i64,
    pub student_profile_id: i64,
    pub semester: String,
    pub attendance_percentage: f64,
    pub average_marks: f64,
    pub grade: String,
    pub remarks: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
