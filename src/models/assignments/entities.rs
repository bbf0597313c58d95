use serde::{Deserialize, Serialize};

// 班级作业：教师按班级与科目布置，带截止时间与满分
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    pub id: i64,
    pub title: String,
    pub description: String,
    /// 科目名（纯标签）
    pub subject: String,
    pub class_name: String,
    pub due_date: chrono::DateTime<chrono::Utc>,
    pub max_marks: i32,
    pub created_by: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// 作业提交：每份作业每个学生至多一条，重交覆盖并清空批改
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentSubmission {
    pub id: i64,
    pub assignment_id: i64,
    pub student_profile_id: i64,
    pub content: String,
    pub submitted_at: chrono::DateTime<chrono::Utc>,
    /// 批改前为 None
    pub marks_obtained: Option<i32>,
    /// 由成绩计算器在批改时算出
    pub grade: Option<String>,
    pub feedback: Option<String>,
}

impl AssignmentSubmission {
    pub fn is_graded(&self) -> bool {
        self.marks_obtained.is_some()
    }
}
