use super::entities::{Assignment, AssignmentSubmission};
use crate::models::common::PaginationInfo;
use serde::Serialize;

// 作业列表响应
#[derive(Debug, Serialize)]
pub struct AssignmentListResponse {
    pub items: Vec<Assignment>,
    pub pagination: PaginationInfo,
}

// 提交列表响应
#[derive(Debug, Serialize)]
pub struct SubmissionListResponse {
    pub items: Vec<AssignmentSubmission>,
}

// 学生视角的作业条目：作业 + 本人提交（未提交为 None）
#[derive(Debug, Serialize)]
pub struct StudentAssignmentItem {
    pub assignment: Assignment,
    pub submission: Option<AssignmentSubmission>,
}

// 学生视角的作业列表
#[derive(Debug, Serialize)]
pub struct StudentAssignmentListResponse {
    pub items: Vec<StudentAssignmentItem>,
}
