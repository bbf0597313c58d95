use super::{SeaOrmStorage, db_error};
use crate::entity::prelude::{AssignmentSubmissions, Assignments};
use crate::entity::{assignment_submissions, assignments};
use crate::errors::Result;
use crate::models::{
    PaginationInfo,
    assignments::{
        entities::{Assignment, AssignmentSubmission},
        requests::{AssignmentListQuery, CreateAssignmentRequest},
        responses::AssignmentListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 布置作业
    pub async fn create_assignment_impl(
        &self,
        req: CreateAssignmentRequest,
        created_by: i64,
    ) -> Result<Assignment> {
        let now = chrono::Utc::now().timestamp();

        let model = assignments::ActiveModel {
            title: Set(req.title),
            description: Set(if req.description.is_empty() {
                None
            } else {
                Some(req.description)
            }),
            subject: Set(req.subject),
            class_name: Set(req.class_name),
            due_date: Set(req.due_date.timestamp()),
            max_marks: Set(req.max_marks),
            created_by: Set(created_by),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(db_error("布置作业失败"))?;

        Ok(result.into_assignment())
    }

    /// 通过 ID 获取作业
    pub async fn get_assignment_by_id_impl(&self, id: i64) -> Result<Option<Assignment>> {
        let result = Assignments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_error("查询作业失败"))?;

        Ok(result.map(|m| m.into_assignment()))
    }

    /// 分页列出作业
    pub async fn list_assignments_impl(
        &self,
        query: AssignmentListQuery,
    ) -> Result<AssignmentListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Assignments::find();

        if let Some(ref class_name) = query.class_name {
            select = select.filter(assignments::Column::ClassName.eq(class_name));
        }

        if let Some(ref subject) = query.subject {
            select = select.filter(assignments::Column::Subject.eq(subject));
        }

        select = select.order_by_desc(assignments::Column::DueDate);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(db_error("查询作业总数失败"))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(db_error("查询作业页数失败"))?;
        let rows = paginator
            .fetch_page(page - 1)
            .await
            .map_err(db_error("查询作业列表失败"))?;

        Ok(AssignmentListResponse {
            items: rows.into_iter().map(|m| m.into_assignment()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 某班全部作业（按截止时间升序）
    pub async fn list_assignments_by_class_impl(
        &self,
        class_name: &str,
    ) -> Result<Vec<Assignment>> {
        let rows = Assignments::find()
            .filter(assignments::Column::ClassName.eq(class_name))
            .order_by_asc(assignments::Column::DueDate)
            .all(&self.db)
            .await
            .map_err(db_error("查询作业失败"))?;

        Ok(rows.into_iter().map(|m| m.into_assignment()).collect())
    }

    /// 删除作业（提交记录级联删除）
    pub async fn delete_assignment_impl(&self, id: i64) -> Result<bool> {
        let result = Assignments::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_error("删除作业失败"))?;

        Ok(result.rows_affected > 0)
    }

    /// 交作业，(assignment, student) 唯一；重交覆盖内容并清空批改
    pub async fn upsert_submission_impl(
        &self,
        assignment_id: i64,
        student_profile_id: i64,
        content: &str,
    ) -> Result<AssignmentSubmission> {
        let now = chrono::Utc::now().timestamp();

        let existing = AssignmentSubmissions::find()
            .filter(assignment_submissions::Column::AssignmentId.eq(assignment_id))
            .filter(assignment_submissions::Column::StudentId.eq(student_profile_id))
            .one(&self.db)
            .await
            .map_err(db_error("查询提交失败"))?;

        let result = match existing {
            Some(model) => {
                let update = assignment_submissions::ActiveModel {
                    id: Set(model.id),
                    content: Set(content.to_string()),
                    submitted_at: Set(now),
                    marks_obtained: Set(None),
                    grade: Set(None),
                    feedback: Set(None),
                    ..Default::default()
                };
                update.update(&self.db).await.map_err(db_error("更新提交失败"))?
            }
            None => {
                let insert = assignment_submissions::ActiveModel {
                    assignment_id: Set(assignment_id),
                    student_id: Set(student_profile_id),
                    content: Set(content.to_string()),
                    submitted_at: Set(now),
                    ..Default::default()
                };
                insert.insert(&self.db).await.map_err(db_error("提交作业失败"))?
            }
        };

        Ok(result.into_submission())
    }

    /// 读取单个学生的提交
    pub async fn get_submission_impl(
        &self,
        assignment_id: i64,
        student_profile_id: i64,
    ) -> Result<Option<AssignmentSubmission>> {
        let result = AssignmentSubmissions::find()
            .filter(assignment_submissions::Column::AssignmentId.eq(assignment_id))
            .filter(assignment_submissions::Column::StudentId.eq(student_profile_id))
            .one(&self.db)
            .await
            .map_err(db_error("查询提交失败"))?;

        Ok(result.map(|m| m.into_submission()))
    }

    /// 某份作业的全部提交（按学生）
    pub async fn list_submissions_by_assignment_impl(
        &self,
        assignment_id: i64,
    ) -> Result<Vec<AssignmentSubmission>> {
        let rows = AssignmentSubmissions::find()
            .filter(assignment_submissions::Column::AssignmentId.eq(assignment_id))
            .order_by_asc(assignment_submissions::Column::StudentId)
            .all(&self.db)
            .await
            .map_err(db_error("查询提交失败"))?;

        Ok(rows.into_iter().map(|m| m.into_submission()).collect())
    }

    /// 某学生的全部提交
    pub async fn list_submissions_by_student_impl(
        &self,
        student_profile_id: i64,
    ) -> Result<Vec<AssignmentSubmission>> {
        let rows = AssignmentSubmissions::find()
            .filter(assignment_submissions::Column::StudentId.eq(student_profile_id))
            .order_by_desc(assignment_submissions::Column::SubmittedAt)
            .all(&self.db)
            .await
            .map_err(db_error("查询提交失败"))?;

        Ok(rows.into_iter().map(|m| m.into_submission()).collect())
    }

    /// 批改：写回得分、等级与评语；无提交时返回 None
    pub async fn grade_submission_impl(
        &self,
        assignment_id: i64,
        student_profile_id: i64,
        marks_obtained: i32,
        grade: &str,
        feedback: Option<String>,
    ) -> Result<Option<AssignmentSubmission>> {
        let existing = AssignmentSubmissions::find()
            .filter(assignment_submissions::Column::AssignmentId.eq(assignment_id))
            .filter(assignment_submissions::Column::StudentId.eq(student_profile_id))
            .one(&self.db)
            .await
            .map_err(db_error("查询提交失败"))?;

        let Some(model) = existing else {
            return Ok(None);
        };

        let update = assignment_submissions::ActiveModel {
            id: Set(model.id),
            marks_obtained: Set(Some(marks_obtained)),
            grade: Set(Some(grade.to_string())),
            feedback: Set(feedback),
            ..Default::default()
        };

        let result = update
            .update(&self.db)
            .await
            .map_err(db_error("批改作业失败"))?;

        Ok(Some(result.into_submission()))
    }
}
