use super::{SeaOrmStorage, db_error};
use crate::entity::prelude::{ExamResults, Exams, StudentPerformance as Performance};
use crate::errors::Result;
use crate::entity::{exam_results, exams, student_performance};
use crate::models::{
    PaginationInfo,
    exams::{
        entities::{Exam, ExamResult, StudentPerformance},
        requests::{CreateExamRequest, ExamListQuery, UpdateExamRequest},
        responses::ExamListResponse,
    },
};
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

impl SeaOrmStorage {
    /// 创建考试
    pub async fn create_exam_impl(&self, req: CreateExamRequest, created_by: i64) -> Result<Exam> {
        let now = chrono::Utc::now().timestamp();

        let model = exams::ActiveModel {
            name: Set(req.name),
            exam_type: Set(req.exam_type.to_string()),
            subject: Set(req.subject),
            class_name: Set(req.class_name),
            exam_date: Set(req.exam_date.timestamp()),
            duration_minutes: Set(req.duration_minutes),
            max_marks: Set(req.max_marks),
            instructions: Set(if req.instructions.is_empty() {
                None
            } else {
                Some(req.instructions)
            }),
            created_by: Set(created_by),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(db_error("创建考试失败"))?;

        Ok(result.into_exam())
    }

    /// 通过 ID 获取考试
    pub async fn get_exam_by_id_impl(&self, id: i64) -> Result<Option<Exam>> {
        let result = Exams::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_error("查询考试失败"))?;

        Ok(result.map(|m| m.into_exam()))
    }

    /// 分页列出考试
    pub async fn list_exams_impl(&self, query: ExamListQuery) -> Result<ExamListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Exams::find();

        if let Some(ref class_name) = query.class_name {
            select = select.filter(exams::Column::ClassName.eq(class_name));
        }

        if let Some(ref exam_type) = query.exam_type {
            select = select.filter(exams::Column::ExamType.eq(exam_type.to_string()));
        }

        select = select.order_by_desc(exams::Column::ExamDate);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(db_error("查询考试总数失败"))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(db_error("查询考试页数失败"))?;
        let rows = paginator
            .fetch_page(page - 1)
            .await
            .map_err(db_error("查询考试列表失败"))?;

        Ok(ExamListResponse {
            items: rows.into_iter().map(|m| m.into_exam()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新考试
    pub async fn update_exam_impl(
        &self,
        id: i64,
        update: UpdateExamRequest,
    ) -> Result<Option<Exam>> {
        let existing = self.get_exam_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let mut model = exams::ActiveModel {
            id: Set(id),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name);
        }

        if let Some(exam_type) = update.exam_type {
            model.exam_type = Set(exam_type.to_string());
        }

        if let Some(subject) = update.subject {
            model.subject = Set(subject);
        }

        if let Some(exam_date) = update.exam_date {
            model.exam_date = Set(exam_date.timestamp());
        }

        if let Some(duration_minutes) = update.duration_minutes {
            model.duration_minutes = Set(duration_minutes);
        }

        if let Some(max_marks) = update.max_marks {
            model.max_marks = Set(max_marks);
        }

        if let Some(instructions) = update.instructions {
            model.instructions = Set(Some(instructions));
        }

        model
            .update(&self.db)
            .await
            .map_err(db_error("更新考试失败"))?;

        self.get_exam_by_id_impl(id).await
    }

    /// 删除考试
    pub async fn delete_exam_impl(&self, id: i64) -> Result<bool> {
        let result = Exams::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_error("删除考试失败"))?;

        Ok(result.rows_affected > 0)
    }

    /// 时间窗内的考试
    pub async fn list_exams_between_impl(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
        class_name: Option<&str>,
    ) -> Result<Vec<Exam>> {
        let mut select = Exams::find()
            .filter(exams::Column::ExamDate.gte(from.timestamp()))
            .filter(exams::Column::ExamDate.lte(to.timestamp()));

        if let Some(class_name) = class_name {
            select = select.filter(exams::Column::ClassName.eq(class_name));
        }

        let rows = select
            .order_by_asc(exams::Column::ExamDate)
            .all(&self.db)
            .await
            .map_err(db_error("查询考试失败"))?;

        Ok(rows.into_iter().map(|m| m.into_exam()).collect())
    }

    /// 教师创建过考试的班级（去重）
    pub async fn list_teacher_classes_impl(&self, user_id: i64) -> Result<Vec<String>> {
        let classes: Vec<String> = Exams::find()
            .select_only()
            .column(exams::Column::ClassName)
            .filter(exams::Column::CreatedBy.eq(user_id))
            .group_by(exams::Column::ClassName)
            .order_by_asc(exams::Column::ClassName)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(db_error("查询授课班级失败"))?;

        Ok(classes)
    }

    /// 录入/覆盖成绩，(exam, student) 唯一
    pub async fn upsert_exam_result_impl(
        &self,
        exam_id: i64,
        student_profile_id: i64,
        marks_obtained: i32,
        grade: &str,
        remarks: Option<String>,
    ) -> Result<ExamResult> {
        let now = chrono::Utc::now().timestamp();

        let existing = ExamResults::find()
            .filter(exam_results::Column::ExamId.eq(exam_id))
            .filter(exam_results::Column::StudentId.eq(student_profile_id))
            .one(&self.db)
            .await
            .map_err(db_error("查询成绩失败"))?;

        let result = match existing {
            Some(model) => {
                let update = exam_results::ActiveModel {
                    id: Set(model.id),
                    marks_obtained: Set(marks_obtained),
                    grade: Set(grade.to_string()),
                    remarks: Set(remarks),
                    ..Default::default()
                };
                update.update(&self.db).await.map_err(db_error("更新成绩失败"))?
            }
            None => {
                let insert = exam_results::ActiveModel {
                    exam_id: Set(exam_id),
                    student_id: Set(student_profile_id),
                    marks_obtained: Set(marks_obtained),
                    grade: Set(grade.to_string()),
                    remarks: Set(remarks),
                    created_at: Set(now),
                    ..Default::default()
                };
                insert.insert(&self.db).await.map_err(db_error("录入成绩失败"))?
            }
        };

        Ok(result.into_result())
    }

    /// 某场考试的全部成绩（按学生）
    pub async fn list_results_by_exam_impl(&self, exam_id: i64) -> Result<Vec<ExamResult>> {
        let rows = ExamResults::find()
            .filter(exam_results::Column::ExamId.eq(exam_id))
            .order_by_asc(exam_results::Column::StudentId)
            .all(&self.db)
            .await
            .map_err(db_error("查询成绩失败"))?;

        Ok(rows.into_iter().map(|m| m.into_result()).collect())
    }

    /// 某学生的全部成绩
    pub async fn list_results_by_student_impl(
        &self,
        student_profile_id: i64,
    ) -> Result<Vec<ExamResult>> {
        let rows = ExamResults::find()
            .filter(exam_results::Column::StudentId.eq(student_profile_id))
            .order_by_desc(exam_results::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(db_error("查询成绩失败"))?;

        Ok(rows.into_iter().map(|m| m.into_result()).collect())
    }

    /// 删除成绩
    pub async fn delete_exam_result_impl(&self, id: i64) -> Result<bool> {
        let result = ExamResults::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_error("删除成绩失败"))?;

        Ok(result.rows_affected > 0)
    }

    /// 某学生的 (得分, 满分) 对
    pub async fn list_student_marks_impl(
        &self,
        student_profile_id: i64,
    ) -> Result<Vec<(i32, i32)>> {
        let rows = ExamResults::find()
            .filter(exam_results::Column::StudentId.eq(student_profile_id))
            .find_also_related(Exams)
            .all(&self.db)
            .await
            .map_err(db_error("查询成绩失败"))?;

        Ok(rows
            .into_iter()
            .filter_map(|(result, exam)| exam.map(|e| (result.marks_obtained, e.max_marks)))
            .collect())
    }

    /// 写入/覆盖学业快照，(student, semester) 唯一
    pub async fn upsert_performance_impl(
        &self,
        student_profile_id: i64,
        semester: &str,
        attendance_percentage: f64,
        average_marks: f64,
        grade: &str,
    ) -> Result<StudentPerformance> {
        let now = chrono::Utc::now().timestamp();

        let existing = Performance::find()
            .filter(student_performance::Column::StudentId.eq(student_profile_id))
            .filter(student_performance::Column::Semester.eq(semester))
            .one(&self.db)
            .await
            .map_err(db_error("查询学业快照失败"))?;

        let result = match existing {
            Some(model) => {
                let update = student_performance::ActiveModel {
                    id: Set(model.id),
                    attendance_percentage: Set(attendance_percentage),
                    average_marks: Set(average_marks),
                    grade: Set(grade.to_string()),
                    updated_at: Set(now),
                    ..Default::default()
                };
                update.update(&self.db).await.map_err(db_error("更新学业快照失败"))?
            }
            None => {
                let insert = student_performance::ActiveModel {
                    student_id: Set(student_profile_id),
                    semester: Set(semester.to_string()),
                    attendance_percentage: Set(attendance_percentage),
                    average_marks: Set(average_marks),
                    grade: Set(grade.to_string()),
                    updated_at: Set(now),
                    ..Default::default()
                };
                insert.insert(&self.db).await.map_err(db_error("写入学业快照失败"))?
            }
        };

        Ok(result.into_performance())
    }

    /// 读取学业快照
    pub async fn get_performance_impl(
        &self,
        student_profile_id: i64,
        semester: &str,
    ) -> Result<Option<StudentPerformance>> {
        let result = Performance::find()
            .filter(student_performance::Column::StudentId.eq(student_profile_id))
            .filter(student_performance::Column::Semester.eq(semester))
            .one(&self.db)
            .await
            .map_err(db_error("查询学业快照失败"))?;

        Ok(result.map(|m| m.into_performance()))
    }
}
