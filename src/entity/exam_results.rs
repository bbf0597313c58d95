//! 考试成绩实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "exam_results")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub exam_id: i64,
    pub student_id: i64,
    pub marks_obtained: i32,
    pub grade: String,
    pub remarks: Option<String>,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::exams::Entity",
        from = "Column::ExamId",
        to = "super::exams::Column::Id"
    )]
    Exams,
    #[sea_orm(
        belongs_to = "super::student_profiles::Entity",
        from = "Column::StudentId",
        to = "super::student_profiles::Column::Id"
    )]
    StudentProfiles,
}

impl Related<super::exams::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Exams.def()
    }
}

impl Related<super::student_profiles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudentProfiles.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_result(self) -> crate::models::exams::entities::ExamResult {
        use crate::models::exams::entities::ExamResult;
        use chrono::{DateTime, Utc};

        ExamResult {
            id: self.id,
            exam_id: self.exam_id,
            student_profile_id: self.student_id,
            marks_obtained: self.marks_obtained,
            grade: self.grade,
            remarks: self.remarks,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
