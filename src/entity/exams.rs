//! 考试实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "exams")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub exam_type: String,
    pub subject: String,
    pub class_name: String,
    pub exam_date: i64,
    pub duration_minutes: i32,
    pub max_marks: i32,
    pub instructions: Option<String>,
    pub created_by: i64,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::CreatedBy",
        to = "super::users::Column::Id"
    )]
    Users,
    #[sea_orm(has_many = "super::exam_results::Entity")]
    ExamResults,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl Related<super::exam_results::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ExamResults.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_exam(self) -> crate::models::exams::entities::Exam {
        use crate::models::exams::entities::{Exam, ExamType};
        use chrono::{DateTime, Utc};

        Exam {
            id: self.id,
            name: self.name,
            exam_type: self
                .exam_type
                .parse::<ExamType>()
                .unwrap_or(ExamType::Quiz),
            subject: self.subject,
            class_name: self.class_name,
            exam_date: DateTime::<Utc>::from_timestamp(self.exam_date, 0).unwrap_or_default(),
            duration_minutes: self.duration_minutes,
            max_marks: self.max_marks,
            instructions: self.instructions.unwrap_or_default(),
            created_by: self.created_by,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
