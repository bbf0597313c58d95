//! 作业提交实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "assignment_submissions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub assignment_id: i64,
    pub student_id: i64,
    pub content: String,
    pub submitted_at: i64,
    pub marks_obtained: Option<i32>,
    pub grade: Option<String>,
    pub feedback: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::assignments::Entity",
        from = "Column::AssignmentId",
        to = "super::assignments::Column::Id"
    )]
    Assignments,
    #[sea_orm(
        belongs_to = "super::student_profiles::Entity",
        from = "Column::StudentId",
        to = "super::student_profiles::Column::Id"
    )]
    StudentProfiles,
}

impl Related<super::assignments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assignments.def()
    }
}

impl Related<super::student_profiles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudentProfiles.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_submission(self) -> crate::models::assignments::entities::AssignmentSubmission {
        use crate::models::assignments::entities::AssignmentSubmission;
        use chrono::{DateTime, Utc};

        AssignmentSubmission {
            id: self.id,
            assignment_id: self.assignment_id,
            student_profile_id: self.student_id,
            content: self.content,
            submitted_at: DateTime::<Utc>::from_timestamp(self.submitted_at, 0)
                .unwrap_or_default(),
            marks_obtained: self.marks_obtained,
            grade: self.grade,
            feedback: self.feedback,
        }
    }
}
