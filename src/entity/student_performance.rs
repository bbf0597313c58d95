//! 学业快照实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "student_performance")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub semester: String,
    pub attendance_percentage: f64,
    pub average_marks: f64,
    pub grade: String,
    pub remarks: Option<String>,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::student_profiles::Entity",
        from = "Column::StudentId",
        to = "super::student_profiles::Column::Id"
    )]
    StudentProfiles,
}

impl Related<super::student_profiles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudentProfiles.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_performance(self) -> crate::models::exams::entities::StudentPerformance {
        use crate::models::exams::entities::StudentPerformance;
        use chrono::{DateTime, Utc};

        StudentPerformance {
            id: self.id,
            student_profile_id: self.student_id,
            semester: self.semester,
            attendance_percentage: self.attendance_percentage,
            average_marks: self.average_marks,
            grade: self.grade,
            remarks: self.remarks,
            created_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
