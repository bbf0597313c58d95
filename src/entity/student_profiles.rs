//! 学生档案实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "student_profiles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub user_id: i64,
    pub roll: i32,
    pub class_name: String,
    pub fee: Option<i64>,
    pub mobile: Option<String>,
    pub status: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    Users,
    #[sea_orm(has_many = "super::fee_payments::Entity")]
    FeePayments,
    #[sea_orm(has_many = "super::exam_results::Entity")]
    ExamResults,
    #[sea_orm(has_many = "super::student_performance::Entity")]
    StudentPerformance,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl Related<super::fee_payments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FeePayments.def()
    }
}

impl Related<super::exam_results::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ExamResults.def()
    }
}

impl Related<super::student_performance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudentPerformance.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_student_profile(self) -> crate::models::students::entities::StudentProfile {
        use crate::models::students::entities::{ProfileStatus, StudentProfile};
        use chrono::{DateTime, Utc};

        StudentProfile {
            id: self.id,
            user_id: self.user_id,
            class_name: self.class_name,
            roll_number: self.roll,
            fee: self.fee,
            mobile: self.mobile,
            status: self
                .status
                .parse::<ProfileStatus>()
                .unwrap_or(ProfileStatus::Pending),
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
