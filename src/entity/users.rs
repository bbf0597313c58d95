//! 用户实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub status: String,
    pub profile_name: Option<String>,
    pub mobile: Option<String>,
    pub last_login: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::student_profiles::Entity")]
    StudentProfiles,
    #[sea_orm(has_one = "super::teacher_profiles::Entity")]
    TeacherProfiles,
    #[sea_orm(has_many = "super::book_loans::Entity")]
    BookLoans,
    #[sea_orm(has_many = "super::notifications::Entity")]
    Notifications,
    #[sea_orm(has_many = "super::school_events::Entity")]
    SchoolEvents,
}

impl Related<super::student_profiles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudentProfiles.def()
    }
}

impl Related<super::teacher_profiles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TeacherProfiles.def()
    }
}

impl Related<super::book_loans::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BookLoans.def()
    }
}

impl Related<super::notifications::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Notifications.def()
    }
}

impl Related<super::school_events::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SchoolEvents.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_user(self) -> crate::models::users::entities::User {
        use crate::models::users::entities::{User, UserRole, UserStatus};
        use chrono::{DateTime, Utc};

        User {
            id: self.id,
            username: self.username,
            email: self.email,
            password_hash: self.password_hash,
            role: self.role.parse::<UserRole>().unwrap_or(UserRole::Student),
            status: self
                .status
                .parse::<UserStatus>()
                .unwrap_or(UserStatus::Active),
            full_name: self.profile_name.unwrap_or_default(),
            mobile: self.mobile,
            last_login: self
                .last_login
                .map(|ts| DateTime::<Utc>::from_timestamp(ts, 0).unwrap_or_default()),
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
