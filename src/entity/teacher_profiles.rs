//! 教师档案实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "teacher_profiles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub user_id: i64,
    pub salary: i64,
    pub join_date: i64,
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
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_teacher_profile(self) -> crate::models::teachers::entities::TeacherProfile {
        use crate::models::students::entities::ProfileStatus;
        use crate::models::teachers::entities::TeacherProfile;
        use chrono::{DateTime, Utc};

        TeacherProfile {
            id: self.id,
            user_id: self.user_id,
            salary: self.salary,
            mobile: self.mobile,
            join_date: DateTime::<Utc>::from_timestamp(self.join_date, 0)
                .unwrap_or_default()
                .date_naive(),
            status: self
                .status
                .parse::<ProfileStatus>()
                .unwrap_or(ProfileStatus::Pending),
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
