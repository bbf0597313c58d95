//! 作业实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "assignments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub subject: String,
    pub class_name: String,
    pub due_date: i64,
    pub max_marks: i32,
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
    #[sea_orm(has_many = "super::assignment_submissions::Entity")]
    AssignmentSubmissions,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl Related<super::assignment_submissions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AssignmentSubmissions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_assignment(self) -> crate::models::assignments::entities::Assignment {
        use crate::models::assignments::entities::Assignment;
        use chrono::{DateTime, Utc};

        Assignment {
            id: self.id,
            title: self.title,
            description: self.description.unwrap_or_default(),
            subject: self.subject,
            class_name: self.class_name,
            due_date: DateTime::<Utc>::from_timestamp(self.due_date, 0).unwrap_or_default(),
            max_marks: self.max_marks,
            created_by: self.created_by,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
