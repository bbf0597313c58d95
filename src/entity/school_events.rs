//! 校园事件实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "school_events")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub event_type: String,
    pub start_date: i64,
    pub end_date: i64,
    pub location: String,
    pub organizer_id: i64,
    pub is_public: bool,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::OrganizerId",
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
    pub fn into_event(self) -> crate::models::events::entities::SchoolEvent {
        use crate::models::events::entities::{EventType, SchoolEvent};
        use chrono::{DateTime, Utc};

        SchoolEvent {
            id: self.id,
            title: self.title,
            description: self.description.unwrap_or_default(),
            event_type: self
                .event_type
                .parse::<EventType>()
                .unwrap_or(EventType::Academic),
            start_date: DateTime::<Utc>::from_timestamp(self.start_date, 0).unwrap_or_default(),
            end_date: DateTime::<Utc>::from_timestamp(self.end_date, 0).unwrap_or_default(),
            location: self.location,
            organizer_id: self.organizer_id,
            is_public: self.is_public,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
