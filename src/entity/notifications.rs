//! 通知实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "notifications")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub recipient_id: i64,
    pub title: String,
    pub message: String,
    pub kind: String,
    pub is_read: bool,
    pub created_at: i64,
    pub expires_at: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::RecipientId",
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
    pub fn into_notification(self) -> crate::models::notifications::entities::Notification {
        use crate::models::notifications::entities::{Notification, NotificationKind};
        use chrono::{DateTime, Utc};

        Notification {
            id: self.id,
            recipient_id: self.recipient_id,
            title: self.title,
            message: self.message,
            kind: self
                .kind
                .parse::<NotificationKind>()
                .unwrap_or(NotificationKind::General),
            is_read: self.is_read,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            expires_at: self
                .expires_at
                .map(|ts| DateTime::<Utc>::from_timestamp(ts, 0).unwrap_or_default()),
        }
    }
}
