use super::{SeaOrmStorage, db_error};
use crate::entity::notifications::{ActiveModel, Column, Entity as Notifications};
use crate::errors::Result;
use crate::models::{
    PaginationInfo,
    notifications::{
        entities::{Notification, NotificationKind},
        requests::NotificationListQuery,
        responses::NotificationListResponse,
    },
};
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 落库一条通知
    pub async fn create_notification_impl(
        &self,
        recipient_id: i64,
        title: &str,
        message: &str,
        kind: NotificationKind,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<Notification> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            recipient_id: Set(recipient_id),
            title: Set(title.to_string()),
            message: Set(message.to_string()),
            kind: Set(kind.to_string()),
            is_read: Set(false),
            created_at: Set(now),
            expires_at: Set(expires_at.map(|ts| ts.timestamp())),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(db_error("创建通知失败"))?;

        Ok(result.into_notification())
    }

    /// 分页列出通知（过期的不返回）
    pub async fn list_notifications_impl(
        &self,
        query: NotificationListQuery,
    ) -> Result<NotificationListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;
        let now = chrono::Utc::now().timestamp();

        let mut select = Notifications::find().filter(
            sea_orm::Condition::any()
                .add(Column::ExpiresAt.is_null())
                .add(Column::ExpiresAt.gt(now)),
        );

        if let Some(recipient_id) = query.recipient_id {
            select = select.filter(Column::RecipientId.eq(recipient_id));
        }

        if query.unread_only {
            select = select.filter(Column::IsRead.eq(false));
        }

        select = select.order_by_desc(Column::CreatedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(db_error("查询通知总数失败"))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(db_error("查询通知页数失败"))?;
        let rows = paginator
            .fetch_page(page - 1)
            .await
            .map_err(db_error("查询通知列表失败"))?;

        Ok(NotificationListResponse {
            items: rows.into_iter().map(|m| m.into_notification()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 未读通知数
    pub async fn unread_notification_count_impl(&self, recipient_id: i64) -> Result<i64> {
        let now = chrono::Utc::now().timestamp();

        let count = Notifications::find()
            .filter(Column::RecipientId.eq(recipient_id))
            .filter(Column::IsRead.eq(false))
            .filter(
                sea_orm::Condition::any()
                    .add(Column::ExpiresAt.is_null())
                    .add(Column::ExpiresAt.gt(now)),
            )
            .count(&self.db)
            .await
            .map_err(db_error("统计未读通知失败"))?;

        Ok(count as i64)
    }

    /// 标记单条已读（限收件人）
    pub async fn mark_notification_read_impl(&self, id: i64, recipient_id: i64) -> Result<bool> {
        let result = Notifications::update_many()
            .col_expr(Column::IsRead, sea_orm::sea_query::Expr::value(true))
            .filter(Column::Id.eq(id))
            .filter(Column::RecipientId.eq(recipient_id))
            .exec(&self.db)
            .await
            .map_err(db_error("标记通知已读失败"))?;

        Ok(result.rows_affected > 0)
    }

    /// 全部标记已读
    pub async fn mark_all_notifications_read_impl(&self, recipient_id: i64) -> Result<u64> {
        let result = Notifications::update_many()
            .col_expr(Column::IsRead, sea_orm::sea_query::Expr::value(true))
            .filter(Column::RecipientId.eq(recipient_id))
            .filter(Column::IsRead.eq(false))
            .exec(&self.db)
            .await
            .map_err(db_error("标记通知已读失败"))?;

        Ok(result.rows_affected)
    }

    /// 删除通知（限收件人）
    pub async fn delete_notification_impl(&self, id: i64, recipient_id: i64) -> Result<bool> {
        let result = Notifications::delete_many()
            .filter(Column::Id.eq(id))
            .filter(Column::RecipientId.eq(recipient_id))
            .exec(&self.db)
            .await
            .map_err(db_error("删除通知失败"))?;

        Ok(result.rows_affected > 0)
    }
}
