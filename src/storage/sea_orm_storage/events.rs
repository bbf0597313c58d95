use super::{SeaOrmStorage, db_error};
use crate::entity::school_events::{ActiveModel, Column, Entity as SchoolEvents};
use crate::errors::Result;
use crate::models::{
    PaginationInfo,
    events::{
        entities::SchoolEvent,
        requests::{CreateEventRequest, EventListQuery, UpdateEventRequest},
        responses::EventListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建校园事件
    pub async fn create_event_impl(
        &self,
        req: CreateEventRequest,
        organizer_id: i64,
    ) -> Result<SchoolEvent> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            title: Set(req.title),
            description: Set(if req.description.is_empty() {
                None
            } else {
                Some(req.description)
            }),
            event_type: Set(req.event_type.to_string()),
            start_date: Set(req.start_date.timestamp()),
            end_date: Set(req.end_date.timestamp()),
            location: Set(req.location),
            organizer_id: Set(organizer_id),
            is_public: Set(req.is_public),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(db_error("创建事件失败"))?;

        Ok(result.into_event())
    }

    /// 通过 ID 获取事件
    pub async fn get_event_by_id_impl(&self, id: i64) -> Result<Option<SchoolEvent>> {
        let result = SchoolEvents::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_error("查询事件失败"))?;

        Ok(result.map(|m| m.into_event()))
    }

    /// 分页列出事件（按开始时间升序）
    pub async fn list_events_impl(&self, query: EventListQuery) -> Result<EventListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = SchoolEvents::find();

        if let Some(ref event_type) = query.event_type {
            select = select.filter(Column::EventType.eq(event_type.to_string()));
        }

        if query.public_only {
            select = select.filter(Column::IsPublic.eq(true));
        }

        if let Some(starts_after) = query.starts_after {
            select = select.filter(Column::StartDate.gte(starts_after.timestamp()));
        }

        select = select.order_by_asc(Column::StartDate);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(db_error("查询事件总数失败"))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(db_error("查询事件页数失败"))?;
        let rows = paginator
            .fetch_page(page - 1)
            .await
            .map_err(db_error("查询事件列表失败"))?;

        Ok(EventListResponse {
            items: rows.into_iter().map(|m| m.into_event()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新事件
    pub async fn update_event_impl(
        &self,
        id: i64,
        update: UpdateEventRequest,
    ) -> Result<Option<SchoolEvent>> {
        let existing = self.get_event_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(id),
            ..Default::default()
        };

        if let Some(title) = update.title {
            model.title = Set(title);
        }

        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }

        if let Some(event_type) = update.event_type {
            model.event_type = Set(event_type.to_string());
        }

        if let Some(start_date) = update.start_date {
            model.start_date = Set(start_date.timestamp());
        }

        if let Some(end_date) = update.end_date {
            model.end_date = Set(end_date.timestamp());
        }

        if let Some(location) = update.location {
            model.location = Set(location);
        }

        if let Some(is_public) = update.is_public {
            model.is_public = Set(is_public);
        }

        model
            .update(&self.db)
            .await
            .map_err(db_error("更新事件失败"))?;

        self.get_event_by_id_impl(id).await
    }

    /// 删除事件
    pub async fn delete_event_impl(&self, id: i64) -> Result<bool> {
        let result = SchoolEvents::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_error("删除事件失败"))?;

        Ok(result.rows_affected > 0)
    }
}
