use super::{SeaOrmStorage, db_error};
use crate::entity::notices::{ActiveModel, Column, Entity as Notices};
use crate::errors::Result;
use crate::models::{
    PaginationInfo,
    notices::{entities::Notice, requests::NoticeListQuery, responses::NoticeListResponse},
};
use sea_orm::{ActiveModelTrait, EntityTrait, PaginatorTrait, QueryOrder, Set};

impl SeaOrmStorage {
    /// 发布公告
    pub async fn create_notice_impl(
        &self,
        author_id: i64,
        author_name: &str,
        message: &str,
    ) -> Result<Notice> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            author_id: Set(author_id),
            author_name: Set(author_name.to_string()),
            message: Set(message.to_string()),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(db_error("发布公告失败"))?;

        Ok(result.into_notice())
    }

    /// 通过 ID 获取公告
    pub async fn get_notice_by_id_impl(&self, id: i64) -> Result<Option<Notice>> {
        let result = Notices::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_error("查询公告失败"))?;

        Ok(result.map(|m| m.into_notice()))
    }

    /// 分页列出公告（新发布在前）
    pub async fn list_notices_impl(&self, query: NoticeListQuery) -> Result<NoticeListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let select = Notices::find().order_by_desc(Column::CreatedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(db_error("查询公告总数失败"))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(db_error("查询公告页数失败"))?;
        let rows = paginator
            .fetch_page(page - 1)
            .await
            .map_err(db_error("查询公告列表失败"))?;

        Ok(NoticeListResponse {
            items: rows.into_iter().map(|m| m.into_notice()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 删除公告
    pub async fn delete_notice_impl(&self, id: i64) -> Result<bool> {
        let result = Notices::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_error("删除公告失败"))?;

        Ok(result.rows_affected > 0)
    }
}
