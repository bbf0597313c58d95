use super::{SeaOrmStorage, db_error, insert_error};
use crate::entity::users::{ActiveModel, Column, Entity as Users};
use crate::errors::Result;
use crate::models::{
    PaginationInfo,
    users::{
        entities::{User, UserStatus},
        requests::{CreateUserRequest, UpdateUserRequest, UserListQuery},
        responses::UserListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

impl SeaOrmStorage {
    /// 新建账号。password 字段在服务层已替换为哈希。
    pub async fn create_user_impl(&self, req: CreateUserRequest) -> Result<User> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            username: Set(req.username),
            email: Set(req.email),
            password_hash: Set(req.password),
            role: Set(req.role.to_string()),
            status: Set(UserStatus::Active.to_string()),
            profile_name: Set(Some(req.full_name)),
            mobile: Set(req.mobile),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let inserted = model
            .insert(&self.db)
            .await
            .map_err(insert_error("创建用户失败"))?;
        Ok(inserted.into_user())
    }

    async fn find_user(&self, condition: Condition) -> Result<Option<User>> {
        Users::find()
            .filter(condition)
            .one(&self.db)
            .await
            .map_err(db_error("查询用户失败"))
            .map(|row| row.map(|m| m.into_user()))
    }

    pub async fn get_user_by_id_impl(&self, id: i64) -> Result<Option<User>> {
        self.find_user(Condition::all().add(Column::Id.eq(id)))
            .await
    }

    pub async fn get_user_by_username_impl(&self, username: &str) -> Result<Option<User>> {
        self.find_user(Condition::all().add(Column::Username.eq(username)))
            .await
    }

    pub async fn get_user_by_email_impl(&self, email: &str) -> Result<Option<User>> {
        self.find_user(Condition::all().add(Column::Email.eq(email)))
            .await
    }

    /// 登录入口允许用户名或邮箱
    pub async fn get_user_by_username_or_email_impl(
        &self,
        identifier: &str,
    ) -> Result<Option<User>> {
        self.find_user(
            Condition::any()
                .add(Column::Username.eq(identifier))
                .add(Column::Email.eq(identifier)),
        )
        .await
    }

    /// 账号列表，支持模糊搜索与角色/状态过滤
    pub async fn list_users_with_pagination_impl(
        &self,
        query: UserListQuery,
    ) -> Result<UserListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Users::find().order_by_desc(Column::CreatedAt);

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            // 用户名、邮箱、姓名任一命中即可
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::Username.contains(&escaped))
                    .add(Column::Email.contains(&escaped))
                    .add(Column::ProfileName.contains(&escaped)),
            );
        }
        if let Some(ref role) = query.role {
            select = select.filter(Column::Role.eq(role.to_string()));
        }
        if let Some(ref status) = query.status {
            select = select.filter(Column::Status.eq(status.to_string()));
        }

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(db_error("查询用户总数失败"))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(db_error("查询用户页数失败"))?;
        let rows = paginator
            .fetch_page(page - 1)
            .await
            .map_err(db_error("查询用户列表失败"))?;

        Ok(UserListResponse {
            items: rows.into_iter().map(|m| m.into_user()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    pub async fn update_last_login_impl(&self, id: i64) -> Result<bool> {
        let now = chrono::Utc::now().timestamp();

        let updated = Users::update_many()
            .col_expr(Column::LastLogin, sea_orm::sea_query::Expr::value(now))
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(db_error("更新最后登录时间失败"))?;
        Ok(updated.rows_affected > 0)
    }

    /// 部分更新，只有携带的字段会被改写
    pub async fn update_user_impl(
        &self,
        id: i64,
        update: UpdateUserRequest,
    ) -> Result<Option<User>> {
        if self.get_user_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(email) = update.email {
            model.email = Set(email);
        }
        if let Some(password) = update.password {
            model.password_hash = Set(password);
        }
        if let Some(status) = update.status {
            model.status = Set(status.to_string());
        }
        if let Some(full_name) = update.full_name {
            model.profile_name = Set(Some(full_name));
        }
        if let Some(mobile) = update.mobile {
            model.mobile = Set(Some(mobile));
        }

        model
            .update(&self.db)
            .await
            .map_err(db_error("更新用户失败"))?;

        self.get_user_by_id_impl(id).await
    }

    /// 删除账号，档案与借阅记录由外键级联清理
    pub async fn delete_user_impl(&self, id: i64) -> Result<bool> {
        let deleted = Users::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_error("删除用户失败"))?;
        Ok(deleted.rows_affected > 0)
    }
}
