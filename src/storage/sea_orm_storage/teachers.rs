use super::{SeaOrmStorage, db_error, insert_error};
use crate::entity::prelude::{TeacherProfiles, Users};
use crate::entity::{teacher_profiles, users};
use crate::errors::Result;
use crate::models::{
    PaginationInfo,
    students::entities::ProfileStatus,
    teachers::{
        entities::TeacherDetail,
        requests::{NewTeacherProfile, TeacherListQuery, UpdateTeacherRequest},
        responses::{TeacherListResponse, TeacherStatisticsResponse},
    },
    users::{entities::UserStatus, requests::CreateUserRequest},
};
use crate::utils::escape_like_pattern;
use chrono::NaiveDateTime;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, QueryTrait, Set, TransactionTrait,
};

fn into_detail(profile: teacher_profiles::Model, user: users::Model) -> TeacherDetail {
    TeacherDetail {
        username: user.username.clone(),
        full_name: user.profile_name.clone().unwrap_or_default(),
        email: user.email.clone(),
        profile: profile.into_teacher_profile(),
    }
}

fn date_to_epoch(date: chrono::NaiveDate) -> i64 {
    date.and_hms_opt(0, 0, 0)
        .unwrap_or(NaiveDateTime::default())
        .and_utc()
        .timestamp()
}

impl SeaOrmStorage {
    /// 事务内创建账号 + 教师档案
    pub async fn create_teacher_with_account_impl(
        &self,
        account: CreateUserRequest,
        profile: NewTeacherProfile,
    ) -> Result<TeacherDetail> {
        let now = chrono::Utc::now().timestamp();

        let txn = self
            .db
            .begin()
            .await
            .map_err(db_error("开启事务失败"))?;

        let user = users::ActiveModel {
            username: Set(account.username),
            email: Set(account.email),
            password_hash: Set(account.password),
            role: Set(account.role.to_string()),
            status: Set(UserStatus::Active.to_string()),
            profile_name: Set(Some(account.full_name)),
            mobile: Set(account.mobile),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(insert_error("创建教师账号失败"))?;

        let model = teacher_profiles::ActiveModel {
            user_id: Set(user.id),
            salary: Set(profile.salary),
            join_date: Set(date_to_epoch(profile.join_date)),
            mobile: Set(profile.mobile),
            status: Set(profile.status.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(insert_error("创建教师档案失败"))?;

        txn.commit()
            .await
            .map_err(db_error("提交事务失败"))?;

        Ok(into_detail(model, user))
    }

    /// 通过档案 ID 获取教师
    pub async fn get_teacher_by_id_impl(&self, id: i64) -> Result<Option<TeacherDetail>> {
        let result = TeacherProfiles::find_by_id(id)
            .find_also_related(Users)
            .one(&self.db)
            .await
            .map_err(db_error("查询教师失败"))?;

        Ok(result.and_then(|(profile, user)| user.map(|u| into_detail(profile, u))))
    }

    /// 分页列出教师
    pub async fn list_teachers_with_pagination_impl(
        &self,
        query: TeacherListQuery,
    ) -> Result<TeacherListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = TeacherProfiles::find();

        if let Some(ref status) = query.status {
            select = select.filter(teacher_profiles::Column::Status.eq(status.to_string()));
        }

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                teacher_profiles::Column::UserId.in_subquery(
                    Users::find()
                        .select_only()
                        .column(users::Column::Id)
                        .filter(
                            Condition::any()
                                .add(users::Column::Username.contains(&escaped))
                                .add(users::Column::ProfileName.contains(&escaped))
                                .add(users::Column::Email.contains(&escaped)),
                        )
                        .into_query(),
                ),
            );
        }

        select = select.order_by_desc(teacher_profiles::Column::CreatedAt);

        let paginator = select.find_also_related(Users).paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(db_error("查询教师总数失败"))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(db_error("查询教师页数失败"))?;
        let rows = paginator
            .fetch_page(page - 1)
            .await
            .map_err(db_error("查询教师列表失败"))?;

        Ok(TeacherListResponse {
            items: rows
                .into_iter()
                .filter_map(|(profile, user)| user.map(|u| into_detail(profile, u)))
                .collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新教师档案
    pub async fn update_teacher_profile_impl(
        &self,
        id: i64,
        update: UpdateTeacherRequest,
    ) -> Result<Option<TeacherDetail>> {
        let existing = self.get_teacher_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = teacher_profiles::ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(salary) = update.salary {
            model.salary = Set(salary);
        }

        if let Some(mobile) = update.mobile {
            model.mobile = Set(Some(mobile));
        }

        model
            .update(&self.db)
            .await
            .map_err(db_error("更新教师档案失败"))?;

        self.get_teacher_by_id_impl(id).await
    }

    /// 设置档案状态（审批）
    pub async fn set_teacher_status_impl(&self, id: i64, status: ProfileStatus) -> Result<bool> {
        let now = chrono::Utc::now().timestamp();

        let result = TeacherProfiles::update_many()
            .col_expr(
                teacher_profiles::Column::Status,
                sea_orm::sea_query::Expr::value(status.to_string()),
            )
            .col_expr(
                teacher_profiles::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(now),
            )
            .filter(teacher_profiles::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(db_error("更新教师状态失败"))?;

        Ok(result.rows_affected > 0)
    }

    /// 删除教师（连同账号，事务内）
    pub async fn delete_teacher_impl(&self, id: i64) -> Result<bool> {
        let Some(detail) = self.get_teacher_by_id_impl(id).await? else {
            return Ok(false);
        };

        let txn = self
            .db
            .begin()
            .await
            .map_err(db_error("开启事务失败"))?;

        TeacherProfiles::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(db_error("删除教师档案失败"))?;

        Users::delete_by_id(detail.profile.user_id)
            .exec(&txn)
            .await
            .map_err(db_error("删除教师账号失败"))?;

        txn.commit()
            .await
            .map_err(db_error("提交事务失败"))?;

        Ok(true)
    }

    /// 教师统计
    pub async fn teacher_statistics_impl(&self) -> Result<TeacherStatisticsResponse> {
        let total = TeacherProfiles::find()
            .count(&self.db)
            .await
            .map_err(db_error("统计教师数量失败"))?;

        let pending = TeacherProfiles::find()
            .filter(teacher_profiles::Column::Status.eq(ProfileStatus::Pending.to_string()))
            .count(&self.db)
            .await
            .map_err(db_error("统计教师数量失败"))?;

        let salaries: Vec<i64> = TeacherProfiles::find()
            .select_only()
            .column(teacher_profiles::Column::Salary)
            .filter(teacher_profiles::Column::Status.eq(ProfileStatus::Active.to_string()))
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(db_error("统计教师薪资失败"))?;

        let active = salaries.len() as i64;
        let average_salary = if salaries.is_empty() {
            0.0
        } else {
            salaries.iter().sum::<i64>() as f64 / salaries.len() as f64
        };

        Ok(TeacherStatisticsResponse {
            total: total as i64,
            active,
            pending: pending as i64,
            average_salary,
        })
    }

    /// 在职教师账号 ID 列表
    pub async fn list_active_teacher_user_ids_impl(&self) -> Result<Vec<i64>> {
        let ids: Vec<i64> = TeacherProfiles::find()
            .select_only()
            .column(teacher_profiles::Column::UserId)
            .filter(teacher_profiles::Column::Status.eq(ProfileStatus::Active.to_string()))
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(db_error("查询在职教师失败"))?;

        Ok(ids)
    }
}
