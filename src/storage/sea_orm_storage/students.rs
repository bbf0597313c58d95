use super::{SeaOrmStorage, db_error, insert_error};
use crate::entity::prelude::{StudentProfiles, Users};
use crate::entity::{student_profiles, users};
use crate::errors::Result;
use crate::models::{
    PaginationInfo,
    students::{
        entities::{ProfileStatus, StudentDetail},
        requests::{NewStudentProfile, StudentListQuery, UpdateStudentRequest},
        responses::{ClassCount, StudentListResponse, StudentStatisticsResponse},
    },
    users::{entities::UserStatus, requests::CreateUserRequest},
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, QueryTrait, Set, TransactionTrait,
};

fn into_detail(profile: student_profiles::Model, user: users::Model) -> StudentDetail {
    StudentDetail {
        username: user.username.clone(),
        full_name: user.profile_name.clone().unwrap_or_default(),
        email: user.email.clone(),
        profile: profile.into_student_profile(),
    }
}

impl SeaOrmStorage {
    /// 事务内创建账号 + 学生档案
    pub async fn create_student_with_account_impl(
        &self,
        account: CreateUserRequest,
        profile: NewStudentProfile,
    ) -> Result<StudentDetail> {
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
        .map_err(insert_error("创建学生账号失败"))?;

        let model = student_profiles::ActiveModel {
            user_id: Set(user.id),
            roll: Set(profile.roll_number),
            class_name: Set(profile.class_name),
            fee: Set(profile.fee),
            mobile: Set(profile.mobile),
            status: Set(profile.status.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(insert_error("创建学生档案失败"))?;

        txn.commit()
            .await
            .map_err(db_error("提交事务失败"))?;

        Ok(into_detail(model, user))
    }

    /// 通过档案 ID 获取学生
    pub async fn get_student_by_id_impl(&self, id: i64) -> Result<Option<StudentDetail>> {
        let result = StudentProfiles::find_by_id(id)
            .find_also_related(Users)
            .one(&self.db)
            .await
            .map_err(db_error("查询学生失败"))?;

        Ok(result.and_then(|(profile, user)| user.map(|u| into_detail(profile, u))))
    }

    /// 通过账号 ID 获取学生
    pub async fn get_student_by_user_id_impl(&self, user_id: i64) -> Result<Option<StudentDetail>> {
        let result = StudentProfiles::find()
            .filter(student_profiles::Column::UserId.eq(user_id))
            .find_also_related(Users)
            .one(&self.db)
            .await
            .map_err(db_error("查询学生失败"))?;

        Ok(result.and_then(|(profile, user)| user.map(|u| into_detail(profile, u))))
    }

    /// 分页列出学生
    pub async fn list_students_with_pagination_impl(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = StudentProfiles::find();

        if let Some(ref class_name) = query.class_name {
            select = select.filter(student_profiles::Column::ClassName.eq(class_name));
        }

        if let Some(ref status) = query.status {
            select = select.filter(student_profiles::Column::Status.eq(status.to_string()));
        }

        // 搜索账号名/姓名/邮箱
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                student_profiles::Column::UserId.in_subquery(
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

        select = select
            .order_by_asc(student_profiles::Column::ClassName)
            .order_by_asc(student_profiles::Column::Roll);

        let paginator = select.find_also_related(Users).paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(db_error("查询学生总数失败"))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(db_error("查询学生页数失败"))?;
        let rows = paginator
            .fetch_page(page - 1)
            .await
            .map_err(db_error("查询学生列表失败"))?;

        Ok(StudentListResponse {
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

    /// 更新学生档案
    pub async fn update_student_profile_impl(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<StudentDetail>> {
        let existing = self.get_student_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = student_profiles::ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(class_name) = update.class_name {
            model.class_name = Set(class_name);
        }

        if let Some(roll_number) = update.roll_number {
            model.roll = Set(roll_number);
        }

        if let Some(fee) = update.fee {
            model.fee = Set(Some(fee));
        }

        if let Some(mobile) = update.mobile {
            model.mobile = Set(Some(mobile));
        }

        model
            .update(&self.db)
            .await
            .map_err(db_error("更新学生档案失败"))?;

        self.get_student_by_id_impl(id).await
    }

    /// 设置档案状态（审批）
    pub async fn set_student_status_impl(&self, id: i64, status: ProfileStatus) -> Result<bool> {
        let now = chrono::Utc::now().timestamp();

        let result = StudentProfiles::update_many()
            .col_expr(
                student_profiles::Column::Status,
                sea_orm::sea_query::Expr::value(status.to_string()),
            )
            .col_expr(
                student_profiles::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(now),
            )
            .filter(student_profiles::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(db_error("更新学生状态失败"))?;

        Ok(result.rows_affected > 0)
    }

    /// 删除学生（连同账号，事务内）
    pub async fn delete_student_impl(&self, id: i64) -> Result<bool> {
        let Some(detail) = self.get_student_by_id_impl(id).await? else {
            return Ok(false);
        };

        let txn = self
            .db
            .begin()
            .await
            .map_err(db_error("开启事务失败"))?;

        StudentProfiles::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(db_error("删除学生档案失败"))?;

        Users::delete_by_id(detail.profile.user_id)
            .exec(&txn)
            .await
            .map_err(db_error("删除学生账号失败"))?;

        txn.commit()
            .await
            .map_err(db_error("提交事务失败"))?;

        Ok(true)
    }

    /// 学生统计
    pub async fn student_statistics_impl(&self) -> Result<StudentStatisticsResponse> {
        let total = StudentProfiles::find()
            .count(&self.db)
            .await
            .map_err(db_error("统计学生数量失败"))?;

        let active = StudentProfiles::find()
            .filter(student_profiles::Column::Status.eq(ProfileStatus::Active.to_string()))
            .count(&self.db)
            .await
            .map_err(db_error("统计学生数量失败"))?;

        let pending = StudentProfiles::find()
            .filter(student_profiles::Column::Status.eq(ProfileStatus::Pending.to_string()))
            .count(&self.db)
            .await
            .map_err(db_error("统计学生数量失败"))?;

        // 按班级聚合
        let distribution: Vec<(String, i64)> = StudentProfiles::find()
            .select_only()
            .column(student_profiles::Column::ClassName)
            .column_as(student_profiles::Column::Id.count(), "count")
            .group_by(student_profiles::Column::ClassName)
            .order_by_asc(student_profiles::Column::ClassName)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(db_error("统计班级分布失败"))?;

        Ok(StudentStatisticsResponse {
            total: total as i64,
            active: active as i64,
            pending: pending as i64,
            class_distribution: distribution
                .into_iter()
                .map(|(class_name, count)| ClassCount { class_name, count })
                .collect(),
        })
    }

    /// 某班在读学生（按学号升序）
    pub async fn list_students_by_class_impl(&self, class_name: &str) -> Result<Vec<StudentDetail>> {
        let rows = StudentProfiles::find()
            .filter(student_profiles::Column::ClassName.eq(class_name))
            .filter(student_profiles::Column::Status.eq(ProfileStatus::Active.to_string()))
            .order_by_asc(student_profiles::Column::Roll)
            .find_also_related(Users)
            .all(&self.db)
            .await
            .map_err(db_error("查询班级学生失败"))?;

        Ok(rows
            .into_iter()
            .filter_map(|(profile, user)| user.map(|u| into_detail(profile, u)))
            .collect())
    }
}
