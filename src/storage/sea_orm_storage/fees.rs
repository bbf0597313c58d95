use super::{SeaOrmStorage, db_error};
use crate::entity::fee_payments::{ActiveModel, Column, Entity as FeePayments};
use crate::errors::Result;
use crate::models::{
    PaginationInfo,
    fees::{
        entities::{FeePayment, PaymentStatus},
        requests::{CreateFeePaymentRequest, FeeListQuery, UpdateFeePaymentRequest},
        responses::{FeeListResponse, FeeStatisticsResponse},
    },
};
use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

const DATE_FMT: &str = "%Y-%m-%d";

impl SeaOrmStorage {
    /// 开具缴费单
    pub async fn create_fee_payment_impl(
        &self,
        req: CreateFeePaymentRequest,
    ) -> Result<FeePayment> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            student_id: Set(req.student_profile_id),
            amount: Set(req.amount),
            due_date: Set(req.due_date.format(DATE_FMT).to_string()),
            status: Set(PaymentStatus::Pending.to_string()),
            notes: Set(req.notes),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(db_error("创建缴费单失败"))?;

        Ok(result.into_fee_payment())
    }

    /// 通过 ID 获取缴费单
    pub async fn get_fee_payment_by_id_impl(&self, id: i64) -> Result<Option<FeePayment>> {
        let result = FeePayments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_error("查询缴费单失败"))?;

        Ok(result.map(|m| m.into_fee_payment()))
    }

    /// 分页列出缴费单
    pub async fn list_fee_payments_impl(&self, query: FeeListQuery) -> Result<FeeListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = FeePayments::find();

        if let Some(student_id) = query.student_profile_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }

        if let Some(ref status) = query.status {
            select = select.filter(Column::Status.eq(status.to_string()));
        }

        select = select.order_by_desc(Column::CreatedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator.num_items().await.map_err(db_error("查询缴费单总数失败"))?;
        let pages = paginator.num_pages().await.map_err(db_error("查询缴费单页数失败"))?;
        let rows = paginator.fetch_page(page - 1).await.map_err(db_error("查询缴费单列表失败"))?;

        Ok(FeeListResponse {
            items: rows.into_iter().map(|m| m.into_fee_payment()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新缴费单（缴费、改单）
    pub async fn update_fee_payment_impl(
        &self,
        id: i64,
        update: UpdateFeePaymentRequest,
    ) -> Result<Option<FeePayment>> {
        let existing = self.get_fee_payment_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(id),
            ..Default::default()
        };

        if let Some(status) = update.status {
            model.status = Set(status.to_string());
        }

        if let Some(payment_date) = update.payment_date {
            model.payment_date = Set(Some(payment_date.format(DATE_FMT).to_string()));
        }

        if let Some(payment_method) = update.payment_method {
            model.payment_method = Set(Some(payment_method));
        }

        if let Some(transaction_id) = update.transaction_id {
            model.transaction_id = Set(Some(transaction_id));
        }

        if let Some(notes) = update.notes {
            model.notes = Set(Some(notes));
        }

        model
            .update(&self.db)
            .await
            .map_err(db_error("更新缴费单失败"))?;

        self.get_fee_payment_by_id_impl(id).await
    }

    /// 删除缴费单
    pub async fn delete_fee_payment_impl(&self, id: i64) -> Result<bool> {
        let result = FeePayments::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_error("删除缴费单失败"))?;

        Ok(result.rows_affected > 0)
    }

    /// 逾期未缴账单
    pub async fn list_overdue_fee_payments_impl(
        &self,
        as_of: NaiveDate,
    ) -> Result<Vec<FeePayment>> {
        let rows = FeePayments::find()
            .filter(Column::Status.eq(PaymentStatus::Pending.to_string()))
            .filter(Column::DueDate.lt(as_of.format(DATE_FMT).to_string()))
            .order_by_asc(Column::DueDate)
            .all(&self.db)
            .await
            .map_err(db_error("查询逾期账单失败"))?;

        Ok(rows.into_iter().map(|m| m.into_fee_payment()).collect())
    }

    /// 批量将逾期的 pending 账单翻转为 overdue
    pub async fn mark_fee_payments_overdue_impl(&self, as_of: NaiveDate) -> Result<u64> {
        let result = FeePayments::update_many()
            .col_expr(
                Column::Status,
                sea_orm::sea_query::Expr::value(PaymentStatus::Overdue.to_string()),
            )
            .filter(Column::Status.eq(PaymentStatus::Pending.to_string()))
            .filter(Column::DueDate.lt(as_of.format(DATE_FMT).to_string()))
            .exec(&self.db)
            .await
            .map_err(db_error("标记逾期账单失败"))?;

        Ok(result.rows_affected)
    }

    /// 费用统计
    pub async fn fee_statistics_impl(&self) -> Result<FeeStatisticsResponse> {
        // 已取消的账单不计入
        let rows: Vec<(i64, String)> = FeePayments::find()
            .select_only()
            .column(Column::Amount)
            .column(Column::Status)
            .filter(Column::Status.ne(PaymentStatus::Cancelled.to_string()))
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(db_error("统计费用失败"))?;

        let mut total_amount = 0i64;
        let mut paid_amount = 0i64;
        for (amount, status) in rows {
            total_amount += amount;
            if status == PaymentStatus::Paid.to_string() {
                paid_amount += amount;
            }
        }

        let collection_rate = if total_amount > 0 {
            (paid_amount as f64 / total_amount as f64 * 100.0).round() / 100.0
        } else {
            0.0
        };

        Ok(FeeStatisticsResponse {
            total_amount,
            paid_amount,
            pending_amount: total_amount - paid_amount,
            collection_rate,
        })
    }
}
