pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod overdue;
pub mod stats;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::fees::requests::{
    CreateFeePaymentRequest, FeeListParams, UpdateFeePaymentRequest,
};
use crate::storage::Storage;

pub struct FeeService {
    storage: Option<Arc<dyn Storage>>,
}

impl FeeService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        match &self.storage {
            Some(storage) => storage.clone(),
            None => request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .map(|data| data.get_ref().clone())
                .expect("Storage not found in app data"),
        }
    }

    // 开具缴费单
    pub async fn create_fee_payment(
        &self,
        fee_data: CreateFeePaymentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_fee_payment(self, fee_data, request).await
    }

    // 缴费单详情
    pub async fn get_fee_payment(
        &self,
        fee_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_fee_payment(self, fee_id, request).await
    }

    // 缴费单列表
    pub async fn list_fee_payments(
        &self,
        params: FeeListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_fee_payments(self, params, request).await
    }

    // 改单/缴费
    pub async fn update_fee_payment(
        &self,
        fee_id: i64,
        update_data: UpdateFeePaymentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_fee_payment(self, fee_id, update_data, request).await
    }

    // 删除缴费单
    pub async fn delete_fee_payment(
        &self,
        fee_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_fee_payment(self, fee_id, request).await
    }

    // 逾期账单
    pub async fn list_overdue(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        overdue::list_overdue(self, request).await
    }

    // 费用统计
    pub async fn fee_statistics(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        stats::fee_statistics(self, request).await
    }
}
