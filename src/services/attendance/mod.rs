pub mod aggregate;
pub mod export;
pub mod stats;
pub mod take;
pub mod view;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::attendance::requests::{
    AttendanceRangeParams, AttendanceViewParams, ClasswiseParams, TakeAttendanceRequest,
};
use crate::services::websocket::RealtimeHub;
use crate::storage::Storage;

pub struct AttendanceService {
    storage: Option<Arc<dyn Storage>>,
}

impl AttendanceService {
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

    pub(crate) fn get_hub(&self, request: &HttpRequest) -> Option<Arc<RealtimeHub>> {
        request
            .app_data::<actix_web::web::Data<RealtimeHub>>()
            .map(|data| data.clone().into_inner())
    }

    // 点名：整体替换 (class, date) 的名册
    pub async fn take_attendance(
        &self,
        take_data: TakeAttendanceRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        take::take_attendance(self, take_data, request).await
    }

    // 查看某班某日考勤
    pub async fn view_attendance(
        &self,
        params: AttendanceViewParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        view::view_attendance(self, params, request).await
    }

    // 班级出勤统计（可选日期范围）
    pub async fn attendance_statistics(
        &self,
        params: AttendanceRangeParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        stats::attendance_statistics(self, params, request).await
    }

    // 全校按班级的出勤分布
    pub async fn classwise_statistics(
        &self,
        params: ClasswiseParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        stats::classwise_statistics(self, params, request).await
    }

    // CSV 导出某班某日考勤
    pub async fn export_attendance(
        &self,
        params: AttendanceViewParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        export::export_attendance(self, params, request).await
    }
}
