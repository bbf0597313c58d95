pub mod attendance;
pub mod pivot;
pub mod render_csv;
pub mod render_excel;
pub mod render_pdf;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::reports::ReportParams;
use crate::storage::Storage;

/// 考勤报表生成。先把记录透视成 班级 x 日期 矩阵，再按请求的格式渲染。
pub struct ReportService {
    storage: Option<Arc<dyn Storage>>,
}

impl ReportService {
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

    // 生成考勤报表
    pub async fn attendance_report(
        &self,
        params: ReportParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        attendance::attendance_report(self, params, request).await
    }
}
