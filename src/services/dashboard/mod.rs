pub mod admin;
pub mod student;
pub mod teacher;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::storage::Storage;

/// 按角色聚合的仪表盘视图。只读，全部数据来自各领域的统计接口。
pub struct DashboardService {
    storage: Option<Arc<dyn Storage>>,
}

impl DashboardService {
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

    pub async fn admin_dashboard(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        admin::admin_dashboard(self, request).await
    }

    pub async fn teacher_dashboard(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        teacher::teacher_dashboard(self, request).await
    }

    pub async fn student_dashboard(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        student::student_dashboard(self, request).await
    }
}
