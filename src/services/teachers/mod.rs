pub mod approve;
pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod stats;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::teachers::requests::{
    CreateTeacherRequest, TeacherListParams, UpdateTeacherRequest,
};
use crate::storage::Storage;

pub struct TeacherService {
    storage: Option<Arc<dyn Storage>>,
}

impl TeacherService {
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

    // 获取教师列表
    pub async fn list_teachers(
        &self,
        query: TeacherListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_teachers(self, query, request).await
    }

    // 创建教师（管理员直建，免审批）
    pub async fn create_teacher(
        &self,
        teacher_data: CreateTeacherRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_teacher(self, teacher_data, request).await
    }

    // 根据档案ID获取教师
    pub async fn get_teacher(
        &self,
        teacher_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_teacher(self, teacher_id, request).await
    }

    // 更新教师档案
    pub async fn update_teacher(
        &self,
        teacher_id: i64,
        update_data: UpdateTeacherRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_teacher(self, teacher_id, update_data, request).await
    }

    // 审批待定档案
    pub async fn approve_teacher(
        &self,
        teacher_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        approve::approve_teacher(self, teacher_id, request).await
    }

    // 删除教师（连同账号）
    pub async fn delete_teacher(
        &self,
        teacher_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_teacher(self, teacher_id, request).await
    }

    // 教师统计
    pub async fn teacher_statistics(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        stats::teacher_statistics(self, request).await
    }
}
