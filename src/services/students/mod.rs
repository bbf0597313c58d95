pub mod approve;
pub mod create;
pub mod delete;
pub mod get;
pub mod import;
pub mod list;
pub mod stats;
pub mod update;

use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::students::requests::{
    CreateStudentRequest, StudentListParams, UpdateStudentRequest,
};
use crate::storage::Storage;

pub struct StudentService {
    storage: Option<Arc<dyn Storage>>,
}

impl StudentService {
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

    // 获取学生列表
    pub async fn list_students(
        &self,
        query: StudentListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_students(self, query, request).await
    }

    // 创建学生（管理员直建，免审批）
    pub async fn create_student(
        &self,
        student_data: CreateStudentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_student(self, student_data, request).await
    }

    // 根据档案ID获取学生
    pub async fn get_student(
        &self,
        student_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_student(self, student_id, request).await
    }

    // 更新学生档案
    pub async fn update_student(
        &self,
        student_id: i64,
        update_data: UpdateStudentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_student(self, student_id, update_data, request).await
    }

    // 审批待定档案
    pub async fn approve_student(
        &self,
        student_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        approve::approve_student(self, student_id, request).await
    }

    // 删除学生（连同账号）
    pub async fn delete_student(
        &self,
        student_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_student(self, student_id, request).await
    }

    // 学生统计
    pub async fn student_statistics(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        stats::student_statistics(self, request).await
    }

    // 批量导入学生名册
    pub async fn import_students(
        &self,
        payload: Multipart,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        import::import_students(self, payload, request).await
    }
}
