pub mod create;
pub mod delete;
pub mod get;
pub mod grade;
pub mod list;
pub mod submit;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::assignments::requests::{
    AssignmentListParams, CreateAssignmentRequest, GradeSubmissionRequest,
    SubmitAssignmentRequest,
};
use crate::services::websocket::RealtimeHub;
use crate::storage::Storage;

pub struct AssignmentService {
    storage: Option<Arc<dyn Storage>>,
}

impl AssignmentService {
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

    /// 实时中枢按需取用：测试场景下可以不挂载
    pub(crate) fn get_hub(&self, request: &HttpRequest) -> Option<Arc<RealtimeHub>> {
        request
            .app_data::<actix_web::web::Data<RealtimeHub>>()
            .map(|data| data.clone().into_inner())
    }

    // 布置作业
    pub async fn create_assignment(
        &self,
        assignment_data: CreateAssignmentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_assignment(self, assignment_data, request).await
    }

    // 作业详情
    pub async fn get_assignment(
        &self,
        assignment_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_assignment(self, assignment_id, request).await
    }

    // 作业列表
    pub async fn list_assignments(
        &self,
        params: AssignmentListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_assignments(self, params, request).await
    }

    // 当前学生本班的作业与本人提交状态
    pub async fn my_assignments(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::my_assignments(self, request).await
    }

    // 删除作业
    pub async fn delete_assignment(
        &self,
        assignment_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_assignment(self, assignment_id, request).await
    }

    // 学生提交作业
    pub async fn submit_assignment(
        &self,
        assignment_id: i64,
        submit_data: SubmitAssignmentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        submit::submit_assignment(self, assignment_id, submit_data, request).await
    }

    // 某份作业的全部提交
    pub async fn list_submissions(
        &self,
        assignment_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        grade::list_submissions(self, assignment_id, request).await
    }

    // 批改提交
    pub async fn grade_submission(
        &self,
        assignment_id: i64,
        grade_data: GradeSubmissionRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        grade::grade_submission(self, assignment_id, grade_data, request).await
    }
}
