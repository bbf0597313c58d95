pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod performance;
pub mod results;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::exams::requests::{
    CalculatePerformanceRequest, CreateExamRequest, ExamListParams, RecordResultRequest,
    UpdateExamRequest,
};
use crate::storage::Storage;

pub struct ExamService {
    storage: Option<Arc<dyn Storage>>,
}

impl ExamService {
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

    // 创建考试
    pub async fn create_exam(
        &self,
        exam_data: CreateExamRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_exam(self, exam_data, request).await
    }

    // 考试详情
    pub async fn get_exam(&self, exam_id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        get::get_exam(self, exam_id, request).await
    }

    // 考试列表
    pub async fn list_exams(
        &self,
        params: ExamListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_exams(self, params, request).await
    }

    // 未来 30 天内的考试
    pub async fn upcoming_exams(
        &self,
        class_name: Option<String>,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::upcoming_exams(self, class_name, request).await
    }

    // 更新考试
    pub async fn update_exam(
        &self,
        exam_id: i64,
        update_data: UpdateExamRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_exam(self, exam_id, update_data, request).await
    }

    // 删除考试
    pub async fn delete_exam(
        &self,
        exam_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_exam(self, exam_id, request).await
    }

    // 录入/覆盖成绩
    pub async fn record_result(
        &self,
        exam_id: i64,
        result_data: RecordResultRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        results::record_result(self, exam_id, result_data, request).await
    }

    // 某场考试的全部成绩
    pub async fn list_results_by_exam(
        &self,
        exam_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        results::list_results_by_exam(self, exam_id, request).await
    }

    // 某学生的全部成绩
    pub async fn list_results_by_student(
        &self,
        student_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        results::list_results_by_student(self, student_id, request).await
    }

    // 删除一条成绩
    pub async fn delete_result(
        &self,
        result_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        results::delete_result(self, result_id, request).await
    }

    // 学生成绩汇总
    pub async fn performance_summary(
        &self,
        student_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        results::performance_summary(self, student_id, request).await
    }

    // 学业快照重算
    pub async fn calculate_performance(
        &self,
        student_id: i64,
        calc_data: CalculatePerformanceRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        performance::calculate_performance(self, student_id, calc_data, request).await
    }

    // 学业快照查询
    pub async fn get_performance(
        &self,
        student_id: i64,
        semester: String,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        performance::get_performance(self, student_id, semester, request).await
    }
}
