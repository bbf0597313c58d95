use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ExamService;
use crate::models::exams::requests::{ExamListParams, ExamListQuery};
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_exams(
    service: &ExamService,
    params: ExamListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let query = ExamListQuery {
        page: Some(params.pagination.page),
        size: Some(params.pagination.size),
        class_name: params.class_name,
        exam_type: params.exam_type,
    };

    match storage.list_exams(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "考试列表"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list exams: {e}"),
            )),
        ),
    }
}

pub async fn upcoming_exams(
    service: &ExamService,
    class_name: Option<String>,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let now = chrono::Utc::now();
    let until = now + chrono::Duration::days(30);

    match storage
        .list_exams_between(now, until, class_name.as_deref())
        .await
    {
        Ok(exams) => Ok(HttpResponse::Ok().json(ApiResponse::success(exams, "近期考试"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list upcoming exams: {e}"),
            )),
        ),
    }
}
