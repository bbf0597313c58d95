use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::models::{
    ApiResponse, ErrorCode,
    students::requests::{StudentListParams, StudentListQuery},
};

pub async fn list_students(
    service: &StudentService,
    params: StudentListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let query = StudentListQuery {
        page: Some(params.pagination.page),
        size: Some(params.pagination.size),
        class_name: params.class_name,
        status: params.status,
        search: params.search,
    };

    match storage.list_students_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "学生列表"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list students: {e}"),
            )),
        ),
    }
}
