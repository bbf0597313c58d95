use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TeacherService;
use crate::models::{
    ApiResponse, ErrorCode,
    teachers::requests::{TeacherListParams, TeacherListQuery},
};

pub async fn list_teachers(
    service: &TeacherService,
    params: TeacherListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let query = TeacherListQuery {
        page: Some(params.pagination.page),
        size: Some(params.pagination.size),
        status: params.status,
        search: params.search,
    };

    match storage.list_teachers_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "教师列表"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list teachers: {e}"),
            )),
        ),
    }
}
