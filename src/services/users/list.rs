use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::UserService;
use crate::models::{
    ApiResponse, ErrorCode,
    users::requests::{UserListParams, UserListQuery},
};

pub async fn list_users(
    service: &UserService,
    params: UserListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let query = UserListQuery {
        page: Some(params.pagination.page),
        size: Some(params.pagination.size),
        role: params.role,
        status: params.status,
        search: params.search,
    };

    match storage.list_users_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "用户列表"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list users: {e}"),
            )),
        ),
    }
}
