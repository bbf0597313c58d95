use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::NoticeService;
use crate::middlewares::RequireJWT;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

/// 删除公告；管理员可删任意，教师只能删自己发布的
pub async fn delete_notice(
    service: &NoticeService,
    notice_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(user) = RequireJWT::extract_user(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Authentication required",
        )));
    };

    let storage = service.get_storage(request);

    let notice = match storage.get_notice_by_id(notice_id).await {
        Ok(Some(notice)) => notice,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::NoticeNotFound,
                "Notice not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get notice: {e}"),
                )),
            );
        }
    };

    if user.role != UserRole::Admin && notice.author_id != user.id {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "Only the author or an admin can delete this notice",
        )));
    }

    match storage.delete_notice(notice_id).await {
        Ok(true) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Notice deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NoticeNotFound,
            "Notice not found",
        ))),
        Err(e) => {
            error!("删除公告失败: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Notice deletion failed: {e}"),
                )),
            )
        }
    }
}
