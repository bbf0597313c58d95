use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::NoticeService;
use crate::middlewares::RequireJWT;
use crate::models::notices::requests::PostNoticeRequest;
use crate::models::{ApiResponse, ErrorCode};

/// 公告正文长度上限
const MAX_NOTICE_LEN: usize = 500;

pub async fn post_notice(
    service: &NoticeService,
    notice_data: PostNoticeRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(user) = RequireJWT::extract_user(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Authentication required",
        )));
    };

    let message = notice_data.message.trim();
    if message.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::NoticeInvalid,
            "Notice message must not be empty",
        )));
    }

    if message.chars().count() > MAX_NOTICE_LEN {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::NoticeInvalid,
            "Notice message is too long",
        )));
    }

    // 发布时固化显示名，后续改名不回溯
    let author_name = if user.full_name.is_empty() {
        user.username.clone()
    } else {
        user.full_name.clone()
    };

    let storage = service.get_storage(request);

    match storage.create_notice(user.id, &author_name, message).await {
        Ok(notice) => Ok(HttpResponse::Created().json(ApiResponse::success(notice, "公告已发布"))),
        Err(e) => {
            error!("发布公告失败: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Notice creation failed: {e}"),
                )),
            )
        }
    }
}
