//! 路径参数安全提取器
//!
//! 在进入处理函数前完成解析与校验，非法参数直接以统一响应体返回 400。

use actix_web::{FromRequest, HttpRequest, HttpResponse, dev::Payload, error::InternalError};
use futures_util::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode};

fn bad_request(message: &str) -> actix_web::Error {
    let response = HttpResponse::BadRequest()
        .json(ApiResponse::<()>::error_empty(ErrorCode::BadRequest, message));
    InternalError::from_response(message.to_string(), response).into()
}

macro_rules! define_safe_i64_extractor {
    ($name:ident, $param:literal) => {
        /// 校验过的正整数路径参数
        pub struct $name(pub i64);

        impl FromRequest for $name {
            type Error = actix_web::Error;
            type Future = Ready<Result<Self, Self::Error>>;

            fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
                let value = req
                    .match_info()
                    .get($param)
                    .and_then(|s| s.parse::<i64>().ok())
                    .filter(|v| *v > 0);
                ready(match value {
                    Some(v) => Ok($name(v)),
                    None => Err(bad_request(concat!("Invalid ", $param, " path parameter"))),
                })
            }
        }
    };
}

define_safe_i64_extractor!(SafeIDI64, "id");
define_safe_i64_extractor!(SafeUserIdI64, "user_id");
define_safe_i64_extractor!(SafeStudentIdI64, "student_id");
define_safe_i64_extractor!(SafeTeacherIdI64, "teacher_id");
define_safe_i64_extractor!(SafeExamIdI64, "exam_id");
define_safe_i64_extractor!(SafeBookIdI64, "book_id");
define_safe_i64_extractor!(SafeLoanIdI64, "loan_id");
define_safe_i64_extractor!(SafeNotificationIdI64, "notification_id");

/// 校验过的班级名路径参数
pub struct SafeClassName(pub String);

impl FromRequest for SafeClassName {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let value = req.match_info().get("class_name").map(str::to_string);
        ready(match value {
            Some(class_name)
                if crate::utils::validate::validate_class_name(&class_name).is_ok() =>
            {
                Ok(SafeClassName(class_name))
            }
            _ => Err(bad_request("Invalid class_name path parameter")),
        })
    }
}
