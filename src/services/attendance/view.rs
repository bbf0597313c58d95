use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AttendanceService;
use crate::models::attendance::requests::{AttendanceFilter, AttendanceViewParams};
use crate::models::{ApiResponse, ErrorCode};

pub async fn view_attendance(
    service: &AttendanceService,
    params: AttendanceViewParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let filter = AttendanceFilter {
        class_name: Some(params.class_name),
        date: Some(params.date),
        ..Default::default()
    };

    match storage.list_attendance(filter).await {
        Ok(records) => Ok(HttpResponse::Ok().json(ApiResponse::success(records, "考勤记录"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list attendance: {e}"),
            )),
        ),
    }
}
