use std::collections::HashSet;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{debug, error};

use super::AttendanceService;
use crate::models::attendance::entities::AttendanceStatus;
use crate::models::attendance::requests::TakeAttendanceRequest;
use crate::models::attendance::responses::TakeAttendanceResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::{validate_class_name, validate_roll_number};

pub async fn take_attendance(
    service: &AttendanceService,
    take_data: TakeAttendanceRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_class_name(&take_data.class_name) {
        return Ok(
            HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, msg))
        );
    }

    // 名册校验：学号必须有效且不重复
    let mut seen = HashSet::new();
    for entry in &take_data.entries {
        if let Err(msg) = validate_roll_number(entry.roll_number) {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::AttendanceRosterInvalid,
                msg,
            )));
        }
        if !seen.insert(entry.roll_number) {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::AttendanceRosterInvalid,
                format!("Duplicate roll number in roster: {}", entry.roll_number),
            )));
        }
    }

    let storage = service.get_storage(request);

    match storage
        .replace_attendance(&take_data.class_name, take_data.date, &take_data.entries)
        .await
    {
        Ok(recorded) => {
            // 点名成功后的考勤广播，尽力而为
            if let Some(hub) = service.get_hub(request) {
                let total = take_data.entries.len() as u64;
                let present = take_data
                    .entries
                    .iter()
                    .filter(|e| e.status == AttendanceStatus::Present)
                    .count() as u64;
                hub.publish_attendance_update(
                    &take_data.class_name,
                    take_data.date,
                    total,
                    present,
                    total - present,
                );
                debug!(
                    "考勤广播: class={} date={} total={}",
                    take_data.class_name, take_data.date, total
                );
            }

            Ok(HttpResponse::Ok().json(ApiResponse::success(
                TakeAttendanceResponse {
                    class_name: take_data.class_name,
                    date: take_data.date,
                    recorded,
                },
                "点名完成",
            )))
        }
        Err(e) => {
            error!("点名失败: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to take attendance: {e}"),
                )),
            )
        }
    }
}
