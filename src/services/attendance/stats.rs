use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{AttendanceService, aggregate};
use crate::models::attendance::requests::{
    AttendanceFilter, AttendanceRangeParams, ClasswiseParams,
};
use crate::models::{ApiResponse, ErrorCode};

pub async fn attendance_statistics(
    service: &AttendanceService,
    params: AttendanceRangeParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let filter = AttendanceFilter {
        class_name: Some(params.class_name),
        from: params.from,
        to: params.to,
        ..Default::default()
    };

    match storage.list_attendance(filter).await {
        Ok(records) => {
            let stats = aggregate::aggregate(&records);
            Ok(HttpResponse::Ok().json(ApiResponse::success(stats, "考勤统计")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to compute attendance statistics: {e}"),
            )),
        ),
    }
}

pub async fn classwise_statistics(
    service: &AttendanceService,
    params: ClasswiseParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let filter = AttendanceFilter {
        from: params.from,
        to: params.to,
        ..Default::default()
    };

    match storage.list_attendance(filter).await {
        Ok(records) => {
            let breakdown = aggregate::aggregate_by_class(&records);
            Ok(HttpResponse::Ok().json(ApiResponse::success(breakdown, "班级出勤分布")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to compute classwise statistics: {e}"),
            )),
        ),
    }
}
