use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ExamService;
use crate::models::attendance::entities::AttendanceStatus;
use crate::models::attendance::requests::AttendanceFilter;
use crate::models::exams::requests::CalculatePerformanceRequest;
use crate::models::exams::responses::PerformanceResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::grading::{attendance_percentage, grade_for_percentage};

/// 重算学业快照并落库
///
/// 出勤率 + 平均得分率 + 等级，整体覆盖 (学生, 学期) 的旧快照。
pub async fn calculate_performance(
    service: &ExamService,
    student_id: i64,
    calc_data: CalculatePerformanceRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if calc_data.semester.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Semester must not be empty",
        )));
    }

    let storage = service.get_storage(request);

    let student = match storage.get_student_by_id(student_id).await {
        Ok(Some(detail)) => detail,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::StudentNotFound,
                "Student not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get student: {e}"),
                )),
            );
        }
    };

    // 出勤率按该生在班内的全部记录计算
    let filter = AttendanceFilter {
        class_name: Some(student.profile.class_name.clone()),
        roll_number: Some(student.profile.roll_number),
        ..Default::default()
    };
    let records = match storage.list_attendance(filter).await {
        Ok(records) => records,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to list attendance: {e}"),
                )),
            );
        }
    };
    let present = records
        .iter()
        .filter(|r| r.status == AttendanceStatus::Present)
        .count() as u64;
    let att_pct =
        (attendance_percentage(present, records.len() as u64) * 100.0).round() / 100.0;

    let marks = match storage.list_student_marks(student_id).await {
        Ok(marks) => marks,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to list student marks: {e}"),
                )),
            );
        }
    };
    let average_marks = super::results::average_percentage(&marks);
    let grade = grade_for_percentage(average_marks);

    match storage
        .upsert_performance(
            student_id,
            &calc_data.semester,
            att_pct,
            average_marks,
            grade.as_str(),
        )
        .await
    {
        Ok(performance) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            PerformanceResponse { performance },
            "学业快照已重算",
        ))),
        Err(e) => {
            error!("学业快照重算失败: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to calculate performance: {e}"),
                )),
            )
        }
    }
}

pub async fn get_performance(
    service: &ExamService,
    student_id: i64,
    semester: String,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_performance(student_id, &semester).await {
        Ok(Some(performance)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            PerformanceResponse { performance },
            "学业快照",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotFound,
            "Performance snapshot not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get performance: {e}"),
            )),
        ),
    }
}
