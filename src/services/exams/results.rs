use std::collections::BTreeMap;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ExamService;
use crate::middlewares::RequireJWT;
use crate::models::exams::requests::RecordResultRequest;
use crate::models::exams::responses::{
    GradeCount, PerformanceSummaryResponse, ResultListResponse,
};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::grading::grade_for_marks;

/// 录入/覆盖一条成绩；等级由成绩计算器在保存前算出
pub async fn record_result(
    service: &ExamService,
    exam_id: i64,
    result_data: RecordResultRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let exam = match storage.get_exam_by_id(exam_id).await {
        Ok(Some(exam)) => exam,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ExamNotFound,
                "Exam not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get exam: {e}"),
                )),
            );
        }
    };

    match storage.get_student_by_id(result_data.student_profile_id).await {
        Ok(Some(_)) => {}
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
    }

    let grade = match grade_for_marks(result_data.marks_obtained as f64, exam.max_marks as f64) {
        Ok(grade) => grade,
        Err(e) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::ExamResultInvalid,
                e.message().to_string(),
            )));
        }
    };

    match storage
        .upsert_exam_result(
            exam_id,
            result_data.student_profile_id,
            result_data.marks_obtained,
            grade.as_str(),
            result_data.remarks,
        )
        .await
    {
        Ok(result) => Ok(HttpResponse::Ok().json(ApiResponse::success(result, "成绩已录入"))),
        Err(e) => {
            error!("录入成绩失败: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to record exam result: {e}"),
                )),
            )
        }
    }
}

pub async fn list_results_by_exam(
    service: &ExamService,
    exam_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_results_by_exam(exam_id).await {
        Ok(items) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(ResultListResponse { items }, "成绩列表")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list exam results: {e}"),
            )),
        ),
    }
}

pub async fn list_results_by_student(
    service: &ExamService,
    student_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Some(response) = forbid_foreign_student(service, student_id, request).await {
        return Ok(response);
    }

    match storage.list_results_by_student(student_id).await {
        Ok(items) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(ResultListResponse { items }, "成绩列表")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list student results: {e}"),
            )),
        ),
    }
}

pub async fn delete_result(
    service: &ExamService,
    result_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_exam_result(result_id).await {
        Ok(true) => Ok(
            HttpResponse::Ok().json(ApiResponse::success_empty("Exam result deleted successfully"))
        ),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ExamResultNotFound,
            "Exam result not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Exam result deletion failed: {e}"),
            )),
        ),
    }
}

/// 学生成绩汇总：平均得分率、场次、等级分布
pub async fn performance_summary(
    service: &ExamService,
    student_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Some(response) = forbid_foreign_student(service, student_id, request).await {
        return Ok(response);
    }

    let results = match storage.list_results_by_student(student_id).await {
        Ok(results) => results,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to list student results: {e}"),
                )),
            );
        }
    };

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

    let average_marks = average_percentage(&marks);

    let mut distribution: BTreeMap<String, i64> = BTreeMap::new();
    for result in &results {
        *distribution.entry(result.grade.clone()).or_insert(0) += 1;
    }
    let grade_distribution = distribution
        .into_iter()
        .map(|(grade, count)| GradeCount { grade, count })
        .collect();

    let summary = PerformanceSummaryResponse {
        student_profile_id: student_id,
        average_marks,
        total_exams: results.len() as i64,
        grade_distribution,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(summary, "成绩汇总")))
}

/// 平均得分率（各科按满分归一），两位小数，无成绩时为 0
pub(crate) fn average_percentage(marks: &[(i32, i32)]) -> f64 {
    let percentages: Vec<f64> = marks
        .iter()
        .filter(|(_, max)| *max > 0)
        .map(|(obtained, max)| *obtained as f64 / *max as f64 * 100.0)
        .collect();

    if percentages.is_empty() {
        return 0.0;
    }

    let avg = percentages.iter().sum::<f64>() / percentages.len() as f64;
    (avg * 100.0).round() / 100.0
}

/// 学生只能访问本人的成绩数据；返回 Some 表示应当直接回复
async fn forbid_foreign_student(
    service: &ExamService,
    student_id: i64,
    request: &HttpRequest,
) -> Option<HttpResponse> {
    let user = RequireJWT::extract_user(request)?;
    if user.role != UserRole::Student {
        return None;
    }

    let storage = service.get_storage(request);
    let own = storage
        .get_student_by_user_id(user.id)
        .await
        .ok()
        .flatten()
        .is_some_and(|detail| detail.profile.id == student_id);

    if own {
        None
    } else {
        Some(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "Students can only view their own results",
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_percentage_empty() {
        assert_eq!(average_percentage(&[]), 0.0);
    }

    #[test]
    fn test_average_percentage_normalized() {
        // 40/50 = 80%, 60/100 = 60% -> 70.0
        assert_eq!(average_percentage(&[(40, 50), (60, 100)]), 70.0);
    }

    #[test]
    fn test_average_percentage_skips_zero_max() {
        assert_eq!(average_percentage(&[(10, 0), (50, 100)]), 50.0);
    }

    #[test]
    fn test_average_percentage_two_decimals() {
        // 1/3 = 33.333... -> 33.33
        assert_eq!(average_percentage(&[(1, 3)]), 33.33);
    }
}
