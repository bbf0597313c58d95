use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::Utc;
use tracing::error;

use super::ReportService;
use super::{pivot, render_csv, render_excel, render_pdf};
use crate::models::attendance::requests::AttendanceFilter;
use crate::models::reports::{ReportFormat, ReportParams};
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_class_name;

pub async fn attendance_report(
    service: &ReportService,
    params: ReportParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let format: ReportFormat = match params.format.parse() {
        Ok(format) => format,
        Err(message) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::ReportFormatInvalid,
                message,
            )));
        }
    };

    if let Err(message) = validate_class_name(&params.class_name) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            message,
        )));
    }

    if let (Some(from), Some(to)) = (params.from, params.to)
        && to < from
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Invalid date range: 'to' is before 'from'",
        )));
    }

    let storage = service.get_storage(request);

    let filter = AttendanceFilter {
        class_name: Some(params.class_name.clone()),
        date: None,
        from: params.from,
        to: params.to,
        roll_number: None,
    };
    let records = match storage.list_attendance(filter).await {
        Ok(records) => records,
        Err(e) => {
            error!("查询考勤记录失败: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::ReportGenerationFailed,
                    format!("Report generation failed: {e}"),
                )),
            );
        }
    };

    let period = match (params.from, params.to) {
        (Some(from), Some(to)) => format!("{from} ~ {to}"),
        (Some(from), None) => format!("{from} ~"),
        (None, Some(to)) => format!("~ {to}"),
        (None, None) => "all".to_string(),
    };

    let rendered = match format {
        ReportFormat::Csv => render_csv::render(&records),
        ReportFormat::Excel => {
            let pivot = pivot::build_pivot(&params.class_name, &records);
            render_excel::render(&pivot, &period)
        }
        ReportFormat::Pdf => {
            let pivot = pivot::build_pivot(&params.class_name, &records);
            render_pdf::render(&pivot, &period)
        }
    };

    match rendered {
        Ok(buffer) => {
            let timestamp = Utc::now().format("%Y%m%d_%H%M%S");
            let filename = format!(
                "attendance_{}_{timestamp}.{}",
                params.class_name.replace(' ', "_"),
                format.file_extension()
            );

            Ok(HttpResponse::Ok()
                .content_type(format.content_type())
                .insert_header((
                    "Content-Disposition",
                    format!("attachment; filename=\"{filename}\""),
                ))
                .body(buffer))
        }
        Err(e) => {
            error!("生成考勤报表失败: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::ReportGenerationFailed,
                    format!("Report generation failed: {e}"),
                )),
            )
        }
    }
}
