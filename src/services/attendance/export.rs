use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::AttendanceService;
use crate::models::attendance::entities::AttendanceRecord;
use crate::models::attendance::requests::{AttendanceFilter, AttendanceViewParams};
use crate::models::{ApiResponse, ErrorCode};

/// CSV 导出某班某日考勤，按学号升序
pub async fn export_attendance(
    service: &AttendanceService,
    params: AttendanceViewParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let filter = AttendanceFilter {
        class_name: Some(params.class_name.clone()),
        date: Some(params.date),
        ..Default::default()
    };

    let records = match storage.list_attendance(filter).await {
        Ok(records) => records,
        Err(e) => {
            error!("导出考勤失败: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to export attendance: {e}"),
                )),
            );
        }
    };

    let csv_bytes = match render_csv(&records) {
        Ok(bytes) => bytes,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::ReportGenerationFailed,
                    format!("CSV generation failed: {e}"),
                )),
            );
        }
    };

    let file_name = format!(
        "attendance_{}_{}.csv",
        params.class_name.replace(' ', "_"),
        params.date
    );

    Ok(HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .insert_header((
            "Content-Disposition",
            format!("attachment; filename=\"{file_name}\""),
        ))
        .body(csv_bytes))
}

fn render_csv(records: &[AttendanceRecord]) -> Result<Vec<u8>, String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(["roll", "class", "date", "status"])
        .map_err(|e| e.to_string())?;

    for record in records {
        writer
            .write_record([
                record.roll_number.to_string(),
                record.class_name.clone(),
                record.date.to_string(),
                record.status.to_string(),
            ])
            .map_err(|e| e.to_string())?;
    }

    writer.into_inner().map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::attendance::entities::AttendanceStatus;

    #[test]
    fn test_render_csv_format() {
        let records = vec![
            AttendanceRecord {
                id: 1,
                roll_number: 1,
                class_name: "five".to_string(),
                date: chrono::NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
                status: AttendanceStatus::Present,
            },
            AttendanceRecord {
                id: 2,
                roll_number: 2,
                class_name: "five".to_string(),
                date: chrono::NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
                status: AttendanceStatus::Absent,
            },
        ];

        let bytes = render_csv(&records).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("roll,class,date,status"));
        assert_eq!(lines.next(), Some("1,five,2026-03-02,present"));
        assert_eq!(lines.next(), Some("2,five,2026-03-02,absent"));
    }

    #[test]
    fn test_render_csv_empty_has_header() {
        let bytes = render_csv(&[]).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(text.trim(), "roll,class,date,status");
    }
}
