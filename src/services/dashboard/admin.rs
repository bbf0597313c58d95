use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::DashboardService;
use crate::models::dashboard::responses::AdminDashboardResponse;
use crate::models::events::requests::EventListQuery;
use crate::models::{ApiResponse, ErrorCode};

pub async fn admin_dashboard(
    service: &DashboardService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let student_stats = match storage.student_statistics().await {
        Ok(stats) => stats,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to load student statistics: {e}"),
                )),
            );
        }
    };

    let teacher_stats = match storage.teacher_statistics().await {
        Ok(stats) => stats,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to load teacher statistics: {e}"),
                )),
            );
        }
    };

    let events_query = EventListQuery {
        page: Some(1),
        size: Some(5),
        event_type: None,
        public_only: false,
        starts_after: Some(chrono::Utc::now()),
    };
    let upcoming_events = match storage.list_events(events_query).await {
        Ok(response) => response.items,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to load upcoming events: {e}"),
                )),
            );
        }
    };

    let dashboard = AdminDashboardResponse {
        active_teachers: teacher_stats.active,
        pending_teachers: teacher_stats.pending,
        active_students: student_stats.active,
        pending_students: student_stats.pending,
        upcoming_events,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(dashboard, "管理员仪表盘")))
}
