use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::middlewares;
use crate::models::exams::requests::{
    CalculatePerformanceRequest, CreateExamRequest, ExamListParams, RecordResultRequest,
    UpdateExamRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::ExamService;
use crate::utils::{SafeIDI64, SafeStudentIdI64};

// 懒加载的全局 ExamService 实例
static EXAM_SERVICE: Lazy<ExamService> = Lazy::new(ExamService::new_lazy);

#[derive(Debug, Deserialize)]
pub struct UpcomingParams {
    pub class_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PerformanceParams {
    pub semester: String,
}

pub async fn create_exam(
    req: HttpRequest,
    exam_data: web::Json<CreateExamRequest>,
) -> ActixResult<HttpResponse> {
    EXAM_SERVICE.create_exam(exam_data.into_inner(), &req).await
}

pub async fn get_exam(req: HttpRequest, exam_id: SafeIDI64) -> ActixResult<HttpResponse> {
    EXAM_SERVICE.get_exam(exam_id.0, &req).await
}

pub async fn list_exams(
    req: HttpRequest,
    query: web::Query<ExamListParams>,
) -> ActixResult<HttpResponse> {
    EXAM_SERVICE.list_exams(query.into_inner(), &req).await
}

pub async fn upcoming_exams(
    req: HttpRequest,
    query: web::Query<UpcomingParams>,
) -> ActixResult<HttpResponse> {
    EXAM_SERVICE
        .upcoming_exams(query.into_inner().class_name, &req)
        .await
}

pub async fn update_exam(
    req: HttpRequest,
    exam_id: SafeIDI64,
    update_data: web::Json<UpdateExamRequest>,
) -> ActixResult<HttpResponse> {
    EXAM_SERVICE
        .update_exam(exam_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_exam(req: HttpRequest, exam_id: SafeIDI64) -> ActixResult<HttpResponse> {
    EXAM_SERVICE.delete_exam(exam_id.0, &req).await
}

pub async fn record_result(
    req: HttpRequest,
    exam_id: SafeIDI64,
    result_data: web::Json<RecordResultRequest>,
) -> ActixResult<HttpResponse> {
    EXAM_SERVICE
        .record_result(exam_id.0, result_data.into_inner(), &req)
        .await
}

pub async fn list_results_by_exam(
    req: HttpRequest,
    exam_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    EXAM_SERVICE.list_results_by_exam(exam_id.0, &req).await
}

pub async fn list_results_by_student(
    req: HttpRequest,
    student_id: SafeStudentIdI64,
) -> ActixResult<HttpResponse> {
    EXAM_SERVICE.list_results_by_student(student_id.0, &req).await
}

pub async fn delete_result(req: HttpRequest, result_id: SafeIDI64) -> ActixResult<HttpResponse> {
    EXAM_SERVICE.delete_result(result_id.0, &req).await
}

pub async fn performance_summary(
    req: HttpRequest,
    student_id: SafeStudentIdI64,
) -> ActixResult<HttpResponse> {
    EXAM_SERVICE.performance_summary(student_id.0, &req).await
}

pub async fn calculate_performance(
    req: HttpRequest,
    student_id: SafeStudentIdI64,
    calc_data: web::Json<CalculatePerformanceRequest>,
) -> ActixResult<HttpResponse> {
    EXAM_SERVICE
        .calculate_performance(student_id.0, calc_data.into_inner(), &req)
        .await
}

pub async fn get_performance(
    req: HttpRequest,
    student_id: SafeStudentIdI64,
    query: web::Query<PerformanceParams>,
) -> ActixResult<HttpResponse> {
    EXAM_SERVICE
        .get_performance(student_id.0, query.into_inner().semester, &req)
        .await
}

// 配置路由
pub fn configure_exam_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/exams")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    // 列表 - 所有登录用户可查
                    .route(web::get().to(list_exams))
                    .route(
                        web::post()
                            .to(create_exam)
                            .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
                    ),
            )
            .service(web::resource("/upcoming").route(web::get().to(upcoming_exams)))
            // 成绩与学业快照按学生维度的路由放在 /{exam_id} 之前，避免路径吞并
            .service(
                web::resource("/results/student/{student_id}")
                    // 学生只能查自己的成绩（业务层校验）
                    .route(web::get().to(list_results_by_student)),
            )
            .service(
                web::resource("/results/{id}")
                    .route(web::delete().to(delete_result))
                    .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
            )
            .service(
                web::resource("/performance/{student_id}")
                    .route(web::get().to(performance_summary)),
            )
            .service(
                web::resource("/performance/{student_id}/snapshot")
                    .route(web::get().to(get_performance))
                    .route(
                        web::post()
                            .to(calculate_performance)
                            .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
                    ),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_exam))
                    .route(
                        web::put()
                            .to(update_exam)
                            .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_exam)
                            .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
                    ),
            )
            .service(
                web::resource("/{id}/results")
                    .route(
                        web::get()
                            .to(list_results_by_exam)
                            .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
                    )
                    .route(
                        web::post()
                            .to(record_result)
                            .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
                    ),
            ),
    );
}
