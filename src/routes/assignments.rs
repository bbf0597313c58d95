use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::assignments::requests::{
    AssignmentListParams, CreateAssignmentRequest, GradeSubmissionRequest,
    SubmitAssignmentRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::AssignmentService;
use crate::utils::SafeIDI64;

// 懒加载的全局 AssignmentService 实例
static ASSIGNMENT_SERVICE: Lazy<AssignmentService> = Lazy::new(AssignmentService::new_lazy);

pub async fn create_assignment(
    req: HttpRequest,
    assignment_data: web::Json<CreateAssignmentRequest>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .create_assignment(assignment_data.into_inner(), &req)
        .await
}

pub async fn get_assignment(
    req: HttpRequest,
    assignment_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE.get_assignment(assignment_id.0, &req).await
}

pub async fn list_assignments(
    req: HttpRequest,
    query: web::Query<AssignmentListParams>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .list_assignments(query.into_inner(), &req)
        .await
}

pub async fn my_assignments(req: HttpRequest) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE.my_assignments(&req).await
}

pub async fn delete_assignment(
    req: HttpRequest,
    assignment_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE.delete_assignment(assignment_id.0, &req).await
}

pub async fn submit_assignment(
    req: HttpRequest,
    assignment_id: SafeIDI64,
    submit_data: web::Json<SubmitAssignmentRequest>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .submit_assignment(assignment_id.0, submit_data.into_inner(), &req)
        .await
}

pub async fn list_submissions(
    req: HttpRequest,
    assignment_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE.list_submissions(assignment_id.0, &req).await
}

pub async fn grade_submission(
    req: HttpRequest,
    assignment_id: SafeIDI64,
    grade_data: web::Json<GradeSubmissionRequest>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .grade_submission(assignment_id.0, grade_data.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_assignment_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/assignments")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    // 列表 - 所有登录用户可查
                    .route(web::get().to(list_assignments))
                    .route(
                        web::post()
                            .to(create_assignment)
                            .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
                    ),
            )
            // 学生视角放在 /{id} 之前，避免路径吞并
            .service(
                web::resource("/mine")
                    .route(web::get().to(my_assignments))
                    .wrap(middlewares::RequireRole::new(&UserRole::Student)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_assignment))
                    .route(
                        web::delete()
                            .to(delete_assignment)
                            .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
                    ),
            )
            .service(
                web::resource("/{id}/submissions")
                    .route(
                        web::get()
                            .to(list_submissions)
                            .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
                    )
                    // 学生提交本班作业（业务层校验班级归属）
                    .route(
                        web::post()
                            .to(submit_assignment)
                            .wrap(middlewares::RequireRole::new(&UserRole::Student)),
                    ),
            )
            .service(
                web::resource("/{id}/grade")
                    .route(
                        web::post()
                            .to(grade_submission)
                            .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
                    ),
            ),
    );
}
