use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::students::requests::{
    CreateStudentRequest, StudentListParams, UpdateStudentRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::StudentService;
use crate::utils::SafeIDI64;

// 懒加载的全局 StudentService 实例
static STUDENT_SERVICE: Lazy<StudentService> = Lazy::new(StudentService::new_lazy);

pub async fn list_students(
    req: HttpRequest,
    query: web::Query<StudentListParams>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.list_students(query.into_inner(), &req).await
}

pub async fn create_student(
    req: HttpRequest,
    student_data: web::Json<CreateStudentRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .create_student(student_data.into_inner(), &req)
        .await
}

pub async fn get_student(req: HttpRequest, student_id: SafeIDI64) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.get_student(student_id.0, &req).await
}

pub async fn update_student(
    req: HttpRequest,
    student_id: SafeIDI64,
    update_data: web::Json<UpdateStudentRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .update_student(student_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn approve_student(req: HttpRequest, student_id: SafeIDI64) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.approve_student(student_id.0, &req).await
}

pub async fn delete_student(req: HttpRequest, student_id: SafeIDI64) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.delete_student(student_id.0, &req).await
}

pub async fn student_statistics(req: HttpRequest) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.student_statistics(&req).await
}

pub async fn import_students(req: HttpRequest, payload: Multipart) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.import_students(payload, &req).await
}

// 配置路由
pub fn configure_student_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/students")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    // 列表 - 教务角色
                    .route(
                        web::get()
                            .to(list_students)
                            .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
                    )
                    // 直建 - 仅管理员
                    .route(
                        web::post()
                            .to(create_student)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            )
            .service(
                web::resource("/stats")
                    .route(web::get().to(student_statistics))
                    .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
            )
            // 批量导入名册 - 仅管理员
            .service(
                web::resource("/import")
                    .route(web::post().to(import_students))
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
            )
            .service(
                web::resource("/{id}")
                    .route(
                        web::get()
                            .to(get_student)
                            .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
                    )
                    .route(
                        web::put()
                            .to(update_student)
                            .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_student)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            )
            // 审批待定档案 - 仅管理员
            .service(
                web::resource("/{id}/approve")
                    .route(web::post().to(approve_student))
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
            ),
    );
}
