use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::middlewares;
use crate::models::library::requests::{
    BookListParams, BorrowBookRequest, CreateBookRequest, ReturnBookRequest, UpdateBookRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::LibraryService;
use crate::utils::SafeIDI64;

// 懒加载的全局 LibraryService 实例
static LIBRARY_SERVICE: Lazy<LibraryService> = Lazy::new(LibraryService::new_lazy);

#[derive(Debug, Deserialize)]
pub struct LoanListParams {
    pub borrower_id: Option<i64>,
}

pub async fn create_book(
    req: HttpRequest,
    book_data: web::Json<CreateBookRequest>,
) -> ActixResult<HttpResponse> {
    LIBRARY_SERVICE.create_book(book_data.into_inner(), &req).await
}

pub async fn get_book(req: HttpRequest, book_id: SafeIDI64) -> ActixResult<HttpResponse> {
    LIBRARY_SERVICE.get_book(book_id.0, &req).await
}

pub async fn list_books(
    req: HttpRequest,
    query: web::Query<BookListParams>,
) -> ActixResult<HttpResponse> {
    LIBRARY_SERVICE.list_books(query.into_inner(), &req).await
}

pub async fn update_book(
    req: HttpRequest,
    book_id: SafeIDI64,
    update_data: web::Json<UpdateBookRequest>,
) -> ActixResult<HttpResponse> {
    LIBRARY_SERVICE
        .update_book(book_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_book(req: HttpRequest, book_id: SafeIDI64) -> ActixResult<HttpResponse> {
    LIBRARY_SERVICE.delete_book(book_id.0, &req).await
}

pub async fn borrow_book(
    req: HttpRequest,
    borrow_data: web::Json<BorrowBookRequest>,
) -> ActixResult<HttpResponse> {
    LIBRARY_SERVICE
        .borrow_book(borrow_data.into_inner(), &req)
        .await
}

pub async fn return_book(
    req: HttpRequest,
    loan_id: SafeIDI64,
    return_data: web::Json<ReturnBookRequest>,
) -> ActixResult<HttpResponse> {
    LIBRARY_SERVICE
        .return_book(loan_id.0, return_data.into_inner(), &req)
        .await
}

pub async fn list_loans(
    req: HttpRequest,
    query: web::Query<LoanListParams>,
) -> ActixResult<HttpResponse> {
    LIBRARY_SERVICE.list_loans(query.borrower_id, &req).await
}

// 配置路由
pub fn configure_library_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/library")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("/books")
                    .route(web::get().to(list_books))
                    .route(
                        web::post()
                            .to(create_book)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            )
            .service(
                web::resource("/books/{id}")
                    .route(web::get().to(get_book))
                    .route(
                        web::put()
                            .to(update_book)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_book)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            )
            // 借还 - 教务角色经手
            .service(
                web::resource("/loans")
                    // 借阅记录 - 学生在业务层被限定到自己的记录
                    .route(web::get().to(list_loans))
                    .route(
                        web::post()
                            .to(borrow_book)
                            .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
                    ),
            )
            .service(
                web::resource("/loans/{id}/return")
                    .route(web::post().to(return_book))
                    .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
            ),
    );
}
