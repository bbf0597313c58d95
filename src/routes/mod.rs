pub mod assignments;
pub mod attendance;
pub mod auth;
pub mod dashboard;
pub mod events;
pub mod exams;
pub mod fees;
pub mod library;
pub mod notices;
pub mod notifications;
pub mod reports;
pub mod students;
pub mod teachers;
pub mod users;
pub mod websocket;

pub use assignments::configure_assignment_routes;
pub use attendance::configure_attendance_routes;
pub use auth::configure_auth_routes;
pub use dashboard::configure_dashboard_routes;
pub use events::configure_event_routes;
pub use exams::configure_exam_routes;
pub use fees::configure_fee_routes;
pub use library::configure_library_routes;
pub use notices::configure_notice_routes;
pub use notifications::configure_notification_routes;
pub use reports::configure_report_routes;
pub use students::configure_student_routes;
pub use teachers::configure_teacher_routes;
pub use users::configure_user_routes;
pub use websocket::configure_websocket_routes;
