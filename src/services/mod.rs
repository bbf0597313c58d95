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

pub use assignments::AssignmentService;
pub use attendance::AttendanceService;
pub use auth::AuthService;
pub use dashboard::DashboardService;
pub use events::EventService;
pub use exams::ExamService;
pub use fees::FeeService;
pub use library::LibraryService;
pub use notices::NoticeService;
pub use notifications::NotificationService;
pub use reports::ReportService;
pub use students::StudentService;
pub use teachers::TeacherService;
pub use users::UserService;
