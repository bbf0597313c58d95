//! 数据模型定义
//!
//! 按业务域拆分：HTTP 请求/响应结构、领域实体与统一响应包装。

pub mod assignments;
pub mod attendance;
pub mod auth;
pub mod common;
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

pub use common::pagination::PaginationInfo;
pub use common::response::ApiResponse;

/// 程序启动时间，用于运行时长统计
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

/// API 业务错误码
///
/// 与 HTTP 状态码解耦：通用段沿用 HTTP 数值，业务段按域分段。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 200,

    // 通用
    BadRequest = 400,
    Unauthorized = 401,
    Forbidden = 403,
    NotFound = 404,
    InternalServerError = 500,

    // 认证与账号 1xxx
    AuthFailed = 1001,
    RegisterFailed = 1002,
    UserNotFound = 1003,
    UserAlreadyExists = 1004,
    UserNameInvalid = 1005,
    UserEmailInvalid = 1006,
    UserEmailAlreadyExists = 1007,
    UserPasswordInvalid = 1008,
    UserUpdateFailed = 1009,
    CanNotDeleteCurrentUser = 1010,

    // 档案与审批 2xxx
    StudentNotFound = 2001,
    StudentAlreadyExists = 2002,
    TeacherNotFound = 2003,
    ProfileNotPending = 2004,
    RollAlreadyTaken = 2005,

    // 考勤 3xxx
    AttendanceRosterInvalid = 3001,
    AttendanceNotFound = 3002,

    // 费用 4xxx
    FeePaymentNotFound = 4001,
    FeePaymentInvalid = 4002,

    // 图书馆 5xxx
    BookNotFound = 5001,
    BookNotAvailable = 5002,
    BookIsbnAlreadyExists = 5003,
    LoanNotFound = 5004,
    LoanAlreadyReturned = 5005,

    // 考试 6xxx
    ExamNotFound = 6001,
    ExamResultInvalid = 6002,
    ExamResultNotFound = 6003,

    // 作业 61xx
    AssignmentNotFound = 6101,
    SubmissionNotFound = 6102,
    SubmissionInvalid = 6103,

    // 通知、公告与事件 7xxx
    NotificationNotFound = 7001,
    EventNotFound = 7101,
    NoticeNotFound = 7201,
    NoticeInvalid = 7202,

    // 批量导入 8xxx
    ImportFileParseFailed = 8001,
    ImportFileMissingColumn = 8002,
    ImportFileDataInvalid = 8003,
    ImportFileTooLarge = 8004,

    // 报表 9xxx
    ReportGenerationFailed = 9001,
    ReportFormatInvalid = 9002,
}
