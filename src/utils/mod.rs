pub mod extractor;
pub mod file_magic;
pub mod grading;
pub mod jwt;
pub mod mailer;
pub mod parameter_error_handler;
pub mod password;
pub mod sql;
pub mod validate;

pub use extractor::{
    SafeBookIdI64, SafeClassName, SafeExamIdI64, SafeIDI64, SafeLoanIdI64, SafeNotificationIdI64,
    SafeStudentIdI64, SafeTeacherIdI64, SafeUserIdI64,
};
pub use file_magic::validate_magic_bytes;
pub use parameter_error_handler::json_error_handler;
pub use parameter_error_handler::query_error_handler;
pub use sql::escape_like_pattern;
