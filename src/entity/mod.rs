//! SeaORM 数据库实体

pub mod assignment_submissions;
pub mod assignments;
pub mod attendance;
pub mod book_loans;
pub mod exam_results;
pub mod exams;
pub mod fee_payments;
pub mod library_books;
pub mod notices;
pub mod notifications;
pub mod school_events;
pub mod student_performance;
pub mod student_profiles;
pub mod teacher_profiles;
pub mod users;

pub mod prelude;
