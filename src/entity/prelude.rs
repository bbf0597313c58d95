pub use super::assignment_submissions::Entity as AssignmentSubmissions;
pub use super::assignments::Entity as Assignments;
pub use super::attendance::Entity as Attendance;
pub use super::book_loans::Entity as BookLoans;
pub use super::exam_results::Entity as ExamResults;
pub use super::exams::Entity as Exams;
pub use super::fee_payments::Entity as FeePayments;
pub use super::library_books::Entity as LibraryBooks;
pub use super::notices::Entity as Notices;
pub use super::notifications::Entity as Notifications;
pub use super::school_events::Entity as SchoolEvents;
pub use super::student_performance::Entity as StudentPerformance;
pub use super::student_profiles::Entity as StudentProfiles;
pub use super::teacher_profiles::Entity as TeacherProfiles;
pub use super::users::Entity as Users;
