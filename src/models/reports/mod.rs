pub mod requests;

pub use requests::{ReportFormat, ReportParams};
