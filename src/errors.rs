//! 统一错误类型。
//!
//! 宏生成 enum、错误码、类型名与 snake_case 便捷构造函数。

use std::fmt;

macro_rules! school_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum SchoolSystemError {
            $($variant(String),)*
        }

        impl SchoolSystemError {
            pub fn code(&self) -> &'static str {
                match self {
                    $(SchoolSystemError::$variant(_) => $code,)*
                }
            }

            pub fn error_type(&self) -> &'static str {
                match self {
                    $(SchoolSystemError::$variant(_) => $type_name,)*
                }
            }

            pub fn message(&self) -> &str {
                match self {
                    $(SchoolSystemError::$variant(msg) => msg,)*
                }
            }
        }

        paste::paste! {
            impl SchoolSystemError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        SchoolSystemError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

school_errors! {
    CacheConnection("E001", "Cache Connection Error"),
    CachePluginNotFound("E002", "Cache Plugin Not Found"),
    DatabaseConfig("E003", "Database Configuration Error"),
    DatabaseConnection("E004", "Database Connection Error"),
    DatabaseOperation("E005", "Database Operation Error"),
    FileOperation("E006", "File Operation Error"),
    Validation("E007", "Validation Error"),
    NotFound("E008", "Resource Not Found"),
    Serialization("E009", "Serialization Error"),
    DateParse("E010", "Date Parse Error"),
    Authentication("E011", "Authentication Error"),
    Authorization("E012", "Authorization Error"),
    ReportGeneration("E013", "Report Generation Error"),
    MailTransport("E014", "Mail Transport Error"),
    Conflict("E015", "Conflict Error"),
}

impl fmt::Display for SchoolSystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.error_type(), self.message())
    }
}

impl std::error::Error for SchoolSystemError {}

impl From<sea_orm::DbErr> for SchoolSystemError {
    fn from(err: sea_orm::DbErr) -> Self {
        SchoolSystemError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for SchoolSystemError {
    fn from(err: std::io::Error) -> Self {
        SchoolSystemError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for SchoolSystemError {
    fn from(err: serde_json::Error) -> Self {
        SchoolSystemError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for SchoolSystemError {
    fn from(err: chrono::ParseError) -> Self {
        SchoolSystemError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SchoolSystemError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(SchoolSystemError::cache_connection("test").code(), "E001");
        assert_eq!(SchoolSystemError::database_config("test").code(), "E003");
        assert_eq!(SchoolSystemError::validation("test").code(), "E007");
        assert_eq!(SchoolSystemError::report_generation("test").code(), "E013");
        assert_eq!(SchoolSystemError::conflict("test").code(), "E015");
    }

    #[test]
    fn test_conflict_is_distinguishable() {
        let err = SchoolSystemError::conflict("username taken");
        assert!(matches!(err, SchoolSystemError::Conflict(_)));
        assert_eq!(err.error_type(), "Conflict Error");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            SchoolSystemError::validation("test").error_type(),
            "Validation Error"
        );
        assert_eq!(
            SchoolSystemError::mail_transport("test").error_type(),
            "Mail Transport Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = SchoolSystemError::validation("Invalid input");
        assert_eq!(err.message(), "Invalid input");
    }

    #[test]
    fn test_display_includes_type_and_message() {
        let err = SchoolSystemError::not_found("Student profile missing");
        let formatted = err.to_string();
        assert!(formatted.contains("Resource Not Found"));
        assert!(formatted.contains("Student profile missing"));
    }
}
