use serde::Deserialize;

// 报表输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Pdf,
    Excel,
    Csv,
}

impl ReportFormat {
    pub fn content_type(&self) -> &'static str {
        match self {
            ReportFormat::Pdf => "application/pdf",
            ReportFormat::Excel => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
            ReportFormat::Csv => "text/csv",
        }
    }

    pub fn file_extension(&self) -> &'static str {
        match self {
            ReportFormat::Pdf => "pdf",
            ReportFormat::Excel => "xlsx",
            ReportFormat::Csv => "csv",
        }
    }
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pdf" => Ok(ReportFormat::Pdf),
            "excel" | "xlsx" => Ok(ReportFormat::Excel),
            "csv" => Ok(ReportFormat::Csv),
            _ => Err(format!(
                "Invalid report format '{s}', expected one of: pdf, excel, csv"
            )),
        }
    }
}

// 考勤报表查询参数，format 由服务层解析以返回明确的错误码
#[derive(Debug, Clone, Deserialize)]
pub struct ReportParams {
    pub class_name: String,
    pub from: Option<chrono::NaiveDate>,
    pub to: Option<chrono::NaiveDate>,
    pub format: String,
}
