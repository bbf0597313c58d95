//! 学生名册批量导入服务

use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use calamine::{Reader, Xlsx};
use futures_util::StreamExt;
use std::io::Cursor;
use tracing::error;

use super::StudentService;
use crate::errors::SchoolSystemError;
use crate::models::students::entities::ProfileStatus;
use crate::models::students::requests::NewStudentProfile;
use crate::models::students::responses::{ImportRowError, ImportStudentsResponse};
use crate::models::users::entities::UserRole;
use crate::models::users::requests::CreateUserRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::file_magic::validate_magic_bytes;
use crate::utils::password::hash_password;
use crate::utils::validate::{
    validate_class_name, validate_email, validate_password_simple, validate_roll_number,
    validate_username,
};

const MAX_IMPORT_ROWS: usize = 1000;
const MAX_IMPORT_BYTES: usize = 5 * 1024 * 1024;

/// 导入解析错误
enum ImportParseError {
    MissingColumn(String),
    ParseFailed(String),
    EmptyFile,
}

impl ImportParseError {
    fn error_code(&self) -> ErrorCode {
        match self {
            Self::MissingColumn(_) => ErrorCode::ImportFileMissingColumn,
            Self::ParseFailed(_) => ErrorCode::ImportFileParseFailed,
            Self::EmptyFile => ErrorCode::ImportFileDataInvalid,
        }
    }

    fn message(&self) -> String {
        match self {
            Self::MissingColumn(col) => format!("缺少必需列: {col}"),
            Self::ParseFailed(msg) => msg.clone(),
            Self::EmptyFile => "文件中没有数据".to_string(),
        }
    }
}

/// 名册行数据
#[derive(Debug, Clone)]
struct RosterRow {
    row_num: usize,
    username: String,
    email: String,
    password: String,
    full_name: String,
    class_name: String,
    roll_number: String,
    fee: Option<String>,
    mobile: Option<String>,
}

/// 导入学生：行级错误累积，不中断整批
pub async fn import_students(
    service: &StudentService,
    mut payload: Multipart,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 读取文件内容
    let (file_bytes, file_name) = match read_file_from_multipart(&mut payload).await {
        Ok(result) => result,
        Err(e) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::ImportFileParseFailed,
                format!("文件读取失败: {e}"),
            )));
        }
    };

    if file_bytes.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ImportFileDataInvalid,
            "文件内容为空",
        )));
    }

    if file_bytes.len() > MAX_IMPORT_BYTES {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ImportFileTooLarge,
            "文件超过 5 MB 限制",
        )));
    }

    // 扩展名与魔术字节必须一致
    let extension = file_name
        .rfind('.')
        .map(|idx| file_name[idx..].to_string())
        .unwrap_or_default();
    if !validate_magic_bytes(&file_bytes, &extension) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ImportFileParseFailed,
            "文件类型与内容不匹配，仅支持 CSV / XLSX",
        )));
    }

    let rows = if extension.eq_ignore_ascii_case(".xlsx") {
        match parse_xlsx(&file_bytes) {
            Ok(rows) => rows,
            Err(e) => {
                return Ok(HttpResponse::BadRequest()
                    .json(ApiResponse::error_empty(e.error_code(), e.message())));
            }
        }
    } else {
        match parse_csv(&file_bytes) {
            Ok(rows) => rows,
            Err(e) => {
                return Ok(HttpResponse::BadRequest()
                    .json(ApiResponse::error_empty(e.error_code(), e.message())));
            }
        }
    };

    if rows.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ImportFileDataInvalid,
            "文件中没有数据行",
        )));
    }

    if rows.len() > MAX_IMPORT_ROWS {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ImportFileDataInvalid,
            "单次导入最多支持 1000 行",
        )));
    }

    let mut errors: Vec<ImportRowError> = Vec::new();
    let mut imported_count = 0usize;

    for row in rows {
        let parsed = match validate_row(&row) {
            Ok(parsed) => parsed,
            Err(mut row_errors) => {
                errors.append(&mut row_errors);
                continue;
            }
        };

        // 哈希密码（spawn_blocking 避免阻塞）
        let password = row.password.clone();
        let hashed = match tokio::task::spawn_blocking(move || hash_password(&password)).await {
            Ok(Ok(hash)) => hash,
            Ok(Err(e)) => {
                errors.push(ImportRowError {
                    row: row.row_num,
                    field: "password".to_string(),
                    message: format!("密码哈希失败: {e}"),
                });
                continue;
            }
            Err(e) => {
                errors.push(ImportRowError {
                    row: row.row_num,
                    field: "password".to_string(),
                    message: format!("密码处理失败: {e}"),
                });
                continue;
            }
        };

        let account = CreateUserRequest {
            username: row.username.clone(),
            email: row.email.clone(),
            password: hashed,
            role: UserRole::Student,
            full_name: row.full_name.clone(),
            mobile: row.mobile.clone(),
        };

        let profile = NewStudentProfile {
            class_name: row.class_name.clone(),
            roll_number: parsed.roll_number,
            fee: parsed.fee,
            mobile: row.mobile.clone(),
            status: ProfileStatus::Active,
        };

        match storage.create_student_with_account(account, profile).await {
            Ok(_) => imported_count += 1,
            Err(e) => {
                // 存储层把唯一约束冲突上抛为 Conflict，按行级错误处理
                if matches!(e, SchoolSystemError::Conflict(_)) {
                    errors.push(ImportRowError {
                        row: row.row_num,
                        field: "username".to_string(),
                        message: "用户名或邮箱已存在".to_string(),
                    });
                } else {
                    error!("导入学生失败 (行 {}): {}", row.row_num, e);
                    errors.push(ImportRowError {
                        row: row.row_num,
                        field: "".to_string(),
                        message: format!("创建失败: {e}"),
                    });
                }
            }
        }
    }

    let response = ImportStudentsResponse {
        imported_count,
        errors,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "导入完成")))
}

/// 通过行级校验后的数值字段
struct ParsedFields {
    roll_number: i32,
    fee: Option<i64>,
}

async fn read_file_from_multipart(payload: &mut Multipart) -> Result<(Vec<u8>, String), String> {
    let mut file_bytes = Vec::new();
    let mut file_name = String::new();

    while let Some(item) = payload.next().await {
        let mut field = item.map_err(|e| format!("读取字段失败: {e}"))?;

        if field.name().map(|n| n == "file").unwrap_or(false) {
            if let Some(content_disposition) = field.content_disposition() {
                file_name = content_disposition
                    .get_filename()
                    .unwrap_or("roster.csv")
                    .to_string();
            }

            while let Some(chunk) = field.next().await {
                let data = chunk.map_err(|e| format!("读取数据失败: {e}"))?;
                file_bytes.extend_from_slice(&data);
            }
        }
    }

    if file_bytes.is_empty() {
        return Err("未找到文件字段".to_string());
    }

    Ok((file_bytes, file_name))
}

fn required_column(
    header_map: &std::collections::HashMap<String, usize>,
    name: &str,
) -> Result<usize, ImportParseError> {
    header_map
        .get(name)
        .copied()
        .ok_or_else(|| ImportParseError::MissingColumn(name.to_string()))
}

fn parse_csv(data: &[u8]) -> Result<Vec<RosterRow>, ImportParseError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(Cursor::new(data));

    let headers = rdr
        .headers()
        .map_err(|e| ImportParseError::ParseFailed(format!("读取表头失败: {e}")))?;
    let header_map: std::collections::HashMap<_, _> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| (h.trim().to_lowercase(), i))
        .collect();

    let username_idx = required_column(&header_map, "username")?;
    let email_idx = required_column(&header_map, "email")?;
    let password_idx = required_column(&header_map, "password")?;
    let full_name_idx = required_column(&header_map, "full_name")?;
    let class_name_idx = required_column(&header_map, "class_name")?;
    let roll_number_idx = required_column(&header_map, "roll_number")?;
    let fee_idx = header_map.get("fee").copied();
    let mobile_idx = header_map.get("mobile").copied();

    let mut rows = Vec::new();

    for (row_num, result) in rdr.records().enumerate() {
        let record = result.map_err(|e| {
            ImportParseError::ParseFailed(format!("第 {} 行解析失败: {e}", row_num + 1))
        })?;

        let get_cell = |idx: usize| -> String { record.get(idx).unwrap_or("").trim().to_string() };
        let get_optional =
            |idx: Option<usize>| -> Option<String> { idx.map(get_cell).filter(|s| !s.is_empty()) };

        rows.push(RosterRow {
            // 数据行号从 1 开始（不含表头）
            row_num: row_num + 1,
            username: get_cell(username_idx),
            email: get_cell(email_idx),
            password: get_cell(password_idx),
            full_name: get_cell(full_name_idx),
            class_name: get_cell(class_name_idx),
            roll_number: get_cell(roll_number_idx),
            fee: get_optional(fee_idx),
            mobile: get_optional(mobile_idx),
        });
    }

    Ok(rows)
}

fn parse_xlsx(data: &[u8]) -> Result<Vec<RosterRow>, ImportParseError> {
    let cursor = Cursor::new(data);
    let mut workbook: Xlsx<_> = Xlsx::new(cursor)
        .map_err(|e| ImportParseError::ParseFailed(format!("打开 XLSX 失败: {e}")))?;

    let sheet_names = workbook.sheet_names().to_vec();
    let sheet_name = sheet_names
        .first()
        .ok_or_else(|| ImportParseError::ParseFailed("工作簿中没有工作表".to_string()))?;

    let range = workbook
        .worksheet_range(sheet_name)
        .map_err(|e| ImportParseError::ParseFailed(format!("读取工作表失败: {e}")))?;

    let mut rows_iter = range.rows();

    let header_row = rows_iter.next().ok_or(ImportParseError::EmptyFile)?;
    let header_map: std::collections::HashMap<_, _> = header_row
        .iter()
        .enumerate()
        .map(|(i, cell)| (cell.to_string().trim().to_lowercase(), i))
        .collect();

    let username_idx = required_column(&header_map, "username")?;
    let email_idx = required_column(&header_map, "email")?;
    let password_idx = required_column(&header_map, "password")?;
    let full_name_idx = required_column(&header_map, "full_name")?;
    let class_name_idx = required_column(&header_map, "class_name")?;
    let roll_number_idx = required_column(&header_map, "roll_number")?;
    let fee_idx = header_map.get("fee").copied();
    let mobile_idx = header_map.get("mobile").copied();

    let mut rows = Vec::new();

    for (row_num, row) in rows_iter.enumerate() {
        let get_cell = |idx: usize| -> String {
            row.get(idx)
                .map(|c| c.to_string().trim().to_string())
                .unwrap_or_default()
        };
        let get_optional =
            |idx: Option<usize>| -> Option<String> { idx.map(get_cell).filter(|s| !s.is_empty()) };

        rows.push(RosterRow {
            row_num: row_num + 1,
            username: get_cell(username_idx),
            email: get_cell(email_idx),
            password: get_cell(password_idx),
            full_name: get_cell(full_name_idx),
            class_name: get_cell(class_name_idx),
            roll_number: get_cell(roll_number_idx),
            fee: get_optional(fee_idx),
            mobile: get_optional(mobile_idx),
        });
    }

    Ok(rows)
}

fn validate_row(row: &RosterRow) -> Result<ParsedFields, Vec<ImportRowError>> {
    let mut errors = Vec::new();

    if let Err(msg) = validate_username(&row.username) {
        errors.push(ImportRowError {
            row: row.row_num,
            field: "username".to_string(),
            message: msg.to_string(),
        });
    }

    if let Err(msg) = validate_email(&row.email) {
        errors.push(ImportRowError {
            row: row.row_num,
            field: "email".to_string(),
            message: msg.to_string(),
        });
    }

    if let Err(msg) = validate_password_simple(&row.password) {
        errors.push(ImportRowError {
            row: row.row_num,
            field: "password".to_string(),
            message: msg,
        });
    }

    if row.full_name.is_empty() {
        errors.push(ImportRowError {
            row: row.row_num,
            field: "full_name".to_string(),
            message: "姓名不能为空".to_string(),
        });
    }

    if let Err(msg) = validate_class_name(&row.class_name) {
        errors.push(ImportRowError {
            row: row.row_num,
            field: "class_name".to_string(),
            message: msg.to_string(),
        });
    }

    // XLSX 数字单元格会带 ".0" 后缀
    let roll_number = match row
        .roll_number
        .trim_end_matches(".0")
        .parse::<i32>()
        .map_err(|_| "学号必须为正整数")
        .and_then(|n| validate_roll_number(n).map(|_| n))
    {
        Ok(n) => n,
        Err(msg) => {
            errors.push(ImportRowError {
                row: row.row_num,
                field: "roll_number".to_string(),
                message: msg.to_string(),
            });
            0
        }
    };

    let fee = match &row.fee {
        Some(raw) => match raw.trim_end_matches(".0").parse::<i64>() {
            Ok(v) if v >= 0 => Some(v),
            _ => {
                errors.push(ImportRowError {
                    row: row.row_num,
                    field: "fee".to_string(),
                    message: "费用必须为非负整数".to_string(),
                });
                None
            }
        },
        None => None,
    };

    if errors.is_empty() {
        Ok(ParsedFields { roll_number, fee })
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(username: &str, roll: &str) -> RosterRow {
        RosterRow {
            row_num: 1,
            username: username.to_string(),
            email: "student@school.edu".to_string(),
            password: "SecurePass123".to_string(),
            full_name: "Test Student".to_string(),
            class_name: "Grade 10-A".to_string(),
            roll_number: roll.to_string(),
            fee: None,
            mobile: None,
        }
    }

    #[test]
    fn test_parse_csv_roster() {
        let data = b"username,email,password,full_name,class_name,roll_number,fee\n\
            stu_alice,alice@school.edu,SecurePass123,Alice,Grade 10-A,1,12000\n";
        let rows = parse_csv(data).unwrap_or_default();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].username, "stu_alice");
        assert_eq!(rows[0].fee.as_deref(), Some("12000"));
    }

    #[test]
    fn test_parse_csv_missing_column() {
        let data = b"username,email,password\nstu_alice,alice@school.edu,SecurePass123\n";
        let err = parse_csv(data).err();
        assert!(matches!(err, Some(ImportParseError::MissingColumn(col)) if col == "full_name"));
    }

    #[test]
    fn test_validate_row_ok() {
        let parsed = validate_row(&row("stu_alice", "7")).ok();
        assert_eq!(parsed.map(|p| p.roll_number), Some(7));
    }

    #[test]
    fn test_validate_row_xlsx_numeric_suffix() {
        let parsed = validate_row(&row("stu_alice", "7.0")).ok();
        assert_eq!(parsed.map(|p| p.roll_number), Some(7));
    }

    #[test]
    fn test_validate_row_collects_errors() {
        let mut bad = row("ab", "0");
        bad.email = "not-an-email".to_string();
        let errors = validate_row(&bad).err().unwrap_or_default();
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert!(fields.contains(&"username"));
        assert!(fields.contains(&"email"));
        assert!(fields.contains(&"roll_number"));
    }
}
