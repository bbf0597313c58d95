/// 验证名册文件的魔术字节是否与扩展名匹配
///
/// 导入只接受 CSV / XLSX / XLS 名册。
///
/// # Arguments
/// * `data` - 文件内容的前几个字节
/// * `extension` - 文件扩展名（包含点号，如 ".xlsx"）
pub fn validate_magic_bytes(data: &[u8], extension: &str) -> bool {
    if data.is_empty() {
        return false;
    }

    match extension.to_lowercase().as_str() {
        // OOXML (ZIP-based)
        ".xlsx" => data.starts_with(&[0x50, 0x4B, 0x03, 0x04]),
        // MS Office 旧格式 (OLE Compound Document)
        ".xls" => data.starts_with(&[0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1]),
        // 文本格式 - 不检查魔术字节
        ".csv" => true,
        // 其他格式一律拒绝
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xlsx_magic() {
        let zip_header = [0x50, 0x4B, 0x03, 0x04, 0x14, 0x00];
        assert!(validate_magic_bytes(&zip_header, ".xlsx"));
        assert!(validate_magic_bytes(&zip_header, ".XLSX"));
        assert!(!validate_magic_bytes(&zip_header, ".xls"));
    }

    #[test]
    fn test_xls_magic() {
        let ole_header = [0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1];
        assert!(validate_magic_bytes(&ole_header, ".xls"));
        assert!(!validate_magic_bytes(&ole_header, ".xlsx"));
    }

    #[test]
    fn test_csv_any_content() {
        assert!(validate_magic_bytes(b"username,roll", ".csv"));
    }

    #[test]
    fn test_empty_and_unknown() {
        assert!(!validate_magic_bytes(&[], ".csv"));
        assert!(!validate_magic_bytes(b"data", ".exe"));
    }
}
