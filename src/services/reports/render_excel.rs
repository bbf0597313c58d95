//! XLSX 报表：摘要区 + 学号 x 日期 透视区。

use rust_xlsxwriter::{Format, Workbook};

use super::pivot::AttendancePivot;

pub fn render(pivot: &AttendancePivot, period: &str) -> Result<Vec<u8>, String> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    let header_format = Format::new().set_bold();
    let title_format = Format::new().set_bold().set_font_size(14);

    // 标题与区间
    worksheet
        .write_string_with_format(0, 0, format!("考勤报表 - {}", pivot.class_name), &title_format)
        .map_err(|e| e.to_string())?;
    worksheet
        .write_string(1, 0, format!("统计区间: {period}"))
        .map_err(|e| e.to_string())?;

    // 摘要
    worksheet.write_string(3, 0, "记录总数").ok();
    worksheet.write_number(3, 1, pivot.stats.total as f64).ok();
    worksheet.write_string(4, 0, "出勤人次").ok();
    worksheet.write_number(4, 1, pivot.stats.present as f64).ok();
    worksheet.write_string(5, 0, "缺勤人次").ok();
    worksheet.write_number(5, 1, pivot.stats.absent as f64).ok();
    worksheet.write_string(6, 0, "出勤率").ok();
    worksheet
        .write_string(6, 1, format!("{}%", pivot.stats.percentage))
        .ok();

    // 透视表头：学号 + 日期列
    let pivot_start: u32 = 8;
    worksheet
        .write_string_with_format(pivot_start, 0, "学号", &header_format)
        .map_err(|e| e.to_string())?;
    for (col, date) in pivot.dates.iter().enumerate() {
        worksheet
            .write_string_with_format(pivot_start, (col + 1) as u16, date.to_string(), &header_format)
            .map_err(|e| e.to_string())?;
    }

    // 透视数据
    for (row_idx, row) in pivot.rows.iter().enumerate() {
        let row_num = pivot_start + 1 + row_idx as u32;
        worksheet
            .write_number(row_num, 0, row.roll_number as f64)
            .ok();
        for (col, mark) in row.marks.iter().enumerate() {
            worksheet
                .write_string(row_num, (col + 1) as u16, mark.to_string())
                .ok();
        }
    }

    worksheet.set_column_width(0, 10).ok();
    for col in 0..pivot.dates.len() {
        worksheet.set_column_width((col + 1) as u16, 12).ok();
    }

    workbook.save_to_buffer().map_err(|e| e.to_string())
}
