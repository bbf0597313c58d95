//! PDF 报表。内置字体只支持 WinAnsi 编码，正文统一用英文。

use printpdf::{BuiltinFont, Mm, PdfDocument};

use super::pivot::AttendancePivot;

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 20.0;
const LINE_HEIGHT_MM: f32 = 7.0;

pub fn render(pivot: &AttendancePivot, period: &str) -> Result<Vec<u8>, String> {
    let (doc, first_page, first_layer) = PdfDocument::new(
        format!("Attendance Report - {}", pivot.class_name),
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Layer 1",
    );
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| e.to_string())?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| e.to_string())?;

    let mut page = first_page;
    let mut layer = doc.get_page(page).get_layer(first_layer);
    let mut y = PAGE_HEIGHT_MM - MARGIN_MM;

    layer.use_text(
        format!("Attendance Report - {}", pivot.class_name),
        16.0,
        Mm(MARGIN_MM),
        Mm(y),
        &bold,
    );
    y -= LINE_HEIGHT_MM * 1.5;
    layer.use_text(format!("Period: {period}"), 11.0, Mm(MARGIN_MM), Mm(y), &font);
    y -= LINE_HEIGHT_MM * 1.5;

    for line in [
        format!("Total records: {}", pivot.stats.total),
        format!("Present: {}", pivot.stats.present),
        format!("Absent: {}", pivot.stats.absent),
        format!("Attendance: {}%", pivot.stats.percentage),
    ] {
        layer.use_text(line, 11.0, Mm(MARGIN_MM), Mm(y), &font);
        y -= LINE_HEIGHT_MM;
    }
    y -= LINE_HEIGHT_MM;

    // 透视表按等宽文本排布，每行一个学号
    let header = std::iter::once("Roll".to_string())
        .chain(pivot.dates.iter().map(|d| d.to_string()))
        .collect::<Vec<_>>()
        .join("  ");
    layer.use_text(header, 10.0, Mm(MARGIN_MM), Mm(y), &bold);
    y -= LINE_HEIGHT_MM;

    for row in &pivot.rows {
        // 满页换新页
        if y < MARGIN_MM {
            let (new_page, new_layer) =
                doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
            page = new_page;
            layer = doc.get_page(page).get_layer(new_layer);
            y = PAGE_HEIGHT_MM - MARGIN_MM;
        }

        let line = std::iter::once(format!("{:<4}", row.roll_number))
            .chain(
                row.marks
                    .iter()
                    .map(|mark| format!("{:<10}", mark)),
            )
            .collect::<Vec<_>>()
            .join("  ");
        layer.use_text(line, 10.0, Mm(MARGIN_MM), Mm(y), &font);
        y -= LINE_HEIGHT_MM;
    }

    doc.save_to_bytes().map_err(|e| e.to_string())
}
