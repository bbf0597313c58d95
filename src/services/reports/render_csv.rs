//! CSV 报表：逐条平铺记录，便于导入其他工具再加工。

use crate::models::attendance::entities::AttendanceRecord;

pub fn render(records: &[AttendanceRecord]) -> Result<Vec<u8>, String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["roll", "date", "class", "status"])
        .map_err(|e| e.to_string())?;

    for record in records {
        wtr.write_record([
            record.roll_number.to_string(),
            record.date.to_string(),
            record.class_name.clone(),
            record.status.to_string(),
        ])
        .map_err(|e| e.to_string())?;
    }

    wtr.into_inner().map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::attendance::entities::AttendanceStatus;

    #[test]
    fn test_render_flat_rows() {
        let records = vec![
            AttendanceRecord {
                id: 1,
                roll_number: 1,
                class_name: "five".to_string(),
                date: "2026-03-02".parse().unwrap(),
                status: AttendanceStatus::Present,
            },
            AttendanceRecord {
                id: 2,
                roll_number: 2,
                class_name: "five".to_string(),
                date: "2026-03-02".parse().unwrap(),
                status: AttendanceStatus::Absent,
            },
        ];

        let data = render(&records).unwrap();
        let text = String::from_utf8(data).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "roll,date,class,status");
        assert_eq!(lines[1], "1,2026-03-02,five,present");
        assert_eq!(lines[2], "2,2026-03-02,five,absent");
    }
}
