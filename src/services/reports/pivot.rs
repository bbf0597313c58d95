//! 考勤透视表：行是学号（升序），列是日期（升序），单元格是出勤标记。

use chrono::NaiveDate;
use std::collections::{BTreeSet, HashMap};

use crate::models::attendance::entities::AttendanceRecord;
use crate::models::attendance::responses::AttendanceStats;
use crate::services::attendance::aggregate::aggregate;

/// 缺少记录的单元格标记
pub const MISSING_MARK: char = '-';

#[derive(Debug)]
pub struct AttendancePivot {
    pub class_name: String,
    pub dates: Vec<NaiveDate>,
    pub rows: Vec<PivotRow>,
    pub stats: AttendanceStats,
}

#[derive(Debug)]
pub struct PivotRow {
    pub roll_number: i32,
    /// 与 dates 一一对应的标记
    pub marks: Vec<char>,
}

/// 把一个班级在一段时间内的记录透视为矩阵。
/// 记录为空时返回空矩阵，统计全为 0。
pub fn build_pivot(class_name: &str, records: &[AttendanceRecord]) -> AttendancePivot {
    let dates: Vec<NaiveDate> = records
        .iter()
        .map(|r| r.date)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    let rolls: Vec<i32> = records
        .iter()
        .map(|r| r.roll_number)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let mut cells: HashMap<(i32, NaiveDate), char> = HashMap::with_capacity(records.len());
    for record in records {
        cells.insert((record.roll_number, record.date), record.status.as_mark());
    }

    let rows = rolls
        .into_iter()
        .map(|roll_number| PivotRow {
            marks: dates
                .iter()
                .map(|date| {
                    cells
                        .get(&(roll_number, *date))
                        .copied()
                        .unwrap_or(MISSING_MARK)
                })
                .collect(),
            roll_number,
        })
        .collect();

    AttendancePivot {
        class_name: class_name.to_string(),
        dates,
        rows,
        stats: aggregate(records),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::attendance::entities::AttendanceStatus;

    fn record(roll: i32, date: &str, status: AttendanceStatus) -> AttendanceRecord {
        AttendanceRecord {
            id: 0,
            roll_number: roll,
            class_name: "five".to_string(),
            date: date.parse().unwrap(),
            status,
        }
    }

    #[test]
    fn test_build_pivot_orders_rows_and_columns() {
        let records = vec![
            record(2, "2026-03-03", AttendanceStatus::Absent),
            record(1, "2026-03-02", AttendanceStatus::Present),
            record(2, "2026-03-02", AttendanceStatus::Present),
        ];

        let pivot = build_pivot("five", &records);

        assert_eq!(
            pivot.dates,
            vec![
                "2026-03-02".parse::<NaiveDate>().unwrap(),
                "2026-03-03".parse::<NaiveDate>().unwrap(),
            ]
        );
        assert_eq!(pivot.rows.len(), 2);
        assert_eq!(pivot.rows[0].roll_number, 1);
        // 学号 1 在 03-03 没有记录
        assert_eq!(pivot.rows[0].marks, vec!['P', '-']);
        assert_eq!(pivot.rows[1].roll_number, 2);
        assert_eq!(pivot.rows[1].marks, vec!['P', 'A']);
    }

    #[test]
    fn test_build_pivot_stats() {
        let records = vec![
            record(1, "2026-03-02", AttendanceStatus::Present),
            record(2, "2026-03-02", AttendanceStatus::Absent),
        ];

        let pivot = build_pivot("five", &records);

        assert_eq!(pivot.stats.total, 2);
        assert_eq!(pivot.stats.present, 1);
        assert_eq!(pivot.stats.percentage, 50.0);
    }

    #[test]
    fn test_build_pivot_empty() {
        let pivot = build_pivot("five", &[]);

        assert!(pivot.dates.is_empty());
        assert!(pivot.rows.is_empty());
        assert_eq!(pivot.stats.total, 0);
        assert_eq!(pivot.stats.percentage, 0.0);
    }
}
