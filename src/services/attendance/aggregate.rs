//! 考勤聚合
//!
//! 纯函数，统计端点与报表生成共用。

use std::collections::BTreeMap;

use crate::models::attendance::entities::{AttendanceRecord, AttendanceStatus};
use crate::models::attendance::responses::{AttendanceStats, ClasswiseStats};
use crate::utils::grading::attendance_percentage;

/// 聚合一组考勤记录
pub fn aggregate(records: &[AttendanceRecord]) -> AttendanceStats {
    let total = records.len() as u64;
    let present = records
        .iter()
        .filter(|r| r.status == AttendanceStatus::Present)
        .count() as u64;
    let absent = total - present;
    let percentage = (attendance_percentage(present, total) * 100.0).round() / 100.0;

    AttendanceStats {
        total,
        present,
        absent,
        percentage,
    }
}

/// 按班级分组聚合，班级名升序
pub fn aggregate_by_class(records: &[AttendanceRecord]) -> Vec<ClasswiseStats> {
    let mut grouped: BTreeMap<&str, Vec<&AttendanceRecord>> = BTreeMap::new();
    for record in records {
        grouped
            .entry(record.class_name.as_str())
            .or_default()
            .push(record);
    }

    grouped
        .into_iter()
        .map(|(class_name, group)| {
            let owned: Vec<AttendanceRecord> = group.into_iter().cloned().collect();
            ClasswiseStats {
                class_name: class_name.to_string(),
                stats: aggregate(&owned),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(roll: i32, class: &str, status: AttendanceStatus) -> AttendanceRecord {
        AttendanceRecord {
            id: 0,
            roll_number: roll,
            class_name: class.to_string(),
            date: chrono::NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
            status,
        }
    }

    #[test]
    fn test_aggregate_seven_of_ten() {
        let mut records = Vec::new();
        for roll in 1..=7 {
            records.push(record(roll, "five", AttendanceStatus::Present));
        }
        for roll in 8..=10 {
            records.push(record(roll, "five", AttendanceStatus::Absent));
        }
        let stats = aggregate(&records);
        assert_eq!(stats.total, 10);
        assert_eq!(stats.present, 7);
        assert_eq!(stats.absent, 3);
        assert_eq!(stats.percentage, 70.0);
    }

    #[test]
    fn test_aggregate_empty() {
        let stats = aggregate(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.percentage, 0.0);
    }

    #[test]
    fn test_percentage_two_decimals() {
        let records = vec![
            record(1, "five", AttendanceStatus::Present),
            record(2, "five", AttendanceStatus::Present),
            record(3, "five", AttendanceStatus::Absent),
        ];
        // 2/3 = 66.666... -> 66.67
        assert_eq!(aggregate(&records).percentage, 66.67);
    }

    #[test]
    fn test_classwise_grouping() {
        let records = vec![
            record(1, "five", AttendanceStatus::Present),
            record(1, "six", AttendanceStatus::Absent),
            record(2, "five", AttendanceStatus::Present),
        ];
        let grouped = aggregate_by_class(&records);
        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].class_name, "five");
        assert_eq!(grouped[0].stats.total, 2);
        assert_eq!(grouped[1].class_name, "six");
        assert_eq!(grouped[1].stats.percentage, 0.0);
    }
}
