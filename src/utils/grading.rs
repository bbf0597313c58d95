//! 成绩与罚金的纯计算函数
//!
//! 所有持久化路径（考试成绩保存、学业快照、还书结算）都必须
//! 复用这里的函数，禁止在各处重复实现分数段逻辑。

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, SchoolSystemError};

/// 等级成绩
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "A+")]
    APlus,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "B+")]
    BPlus,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "C")]
    C,
    #[serde(rename = "F")]
    F,
}

impl Grade {
    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::BPlus => "B+",
            Grade::B => "B",
            Grade::C => "C",
            Grade::F => "F",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "A+" => Some(Grade::APlus),
            "A" => Some(Grade::A),
            "B+" => Some(Grade::BPlus),
            "B" => Some(Grade::B),
            "C" => Some(Grade::C),
            "F" => Some(Grade::F),
            _ => None,
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 按百分比计算等级
///
/// 分数段：>=90 A+，>=80 A，>=70 B+，>=60 B，>=50 C，其余 F。
pub fn grade_for_percentage(percentage: f64) -> Grade {
    if percentage >= 90.0 {
        Grade::APlus
    } else if percentage >= 80.0 {
        Grade::A
    } else if percentage >= 70.0 {
        Grade::BPlus
    } else if percentage >= 60.0 {
        Grade::B
    } else if percentage >= 50.0 {
        Grade::C
    } else {
        Grade::F
    }
}

/// 按得分与满分计算等级
///
/// 满分为 0 时分数无定义，返回校验错误而不是产生 Infinity。
pub fn grade_for_marks(marks_obtained: f64, max_marks: f64) -> Result<Grade> {
    if max_marks <= 0.0 {
        return Err(SchoolSystemError::validation(
            "max_marks must be greater than zero",
        ));
    }
    if marks_obtained < 0.0 {
        return Err(SchoolSystemError::validation(
            "marks_obtained must not be negative",
        ));
    }
    if marks_obtained > max_marks {
        return Err(SchoolSystemError::validation(
            "marks_obtained must not exceed max_marks",
        ));
    }
    Ok(grade_for_percentage(marks_obtained / max_marks * 100.0))
}

/// 逾期还书罚金
///
/// 按整天计算，`return_date <= due_date` 时为 0。
pub fn late_fine(due_date: NaiveDate, return_date: NaiveDate, fine_per_day: i64) -> i64 {
    let overdue_days = (return_date - due_date).num_days();
    if overdue_days <= 0 {
        0
    } else {
        overdue_days * fine_per_day
    }
}

/// 出勤率
///
/// total 为 0 时定义为 0，不做除零。
pub fn attendance_percentage(present: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        present as f64 / total as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_grade_boundaries() {
        assert_eq!(grade_for_percentage(90.0), Grade::APlus);
        assert_eq!(grade_for_percentage(89.99), Grade::A);
        assert_eq!(grade_for_percentage(80.0), Grade::A);
        assert_eq!(grade_for_percentage(79.99), Grade::BPlus);
        assert_eq!(grade_for_percentage(70.0), Grade::BPlus);
        assert_eq!(grade_for_percentage(60.0), Grade::B);
        assert_eq!(grade_for_percentage(50.0), Grade::C);
        assert_eq!(grade_for_percentage(49.99), Grade::F);
        assert_eq!(grade_for_percentage(0.0), Grade::F);
        assert_eq!(grade_for_percentage(100.0), Grade::APlus);
    }

    #[test]
    fn test_grade_for_marks() {
        assert_eq!(grade_for_marks(45.0, 50.0).unwrap(), Grade::APlus);
        assert_eq!(grade_for_marks(59.0, 100.0).unwrap(), Grade::C);
        assert_eq!(grade_for_marks(0.0, 100.0).unwrap(), Grade::F);
        assert_eq!(grade_for_marks(100.0, 100.0).unwrap(), Grade::APlus);
    }

    #[test]
    fn test_grade_for_marks_monotonic() {
        let mut last = Grade::F;
        let order = |g: Grade| match g {
            Grade::F => 0,
            Grade::C => 1,
            Grade::B => 2,
            Grade::BPlus => 3,
            Grade::A => 4,
            Grade::APlus => 5,
        };
        for marks in 0..=100 {
            let g = grade_for_marks(marks as f64, 100.0).unwrap();
            assert!(order(g) >= order(last), "grade dropped at {marks} marks");
            last = g;
        }
    }

    #[test]
    fn test_grade_for_marks_zero_max_is_error() {
        assert!(grade_for_marks(10.0, 0.0).is_err());
        assert!(grade_for_marks(0.0, 0.0).is_err());
    }

    #[test]
    fn test_grade_for_marks_out_of_range() {
        assert!(grade_for_marks(-1.0, 100.0).is_err());
        assert!(grade_for_marks(101.0, 100.0).is_err());
    }

    #[test]
    fn test_late_fine_on_time() {
        let due = date(2026, 3, 10);
        assert_eq!(late_fine(due, date(2026, 3, 10), 5), 0);
        assert_eq!(late_fine(due, date(2026, 3, 1), 5), 0);
    }

    #[test]
    fn test_late_fine_overdue() {
        let due = date(2026, 3, 10);
        assert_eq!(late_fine(due, date(2026, 3, 13), 5), 15);
        assert_eq!(late_fine(due, date(2026, 3, 11), 5), 5);
        assert_eq!(late_fine(due, date(2026, 4, 9), 10), 300);
    }

    #[test]
    fn test_attendance_percentage() {
        assert_eq!(attendance_percentage(7, 10), 70.0);
        assert_eq!(attendance_percentage(0, 0), 0.0);
        assert_eq!(attendance_percentage(0, 5), 0.0);
        assert_eq!(attendance_percentage(5, 5), 100.0);
    }

    #[test]
    fn test_grade_roundtrip_strings() {
        for g in [
            Grade::APlus,
            Grade::A,
            Grade::BPlus,
            Grade::B,
            Grade::C,
            Grade::F,
        ] {
            assert_eq!(Grade::parse(g.as_str()), Some(g));
        }
        assert_eq!(Grade::parse("D"), None);
    }
}
