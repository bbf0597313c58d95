//! 考勤记录实体
//!
//! 日期以 "YYYY-MM-DD" 字符串存储，字典序即时间序。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "attendance")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub roll: i32,
    pub class_name: String,
    pub date: String,
    pub status: String,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_record(self) -> crate::models::attendance::entities::AttendanceRecord {
        use crate::models::attendance::entities::{AttendanceRecord, AttendanceStatus};

        AttendanceRecord {
            id: self.id,
            roll_number: self.roll,
            class_name: self.class_name,
            date: chrono::NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").unwrap_or_default(),
            status: self
                .status
                .parse::<AttendanceStatus>()
                .unwrap_or(AttendanceStatus::Absent),
        }
    }
}
