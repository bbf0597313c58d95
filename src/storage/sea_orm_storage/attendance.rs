use super::{SeaOrmStorage, db_error};
use crate::entity::attendance::{ActiveModel, Column, Entity as Attendance};
use crate::errors::Result;
use crate::models::attendance::{
    entities::AttendanceRecord,
    requests::{AttendanceFilter, RosterEntry},
};
use chrono::NaiveDate;
use sea_orm::{
    ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

const DATE_FMT: &str = "%Y-%m-%d";

impl SeaOrmStorage {
    /// 点名：事务内整体替换 (class, date) 的记录
    pub async fn replace_attendance_impl(
        &self,
        class_name: &str,
        date: NaiveDate,
        entries: &[RosterEntry],
    ) -> Result<usize> {
        let now = chrono::Utc::now().timestamp();
        let date_str = date.format(DATE_FMT).to_string();

        let txn = self
            .db
            .begin()
            .await
            .map_err(db_error("开启事务失败"))?;

        Attendance::delete_many()
            .filter(Column::ClassName.eq(class_name))
            .filter(Column::Date.eq(date_str.as_str()))
            .exec(&txn)
            .await
            .map_err(db_error("清除旧考勤失败"))?;

        if !entries.is_empty() {
            let models: Vec<ActiveModel> = entries
                .iter()
                .map(|entry| ActiveModel {
                    roll: Set(entry.roll_number),
                    class_name: Set(class_name.to_string()),
                    date: Set(date_str.clone()),
                    status: Set(entry.status.to_string()),
                    created_at: Set(now),
                    ..Default::default()
                })
                .collect();

            Attendance::insert_many(models)
                .exec(&txn)
                .await
                .map_err(db_error("写入考勤记录失败"))?;
        }

        txn.commit()
            .await
            .map_err(db_error("提交事务失败"))?;

        Ok(entries.len())
    }

    /// 按过滤条件列出考勤记录（日期、学号升序）
    pub async fn list_attendance_impl(
        &self,
        filter: AttendanceFilter,
    ) -> Result<Vec<AttendanceRecord>> {
        let mut select = Attendance::find();

        if let Some(ref class_name) = filter.class_name {
            select = select.filter(Column::ClassName.eq(class_name));
        }

        if let Some(date) = filter.date {
            select = select.filter(Column::Date.eq(date.format(DATE_FMT).to_string()));
        }

        // 字符串日期字典序即时间序
        if let Some(from) = filter.from {
            select = select.filter(Column::Date.gte(from.format(DATE_FMT).to_string()));
        }

        if let Some(to) = filter.to {
            select = select.filter(Column::Date.lte(to.format(DATE_FMT).to_string()));
        }

        if let Some(roll) = filter.roll_number {
            select = select.filter(Column::Roll.eq(roll));
        }

        let rows = select
            .order_by_asc(Column::Date)
            .order_by_asc(Column::Roll)
            .all(&self.db)
            .await
            .map_err(db_error("查询考勤记录失败"))?;

        Ok(rows.into_iter().map(|m| m.into_record()).collect())
    }
}
