use super::entities::AttendanceStatus;
use serde::Deserialize;

// 点名时的单条名册项
#[derive(Debug, Clone, Deserialize)]
pub struct RosterEntry {
    pub roll_number: i32,
    pub status: AttendanceStatus,
}

// 点名请求：整体替换 (class, date) 下的全部记录
#[derive(Debug, Deserialize)]
pub struct TakeAttendanceRequest {
    pub class_name: String,
    pub date: chrono::NaiveDate,
    pub entries: Vec<RosterEntry>,
}

// 查询某班某日考勤
#[derive(Debug, Deserialize)]
pub struct AttendanceViewParams {
    pub class_name: String,
    pub date: chrono::NaiveDate,
}

// 考勤统计/报表查询：班级 + 可选日期范围
#[derive(Debug, Clone, Deserialize)]
pub struct AttendanceRangeParams {
    pub class_name: String,
    pub from: Option<chrono::NaiveDate>,
    pub to: Option<chrono::NaiveDate>,
}

// 班级维度聚合查询：可选日期范围，跨全部班级
#[derive(Debug, Clone, Deserialize)]
pub struct ClasswiseParams {
    pub from: Option<chrono::NaiveDate>,
    pub to: Option<chrono::NaiveDate>,
}

// 存储层考勤过滤
#[derive(Debug, Clone, Default)]
pub struct AttendanceFilter {
    pub class_name: Option<String>,
    pub date: Option<chrono::NaiveDate>,
    pub from: Option<chrono::NaiveDate>,
    pub to: Option<chrono::NaiveDate>,
    pub roll_number: Option<i32>,
}
