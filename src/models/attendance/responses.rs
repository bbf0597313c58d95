use serde::Serialize;

// 考勤聚合结果
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AttendanceStats {
    pub total: u64,
    pub present: u64,
    pub absent: u64,
    /// 出勤率，保留两位小数；total 为 0 时为 0
    pub percentage: f64,
}

// 按班级的聚合行
#[derive(Debug, Clone, Serialize)]
pub struct ClasswiseStats {
    pub class_name: String,
    #[serde(flatten)]
    pub stats: AttendanceStats,
}

// 点名响应
#[derive(Debug, Serialize)]
pub struct TakeAttendanceResponse {
    pub class_name: String,
    pub date: chrono::NaiveDate,
    /// 本次写入的记录数
    pub recorded: usize,
}
