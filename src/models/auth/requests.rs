use serde::Deserialize;

// 用户登录请求（来自HTTP请求）
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// 用户名或邮箱
    pub username: String,
    /// 密码
    pub password: String,
    /// 是否记住我
    #[serde(default)]
    pub remember_me: bool,
}

// 注册请求：建立账号与待审批的角色档案
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub mobile: Option<String>,
    /// student 或 teacher；管理员账号只能由现有管理员创建
    pub role: String,
    /// 学生注册时必填
    pub class_name: Option<String>,
    pub roll_number: Option<i32>,
    /// 教师注册时可填
    pub salary: Option<i64>,
}
