//! 请求 DTO 定义
//!
//! 所有 REST API 的请求参数和请求体结构

use serde::Deserialize;
use validator::Validate;

/// 注册用户请求
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(email(message = "邮箱格式不正确"))]
    pub email: String,
    #[validate(length(min = 1, max = 128, message = "密码长度必须在 1-128 之间"))]
    pub password: String,
    #[validate(length(min = 1, max = 100, message = "姓名长度必须在 1-100 之间"))]
    pub name: String,
}

/// 登录表单（OAuth2 密码模式，form-encoded）
///
/// username 字段承载邮箱
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// 游戏分数上报请求
#[derive(Debug, Deserialize, Validate)]
pub struct GameScoreRequest {
    pub score: i32,
    #[validate(length(min = 1, max = 50, message = "难度标签长度必须在 1-50 之间"))]
    pub difficulty: String,
    /// 自由格式的游戏参数串
    #[validate(length(max = 500, message = "参数串不能超过 500 字符"))]
    pub parameters: String,
}

/// 分页查询参数
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    20
}
