//! 中间件模块
//!
//! 提供会话解析（Bearer Token -> 用户）

mod auth;

pub use auth::AuthUser;
