//! 用户实体定义

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 用户
///
/// 邮箱全局唯一，作为认证主体（JWT sub）使用
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub name: String,
    /// bcrypt 哈希，不参与序列化
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub registration_date: DateTime<Utc>,
    /// 头像引用（可空）
    #[sqlx(default)]
    pub image_id: Option<i64>,
}
