//! 学习进度实体定义

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 学习进度
///
/// User 与 Character 的关联实体，(user_id, character_id) 唯一，
/// 由数据库约束 uq_progress_user_character 保证
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Progress {
    pub id: i64,
    pub user_id: i64,
    pub character_id: i64,
    pub is_favorite: bool,
    pub learning_date: NaiveDate,
}
