//! 成就相关实体定义
//!
//! 包含成就目录、用户获得记录和图片资源

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 成就目录条目
///
/// 静态数据；id 1/2/3 为收藏数梯度成就
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Achievement {
    pub id: i64,
    pub name: String,
    #[sqlx(default)]
    pub description: Option<String>,
    /// 达成条件的人类可读描述
    #[sqlx(default)]
    pub criteria: Option<String>,
    #[sqlx(default)]
    pub image_id: Option<i64>,
}

/// 用户成就记录
///
/// (user_id, achievement_id) 唯一，由 uq_user_achievement 约束保证，
/// 每个成就每用户至多发放一次
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct UserAchievement {
    pub id: i64,
    pub user_id: i64,
    pub achievement_id: i64,
    pub obtained_date: NaiveDate,
}

/// 图片资源元数据
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Image {
    pub id: i64,
    pub url: String,
    #[sqlx(default)]
    pub description: Option<String>,
}

/// 已获得成就（查询投影）
///
/// 成就目录与获得记录的联接结果，附带图标 URL
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct EarnedAchievement {
    pub id: i64,
    pub name: String,
    #[sqlx(default)]
    pub description: Option<String>,
    #[sqlx(default)]
    pub image_url: Option<String>,
    pub obtained_date: NaiveDate,
}
