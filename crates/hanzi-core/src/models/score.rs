//! 游戏与分数实体定义

use serde::{Deserialize, Serialize};

/// 游戏
///
/// 静态目录数据
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Game {
    pub id: i64,
    pub name: String,
    #[sqlx(default)]
    pub description: Option<String>,
}

/// 游戏分数记录
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Score {
    pub id: i64,
    pub game_id: i64,
    pub user_id: i64,
    pub score: i32,
    /// 难度标签（如 "easy" / "hard"）
    pub difficulty: String,
    /// 自由格式的游戏参数串
    pub parameters: String,
}

/// 排行榜条目（查询投影）
///
/// 每个用户取其最高分
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct LeaderboardEntry {
    pub user_name: String,
    pub game_id: i64,
    pub score: i32,
    pub difficulty: String,
}
