//! 分数仓储
//!
//! 分数写入与公开排行榜查询

use sqlx::PgPool;

use crate::error::Result;
use crate::models::{LeaderboardEntry, Score};

/// 分数仓储
pub struct ScoreRepository {
    pool: PgPool,
}

impl ScoreRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 检查游戏是否存在
    pub async fn game_exists(&self, game_id: i64) -> Result<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM games WHERE id = $1)")
                .bind(game_id)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    /// 记录一局游戏分数
    pub async fn create(
        &self,
        user_id: i64,
        game_id: i64,
        score: i32,
        difficulty: &str,
        parameters: &str,
    ) -> Result<Score> {
        let score = sqlx::query_as::<_, Score>(
            r#"
            INSERT INTO scores (game_id, user_id, score, difficulty, parameters)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, game_id, user_id, score, difficulty, parameters
            "#,
        )
        .bind(game_id)
        .bind(user_id)
        .bind(score)
        .bind(difficulty)
        .bind(parameters)
        .fetch_one(&self.pool)
        .await?;

        Ok(score)
    }

    /// 公开排行榜：每个用户的最高分，按分数降序
    pub async fn leaderboard(&self) -> Result<Vec<LeaderboardEntry>> {
        let entries = sqlx::query_as::<_, LeaderboardEntry>(
            r#"
            SELECT u.name AS user_name, s.game_id, s.score, s.difficulty
            FROM (
                SELECT DISTINCT ON (user_id) user_id, game_id, score, difficulty
                FROM scores
                ORDER BY user_id, score DESC
            ) s
            INNER JOIN users u ON u.id = s.user_id
            ORDER BY s.score DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }
}
