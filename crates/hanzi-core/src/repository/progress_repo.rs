//! 学习进度仓储
//!
//! 收藏翻转通过单条 upsert 完成，(user_id, character_id) 唯一约束
//! 保证并发请求不会产生重复行

use async_trait::async_trait;
use sqlx::PgPool;

use super::traits::ProgressRepositoryTrait;
use crate::error::Result;
use crate::models::{Character, Progress};

/// 学习进度仓储
pub struct ProgressRepository {
    pool: PgPool,
}

impl ProgressRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProgressRepositoryTrait for ProgressRepository {
    /// 翻转收藏标记
    ///
    /// 不存在记录时插入 is_favorite = true 的新进度；存在时取反。
    /// 单条语句完成查改，避免 check-then-act 竞态
    async fn toggle_favorite(&self, user_id: i64, character_id: i64) -> Result<bool> {
        let is_favorite: bool = sqlx::query_scalar(
            r#"
            INSERT INTO progress (user_id, character_id, is_favorite, learning_date)
            VALUES ($1, $2, TRUE, CURRENT_DATE)
            ON CONFLICT (user_id, character_id)
            DO UPDATE SET is_favorite = NOT progress.is_favorite
            RETURNING is_favorite
            "#,
        )
        .bind(user_id)
        .bind(character_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(is_favorite)
    }

    async fn get(&self, user_id: i64, character_id: i64) -> Result<Option<Progress>> {
        let progress = sqlx::query_as::<_, Progress>(
            r#"
            SELECT id, user_id, character_id, is_favorite, learning_date
            FROM progress
            WHERE user_id = $1 AND character_id = $2
            "#,
        )
        .bind(user_id)
        .bind(character_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(progress)
    }

    async fn count_favorites(&self, user_id: i64) -> Result<i64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM progress WHERE user_id = $1 AND is_favorite",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    async fn list_favorite_characters(&self, user_id: i64) -> Result<Vec<Character>> {
        let characters = sqlx::query_as::<_, Character>(
            r#"
            SELECT c.id, c.hanzi, c.pinyin, c.stroke_count, c.translation, c.hsk_level
            FROM characters c
            INNER JOIN progress p ON p.character_id = c.id
            WHERE p.user_id = $1 AND p.is_favorite
            ORDER BY c.id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(characters)
    }
}
