//! 成就仓储
//!
//! 发放路径依赖 (user_id, achievement_id) 唯一约束实现幂等

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;

use super::traits::AchievementRepositoryTrait;
use crate::error::Result;
use crate::models::EarnedAchievement;

/// 成就仓储
pub struct AchievementRepository {
    pool: PgPool,
}

impl AchievementRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AchievementRepositoryTrait for AchievementRepository {
    /// 幂等发放成就
    ///
    /// ON CONFLICT DO NOTHING：重复发放不报错也不产生新行。
    /// 返回 true 表示本次调用实际写入了记录
    async fn grant(&self, user_id: i64, achievement_id: i64, obtained: NaiveDate) -> Result<bool> {
        let result = sqlx::query(
            r#"
            INSERT INTO user_achievements (user_id, achievement_id, obtained_date)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id, achievement_id) DO NOTHING
            "#,
        )
        .bind(user_id)
        .bind(achievement_id)
        .bind(obtained)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_for_user(&self, user_id: i64) -> Result<Vec<EarnedAchievement>> {
        let achievements = sqlx::query_as::<_, EarnedAchievement>(
            r#"
            SELECT a.id, a.name, a.description, i.url AS image_url, ua.obtained_date
            FROM user_achievements ua
            INNER JOIN achievements a ON a.id = ua.achievement_id
            LEFT JOIN images i ON i.id = a.image_id
            WHERE ua.user_id = $1
            ORDER BY ua.obtained_date, a.id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(achievements)
    }
}
