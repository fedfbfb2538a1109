//! 收藏与成就引擎
//!
//! 维护用户对汉字的收藏标记，并在收藏数跨过梯度阈值时发放成就。
//!
//! ## 梯度发放规则
//!
//! 阈值 10 / 50 / 100 分别对应成就 1 / 2 / 3。每次检查只发放
//! 当前收藏数命中的最高一档：从 5 跳到 150 的用户只获得成就 3，
//! 不会补发 1 和 2。该排他分支行为是既定产品语义，勿改为累计发放。

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, instrument};

use crate::error::Result;
use crate::models::{Character, EarnedAchievement, Progress};
use crate::repository::{
    AchievementRepository, AchievementRepositoryTrait, ProgressRepository,
    ProgressRepositoryTrait,
};

/// 收藏数梯度：(阈值, 成就 ID)，按阈值从高到低排列
const FAVORITE_TIERS: [(i64, i64); 3] = [(100, 3), (50, 2), (10, 1)];

/// 收藏与成就引擎
pub struct FavoriteService<PR, AR>
where
    PR: ProgressRepositoryTrait,
    AR: AchievementRepositoryTrait,
{
    progress: Arc<PR>,
    achievements: Arc<AR>,
}

/// 默认 Postgres 仓储组合
pub type PgFavoriteService = FavoriteService<ProgressRepository, AchievementRepository>;

impl<PR, AR> FavoriteService<PR, AR>
where
    PR: ProgressRepositoryTrait,
    AR: AchievementRepositoryTrait,
{
    pub fn new(progress: Arc<PR>, achievements: Arc<AR>) -> Self {
        Self {
            progress,
            achievements,
        }
    }

    /// 翻转收藏标记，返回翻转后的状态
    ///
    /// 首次收藏会创建进度记录并置为 true
    #[instrument(skip(self))]
    pub async fn toggle_favorite(&self, user_id: i64, character_id: i64) -> Result<bool> {
        self.progress.toggle_favorite(user_id, character_id).await
    }

    /// 某用户对某汉字的进度记录
    pub async fn get_progress(&self, user_id: i64, character_id: i64) -> Result<Option<Progress>> {
        self.progress.get(user_id, character_id).await
    }

    /// 列出用户收藏的所有汉字
    pub async fn list_favorites(&self, user_id: i64) -> Result<Vec<Character>> {
        self.progress.list_favorite_characters(user_id).await
    }

    /// 统计用户收藏数
    pub async fn count_favorites(&self, user_id: i64) -> Result<i64> {
        self.progress.count_favorites(user_id).await
    }

    /// 重新统计收藏数并按梯度发放成就，返回当前收藏数
    ///
    /// 只发放命中的最高一档；发放本身幂等（唯一约束 + DO NOTHING）
    #[instrument(skip(self))]
    pub async fn check_and_grant_achievements(&self, user_id: i64) -> Result<i64> {
        let count = self.progress.count_favorites(user_id).await?;

        let tier = FAVORITE_TIERS
            .iter()
            .find(|(threshold, _)| count >= *threshold)
            .map(|(_, achievement_id)| *achievement_id);

        if let Some(achievement_id) = tier {
            let granted = self
                .achievements
                .grant(user_id, achievement_id, Utc::now().date_naive())
                .await?;
            if granted {
                info!(user_id, achievement_id, count, "Achievement granted");
            }
        }

        Ok(count)
    }

    /// 列出用户已获得的成就
    pub async fn list_achievements(&self, user_id: i64) -> Result<Vec<EarnedAchievement>> {
        self.achievements.list_for_user(user_id).await
    }
}
