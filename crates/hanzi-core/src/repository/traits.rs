//! 仓储 Trait 定义
//!
//! 定义服务层依赖的仓储接口，支持 mock 测试

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::Result;
use crate::models::{Character, EarnedAchievement, Progress};

/// 汉字仓储接口
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CharacterRepositoryTrait: Send + Sync {
    /// 从全表中均匀随机抽取一个汉字，表为空时返回 None
    async fn random_character(&self) -> Result<Option<Character>>;
}

/// 学习进度仓储接口
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProgressRepositoryTrait: Send + Sync {
    /// 翻转收藏标记；不存在进度记录时创建并置为收藏。返回翻转后的状态
    async fn toggle_favorite(&self, user_id: i64, character_id: i64) -> Result<bool>;

    /// 获取某用户对某汉字的进度记录
    async fn get(&self, user_id: i64, character_id: i64) -> Result<Option<Progress>>;

    /// 统计用户的收藏数
    async fn count_favorites(&self, user_id: i64) -> Result<i64>;

    /// 列出用户收藏的所有汉字
    async fn list_favorite_characters(&self, user_id: i64) -> Result<Vec<Character>>;
}

/// 成就仓储接口
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AchievementRepositoryTrait: Send + Sync {
    /// 幂等发放成就：已持有时不产生新记录。返回 true 表示本次实际发放
    async fn grant(&self, user_id: i64, achievement_id: i64, obtained: NaiveDate) -> Result<bool>;

    /// 列出用户已获得的成就（含图标 URL）
    async fn list_for_user(&self, user_id: i64) -> Result<Vec<EarnedAchievement>>;
}
