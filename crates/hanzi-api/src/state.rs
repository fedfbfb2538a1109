//! 应用状态定义
//!
//! 包含 Axum 路由共享的应用状态

use std::sync::Arc;

use sqlx::PgPool;

use hanzi_core::{
    AchievementRepository, CharacterRepository, FavoriteService, PgFavoriteService,
    PgWordOfDayService, ProgressRepository, ScoreRepository, UserRepository, WordOfDayService,
};

use crate::auth::{JwtConfig, JwtManager};

/// Axum 应用共享状态
///
/// 仓储和服务通过 Arc 在 handler 间共享
#[derive(Clone)]
pub struct AppState {
    /// JWT 管理器
    pub jwt_manager: JwtManager,
    /// 用户仓储
    pub users: Arc<UserRepository>,
    /// 汉字仓储
    pub characters: Arc<CharacterRepository>,
    /// 分数仓储
    pub scores: Arc<ScoreRepository>,
    /// 收藏与成就引擎
    pub favorites: Arc<PgFavoriteService>,
    /// 每日一字缓存
    pub word_of_day: Arc<PgWordOfDayService>,
}

impl AppState {
    /// 创建新的应用状态
    pub fn new(pool: PgPool, jwt_config: JwtConfig) -> Self {
        let users = Arc::new(UserRepository::new(pool.clone()));
        let characters = Arc::new(CharacterRepository::new(pool.clone()));
        let scores = Arc::new(ScoreRepository::new(pool.clone()));

        let progress = Arc::new(ProgressRepository::new(pool.clone()));
        let achievements = Arc::new(AchievementRepository::new(pool));
        let favorites = Arc::new(FavoriteService::new(progress, achievements));

        let word_of_day = Arc::new(WordOfDayService::new(characters.clone()));

        Self {
            jwt_manager: JwtManager::new(jwt_config),
            users,
            characters,
            scores,
            favorites,
            word_of_day,
        }
    }
}
