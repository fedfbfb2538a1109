//! 汉字学习核心领域库
//!
//! 包含数据模型、仓储层和领域服务（收藏与成就引擎、每日一字缓存）。
//!
//! ## 模块结构
//!
//! - `models`: 数据库实体与查询投影
//! - `repository`: 仓储层（sqlx 数据访问）及其接口定义
//! - `service`: 领域服务
//! - `error`: 错误类型定义

pub mod error;
pub mod models;
pub mod repository;
pub mod service;

// 重新导出核心类型
pub use error::{CoreError, Result};
pub use models::{
    Achievement, Character, EarnedAchievement, ExampleSentence, Game, Image, LeaderboardEntry,
    Progress, Score, User, UserAchievement,
};
pub use repository::{
    AchievementRepository, CharacterRepository, ProgressRepository, ScoreRepository,
    UserRepository,
};
pub use service::{FavoriteService, PgFavoriteService, PgWordOfDayService, WordOfDayService};
