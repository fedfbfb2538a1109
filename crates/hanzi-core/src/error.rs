//! 核心领域错误类型定义

use thiserror::Error;

/// 核心领域错误
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("数据库错误: {0}")]
    Database(#[from] sqlx::Error),

    #[error("用户不存在: {0}")]
    UserNotFound(String),

    #[error("汉字不存在: {0}")]
    CharacterNotFound(i64),

    #[error("游戏不存在: {0}")]
    GameNotFound(i64),

    #[error("邮箱已注册: {0}")]
    EmailAlreadyRegistered(String),

    #[error("字库为空")]
    NoCharacters,

    #[error("内部错误: {0}")]
    Internal(String),
}

/// 错误结果类型别名
pub type Result<T> = std::result::Result<T, CoreError>;
