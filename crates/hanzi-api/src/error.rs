//! API 错误类型定义
//!
//! 包含所有对外接口的错误类型及其 HTTP 映射

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use hanzi_core::CoreError;

/// API 错误类型
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    // 认证错误
    #[error("未授权: {0}")]
    Unauthorized(String),
    #[error("用户名或密码错误")]
    InvalidCredentials,

    // 业务错误
    #[error("邮箱已注册: {0}")]
    EmailAlreadyRegistered(String),

    // 验证错误
    #[error("参数验证失败: {0}")]
    Validation(String),

    // 资源不存在
    #[error("汉字不存在: {0}")]
    CharacterNotFound(i64),
    #[error("用户不存在: {0}")]
    UserNotFound(String),
    #[error("游戏不存在: {0}")]
    GameNotFound(i64),
    #[error("字库为空")]
    NoCharacters,

    // 系统错误
    #[error("数据库错误: {0}")]
    Database(#[from] sqlx::Error),
    #[error("内部错误: {0}")]
    Internal(String),
}

impl ApiError {
    /// 返回对应的 HTTP 状态码
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthorized(_) | Self::InvalidCredentials => StatusCode::UNAUTHORIZED,

            // 与前端既有约定保持一致：邮箱占用返回 400 而非 409
            Self::EmailAlreadyRegistered(_) => StatusCode::BAD_REQUEST,

            // 请求体格式合法但内容无法通过校验
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,

            Self::CharacterNotFound(_)
            | Self::UserNotFound(_)
            | Self::GameNotFound(_)
            | Self::NoCharacters => StatusCode::NOT_FOUND,

            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 返回错误码（用于 API 响应）
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Unauthorized(_) => "UNAUTHORIZED",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::EmailAlreadyRegistered(_) => "EMAIL_TAKEN",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::CharacterNotFound(_) => "CHARACTER_NOT_FOUND",
            Self::UserNotFound(_) => "USER_NOT_FOUND",
            Self::GameNotFound(_) => "GAME_NOT_FOUND",
            Self::NoCharacters => "NO_CHARACTERS",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // 系统级错误只返回通用提示，详细信息仅记录日志，防止信息泄露
        let message = match &self {
            Self::Database(e) => {
                tracing::error!(error = %e, "数据库操作失败");
                "服务内部错误，请稍后重试".to_string()
            }
            Self::Internal(e) => {
                tracing::error!(error = %e, "内部错误");
                "服务内部错误，请稍后重试".to_string()
            }
            other => other.to_string(),
        };

        let body = json!({
            "success": false,
            "code": self.error_code(),
            "message": message,
            "data": serde_json::Value::Null
        });

        (status, axum::Json(body)).into_response()
    }
}

/// 从核心领域错误转换
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Database(e) => Self::Database(e),
            CoreError::UserNotFound(id) => Self::UserNotFound(id),
            CoreError::CharacterNotFound(id) => Self::CharacterNotFound(id),
            CoreError::GameNotFound(id) => Self::GameNotFound(id),
            CoreError::EmailAlreadyRegistered(email) => Self::EmailAlreadyRegistered(email),
            CoreError::NoCharacters => Self::NoCharacters,
            CoreError::Internal(msg) => Self::Internal(msg),
        }
    }
}

/// 从 validator 错误转换
impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}

/// 服务层 Result 类型别名
pub type Result<T> = std::result::Result<T, ApiError>;
