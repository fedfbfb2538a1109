//! DTO 模块
//!
//! 包含所有请求和响应的数据传输对象。线格式为 snake_case，
//! 与既有前端约定保持一致。

pub mod request;
pub mod response;

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::ApiError;

// 重新导出常用类型
pub use request::{CreateUserRequest, GameScoreRequest, LoginForm, PaginationParams};
pub use response::{
    AchievementResponse, CharacterDetailResponse, CharacterFlashcardResponse,
    ExampleSentenceResponse, FavoriteCountResponse, FavoriteToggleResponse,
    LeaderboardEntryResponse, RegisteredUserResponse, ScoreResponse, StatusResponse,
    TokenResponse, UserResponse, WordOfDayResponse,
};

/// 反序列化并校验请求体的 Json 提取器
///
/// 请求体无法解析或校验失败时统一返回 422 的错误信封，
/// 保证格式错误不会以 axum 默认的纯文本形式泄露出去
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::Validation(rejection.body_text()))?;

        value.validate()?;

        Ok(Self(value))
    }
}
