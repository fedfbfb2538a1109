//! 用户相关的 HTTP 处理器
//!
//! 提供注册、个人信息、收藏、成就、排行榜和删除用户的 API

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use tracing::info;

use crate::auth::hash_password;
use crate::dto::{
    AchievementResponse, CharacterDetailResponse, CreateUserRequest, FavoriteCountResponse,
    LeaderboardEntryResponse, RegisteredUserResponse, UserResponse, ValidatedJson,
};
use crate::error::{ApiError, Result};
use crate::middleware::AuthUser;
use crate::state::AppState;

/// 注册用户
///
/// POST /users/
///
/// 注册即登录：创建成功后立即签发 Token 一并返回。
/// 邮箱已占用时返回 400 EMAIL_TAKEN
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateUserRequest>,
) -> Result<Json<RegisteredUserResponse>> {
    let password_hash = hash_password(&req.password)?;

    let user = state
        .users
        .create(&req.email, &req.name, &password_hash)
        .await?;

    info!(user_id = user.id, "User registered");

    let access_token = state.jwt_manager.issue(&user.email, None)?;

    Ok(Json(RegisteredUserResponse::new(user, access_token)))
}

/// 获取当前用户信息
///
/// GET /users/me/
pub async fn me(AuthUser(user): AuthUser) -> Json<UserResponse> {
    Json(user.into())
}

/// 删除用户
///
/// DELETE /users/{id}，成功返回 204，不存在返回 404。
///
/// 进度、分数、成就随外键级联删除
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<StatusCode> {
    let deleted = state.users.delete(user_id).await?;

    if !deleted {
        return Err(ApiError::UserNotFound(user_id.to_string()));
    }

    info!(user_id, "User deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// 列出当前用户收藏的汉字
///
/// GET /users/favorites
///
/// 收藏列表不展开例句，详情另行请求
pub async fn list_favorites(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<CharacterDetailResponse>>> {
    let characters = state.favorites.list_favorites(user.id).await?;

    Ok(Json(
        characters
            .into_iter()
            .map(CharacterDetailResponse::favorite_summary)
            .collect(),
    ))
}

/// 获取当前用户的收藏数
///
/// GET /users/favorite/count
///
/// 统计之余触发成就梯度检查，命中阈值时幂等发放对应成就
pub async fn favorite_count(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<FavoriteCountResponse>> {
    let count = state.favorites.check_and_grant_achievements(user.id).await?;

    Ok(Json(FavoriteCountResponse { count }))
}

/// 列出当前用户已获得的成就
///
/// GET /users/achievement
pub async fn list_achievements(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<AchievementResponse>>> {
    let achievements = state.favorites.list_achievements(user.id).await?;

    Ok(Json(achievements.into_iter().map(Into::into).collect()))
}

/// 公开排行榜
///
/// GET /users/scores，返回每个用户的最高分，按分数降序
pub async fn leaderboard(
    State(state): State<AppState>,
) -> Result<Json<Vec<LeaderboardEntryResponse>>> {
    let entries = state.scores.leaderboard().await?;

    Ok(Json(entries.into_iter().map(Into::into).collect()))
}
