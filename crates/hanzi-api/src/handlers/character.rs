//! 汉字相关的 HTTP 处理器
//!
//! 提供每日一字、闪卡列表、详情和收藏翻转的 API

use axum::Json;
use axum::extract::{Path, Query, State};

use crate::dto::{
    CharacterDetailResponse, CharacterFlashcardResponse, FavoriteToggleResponse, PaginationParams,
    WordOfDayResponse,
};
use crate::error::{ApiError, Result};
use crate::middleware::AuthUser;
use crate::state::AppState;

/// 每日一字
///
/// GET /wordDay/，24 小时窗口内返回同一个随机汉字
pub async fn word_of_day(State(state): State<AppState>) -> Result<Json<WordOfDayResponse>> {
    let word = state.word_of_day.word_of_day().await?;

    Ok(Json(word.into()))
}

/// 分页闪卡列表
///
/// GET /characters/?skip=&limit=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<Vec<CharacterFlashcardResponse>>> {
    let characters = state.characters.list(params.skip, params.limit).await?;

    Ok(Json(characters.into_iter().map(Into::into).collect()))
}

/// 全量闪卡列表
///
/// GET /characters/all
pub async fn list_all(
    State(state): State<AppState>,
) -> Result<Json<Vec<CharacterFlashcardResponse>>> {
    let characters = state.characters.list_all().await?;

    Ok(Json(characters.into_iter().map(Into::into).collect()))
}

/// 汉字详情
///
/// GET /characters/{id}/，需认证；附带例句和当前用户的收藏标记
pub async fn detail(
    State(state): State<AppState>,
    Path(character_id): Path<i64>,
    AuthUser(user): AuthUser,
) -> Result<Json<CharacterDetailResponse>> {
    let character = state
        .characters
        .get(character_id)
        .await?
        .ok_or(ApiError::CharacterNotFound(character_id))?;

    let sentences = state.characters.example_sentences(character_id).await?;

    let is_favorite = state
        .favorites
        .get_progress(user.id, character_id)
        .await?
        .map(|p| p.is_favorite)
        .unwrap_or(false);

    Ok(Json(CharacterDetailResponse::with_sentences(
        character, sentences, is_favorite,
    )))
}

/// 翻转收藏标记
///
/// POST /characters/{id}/favorite，需认证；
/// 首次收藏创建进度记录，再次调用翻转标记
pub async fn toggle_favorite(
    State(state): State<AppState>,
    Path(character_id): Path<i64>,
    AuthUser(user): AuthUser,
) -> Result<Json<FavoriteToggleResponse>> {
    // 先确认汉字存在，避免 upsert 落在外键错误上
    if state.characters.get(character_id).await?.is_none() {
        return Err(ApiError::CharacterNotFound(character_id));
    }

    let is_favorite = state.favorites.toggle_favorite(user.id, character_id).await?;

    Ok(Json(FavoriteToggleResponse {
        status: "Character favorite status updated".to_string(),
        is_favorite,
    }))
}
