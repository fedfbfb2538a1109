//! 游戏分数相关的 HTTP 处理器

use axum::Json;
use axum::extract::{Path, State};
use tracing::info;

use crate::dto::{GameScoreRequest, ScoreResponse, ValidatedJson};
use crate::error::{ApiError, Result};
use crate::middleware::AuthUser;
use crate::state::AppState;

/// 上报一局游戏分数
///
/// POST /game/{game_id}/score/，需认证
pub async fn post_score(
    State(state): State<AppState>,
    Path(game_id): Path<i64>,
    AuthUser(user): AuthUser,
    ValidatedJson(req): ValidatedJson<GameScoreRequest>,
) -> Result<Json<ScoreResponse>> {
    if !state.scores.game_exists(game_id).await? {
        return Err(ApiError::GameNotFound(game_id));
    }

    let score = state
        .scores
        .create(user.id, game_id, req.score, &req.difficulty, &req.parameters)
        .await?;

    info!(user_id = user.id, game_id, score = score.score, "Score recorded");

    Ok(Json(score.into()))
}
