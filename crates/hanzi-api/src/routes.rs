//! 路由配置模块
//!
//! 定义所有 REST API 端点的路由映射。路径（包括尾部斜杠）
//! 是对外契约的一部分，与既有前端保持逐字一致。

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::{handlers, state::AppState};

/// 构建认证相关的路由
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/token", post(handlers::auth::login))
        .route("/logout", post(handlers::auth::logout))
}

/// 构建用户相关的路由
///
/// 注册与排行榜公开；其余端点在 handler 侧通过 AuthUser 要求认证
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/", post(handlers::user::create_user))
        .route("/users/me/", get(handlers::user::me))
        .route("/users/favorites", get(handlers::user::list_favorites))
        .route(
            "/users/favorite/count",
            get(handlers::user::favorite_count),
        )
        .route(
            "/users/achievement",
            get(handlers::user::list_achievements),
        )
        .route("/users/scores", get(handlers::user::leaderboard))
        .route("/users/{id}", delete(handlers::user::delete_user))
}

/// 构建汉字相关的路由
pub fn character_routes() -> Router<AppState> {
    Router::new()
        .route("/wordDay/", get(handlers::character::word_of_day))
        .route("/characters/", get(handlers::character::list))
        .route("/characters/all", get(handlers::character::list_all))
        .route("/characters/{id}/", get(handlers::character::detail))
        .route(
            "/characters/{id}/favorite",
            post(handlers::character::toggle_favorite),
        )
}

/// 构建游戏分数路由
pub fn game_routes() -> Router<AppState> {
    Router::new().route("/game/{game_id}/score/", post(handlers::game::post_score))
}

/// 构建完整的 API 路由
///
/// 返回所有 API 路由（不含探针，由调用方在 main.rs 中挂载）
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(character_routes())
        .merge(game_routes())
}
