//! 认证相关的 HTTP 处理器
//!
//! 提供登录换取 Token 和登出的 API

use axum::extract::{Form, State};
use axum::http::HeaderName;
use axum::http::header::SET_COOKIE;
use axum::response::AppendHeaders;
use axum::Json;

use crate::auth::verify_password;
use crate::dto::{LoginForm, StatusResponse, TokenResponse};
use crate::error::{ApiError, Result};
use crate::state::AppState;

/// 登录换取访问 Token
///
/// POST /token（OAuth2 密码模式，form-encoded，username 为邮箱）
///
/// 邮箱不存在与密码错误返回同一个 401，不区分两种失败
pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Json<TokenResponse>> {
    let user = state
        .users
        .get_by_email(&form.username)
        .await?
        .ok_or(ApiError::InvalidCredentials)?;

    if !verify_password(&form.password, &user.password_hash)? {
        return Err(ApiError::InvalidCredentials);
    }

    let access_token = state.jwt_manager.issue(&user.email, None)?;

    Ok(Json(TokenResponse::bearer(access_token)))
}

/// 登出
///
/// POST /logout
///
/// JWT 是无状态的：仅清除客户端 Cookie，已签发的 Bearer Token
/// 在过期前仍然有效
pub async fn logout() -> (
    AppendHeaders<[(HeaderName, &'static str); 1]>,
    Json<StatusResponse>,
) {
    (
        AppendHeaders([(SET_COOKIE, "access_token=; Max-Age=0; Path=/")]),
        Json(StatusResponse::new("logout successful")),
    )
}
