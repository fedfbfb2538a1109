//! 会话解析
//!
//! 将请求中的 Bearer Token 解析为用户记录。公开端点与认证端点
//! 混布在相同前缀下（如 GET /characters/ 公开、GET /characters/{id}/
//! 需认证），因此采用按 handler 声明的提取器而非全局中间件。

use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts};

use hanzi_core::User;

use crate::error::ApiError;
use crate::state::AppState;

/// 当前登录用户
///
/// 作为 handler 参数出现即表示该端点需要认证：
///
/// ```ignore
/// async fn me(AuthUser(user): AuthUser) -> Json<UserResponse> { ... }
/// ```
pub struct AuthUser(pub User);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // 从 Authorization header 提取 Bearer Token
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok());

        let token = match auth_header {
            Some(header) if header.starts_with("Bearer ") => &header[7..],
            _ => return Err(ApiError::Unauthorized("缺少认证 Token".to_string())),
        };

        // 验证 Token 并按 sub（邮箱）解析用户；
        // Token 有效但用户已被删除时同样视为未授权
        let claims = state.jwt_manager.verify(token)?;

        let user = state
            .users
            .get_by_email(&claims.sub)
            .await?
            .ok_or_else(|| ApiError::Unauthorized("凭证对应的用户不存在".to_string()))?;

        Ok(AuthUser(user))
    }
}
