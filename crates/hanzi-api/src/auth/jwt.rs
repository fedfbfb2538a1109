//! JWT Token 处理
//!
//! 提供 JWT Token 的签发和验证功能。Token 为无状态 Bearer 凭证，
//! 无刷新、无轮换、无服务端吊销，到期即失效。

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// JWT 配置
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// 签名密钥（HS256 对称算法）
    pub secret: String,
    /// 默认有效期（天），签发时未指定 ttl 则使用
    pub default_ttl_days: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: "hanzi-api-secret-key-change-in-production".to_string(),
            default_ttl_days: 30,
        }
    }
}

/// JWT Claims（Token 载荷）
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// 主体：用户邮箱
    pub sub: String,
    /// 签发时间
    pub iat: i64,
    /// 过期时间
    pub exp: i64,
}

/// JWT 管理器
#[derive(Clone)]
pub struct JwtManager {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtManager {
    /// 创建 JWT 管理器
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// 签发 Token
    ///
    /// # 参数
    /// - `subject`: 主体（用户邮箱）
    /// - `ttl`: 有效期；None 时使用配置的默认值（30 天）
    pub fn issue(&self, subject: &str, ttl: Option<Duration>) -> Result<String, ApiError> {
        let now = Utc::now();
        let ttl = ttl.unwrap_or_else(|| Duration::days(self.config.default_ttl_days));
        let exp = now + ttl;

        let claims = Claims {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| ApiError::Internal(format!("JWT 签发失败: {}", e)))
    }

    /// 验证并解析 Token
    ///
    /// 签名无效、格式错误或已过期时返回 Unauthorized
    pub fn verify(&self, token: &str) -> Result<Claims, ApiError> {
        let validation = Validation::default();

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    ApiError::Unauthorized("Token 已过期".to_string())
                }
                jsonwebtoken::errors::ErrorKind::InvalidToken => {
                    ApiError::Unauthorized("无效的 Token".to_string())
                }
                _ => ApiError::Unauthorized(format!("Token 验证失败: {}", e)),
            })?;

        Ok(token_data.claims)
    }
}
