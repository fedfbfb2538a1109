//! 汉字学习后端 API 服务
//!
//! 提供用户注册/认证、汉字闪卡、收藏、成就和排行榜的 REST API。

use axum::{Json, Router, http::HeaderValue, middleware, routing::get};
use hanzi_api::{auth::JwtConfig, routes, state::AppState};
use hanzi_shared::{
    config::{AppConfig, DEV_JWT_SECRET},
    database::Database,
    observability::{self, middleware as obs_middleware},
};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 统一加载配置：config/{service_name}.toml + HANZI_ 环境变量覆盖
    let config = AppConfig::load("hanzi-api").unwrap_or_default();

    // 从 AppConfig 中提取可观测性配置并注入服务名
    let obs_config = config
        .observability
        .clone()
        .with_service_name(&config.service_name);
    observability::init(&obs_config)?;

    info!("Starting hanzi-api on {}", config.server_addr());

    // 初始化数据库并执行迁移
    let db = Database::connect(&config.database).await?;
    db.run_migrations().await?;

    // JWT 密钥配置：生产环境必须通过 HANZI_AUTH_SECRET 注入，
    // 开发环境使用默认值
    if config.auth.secret == DEV_JWT_SECRET {
        if config.is_production() {
            panic!("HANZI_AUTH_SECRET must be set in production environment");
        }
        warn!("Using default JWT secret - set HANZI_AUTH_SECRET for production");
    }

    let jwt_config = JwtConfig {
        secret: config.auth.secret.clone(),
        default_ttl_days: config.auth.token_ttl_days,
    };

    let state = AppState::new(db.pool().clone(), jwt_config);

    // CORS 配置：通过 HANZI_CORS_ORIGINS 环境变量控制允许的来源，
    // 默认只放行本地前端
    let allowed_origins = std::env::var("HANZI_CORS_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:4200".to_string());

    let cors = if allowed_origins == "*" {
        if config.is_production() {
            warn!("HANZI_CORS_ORIGINS=\"*\" 在生产环境中不安全，请设置为具体域名");
        }
        info!("CORS allowed_origins: * (all origins)");
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        info!("CORS allowed_origins: {}", allowed_origins);
        let origins: Vec<_> = allowed_origins
            .split(',')
            .filter_map(|s| s.trim().parse::<HeaderValue>().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    };

    let app = Router::new()
        .merge(routes::api_routes())
        .route("/health", get(health_check))
        .route(
            "/ready",
            get({
                let db_for_ready = db;
                move || readiness_check(db_for_ready.clone())
            }),
        )
        .layer(cors)
        // 可观测性中间件：请求追踪和请求 ID
        .layer(middleware::from_fn(obs_middleware::http_tracing))
        .layer(middleware::from_fn(obs_middleware::request_id))
        .with_state(state);

    let listener = TcpListener::bind(config.server_addr()).await?;
    info!("Listening on {}", config.server_addr());

    // 优雅关闭：收到 SIGTERM 或 Ctrl+C 时停止接收新连接，
    // 等待已有请求处理完毕
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");

    Ok(())
}

/// 监听关闭信号
///
/// 收到 SIGTERM（容器编排停止实例）或 Ctrl+C 后返回，
/// 触发 axum 的优雅关闭流程。
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("注册 Ctrl+C 处理器失败");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("注册 SIGTERM 处理器失败")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, initiating graceful shutdown..."),
        _ = terminate => info!("Received SIGTERM, initiating graceful shutdown..."),
    }
}

/// 存活探针：服务进程正常即返回 ok
async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "hanzi-api"
    }))
}

/// 就绪探针：检查数据库连接是否可用
async fn readiness_check(db: Database) -> Json<serde_json::Value> {
    let db_ok = db.health_check().await.is_ok();

    Json(serde_json::json!({
        "status": if db_ok { "ok" } else { "degraded" },
        "service": "hanzi-api",
        "checks": {
            "database": if db_ok { "ok" } else { "fail" }
        }
    }))
}
