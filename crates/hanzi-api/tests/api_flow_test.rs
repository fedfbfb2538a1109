//! API 集成测试
//!
//! 使用真实 PostgreSQL 完整走通注册、登录、收藏与成就发放流程。
//! 收藏翻转和成就发放依赖数据库唯一约束与 upsert 语义，
//! 无法通过纯 mock 覆盖，因此需要集成测试。
//!
//! ## 运行方式
//!
//! ```bash
//! DATABASE_URL=postgres://... cargo test -p hanzi-api --test api_flow_test -- --ignored
//! ```

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use sqlx::PgPool;
use tower::ServiceExt;

use hanzi_api::auth::JwtConfig;
use hanzi_api::{routes, state::AppState};
use hanzi_shared::config::DatabaseConfig;
use hanzi_shared::database::Database;

// ==================== 辅助函数 ====================

/// 从环境变量读取数据库 URL，未设置则 panic
fn database_url() -> String {
    std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for integration tests")
}

/// 生成不与历史运行冲突的邮箱
fn unique_email(prefix: &str) -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("{prefix}-{nanos}@example.com")
}

/// 建立应用实例（真实连接池 + 迁移）
async fn setup_app() -> (Router, PgPool) {
    let config = DatabaseConfig {
        url: database_url(),
        ..Default::default()
    };
    let db = Database::connect(&config).await.expect("数据库连接失败");
    db.run_migrations().await.expect("数据库迁移失败");

    let pool = db.pool().clone();
    let state = AppState::new(pool.clone(), JwtConfig::default());

    (routes::api_routes().with_state(state), pool)
}

/// 插入一个测试汉字（幂等，已存在则跳过）
async fn seed_character(pool: &PgPool, id: i64) {
    sqlx::query(
        r#"
        INSERT INTO characters (id, hanzi, pinyin, stroke_count, translation, hsk_level)
        VALUES ($1, '试', 'shì', 8, 'to try', 1)
        ON CONFLICT (id) DO NOTHING
        "#,
    )
    .bind(id)
    .execute(pool)
    .await
    .expect("插入测试汉字失败");
}

/// 发送 JSON 请求并解析响应体
async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }

    let request = match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.expect("请求失败");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("读取响应体失败")
        .to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("响应体不是合法 JSON")
    };

    (status, value)
}

/// 注册用户并返回 (user_id, access_token)
async fn register(app: &Router, email: &str) -> (i64, String) {
    let (status, body) = send(
        app,
        "POST",
        "/users/",
        None,
        Some(json!({"email": email, "password": "pw", "name": "Ann"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK, "注册失败: {body}");
    let user_id = body["id"].as_i64().expect("注册响应缺少 id");
    let token = body["access_token"]
        .as_str()
        .expect("注册响应缺少 access_token")
        .to_string();
    (user_id, token)
}

// ==================== 注册 / 登录 ====================

#[tokio::test]
#[ignore] // 需要数据库连接
async fn test_register_returns_token_and_duplicate_email_is_rejected() {
    let (app, _pool) = setup_app().await;
    let email = unique_email("register");

    let (status, body) = send(
        &app,
        "POST",
        "/users/",
        None,
        Some(json!({"email": email, "password": "pw", "name": "Ann"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], json!(email));
    assert_eq!(body["token_type"], json!("bearer"));
    assert!(!body["access_token"].as_str().unwrap().is_empty());

    // 同一邮箱再次注册 -> 400 EMAIL_TAKEN
    let (status, body) = send(
        &app,
        "POST",
        "/users/",
        None,
        Some(json!({"email": email, "password": "pw", "name": "Ann"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], json!("EMAIL_TAKEN"));
}

#[tokio::test]
#[ignore]
async fn test_malformed_register_body_yields_422_envelope() {
    let (app, _pool) = setup_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/users/",
        None,
        Some(json!({"email": "not-an-email", "password": "pw", "name": "Ann"})),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], json!("VALIDATION_ERROR"));
    assert_eq!(body["success"], json!(false));
}

#[tokio::test]
#[ignore]
async fn test_login_exchanges_credentials_for_token() {
    let (app, _pool) = setup_app().await;
    let email = unique_email("login");
    register(&app, &email).await;

    // 正确密码 -> 200 + token
    let form = format!("username={}&password=pw", email);
    let request = Request::builder()
        .method("POST")
        .uri("/token")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // 错误密码 -> 401
    let form = format!("username={}&password=wrong", email);
    let request = Request::builder()
        .method("POST")
        .uri("/token")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore]
async fn test_me_requires_valid_token() {
    let (app, _pool) = setup_app().await;
    let email = unique_email("me");
    let (user_id, token) = register(&app, &email).await;

    let (status, body) = send(&app, "GET", "/users/me/", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], json!(user_id));
    assert_eq!(body["email"], json!(email));

    // 无 Token -> 401
    let (status, _) = send(&app, "GET", "/users/me/", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // 伪造 Token -> 401
    let (status, _) = send(&app, "GET", "/users/me/", Some("bogus.token.here"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

// ==================== 收藏 ====================

#[tokio::test]
#[ignore]
async fn test_favorite_toggle_is_an_involution() {
    let (app, pool) = setup_app().await;
    seed_character(&pool, 99901).await;
    let email = unique_email("favorite");
    let (_, token) = register(&app, &email).await;

    // 首次收藏 -> true
    let (status, body) = send(
        &app,
        "POST",
        "/characters/99901/favorite",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["is_favorite"], json!(true));

    // 再次收藏 -> false
    let (_, body) = send(
        &app,
        "POST",
        "/characters/99901/favorite",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(body["is_favorite"], json!(false));

    // 不存在的汉字 -> 404
    let (status, _) = send(
        &app,
        "POST",
        "/characters/987654321/favorite",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore]
async fn test_character_detail_reports_favorite_flag() {
    let (app, pool) = setup_app().await;
    seed_character(&pool, 99902).await;
    let email = unique_email("detail");
    let (_, token) = register(&app, &email).await;

    let (status, body) = send(&app, "GET", "/characters/99902/", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["is_favorite"], json!(false));
    assert!(body["example_sentences"].is_array());

    send(
        &app,
        "POST",
        "/characters/99902/favorite",
        Some(&token),
        None,
    )
    .await;

    let (_, body) = send(&app, "GET", "/characters/99902/", Some(&token), None).await;
    assert_eq!(body["is_favorite"], json!(true));
}

// ==================== 成就 ====================

/// 收藏满 10 个后调用收藏数端点 -> 成就 1 入列
#[tokio::test]
#[ignore]
async fn test_tier_one_achievement_granted_at_ten_favorites() {
    let (app, pool) = setup_app().await;
    let email = unique_email("tier1");
    let (_, token) = register(&app, &email).await;

    for id in 99910..99920 {
        seed_character(&pool, id).await;
        let (_, body) = send(
            &app,
            "POST",
            &format!("/characters/{id}/favorite"),
            Some(&token),
            None,
        )
        .await;
        assert_eq!(body["is_favorite"], json!(true));
    }

    let (status, body) = send(&app, "GET", "/users/favorite/count", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], json!(10));

    let (_, achievements) = send(&app, "GET", "/users/achievement", Some(&token), None).await;
    let ids: Vec<i64> = achievements
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["id"].as_i64().unwrap())
        .collect();
    assert!(ids.contains(&1), "应获得成就 1, 实际: {ids:?}");

    // 同一收藏数重复检查不会重复发放
    send(&app, "GET", "/users/favorite/count", Some(&token), None).await;
    let (_, achievements) = send(&app, "GET", "/users/achievement", Some(&token), None).await;
    assert_eq!(achievements.as_array().unwrap().len(), 1);
}

/// 一次性跨过全部阈值时只发放最高档：既定的排他分支语义
#[tokio::test]
#[ignore]
async fn test_jump_past_thresholds_grants_only_highest_tier() {
    let (app, pool) = setup_app().await;
    let email = unique_email("tier3");
    let (_, token) = register(&app, &email).await;

    for id in 99000..99100 {
        seed_character(&pool, id).await;
        send(
            &app,
            "POST",
            &format!("/characters/{id}/favorite"),
            Some(&token),
            None,
        )
        .await;
    }

    let (_, body) = send(&app, "GET", "/users/favorite/count", Some(&token), None).await;
    assert_eq!(body["count"], json!(100));

    let (_, achievements) = send(&app, "GET", "/users/achievement", Some(&token), None).await;
    let ids: Vec<i64> = achievements
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["id"].as_i64().unwrap())
        .collect();
    assert!(ids.contains(&3), "应获得成就 3, 实际: {ids:?}");
    assert!(!ids.contains(&1), "不应补发成就 1: {ids:?}");
    assert!(!ids.contains(&2), "不应补发成就 2: {ids:?}");
}

// ==================== 分数与排行榜 ====================

#[tokio::test]
#[ignore]
async fn test_score_submission_and_public_leaderboard() {
    let (app, _pool) = setup_app().await;
    let email = unique_email("score");
    let (user_id, token) = register(&app, &email).await;

    let (status, body) = send(
        &app,
        "POST",
        "/game/1/score/",
        Some(&token),
        Some(json!({"score": 42, "difficulty": "easy", "parameters": "mode=pairs"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "上报分数失败: {body}");
    assert_eq!(body["user_id"], json!(user_id));
    assert_eq!(body["score"], json!(42));

    // 不存在的游戏 -> 404
    let (status, _) = send(
        &app,
        "POST",
        "/game/987654/score/",
        Some(&token),
        Some(json!({"score": 1, "difficulty": "easy", "parameters": ""})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // 排行榜公开可见，包含刚上报的用户
    let (status, body) = send(&app, "GET", "/users/scores", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(
        body.as_array()
            .unwrap()
            .iter()
            .any(|e| e["user_name"] == json!("Ann") && e["score"].as_i64().unwrap() >= 42)
    );
}

// ==================== 每日一字 / 删除用户 ====================

#[tokio::test]
#[ignore]
async fn test_word_of_day_is_stable_within_window() {
    let (app, pool) = setup_app().await;
    seed_character(&pool, 99903).await;

    let (status, first) = send(&app, "GET", "/wordDay/", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(first["hanzi"].is_string());
    assert!(first["pinyin"].is_string());

    // 同一窗口内重复请求返回同一个字
    let (_, second) = send(&app, "GET", "/wordDay/", None, None).await;
    assert_eq!(first, second);
}

#[tokio::test]
#[ignore]
async fn test_delete_user_cascades_and_404s_on_missing() {
    let (app, _pool) = setup_app().await;
    let email = unique_email("delete");
    let (user_id, token) = register(&app, &email).await;

    let (status, _) = send(&app, "DELETE", &format!("/users/{user_id}"), None, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    // 已删除 -> 404
    let (status, _) = send(&app, "DELETE", &format!("/users/{user_id}"), None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // 用户消失后，仍然有效的 Token 解析失败 -> 401
    let (status, _) = send(&app, "GET", "/users/me/", Some(&token), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
