//! 汉字学习后端 API 服务
//!
//! 提供用户注册/认证、汉字闪卡、收藏、游戏分数、成就和排行榜的 REST API。
//!
//! ## 核心功能
//!
//! - **用户与认证**：注册即登录、OAuth2 密码模式换取 Bearer Token
//! - **汉字闪卡**：分页/全量列表、详情（含例句与收藏标记）
//! - **收藏与成就**：收藏翻转、收藏数梯度发放成就
//! - **每日一字**：24 小时窗口的随机汉字
//! - **游戏分数**：分数上报与公开排行榜
//!
//! ## 模块结构
//!
//! - `auth`: JWT 与密码处理
//! - `middleware`: 会话解析（Bearer Token -> 用户）
//! - `dto`: 请求和响应的数据传输对象
//! - `error`: 错误类型定义
//! - `handlers`: HTTP 请求处理器
//! - `routes`: 路由配置
//! - `state`: 应用状态
//!
//! ## 技术栈
//!
//! - Web 框架：Axum
//! - 数据访问：sqlx / PostgreSQL（hanzi-core 仓储层）
//! - 认证：jsonwebtoken (HS256) + bcrypt
//! - 数据验证：validator

pub mod auth;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

// 重新导出核心类型
pub use error::{ApiError, Result};
pub use state::AppState;
