//! 数据模型定义
//!
//! 与 migrations/ 中的 schema 一一对应的实体，以及若干查询投影。
//! 序列化字段保持 snake_case，与对外 API 的线格式一致。

mod achievement;
mod character;
mod progress;
mod score;
mod user;

pub use achievement::{Achievement, EarnedAchievement, Image, UserAchievement};
pub use character::{Character, ExampleSentence};
pub use progress::Progress;
pub use score::{Game, LeaderboardEntry, Score};
pub use user::User;
