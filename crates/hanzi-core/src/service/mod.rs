//! 领域服务
//!
//! - `favorite`: 收藏与成就引擎
//! - `word_of_day`: 每日一字单槽缓存

pub mod favorite;
pub mod word_of_day;

pub use favorite::{FavoriteService, PgFavoriteService};
pub use word_of_day::{PgWordOfDayService, WordOfDay, WordOfDayService};
