//! 汉字与例句实体定义

use serde::{Deserialize, Serialize};

/// 汉字学习单元
///
/// 只读目录数据，通过 seed 工具导入
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Character {
    pub id: i64,
    pub hanzi: String,
    pub pinyin: String,
    /// 笔画数
    pub stroke_count: i32,
    pub translation: String,
    /// HSK 等级（1-6）
    pub hsk_level: i32,
}

/// 例句
///
/// 每条例句归属且仅归属一个汉字
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ExampleSentence {
    pub id: i64,
    pub character_id: i64,
    pub sentence: String,
    pub translation: String,
}
