//! 导入汉字目录
//!
//! 从 JSON 文件读取汉字与例句并写入数据库。
//!
//! 运行: cargo run -p hanzi-api --example seed_characters -- characters.json
//!
//! JSON 结构:
//! ```json
//! [
//!   {
//!     "hanzi": "水", "pinyin": "shuǐ", "stroke_count": 4,
//!     "translation": "water", "hsk_level": 1,
//!     "example_sentences": [
//!       {"sentence": "我想喝水。", "translation": "I want to drink water."}
//!     ]
//!   }
//! ]
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use sqlx::PgPool;

use hanzi_shared::config::AppConfig;

#[derive(Debug, Deserialize)]
struct SentenceSeed {
    sentence: String,
    translation: String,
}

#[derive(Debug, Deserialize)]
struct CharacterSeed {
    hanzi: String,
    pinyin: String,
    stroke_count: i32,
    translation: String,
    hsk_level: i32,
    #[serde(default)]
    example_sentences: Vec<SentenceSeed>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .context("用法: seed_characters <characters.json>")?;

    let raw = std::fs::read_to_string(&path).with_context(|| format!("读取 {} 失败", path))?;
    let seeds: Vec<CharacterSeed> =
        serde_json::from_str(&raw).context("JSON 解析失败")?;

    let config = AppConfig::load("hanzi-api").unwrap_or_default();
    let pool = PgPool::connect(&config.database.url)
        .await
        .context("数据库连接失败")?;

    let mut characters = 0usize;
    let mut sentences = 0usize;

    for seed in seeds {
        let character_id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO characters (hanzi, pinyin, stroke_count, translation, hsk_level)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(&seed.hanzi)
        .bind(&seed.pinyin)
        .bind(seed.stroke_count)
        .bind(&seed.translation)
        .bind(seed.hsk_level)
        .fetch_one(&pool)
        .await
        .with_context(|| format!("插入汉字 {} 失败", seed.hanzi))?;
        characters += 1;

        for sentence in &seed.example_sentences {
            sqlx::query(
                r#"
                INSERT INTO example_sentences (character_id, sentence, translation)
                VALUES ($1, $2, $3)
                "#,
            )
            .bind(character_id)
            .bind(&sentence.sentence)
            .bind(&sentence.translation)
            .execute(&pool)
            .await
            .with_context(|| format!("插入例句失败: {}", sentence.sentence))?;
            sentences += 1;
        }
    }

    println!("导入完成: {} 个汉字, {} 条例句", characters, sentences);

    Ok(())
}
