//! 汉字仓储
//!
//! 汉字与例句均为只读目录数据

use async_trait::async_trait;
use sqlx::PgPool;

use super::traits::CharacterRepositoryTrait;
use crate::error::Result;
use crate::models::{Character, ExampleSentence};

/// 汉字仓储
pub struct CharacterRepository {
    pool: PgPool,
}

impl CharacterRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 分页列出汉字（闪卡列表）
    pub async fn list(&self, skip: i64, limit: i64) -> Result<Vec<Character>> {
        let characters = sqlx::query_as::<_, Character>(
            r#"
            SELECT id, hanzi, pinyin, stroke_count, translation, hsk_level
            FROM characters
            ORDER BY id
            OFFSET $1 LIMIT $2
            "#,
        )
        .bind(skip)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(characters)
    }

    /// 列出全部汉字
    pub async fn list_all(&self) -> Result<Vec<Character>> {
        let characters = sqlx::query_as::<_, Character>(
            r#"
            SELECT id, hanzi, pinyin, stroke_count, translation, hsk_level
            FROM characters
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(characters)
    }

    /// 按 ID 查询汉字
    pub async fn get(&self, id: i64) -> Result<Option<Character>> {
        let character = sqlx::query_as::<_, Character>(
            r#"
            SELECT id, hanzi, pinyin, stroke_count, translation, hsk_level
            FROM characters
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(character)
    }

    /// 列出某汉字的所有例句
    pub async fn example_sentences(&self, character_id: i64) -> Result<Vec<ExampleSentence>> {
        let sentences = sqlx::query_as::<_, ExampleSentence>(
            r#"
            SELECT id, character_id, sentence, translation
            FROM example_sentences
            WHERE character_id = $1
            ORDER BY id
            "#,
        )
        .bind(character_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(sentences)
    }
}

#[async_trait]
impl CharacterRepositoryTrait for CharacterRepository {
    async fn random_character(&self) -> Result<Option<Character>> {
        let character = sqlx::query_as::<_, Character>(
            r#"
            SELECT id, hanzi, pinyin, stroke_count, translation, hsk_level
            FROM characters
            ORDER BY RANDOM()
            LIMIT 1
            "#,
        )
        .fetch_optional(&self.pool)
        .await?;

        Ok(character)
    }
}
