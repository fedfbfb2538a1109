//! 每日一字缓存
//!
//! 单槽 TTL 缓存：24 小时窗口内返回同一个随机汉字。槽位由
//! RwLock 保护并归属于服务实例，不使用进程级全局状态。
//! 两个并发未命中可能各自查库并先后写槽，后写者胜出，属可接受竞态。

use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use crate::error::{CoreError, Result};
use crate::repository::{CharacterRepository, CharacterRepositoryTrait};

/// 默认缓存窗口：24 小时
pub const DEFAULT_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// 每日一字
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WordOfDay {
    pub hanzi: String,
    pub pinyin: String,
}

/// 缓存槽内容
struct CachedWord {
    word: WordOfDay,
    expires_at: Instant,
}

/// 每日一字服务
pub struct WordOfDayService<CR: CharacterRepositoryTrait> {
    characters: Arc<CR>,
    ttl: Duration,
    slot: RwLock<Option<CachedWord>>,
}

/// 默认 Postgres 仓储组合
pub type PgWordOfDayService = WordOfDayService<CharacterRepository>;

impl<CR: CharacterRepositoryTrait> WordOfDayService<CR> {
    pub fn new(characters: Arc<CR>) -> Self {
        Self::with_ttl(characters, DEFAULT_TTL)
    }

    /// 指定缓存窗口构造（测试用短窗口）
    pub fn with_ttl(characters: Arc<CR>, ttl: Duration) -> Self {
        Self {
            characters,
            ttl,
            slot: RwLock::new(None),
        }
    }

    /// 获取当前窗口的每日一字
    ///
    /// 命中时原样返回缓存值；未命中时随机抽取一个汉字写入槽位。
    /// 字库为空时返回 NoCharacters
    #[instrument(skip(self))]
    pub async fn word_of_day(&self) -> Result<WordOfDay> {
        {
            let slot = self.slot.read().await;
            if let Some(cached) = slot.as_ref() {
                if cached.expires_at > Instant::now() {
                    return Ok(cached.word.clone());
                }
            }
        }

        debug!("Word-of-day cache miss, picking a new character");

        let character = self
            .characters
            .random_character()
            .await?
            .ok_or(CoreError::NoCharacters)?;

        let word = WordOfDay {
            hanzi: character.hanzi,
            pinyin: character.pinyin,
        };

        let mut slot = self.slot.write().await;
        *slot = Some(CachedWord {
            word: word.clone(),
            expires_at: Instant::now() + self.ttl,
        });

        Ok(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Character;
    use crate::repository::traits::MockCharacterRepositoryTrait;

    fn character(id: i64, hanzi: &str, pinyin: &str) -> Character {
        Character {
            id,
            hanzi: hanzi.to_string(),
            pinyin: pinyin.to_string(),
            stroke_count: 4,
            translation: "test".to_string(),
            hsk_level: 1,
        }
    }

    #[tokio::test]
    async fn test_hit_returns_cached_word_unchanged() {
        let mut repo = MockCharacterRepositoryTrait::new();
        // 只允许查库一次：窗口内第二次调用必须走缓存
        repo.expect_random_character()
            .times(1)
            .returning(|| Ok(Some(character(1, "水", "shuǐ"))));

        let service = WordOfDayService::with_ttl(Arc::new(repo), Duration::from_secs(60));

        let first = service.word_of_day().await.unwrap();
        let second = service.word_of_day().await.unwrap();
        assert_eq!(first, second);
        assert_eq!(first.hanzi, "水");
    }

    #[tokio::test]
    async fn test_expired_slot_is_refetched() {
        let mut repo = MockCharacterRepositoryTrait::new();
        repo.expect_random_character()
            .times(1)
            .returning(|| Ok(Some(character(1, "水", "shuǐ"))));
        repo.expect_random_character()
            .times(1)
            .returning(|| Ok(Some(character(2, "火", "huǒ"))));

        let service = WordOfDayService::with_ttl(Arc::new(repo), Duration::from_millis(30));

        let first = service.word_of_day().await.unwrap();
        assert_eq!(first.hanzi, "水");

        tokio::time::sleep(Duration::from_millis(60)).await;

        let second = service.word_of_day().await.unwrap();
        assert_eq!(second.hanzi, "火");
    }

    #[tokio::test]
    async fn test_empty_table_yields_no_characters() {
        let mut repo = MockCharacterRepositoryTrait::new();
        repo.expect_random_character().returning(|| Ok(None));

        let service = WordOfDayService::new(Arc::new(repo));

        let err = service.word_of_day().await.unwrap_err();
        assert!(matches!(err, CoreError::NoCharacters));
    }
}
