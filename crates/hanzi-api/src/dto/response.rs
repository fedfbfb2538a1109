//! 响应 DTO 定义
//!
//! 所有 REST API 的响应体结构。成功响应直接返回 DTO 本体，
//! 不包裹信封；错误响应的信封见 error.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use hanzi_core::{
    Character, EarnedAchievement, ExampleSentence, LeaderboardEntry, Score, User,
    service::WordOfDay,
};

/// 登录成功响应
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

impl TokenResponse {
    /// Bearer 类型 Token
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
        }
    }
}

/// 注册成功响应
///
/// 注册即登录：携带用户信息和新签发的 Token
#[derive(Debug, Serialize)]
pub struct RegisteredUserResponse {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub registration_date: DateTime<Utc>,
    pub access_token: String,
    pub token_type: String,
}

impl RegisteredUserResponse {
    pub fn new(user: User, access_token: String) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            registration_date: user.registration_date,
            access_token,
            token_type: "bearer".to_string(),
        }
    }
}

/// 用户信息响应
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub registration_date: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            registration_date: user.registration_date,
        }
    }
}

/// 每日一字响应
#[derive(Debug, Serialize)]
pub struct WordOfDayResponse {
    pub hanzi: String,
    pub pinyin: String,
}

impl From<WordOfDay> for WordOfDayResponse {
    fn from(word: WordOfDay) -> Self {
        Self {
            hanzi: word.hanzi,
            pinyin: word.pinyin,
        }
    }
}

/// 闪卡列表项响应（精简版）
#[derive(Debug, Serialize)]
pub struct CharacterFlashcardResponse {
    pub id: i64,
    pub hanzi: String,
    pub pinyin: String,
    pub translation: String,
}

impl From<Character> for CharacterFlashcardResponse {
    fn from(character: Character) -> Self {
        Self {
            id: character.id,
            hanzi: character.hanzi,
            pinyin: character.pinyin,
            translation: character.translation,
        }
    }
}

/// 例句响应
#[derive(Debug, Serialize)]
pub struct ExampleSentenceResponse {
    pub sentence: String,
    pub translation: String,
}

impl From<ExampleSentence> for ExampleSentenceResponse {
    fn from(sentence: ExampleSentence) -> Self {
        Self {
            sentence: sentence.sentence,
            translation: sentence.translation,
        }
    }
}

/// 汉字详情响应
#[derive(Debug, Serialize)]
pub struct CharacterDetailResponse {
    pub id: i64,
    pub hanzi: String,
    pub pinyin: String,
    pub translation: String,
    pub stroke_count: i32,
    pub hsk_level: i32,
    pub example_sentences: Vec<ExampleSentenceResponse>,
    pub is_favorite: bool,
}

impl CharacterDetailResponse {
    /// 详情页：附带例句与当前用户的收藏标记
    pub fn with_sentences(
        character: Character,
        sentences: Vec<ExampleSentence>,
        is_favorite: bool,
    ) -> Self {
        Self {
            id: character.id,
            hanzi: character.hanzi,
            pinyin: character.pinyin,
            translation: character.translation,
            stroke_count: character.stroke_count,
            hsk_level: character.hsk_level,
            example_sentences: sentences.into_iter().map(Into::into).collect(),
            is_favorite,
        }
    }

    /// 收藏列表项：不展开例句，收藏标记恒为 true
    pub fn favorite_summary(character: Character) -> Self {
        Self::with_sentences(character, Vec::new(), true)
    }
}

/// 收藏翻转响应
#[derive(Debug, Serialize)]
pub struct FavoriteToggleResponse {
    pub status: String,
    pub is_favorite: bool,
}

/// 收藏数响应
#[derive(Debug, Serialize)]
pub struct FavoriteCountResponse {
    pub count: i64,
}

/// 已获得成就响应
#[derive(Debug, Serialize)]
pub struct AchievementResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub obtained_date: NaiveDate,
}

impl From<EarnedAchievement> for AchievementResponse {
    fn from(earned: EarnedAchievement) -> Self {
        Self {
            id: earned.id,
            name: earned.name,
            description: earned.description,
            image_url: earned.image_url,
            obtained_date: earned.obtained_date,
        }
    }
}

/// 分数记录响应
#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub id: i64,
    pub game_id: i64,
    pub user_id: i64,
    pub score: i32,
    pub difficulty: String,
    pub parameters: String,
}

impl From<Score> for ScoreResponse {
    fn from(score: Score) -> Self {
        Self {
            id: score.id,
            game_id: score.game_id,
            user_id: score.user_id,
            score: score.score,
            difficulty: score.difficulty,
            parameters: score.parameters,
        }
    }
}

/// 排行榜条目响应
#[derive(Debug, Serialize)]
pub struct LeaderboardEntryResponse {
    pub user_name: String,
    pub game_id: i64,
    pub score: i32,
    pub difficulty: String,
}

impl From<LeaderboardEntry> for LeaderboardEntryResponse {
    fn from(entry: LeaderboardEntry) -> Self {
        Self {
            user_name: entry.user_name,
            game_id: entry.game_id,
            score: entry.score,
            difficulty: entry.difficulty,
        }
    }
}

/// 通用状态响应
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 线格式为 snake_case，字段名是对外契约的一部分
    #[test]
    fn test_token_response_wire_format() {
        let response = TokenResponse::bearer("abc".to_string());
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["access_token"], "abc");
        assert_eq!(json["token_type"], "bearer");
    }

    #[test]
    fn test_word_of_day_wire_format() {
        let response = WordOfDayResponse {
            hanzi: "水".to_string(),
            pinyin: "shuǐ".to_string(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"hanzi\""));
        assert!(json.contains("\"pinyin\""));
    }

    #[test]
    fn test_favorite_summary_has_no_sentences() {
        let character = Character {
            id: 5,
            hanzi: "火".to_string(),
            pinyin: "huǒ".to_string(),
            stroke_count: 4,
            translation: "fire".to_string(),
            hsk_level: 1,
        };

        let detail = CharacterDetailResponse::favorite_summary(character);
        assert!(detail.example_sentences.is_empty());
        assert!(detail.is_favorite);

        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["stroke_count"], 4);
        assert_eq!(json["hsk_level"], 1);
        assert_eq!(json["is_favorite"], true);
    }
}
