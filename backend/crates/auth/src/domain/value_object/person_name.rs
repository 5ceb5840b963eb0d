//! Person Name Value Object
//!
//! 顧客の姓・名。表示と配送ラベルに使う自由記述の名前。
//!
//! ## 設計方針
//! - NFKC正規化 → 前後の空白除去 → 連続空白を1つに圧縮
//! - 文字種は制限しない（非ASCIIの名前を許可）
//!
//! ## 不変条件
//! - 空でない
//! - 長さ: 最大100文字（正規化後）
//! - 制御文字を含まない

use derive_more::Display;
use unicode_normalization::UnicodeNormalization;

/// Maximum length for a name part (in characters)
pub const PERSON_NAME_MAX_LENGTH: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub struct PersonName(String);

impl PersonName {
    /// `field` names the payload field in error messages
    pub fn new(raw: &str, field: &str) -> Result<Self, String> {
        let normalized: String = raw.nfkc().collect();
        let collapsed = normalized.split_whitespace().collect::<Vec<_>>().join(" ");

        if collapsed.is_empty() {
            return Err(format!("{field} is required"));
        }
        if collapsed.chars().count() > PERSON_NAME_MAX_LENGTH {
            return Err(format!(
                "{field} must be at most {PERSON_NAME_MAX_LENGTH} characters"
            ));
        }
        if collapsed.chars().any(char::is_control) {
            return Err(format!("{field} contains invalid characters"));
        }

        Ok(Self(collapsed))
    }

    /// DB から復元（検証済みとして扱う）
    pub fn from_db(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}
