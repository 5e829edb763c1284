//! Token types for tokenization results.

use serde::{Deserialize, Serialize};

use super::Offsets;

/// A single token as produced by the model stage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Token {
    /// Token ID in the vocabulary.
    pub id: u32,
    /// Text representation of the token.
    pub value: String,
    /// Span of the original text this token came from.
    pub offsets: Offsets,
    /// Index of the source word this token was split from, if tracked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word: Option<u32>,
}

impl Token {
    /// Create a new token.
    pub fn new(id: u32, value: impl Into<String>, offsets: impl Into<Offsets>) -> Self {
        Self {
            id,
            value: value.into(),
            offsets: offsets.into(),
            word: None,
        }
    }

    /// Attach the word-group index.
    pub fn word(mut self, word: u32) -> Self {
        self.word = Some(word);
        self
    }
}
