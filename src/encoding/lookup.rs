//! Conversions between word indices, token indices and original-text positions.
//!
//! All lookups are read-only and return `None` when the queried word, token
//! or position has no counterpart, e.g. a position that only padding or
//! special tokens cover.

use super::Encoding;
use crate::types::Offsets;

impl Encoding {
    /// Token range `[start, end)` covering every token of `word`.
    pub fn word_to_tokens(&self, word: u32) -> Option<(usize, usize)> {
        let mut matching = self
            .words
            .iter()
            .enumerate()
            .filter(|(_, w)| **w == Some(word))
            .map(|(i, _)| i);

        let start = matching.next()?;
        let end = matching.last().unwrap_or(start) + 1;
        Some((start, end))
    }

    /// Original-text span of `word`, from its first token's start to its last token's end.
    pub fn word_to_chars(&self, word: u32) -> Option<Offsets> {
        let (start, end) = self.word_to_tokens(word)?;
        Some(Offsets {
            start: self.offsets[start].start,
            end: self.offsets[end - 1].end,
        })
    }

    /// Original-text span of the token at `token`.
    pub fn token_to_chars(&self, token: usize) -> Option<Offsets> {
        self.offsets.get(token).copied()
    }

    /// Word index of the token at `token`, if the token exists and its word is tracked.
    pub fn token_to_word(&self, token: usize) -> Option<u32> {
        self.words.get(token).copied().flatten()
    }

    /// Index of the first token whose span contains `pos`.
    pub fn char_to_token(&self, pos: usize) -> Option<usize> {
        self.offsets.iter().position(|o| o.contains(pos))
    }

    /// Word index of the token containing `pos`.
    pub fn char_to_word(&self, pos: usize) -> Option<u32> {
        let token = self.char_to_token(pos)?;
        self.token_to_word(token)
    }
}
