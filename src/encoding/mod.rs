//! The per-sequence tokenization result.
//!
//! An [`Encoding`] holds eight parallel per-token attributes plus the
//! overflow windows produced by truncation. Every public operation returns
//! with all parallel arrays the same length, in the primary encoding and in
//! each overflow window.
//!
//! Transforms live in submodules:
//!
//! - [`truncate`](Encoding::truncate): sliding-window split into overflow windows
//! - [`merge_with`](Encoding::merge_with): pair concatenation with offset/word rebasing
//! - [`pad`](Encoding::pad): fill to a target length on either side
//! - positional lookups between words, tokens and original-text positions

mod lookup;
mod merge;
mod pad;
mod truncate;

use serde::{Deserialize, Serialize};

use crate::types::{Offsets, Token};
use crate::{Result, TokalignError};

/// Output of tokenizing one sequence (or a merged pair of sequences).
///
/// Deserialization goes through [`Encoding::new`], so ragged arrays are
/// rejected at any nesting depth.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawEncoding")]
pub struct Encoding {
    ids: Vec<u32>,
    type_ids: Vec<u32>,
    tokens: Vec<String>,
    offsets: Vec<Offsets>,
    special_tokens_mask: Vec<u32>,
    attention_mask: Vec<u32>,
    words: Vec<Option<u32>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    overflowing: Vec<Encoding>,
}

impl Encoding {
    /// Build an encoding from fully formed parallel arrays.
    ///
    /// Fails with [`TokalignError::InvalidArgument`] if the arrays differ in
    /// length.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        ids: Vec<u32>,
        type_ids: Vec<u32>,
        tokens: Vec<String>,
        offsets: Vec<Offsets>,
        special_tokens_mask: Vec<u32>,
        attention_mask: Vec<u32>,
        words: Vec<Option<u32>>,
        overflowing: Vec<Encoding>,
    ) -> Result<Self> {
        let len = ids.len();
        let lengths = [
            type_ids.len(),
            tokens.len(),
            offsets.len(),
            special_tokens_mask.len(),
            attention_mask.len(),
            words.len(),
        ];
        if lengths.iter().any(|&other| other != len) {
            return Err(TokalignError::InvalidArgument(format!(
                "parallel encoding arrays differ in length: {len} ids, others {lengths:?}"
            )));
        }
        Ok(Self {
            ids,
            type_ids,
            tokens,
            offsets,
            special_tokens_mask,
            attention_mask,
            words,
            overflowing,
        })
    }

    /// An encoding of `len` default entries with untracked words.
    pub fn with_capacity(len: usize) -> Self {
        Self {
            ids: vec![0; len],
            type_ids: vec![0; len],
            tokens: vec![String::new(); len],
            offsets: vec![Offsets::none(); len],
            special_tokens_mask: vec![0; len],
            attention_mask: vec![0; len],
            words: vec![None; len],
            overflowing: Vec::new(),
        }
    }

    /// Build the initial encoding from model-stage tokens.
    ///
    /// Every token is attended to and none is special; all type ids are `type_id`.
    pub fn from_tokens(tokens: Vec<Token>, type_id: u32) -> Self {
        let len = tokens.len();
        let mut encoding = Self {
            ids: Vec::with_capacity(len),
            type_ids: vec![type_id; len],
            tokens: Vec::with_capacity(len),
            offsets: Vec::with_capacity(len),
            special_tokens_mask: vec![0; len],
            attention_mask: vec![1; len],
            words: Vec::with_capacity(len),
            overflowing: Vec::new(),
        };
        for token in tokens {
            encoding.ids.push(token.id);
            encoding.tokens.push(token.value);
            encoding.offsets.push(token.offsets);
            encoding.words.push(token.word);
        }
        encoding
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> &[u32] {
        &self.ids
    }

    pub fn type_ids(&self) -> &[u32] {
        &self.type_ids
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn offsets(&self) -> &[Offsets] {
        &self.offsets
    }

    pub fn special_tokens_mask(&self) -> &[u32] {
        &self.special_tokens_mask
    }

    pub fn attention_mask(&self) -> &[u32] {
        &self.attention_mask
    }

    /// Word-group index per token; `None` where the word is not tracked.
    pub fn words(&self) -> &[Option<u32>] {
        &self.words
    }

    pub fn overflowing(&self) -> &[Encoding] {
        &self.overflowing
    }

    /// Remove and return the overflow windows, leaving none behind.
    pub fn take_overflowing(&mut self) -> Vec<Encoding> {
        std::mem::take(&mut self.overflowing)
    }

    /// Overwrite every type id, e.g. to mark this as the second sequence of a pair.
    pub fn set_type_ids(&mut self, type_id: u32) {
        self.type_ids.fill(type_id);
    }

    /// Clone of the token arrays without the overflow windows.
    fn without_overflowing(&self) -> Self {
        Self {
            ids: self.ids.clone(),
            type_ids: self.type_ids.clone(),
            tokens: self.tokens.clone(),
            offsets: self.offsets.clone(),
            special_tokens_mask: self.special_tokens_mask.clone(),
            attention_mask: self.attention_mask.clone(),
            words: self.words.clone(),
            overflowing: Vec::new(),
        }
    }
}

/// Wire form of [`Encoding`], checked by [`Encoding::new`] before use.
#[derive(Deserialize)]
struct RawEncoding {
    ids: Vec<u32>,
    type_ids: Vec<u32>,
    tokens: Vec<String>,
    offsets: Vec<Offsets>,
    special_tokens_mask: Vec<u32>,
    attention_mask: Vec<u32>,
    words: Vec<Option<u32>>,
    #[serde(default)]
    overflowing: Vec<Encoding>,
}

impl TryFrom<RawEncoding> for Encoding {
    type Error = TokalignError;

    fn try_from(raw: RawEncoding) -> Result<Self> {
        Encoding::new(
            raw.ids,
            raw.type_ids,
            raw.tokens,
            raw.offsets,
            raw.special_tokens_mask,
            raw.attention_mask,
            raw.words,
            raw.overflowing,
        )
    }
}
