//! Boundary with the model stage that produces tokens.
//!
//! The sub-word algorithm itself (WordPiece, BPE, ...) lives outside this
//! crate. Anything that can turn text into [`Token`]s implements
//! [`TokenizerProvider`] and gets encodings built from its output.

use tracing::instrument;

use crate::encoding::Encoding;
use crate::error::Result;
use crate::types::Token;

/// Trait for tokenizer implementations.
pub trait TokenizerProvider: Send + Sync {
    /// Split text into tokens carrying ids, original-text offsets and word indices.
    fn tokenize(&self, text: &str) -> Result<Vec<Token>>;
}

/// Tokenize `text` into a fresh encoding whose type ids are all `type_id`.
#[instrument(skip(provider, text), fields(text_len = text.len()))]
pub fn encode(provider: &dyn TokenizerProvider, text: &str, type_id: u32) -> Result<Encoding> {
    let tokens = provider.tokenize(text)?;
    Ok(Encoding::from_tokens(tokens, type_id))
}

/// Tokenize a sequence pair and merge it, type id 0 for `first` and 1 for `second`.
#[instrument(skip(provider, first, second))]
pub fn encode_pair(
    provider: &dyn TokenizerProvider,
    first: &str,
    second: &str,
) -> Result<Encoding> {
    let mut encoding = encode(provider, first, 0)?;
    encoding.merge_with(encode(provider, second, 1)?);
    Ok(encoding)
}
