//! Tokalign - offset-aligned tokenizer encodings
//!
//! This crate holds the result of tokenizing text into sub-word units and
//! the transforms applied before it reaches a model: pair merging,
//! sliding-window truncation into overflow windows, and padding. Every token
//! keeps its span in the original text through each transform.
//!
//! # Example
//!
//! ```rust
//! use tokalign::{Encoding, Offsets, PaddingDirection, Token};
//!
//! # fn main() -> tokalign::Result<()> {
//! let question = Encoding::from_tokens(
//!     vec![
//!         Token::new(11, "who", (0, 3)).word(0),
//!         Token::new(12, "won", (4, 7)).word(1),
//!     ],
//!     0,
//! );
//! let context = Encoding::from_tokens(
//!     vec![
//!         Token::new(21, "the", (0, 3)).word(0),
//!         Token::new(22, "home", (4, 8)).word(1),
//!         Token::new(23, "team", (9, 13)).word(2),
//!     ],
//!     1,
//! );
//!
//! let mut encoding = question;
//! encoding.merge_with(context);
//! encoding.truncate(4, 1)?;
//! encoding.pad(4, 0, 0, "[PAD]", PaddingDirection::Right);
//!
//! assert_eq!(encoding.ids(), &[11, 12, 21, 22]);
//! assert_eq!(encoding.overflowing()[0].ids(), &[22, 23, 0, 0]);
//! assert_eq!(encoding.word_to_chars(3), Some(Offsets::new(11, 15)));
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod encoding;
pub mod error;
pub mod pipeline;
pub mod telemetry;
pub mod tokenizer;
pub mod types;

// Re-export main types at crate root
pub use config::PostProcessConfig;
pub use encoding::Encoding;
pub use error::{Result, TokalignError};
pub use pipeline::{flatten_overflowing, pad_encodings, post_process, truncate_encodings};
pub use tokenizer::{TokenizerProvider, encode, encode_pair};
pub use types::{
    Offsets, PaddingDirection, PaddingParams, PaddingStrategy, Token, TruncationParams,
};
