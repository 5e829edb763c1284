//! Padding to a target length.

use std::iter;

use tracing::debug;

use super::Encoding;
use crate::telemetry;
use crate::types::{Offsets, PaddingDirection};

impl Encoding {
    /// Grow every parallel array to `target_length` with filler tokens.
    ///
    /// Filler tokens are special, not attended to, carry an empty `{0, 0}`
    /// span and no word. Each overflow window is padded to the same target
    /// independently. Nothing changes when the encoding is already at least
    /// `target_length` long.
    pub fn pad(
        &mut self,
        target_length: usize,
        pad_id: u32,
        pad_type_id: u32,
        pad_token: &str,
        direction: PaddingDirection,
    ) {
        for window in &mut self.overflowing {
            window.pad(target_length, pad_id, pad_type_id, pad_token, direction);
        }

        if self.len() >= target_length {
            return;
        }
        let pad_length = target_length - self.len();

        match direction {
            PaddingDirection::Left => {
                prepend(&mut self.ids, pad_id, pad_length);
                prepend(&mut self.type_ids, pad_type_id, pad_length);
                prepend(&mut self.tokens, pad_token.to_string(), pad_length);
                prepend(&mut self.offsets, Offsets::none(), pad_length);
                prepend(&mut self.special_tokens_mask, 1, pad_length);
                prepend(&mut self.attention_mask, 0, pad_length);
                prepend(&mut self.words, None, pad_length);
            }
            PaddingDirection::Right => {
                self.ids.resize(target_length, pad_id);
                self.type_ids.resize(target_length, pad_type_id);
                self.tokens.resize(target_length, pad_token.to_string());
                self.offsets.resize(target_length, Offsets::none());
                self.special_tokens_mask.resize(target_length, 1);
                self.attention_mask.resize(target_length, 0);
                self.words.resize(target_length, None);
            }
        }

        debug!(target_length, pad_length, direction = direction.as_str(), "padded encoding");
        metrics::counter!(telemetry::PADDING_TOKENS_TOTAL, "direction" => direction.as_str())
            .increment(pad_length as u64);
    }
}

fn prepend<T: Clone>(values: &mut Vec<T>, filler: T, count: usize) {
    values.splice(0..0, iter::repeat_n(filler, count));
}
