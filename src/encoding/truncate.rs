//! Sliding-window truncation.

use tracing::{debug, warn};

use super::Encoding;
use crate::telemetry;
use crate::{Result, TokalignError};

impl Encoding {
    /// Keep the first `max_len` tokens and tile the rest into overflow windows.
    ///
    /// Each window starts with the last `stride` tokens of the window before
    /// it (the kept prefix for the first window) followed by up to
    /// `max_len - stride` tokens not seen yet. The windows replace any
    /// existing `overflowing` list. Encodings no longer than `max_len` are
    /// left untouched.
    ///
    /// Fails with [`TokalignError::InvalidArgument`] when `max_len` is zero or
    /// `stride >= max_len`; the encoding is not modified in that case.
    pub fn truncate(&mut self, max_len: usize, stride: usize) -> Result<()> {
        if max_len == 0 || stride >= max_len {
            warn!(max_len, stride, "rejected truncation parameters");
            return Err(TokalignError::InvalidArgument(format!(
                "stride ({stride}) must be less than max_len ({max_len}) \
                 and max_len must be greater than zero"
            )));
        }

        if self.len() <= max_len {
            return Ok(());
        }

        // split_off moves the tail into a fresh allocation; nothing is shared
        let material = Encoding {
            ids: self.ids.split_off(max_len),
            type_ids: self.type_ids.split_off(max_len),
            tokens: self.tokens.split_off(max_len),
            offsets: self.offsets.split_off(max_len),
            special_tokens_mask: self.special_tokens_mask.split_off(max_len),
            attention_mask: self.attention_mask.split_off(max_len),
            words: self.words.split_off(max_len),
            overflowing: Vec::new(),
        };

        let part_size = max_len - stride;
        let mut windows: Vec<Encoding> = Vec::new();
        let mut part = 0;
        while part * part_size < material.len() {
            let window = {
                let previous: &Encoding = windows.last().unwrap_or(&*self);
                previous.next_window(&material, part_size, part, stride)
            };
            windows.push(window);
            part += 1;
        }

        debug!(
            max_len,
            stride,
            overflow_tokens = material.len(),
            windows = windows.len(),
            "truncated encoding"
        );
        metrics::counter!(telemetry::TRUNCATIONS_TOTAL).increment(1);
        metrics::counter!(telemetry::OVERFLOW_WINDOWS_TOTAL).increment(windows.len() as u64);

        self.overflowing = windows;
        Ok(())
    }

    /// Build overflow window `part` from this (previous) window and the material.
    fn next_window(
        &self,
        material: &Encoding,
        size: usize,
        part: usize,
        stride: usize,
    ) -> Encoding {
        Encoding {
            ids: current_part(&self.ids, &material.ids, size, part, stride),
            type_ids: current_part(&self.type_ids, &material.type_ids, size, part, stride),
            tokens: current_part(&self.tokens, &material.tokens, size, part, stride),
            offsets: current_part(&self.offsets, &material.offsets, size, part, stride),
            special_tokens_mask: current_part(
                &self.special_tokens_mask,
                &material.special_tokens_mask,
                size,
                part,
                stride,
            ),
            attention_mask: current_part(
                &self.attention_mask,
                &material.attention_mask,
                size,
                part,
                stride,
            ),
            words: current_part(&self.words, &material.words, size, part, stride),
            overflowing: Vec::new(),
        }
    }
}

/// Last `stride` elements of `previous` followed by chunk `part` of `material`.
///
/// The chunk is `size` elements long except at the end of `material`.
/// `previous` must hold at least `stride` elements.
fn current_part<T: Clone>(
    previous: &[T],
    material: &[T],
    size: usize,
    part: usize,
    stride: usize,
) -> Vec<T> {
    let start = part * size;
    let end = (start + size).min(material.len());
    let overlap = &previous[previous.len() - stride..];

    let mut out = Vec::with_capacity(overlap.len() + end - start);
    out.extend_from_slice(overlap);
    out.extend_from_slice(&material[start..end]);
    out
}
