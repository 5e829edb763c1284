//! Pair merging.

use tracing::debug;

use super::Encoding;
use crate::telemetry;

impl Encoding {
    /// Append `pair` to this encoding, as for a `[sequence A, sequence B]` input.
    ///
    /// The pair's offsets are shifted past the furthest offset end of this
    /// encoding and its tracked word indices past the highest word index
    /// tracked here, so both stay unique across the result.
    ///
    /// Overflow windows become the cross product of both sides: every
    /// window of this encoding merged with the pair and with each of the
    /// pair's windows, followed by this encoding merged with each of the
    /// pair's windows. With `a` and `b` windows on either side the result
    /// carries `a * b + a + b` windows.
    pub fn merge_with(&mut self, pair: Encoding) {
        let (own_windows, pair_windows) = (self.overflowing.len(), pair.overflowing.len());
        self.merge_pair(&pair);

        debug!(
            len = self.len(),
            own_windows,
            pair_windows,
            windows = self.overflowing.len(),
            "merged encoding pair"
        );
        metrics::counter!(telemetry::MERGES_TOTAL).increment(1);
    }

    /// Fold [`merge_with`](Self::merge_with) left to right over `encodings`.
    ///
    /// An empty input yields an empty encoding.
    pub fn merge<I>(encodings: I) -> Encoding
    where
        I: IntoIterator<Item = Encoding>,
    {
        let mut encodings = encodings.into_iter();
        let Some(mut merged) = encodings.next() else {
            return Encoding::default();
        };
        for encoding in encodings {
            merged.merge_with(encoding);
        }
        merged
    }

    fn merge_pair(&mut self, pair: &Encoding) {
        let own = self.overflowing.len();
        let theirs = pair.overflowing.len();
        let mut overflowing = Vec::with_capacity(own * theirs + own + theirs);

        if own > 0 {
            let bare_pair = pair.without_overflowing();
            for window in &self.overflowing {
                overflowing.push(merged(window, &bare_pair));
                for pair_window in &pair.overflowing {
                    overflowing.push(merged(window, pair_window));
                }
            }
        }

        if theirs > 0 {
            let bare_self = self.without_overflowing();
            for pair_window in &pair.overflowing {
                overflowing.push(merged(&bare_self, pair_window));
            }
        }

        self.concat(pair);
        self.overflowing = overflowing;
    }

    /// Append the pair's token arrays, rebasing offsets and word indices.
    fn concat(&mut self, pair: &Encoding) {
        let offset_base = self.offsets.iter().map(|o| o.end).max().unwrap_or(0);
        // windows do not number their words from 0
        let word_base = self.words.iter().flatten().max().map_or(0, |w| w + 1);

        let offsets = pair.offsets.iter().map(|o| o.shifted(offset_base));
        let words = pair.words.iter().map(|w| w.map(|w| w + word_base));

        self.ids.extend_from_slice(&pair.ids);
        self.type_ids.extend_from_slice(&pair.type_ids);
        self.tokens.extend_from_slice(&pair.tokens);
        self.offsets.extend(offsets);
        self.special_tokens_mask
            .extend_from_slice(&pair.special_tokens_mask);
        self.attention_mask.extend_from_slice(&pair.attention_mask);
        self.words.extend(words);
    }
}

/// A fresh copy of `base` merged with `pair`.
fn merged(base: &Encoding, pair: &Encoding) -> Encoding {
    let mut entry = base.clone();
    entry.merge_pair(pair);
    entry
}
