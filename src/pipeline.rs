//! Post-processing stages between raw tokenizer output and a model-ready batch.
//!
//! Stages run in a fixed order: merge the optional pair, truncate into
//! overflow windows, then pad.

use tracing::{debug, instrument};

use crate::config::PostProcessConfig;
use crate::encoding::Encoding;
use crate::error::Result;
use crate::types::{PaddingParams, PaddingStrategy, TruncationParams};

/// Run the configured stages over one encoding and its optional pair.
///
/// Padding only happens here with a [`PaddingStrategy::Fixed`] target;
/// batch-longest padding needs the whole batch, see [`pad_encodings`].
#[instrument(skip_all, fields(len = encoding.len(), has_pair = pair.is_some()))]
pub fn post_process(
    mut encoding: Encoding,
    pair: Option<Encoding>,
    config: &PostProcessConfig,
) -> Result<Encoding> {
    if let Some(pair) = pair {
        encoding.merge_with(pair);
    }

    if let Some(TruncationParams { max_length, stride }) = config.truncation {
        encoding.truncate(max_length, stride)?;
    }

    if let Some(params) = &config.padding
        && let PaddingStrategy::Fixed(target) = params.strategy
    {
        pad_with(&mut encoding, target, params);
    }

    Ok(encoding)
}

/// Truncate every encoding of a batch.
///
/// Stops at the first failure; encodings before it stay truncated.
pub fn truncate_encodings(encodings: &mut [Encoding], params: &TruncationParams) -> Result<()> {
    for encoding in encodings.iter_mut() {
        encoding.truncate(params.max_length, params.stride)?;
    }
    Ok(())
}

/// Pad every encoding of a batch to a common length.
///
/// The target is the fixed length, or for [`PaddingStrategy::BatchLongest`]
/// the longest primary encoding in the batch. Overflow windows are padded
/// to the same target.
#[instrument(skip_all, fields(batch_size = encodings.len()))]
pub fn pad_encodings(encodings: &mut [Encoding], params: &PaddingParams) {
    let target = match params.strategy {
        PaddingStrategy::Fixed(target) => target,
        PaddingStrategy::BatchLongest => match encodings.iter().map(Encoding::len).max() {
            Some(longest) => longest,
            None => return,
        },
    };
    debug!(target, "padding batch");

    for encoding in encodings.iter_mut() {
        pad_with(encoding, target, params);
    }
}

/// Split an encoding into the primary followed by all its overflow windows.
///
/// Nested windows are visited depth first; every returned encoding has an
/// empty overflow list.
pub fn flatten_overflowing(mut encoding: Encoding) -> Vec<Encoding> {
    let windows = encoding.take_overflowing();
    let mut flat = vec![encoding];
    for window in windows {
        flat.extend(flatten_overflowing(window));
    }
    flat
}

fn pad_with(encoding: &mut Encoding, target: usize, params: &PaddingParams) {
    encoding.pad(
        target,
        params.pad_id,
        params.pad_type_id,
        &params.pad_token,
        params.direction,
    );
}
