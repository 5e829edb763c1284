//! Telemetry metric name constants.
//!
//! Centralised metric names for encoding transforms. Consumers install
//! their own `metrics` recorder (e.g. prometheus, statsd); without a
//! recorder installed, all metric calls are no-ops.
//!
//! # Metric naming conventions
//!
//! All metrics are prefixed with `tokalign_`. Counters end in `_total`.
//!
//! # Common labels
//!
//! - `direction` — padding side: "left" or "right"

/// Total truncations that actually split an encoding.
///
/// Identity truncations (input already short enough) are not counted.
pub const TRUNCATIONS_TOTAL: &str = "tokalign_truncations_total";

/// Total overflow windows produced by truncation.
pub const OVERFLOW_WINDOWS_TOTAL: &str = "tokalign_overflow_windows_total";

/// Total pair merges (top-level `merge_with` calls, not the cross-product entries).
pub const MERGES_TOTAL: &str = "tokalign_merges_total";

/// Total filler tokens inserted by padding, overflow windows included.
///
/// Labels: `direction` ("left" | "right").
pub const PADDING_TOKENS_TOTAL: &str = "tokalign_padding_tokens_total";
