//! Truncation and padding parameters.

use serde::{Deserialize, Serialize};

/// Which side of an encoding receives filler tokens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaddingDirection {
    /// Prepend filler; real content ends up at the tail.
    Left,
    #[default]
    Right,
}

impl PaddingDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// Sliding-window truncation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TruncationParams {
    /// Tokens kept in the primary encoding and in every overflow window.
    pub max_length: usize,
    /// Tokens repeated between consecutive windows. Must be below `max_length`.
    #[serde(default)]
    pub stride: usize,
}

impl TruncationParams {
    pub fn new(max_length: usize) -> Self {
        Self {
            max_length,
            stride: 0,
        }
    }

    pub fn stride(mut self, stride: usize) -> Self {
        self.stride = stride;
        self
    }
}

/// How the padding target length is chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaddingStrategy {
    /// Pad every encoding of a batch to the longest one.
    #[default]
    BatchLongest,
    /// Pad to a fixed length.
    Fixed(usize),
}

/// Padding settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaddingParams {
    #[serde(default)]
    pub strategy: PaddingStrategy,
    #[serde(default)]
    pub direction: PaddingDirection,
    #[serde(default)]
    pub pad_id: u32,
    #[serde(default)]
    pub pad_type_id: u32,
    #[serde(default = "default_pad_token")]
    pub pad_token: String,
}

impl Default for PaddingParams {
    fn default() -> Self {
        Self {
            strategy: PaddingStrategy::default(),
            direction: PaddingDirection::default(),
            pad_id: 0,
            pad_type_id: 0,
            pad_token: default_pad_token(),
        }
    }
}

fn default_pad_token() -> String {
    "[PAD]".to_string()
}

impl PaddingParams {
    pub fn strategy(mut self, strategy: PaddingStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn direction(mut self, direction: PaddingDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn pad_id(mut self, id: u32) -> Self {
        self.pad_id = id;
        self
    }

    pub fn pad_type_id(mut self, type_id: u32) -> Self {
        self.pad_type_id = type_id;
        self
    }

    pub fn pad_token(mut self, token: impl Into<String>) -> Self {
        self.pad_token = token.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_defaults() {
        let params = PaddingParams::default();
        assert_eq!(params.strategy, PaddingStrategy::BatchLongest);
        assert_eq!(params.direction, PaddingDirection::Right);
        assert_eq!(params.pad_id, 0);
        assert_eq!(params.pad_token, "[PAD]");
    }

    #[test]
    fn truncation_builder() {
        let params = TruncationParams::new(128).stride(32);
        assert_eq!(params.max_length, 128);
        assert_eq!(params.stride, 32);
    }
}
