//! Post-processing configuration.
//!
//! Truncation and padding settings are read from TOML:
//!
//! ```toml
//! [truncation]
//! max_length = 512
//! stride = 128
//!
//! [padding]
//! strategy = { fixed = 512 }
//! direction = "left"
//! pad_id = 0
//! pad_token = "[PAD]"
//! ```
//!
//! Both sections are optional; a missing section disables that stage.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::types::{PaddingParams, TruncationParams};
use crate::{Result, TokalignError};

/// Which post-processing stages run, and how.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostProcessConfig {
    #[serde(default)]
    pub truncation: Option<TruncationParams>,
    #[serde(default)]
    pub padding: Option<PaddingParams>,
}

impl PostProcessConfig {
    pub fn truncation(mut self, params: TruncationParams) -> Self {
        self.truncation = Some(params);
        self
    }

    pub fn padding(mut self, params: PaddingParams) -> Self {
        self.padding = Some(params);
        self
    }

    /// Load and validate configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            TokalignError::Configuration(format!("Failed to read config file {path:?}: {e}"))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| {
            TokalignError::Configuration(format!("Failed to parse config: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject truncation settings that truncation itself would refuse.
    pub fn validate(&self) -> Result<()> {
        if let Some(TruncationParams { max_length, stride }) = self.truncation
            && (max_length == 0 || stride >= max_length)
        {
            return Err(TokalignError::Configuration(format!(
                "truncation stride ({stride}) must be less than max_length ({max_length}) \
                 and max_length must be greater than zero"
            )));
        }
        Ok(())
    }
}
