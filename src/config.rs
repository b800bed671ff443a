use serde::{Deserialize, Serialize};

use crate::error::ComposerError;

/// Largest width or height of a compressed attachment, in pixels.
pub const DEFAULT_MAX_DIMENSION: u32 = 300;
/// JPEG quality handed to the canvas encoder.
pub const DEFAULT_QUALITY: f64 = 0.7;
/// Upper bound on the compressed data URI length (100 KiB).
pub const DEFAULT_MAX_ENCODED_LEN: usize = 100 * 1024;

/// Parameters of the attachment downscale-and-compress step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompressionConfig {
    pub max_dimension: u32,
    pub quality: f64,
    pub max_encoded_len: usize,
}

impl Default for CompressionConfig {
    fn default() -> Self {
        Self {
            max_dimension: DEFAULT_MAX_DIMENSION,
            quality: DEFAULT_QUALITY,
            max_encoded_len: DEFAULT_MAX_ENCODED_LEN,
        }
    }
}

impl CompressionConfig {
    /// Parse settings from JSON. Missing fields fall back to the defaults.
    pub fn from_json(json: &str) -> Result<Self, ComposerError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ComposerError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ComposerError> {
        if self.max_dimension == 0 {
            return Err(ComposerError::Config("max_dimension must be positive".into()));
        }
        if !(self.quality > 0.0 && self.quality <= 1.0) {
            return Err(ComposerError::Config(format!(
                "quality must be in (0, 1], got {}",
                self.quality
            )));
        }
        if self.max_encoded_len == 0 {
            return Err(ComposerError::Config("max_encoded_len must be positive".into()));
        }
        Ok(())
    }

    /// `self` if it passes [`validate`](Self::validate), otherwise the defaults.
    pub fn sanitized(&self) -> Self {
        match self.validate() {
            Ok(()) => *self,
            Err(_) => Self::default(),
        }
    }
}
