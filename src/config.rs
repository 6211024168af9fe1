//! Engine tuning knobs.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Hard ceiling on recommendations per answer. Configuration may lower it,
/// never raise it.
pub const MAX_RECOMMENDATIONS: usize = 3;

pub const DEFAULT_RELEVANCE_THRESHOLD: f64 = 0.3;
pub const DEFAULT_EXPLICIT_MENTION_MIN_SIMILARITY: f64 = 0.5;
pub const DEFAULT_NEW_PRODUCTS_LIMIT: usize = 5;
pub const DEFAULT_APOLOGY_TEXT: &str =
    "I'm sorry, I couldn't find any products matching your request right now.";
pub const DEFAULT_PAYLOAD_DELIMITER: &str = "[RECOMMENDATIONS]";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid engine config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("relevance_threshold must be within [0.0, 1.0], got {0}")]
    ThresholdOutOfRange(f64),
    #[error("payload_delimiter must not be empty")]
    EmptyDelimiter,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Recommendations attached per answer; clamped to [`MAX_RECOMMENDATIONS`].
    pub max_recommendations: usize,
    /// Minimum mean similarity for attaching recommendations.
    pub relevance_threshold: f64,
    /// Minimum similarity for a name quoted in the answer to count as a mention.
    pub explicit_mention_min_similarity: f64,
    /// How many of the newest items the new-arrivals strategy proposes.
    pub new_products_limit: usize,
    pub apology_text: String,
    pub payload_delimiter: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_recommendations: MAX_RECOMMENDATIONS,
            relevance_threshold: DEFAULT_RELEVANCE_THRESHOLD,
            explicit_mention_min_similarity: DEFAULT_EXPLICIT_MENTION_MIN_SIMILARITY,
            new_products_limit: DEFAULT_NEW_PRODUCTS_LIMIT,
            apology_text: DEFAULT_APOLOGY_TEXT.to_string(),
            payload_delimiter: DEFAULT_PAYLOAD_DELIMITER.to_string(),
        }
    }
}

impl EngineConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.relevance_threshold) {
            return Err(ConfigError::ThresholdOutOfRange(self.relevance_threshold));
        }
        if self.payload_delimiter.is_empty() {
            return Err(ConfigError::EmptyDelimiter);
        }
        Ok(())
    }

    pub fn recommendation_limit(&self) -> usize {
        self.max_recommendations.min(MAX_RECOMMENDATIONS)
    }
}
