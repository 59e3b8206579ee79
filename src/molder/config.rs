//! Configuration for [`Molder`](crate::molder::Molder).

use serde::{Deserialize, Serialize};

use crate::internal::error::{Error, Result};

/// Default maximum nesting of populate calls.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Runtime configuration for population.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MolderConfig {
    /// Maximum nesting of populate calls. The top-level call counts as depth 1.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

impl Default for MolderConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl MolderConfig {
    /// Parses and validates a JSON configuration document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: MolderConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the values are usable.
    pub fn validate(&self) -> Result<()> {
        if self.max_depth == 0 {
            return Err(Error::ConfigError("max_depth must be at least 1".to_string()));
        }
        Ok(())
    }
}
