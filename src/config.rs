use crate::domain::Severity;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Construction-time configuration for `CallSiteResolver`.
///
/// Handed to the resolver once; there is no runtime reconfiguration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Records below this severity pass through without stack capture.
    #[serde(default)]
    pub threshold: Severity,

    /// Namespace prefixes whose frames are skipped when locating the call
    /// site. The resolver's own namespace is always skipped in addition
    /// to these.
    #[serde(default)]
    pub skip_prefixes: Vec<String>,

    /// Exact function names to skip, regardless of owning namespace.
    #[serde(default)]
    pub skip_functions: Vec<String>,

    /// Number of innermost frames dropped unconditionally before the
    /// namespace rules apply.
    #[serde(default)]
    pub frames_to_skip: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            threshold: Severity::Debug,
            skip_prefixes: Vec::new(),
            skip_functions: Vec::new(),
            frames_to_skip: 0,
        }
    }
}

impl ResolverConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        // An empty prefix would match every frame and exhaust the stack
        for prefix in &self.skip_prefixes {
            if prefix.is_empty() {
                return Err(ConfigError::InvalidConfig(
                    "Skip prefix must not be empty".to_string(),
                ));
            }
        }

        for function in &self.skip_functions {
            if function.is_empty() {
                return Err(ConfigError::InvalidConfig(
                    "Skip function name must not be empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}
