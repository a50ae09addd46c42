use crate::{
    error::TransferSearchError,
    search::{SearchConfig, VISIBLE_SUGGESTIONS},
};

/// Builder for creating search configurations with ergonomic defaults
#[derive(Debug, Clone, Default)]
pub struct SearchConfigBuilder {
    config: SearchConfig,
}

impl SearchConfigBuilder {
    /// Create a new builder: every match, two-character minimum
    pub fn new() -> Self {
        Self {
            config: SearchConfig::default(),
        }
    }

    /// Create a builder for the search box drop-down (only the visible rows)
    pub fn suggestions() -> Self {
        Self::new().limit(VISIBLE_SUGGESTIONS)
    }

    /// Set the maximum number of results to return
    pub fn limit(mut self, limit: usize) -> Self {
        self.config.limit = Some(limit);
        self
    }

    /// Return every match
    pub fn unlimited(mut self) -> Self {
        self.config.limit = None;
        self
    }

    /// Set the minimum normalized query length.
    ///
    /// Zero is rejected: an empty query would match the whole catalog.
    pub fn min_query_chars(mut self, chars: usize) -> Result<Self, TransferSearchError> {
        if chars == 0 {
            return Err(TransferSearchError::ConfigError(
                "Minimum query length must be at least 1 character".to_string(),
            ));
        }
        self.config.min_query_chars = chars;
        Ok(self)
    }

    /// Build the final configuration
    pub fn build(self) -> SearchConfig {
        self.config
    }
}
