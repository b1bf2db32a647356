use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::error::{DslError, Result};

/// Request defaults applied to search sources that leave them unset
///
/// Loaded from JSON, e.g. `{"size": 20, "timeout_ms": 500}`. Missing keys
/// keep their defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchDefaults {
    pub size: Option<u64>,
    pub timeout_ms: Option<u64>,
    pub rescore_window_size: Option<u64>,
    pub track_scores: Option<bool>,
    pub explain: Option<bool>,
}

/// Presets for common kinds of requests
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchProfile {
    Interactive,
    Export,
    Debugging,
}

impl SearchProfile {
    /// Page size for this profile
    pub fn size(&self) -> u64 {
        match self {
            SearchProfile::Interactive => 10,
            SearchProfile::Export => 1000,
            SearchProfile::Debugging => 10,
        }
    }

    /// Server-side timeout for this profile
    pub fn timeout_ms(&self) -> u64 {
        match self {
            SearchProfile::Interactive => 500,
            SearchProfile::Export => 30_000,
            SearchProfile::Debugging => 5_000,
        }
    }

    /// Apply this profile to a set of defaults
    pub fn apply_to(&self, defaults: &mut SearchDefaults) {
        defaults.size = Some(self.size());
        defaults.timeout_ms = Some(self.timeout_ms());
        if *self == SearchProfile::Debugging {
            defaults.explain = Some(true);
            defaults.track_scores = Some(true);
        }
    }
}

impl SearchDefaults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse defaults from a JSON document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let defaults: SearchDefaults = serde_json::from_str(json)?;
        defaults.validate()?;
        Ok(defaults)
    }

    /// Read defaults from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        debug!("Loading search defaults from {}", path.display());
        Self::from_json_str(&text)
    }

    /// Reject values the engine refuses
    pub fn validate(&self) -> Result<()> {
        if self.rescore_window_size == Some(0) {
            return Err(DslError::InvalidConfig(
                "rescore_window_size must be greater than zero".to_string(),
            ));
        }
        if self.timeout_ms == Some(0) {
            return Err(DslError::InvalidConfig(
                "timeout_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Apply a profile to these defaults
    pub fn with_profile(mut self, profile: SearchProfile) -> Self {
        profile.apply_to(&mut self);
        self
    }

    pub fn with_size(mut self, size: u64) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }

    pub fn with_rescore_window_size(mut self, window_size: u64) -> Self {
        self.rescore_window_size = Some(window_size);
        self
    }

    pub fn with_track_scores(mut self, track_scores: bool) -> Self {
        self.track_scores = Some(track_scores);
        self
    }

    pub fn with_explain(mut self, explain: bool) -> Self {
        self.explain = Some(explain);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let defaults = SearchDefaults::default();
        assert_eq!(defaults.size, None);
        assert_eq!(defaults.timeout_ms, None);
        assert!(defaults.validate().is_ok());
    }

    #[test]
    fn test_from_json_str() {
        let defaults =
            SearchDefaults::from_json_str(r#"{"size": 25, "rescore_window_size": 50}"#).unwrap();
        assert_eq!(defaults.size, Some(25));
        assert_eq!(defaults.rescore_window_size, Some(50));
        assert_eq!(defaults.explain, None);
    }

    #[test]
    fn test_invalid_config() {
        assert!(matches!(
            SearchDefaults::from_json_str(r#"{"rescore_window_size": 0}"#),
            Err(DslError::InvalidConfig(_))
        ));
        assert!(matches!(
            SearchDefaults::from_json_str(r#"{"sizes": 10}"#),
            Err(DslError::Json(_))
        ));
    }

    #[test]
    fn test_profiles() {
        assert_eq!(SearchProfile::Export.size(), 1000);
        assert_eq!(SearchProfile::Interactive.timeout_ms(), 500);

        let defaults = SearchDefaults::new()
            .with_profile(SearchProfile::Debugging)
            .with_size(3);
        assert_eq!(defaults.size, Some(3));
        assert_eq!(defaults.explain, Some(true));
        assert_eq!(defaults.track_scores, Some(true));
    }
}
