//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::verb::Verb;

/// Root configuration for the verb router.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Verb names to register at startup. The supported set is
    /// configuration, not code; defaults to every supported verb.
    pub verbs: Vec<String>,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            verbs: Verb::ALL.iter().map(|v| v.token().to_string()).collect(),
            observability: ObservabilityConfig::default(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_enables_every_verb() {
        let config = RouterConfig::default();
        assert_eq!(config.verbs.len(), Verb::ALL.len());
        assert!(config.verbs.contains(&"UNLINK".to_string()));
    }

    #[test]
    fn test_minimal_toml_uses_defaults() {
        let config: RouterConfig = toml::from_str("").unwrap();
        assert_eq!(config.verbs.len(), Verb::ALL.len());
        assert_eq!(config.observability.log_level, "info");
    }

    #[test]
    fn test_partial_toml_overrides_verbs() {
        let config: RouterConfig = toml::from_str(r#"verbs = ["DELETE", "PUT"]"#).unwrap();
        assert_eq!(config.verbs, vec!["DELETE", "PUT"]);
        assert_eq!(config.observability.log_level, "info");
    }
}
