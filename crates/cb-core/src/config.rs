use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

/// Default capacity: a tenth contact is stored but triggers the storage alert.
pub const DEFAULT_MAX_CONTACTS: usize = 9;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid widget config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("max_contacts must be at least 1")]
    ZeroCapacity,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    pub max_contacts: usize,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            max_contacts: DEFAULT_MAX_CONTACTS,
        }
    }
}

/// Outcome of [`WidgetConfig::from_attribute`].
#[derive(Debug, Default)]
pub struct LoadedConfig {
    pub config: WidgetConfig,
    pub rejected: Option<ConfigError>,
}

impl WidgetConfig {
    /// Parse a JSON object such as `{"max_contacts": 9}`. Missing keys take defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: WidgetConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the optional `data-config` attribute value.
    ///
    /// A missing attribute yields the defaults. A malformed one also yields the
    /// defaults, with the reason kept in `rejected` for the host to report.
    pub fn from_attribute(raw: Option<&str>) -> LoadedConfig {
        let Some(raw) = raw else {
            return LoadedConfig::default();
        };
        match Self::from_json(raw) {
            Ok(config) => LoadedConfig {
                config,
                rejected: None,
            },
            Err(err) => {
                warn!(error = %err, "falling back to default widget config");
                LoadedConfig {
                    config: Self::default(),
                    rejected: Some(err),
                }
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_contacts == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        Ok(())
    }

    /// True when a store of `count` contacts must show the storage alert instead of the list.
    pub fn is_over_capacity(&self, count: usize) -> bool {
        count > self.max_contacts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_uses_defaults() {
        let config = WidgetConfig::from_json("{}").unwrap();
        assert_eq!(config, WidgetConfig::default());
        assert_eq!(config.max_contacts, 9);
    }

    #[test]
    fn custom_capacity() {
        let config = WidgetConfig::from_json(r#"{"max_contacts": 3}"#).unwrap();
        assert_eq!(config.max_contacts, 3);
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let err = WidgetConfig::from_json(r#"{"max_contacts": 0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroCapacity));
    }

    #[test]
    fn malformed_json_is_rejected() {
        let err = WidgetConfig::from_json("{max_contacts: 3").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_attribute_uses_defaults() {
        let loaded = WidgetConfig::from_attribute(None);
        assert_eq!(loaded.config, WidgetConfig::default());
        assert!(loaded.rejected.is_none());
    }

    #[test]
    fn valid_attribute_is_applied() {
        let loaded = WidgetConfig::from_attribute(Some(r#"{"max_contacts": 4}"#));
        assert_eq!(loaded.config.max_contacts, 4);
        assert!(loaded.rejected.is_none());
    }

    #[test]
    fn malformed_attribute_falls_back_with_reason() {
        let loaded = WidgetConfig::from_attribute(Some("not json"));
        assert_eq!(loaded.config, WidgetConfig::default());
        assert!(matches!(loaded.rejected, Some(ConfigError::Parse(_))));
    }

    #[test]
    fn zero_capacity_attribute_falls_back_with_reason() {
        let loaded = WidgetConfig::from_attribute(Some(r#"{"max_contacts": 0}"#));
        assert_eq!(loaded.config.max_contacts, 9);
        assert!(matches!(loaded.rejected, Some(ConfigError::ZeroCapacity)));
    }

    #[test]
    fn capacity_boundary() {
        let config = WidgetConfig::default();
        assert!(!config.is_over_capacity(9));
        assert!(config.is_over_capacity(10));
    }
}
