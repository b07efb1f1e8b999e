use std::time::Duration;
use thiserror::Error;

pub const CONTACT_DELAY_VAR: &str = "CONTACT_DELAY_MS";
pub const DEFAULT_CONTACT_DELAY: Duration = Duration::from_millis(1000);

/// Site settings read from the environment. Leptos' own options come from
/// `[package.metadata.leptos]` and `LEPTOS_*` instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub contact_delay: Duration,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            contact_delay: DEFAULT_CONTACT_DELAY,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?} (expected milliseconds)")]
    InvalidDuration { key: &'static str, value: String },
}

impl SiteConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(raw) = lookup(CONTACT_DELAY_VAR) {
            let ms = raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidDuration {
                    key: CONTACT_DELAY_VAR,
                    value: raw.clone(),
                })?;
            config.contact_delay = Duration::from_millis(ms);
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_env() {
        let config = SiteConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.contact_delay, Duration::from_secs(1));
    }

    #[test]
    fn test_delay_override() {
        let config = SiteConfig::from_lookup(|key| {
            (key == CONTACT_DELAY_VAR).then(|| " 250 ".to_string())
        })
        .unwrap();
        assert_eq!(config.contact_delay, Duration::from_millis(250));
    }

    #[test]
    fn test_invalid_delay() {
        let err = SiteConfig::from_lookup(|_| Some("soon".to_string())).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidDuration {
                key: CONTACT_DELAY_VAR,
                value: "soon".to_string(),
            }
        );
    }
}
