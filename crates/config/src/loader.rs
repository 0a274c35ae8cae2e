//! Environment variable loading for the cache configuration.
//!
//! Responsibilities:
//! - Read cache directory overrides from the environment.
//! - Filter empty or whitespace-only values so an exported-but-blank
//!   variable behaves the same as an unset one.
//!
//! Does NOT handle:
//! - The default layout (see types.rs / constants.rs).
//! - Creating the directories (the store does that lazily on first write).

use std::path::PathBuf;

use crate::constants::{ENV_CREDS_DIR, ENV_KEYS_DIR};
use crate::types::CacheConfig;

/// Read an environment variable, returning None if unset, empty, or
/// whitespace-only. Returns the trimmed value if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

impl CacheConfig {
    /// Builds a config from the environment, falling back to the default
    /// account layout for anything not overridden.
    ///
    /// A `.env` file in the working directory is applied first when present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();
        if let Some(dir) = env_var_or_none(ENV_CREDS_DIR) {
            config.creds_dir = PathBuf::from(dir);
        }
        if let Some(dir) = env_var_or_none(ENV_KEYS_DIR) {
            config.keys_dir = PathBuf::from(dir);
        }
        tracing::debug!(
            creds_dir = %config.creds_dir.display(),
            keys_dir = %config.keys_dir.display(),
            "cache configuration loaded"
        );
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_env_var_or_none_filters_empty_and_whitespace() {
        let key = "_NACK_TEST_VAR";
        assert!(env_var_or_none(key).is_none());

        temp_env::with_vars([(key, Some(""))], || {
            assert!(env_var_or_none(key).is_none());
        });
        temp_env::with_vars([(key, Some("   "))], || {
            assert!(env_var_or_none(key).is_none());
        });
        temp_env::with_vars([(key, Some(" /some/dir "))], || {
            assert_eq!(env_var_or_none(key), Some("/some/dir".to_string()));
        });
    }

    #[test]
    #[serial]
    fn test_from_env_defaults_when_unset() {
        temp_env::with_vars([(ENV_CREDS_DIR, None::<&str>), (ENV_KEYS_DIR, None)], || {
            let config = CacheConfig::from_env();
            assert_eq!(config, CacheConfig::default());
        });
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        temp_env::with_vars(
            [
                (ENV_CREDS_DIR, Some("/tmp/nack/creds")),
                (ENV_KEYS_DIR, Some("/tmp/nack/keys")),
            ],
            || {
                let config = CacheConfig::from_env();
                assert_eq!(config.creds_dir, PathBuf::from("/tmp/nack/creds"));
                assert_eq!(config.keys_dir, PathBuf::from("/tmp/nack/keys"));
            },
        );
    }

    #[test]
    #[serial]
    fn test_from_env_partial_override_keeps_other_default() {
        temp_env::with_vars(
            [(ENV_CREDS_DIR, Some("/tmp/only-creds")), (ENV_KEYS_DIR, None)],
            || {
                let config = CacheConfig::from_env();
                assert_eq!(config.creds_dir, PathBuf::from("/tmp/only-creds"));
                assert_eq!(config.keys_dir, CacheConfig::default().keys_dir);
            },
        );
    }
}
