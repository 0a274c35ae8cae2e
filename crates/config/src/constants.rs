//! Centralized constants for the credential cache.
//!
//! Default values live here so the cache layout is defined in exactly one
//! place; deployed account directories depend on these paths staying stable.

/// Default directory for materialized credentials bundles.
pub const DEFAULT_CREDS_DIR: &str = "/nack-accounts/creds";

/// Default directory for materialized nkey seeds.
pub const DEFAULT_KEYS_DIR: &str = "/nack-accounts/keys";

/// Permission mode for cache directories and files on unix:
/// read+write for owner, group, and other, no execute.
pub const CACHE_FILE_MODE: u32 = 0o666;

/// Environment variable overriding the credentials cache directory.
pub const ENV_CREDS_DIR: &str = "NACK_CREDS_DIR";

/// Environment variable overriding the nkey seed cache directory.
pub const ENV_KEYS_DIR: &str = "NACK_KEYS_DIR";
