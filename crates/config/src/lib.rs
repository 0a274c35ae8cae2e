//! Configuration for the NATS account credential cache.
//!
//! This crate provides the cache directory layout used when materializing
//! declaratively-specified credentials to disk, along with an environment
//! variable loader for redirecting the cache in tests and non-standard
//! deployments.

pub mod constants;
mod loader;
pub mod types;

pub use loader::env_var_or_none;
pub use types::CacheConfig;
