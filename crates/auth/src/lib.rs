//! Resolution of declarative NATS auth sources into on-disk credential files.
//!
//! A NATS entity may specify how to authenticate in one of three forms: a
//! path to a pre-provisioned file, inline literal text (`creds:...` /
//! `nkey:...`), or a base64 blob (`base64:...`). This crate decodes the
//! source, caches the bytes under a content-addressed path, and selects the
//! connection option to apply — a credentials bundle or an nkey seed, with
//! the bundle taking precedence when both are specified.
//!
//! The connection itself is established elsewhere; the output here is a
//! list of [`AuthOption`]s naming usable credential files.

pub mod error;
mod kind;
pub mod materialize;
mod options;
pub mod resolver;
mod source;
pub mod store;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use error::{AuthError, Result};
pub use kind::AuthKind;
pub use materialize::materialize_auth;
pub use options::AuthOption;
pub use resolver::{add_auth_to_options, add_auth_to_options_any};
pub use source::{AuthSource, ConnectOptions, ServerSpec};
pub use store::{CredentialStore, FsStore, content_digest};
