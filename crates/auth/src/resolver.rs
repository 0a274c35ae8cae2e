//! Selection of the authentication option for a connection.
//!
//! Given a descriptor carrying raw auth sources, materializes the
//! applicable one and appends the matching connection option. The
//! credentials bundle and the nkey seed are mutually exclusive; when a
//! descriptor sets both, the credentials bundle wins.

use std::any::Any;

use crate::error::{AuthError, Result};
use crate::kind::AuthKind;
use crate::materialize::materialize_auth;
use crate::options::AuthOption;
use crate::source::{AuthSource, ConnectOptions, ServerSpec};
use crate::store::CredentialStore;

/// Resolves the descriptor's auth source and appends the resulting option.
///
/// A descriptor with neither source set is valid: the options are returned
/// unchanged and the connection proceeds unauthenticated or with options
/// applied elsewhere.
pub fn add_auth_to_options<S: CredentialStore>(
    source: &impl AuthSource,
    store: &S,
    mut opts: Vec<AuthOption>,
) -> Result<Vec<AuthOption>> {
    if let Some(creds) = non_empty(source.credentials_source()) {
        let path = materialize_auth(store, creds, AuthKind::Credentials)?;
        opts.push(AuthOption::CredentialsFile(path));
    } else if let Some(seed) = non_empty(source.nkey_source()) {
        let path = materialize_auth(store, seed, AuthKind::Nkey)?;
        opts.push(AuthOption::NkeySeedFile(path));
    }
    Ok(opts)
}

/// Type-erased variant of [`add_auth_to_options`] for callers that hold
/// descriptors behind `dyn Any`.
///
/// # Errors
/// [`AuthError::UnsupportedSourceType`] if the value is neither a
/// [`ConnectOptions`] nor a [`ServerSpec`].
pub fn add_auth_to_options_any<S: CredentialStore>(
    source: &dyn Any,
    store: &S,
    opts: Vec<AuthOption>,
) -> Result<Vec<AuthOption>> {
    if let Some(options) = source.downcast_ref::<ConnectOptions>() {
        add_auth_to_options(options, store, opts)
    } else if let Some(spec) = source.downcast_ref::<ServerSpec>() {
        add_auth_to_options(spec, store, opts)
    } else {
        Err(AuthError::UnsupportedSourceType)
    }
}

/// Empty and whitespace-only sources count as unset.
fn non_empty(source: Option<&str>) -> Option<&str> {
    source.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MemoryStore;
    use secrecy::SecretString;

    fn secret(value: &str) -> Option<SecretString> {
        Some(SecretString::new(value.to_string().into()))
    }

    #[test]
    fn test_credentials_source_appends_credentials_option() {
        let store = MemoryStore::new();
        let options = ConnectOptions {
            credentials: secret("creds:JWT-AND-SEED"),
            nkey: None,
        };
        let opts = add_auth_to_options(&options, &store, Vec::new()).unwrap();
        assert_eq!(opts.len(), 1);
        assert!(matches!(&opts[0], AuthOption::CredentialsFile(_)));
        assert!(opts[0].path().to_string_lossy().ends_with(".creds"));
    }

    #[test]
    fn test_nkey_source_appends_seed_option() {
        let store = MemoryStore::new();
        let spec = ServerSpec {
            creds: None,
            nkey: secret("nkey:SUASEED"),
        };
        let opts = add_auth_to_options(&spec, &store, Vec::new()).unwrap();
        assert_eq!(opts.len(), 1);
        assert!(matches!(&opts[0], AuthOption::NkeySeedFile(_)));
        assert!(opts[0].path().to_string_lossy().ends_with(".nk"));
    }

    #[test]
    fn test_credentials_win_when_both_are_set() {
        let store = MemoryStore::new();
        let options = ConnectOptions {
            credentials: secret("creds:JWT-AND-SEED"),
            nkey: secret("nkey:SUASEED"),
        };
        let opts = add_auth_to_options(&options, &store, Vec::new()).unwrap();
        assert_eq!(opts.len(), 1);
        assert!(matches!(&opts[0], AuthOption::CredentialsFile(_)));
        // The nkey source was never materialized.
        assert_eq!(store.write_count(), 1);
    }

    #[test]
    fn test_neither_source_returns_options_unchanged() {
        let store = MemoryStore::new();
        let existing = vec![AuthOption::CredentialsFile("/elsewhere.creds".into())];
        let opts =
            add_auth_to_options(&ConnectOptions::default(), &store, existing.clone()).unwrap();
        assert_eq!(opts, existing);
        assert_eq!(store.write_count(), 0);
    }

    #[test]
    fn test_whitespace_only_source_counts_as_unset() {
        let store = MemoryStore::new();
        let options = ConnectOptions {
            credentials: secret("   "),
            nkey: None,
        };
        let opts = add_auth_to_options(&options, &store, Vec::new()).unwrap();
        assert!(opts.is_empty());
    }

    #[test]
    fn test_existing_options_are_preserved() {
        let store = MemoryStore::new();
        let existing = vec![AuthOption::NkeySeedFile("/pre-existing.nk".into())];
        let options = ConnectOptions {
            credentials: secret("creds:JWT"),
            nkey: None,
        };
        let opts = add_auth_to_options(&options, &store, existing).unwrap();
        assert_eq!(opts.len(), 2);
        assert_eq!(opts[0].path().to_string_lossy(), "/pre-existing.nk");
    }

    #[test]
    fn test_any_resolves_both_known_shapes() {
        let store = MemoryStore::new();

        let options = ConnectOptions {
            credentials: secret("creds:JWT"),
            nkey: None,
        };
        let opts = add_auth_to_options_any(&options, &store, Vec::new()).unwrap();
        assert_eq!(opts.len(), 1);

        let spec = ServerSpec {
            creds: None,
            nkey: secret("nkey:SUASEED"),
        };
        let opts = add_auth_to_options_any(&spec, &store, Vec::new()).unwrap();
        assert_eq!(opts.len(), 1);
    }

    #[test]
    fn test_any_rejects_unknown_shapes() {
        let store = MemoryStore::new();
        let not_a_descriptor = "creds:JWT".to_string();
        let err = add_auth_to_options_any(&not_a_descriptor, &store, Vec::new()).unwrap_err();
        assert!(matches!(err, AuthError::UnsupportedSourceType));
    }

    #[test]
    fn test_materialization_failure_propagates() {
        let store = MemoryStore::new();
        let options = ConnectOptions {
            credentials: secret("base64:%%%"),
            nkey: None,
        };
        let err = add_auth_to_options(&options, &store, Vec::new()).unwrap_err();
        assert!(matches!(err, AuthError::Base64Decode(_)));
    }
}
