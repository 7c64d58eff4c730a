//! Credential selection.
//!
//! Picks the single authentication scheme used for a request from whatever
//! the configuration layer found.

use crate::error::DomainrError;
use crate::types::Credential;

/// Candidate credentials as read from configuration.
///
/// Either value may be absent or empty. `source` is the configuration
/// location reported when nothing usable is configured.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfiguredCredentials {
    pub mashape_key: Option<String>,
    pub client_id: Option<String>,
    pub source: String,
}

/// Select the credential to use.
///
/// `mashape-key` is checked before `client_id`; the first non-empty value
/// wins and the other is never used.
///
/// # Errors
///
/// Returns `DomainrError::NoCredentialConfigured` carrying
/// `configured.source` when both values are absent or empty.
pub fn resolve_credential(
    configured: &ConfiguredCredentials,
) -> Result<Credential, DomainrError> {
    if let Some(key) = non_empty(&configured.mashape_key) {
        tracing::debug!(scheme = "mashape-key", source = %configured.source, "credential selected");
        return Ok(Credential::MashapeKey(key.to_string()));
    }

    if let Some(id) = non_empty(&configured.client_id) {
        tracing::debug!(scheme = "client_id", source = %configured.source, "credential selected");
        return Ok(Credential::ClientId(id.to_string()));
    }

    Err(DomainrError::no_credential(&configured.source))
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
