//! API request construction.
//!
//! Turns a query intent and a resolved credential into a fully parameterized
//! GET descriptor. No network I/O happens here.

use crate::error::DomainrError;
use crate::types::{Credential, Mode, QueryIntent};
use reqwest::Url;

/// Base URL used with a `mashape-key` credential.
pub const MASHAPE_BASE_URL: &str = "https://domainr.p.mashape.com";

/// Base URL used with a `client_id` credential.
pub const CLIENT_ID_BASE_URL: &str = "https://api.domainr.com";

/// Path of the bulk search endpoint.
pub const SEARCH_PATH: &str = "/v1/search";

/// Path of the single-domain info endpoint.
pub const INFO_PATH: &str = "/v1/info";

/// Service hosts, one per credential variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub mashape: String,
    pub client_id: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            mashape: MASHAPE_BASE_URL.to_string(),
            client_id: CLIENT_ID_BASE_URL.to_string(),
        }
    }
}

impl Endpoints {
    /// The host a credential is sent to.
    pub fn base_url_for(&self, credential: &Credential) -> &str {
        match credential {
            Credential::MashapeKey(_) => &self.mashape,
            Credential::ClientId(_) => &self.client_id,
        }
    }

    /// Build the request for `intent` against these hosts.
    pub fn request(&self, intent: &QueryIntent, credential: &Credential) -> ApiRequest {
        let path = match intent.mode() {
            Mode::Info => INFO_PATH,
            Mode::Search => SEARCH_PATH,
        };

        ApiRequest {
            base_url: self.base_url_for(credential).to_string(),
            path: path.to_string(),
            query_params: vec![
                ("q".to_string(), intent.query()),
                (
                    credential.param_name().to_string(),
                    credential.value().to_string(),
                ),
            ],
        }
    }
}

/// A fully parameterized GET, issued once and then discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub base_url: String,
    pub path: String,
    /// Always `q` first, then exactly one credential parameter.
    pub query_params: Vec<(String, String)>,
}

impl ApiRequest {
    /// Look up a query parameter by name.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.query_params
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// The URL to GET, with parameters form-encoded.
    pub fn url(&self) -> Result<Url, DomainrError> {
        let endpoint = format!("{}{}", self.base_url.trim_end_matches('/'), self.path);
        Url::parse_with_params(&endpoint, &self.query_params)
            .map_err(|e| DomainrError::config(format!("Invalid API URL '{}': {}", endpoint, e)))
    }

    /// The URL with the credential value masked, for logging.
    pub fn redacted_url(&self) -> String {
        let mut masked = self.clone();
        for (key, value) in masked.query_params.iter_mut().skip(1) {
            if key == "mashape-key" || key == "client_id" {
                *value = "***".to_string();
            }
        }
        masked
            .url()
            .map(|u| u.to_string())
            .unwrap_or_else(|_| format!("{}{}", self.base_url, self.path))
    }
}

/// Build the request for `intent` against the production hosts.
pub fn build_request(intent: &QueryIntent, credential: &Credential) -> ApiRequest {
    Endpoints::default().request(intent, credential)
}
