//! HTTP transport for the domain search API.
//!
//! This module owns the only network call of an invocation: one GET, no
//! retries, no custom timeout.

use crate::error::DomainrError;
use crate::request::{ApiRequest, Endpoints};
use crate::response::interpret;
use crate::types::{Credential, QueryIntent, ResultPayload};

/// Client for the search and info endpoints.
#[derive(Clone)]
pub struct DomainrClient {
    /// HTTP client used for the single outbound request
    http_client: reqwest::Client,
    /// Hosts selected by credential variant
    endpoints: Endpoints,
}

impl DomainrClient {
    /// Create a new client against the production hosts.
    pub fn new() -> Result<Self, DomainrError> {
        Self::with_endpoints(Endpoints::default())
    }

    /// Create a new client against custom hosts.
    pub fn with_endpoints(endpoints: Endpoints) -> Result<Self, DomainrError> {
        let http_client = reqwest::Client::builder()
            .user_agent(format!("domainr/{}", crate::VERSION))
            .build()
            .map_err(|e| {
                DomainrError::network_with_source("Failed to create HTTP client", e.to_string())
            })?;

        Ok(Self {
            http_client,
            endpoints,
        })
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Issue `request` and return the status code and raw body.
    ///
    /// # Errors
    ///
    /// Returns `DomainrError::NetworkError` if the request cannot be sent or
    /// the body cannot be read. Non-200 statuses are not errors here.
    pub async fn fetch(&self, request: &ApiRequest) -> Result<(u16, Vec<u8>), DomainrError> {
        let url = request.url()?;
        tracing::debug!(url = %request.redacted_url(), "sending request");

        let response = self.http_client.get(url).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();

        tracing::debug!(status, body_len = body.len(), "response received");
        Ok((status, body))
    }

    /// Run a whole query: build the request, fetch it, interpret the result.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use domainr_lib::{Credential, DomainrClient, Filters, Mode, QueryIntent, ResultPayload};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = DomainrClient::new()?;
    ///     let intent = QueryIntent::new(vec!["acme".into()], Mode::Search, Filters::default());
    ///     let credential = Credential::ClientId("my-client-id".into());
    ///
    ///     if let ResultPayload::Search(results) = client.query(&intent, &credential).await? {
    ///         for result in results {
    ///             println!("{} {}", result.domain, result.availability);
    ///         }
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn query(
        &self,
        intent: &QueryIntent,
        credential: &Credential,
    ) -> Result<ResultPayload, DomainrError> {
        let request = self.endpoints.request(intent, credential);
        let (status, body) = self.fetch(&request).await?;
        interpret(status, &body, intent)
    }
}
