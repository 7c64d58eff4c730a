//! Response interpretation.
//!
//! Converts a raw HTTP outcome (status + body) into either an error or a
//! structured payload for the requested mode.

use crate::error::DomainrError;
use crate::types::{Availability, DomainResult, Mode, QueryIntent, ResultPayload};
use serde::Deserialize;

/// Search response body. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Vec<SearchEntry>,
}

#[derive(Debug, Deserialize)]
struct SearchEntry {
    domain: String,
    availability: String,
}

/// Interpret a response for `intent`.
///
/// Non-200 statuses become `ApiError` without touching the body. A 200 body
/// is parsed as JSON: Info records pass through unchanged, Search bodies must
/// carry a `results` array whose entries all have string `domain` and
/// `availability` fields.
///
/// # Errors
///
/// - `DomainrError::ApiError` for any status other than 200
/// - `DomainrError::MalformedResponse` if the body is not JSON, or a search
///   body does not have the expected shape
pub fn interpret(
    status_code: u16,
    body: &[u8],
    intent: &QueryIntent,
) -> Result<ResultPayload, DomainrError> {
    if status_code != 200 {
        tracing::debug!(status_code, body_len = body.len(), "service returned an error status");
        return Err(DomainrError::api(status_code, body));
    }

    match intent.mode() {
        Mode::Info => {
            let record: serde_json::Value = serde_json::from_slice(body)?;
            Ok(ResultPayload::Info(record))
        }
        Mode::Search => {
            let response: SearchResponse = serde_json::from_slice(body).map_err(|e| {
                DomainrError::malformed(format!("unexpected search response: {}", e))
            })?;

            let results: Vec<DomainResult> = response
                .results
                .into_iter()
                .map(|entry| DomainResult {
                    domain: entry.domain,
                    availability: Availability::from_raw(&entry.availability),
                })
                .collect();

            tracing::debug!(count = results.len(), "search results parsed");
            Ok(ResultPayload::Search(results))
        }
    }
}
