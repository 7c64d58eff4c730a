//! Core data types for domain search queries.
//!
//! This module defines the query intent handed in by the CLI, the credential
//! variants accepted by the service, and the result shapes produced by the
//! response interpreter.

use std::fmt;

/// Which endpoint a query targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Bulk term matching against `/v1/search`
    #[default]
    Search,

    /// Single-domain detail lookup against `/v1/info`
    Info,
}

/// Display filters applied to search results.
///
/// None of these affect the API call itself; they only shape the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Filters {
    /// Use `A`/`X` instead of unicode check marks
    pub ascii_only: bool,

    /// Drop every entry that is not available
    pub available_only: bool,

    /// Keep only `.com`, `.net` and `.org` names
    pub tld_only: bool,
}

impl Filters {
    /// Enable or disable ASCII-only symbols.
    pub fn with_ascii(mut self, enabled: bool) -> Self {
        self.ascii_only = enabled;
        self
    }

    /// Enable or disable the available-only filter.
    pub fn with_available_only(mut self, enabled: bool) -> Self {
        self.available_only = enabled;
        self
    }

    /// Enable or disable the top-level-domain filter.
    pub fn with_tld_only(mut self, enabled: bool) -> Self {
        self.tld_only = enabled;
        self
    }
}

/// The user's parsed request: search terms, mode and display filters.
///
/// Built once per invocation and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryIntent {
    terms: Vec<String>,
    mode: Mode,
    filters: Filters,
}

impl QueryIntent {
    pub fn new(terms: Vec<String>, mode: Mode, filters: Filters) -> Self {
        Self {
            terms,
            mode,
            filters,
        }
    }

    /// Search terms in the order they were given.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn filters(&self) -> Filters {
        self.filters
    }

    /// The `q` parameter value: terms joined with single spaces, verbatim.
    pub fn query(&self) -> String {
        self.terms.join(" ")
    }
}

/// An authentication parameter accepted by the service.
///
/// Exactly one variant is used per request; each selects its own host and
/// query parameter name.
#[derive(Clone, PartialEq, Eq)]
pub enum Credential {
    /// Key for the Mashape-hosted API
    MashapeKey(String),

    /// Client id for the direct API
    ClientId(String),
}

impl Credential {
    /// The query parameter this credential is sent under.
    pub fn param_name(&self) -> &'static str {
        match self {
            Credential::MashapeKey(_) => "mashape-key",
            Credential::ClientId(_) => "client_id",
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Credential::MashapeKey(value) | Credential::ClientId(value) => value,
        }
    }
}

// Keep secrets out of logs and panic messages.
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credential::MashapeKey(_) => write!(f, "MashapeKey(***)"),
            Credential::ClientId(_) => write!(f, "ClientId(***)"),
        }
    }
}

/// Availability as reported by the service.
///
/// Only the literal `"available"` counts as available. The raw value of
/// every other state is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Availability {
    /// `"available"`
    Available,

    /// `"unavailable"`
    Unavailable,

    /// Any other state (`"taken"`, `"maybe"`, `"tld"`, ...)
    Other(String),
}

impl Availability {
    /// Classify a raw availability string.
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "available" => Availability::Available,
            "unavailable" => Availability::Unavailable,
            other => Availability::Other(other.to_string()),
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Availability::Available)
    }

    /// The string the service sent.
    pub fn as_str(&self) -> &str {
        match self {
            Availability::Available => "available",
            Availability::Unavailable => "unavailable",
            Availability::Other(raw) => raw,
        }
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of a search response, in service order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainResult {
    /// The domain name exactly as received (e.g., "foo.com")
    pub domain: String,

    /// Classified availability
    pub availability: Availability,
}

impl DomainResult {
    pub fn new<D: Into<String>>(domain: D, availability: Availability) -> Self {
        Self {
            domain: domain.into(),
            availability,
        }
    }
}

/// Interpreted body of a successful response.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultPayload {
    /// Ordered search results
    Search(Vec<DomainResult>),

    /// Opaque info record, passed through unmodified
    Info(serde_json::Value),
}
