//! # Domainr Library
//!
//! Core of the domainr command-line client: it queries a domain search web
//! service and turns the answer into filtered, annotated result lines.
//!
//! The pipeline for one invocation is:
//!
//! 1. [`resolve_credential`] picks the authentication scheme
//! 2. [`build_request`] builds the API call for Search or Info mode
//! 3. [`DomainrClient::fetch`] performs the single GET
//! 4. [`interpret`] turns status + body into a [`ResultPayload`]
//! 5. [`format_results`] applies display filters to search results
//!
//! ## Quick Start
//!
//! ```rust
//! use domainr_lib::{format_results, interpret, Filters, Mode, QueryIntent, ResultPayload};
//!
//! let intent = QueryIntent::new(vec!["foo".into()], Mode::Search, Filters::default());
//! let body = br#"{"results":[{"domain":"foo.com","availability":"available"}]}"#;
//!
//! if let Ok(ResultPayload::Search(results)) = interpret(200, body, &intent) {
//!     for line in format_results(&results, intent.filters()) {
//!         println!("{}", line);
//!     }
//! }
//! ```

// Re-export main public API types and functions
// This makes them available as domainr_lib::TypeName
pub use client::DomainrClient;
pub use config::{load_env_config, ConfigManager, DefaultSection, EnvConfig, FileConfig, LoadedConfig};
pub use credentials::{resolve_credential, ConfiguredCredentials};
pub use error::DomainrError;
pub use format::{format_results, is_top_level, DisplayLine, Symbol, TOP_LEVEL_SUFFIXES};
pub use request::{
    build_request, ApiRequest, Endpoints, CLIENT_ID_BASE_URL, INFO_PATH, MASHAPE_BASE_URL,
    SEARCH_PATH,
};
pub use response::interpret;
pub use types::{Availability, Credential, DomainResult, Filters, Mode, QueryIntent, ResultPayload};

// Internal modules - these are not part of the public API
mod client;
mod config;
mod credentials;
mod error;
mod format;
mod request;
mod response;
mod types;

// Type alias for convenience
pub type Result<T> = std::result::Result<T, DomainrError>;

// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
