//! Error types for the catalog crate.
//!
//! Every failure a catalog call can hit maps to one variant here:
//! - configuration problems caught before any request is sent
//! - transport failures (DNS, TLS, timeouts, connection resets)
//! - non-success HTTP statuses, with the body the API sent back
//! - JSON bodies that don't match the expected wire types

use thiserror::Error;

/// Errors that can occur while talking to the movie catalog API
///
/// The `#[derive(Error)]` macro from thiserror implements `std::error::Error`
/// and `Display` from the `#[error(...)]` attributes.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// No bearer credential was configured
    #[error("Missing API credential: set {var} or pass --api-key")]
    MissingApiKey { var: &'static str },

    /// The configured base URL could not be used to build a request
    #[error("Invalid catalog URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The request never produced a response
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The API answered with a non-success status
    ///
    /// The body is kept because TMDB puts its `status_message` there.
    #[error("Catalog API error: {status} for {url} - {body}")]
    Status {
        status: u16,
        url: String,
        body: String,
    },

    /// The response body was not the JSON we expected
    #[error("Failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// Building the HTTP client itself failed
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

impl CatalogError {
    /// HTTP status code, when the API produced one
    pub fn status(&self) -> Option<u16> {
        match self {
            CatalogError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
