//! Async clients for the Giphy and Tenor GIF search APIs.
//!
//! Both clients follow the same shape: build the query from the caller's
//! options, send one GET with the API key attached, and hand back a read-only
//! view over the decoded JSON.

mod provider;
pub mod settings;
mod types;


pub use provider::{
    ConnectionManager, GifProvider, GiphyClient, GiphyMedia, GiphyMeta, GiphyResponse,
    GiphySearchOptions, HttpSession, ProviderConfig, QueryParams, Route, TenorClient,
    TenorMedia, TenorResponse, TenorSearchOptions, filter_present,
};
pub use settings::{GifConfig, ProviderSettings};
pub use types::{
    AgeRating, AspectRatio, Container, ContentFilter, MediaFilter, Rendition, RenditionKind,
};

/// Library result type
pub type Result<T> = std::result::Result<T, GifError>;

/// Library error types
#[derive(Debug, thiserror::Error)]
pub enum GifError {
    #[error("Malformed endpoint '{endpoint}': {reason}")]
    MalformedEndpoint { endpoint: String, reason: String },

    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP status error: {status} - {message}")]
    HttpStatus { status: u16, message: String },

    #[error("JSON decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("No open HTTP session; connect the client before sending requests")]
    SessionClosed,

    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
}

impl GifError {
    /// HTTP status code carried by the error, if any
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
