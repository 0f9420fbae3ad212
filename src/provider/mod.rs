pub mod giphy;
pub mod http;
pub mod route;
pub mod tenor;
pub mod traits;

pub use giphy::{GiphyClient, GiphyMedia, GiphyMeta, GiphyResponse, GiphySearchOptions};
pub use http::{ConnectionManager, HttpSession};
pub use route::{QueryParams, Route, filter_present};
pub use tenor::{TenorClient, TenorMedia, TenorResponse, TenorSearchOptions};
pub use traits::GifProvider;

use std::time::Duration;

pub(crate) const DEFAULT_USER_AGENT: &str = concat!("gifkit/", env!("CARGO_PKG_VERSION"));
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Provider base configuration
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Base URL, endpoints are appended to it
    pub base_url: String,
    /// API key
    pub api_key: Option<String>,
    /// Query parameter the API key is sent as
    pub key_param: String,
    /// User agent of sessions opened by the client
    pub user_agent: String,
    /// Request timeout of sessions opened by the client
    pub timeout: Duration,
}

impl ProviderConfig {
    /// Create new configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
            key_param: "key".to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Defaults for the Giphy API
    #[must_use]
    pub fn giphy() -> Self {
        Self::new(giphy::GIPHY_BASE_URL)
    }

    /// Defaults for the Tenor API
    #[must_use]
    pub fn tenor() -> Self {
        Self::new(tenor::TENOR_BASE_URL)
    }

    /// Set API key
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Point the client at another host, e.g. a proxy or a test server
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[must_use]
    pub fn with_key_param(mut self, key_param: impl Into<String>) -> Self {
        self.key_param = key_param.into();
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
