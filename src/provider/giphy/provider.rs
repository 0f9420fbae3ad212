use super::api_types::GiphyResponse;
use crate::{
    Result,
    provider::{ConnectionManager, GifProvider, HttpSession, ProviderConfig, Route, filter_present},
};
use async_trait::async_trait;

pub const GIPHY_BASE_URL: &str = "https://api.giphy.com/v1";

const SEARCH_ENDPOINT: &str = "/gifs/search";
const TRENDING_ENDPOINT: &str = "/gifs/trending";

/// Optional parameters of the Giphy search and trending endpoints
#[derive(Debug, Clone)]
pub struct GiphySearchOptions {
    /// Maximum number of objects to return
    pub limit: Option<u32>,
    /// Starting position of the results
    pub offset: Option<u32>,
    /// Filter results by age rating, see [`AgeRating`](crate::AgeRating)
    pub rating: Option<String>,
    /// Default language for regional content (ISO 639-1)
    pub language: Option<String>,
    /// ID/proxy of a specific user
    pub user_proxy: Option<String>,
}

impl Default for GiphySearchOptions {
    fn default() -> Self {
        Self {
            limit: Some(25),
            offset: Some(0),
            rating: None,
            language: None,
            user_proxy: None,
        }
    }
}

impl GiphySearchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn with_rating(mut self, rating: impl Into<String>) -> Self {
        self.rating = Some(rating.into());
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_user_proxy(mut self, user_proxy: impl Into<String>) -> Self {
        self.user_proxy = Some(user_proxy.into());
        self
    }

    fn params(&self) -> [(&'static str, Option<String>); 5] {
        [
            ("limit", self.limit.map(|v| v.to_string())),
            ("offset", self.offset.map(|v| v.to_string())),
            ("rating", self.rating.clone()),
            ("lang", self.language.clone()),
            ("random_id", self.user_proxy.clone()),
        ]
    }
}

/// Client for the Giphy API
#[derive(Debug)]
pub struct GiphyClient {
    http: ConnectionManager,
}

impl GiphyClient {
    /// Create a client for the public Giphy API. No I/O happens until [`connect`](Self::connect).
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_config(ProviderConfig::giphy().with_api_key(api_key))
    }

    /// Create a client that sends requests through a caller-owned session
    pub fn with_session(api_key: impl Into<String>, session: HttpSession) -> Self {
        Self {
            http: ConnectionManager::with_session(
                ProviderConfig::giphy().with_api_key(api_key),
                session,
            ),
        }
    }

    #[must_use]
    pub fn with_config(config: ProviderConfig) -> Self {
        Self {
            http: ConnectionManager::new(config),
        }
    }

    /// Open the HTTP session; must be awaited before the first request
    pub async fn connect(&self) -> Result<()> {
        self.http.open().await
    }

    /// Search GIFs for a term or phrase
    pub async fn search(&self, query: &str, options: &GiphySearchOptions) -> Result<GiphyResponse> {
        let params = filter_present(
            std::iter::once(("q", Some(query.to_string()))).chain(options.params()),
        );
        let route = Route::get(&self.http.config().base_url, SEARCH_ENDPOINT, params)?;

        let data = self.http.request(route).await?;
        Ok(GiphyResponse::new(data))
    }

    /// Fetch the currently trending GIFs
    pub async fn trending(&self, options: &GiphySearchOptions) -> Result<GiphyResponse> {
        let params = filter_present(options.params());
        let route = Route::get(&self.http.config().base_url, TRENDING_ENDPOINT, params)?;

        let data = self.http.request(route).await?;
        Ok(GiphyResponse::new(data))
    }

    /// Release the HTTP session
    pub async fn close(&self) -> Result<()> {
        self.http.close().await
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.http.is_open()
    }
}

#[async_trait]
impl GifProvider for GiphyClient {
    fn id(&self) -> &'static str {
        "giphy"
    }

    fn name(&self) -> &'static str {
        "Giphy"
    }

    fn base_url(&self) -> &str {
        &self.http.config().base_url
    }

    fn is_open(&self) -> bool {
        self.http.is_open()
    }

    async fn open(&self) -> Result<()> {
        self.http.open().await
    }

    async fn close(&self) -> Result<()> {
        self.http.close().await
    }
}
