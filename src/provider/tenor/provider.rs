use super::api_types::TenorResponse;
use crate::{
    Result,
    provider::{ConnectionManager, GifProvider, HttpSession, ProviderConfig, Route, filter_present},
    types::ContentFilter,
};
use async_trait::async_trait;

pub const TENOR_BASE_URL: &str = "https://g.tenor.com/v1";

const SEARCH_ENDPOINT: &str = "/search";
const TRENDING_ENDPOINT: &str = "/trending";

/// Optional parameters of the Tenor search and trending endpoints
#[derive(Debug, Clone)]
pub struct TenorSearchOptions {
    /// Locale, usually `xx_YY`
    pub locale: Option<String>,
    /// Content safety filter, see [`ContentFilter`]
    pub content_filter: Option<String>,
    /// Rendition filter, see [`MediaFilter`](crate::MediaFilter)
    pub media_filter: Option<String>,
    /// Aspect ratio range, see [`AspectRatio`](crate::AspectRatio)
    pub ar_range: Option<String>,
    /// Maximum number of results
    pub limit: Option<u32>,
    /// Position to start from, as returned by [`TenorResponse::next`]
    pub pos: Option<String>,
    /// Anonymous ID tied to the user
    pub anon_id: Option<String>,
}

impl Default for TenorSearchOptions {
    fn default() -> Self {
        Self {
            locale: None,
            content_filter: Some(ContentFilter::Off.into()),
            media_filter: None,
            ar_range: None,
            limit: None,
            pos: None,
            anon_id: None,
        }
    }
}

impl TenorSearchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    pub fn with_content_filter(mut self, content_filter: impl Into<String>) -> Self {
        self.content_filter = Some(content_filter.into());
        self
    }

    pub fn with_media_filter(mut self, media_filter: impl Into<String>) -> Self {
        self.media_filter = Some(media_filter.into());
        self
    }

    pub fn with_ar_range(mut self, ar_range: impl Into<String>) -> Self {
        self.ar_range = Some(ar_range.into());
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_pos(mut self, pos: impl Into<String>) -> Self {
        self.pos = Some(pos.into());
        self
    }

    pub fn with_anon_id(mut self, anon_id: impl Into<String>) -> Self {
        self.anon_id = Some(anon_id.into());
        self
    }

    fn params(&self) -> [(&'static str, Option<String>); 7] {
        [
            ("locale", self.locale.clone()),
            ("contentfilter", self.content_filter.clone()),
            ("mediafilter", self.media_filter.clone()),
            ("ar_range", self.ar_range.clone()),
            ("limit", self.limit.map(|v| v.to_string())),
            ("pos", self.pos.clone()),
            ("anon_id", self.anon_id.clone()),
        ]
    }
}

/// Client for the Tenor API
#[derive(Debug)]
pub struct TenorClient {
    http: ConnectionManager,
}

impl TenorClient {
    /// Create a client for the public Tenor API. No I/O happens until [`connect`](Self::connect).
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_config(ProviderConfig::tenor().with_api_key(api_key))
    }

    /// Create a client that sends requests through a caller-owned session
    pub fn with_session(api_key: impl Into<String>, session: HttpSession) -> Self {
        Self {
            http: ConnectionManager::with_session(
                ProviderConfig::tenor().with_api_key(api_key),
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

    /// Search Tenor with the given query
    pub async fn search(&self, query: &str, options: &TenorSearchOptions) -> Result<TenorResponse> {
        let params = filter_present(
            std::iter::once(("q", Some(query.to_string()))).chain(options.params()),
        );
        let route = Route::get(&self.http.config().base_url, SEARCH_ENDPOINT, params)?;

        let data = self.http.request(route).await?;
        Ok(TenorResponse::new(data))
    }

    /// Fetch the currently trending media
    pub async fn trending(&self, options: &TenorSearchOptions) -> Result<TenorResponse> {
        let params = filter_present(options.params());
        let route = Route::get(&self.http.config().base_url, TRENDING_ENDPOINT, params)?;

        let data = self.http.request(route).await?;
        Ok(TenorResponse::new(data))
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
impl GifProvider for TenorClient {
    fn id(&self) -> &'static str {
        "tenor"
    }

    fn name(&self) -> &'static str {
        "Tenor"
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
