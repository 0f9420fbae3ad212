use super::{ProviderConfig, route::Route};
use crate::{GifError, Result};
use parking_lot::Mutex;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

/// Query parameter names that already carry an API key
const KEY_PARAMS: [&str; 2] = ["key", "api_key"];

/// A pooled HTTP client plus how it treats error statuses
#[derive(Debug, Clone)]
pub struct HttpSession {
    client: Client,
    raise_for_status: bool,
}

impl HttpSession {
    /// Wrap a caller-owned client. Error statuses are not raised unless enabled.
    #[must_use]
    pub const fn new(client: Client) -> Self {
        Self {
            client,
            raise_for_status: false,
        }
    }

    /// Treat non-2xx responses as errors
    #[must_use]
    pub const fn raise_for_status(mut self, enabled: bool) -> Self {
        self.raise_for_status = enabled;
        self
    }

    #[must_use]
    pub const fn raises_for_status(&self) -> bool {
        self.raise_for_status
    }

    /// Get the underlying reqwest client
    #[must_use]
    pub const fn inner(&self) -> &Client {
        &self.client
    }

    fn build(config: &ProviderConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()?;

        Ok(Self::new(client).raise_for_status(true))
    }
}

/// Owns the HTTP session of one client and sends its requests
#[derive(Debug)]
pub struct ConnectionManager {
    config: ProviderConfig,
    session: Mutex<Option<HttpSession>>,
}

impl ConnectionManager {
    /// Create a manager with no session; call [`open`](Self::open) before use
    #[must_use]
    pub fn new(config: ProviderConfig) -> Self {
        Self {
            config,
            session: Mutex::new(None),
        }
    }

    /// Create a manager around a caller-supplied session
    #[must_use]
    pub fn with_session(config: ProviderConfig, session: HttpSession) -> Self {
        Self {
            config,
            session: Mutex::new(Some(session)),
        }
    }

    #[must_use]
    pub const fn config(&self) -> &ProviderConfig {
        &self.config
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.session.lock().is_some()
    }

    /// Create the session if there is none.
    ///
    /// A caller-supplied session is never reconfigured. If it does not raise on
    /// error statuses a warning is logged and it is used as is.
    pub async fn open(&self) -> Result<()> {
        let mut session = self.session.lock();

        if let Some(existing) = session.as_ref() {
            if !existing.raises_for_status() {
                warn!(
                    "Supplied HTTP session for {} does not raise on error status; \
                     non-2xx bodies will be decoded as regular responses",
                    self.config.base_url
                );
            }
            return Ok(());
        }

        *session = Some(HttpSession::build(&self.config)?);
        debug!("Opened HTTP session for {}", self.config.base_url);

        Ok(())
    }

    /// Send the route and decode the response body as JSON
    pub async fn request(&self, mut route: Route) -> Result<Value> {
        let session = self.current_session().ok_or(GifError::SessionClosed)?;
        self.inject_key(&mut route);

        debug!("{} {}", route.method(), route.url());
        let response = session
            .client
            .request(route.method().clone(), route.url())
            .query(route.params())
            .send()
            .await?;

        let status = response.status();
        if session.raise_for_status && !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            debug!("Request to {} failed with status {}", route.endpoint(), status);

            return Err(GifError::HttpStatus {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Drop the session. Closing twice is a no-op.
    pub async fn close(&self) -> Result<()> {
        if self.session.lock().take().is_some() {
            debug!("Closed HTTP session for {}", self.config.base_url);
        }
        Ok(())
    }

    fn current_session(&self) -> Option<HttpSession> {
        self.session.lock().clone()
    }

    fn inject_key(&self, route: &mut Route) {
        let Some(api_key) = self
            .config
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
        else {
            return;
        };

        let has_key = KEY_PARAMS
            .iter()
            .chain(std::iter::once(&self.config.key_param.as_str()))
            .any(|param| route.params.contains_key(*param));

        if !has_key {
            route
                .params
                .insert(self.config.key_param.clone(), api_key.to_string());
        }
    }
}
