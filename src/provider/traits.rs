use crate::Result;
use async_trait::async_trait;

/// Lifecycle shared by every GIF provider client
#[async_trait]
pub trait GifProvider: Send + Sync {
    /// Provider identifier (e.g., "giphy", "tenor")
    fn id(&self) -> &'static str;

    /// Human-readable provider name
    fn name(&self) -> &'static str;

    /// Base URL requests are sent to
    fn base_url(&self) -> &str;

    /// Whether a session is currently held
    fn is_open(&self) -> bool;

    /// Open the HTTP session; must be awaited before the first request
    async fn open(&self) -> Result<()>;

    /// Release the HTTP session. Safe to call more than once.
    async fn close(&self) -> Result<()>;
}
