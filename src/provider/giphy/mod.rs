mod api_types;
mod provider;

pub use api_types::{GiphyMedia, GiphyMeta, GiphyResponse};
pub use provider::{GIPHY_BASE_URL, GiphyClient, GiphySearchOptions};
