mod api_types;
mod provider;

pub use api_types::{TenorMedia, TenorResponse};
pub use provider::{TENOR_BASE_URL, TenorClient, TenorSearchOptions};
