pub mod filters;
pub mod rendition;

pub use filters::{AgeRating, AspectRatio, ContentFilter, MediaFilter};
pub use rendition::{Container, Rendition, RenditionKind};
