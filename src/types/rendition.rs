use serde::{Deserialize, Serialize};
use serde_json::Value;

/// File container of a rendition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Container {
    Gif,
    Mp4,
    Webm,
}

impl std::fmt::Display for Container {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Gif => write!(f, "gif"),
            Self::Mp4 => write!(f, "mp4"),
            Self::Webm => write!(f, "webm"),
        }
    }
}

/// Rendition kinds a provider may return for one media item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenditionKind {
    Gif,
    MediumGif,
    TinyGif,
    NanoGif,
    Mp4,
    LoopedMp4,
    TinyMp4,
    NanoMp4,
    Webm,
    TinyWebm,
    NanoWebm,
}

impl RenditionKind {
    /// Every kind, largest first within each container
    pub const ALL: [Self; 11] = [
        Self::Gif,
        Self::MediumGif,
        Self::TinyGif,
        Self::NanoGif,
        Self::Mp4,
        Self::LoopedMp4,
        Self::TinyMp4,
        Self::NanoMp4,
        Self::Webm,
        Self::TinyWebm,
        Self::NanoWebm,
    ];

    /// JSON key used by the provider for this rendition
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Gif => "gif",
            Self::MediumGif => "mediumgif",
            Self::TinyGif => "tinygif",
            Self::NanoGif => "nanogif",
            Self::Mp4 => "mp4",
            Self::LoopedMp4 => "loopedmp4",
            Self::TinyMp4 => "tinymp4",
            Self::NanoMp4 => "nanomp4",
            Self::Webm => "webm",
            Self::TinyWebm => "tinywebm",
            Self::NanoWebm => "nanowebm",
        }
    }

    /// Look up a kind by its JSON key
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.key() == key)
    }

    #[must_use]
    pub const fn container(self) -> Container {
        match self {
            Self::Gif | Self::MediumGif | Self::TinyGif | Self::NanoGif => Container::Gif,
            Self::Mp4 | Self::LoopedMp4 | Self::TinyMp4 | Self::NanoMp4 => Container::Mp4,
            Self::Webm | Self::TinyWebm | Self::NanoWebm => Container::Webm,
        }
    }

    /// Video renditions carry a duration
    #[must_use]
    pub const fn is_video(self) -> bool {
        !matches!(self.container(), Container::Gif)
    }
}

impl std::fmt::Display for RenditionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Read-only view over one rendition object:
/// `{ size, dims: [w, h], preview, url, duration? }`
#[derive(Debug, Clone, Copy)]
pub struct Rendition<'a> {
    kind: RenditionKind,
    data: &'a Value,
}

impl<'a> Rendition<'a> {
    pub(crate) const fn new(kind: RenditionKind, data: &'a Value) -> Self {
        Self { kind, data }
    }

    #[must_use]
    pub const fn kind(&self) -> RenditionKind {
        self.kind
    }

    /// File size in bytes
    #[must_use]
    pub fn size(&self) -> Option<u64> {
        self.data.get("size").and_then(Value::as_u64)
    }

    /// Width and height in pixels
    #[must_use]
    pub fn dims(&self) -> Option<(u64, u64)> {
        match self.data.get("dims")?.as_array()?.as_slice() {
            [width, height] => Some((width.as_u64()?, height.as_u64()?)),
            _ => None,
        }
    }

    #[must_use]
    pub fn width(&self) -> Option<u64> {
        self.dims().map(|(width, _)| width)
    }

    #[must_use]
    pub fn height(&self) -> Option<u64> {
        self.dims().map(|(_, height)| height)
    }

    /// Still preview image for this rendition
    #[must_use]
    pub fn preview_url(&self) -> Option<&'a str> {
        self.data.get("preview").and_then(Value::as_str)
    }

    #[must_use]
    pub fn url(&self) -> Option<&'a str> {
        self.data.get("url").and_then(Value::as_str)
    }

    /// Playback length in seconds, only present on video renditions
    #[must_use]
    pub fn duration(&self) -> Option<f64> {
        self.data.get("duration").and_then(Value::as_f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_key_lookup() {
        for kind in RenditionKind::ALL {
            assert_eq!(RenditionKind::from_key(kind.key()), Some(kind));
        }
        assert_eq!(RenditionKind::from_key("hevc"), None);
    }

    #[test]
    fn test_kind_container() {
        assert_eq!(RenditionKind::LoopedMp4.container(), Container::Mp4);
        assert_eq!(RenditionKind::NanoGif.container(), Container::Gif);
        assert_eq!(RenditionKind::TinyWebm.container(), Container::Webm);
        assert!(RenditionKind::Mp4.is_video());
        assert!(!RenditionKind::MediumGif.is_video());
    }

    #[test]
    fn test_rendition_accessors() {
        let data = json!({
            "size": 2048,
            "dims": [220, 124],
            "preview": "https://media.tenor.com/a.png",
            "url": "https://media.tenor.com/a.mp4",
            "duration": 1.5
        });
        let rendition = Rendition::new(RenditionKind::Mp4, &data);

        assert_eq!(rendition.kind(), RenditionKind::Mp4);
        assert_eq!(rendition.size(), Some(2048));
        assert_eq!(rendition.dims(), Some((220, 124)));
        assert_eq!(rendition.width(), Some(220));
        assert_eq!(rendition.height(), Some(124));
        assert_eq!(rendition.preview_url(), Some("https://media.tenor.com/a.png"));
        assert_eq!(rendition.url(), Some("https://media.tenor.com/a.mp4"));
        assert_eq!(rendition.duration(), Some(1.5));
    }

    #[test]
    fn test_rendition_missing_fields() {
        let data = json!({ "dims": [1] });
        let rendition = Rendition::new(RenditionKind::Gif, &data);

        assert!(rendition.size().is_none());
        assert!(rendition.dims().is_none());
        assert!(rendition.url().is_none());
        assert!(rendition.duration().is_none());
    }
}
