//! Named option values for the search endpoints.
//!
//! Option setters take `impl Into<String>`, so these are conveniences rather
//! than a closed set: a raw string the providers accept works just as well.

use serde::{Deserialize, Serialize};

/// Giphy age rating, see <https://developers.giphy.com/docs/optional-settings/#rating>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeRating {
    /// Completely clean content
    #[serde(rename = "g")]
    G,
    /// Mild profanity or suggestive content
    #[serde(rename = "pg")]
    Pg,
    /// Moderate profanity or suggestive content
    #[serde(rename = "pg-13")]
    Pg13,
    /// Severe profanity or sexual themes
    #[serde(rename = "r")]
    R,
}

impl AgeRating {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::G => "g",
            Self::Pg => "pg",
            Self::Pg13 => "pg-13",
            Self::R => "r",
        }
    }
}

/// Tenor content safety filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContentFilter {
    #[default]
    Off,
    Low,
    Medium,
    High,
}

impl ContentFilter {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Tenor media filter, reduces the number of renditions returned per item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaFilter {
    Basic,
    Minimal,
}

impl MediaFilter {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Minimal => "minimal",
        }
    }
}

/// Tenor aspect ratio range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectRatio {
    All,
    Wide,
    Standard,
}

impl AspectRatio {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Wide => "wide",
            Self::Standard => "standard",
        }
    }
}

macro_rules! impl_option_value {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl std::fmt::Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(self.as_str())
                }
            }

            impl From<$ty> for String {
                fn from(value: $ty) -> Self {
                    value.as_str().to_string()
                }
            }
        )+
    };
}

impl_option_value!(AgeRating, ContentFilter, MediaFilter, AspectRatio);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_values() {
        assert_eq!(AgeRating::Pg13.as_str(), "pg-13");
        assert_eq!(String::from(ContentFilter::High), "high");
        assert_eq!(MediaFilter::Minimal.to_string(), "minimal");
        assert_eq!(AspectRatio::Standard.as_str(), "standard");
    }

    #[test]
    fn test_serde_matches_wire_values() {
        let rating: AgeRating = serde_json::from_str("\"pg-13\"").unwrap();
        assert_eq!(rating, AgeRating::Pg13);
        assert_eq!(
            serde_json::to_string(&ContentFilter::default()).unwrap(),
            "\"off\""
        );
    }
}
