use crate::types::{Rendition, RenditionKind};
use serde_json::Value;

/// Response of the Tenor search and trending endpoints
#[derive(Debug, Clone, PartialEq)]
pub struct TenorResponse {
    raw: Value,
}

impl TenorResponse {
    #[must_use]
    pub const fn new(raw: Value) -> Self {
        Self { raw }
    }

    /// Items in `results`.
    ///
    /// Returns `None` when `results` is missing or empty; an empty result set
    /// is not an error.
    #[must_use]
    pub fn media(&self) -> Option<Vec<TenorMedia<'_>>> {
        let results = self.raw.get("results")?.as_array()?;
        if results.is_empty() {
            return None;
        }

        Some(results.iter().map(|item| TenorMedia { data: item }).collect())
    }

    /// Position to pass as `pos` to fetch the next page
    #[must_use]
    pub fn next(&self) -> Option<&str> {
        self.raw
            .get("next")
            .and_then(Value::as_str)
            .filter(|next| !next.is_empty())
    }

    /// The decoded payload as received
    #[must_use]
    pub const fn raw(&self) -> &Value {
        &self.raw
    }

    #[must_use]
    pub fn into_raw(self) -> Value {
        self.raw
    }
}

/// One result of a Tenor response
#[derive(Debug, Clone, Copy)]
pub struct TenorMedia<'a> {
    data: &'a Value,
}

impl<'a> TenorMedia<'a> {
    #[must_use]
    pub fn id(&self) -> Option<&'a str> {
        self.data.get("id").and_then(Value::as_str)
    }

    #[must_use]
    pub fn title(&self) -> Option<&'a str> {
        self.data.get("title").and_then(Value::as_str)
    }

    /// Short URL of the item
    #[must_use]
    pub fn url(&self) -> Option<&'a str> {
        self.data.get("url").and_then(Value::as_str)
    }

    /// Tenor page of the item
    #[must_use]
    pub fn item_url(&self) -> Option<&'a str> {
        self.data.get("itemurl").and_then(Value::as_str)
    }

    #[must_use]
    pub fn has_audio(&self) -> Option<bool> {
        self.data.get("hasaudio").and_then(Value::as_bool)
    }

    #[must_use]
    pub fn tags(&self) -> Option<Vec<&'a str>> {
        let tags = self.data.get("tags")?.as_array()?;
        Some(tags.iter().filter_map(Value::as_str).collect())
    }

    /// Number of format sets in `media`
    #[must_use]
    pub fn formats(&self) -> usize {
        self.format_sets().map_or(0, <[Value]>::len)
    }

    /// First rendition of the given kind across the format sets
    #[must_use]
    pub fn rendition(&self, kind: RenditionKind) -> Option<Rendition<'a>> {
        self.format_sets()?
            .iter()
            .find_map(|set| set.get(kind.key()))
            .map(|data| Rendition::new(kind, data))
    }

    /// Every known rendition of the first format set, in catalog order
    #[must_use]
    pub fn renditions(&self) -> Vec<Rendition<'a>> {
        let Some(set) = self.format_sets().and_then(<[Value]>::first) else {
            return Vec::new();
        };

        RenditionKind::ALL
            .into_iter()
            .filter_map(|kind| set.get(kind.key()).map(|data| Rendition::new(kind, data)))
            .collect()
    }

    #[must_use]
    pub const fn raw(&self) -> &'a Value {
        self.data
    }

    fn format_sets(&self) -> Option<&'a [Value]> {
        self.data
            .get("media")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rendition(url: &str) -> Value {
        json!({ "size": 1024, "dims": [498, 280], "preview": format!("{url}.png"), "url": url })
    }

    fn sample() -> TenorResponse {
        TenorResponse::new(json!({
            "results": [{
                "id": "16597323",
                "title": "Cat Dance",
                "url": "https://tenor.com/bhcXp.gif",
                "itemurl": "https://tenor.com/view/cat-dance-16597323",
                "hasaudio": false,
                "tags": ["cat", "dance"],
                "media": [{
                    "tinygif": rendition("https://media.tenor.com/tiny"),
                    "gif": rendition("https://media.tenor.com/full"),
                    "loopedmp4": {
                        "size": 4096,
                        "dims": [498, 280],
                        "preview": "https://media.tenor.com/loop.png",
                        "url": "https://media.tenor.com/loop.mp4",
                        "duration": 2.4
                    },
                    "hevc": rendition("https://media.tenor.com/hevc")
                }, {
                    "nanowebm": rendition("https://media.tenor.com/nano")
                }]
            }],
            "next": "20"
        }))
    }

    #[test]
    fn test_media_fields() {
        let response = sample();
        let media = response.media().unwrap();
        assert_eq!(media.len(), 1);

        let item = media[0];
        assert_eq!(item.id(), Some("16597323"));
        assert_eq!(item.title(), Some("Cat Dance"));
        assert_eq!(item.url(), Some("https://tenor.com/bhcXp.gif"));
        assert_eq!(item.item_url(), Some("https://tenor.com/view/cat-dance-16597323"));
        assert_eq!(item.has_audio(), Some(false));
        assert_eq!(item.tags(), Some(vec!["cat", "dance"]));
        assert_eq!(item.formats(), 2);
        assert_eq!(response.next(), Some("20"));
    }

    #[test]
    fn test_renditions_in_catalog_order() {
        let response = sample();
        let media = response.media().unwrap();

        let kinds: Vec<_> = media[0].renditions().iter().map(Rendition::kind).collect();
        assert_eq!(
            kinds,
            vec![RenditionKind::Gif, RenditionKind::TinyGif, RenditionKind::LoopedMp4]
        );
    }

    #[test]
    fn test_rendition_lookup() {
        let response = sample();
        let item = response.media().unwrap()[0];

        let looped = item.rendition(RenditionKind::LoopedMp4).unwrap();
        assert_eq!(looped.url(), Some("https://media.tenor.com/loop.mp4"));
        assert_eq!(looped.duration(), Some(2.4));

        let nano = item.rendition(RenditionKind::NanoWebm).unwrap();
        assert_eq!(nano.dims(), Some((498, 280)));

        assert!(item.rendition(RenditionKind::Mp4).is_none());
    }

    #[test]
    fn test_absent_results() {
        for payload in [json!({ "results": [] }), json!({}), json!({ "results": "nope" })] {
            let response = TenorResponse::new(payload);
            assert!(response.media().is_none());
            assert!(response.next().is_none());
        }
    }

    #[test]
    fn test_item_without_media() {
        let response = TenorResponse::new(json!({ "results": [{ "id": "1" }] }));
        let item = response.media().unwrap()[0];

        assert_eq!(item.formats(), 0);
        assert!(item.renditions().is_empty());
        assert!(item.rendition(RenditionKind::Gif).is_none());
    }
}
