use serde_json::Value;

/// Response of the Giphy search and trending endpoints
#[derive(Debug, Clone, PartialEq)]
pub struct GiphyResponse {
    raw: Value,
}

impl GiphyResponse {
    #[must_use]
    pub const fn new(raw: Value) -> Self {
        Self { raw }
    }

    /// Media objects in `data`.
    ///
    /// Returns `None` when `data` is missing or empty; an empty result set is
    /// not an error.
    #[must_use]
    pub fn media(&self) -> Option<Vec<GiphyMedia<'_>>> {
        let data = self.raw.get("data")?.as_array()?;
        if data.is_empty() {
            return None;
        }

        Some(data.iter().map(|item| GiphyMedia { data: item }).collect())
    }

    /// Request information in `meta`
    #[must_use]
    pub fn meta(&self) -> Option<GiphyMeta<'_>> {
        self.raw
            .get("meta")
            .filter(|meta| meta.is_object())
            .map(|payload| GiphyMeta { payload })
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

/// One GIF object of a Giphy response
#[derive(Debug, Clone, Copy)]
pub struct GiphyMedia<'a> {
    data: &'a Value,
}

impl<'a> GiphyMedia<'a> {
    fn field(&self, key: &str) -> Option<&'a str> {
        self.data.get(key).and_then(Value::as_str)
    }

    /// Object type, e.g. `gif`
    #[must_use]
    pub fn media_type(&self) -> Option<&'a str> {
        self.field("type")
    }

    #[must_use]
    pub fn id(&self) -> Option<&'a str> {
        self.field("id")
    }

    /// Giphy page of the object
    #[must_use]
    pub fn url(&self) -> Option<&'a str> {
        self.field("url")
    }

    /// Suffix of the Giphy page URL
    #[must_use]
    pub fn slug(&self) -> Option<&'a str> {
        self.field("slug")
    }

    #[must_use]
    pub fn bitly_gif_url(&self) -> Option<&'a str> {
        self.field("bitly_gif_url")
    }

    #[must_use]
    pub fn bitly_url(&self) -> Option<&'a str> {
        self.field("bitly_url")
    }

    /// URL carrying embed og:properties
    #[must_use]
    pub fn embed_url(&self) -> Option<&'a str> {
        self.field("embed_url")
    }

    #[must_use]
    pub fn title(&self) -> Option<&'a str> {
        self.field("title")
    }

    /// Age rating of the object
    #[must_use]
    pub fn rating(&self) -> Option<&'a str> {
        self.field("rating")
    }

    #[must_use]
    pub const fn raw(&self) -> &'a Value {
        self.data
    }
}

/// The `meta` block of a Giphy response
#[derive(Debug, Clone, Copy)]
pub struct GiphyMeta<'a> {
    payload: &'a Value,
}

impl<'a> GiphyMeta<'a> {
    /// Status code reported by Giphy
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        self.payload
            .get("status")
            .and_then(Value::as_u64)
            .and_then(|status| u16::try_from(status).ok())
    }

    #[must_use]
    pub fn message(&self) -> Option<&'a str> {
        self.payload.get("msg").and_then(Value::as_str)
    }

    /// Alias for [`message`](Self::message)
    #[must_use]
    pub fn msg(&self) -> Option<&'a str> {
        self.message()
    }

    #[must_use]
    pub fn response_id(&self) -> Option<&'a str> {
        self.payload.get("response_id").and_then(Value::as_str)
    }
}
