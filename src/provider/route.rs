use crate::{GifError, Result};
use reqwest::Method;
use std::collections::BTreeMap;

/// Query parameters of an outgoing request
pub type QueryParams = BTreeMap<String, String>;

/// Drop every parameter whose value is absent.
///
/// Present values pass through untouched; nothing is validated here.
pub fn filter_present<K, I>(params: I) -> QueryParams
where
    K: Into<String>,
    I: IntoIterator<Item = (K, Option<String>)>,
{
    params
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key.into(), v)))
        .collect()
}

/// A fully resolved request: method, URL and query parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    base_url: String,
    endpoint: String,
    method: Method,
    pub(crate) params: QueryParams,
}

impl Route {
    /// Build a route, substituting `{name}` placeholders in `template` from `path_args`.
    ///
    /// Values are inserted literally; query encoding is left to the transport.
    pub fn build(
        base_url: impl Into<String>,
        template: &str,
        path_args: &[(&str, &str)],
        params: QueryParams,
        method: Method,
    ) -> Result<Self> {
        Ok(Self {
            base_url: base_url.into(),
            endpoint: substitute(template, path_args)?,
            method,
            params,
        })
    }

    /// GET route for an endpoint without placeholders
    pub fn get(base_url: impl Into<String>, endpoint: &str, params: QueryParams) -> Result<Self> {
        Self::build(base_url, endpoint, &[], params, Method::GET)
    }

    #[must_use]
    pub fn url(&self) -> String {
        format!("{}{}", self.base_url, self.endpoint)
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    #[must_use]
    pub const fn method(&self) -> &Method {
        &self.method
    }

    #[must_use]
    pub const fn params(&self) -> &QueryParams {
        &self.params
    }
}

fn substitute(template: &str, path_args: &[(&str, &str)]) -> Result<String> {
    let malformed = |reason: String| GifError::MalformedEndpoint {
        endpoint: template.to_string(),
        reason,
    };

    let mut resolved = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find(['{', '}']) {
        if rest[start..].starts_with('}') {
            let offset = template.len() - rest.len() + start;
            return Err(malformed(format!("unmatched '}}' at byte {offset}")));
        }

        resolved.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let end = after
            .find('}')
            .ok_or_else(|| malformed("unterminated placeholder".to_string()))?;
        let name = &after[..end];

        let value = path_args
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| *value)
            .ok_or_else(|| malformed(format!("no value for placeholder '{name}'")))?;

        resolved.push_str(value);
        rest = &after[end + 1..];
    }

    resolved.push_str(rest);
    Ok(resolved)
}
