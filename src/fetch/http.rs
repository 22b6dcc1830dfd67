// src/fetch/http.rs
// =============================================================================
// The HTTP side of fetching: one GET per prefix.
//
// Request:  GET {base_url}{encoded prefix}
// Response: 200 OK with a JSON body like { "suggestions": ["a", "b", ...] }
//
// Anything else (non-2xx status, connection failure, timeout, a body that is
// not the expected JSON) becomes a FetchError. The paced fetcher decides what
// to do with it; this file only reports what went wrong.
// =============================================================================

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use url::form_urlencoded;

use super::SuggestionSource;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {0}")]
    Status(u16),

    #[error("malformed response body: {0}")]
    Malformed(String),
}

// Shape of the endpoint's JSON body
// A missing "suggestions" field means no results, not a broken response
#[derive(Debug, Deserialize)]
struct SuggestResponse {
    #[serde(default)]
    suggestions: Vec<String>,
}

pub struct HttpSuggestionSource {
    client: Client,
    base_url: String,
}

impl HttpSuggestionSource {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("suggest-crawler/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn url_for(&self, prefix: &str) -> String {
        format!("{}{}", self.base_url, encode_prefix(prefix))
    }
}

#[async_trait]
impl SuggestionSource for HttpSuggestionSource {
    async fn fetch(&self, prefix: &str) -> Result<Vec<String>, FetchError> {
        let url = self.url_for(prefix);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        parse_suggestions(&body)
    }
}

/// Parses a response body into the list of suggestions.
pub(crate) fn parse_suggestions(body: &str) -> Result<Vec<String>, FetchError> {
    serde_json::from_str::<SuggestResponse>(body)
        .map(|parsed| parsed.suggestions)
        .map_err(|e| FetchError::Malformed(e.to_string()))
}

/// Percent-encodes a prefix the way browsers encode a URI component.
///
/// form_urlencoded turns spaces into '+' and escapes a few characters that
/// are safe in a component, so those are patched back.
pub(crate) fn encode_prefix(prefix: &str) -> String {
    form_urlencoded::byte_serialize(prefix.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
        .replace("%21", "!")
        .replace("%27", "'")
        .replace("%28", "(")
        .replace("%29", ")")
        .replace("%7E", "~")
}
