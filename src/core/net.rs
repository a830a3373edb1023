// src/core/net.rs

// Blocking HTTP plumbing. Both remote endpoints are HTTPS; requests are
// strictly sequential, so the blocking client is all we need.

use std::{env, time::Duration};

use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

use crate::config::consts::{RENDER_API_URL, RENDER_KEY_VAR, REQUEST_TIMEOUT_SECS, USER_AGENT};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP {code}: {body}")]
    Http { code: u16, body: String },
    #[error("transport: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("decode: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("missing environment variable {0}")]
    MissingKey(&'static str),
    #[error("render service: {0}")]
    BadResponse(String),
}

/// Shared client: UA + timeout set once.
pub fn client() -> Result<Client, FetchError> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()?;
    Ok(client)
}

/// Client for the external scraping service. Pages behind heavy scripting
/// only yield their review markup once rendered, so raw GETs won't do.
pub struct RenderClient {
    http: Client,
    api_key: String,
}

impl RenderClient {
    /// Reads the API key from the environment. No key, no client.
    pub fn from_env() -> Result<Self, FetchError> {
        let api_key =
            env::var(RENDER_KEY_VAR).map_err(|_| FetchError::MissingKey(RENDER_KEY_VAR))?;
        Ok(Self { http: client()?, api_key })
    }

    /// Fetch the fully rendered HTML for `url` through the service.
    pub fn render_html(&self, url: &str) -> Result<String, FetchError> {
        let resp = self
            .http
            .post(RENDER_API_URL)
            .bearer_auth(&self.api_key)
            .json(&json!({ "url": url, "formats": ["html"] }))
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Http {
                code: status.as_u16(),
                body: resp.text().unwrap_or_default(),
            });
        }

        let body: RenderResponse = serde_json::from_str(&resp.text()?)?;
        body.into_html()
    }
}

/// The service has answered with `html` at the top level in older API
/// revisions and under `data` in newer ones; accept either.
#[derive(Deserialize)]
struct RenderResponse {
    html: Option<String>,
    data: Option<RenderData>,
}

#[derive(Deserialize)]
struct RenderData {
    html: Option<String>,
}

impl RenderResponse {
    fn into_html(self) -> Result<String, FetchError> {
        if let Some(html) = self.html {
            return Ok(html);
        }
        if let Some(html) = self.data.and_then(|d| d.html) {
            return Ok(html);
        }
        Err(FetchError::BadResponse(s!("response carried no html field")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_response_prefers_top_level_html() {
        let r: RenderResponse =
            serde_json::from_str(r#"{"html":"<p>a</p>","data":{"html":"<p>b</p>"}}"#).unwrap();
        assert_eq!(r.into_html().unwrap(), "<p>a</p>");
    }

    #[test]
    fn render_response_falls_back_to_data_html() {
        let r: RenderResponse =
            serde_json::from_str(r#"{"success":true,"data":{"html":"<p>b</p>"}}"#).unwrap();
        assert_eq!(r.into_html().unwrap(), "<p>b</p>");
    }

    #[test]
    fn render_response_without_html_is_an_error() {
        let r: RenderResponse = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(matches!(r.into_html(), Err(FetchError::BadResponse(_))));
    }
}
