//! Sequential best-effort HTTP fetching.
//!
//! Every request either yields a payload or is logged and reported as absent.
//! Nothing here retries.

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{StatusCode, Url};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::config::USER_AGENT;
use crate::error::Result;

/// Why a single request produced nothing.
#[derive(Error, Debug)]
pub enum FetchFailure {
    #[error("HTTP {}", .0.as_u16())]
    Status(StatusCode),
    #[error("{0}")]
    Network(#[from] reqwest::Error),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()?;
        Ok(Self { client })
    }

    /// GET a JSON document with a bearer token. Prints a one-line status and
    /// returns `None` on any failure.
    pub fn get_json(&self, url: &str, token: &str) -> Option<Value> {
        let request = self
            .client
            .get(url)
            .header(AUTHORIZATION, format!("Bearer {}", token))
            .header(ACCEPT, "application/json");

        let outcome = self
            .send(request)
            .and_then(|bytes| serde_json::from_slice(&bytes).map_err(FetchFailure::from));
        report(url, outcome)
    }

    /// GET a page body as text. Prints a one-line status and returns `None`
    /// on any failure.
    pub fn get_text(&self, url: &str) -> Option<String> {
        let outcome = self
            .send(self.client.get(url))
            .map(|bytes| String::from_utf8_lossy(&bytes).into_owned());
        report(url, outcome)
    }

    /// GET raw bytes, leaving reporting to the caller.
    pub fn get_bytes(&self, url: &str) -> std::result::Result<Vec<u8>, FetchFailure> {
        self.send(self.client.get(url))
    }

    fn send(&self, request: RequestBuilder) -> std::result::Result<Vec<u8>, FetchFailure> {
        let resp = request.send()?;
        let status = resp.status();
        debug!(url = %resp.url(), status = status.as_u16(), "response received");

        if !status.is_success() {
            return Err(FetchFailure::Status(status));
        }
        Ok(resp.bytes()?.to_vec())
    }
}

fn report<T>(url: &str, outcome: std::result::Result<T, FetchFailure>) -> Option<T> {
    match outcome {
        Ok(value) => {
            println!("  [✓] {}", short_url(url));
            Some(value)
        }
        Err(e) => {
            println!("  [✗] {} → {}", short_url(url), e);
            None
        }
    }
}

/// Path and query of a URL, for compact progress lines.
pub fn short_url(url: &str) -> String {
    match Url::parse(url) {
        Ok(parsed) => match parsed.query() {
            Some(q) => format!("{}?{}", parsed.path(), q),
            None => parsed.path().to_string(),
        },
        Err(_) => url.to_string(),
    }
}
