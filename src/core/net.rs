// src/core/net.rs

use std::error::Error;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, USER_AGENT};

use crate::config::consts;

/// Blocking page source. The crawl loops depend on this seam instead
/// of a concrete client, so tests can swap in canned responses.
pub trait Fetch {
    /// GET `url` and return the response body as text.
    /// Any non-2xx status is an error.
    fn get(&self, url: &str) -> Result<String, Box<dyn Error>>;
}

/// Shared HTTP client carrying the fixed browser-style header block.
/// Built once per run and reused for every request.
pub struct HttpClient {
    inner: Client,
}

impl HttpClient {
    pub fn new() -> Result<Self, Box<dyn Error>> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(consts::ACCEPT));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(consts::ACCEPT_LANGUAGE));
        headers.insert(USER_AGENT, HeaderValue::from_static(consts::USER_AGENT));
        let inner = Client::builder().default_headers(headers).build()?;
        Ok(Self { inner })
    }
}

impl Fetch for HttpClient {
    fn get(&self, url: &str) -> Result<String, Box<dyn Error>> {
        let resp = self.inner.get(url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(format!("HTTP error: {} {}", status, url).into());
        }
        Ok(resp.text()?)
    }
}
