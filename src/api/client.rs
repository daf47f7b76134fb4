// src/api/client.rs
//! Blocking HTTP client for the Blikk API.
//!
//! This module owns the transport: building authenticated GET requests,
//! waiting out rate limits, and turning non-200 responses into errors.
//! Parsing and pagination live elsewhere.

use super::resource::{Fetchable, Listable};
use super::ListOptions;
use crate::constants::{BLIKK_API_BASE_URL, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_RETRY_AFTER_SECS};
use crate::error::{BlikkError, Result};
use crate::types::AccessToken;
use chrono::{DateTime, NaiveDateTime, Utc};
use reqwest::blocking::{Client as HttpClient, Response};
use reqwest::header::RETRY_AFTER;
use reqwest::StatusCode;
use std::time::Duration;
use url::Url;

/// Client for the Blikk public API.
///
/// Cheap to clone and safe to share between threads; every call is an
/// independent request and only the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct Client {
    base_url: Url,
    token: AccessToken,
    http: HttpClient,
}

/// Builder for [`Client`]. Defaults to the production API and a 30 second
/// transport timeout.
#[derive(Debug)]
pub struct ClientBuilder {
    token: String,
    base_url: String,
    timeout: Duration,
    http: Option<HttpClient>,
}

impl ClientBuilder {
    /// Overrides the API base URL, e.g. to point at a staging or mock server.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Transport timeout. Ignored when a custom HTTP client is supplied.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Uses a preconfigured reqwest client instead of building one.
    pub fn http_client(mut self, http: HttpClient) -> Self {
        self.http = Some(http);
        self
    }

    pub fn build(self) -> Result<Client> {
        let token = AccessToken::new(self.token)?;
        let base_url = parse_base_url(&self.base_url)?;
        let http = match self.http {
            Some(http) => http,
            None => HttpClient::builder().timeout(self.timeout).build()?,
        };
        log::debug!("Blikk client configured for {}", base_url);
        Ok(Client {
            base_url,
            token,
            http,
        })
    }
}

impl Client {
    /// Creates a client for the production API with default settings.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::builder(token).build()
    }

    pub fn builder(token: impl Into<String>) -> ClientBuilder {
        ClientBuilder {
            token: token.into(),
            base_url: BLIKK_API_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            http: None,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Lists every `T` matching `options`, following all pages.
    pub fn list<T: Listable>(&self, options: ListOptions) -> Result<Vec<T>> {
        super::pagination::list(self, options)
    }

    /// Fetches a single `T` by identifier.
    pub fn get<T: Fetchable>(&self, query: &str) -> Result<T> {
        super::retrieve::get(self, query)
    }

    /// Resolves a resource path against the base URL.
    ///
    /// The path is appended verbatim, so it may carry its own query string.
    pub(crate) fn endpoint(&self, path: &str) -> Result<Url> {
        let raw = format!("{}{}", self.base_url, path);
        Url::parse(&raw).map_err(|source| BlikkError::InvalidBaseUrl { url: raw, source })
    }

    /// Performs an authenticated GET and returns the body of a 200 response.
    ///
    /// A 429 is waited out and retried for as long as the server keeps
    /// sending it; there is no attempt ceiling and no backoff growth.
    /// Transport errors are returned immediately.
    pub(crate) fn execute_get(&self, url: &Url) -> Result<Vec<u8>> {
        let response = self.send_until_admitted(url)?;
        let status = response.status();

        if status != StatusCode::OK {
            log::debug!("GET {} failed with {}", url, status);
            return Err(BlikkError::UnexpectedStatus {
                status: status.as_u16(),
                body: error_body(response.text(), url.as_str()),
            });
        }

        Ok(response.bytes()?.to_vec())
    }

    fn send_until_admitted(&self, url: &Url) -> Result<Response> {
        let mut throttled = 0u32;
        loop {
            log::debug!("GET {}", url);
            let response = self
                .http
                .get(url.clone())
                .bearer_auth(self.token.as_str())
                .send()?;

            if response.status() != StatusCode::TOO_MANY_REQUESTS {
                return Ok(response);
            }

            let header = response
                .headers()
                .get(RETRY_AFTER)
                .and_then(|value| value.to_str().ok())
                .map(str::to_owned);
            drop(response);

            throttled += 1;
            let wait = retry_after_delay(header.as_deref(), Utc::now());
            log::warn!(
                "Rate limited on {} (attempt {}), retrying in {:?}",
                url.path(),
                throttled,
                wait
            );
            std::thread::sleep(wait);
        }
    }
}

/// Body text of a failed response, trimmed at the end.
///
/// An unreadable body becomes an empty string; the read error is logged.
pub(crate) fn error_body<E: std::fmt::Display>(
    read: std::result::Result<String, E>,
    url: &str,
) -> String {
    match read {
        Ok(body) => body.trim_end().to_string(),
        Err(err) => {
            log::debug!("could not read error body from {}: {}", url, err);
            String::new()
        }
    }
}

/// Computes how long to wait before retrying a 429.
///
/// `Retry-After` is read as whole seconds first, then as an HTTP-date
/// relative to `now`. A missing, unparseable or negative value waits one
/// second.
pub fn retry_after_delay(header: Option<&str>, now: DateTime<Utc>) -> Duration {
    let fallback = Duration::from_secs(DEFAULT_RETRY_AFTER_SECS);
    let Some(raw) = header.map(str::trim).filter(|value| !value.is_empty()) else {
        return fallback;
    };

    if let Ok(seconds) = raw.parse::<i64>() {
        return u64::try_from(seconds)
            .map(Duration::from_secs)
            .unwrap_or(fallback);
    }

    match parse_http_date(raw) {
        Some(at) => (at - now).to_std().unwrap_or(fallback),
        None => fallback,
    }
}

/// Parses the three date formats HTTP allows (IMF-fixdate, RFC 850, asctime).
fn parse_http_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(at) = DateTime::parse_from_rfc2822(raw) {
        return Some(at.with_timezone(&Utc));
    }
    ["%A, %d-%b-%y %H:%M:%S GMT", "%a %b %e %H:%M:%S %Y"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.and_utc())
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let mut normalized = raw.trim().to_string();
    if !normalized.ends_with('/') {
        normalized.push('/');
    }
    let url = Url::parse(&normalized).map_err(|source| BlikkError::InvalidBaseUrl {
        url: raw.to_string(),
        source,
    })?;
    if url.cannot_be_a_base() {
        return Err(BlikkError::InvalidBaseUrl {
            url: raw.to_string(),
            source: url::ParseError::RelativeUrlWithCannotBeABaseBase,
        });
    }
    Ok(url)
}
