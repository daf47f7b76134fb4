// src/api/auth.rs
//! Exchanging app credentials for a bearer token.
//!
//! Where the credentials come from is abstracted behind [`CredentialSource`],
//! so the exchange can be exercised without touching the process environment.

use super::client::error_body;
use super::responses::{decode, AccessTokenResponse};
use crate::constants::{BLIKK_TOKEN_URL, DEFAULT_REQUEST_TIMEOUT_SECS, ENV_APP_ID, ENV_APP_SECRET};
use crate::error::{BlikkError, Result};
use crate::types::{AccessToken, Credentials};
use reqwest::blocking::Client as HttpClient;
use reqwest::StatusCode;
use std::time::Duration;

/// Something that can hand out an app id and secret.
pub trait CredentialSource {
    fn credentials(&self) -> Result<Credentials>;
}

impl CredentialSource for Credentials {
    fn credentials(&self) -> Result<Credentials> {
        Ok(self.clone())
    }
}

/// Reads credentials from environment variables, by default
/// `BLIKK_APP_ID` and `BLIKK_APP_SECRET`.
#[derive(Debug, Clone)]
pub struct EnvCredentials {
    app_id_var: String,
    app_secret_var: String,
}

impl EnvCredentials {
    pub fn new() -> Self {
        Self::with_vars(ENV_APP_ID, ENV_APP_SECRET)
    }

    pub fn with_vars(app_id_var: impl Into<String>, app_secret_var: impl Into<String>) -> Self {
        Self {
            app_id_var: app_id_var.into(),
            app_secret_var: app_secret_var.into(),
        }
    }

    fn read(name: &str) -> Result<String> {
        std::env::var(name)
            .ok()
            .filter(|value| !value.is_empty())
            .ok_or_else(|| {
                BlikkError::MissingConfiguration(format!(
                    "{} environment variable not set",
                    name
                ))
            })
    }
}

impl Default for EnvCredentials {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialSource for EnvCredentials {
    fn credentials(&self) -> Result<Credentials> {
        let app_id = Self::read(&self.app_id_var)?;
        let app_secret = Self::read(&self.app_secret_var)?;
        Ok(Credentials::new(app_id, app_secret)?)
    }
}

/// A token exchange against the Blikk auth endpoint.
#[derive(Debug, Clone)]
pub struct TokenRequest {
    url: String,
    http: Option<HttpClient>,
}

impl Default for TokenRequest {
    fn default() -> Self {
        Self {
            url: BLIKK_TOKEN_URL.to_string(),
            http: None,
        }
    }
}

impl TokenRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn http_client(mut self, http: HttpClient) -> Self {
        self.http = Some(http);
        self
    }

    /// POSTs the credentials as HTTP Basic auth and returns the issued token.
    ///
    /// Any non-200 answer is fatal; there is no retry here.
    pub fn send(&self, source: &impl CredentialSource) -> Result<AccessToken> {
        let credentials = source.credentials()?;
        let http = match &self.http {
            Some(http) => http.clone(),
            None => HttpClient::builder()
                .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
                .build()?,
        };

        log::debug!("POST {}", self.url);
        let response = http
            .post(&self.url)
            .basic_auth(&credentials.app_id, Some(&credentials.app_secret))
            .send()?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(BlikkError::Authentication {
                status: status.as_u16(),
                body: error_body(response.text(), &self.url),
            });
        }

        let body = response.bytes()?;
        let token: AccessTokenResponse = decode(&body, "AccessToken")?;
        if let Some(expires) = &token.expires {
            log::info!("Obtained Blikk access token (expires {})", expires);
        }
        Ok(AccessToken::new(token.access_token)?)
    }
}

/// Exchanges credentials from `source` for a token at the production endpoint.
pub fn request_access_token(source: &impl CredentialSource) -> Result<AccessToken> {
    TokenRequest::new().send(source)
}
