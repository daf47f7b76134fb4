// src/config.rs
//! Command-line input and the client configuration resolved from it.

use crate::api::{Client, CredentialSource, EnvCredentials, ListOptions, TokenRequest};
use crate::constants::{BLIKK_API_BASE_URL, DEFAULT_PAGE_SIZE, DEFAULT_REQUEST_TIMEOUT_SECS, ENV_TOKEN};
use crate::error::Result;
use crate::types::{previous_month, previous_week, AccessToken, DateOnly};
use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use std::time::Duration;

/// Parsed command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about = "Query the Blikk public API", long_about = None)]
pub struct CommandLineInput {
    #[command(subcommand)]
    pub command: Command,

    /// Bearer token. Falls back to BLIKK_TOKEN, then to exchanging
    /// BLIKK_APP_ID / BLIKK_APP_SECRET for a fresh token.
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// API base URL
    #[arg(long, global = true, default_value = BLIKK_API_BASE_URL)]
    pub base_url: String,

    /// Items requested per page (the API caps this at 100)
    #[arg(long, global = true, default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: u32,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List all users
    Users,
    /// List all projects
    Projects,
    /// List time reports, optionally filtered by user and date
    TimeReports(FilterArgs),
    /// List per-user day statistics (date range of at most 31 days)
    Statistics(FilterArgs),
    /// Show a single user
    User {
        /// User id
        id: String,
    },
}

/// Filters shared by the time reporting commands.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterArgs {
    /// First day to include (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<DateOnly>,

    /// Last day to include (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<DateOnly>,

    /// Restrict to these user ids (repeatable)
    #[arg(long = "user-id")]
    pub user_ids: Vec<u16>,

    /// Use Monday..Sunday of last week (Stockholm time)
    #[arg(long, conflicts_with_all = ["from", "to", "previous_month"])]
    pub previous_week: bool,

    /// Use the whole of last month (Stockholm time)
    #[arg(long, conflicts_with_all = ["from", "to"])]
    pub previous_month: bool,
}

impl FilterArgs {
    /// Applies the filters to `options`, resolving relative periods against `now`.
    pub fn apply(&self, options: ListOptions, now: &DateTime<Utc>) -> ListOptions {
        let (from, to) = if self.previous_week {
            previous_week(now)
        } else if self.previous_month {
            previous_month(now)
        } else {
            (
                self.from.unwrap_or_default(),
                self.to.unwrap_or_default(),
            )
        };
        options
            .with_user_ids(self.user_ids.iter().copied())
            .with_from_date(from)
            .with_to_date(to)
    }
}

/// Resolved client configuration, validated and ready to build a [`Client`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub token: AccessToken,
    pub page_size: u32,
    pub timeout: Duration,
}

impl ClientConfig {
    /// Resolves configuration from CLI input and the process environment.
    pub fn resolve(cli: &CommandLineInput) -> Result<Self> {
        let env_token = std::env::var(ENV_TOKEN).ok();
        Self::resolve_with(cli, env_token, &EnvCredentials::new(), &TokenRequest::new())
    }

    /// Resolution with every external input passed in explicitly.
    ///
    /// The token is taken from the CLI, then `env_token`; only when both are
    /// absent are credentials exchanged through `token_request`.
    pub fn resolve_with(
        cli: &CommandLineInput,
        env_token: Option<String>,
        credentials: &impl CredentialSource,
        token_request: &TokenRequest,
    ) -> Result<Self> {
        let explicit = cli
            .token
            .clone()
            .or(env_token)
            .filter(|token| !token.trim().is_empty());

        let token = match explicit {
            Some(token) => AccessToken::new(token)?,
            None => {
                log::info!("No token supplied, exchanging app credentials");
                token_request.send(credentials)?
            }
        };

        Ok(Self {
            base_url: cli.base_url.clone(),
            token,
            page_size: cli.page_size,
            timeout: Duration::from_secs(cli.timeout),
        })
    }

    pub fn build_client(&self) -> Result<Client> {
        Client::builder(self.token.as_str())
            .base_url(self.base_url.clone())
            .timeout(self.timeout)
            .build()
    }

    /// Starting options for every list command.
    pub fn list_options(&self) -> ListOptions {
        ListOptions::new().with_page_size(self.page_size)
    }
}
