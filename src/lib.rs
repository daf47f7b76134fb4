// src/lib.rs
//! blikk library — a typed client for the Blikk public API.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling** — `BlikkError`, `ValidationError`
//! - **Client** — `Client`, `ClientBuilder`, `ListOptions`
//! - **Operations** — `list`, `get` (also `Client::list` / `Client::get`)
//! - **Capabilities** — `Listable`, `Fetchable`
//! - **Authentication** — `request_access_token`, `CredentialSource`
//! - **Resources** — `UserSummary`, `User`, `TimeReport`, `UserDayStatistics`, `Project`
//! - **Dates** — `DateOnly` and the reporting-period helpers
//!
//! ```no_run
//! use blikk::{Client, ListOptions, TimeReport};
//!
//! let client = Client::new("token")?;
//! let options = ListOptions::new().with_date_range(blikk::previous_week_now());
//! let reports: Vec<TimeReport> = client.list(options)?;
//! # Ok::<(), blikk::BlikkError>(())
//! ```

pub mod api;
pub mod config;
pub mod constants;
mod error;
pub mod model;
pub mod types;

// --- Error Handling ---
pub use crate::error::{BlikkError, Result};
pub use crate::types::ValidationError;

// --- API Client ---
pub use crate::api::{
    get, list, request_access_token, Client, ClientBuilder, CredentialSource, EnvCredentials,
    Fetchable, ListOptions, ListResponse, Listable, TokenRequest,
};

// --- Resources ---
pub use crate::model::{
    BlikkObject, DayStatistic, Project, TimeReport, User, UserDayStatistics, UserSummary,
};

// --- Domain Types ---
pub use crate::types::{
    first_day_of_month, last_day_of_month, previous_month, previous_month_now, previous_week,
    previous_week_now, AccessToken, Credentials, DateOnly,
};
