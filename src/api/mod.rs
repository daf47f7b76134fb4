// src/api/mod.rs
//! Blikk API interaction.
//!
//! The transport ([`Client`]) knows nothing about resources; resources know
//! nothing about HTTP. The generic [`list`] and [`get`] operations tie the two
//! together through the [`Listable`] and [`Fetchable`] capabilities.

pub mod auth;
pub mod client;
mod options;
mod pagination;
pub mod query;
mod resource;
pub mod responses;
mod retrieve;

pub use auth::{request_access_token, CredentialSource, EnvCredentials, TokenRequest};
pub use client::{retry_after_delay, Client, ClientBuilder};
pub use options::ListOptions;
pub use pagination::list;
pub use query::{build_query, QueryFields, QueryParams, QueryValue};
pub use resource::{resource_name, Fetchable, Listable};
pub use responses::ListResponse;
pub use retrieve::get;
