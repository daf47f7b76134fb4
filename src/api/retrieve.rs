// src/api/retrieve.rs
//! Single-resource retrieval.

use super::client::Client;
use super::resource::{resource_name, Fetchable};
use super::responses::decode;
use crate::error::Result;

/// Fetches one `T` from its identifier path. The body is the resource itself,
/// with no list envelope.
pub fn get<T: Fetchable>(client: &Client, query: &str) -> Result<T> {
    let url = client.endpoint(&T::path(query))?;
    let body = client.execute_get(&url)?;
    decode(&body, resource_name::<T>())
}
