// src/api/responses.rs
//! Wire envelopes returned by the Blikk API.

use super::resource::resource_name;
use crate::error::{BlikkError, Result};
use crate::model::common::null_as_default;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// One page of a list endpoint.
///
/// Missing metadata fields decode to zero; a response without `totalPages`
/// therefore counts as the last page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(
    default,
    rename_all = "camelCase",
    bound(deserialize = "T: Deserialize<'de>")
)]
pub struct ListResponse<T> {
    pub object_name: String,
    pub page: u32,
    pub page_size: u32,
    pub item_count: u32,
    pub total_item_count: u32,
    pub total_pages: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub items: Vec<T>,
}

// Written by hand so that `T` needs no `Default` of its own.
impl<T> Default for ListResponse<T> {
    fn default() -> Self {
        Self {
            object_name: String::new(),
            page: 0,
            page_size: 0,
            item_count: 0,
            total_item_count: 0,
            total_pages: 0,
            items: Vec::new(),
        }
    }
}

impl<T> ListResponse<T> {
    /// Pages are 1-indexed; the last page is reached once `page >= totalPages`.
    pub fn is_last_page(&self) -> bool {
        self.page >= self.total_pages
    }
}

/// Body of a successful token exchange.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AccessTokenResponse {
    pub object_name: String,
    pub access_token: String,
    pub expires: Option<String>,
}

/// Decodes a response body, tagging failures with the resource being read.
pub(crate) fn decode<T: DeserializeOwned>(body: &[u8], resource: &'static str) -> Result<T> {
    serde_json::from_slice(body).map_err(|source| BlikkError::Decode { resource, source })
}

/// Decodes one page of `T`.
pub(crate) fn decode_page<T: DeserializeOwned>(body: &[u8]) -> Result<ListResponse<T>> {
    decode(body, resource_name::<T>())
}
