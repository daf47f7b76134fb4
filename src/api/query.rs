// src/api/query.rs
//! Query string construction from option structs.
//!
//! Options types list their own fields with wire names through
//! [`QueryFields`]; each field knows how to tell whether it is unset and how to
//! render itself through [`QueryValue`]. No runtime reflection is involved.

use crate::types::DateOnly;
use indexmap::IndexMap;
use std::fmt::Display;
use url::Url;

/// Rendered query parameters, in field declaration order.
///
/// Inserting an existing key replaces its value in place, which is how the
/// pagination driver overrides `page`.
pub type QueryParams = IndexMap<&'static str, String>;

/// A value that can appear as a query parameter.
pub trait QueryValue {
    /// Whether the value is its type's zero value and must be omitted.
    fn is_zero(&self) -> bool;

    fn render(&self) -> String;
}

/// An options type that can describe its query-mapped fields.
pub trait QueryFields {
    /// `(wire name, value)` for every field that maps to a query parameter.
    fn query_fields(&self) -> Vec<(&'static str, &dyn QueryValue)>;
}

impl QueryValue for u32 {
    fn is_zero(&self) -> bool {
        *self == 0
    }

    fn render(&self) -> String {
        self.to_string()
    }
}

impl QueryValue for DateOnly {
    fn is_zero(&self) -> bool {
        DateOnly::is_zero(self)
    }

    fn render(&self) -> String {
        self.to_string()
    }
}

impl<T: Display> QueryValue for Vec<T> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }

    fn render(&self) -> String {
        self.iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Renders every set field of `options` under its wire name.
pub fn build_query<O: QueryFields + ?Sized>(options: &O) -> QueryParams {
    options
        .query_fields()
        .into_iter()
        .filter(|(_, value)| !value.is_zero())
        .map(|(name, value)| (name, value.render()))
        .collect()
}

/// Replaces the query string of `url` with `params`, form-encoded.
pub fn apply_query(url: &mut Url, params: &QueryParams) {
    if params.is_empty() {
        url.set_query(None);
        return;
    }
    url.query_pairs_mut()
        .clear()
        .extend_pairs(params.iter().map(|(name, value)| (*name, value.as_str())));
}
