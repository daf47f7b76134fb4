// src/api/resource.rs
//! Capability contracts for resource types.
//!
//! A resource type opts into listing, fetching, or both by implementing the
//! matching trait. The generic driver and fetcher only ever see these traits,
//! so adding a resource means adding a type, never touching the engine.

use super::ListOptions;
use serde::de::DeserializeOwned;

/// A resource that can be listed page by page from a collection endpoint.
pub trait Listable: DeserializeOwned {
    /// Collection path relative to the API base URL, e.g. `v1/Core/Projects`.
    const PATH: &'static str;

    /// Whether the endpoint accepts this combination of filters.
    ///
    /// Called before any request is made; returning `false` fails the list
    /// call with [`BlikkError::InvalidFilter`](crate::BlikkError::InvalidFilter).
    fn valid_filter(options: &ListOptions) -> bool;
}

/// A resource that can be fetched on its own by identifier.
pub trait Fetchable: DeserializeOwned {
    /// Path of the single resource, with `query` (usually an id) substituted.
    fn path(query: &str) -> String;
}

/// Short type name used in error messages and logs (`TimeReport`, not
/// `blikk::model::time_reports::TimeReport`).
pub fn resource_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
