// src/api/pagination.rs
//! Page-index pagination over any listable resource.

use super::client::Client;
use super::query::{apply_query, build_query};
use super::resource::{resource_name, Listable};
use super::responses::decode_page;
use super::ListOptions;
use crate::error::{BlikkError, Result};

/// Fetches every page of `T` and returns the items in page order.
///
/// Pages are requested one after another starting at `options.page`; each
/// subsequent request differs only in its `page` parameter. The loop ends
/// once the server reports `page >= totalPages`, so an empty collection or
/// `totalPages = 0` costs exactly one request.
pub fn list<T: Listable>(client: &Client, mut options: ListOptions) -> Result<Vec<T>> {
    let resource = resource_name::<T>();
    if !T::valid_filter(&options) {
        return Err(BlikkError::InvalidFilter { resource });
    }

    let mut url = client.endpoint(T::PATH)?;
    let mut params = build_query(&options);
    apply_query(&mut url, &params);

    let mut items = Vec::new();
    let mut pages_fetched = 0u32;

    loop {
        let body = client.execute_get(&url)?;
        let response = decode_page::<T>(&body)?;
        pages_fetched += 1;

        let is_last = response.is_last_page();
        let current = response.page;
        items.extend(response.items);

        if is_last {
            break;
        }

        options.page = current + 1;
        params.insert("page", options.page.to_string());
        apply_query(&mut url, &params);
        log::debug!(
            "{}: page {} of {} fetched, continuing",
            resource,
            current,
            response.total_pages
        );
    }

    log::info!(
        "Listed {} {} item(s) across {} page(s)",
        items.len(),
        resource,
        pages_fetched
    );
    Ok(items)
}
