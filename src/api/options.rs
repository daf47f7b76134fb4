// src/api/options.rs
//! Paging and filter options shared by every list endpoint.

use super::query::{QueryFields, QueryValue};
use crate::constants::{DEFAULT_PAGE_SIZE, FIRST_PAGE};
use crate::types::DateOnly;

/// Options for a list call.
///
/// A field at its zero value (`0`, empty, [`DateOnly::ZERO`]) is left out of
/// the request entirely. `Default` gives all-zero options; [`ListOptions::new`]
/// starts at page 1 with the maximum page size.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// 1-indexed page to start from.
    pub page: u32,
    pub page_size: u32,
    pub user_ids: Vec<u16>,
    /// Inclusive lower bound.
    pub from_date: DateOnly,
    /// Inclusive upper bound.
    pub to_date: DateOnly,
}

impl ListOptions {
    pub fn new() -> Self {
        Self {
            page: FIRST_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
            ..Self::default()
        }
    }

    pub fn with_page(self, page: u32) -> Self {
        Self { page, ..self }
    }

    pub fn with_page_size(self, page_size: u32) -> Self {
        Self { page_size, ..self }
    }

    pub fn with_user_ids(self, user_ids: impl IntoIterator<Item = u16>) -> Self {
        Self {
            user_ids: user_ids.into_iter().collect(),
            ..self
        }
    }

    pub fn with_from_date(self, from_date: DateOnly) -> Self {
        Self { from_date, ..self }
    }

    pub fn with_to_date(self, to_date: DateOnly) -> Self {
        Self { to_date, ..self }
    }

    pub fn with_date_range(self, (from_date, to_date): (DateOnly, DateOnly)) -> Self {
        Self {
            from_date,
            to_date,
            ..self
        }
    }

    /// Whether any filter (as opposed to paging) field is set.
    pub fn has_filters(&self) -> bool {
        !self.user_ids.is_empty() || !self.from_date.is_zero() || !self.to_date.is_zero()
    }

    /// Days from `from_date` to `to_date` when both are set.
    pub fn date_span_days(&self) -> Option<i64> {
        self.from_date.days_until(&self.to_date)
    }

    /// True only when both bounds are set and `from_date` is after `to_date`.
    pub fn is_date_range_inverted(&self) -> bool {
        self.date_span_days().is_some_and(|span| span < 0)
    }
}

impl QueryFields for ListOptions {
    fn query_fields(&self) -> Vec<(&'static str, &dyn QueryValue)> {
        vec![
            ("page", &self.page as &dyn QueryValue),
            ("pageSize", &self.page_size as &dyn QueryValue),
            ("filter.userIds", &self.user_ids as &dyn QueryValue),
            ("filter.from", &self.from_date as &dyn QueryValue),
            ("filter.to", &self.to_date as &dyn QueryValue),
        ]
    }
}
