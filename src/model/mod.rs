//! Blikk resource models.
//!
//! Each resource declares the operations it supports by implementing
//! [`Listable`](crate::api::Listable) and/or [`Fetchable`](crate::api::Fetchable).
//! Fields the API may omit or send as `null` decode to their defaults;
//! non-optional scalars and lists go through `common::null_as_default`.

pub mod common;
mod projects;
mod time_reports;
mod users;

pub use common::{BlikkObject, NumberedObject};
pub use projects::{CostCenter, Location, Project, ProjectCategory, ProjectStatus, Tag};
pub use time_reports::{DayStatistic, TimeReport, UserDayStatistics};
pub use users::{Address, User, UserSummary};
