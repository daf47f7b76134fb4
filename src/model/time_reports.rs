// src/model/time_reports.rs
//! Time reporting resources.

use super::common::{null_as_default, BlikkObject, NumberedObject};
use crate::api::{ListOptions, Listable};
use crate::constants::MAX_STATISTICS_SPAN_DAYS;
use crate::types::DateOnly;
use serde::{Deserialize, Serialize};

/// A single time report row from `v1/Core/TimeReports`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TimeReport {
    pub object_name: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    pub date: DateOnly,
    pub clock_start: Option<String>,
    pub clock_end: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub hours: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub invoiceable_hours: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub break_minutes: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub cost: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub rate: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub discount: f64,
    pub comment: Option<String>,
    pub internal_comment: Option<String>,
    pub sent_to_attest_date: Option<String>,
    pub attested_date: Option<String>,
    pub user: Option<BlikkObject>,
    pub project: Option<NumberedObject>,
    pub internal_project: Option<BlikkObject>,
    pub absence_project: Option<BlikkObject>,
    pub contact: Option<BlikkObject>,
    pub activity: Option<BlikkObject>,
    pub time_code: Option<BlikkObject>,
    pub time_article: Option<BlikkObject>,
    pub cost_center: Option<BlikkObject>,
    pub invoice_id: Option<i64>,
    pub invoiced_date: Option<String>,
    pub invoice_draft_id: Option<i64>,
    pub travel_report_id: Option<i64>,
    pub allowance_report_id: Option<i64>,
    pub created_date: Option<String>,
    pub updated_date: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub has_additions: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub has_equipment: bool,
    pub created_by: Option<BlikkObject>,
    pub updated_by: Option<BlikkObject>,
    pub task_id: Option<i64>,
}

impl Listable for TimeReport {
    const PATH: &'static str = "v1/Core/TimeReports";

    fn valid_filter(options: &ListOptions) -> bool {
        !options.is_date_range_inverted()
    }
}

/// Reported versus scheduled hours for one user on one day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DayStatistic {
    pub object_name: Option<String>,
    pub date: DateOnly,
    #[serde(deserialize_with = "null_as_default")]
    pub reported_hours: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub scheduled_hours: f64,
    pub locked_date: Option<String>,
    pub attested_date: Option<String>,
}

/// Per-user day statistics from `v1/Core/TimeReports/UserDayStatistics`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserDayStatistics {
    pub object_name: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub user_id: u16,
    pub name: Option<String>,
    pub department: Option<BlikkObject>,
    #[serde(deserialize_with = "null_as_default")]
    pub dates: Vec<DayStatistic>,
}

impl UserDayStatistics {
    pub fn total_reported_hours(&self) -> f64 {
        self.dates.iter().map(|d| d.reported_hours).sum()
    }

    pub fn total_scheduled_hours(&self) -> f64 {
        self.dates.iter().map(|d| d.scheduled_hours).sum()
    }
}

impl Listable for UserDayStatistics {
    const PATH: &'static str = "v1/Core/TimeReports/UserDayStatistics";

    /// The endpoint refuses inverted ranges and ranges longer than a month.
    fn valid_filter(options: &ListOptions) -> bool {
        match options.date_span_days() {
            Some(span) => (0..=MAX_STATISTICS_SPAN_DAYS).contains(&span),
            None => true,
        }
    }
}
