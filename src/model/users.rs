// src/model/users.rs
//! User resources: the admin listing and the single-user detail view.

use super::common::{null_as_default, BlikkObject};
use crate::api::{Fetchable, ListOptions, Listable};
use crate::types::DateOnly;
use serde::{Deserialize, Serialize};

/// One row of `v1/Admin/Users`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserSummary {
    pub object_name: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub start_date: DateOnly,
    pub end_date: DateOnly,
    pub employee_number: Option<String>,
    pub time_reporting_profile: Option<BlikkObject>,
    pub department: Option<BlikkObject>,
    pub license: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub permissions: Vec<String>,
    pub created_by: Option<BlikkObject>,
    pub updated_by: Option<BlikkObject>,
    pub created_date: Option<String>,
    pub updated_date: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub salary_type: i64,
    pub cost_center: Option<BlikkObject>,
}

impl Listable for UserSummary {
    const PATH: &'static str = "v1/Admin/Users";

    /// The user listing takes no filters, only paging.
    fn valid_filter(options: &ListOptions) -> bool {
        !options.has_filters()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Address {
    pub object_name: Option<String>,
    pub street_address: Option<String>,
    pub additional_address: Option<String>,
    pub postal_code: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country_id: Option<i64>,
    pub country_name: Option<String>,
}

/// Full detail of one user, from `v1/Admin/Users/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct User {
    pub object_name: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub license: Option<String>,
    pub email: Option<String>,
    pub social_security_number: Option<String>,
    pub mobile_phone_number: Option<String>,
    pub work_phone_number: Option<String>,
    pub note: Option<String>,
    pub start_date: DateOnly,
    pub end_date: DateOnly,
    pub department: Option<BlikkObject>,
    pub cost_center: Option<BlikkObject>,
    pub salary_type: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub cost_per_hour: f64,
    pub employee_number: Option<String>,
    pub settlement_account: Option<String>,
    pub address: Option<Address>,
    pub next_of_kin: Option<String>,
    pub next_of_kin_relation: Option<String>,
    pub next_of_kin_phone_number: Option<String>,
    pub manager: Option<BlikkObject>,
    pub schedule: Option<BlikkObject>,
    pub standard_time_article: Option<BlikkObject>,
    pub standard_activity: Option<BlikkObject>,
    pub time_reporting_profile: Option<BlikkObject>,
    #[serde(deserialize_with = "null_as_default")]
    pub time_bank_enabled: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub current_time_bank: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub planning_capacity_in_percent: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub permissions: Vec<String>,
    pub created_by: Option<BlikkObject>,
    pub updated_by: Option<BlikkObject>,
    pub created_date: Option<String>,
    pub updated_date: Option<String>,
}

impl User {
    /// "First Last", skipping whichever part is missing.
    pub fn full_name(&self) -> String {
        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Fetchable for User {
    fn path(query: &str) -> String {
        format!("v1/Admin/Users/{}", query)
    }
}
