use super::common::{null_as_default, BlikkObject, NumberedObject};
use crate::api::{ListOptions, Listable};
use crate::types::DateOnly;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectStatus {
    #[serde(flatten)]
    pub object: BlikkObject,
    #[serde(deserialize_with = "null_as_default")]
    pub is_completed_status: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectCategory {
    #[serde(flatten)]
    pub object: BlikkObject,
    pub color: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CostCenter {
    #[serde(flatten)]
    pub object: BlikkObject,
    pub code: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Location {
    pub object_name: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub longitude: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub latitude: f64,
    pub street_address: Option<String>,
    pub postal_code: Option<String>,
    pub city: Option<String>,
    pub country_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Tag {
    pub object_name: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    pub title: Option<String>,
    pub color: Option<String>,
}

/// A project from `v1/Core/Projects`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    pub object_name: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    pub order_number: Option<String>,
    pub title: Option<String>,
    pub status: Option<ProjectStatus>,
    pub category: Option<ProjectCategory>,
    pub sales_responsible: Option<BlikkObject>,
    pub start_date: DateOnly,
    pub end_date: DateOnly,
    pub invoice_type: Option<String>,
    pub location: Option<Location>,
    pub project_manager: Option<BlikkObject>,
    pub customer: Option<BlikkObject>,
    pub project_collection: Option<NumberedObject>,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<Tag>,
    pub cost_center: Option<CostCenter>,
    pub created_by: Option<BlikkObject>,
    pub updated_by: Option<BlikkObject>,
    pub created: Option<String>,
    pub updated: Option<String>,
}

impl Project {
    pub fn is_completed(&self) -> bool {
        self.status
            .as_ref()
            .is_some_and(|status| status.is_completed_status)
    }
}

impl Listable for Project {
    const PATH: &'static str = "v1/Core/Projects";

    fn valid_filter(options: &ListOptions) -> bool {
        !options.has_filters()
    }
}
