use serde::{Deserialize, Deserializer, Serialize};

/// A reference to another Blikk object, as embedded in most resources.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BlikkObject {
    pub object_name: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    pub name: Option<String>,
}

/// A reference that also carries a number (projects, project collections).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NumberedObject {
    #[serde(flatten)]
    pub object: BlikkObject,
    pub number: Option<String>,
}

/// Decodes `null` as the type's default instead of failing.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
