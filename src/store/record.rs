use serde::{Deserialize, Deserializer, Serialize};

/// A single roller coaster entry.
///
/// `id` is always assigned by the store. Whatever a client sends in that
/// field on create is discarded. Missing fields decode to empty strings / 0
/// and unknown fields are ignored. An explicit `null` is treated the same
/// as a missing field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Coaster {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub in_park: String,
    #[serde(deserialize_with = "null_as_default")]
    pub manufacturer: String,
    #[serde(deserialize_with = "null_as_default")]
    pub height: i64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Coaster {
    /// Canonical resource path for this coaster
    pub fn path(&self) -> String {
        coaster_path(&self.id)
    }
}

pub fn coaster_path(id: &str) -> String {
    format!("/coasters/{}", id)
}
