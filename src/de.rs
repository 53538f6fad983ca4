use serde::{Deserialize, Deserializer};

/// Deserialize `null` as the default value of the field type.
///
/// `#[serde(default)]` only covers missing keys; the API sends explicit `null`s for unset values.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
