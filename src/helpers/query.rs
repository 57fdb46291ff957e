use serde::{Deserialize, Deserializer, de};
use std::fmt;
use std::str::FromStr;

/// Deserializes an optional query value, treating an empty string as absent.
///
/// A cleared dropdown sends `?year=`; that means "no filter", not a parse error.
pub fn empty_string_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let value = Option::<String>::deserialize(deserializer)?;
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => T::from_str(s).map(Some).map_err(de::Error::custom),
    }
}
