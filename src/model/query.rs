//! Serde helpers for list query parameters.
//!
//! Lists are passed as one comma-separated value, e.g. `?categories=1,2,3`.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Deserializer};

/// Deserializes an optional comma-separated list. Empty items are skipped.
///
/// Use together with `#[serde(default)]` so an absent parameter is `None`.
pub fn comma_separated<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    Option::<String>::deserialize(deserializer)?
        .map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(|item| item.parse().map_err(serde::de::Error::custom))
                .collect()
        })
        .transpose()
}
