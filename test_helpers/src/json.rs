//! JSON helpers for serde round-trip tests.

use anyhow::{Context, Result, bail};
use serde::{Serialize, de::DeserializeOwned};

/// Serialises `value` to JSON and decodes it back.
///
/// # Errors
///
/// Returns an error if either direction fails.
pub fn round_trip<T>(value: &T) -> Result<T>
where
    T: Serialize + DeserializeOwned,
{
    let encoded = serde_json::to_string(value).context("serialise value to JSON")?;
    serde_json::from_str(&encoded).with_context(|| format!("deserialise {encoded}"))
}

/// Decodes `json` as `T`, expecting failure, and returns the error message.
///
/// # Errors
///
/// Returns an error if `json` decodes successfully.
pub fn rejection<T>(json: serde_json::Value) -> Result<String>
where
    T: DeserializeOwned,
{
    match serde_json::from_value::<T>(json) {
        Ok(_) => bail!("expected decoding to fail"),
        Err(err) => Ok(err.to_string()),
    }
}
