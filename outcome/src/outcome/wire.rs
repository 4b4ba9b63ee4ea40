//! Serde support.
//!
//! Outcomes serialise as their stored fields in camelCase:
//! `{"isSuccess": bool, "error": E}` and, for [`ValueOutcome`],
//! `{"value": T, "isSuccess": bool, "error": E}`. A failure omits `value`.
//! Deserialisation runs the same invariant checks as the `try_from_parts`
//! constructors and reports a violation as a serde error.
//!
//! A `null` value is read as `T` when `T` accepts it (`()`, `Option<_>`), and
//! as an absent value otherwise.

use std::{fmt, marker::PhantomData};

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, Visitor, value::UnitDeserializer},
};

use crate::{ErrorInfo, violation::ContractViolation};

use super::{Outcome, ValueOutcome};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OutcomeRef<'a, E> {
    is_success: bool,
    error: &'a E,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct OutcomeParts<E> {
    is_success: bool,
    error: E,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ValueOutcomeRef<'a, T, E> {
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<&'a T>,
    is_success: bool,
    error: &'a E,
}

#[derive(Deserialize)]
#[serde(
    rename_all = "camelCase",
    bound(deserialize = "T: Deserialize<'de>, E: Deserialize<'de>")
)]
struct ValueOutcomeParts<T, E> {
    #[serde(default)]
    value: StoredValue<T>,
    is_success: bool,
    error: E,
}

/// The `value` field: `None` when missing, or `null` for a `T` that rejects it.
struct StoredValue<T>(Option<T>);

impl<T> Default for StoredValue<T> {
    fn default() -> Self {
        Self(None)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for StoredValue<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_option(StoredValueVisitor(PhantomData))
    }
}

struct StoredValueVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for StoredValueVisitor<T> {
    type Value = StoredValue<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an outcome value or null")
    }

    fn visit_none<Er: de::Error>(self) -> Result<Self::Value, Er> {
        Ok(StoredValue(T::deserialize(UnitDeserializer::<Er>::new()).ok()))
    }

    fn visit_unit<Er: de::Error>(self) -> Result<Self::Value, Er> {
        self.visit_none()
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        T::deserialize(deserializer).map(|value| StoredValue(Some(value)))
    }
}

fn rejected<Er: de::Error>(violation: ContractViolation) -> Er {
    tracing::warn!(violation = %violation, "rejected deserialised outcome");
    Er::custom(violation)
}

impl<E: Serialize> Serialize for Outcome<E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        OutcomeRef {
            is_success: self.is_success,
            error: &self.error,
        }
        .serialize(serializer)
    }
}

impl<'de, E> Deserialize<'de> for Outcome<E>
where
    E: ErrorInfo + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let parts = OutcomeParts::<E>::deserialize(deserializer)?;
        Self::try_from_parts(parts.is_success, parts.error).map_err(rejected)
    }
}

impl<T: Serialize, E: Serialize> Serialize for ValueOutcome<T, E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ValueOutcomeRef {
            value: self.value.as_ref(),
            is_success: self.status.is_success,
            error: &self.status.error,
        }
        .serialize(serializer)
    }
}

impl<'de, T, E> Deserialize<'de> for ValueOutcome<T, E>
where
    T: Deserialize<'de>,
    E: ErrorInfo + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let parts = ValueOutcomeParts::<T, E>::deserialize(deserializer)?;
        Self::try_from_parts(parts.value.0, parts.is_success, parts.error).map_err(rejected)
    }
}
