//! Lenient field deserializers.
//!
//! Payloads are partial projections of backend state: any field may be
//! missing, `null`, or carry a number where a string was expected. None of
//! that may fail the whole payload, so every field goes through one of the
//! helpers below and falls back to its default.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::BTreeMap;

/// Treats an explicit JSON `null` the same as a missing field.
pub fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// List where `null` or unreadable elements are dropped instead of failing
/// the list.
pub fn lenient_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter(|item| !item.is_null())
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}

pub fn lenient_u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_to_u64(&Value::deserialize(deserializer)?))
}

pub fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_to_f64(&Value::deserialize(deserializer)?))
}

pub fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_to_string(&Value::deserialize(deserializer)?))
}

pub fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => matches!(s.to_lowercase().as_str(), "true" | "1" | "yes"),
        _ => false,
    })
}

/// Histogram keyed by name, e.g. device type to device count.
pub fn lenient_counts<'de, D>(deserializer: D) -> Result<BTreeMap<String, u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Object(map) => map
            .iter()
            .map(|(name, count)| (name.clone(), value_to_u64(count)))
            .collect(),
        _ => BTreeMap::new(),
    })
}

fn value_to_f64(value: &Value) -> f64 {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite()).unwrap_or(0.0)
}

fn value_to_u64(value: &Value) -> u64 {
    match value {
        Value::Number(n) => n
            .as_u64()
            .unwrap_or_else(|| value_to_f64(value).max(0.0).round() as u64),
        _ => value_to_f64(value).max(0.0).round() as u64,
    }
}

fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

/// Declares a string-backed enum whose unrecognised values become `Unknown`.
macro_rules! string_enum {
    ($(#[$meta:meta])* $name:ident { $($(#[$vmeta:meta])* $variant:ident => $wire:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize)]
        #[serde(into = "String")]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
            #[default]
            Unknown,
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                    Self::Unknown => "unknown",
                }
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                match raw.trim().to_ascii_lowercase().as_str() {
                    $($wire => Self::$variant,)+
                    _ => Self::Unknown,
                }
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                Self::from(raw.as_str())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.as_str().to_string()
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                Ok(Self::from($crate::api::types::de::lenient_string(deserializer)?))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

pub(crate) use string_enum;

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Sample {
        #[serde(deserialize_with = "lenient_u64")]
        count: u64,
        #[serde(deserialize_with = "lenient_f64")]
        ratio: f64,
        #[serde(deserialize_with = "lenient_string")]
        id: String,
        #[serde(deserialize_with = "lenient_vec")]
        tags: Vec<String>,
        #[serde(deserialize_with = "null_default")]
        nested: BTreeMap<String, String>,
        #[serde(deserialize_with = "lenient_counts")]
        histogram: BTreeMap<String, u64>,
    }

    #[test]
    fn nulls_and_missing_fields_fall_back_to_defaults() {
        let sample: Sample =
            serde_json::from_str(r#"{"count": null, "ratio": null, "tags": null}"#).unwrap();
        assert_eq!(sample.count, 0);
        assert_eq!(sample.ratio, 0.0);
        assert!(sample.id.is_empty());
        assert!(sample.tags.is_empty());
        assert!(sample.histogram.is_empty());
    }

    #[test]
    fn mistyped_values_are_coerced() {
        let sample: Sample = serde_json::from_str(
            r#"{"count": 12.0, "ratio": "0.5", "id": 42, "histogram": {"sensor": 3, "gateway": "2"}}"#,
        )
        .unwrap();
        assert_eq!(sample.count, 12);
        assert_eq!(sample.ratio, 0.5);
        assert_eq!(sample.id, "42");
        assert_eq!(sample.histogram.get("sensor"), Some(&3));
        assert_eq!(sample.histogram.get("gateway"), Some(&2));
    }

    #[test]
    fn null_and_unreadable_list_elements_are_dropped() {
        let sample: Sample =
            serde_json::from_str(r#"{"tags": [null, "a", {"x": 1}, "b"], "nested": null}"#)
                .unwrap();
        assert_eq!(sample.tags, vec!["a".to_string(), "b".to_string()]);
        assert!(sample.nested.is_empty());

        let sample: Sample = serde_json::from_str(r#"{"tags": "oops"}"#).unwrap();
        assert!(sample.tags.is_empty());
    }

    #[test]
    fn negative_counts_clamp_to_zero() {
        let sample: Sample = serde_json::from_str(r#"{"count": -4}"#).unwrap();
        assert_eq!(sample.count, 0);
    }
}
