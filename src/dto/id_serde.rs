//! The API is inconsistent about whether identifiers and timestamps are sent
//! as JSON strings or numbers. These helpers accept both.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

fn value_to_string(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn value_to_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Required string-or-number field.
pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    value_to_string(value).ok_or_else(|| serde::de::Error::custom("expected a string or a number"))
}

/// Optional string-or-number field; `null` and other types become `None`.
pub mod option {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value.and_then(value_to_string))
    }
}

/// Integer sent either as a number or as a numeric string, e.g. Unix milliseconds.
pub mod int {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<i64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        value_to_i64(&value)
            .ok_or_else(|| serde::de::Error::custom(format!("expected an integer, got {value}")))
    }

    pub mod option {
        use super::super::*;

        pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
        where
            D: Deserializer<'de>,
        {
            let value = Option::<Value>::deserialize(deserializer)?;
            Ok(value.as_ref().and_then(value_to_i64))
        }
    }
}

/// Float sent either as a number or as a numeric string, e.g. quoted odds.
pub mod float {
    use super::*;

    fn value_to_f64(value: &Value) -> Option<f64> {
        match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub mod option {
        use super::*;

        /// `null` is `None`; anything that is not a number fails.
        pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
        where
            D: Deserializer<'de>,
        {
            match Option::<Value>::deserialize(deserializer)? {
                None => Ok(None),
                Some(value) => value_to_f64(&value).map(Some).ok_or_else(|| {
                    serde::de::Error::custom(format!("expected a number, got {value}"))
                }),
            }
        }
    }
}
