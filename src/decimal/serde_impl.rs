// ============================================================================
// Dec128 serde support
// ============================================================================

use super::Dec128;
use serde::{de, ser, Deserialize, Deserializer, Serialize};
use std::fmt;

/// Serializes as a decimal string, `"NaN"` for sentinels
impl Serialize for Dec128 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(&self.format_trimmed())
    }
}

/// Deserializes from a decimal string, an integer or float number, or null
impl<'de> Deserialize<'de> for Dec128 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(Dec128Visitor)
    }
}

struct Dec128Visitor;

impl<'de> de::Visitor<'de> for Dec128Visitor {
    type Value = Dec128;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("string-encoded decimal, number or null")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        v.parse::<Dec128>()
            .map_err(|e| E::custom(format!("Error parsing decimal '{v}': {e}")))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Dec128::from(v))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Dec128::from(v))
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Dec128::from_f64(v)
            .into_result()
            .map_err(|e| E::custom(format!("Error converting {v} to decimal: {e}")))
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Dec128::ZERO)
    }

    fn visit_none<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Dec128::ZERO)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }
}
