//! Vessel records as returned by the `/vessels/` endpoint.
//!
//! The upstream schema is assumed, not negotiated. Every field is optional
//! and decoding never rejects a record because one field has an unexpected
//! JSON type: such a field simply decodes to `None`.
//!
//! Measurements stay as JSON numbers so they print exactly as the feed sent
//! them (`0.0` stays `0.0`, `90` stays `90`).

use serde::{Deserialize, Deserializer};
use serde_json::{Number, Value};

/// One AIS target.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Vessel {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,

    /// AIS ship-type code. Only a JSON number counts; `"52"` is not a code.
    #[serde(rename = "type", default, deserialize_with = "lenient_code")]
    pub ship_type: Option<i64>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub mmsi: Option<String>,

    #[serde(default, deserialize_with = "lenient_number")]
    pub latitude: Option<Number>,

    #[serde(default, deserialize_with = "lenient_number")]
    pub longitude: Option<Number>,

    /// Degrees.
    #[serde(default, deserialize_with = "lenient_number")]
    pub course_over_ground: Option<Number>,

    /// Knots.
    #[serde(default, deserialize_with = "lenient_number")]
    pub speed_over_ground: Option<Number>,
}

impl Vessel {
    /// Decode a response body holding a JSON array of vessel objects.
    pub fn parse_list(body: &[u8]) -> serde_json::Result<Vec<Self>> {
        serde_json::from_slice(body)
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// The value of `n` as an integer, accepting floats with no fractional part.
pub(crate) fn integral(n: &Number) -> Option<i64> {
    n.as_i64().or_else(|| {
        n.as_f64()
            .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
            .map(|f| f as i64)
    })
}

fn lenient_code<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => integral(&n),
        _ => None,
    })
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<Number>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => Some(n),
        // JSON number grammar, so "NaN" and "inf" are rejected.
        Some(Value::String(s)) => serde_json::from_str(s.trim()).ok(),
        _ => None,
    })
}
