//! Deserialization of feed fields that must never reject a record.
//!
//! Feeds arrive from other systems, so a classified field may hold a number
//! or `null` and a numeric field may hold a float or a string. These helpers
//! accept any JSON value and leave range checks to the caller.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::debug;

use crate::classify::Classify;

/// Deserializes any value into a member of `T`.
///
/// Strings go through [`Classify::classify`]; every other value resolves to
/// [`Classify::FALLBACK`].
pub(crate) fn classified<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: Classify,
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(raw) => Ok(T::classify(&raw)),
        other => {
            let fallback = T::FALLBACK;
            debug!(value = %other, ?fallback, "non-string classification value");
            Ok(fallback)
        }
    }
}

/// Deserializes any value into an integer, or `None` when it holds no number.
///
/// Floats are rounded half away from zero and numeric strings are parsed the
/// same way. Values beyond the `i64` range saturate.
pub(crate) fn integer<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let parsed = integer_from(&value);
    if parsed.is_none() {
        debug!(value = %value, "non-numeric value for a numeric field");
    }
    Ok(parsed)
}

fn integer_from(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_u64().map(|_| i64::MAX))
            .or_else(|| number.as_f64().and_then(round)),
        Value::String(raw) => {
            let raw = raw.trim();
            raw.parse::<i64>()
                .ok()
                .or_else(|| raw.parse::<f64>().ok().and_then(round))
        }
        _ => None,
    }
}

#[allow(clippy::cast_possible_truncation)]
fn round(value: f64) -> Option<i64> {
    // `as` saturates at the i64 bounds.
    (!value.is_nan()).then(|| value.round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    use crate::request::ReturnType;

    fn int(value: Value) -> Option<i64> {
        integer(value).expect("any value deserializes")
    }

    #[test]
    fn numbers_round_and_saturate() {
        assert_eq!(int(json!(4)), Some(4));
        assert_eq!(int(json!(-7)), Some(-7));
        assert_eq!(int(json!(4.5)), Some(5));
        assert_eq!(int(json!(-0.5)), Some(-1));
        assert_eq!(int(json!(2.4)), Some(2));
        assert_eq!(int(json!(u64::MAX)), Some(i64::MAX));
        assert_eq!(int(json!(1e300)), Some(i64::MAX));
    }

    #[test]
    fn numeric_strings_parse() {
        assert_eq!(int(json!("4")), Some(4));
        assert_eq!(int(json!(" 80 ")), Some(80));
        assert_eq!(int(json!("3.6")), Some(4));
        assert_eq!(int(json!("NaN")), None);
        assert_eq!(int(json!("four")), None);
    }

    #[test]
    fn other_values_hold_no_number() {
        assert_eq!(int(Value::Null), None);
        assert_eq!(int(json!(true)), None);
        assert_eq!(int(json!([1])), None);
        assert_eq!(int(json!({"value": 1})), None);
    }

    #[test]
    fn non_strings_classify_to_fallback() {
        let kind: ReturnType = classified(json!("exchange")).expect("deserialize");
        assert_eq!(kind, ReturnType::Exchange);

        for value in [Value::Null, json!(3), json!(false), json!(["missing"])] {
            let kind: ReturnType = classified(value).expect("deserialize");
            assert_eq!(kind, ReturnType::FALLBACK);
        }
    }
}
