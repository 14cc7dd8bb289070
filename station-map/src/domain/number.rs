//! Lenient deserializers for API numeric and boolean columns.
//!
//! The stations API serialises decimal columns through a big-decimal type,
//! so the same field can arrive as `22.5` or as `"22.50"` depending on the
//! endpoint. Aggregate booleans can also arrive as `null`.

use serde::{Deserialize, Deserializer, de};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

/// Deserialize an optional decimal given either as a JSON number or a numeric string.
///
/// `null` and a missing field both become `None`. An empty string is treated
/// as absent; any other non-numeric string is an error.
pub fn optional_decimal<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrText>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrText::Number(n)) => Ok(Some(n)),
        Some(NumberOrText::Text(s)) => {
            let s = s.trim();
            if s.is_empty() {
                return Ok(None);
            }
            s.parse::<f64>()
                .map(Some)
                .map_err(|_| de::Error::custom(format!("invalid decimal: {s:?}")))
        }
    }
}

/// Deserialize a boolean where `null` means `false`.
pub fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Row {
        #[serde(default, deserialize_with = "optional_decimal")]
        power: Option<f64>,
        #[serde(default, deserialize_with = "null_as_false")]
        available: bool,
    }

    fn row(json: &str) -> Row {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn decimal_from_number() {
        assert_eq!(row(r#"{"power": 22}"#).power, Some(22.0));
        assert_eq!(row(r#"{"power": 7.4}"#).power, Some(7.4));
    }

    #[test]
    fn decimal_from_string() {
        assert_eq!(row(r#"{"power": "150.00"}"#).power, Some(150.0));
        assert_eq!(row(r#"{"power": " 50 "}"#).power, Some(50.0));
    }

    #[test]
    fn decimal_absent() {
        assert_eq!(row(r#"{"power": null}"#).power, None);
        assert_eq!(row(r#"{"power": ""}"#).power, None);
        assert_eq!(row("{}").power, None);
    }

    #[test]
    fn decimal_rejects_garbage() {
        assert!(serde_json::from_str::<Row>(r#"{"power": "fast"}"#).is_err());
    }

    #[test]
    fn null_availability_is_false() {
        assert!(!row(r#"{"available": null}"#).available);
        assert!(!row("{}").available);
        assert!(row(r#"{"available": true}"#).available);
    }
}
