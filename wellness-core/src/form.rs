//! Helpers shared by the weight, food and quote forms.

use crate::error::WellnessError;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

/// The trimmed field value, or `None` when it is absent or blank
pub fn filled(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Parse a calendar date in `YYYY-MM-DD` form
pub fn parse_date(value: &str) -> Result<NaiveDate, WellnessError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        WellnessError::validation(format!("Invalid date \"{value}\", expected YYYY-MM-DD"))
    })
}

/// Deserialize a text field that clients may also send as a JSON number
pub fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Field {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(Option::<Field>::deserialize(deserializer)?.map(|field| match field {
        Field::Text(text) => text,
        Field::Number(number) => number.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled_treats_blank_as_missing() {
        assert_eq!(filled(&Some("  lunch ".to_string())), Some("lunch"));
        assert_eq!(filled(&Some("   ".to_string())), None);
        assert_eq!(filled(&None), None);
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-01-15").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
        );
        assert!(parse_date("15/01/2024").unwrap_err().is_validation());
    }

    #[test]
    fn test_string_or_number() {
        #[derive(Deserialize)]
        struct Form {
            #[serde(default, deserialize_with = "string_or_number")]
            weight: Option<String>,
        }

        let text: Form = serde_json::from_str(r#"{"weight": "80.5"}"#).unwrap();
        assert_eq!(text.weight.as_deref(), Some("80.5"));
        let number: Form = serde_json::from_str(r#"{"weight": 80.5}"#).unwrap();
        assert_eq!(number.weight.as_deref(), Some("80.5"));
        let missing: Form = serde_json::from_str("{}").unwrap();
        assert!(missing.weight.is_none());
    }
}
