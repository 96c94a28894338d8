//! Lenient scalar coercion for query strings and request bodies.

use std::num::IntErrorKind;

use serde::de::{Deserialize, Deserializer, Error};

const TRUE_FORMS: &[&str] = &["1", "yes", "on", "true", "t", "y"];
const FALSE_FORMS: &[&str] = &["0", "no", "off", "false", "f", "n"];

/// Parses a textual boolean such as `yes`, `on` or `1`, ignoring case.
pub fn parse_flag(text: &str) -> Option<bool> {
    let lowered = text.trim().to_ascii_lowercase();
    if TRUE_FORMS.contains(&lowered.as_str()) {
        Some(true)
    } else if FALSE_FORMS.contains(&lowered.as_str()) {
        Some(false)
    } else {
        None
    }
}

/// `deserialize_with` adapter for boolean query parameters.
pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    parse_flag(&text)
        .ok_or_else(|| D::Error::custom(format!("value could not be parsed to a boolean: '{}'", text)))
}

/// Parses an integer, pinning values outside `i64` to `i64::MIN`/`i64::MAX`.
pub fn parse_saturating_int(text: &str) -> Option<i64> {
    match text.trim().parse::<i64>() {
        Ok(value) => Some(value),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}

/// `deserialize_with` adapter for integer query parameters of unbounded size.
pub fn saturating_int<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    parse_saturating_int(&text)
        .ok_or_else(|| D::Error::custom(format!("value is not a valid integer: '{}'", text)))
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

impl NumberOrText {
    fn into_finite<E: Error>(self) -> Result<f64, E> {
        let value = match self {
            NumberOrText::Number(n) => n,
            NumberOrText::Text(text) => text
                .trim()
                .parse::<f64>()
                .map_err(|_| E::custom(format!("value is not a valid float: '{}'", text)))?,
        };
        if value.is_finite() {
            Ok(value)
        } else {
            Err(E::custom("value must be a finite number"))
        }
    }
}

/// `deserialize_with` adapter accepting a JSON number or a numeric string.
pub fn number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    NumberOrText::deserialize(deserializer)?.into_finite()
}

/// Like [`number`], with `null` meaning absent.
pub fn optional_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<NumberOrText>::deserialize(deserializer)?
        .map(NumberOrText::into_finite)
        .transpose()
}
