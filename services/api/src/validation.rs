//! Field-level parsing for request payloads
//!
//! Request bodies are deserialized into loosely typed payloads first; these
//! helpers turn individual JSON values into typed fields. Each helper answers
//! `None` for a value of the wrong shape and leaves the error message to the
//! caller, which knows the field name clients sent.

use chrono::NaiveDate;
use regex::Regex;
use rust_decimal::Decimal;
use serde_json::Value;
use std::{str::FromStr, sync::OnceLock};

use crate::error::ApiError;

/// Largest magnitude a NUMERIC(14, 2) column accepts
fn max_amount() -> Decimal {
    Decimal::new(999_999_999_999_99, 2)
}

/// Parse a path segment as a positive row id
pub fn parse_id(raw: &str, resource: &str) -> Result<i64, ApiError> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| ApiError::BadRequest(format!("Invalid {} id", resource)))
}

/// Build the 400 error for a field that is present but unusable
pub fn invalid(field: &str) -> ApiError {
    ApiError::BadRequest(format!("Invalid {}", field))
}

/// Trimmed, non-empty string value
pub fn text(value: Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        _ => None,
    }
}

/// Free-form note: strings are kept verbatim, scalars are stringified
pub fn note(value: Option<Value>) -> Result<Option<String>, ApiError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(_) => Err(invalid("note")),
    }
}

/// Positive integer id given as a JSON number or a numeric string
pub fn reference_id(value: &Value) -> Option<i64> {
    let id = match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }?;
    (id > 0).then_some(id)
}

/// Optional reference id; `null` and absence both mean "no reference"
pub fn optional_reference_id(value: Option<Value>, field: &str) -> Result<Option<i64>, ApiError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(value) => reference_id(&value).map(Some).ok_or_else(|| invalid(field)),
    }
}

/// Signed monetary amount given as a JSON number or a numeric string
///
/// At most two decimal places; more precision than a NUMERIC(14, 2) column
/// keeps is rejected rather than rounded.
pub fn amount(value: &Value) -> Option<Decimal> {
    let parsed = match value {
        Value::Number(n) => parse_decimal(&n.to_string()),
        Value::String(s) => parse_decimal(s.trim()),
        _ => None,
    }?
    .normalize();
    (parsed.scale() <= 2 && parsed.abs() <= max_amount()).then_some(parsed)
}

/// Monetary amount that must not be negative
pub fn non_negative_amount(value: &Value) -> Option<Decimal> {
    amount(value).filter(|amount| !amount.is_sign_negative() || amount.is_zero())
}

fn parse_decimal(raw: &str) -> Option<Decimal> {
    if raw.is_empty() {
        return None;
    }
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .ok()
}

/// Calendar date in exactly `YYYY-MM-DD` form
pub fn date(raw: &str) -> Option<NaiveDate> {
    static DATE_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = DATE_REGEX
        .get_or_init(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("Failed to compile date regex"));

    let raw = raw.trim();
    if !regex.is_match(raw) {
        return None;
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Optional calendar date; absence, `null` and the empty string mean "none"
pub fn optional_date(value: Option<Value>, message: &str) -> Result<Option<NaiveDate>, ApiError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(Value::String(s)) => date(&s)
            .map(Some)
            .ok_or_else(|| ApiError::BadRequest(message.to_string())),
        Some(_) => Err(ApiError::BadRequest(message.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_id_accepts_positive_integers_only() {
        assert_eq!(parse_id("42", "account").unwrap(), 42);
        for raw in ["abc", "0", "-1", "1.5", "", "9999999999999999999999"] {
            let error = parse_id(raw, "account").unwrap_err();
            assert_eq!(error.to_string(), "Invalid account id");
        }
    }

    #[test]
    fn date_accepts_exactly_iso_calendar_dates() {
        assert_eq!(
            date("2024-03-01"),
            Some(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
        );
        assert_eq!(
            date(" 2024-12-31 "),
            Some(NaiveDate::from_ymd_opt(2024, 12, 31).unwrap())
        );

        for raw in [
            "2024/1/1",
            "01-01-2024",
            "2024-1-1",
            "2024-01-01T00:00:00Z",
            "24-01-01",
            "2024-02-30",
            "2024-13-01",
            "",
        ] {
            assert_eq!(date(raw), None, "{raw:?} should be rejected");
        }
    }

    #[test]
    fn optional_date_treats_blank_as_absent() {
        assert_eq!(optional_date(None, "bad").unwrap(), None);
        assert_eq!(optional_date(Some(json!(null)), "bad").unwrap(), None);
        assert_eq!(optional_date(Some(json!("  ")), "bad").unwrap(), None);
        let parsed = optional_date(Some(json!("2025-01-01")), "bad").unwrap();
        assert!(parsed.is_some());

        let error = optional_date(Some(json!("2025/01/01")), "endDate must be YYYY-MM-DD")
            .unwrap_err();
        assert_eq!(error.to_string(), "endDate must be YYYY-MM-DD");
        assert!(optional_date(Some(json!(20250101)), "bad").is_err());
    }

    #[test]
    fn amount_accepts_numbers_and_numeric_strings() {
        assert_eq!(amount(&json!(100)), Some(Decimal::from(100)));
        assert_eq!(amount(&json!(-20)), Some(Decimal::from(-20)));
        assert_eq!(amount(&json!(12.5)), Some(Decimal::new(125, 1)));
        assert_eq!(amount(&json!(" 7.25 ")), Some(Decimal::new(725, 2)));
    }

    #[test]
    fn amount_rejects_non_numeric_and_out_of_range_values() {
        for value in [
            json!("abc"),
            json!(""),
            json!(true),
            json!([1]),
            json!({"value": 1}),
            json!(1e300),
            json!("1000000000000000"),
        ] {
            assert_eq!(amount(&value), None, "{value} should be rejected");
        }
    }

    #[test]
    fn amount_rejects_sub_cent_precision() {
        assert_eq!(amount(&json!(0.004)), None);
        assert_eq!(amount(&json!("12.345")), None);
        assert_eq!(non_negative_amount(&json!("12.345")), None);
        assert_eq!(amount(&json!("12.340")), Some(Decimal::new(1234, 2)));
        assert_eq!(amount(&json!(0.01)), Some(Decimal::new(1, 2)));
    }

    #[test]
    fn non_negative_amount_allows_zero() {
        assert_eq!(non_negative_amount(&json!(0)), Some(Decimal::ZERO));
        assert_eq!(non_negative_amount(&json!(-0.01)), None);
        assert_eq!(non_negative_amount(&json!("-5")), None);
    }

    #[test]
    fn reference_ids_must_be_positive_integers() {
        assert_eq!(reference_id(&json!(3)), Some(3));
        assert_eq!(reference_id(&json!("3")), Some(3));
        assert_eq!(reference_id(&json!(0)), None);
        assert_eq!(reference_id(&json!(-1)), None);
        assert_eq!(reference_id(&json!(1.5)), None);
        assert_eq!(reference_id(&json!("x")), None);
    }

    #[test]
    fn optional_reference_id_names_the_field() {
        assert_eq!(optional_reference_id(None, "categoryId").unwrap(), None);
        assert_eq!(
            optional_reference_id(Some(json!(null)), "categoryId").unwrap(),
            None
        );
        assert_eq!(
            optional_reference_id(Some(json!(9)), "categoryId").unwrap(),
            Some(9)
        );
        let error = optional_reference_id(Some(json!("nine")), "categoryId").unwrap_err();
        assert_eq!(error.to_string(), "Invalid categoryId");
    }

    #[test]
    fn text_trims_and_rejects_blank_or_non_strings() {
        assert_eq!(
            text(Some(json!("  Checking "))),
            Some("Checking".to_string())
        );
        assert_eq!(text(Some(json!("   "))), None);
        assert_eq!(text(Some(json!(5))), None);
        assert_eq!(text(None), None);
    }

    #[test]
    fn note_stringifies_scalars() {
        assert_eq!(note(Some(json!("rent"))).unwrap(), Some("rent".to_string()));
        assert_eq!(note(Some(json!(12))).unwrap(), Some("12".to_string()));
        assert_eq!(note(Some(json!(null))).unwrap(), None);
        assert!(note(Some(json!({"a": 1}))).is_err());
    }
}
