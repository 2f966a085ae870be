//! # Validation Module
//!
//! Turns untyped JSON line items into [`LineItem`] values.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  Checks for one element, in order                       │
//! │                                                                         │
//! │  1. Is it an object?                     no → NotARecord    (type)     │
//! │  2. Has both 'price' and 'quantity'?     no → MissingField  (domain)   │
//! │  3. Are both numbers?                    no → NotNumeric    (type)     │
//! │  4. Are both ≥ 0?                        no → Negative      (domain)   │
//! │  5. Do both fit in a Decimal?            no → OutOfRange    (domain)   │
//! │                                                                         │
//! │  Type checks for both fields run before any domain check on either.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use fastfood_core::LineItem;
//! use serde_json::json;
//!
//! let item = LineItem::from_value(&json!({"price": 2.25, "quantity": 4})).unwrap();
//! assert_eq!(item.line_total().unwrap().to_string(), "9.00");
//!
//! assert!(LineItem::from_value(&json!({"price": "dix", "quantity": 2})).is_err());
//! ```

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde_json::{Map, Number, Value};

use crate::error::ValidationError;
use crate::types::LineItem;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

const PRICE: &str = "price";
const QUANTITY: &str = "quantity";

/// Largest scale a `Decimal` can carry.
const MAX_SCALE: i64 = 28;

impl LineItem {
    /// Validates one JSON element and converts it into a line item.
    ///
    /// Extra keys on the object are ignored.
    pub fn from_value(value: &Value) -> ValidationResult<LineItem> {
        let record = value.as_object().ok_or(ValidationError::NotARecord {
            found: json_type_name(value),
        })?;

        let price = required_field(record, PRICE)?;
        let quantity = required_field(record, QUANTITY)?;

        let price = expect_number(PRICE, price)?;
        let quantity = expect_number(QUANTITY, quantity)?;

        LineItem::new(to_decimal(PRICE, price)?, to_decimal(QUANTITY, quantity)?)
    }
}

fn required_field<'a>(
    record: &'a Map<String, Value>,
    field: &'static str,
) -> ValidationResult<&'a Value> {
    record
        .get(field)
        .ok_or(ValidationError::MissingField { field })
}

fn expect_number<'a>(field: &'static str, value: &'a Value) -> ValidationResult<&'a Number> {
    match value {
        Value::Number(number) => Ok(number),
        other => Err(ValidationError::NotNumeric {
            field,
            found: json_type_name(other),
        }),
    }
}

fn to_decimal(field: &'static str, number: &Number) -> ValidationResult<Decimal> {
    // Sign is read from the JSON number itself: a tiny negative value would
    // otherwise round to zero and slip through.
    if number.as_f64().is_some_and(|value| value < 0.0) {
        return Err(ValidationError::Negative {
            field,
            value: number.to_string(),
        });
    }

    number_to_decimal(number).ok_or_else(|| ValidationError::OutOfRange {
        field,
        value: number.to_string(),
    })
}

/// Exact conversion of a JSON number.
///
/// Floats go through their shortest round-trip text, so `10.5` becomes
/// exactly `10.5` rather than the nearest binary fraction. Digits beyond
/// 28 decimal places are rounded half to even; only magnitudes above
/// `Decimal::MAX` return `None`.
pub fn number_to_decimal(number: &Number) -> Option<Decimal> {
    if let Some(int) = number.as_i64() {
        return Some(Decimal::from(int));
    }
    if let Some(uint) = number.as_u64() {
        return Some(Decimal::from(uint));
    }

    let text = number.to_string();
    if text.contains(|c: char| c == 'e' || c == 'E') {
        scientific_to_decimal(&text)
    } else {
        Decimal::from_str(&text).ok()
    }
}

fn scientific_to_decimal(text: &str) -> Option<Decimal> {
    if let Ok(value) = Decimal::from_scientific(text) {
        return Some(value);
    }

    let (mantissa, exponent) = text.split_once(|c: char| c == 'e' || c == 'E')?;
    let mantissa = Decimal::from_str(mantissa).ok()?;
    let exponent: i64 = exponent.parse().ok()?;
    if exponent >= 0 {
        return None;
    }

    // mantissa × 10^exponent keeps at most `MAX_SCALE + exponent` places of
    // the mantissa.
    let places = MAX_SCALE + exponent;
    if places < 0 {
        return Some(Decimal::ZERO);
    }
    let mut value = mantissa.round_dp_with_strategy(
        u32::try_from(places).ok()?,
        RoundingStrategy::MidpointNearestEven,
    );
    let scale = i64::from(value.scale()) - exponent;
    value.set_scale(u32::try_from(scale).ok()?).ok()?;
    Some(value)
}

/// Human-readable name of a JSON value's type, for error messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    #[test]
    fn test_from_value_valid() {
        let item = LineItem::from_value(&json!({"price": 10.5, "quantity": 2})).unwrap();
        assert_eq!(item.price(), Decimal::new(105, 1));
        assert_eq!(item.quantity(), Decimal::from(2));
    }

    #[test]
    fn test_from_value_ignores_extra_keys() {
        let item =
            LineItem::from_value(&json!({"price": 1, "quantity": 1, "name": "frites"})).unwrap();
        assert_eq!(item.line_total(), Some(Decimal::ONE));
    }

    #[test]
    fn test_not_a_record() {
        let err = LineItem::from_value(&json!([10.5, 2])).unwrap_err();
        assert!(matches!(err, ValidationError::NotARecord { found: "list" }));
        assert_eq!(err.kind(), ErrorKind::Type);
    }

    #[test]
    fn test_missing_field() {
        let err = LineItem::from_value(&json!({"price": 10.0})).unwrap_err();
        assert!(matches!(err, ValidationError::MissingField { field: "quantity" }));
        assert_eq!(err.kind(), ErrorKind::Domain);

        let err = LineItem::from_value(&json!({"quantity": 1})).unwrap_err();
        assert!(matches!(err, ValidationError::MissingField { field: "price" }));
    }

    #[test]
    fn test_not_numeric() {
        let err = LineItem::from_value(&json!({"price": "dix", "quantity": 2})).unwrap_err();
        assert_eq!(err.to_string(), "price must be a number, got string");
        assert_eq!(err.kind(), ErrorKind::Type);

        let err = LineItem::from_value(&json!({"price": 1, "quantity": true})).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::NotNumeric {
                field: "quantity",
                found: "boolean"
            }
        ));
    }

    #[test]
    fn test_type_check_runs_before_sign_check() {
        // Negative price, non-numeric quantity: the type error wins.
        let err = LineItem::from_value(&json!({"price": -1, "quantity": null})).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);
    }

    #[test]
    fn test_negative_values() {
        let err = LineItem::from_value(&json!({"price": -10.0, "quantity": 2})).unwrap_err();
        assert!(err.to_string().contains("cannot be negative"));
        assert_eq!(err.kind(), ErrorKind::Domain);
    }

    #[test]
    fn test_negative_zero_is_allowed() {
        let item = LineItem::from_value(&json!({"price": -0.0, "quantity": 3})).unwrap();
        assert_eq!(item.line_total(), Some(Decimal::ZERO));
    }

    #[test]
    fn test_number_to_decimal() {
        let cases = [
            (json!(2), Decimal::from(2)),
            (json!(2.25), Decimal::new(225, 2)),
            (json!(0.1), Decimal::new(1, 1)),
            (json!(1e-7), Decimal::new(1, 7)),
            (json!(u64::MAX), Decimal::from(u64::MAX)),
        ];
        for (value, expected) in cases {
            let Value::Number(number) = value else {
                panic!("not a number");
            };
            assert_eq!(number_to_decimal(&number), Some(expected));
        }
    }

    #[test]
    fn test_tiny_numbers_round_into_range() {
        let cases = [
            (json!(1e-30), Decimal::ZERO),
            (json!(5e-324), Decimal::ZERO),
        ];
        for (value, expected) in cases {
            let Value::Number(number) = value else {
                panic!("not a number");
            };
            assert_eq!(number_to_decimal(&number), Some(expected), "{number}");
        }

        // 28 places kept, the rest rounded away.
        let Value::Number(number) = json!(1.2345678901234568e-15) else {
            panic!("not a number");
        };
        let converted = number_to_decimal(&number).unwrap();
        let expected = Decimal::new(12_345_678_901_235, 28);
        assert!((converted - expected).abs() < Decimal::new(1, 27));
    }

    #[test]
    fn test_tiny_values_are_valid_line_items() {
        let item = LineItem::from_value(&json!({"price": 1e-30, "quantity": 1})).unwrap();
        assert_eq!(item.price(), Decimal::ZERO);

        let item =
            LineItem::from_value(&json!({"price": 1.2345678901234568e-15, "quantity": 2})).unwrap();
        assert!(item.price() > Decimal::ZERO);
    }

    #[test]
    fn test_tiny_negative_is_still_negative() {
        let err = LineItem::from_value(&json!({"price": -1e-30, "quantity": 1})).unwrap_err();
        assert!(matches!(err, ValidationError::Negative { field: "price", .. }));
        assert_eq!(err.kind(), ErrorKind::Domain);
    }

    #[test]
    fn test_huge_number_is_out_of_range() {
        let err = LineItem::from_value(&json!({"price": 1e300, "quantity": 1})).unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { field: "price", .. }));
        assert_eq!(err.kind(), ErrorKind::Domain);
    }
}
