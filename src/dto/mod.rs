//! Request payloads and the field-level validation applied to them.
//!
//! Every payload field is an `Option<Option<T>>` so a single type serves
//! create, full update, and partial update: `None` is an absent key and
//! `Some(None)` an explicit `null`. [`validate_payload`] rejects `null` on
//! required fields always, and absent required fields unless the update is
//! partial.

use std::{borrow::Cow, collections::BTreeMap, str::FromStr};

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, de};
use serde_json::Value;
use utoipa::ToSchema;
use validator::{Validate, ValidateEmail, ValidationError, ValidationErrors};

use crate::models::{PRICE_SCALE, TransactionType};

pub mod categories;
pub mod products;
pub mod stock_transactions;
pub mod suppliers;

pub const MAX_POSITIVE_INTEGER: i64 = i32::MAX as i64;
pub const PRICE_MAX_DIGITS: u32 = 10;

pub const REQUIRED: &str = "This field is required.";
pub const NOT_NULL: &str = "This field may not be null.";
pub const INVALID_INTEGER: &str = "A valid integer is required.";
pub const INVALID_NUMBER: &str = "A valid number is required.";

/// Per-field validation messages, rendered as `{"field": ["message", ...]}`.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::default();
        errors.add(field, message);
        errors
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut out = Self::default();
        for (field, errs) in errors.field_errors() {
            for err in errs.iter() {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| err.code.to_string());
                out.add(field.to_string(), message);
            }
        }
        out
    }
}

/// How a field appeared in the request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Absent,
    Null,
    Given,
}

impl Presence {
    pub fn of<T>(value: &Option<Option<T>>) -> Self {
        match value {
            None => Presence::Absent,
            Some(None) => Presence::Null,
            Some(Some(_)) => Presence::Given,
        }
    }
}

pub trait Payload: Validate {
    /// Every required, non-nullable field and how it appeared in this payload.
    fn required_fields(&self) -> Vec<(&'static str, Presence)>;
}

/// Runs the declared field checks. With `partial` set, absent fields are not reported.
pub fn validate_payload<P: Payload>(payload: &P, partial: bool) -> FieldErrors {
    let mut errors = match payload.validate() {
        Ok(()) => FieldErrors::default(),
        Err(errs) => errs.into(),
    };
    for (field, presence) in payload.required_fields() {
        match presence {
            Presence::Null => errors.add(field, NOT_NULL),
            Presence::Absent if !partial => errors.add(field, REQUIRED),
            _ => {}
        }
    }
    errors
}

/// Distinguishes an explicit `null` (`Some(None)`) from an absent field (`None`).
/// Pair with `#[serde(default)]`.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// [`nullable`] text with surrounding whitespace stripped, so validators see
/// the value that gets stored.
pub(crate) fn trimmed<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)
        .map(|value| Some(value.map(|text| text.trim().to_owned())))
}

/// [`nullable`] integer that also accepts a numeric string such as `"25"`.
pub(crate) fn integer<'de, D>(deserializer: D) -> Result<Option<Option<i64>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<Value>::deserialize(deserializer)? else {
        return Ok(Some(None));
    };
    let value = match &raw {
        Value::Number(number) => number.as_i64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    };
    value
        .map(|value| Some(Some(value)))
        .ok_or_else(|| de::Error::custom(INVALID_INTEGER))
}

/// [`nullable`] primary key reference; a numeric string is accepted as the id.
pub(crate) fn primary_key<'de, D>(deserializer: D) -> Result<Option<Option<i32>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<Value>::deserialize(deserializer)? else {
        return Ok(Some(None));
    };
    let id = match &raw {
        Value::Number(number) => number.as_i64(),
        Value::String(text) => text.trim().parse::<i64>().ok(),
        _ => None,
    };
    match id {
        Some(id) => i32::try_from(id)
            .map(|id| Some(Some(id)))
            .map_err(|_| de::Error::custom(format!("Invalid pk \"{id}\" - object does not exist."))),
        None => Err(de::Error::custom(format!(
            "Incorrect type. Expected pk value, received {}.",
            json_type_name(&raw)
        ))),
    }
}

/// [`nullable`] decimal given either as a JSON number or a numeric string.
pub(crate) fn decimal<'de, D>(deserializer: D) -> Result<Option<Option<Decimal>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<Value>::deserialize(deserializer)? else {
        return Ok(Some(None));
    };
    let text = match raw {
        Value::Number(number) => number.to_string(),
        Value::String(text) => text.trim().to_owned(),
        _ => return Err(de::Error::custom(INVALID_NUMBER)),
    };
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .map(|value| Some(Some(value)))
        .map_err(|_| de::Error::custom(INVALID_NUMBER))
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "NoneType",
        Value::Bool(_) => "bool",
        Value::Number(number) if number.is_f64() => "float",
        Value::Number(_) => "int",
        Value::String(_) => "str",
        Value::Array(_) => "list",
        Value::Object(_) => "dict",
    }
}

fn invalid(code: &'static str, message: impl Into<Cow<'static, str>>) -> ValidationError {
    ValidationError::new(code).with_message(message.into())
}

pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(invalid("blank", "This field may not be blank."));
    }
    Ok(())
}

/// Email syntax plus a dotted domain; `a@b` is rejected.
pub(crate) fn email_address(value: &str) -> Result<(), ValidationError> {
    let dotted = value
        .rsplit_once('@')
        .is_some_and(|(_, domain)| domain.contains('.') && !domain.ends_with('.'));
    if !value.validate_email() || !dotted {
        return Err(invalid("email", "Enter a valid email address."));
    }
    Ok(())
}

pub(crate) fn validate_quantity(value: i64) -> Result<(), ValidationError> {
    if value < 0 {
        return Err(invalid(
            "min_value",
            "Ensure this value is greater than or equal to 0.",
        ));
    }
    if value > MAX_POSITIVE_INTEGER {
        return Err(invalid(
            "max_value",
            format!("Ensure this value is less than or equal to {MAX_POSITIVE_INTEGER}."),
        ));
    }
    Ok(())
}

pub(crate) fn validate_price(value: &Decimal) -> Result<(), ValidationError> {
    let normalized = value.normalize();
    let decimals = normalized.scale();
    let digits = normalized.mantissa().unsigned_abs().to_string().len() as u32;
    let whole = digits.saturating_sub(decimals);
    let max_whole = PRICE_MAX_DIGITS - PRICE_SCALE;

    if whole + decimals > PRICE_MAX_DIGITS {
        return Err(invalid(
            "max_digits",
            format!("Ensure that there are no more than {PRICE_MAX_DIGITS} digits in total."),
        ));
    }
    if decimals > PRICE_SCALE {
        return Err(invalid(
            "max_decimal_places",
            format!("Ensure that there are no more than {PRICE_SCALE} decimal places."),
        ));
    }
    if whole > max_whole {
        return Err(invalid(
            "max_whole_digits",
            format!("Ensure that there are no more than {max_whole} digits before the decimal point."),
        ));
    }
    Ok(())
}

pub(crate) fn validate_transaction_type(value: &str) -> Result<(), ValidationError> {
    if TransactionType::from_code(value).is_none() {
        return Err(invalid(
            "invalid_choice",
            format!("\"{value}\" is not a valid choice."),
        ));
    }
    Ok(())
}

/// Narrows an already range-checked quantity to the column type.
pub(crate) fn positive_int(value: i64) -> i32 {
    i32::try_from(value.clamp(0, MAX_POSITIVE_INTEGER)).unwrap_or(i32::MAX)
}
