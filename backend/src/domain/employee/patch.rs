//! Sparse field overrides for partial updates.
//!
//! Each patchable field has one entry in `FIELD_SETTERS`, keyed by its wire
//! name. Field rules are not re-run here; only the JSON value shape is
//! checked.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::{Map, Number, Value};

use super::EmployeeRecord;

/// Field name to new value, as sent by the client.
pub type EmployeePatch = Map<String, Value>;

/// Reasons a patch cannot be applied.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatchError {
    #[error("field not found: {field}")]
    UnknownField { field: String },
    #[error("field {field} cannot be modified")]
    ImmutableField { field: String },
    #[error("invalid value for field {field}: expected {expected}")]
    InvalidValue {
        field: String,
        expected: &'static str,
    },
}

type FieldSetter = fn(&mut EmployeeRecord, &str, &Value) -> Result<(), PatchError>;

const IMMUTABLE_FIELDS: &[&str] = &["id"];

const FIELD_SETTERS: &[(&str, FieldSetter)] = &[
    ("name", set_name),
    ("email", set_email),
    ("age", set_age),
    ("role", set_role),
    ("salaryHike", set_salary_hike),
    ("dateOfJoining", set_date_of_joining),
    ("dateOfjoining", set_date_of_joining),
    ("isActive", set_is_active),
];

/// Apply every entry of `updates` to `record`.
///
/// The record is left untouched when any entry fails.
///
/// # Examples
/// ```
/// use employee_service::domain::{EmployeeRecord, PatchError, apply_patch};
/// use serde_json::json;
///
/// let mut record = EmployeeRecord::default();
/// let updates = json!({"name": "Barbara", "age": 30});
/// apply_patch(&mut record, updates.as_object().expect("object")).expect("patch applies");
/// assert_eq!(record.name.as_deref(), Some("Barbara"));
///
/// let bad = json!({"nickname": "Babs"});
/// assert!(matches!(
///     apply_patch(&mut record, bad.as_object().expect("object")),
///     Err(PatchError::UnknownField { .. })
/// ));
/// ```
pub fn apply_patch(record: &mut EmployeeRecord, updates: &EmployeePatch) -> Result<(), PatchError> {
    let mut patched = record.clone();
    for (field, value) in updates {
        let setter = setter_for(field)?;
        setter(&mut patched, field, value)?;
    }
    *record = patched;
    Ok(())
}

fn setter_for(field: &str) -> Result<FieldSetter, PatchError> {
    if IMMUTABLE_FIELDS.contains(&field) {
        return Err(PatchError::ImmutableField {
            field: field.to_owned(),
        });
    }
    FIELD_SETTERS
        .iter()
        .find_map(|(name, setter)| (*name == field).then_some(*setter))
        .ok_or_else(|| PatchError::UnknownField {
            field: field.to_owned(),
        })
}

fn invalid(field: &str, expected: &'static str) -> PatchError {
    PatchError::InvalidValue {
        field: field.to_owned(),
        expected,
    }
}

fn nullable<T>(
    field: &str,
    value: &Value,
    expected: &'static str,
    extract: impl FnOnce(&Value) -> Option<T>,
) -> Result<Option<T>, PatchError> {
    if value.is_null() {
        return Ok(None);
    }
    extract(value).map(Some).ok_or_else(|| invalid(field, expected))
}

fn nullable_text(field: &str, value: &Value) -> Result<Option<String>, PatchError> {
    nullable(field, value, "a string", |v| v.as_str().map(str::to_owned))
}

fn set_name(record: &mut EmployeeRecord, field: &str, value: &Value) -> Result<(), PatchError> {
    record.name = nullable_text(field, value)?;
    Ok(())
}

fn set_email(record: &mut EmployeeRecord, field: &str, value: &Value) -> Result<(), PatchError> {
    record.email = nullable_text(field, value)?;
    Ok(())
}

fn set_role(record: &mut EmployeeRecord, field: &str, value: &Value) -> Result<(), PatchError> {
    record.role = nullable_text(field, value)?;
    Ok(())
}

fn set_age(record: &mut EmployeeRecord, field: &str, value: &Value) -> Result<(), PatchError> {
    record.age = value
        .as_i64()
        .and_then(|age| i32::try_from(age).ok())
        .ok_or_else(|| invalid(field, "a 32-bit integer"))?;
    Ok(())
}

fn set_salary_hike(
    record: &mut EmployeeRecord,
    field: &str,
    value: &Value,
) -> Result<(), PatchError> {
    record.salary_hike = nullable(field, value, "a decimal number", |v| {
        v.as_number().and_then(number_to_decimal)
    })?;
    Ok(())
}

fn set_date_of_joining(
    record: &mut EmployeeRecord,
    field: &str,
    value: &Value,
) -> Result<(), PatchError> {
    record.date_of_joining = nullable(field, value, "an ISO-8601 date", |v| {
        v.as_str().and_then(|raw| NaiveDate::from_str(raw).ok())
    })?;
    Ok(())
}

fn set_is_active(
    record: &mut EmployeeRecord,
    field: &str,
    value: &Value,
) -> Result<(), PatchError> {
    record.is_active = nullable(field, value, "a boolean", Value::as_bool)?;
    Ok(())
}

fn number_to_decimal(number: &Number) -> Option<Decimal> {
    if let Some(int) = number.as_i64() {
        return Some(Decimal::from(int));
    }
    if let Some(int) = number.as_u64() {
        return Some(Decimal::from(int));
    }
    let text = number.to_string();
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .ok()
}
