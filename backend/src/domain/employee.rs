//! Employee data model.
//!
//! Two shapes exist: [`Employee`] is exchanged with callers and keeps every
//! attribute optional so incomplete input reaches validation intact, while
//! [`EmployeeRecord`] mirrors the persisted row.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

mod mapper;
mod patch;
mod validation;

pub use mapper::MappingError;
pub use patch::{EmployeePatch, PatchError, apply_patch};
pub use validation::{MAX_AGE, MIN_AGE, Violation, validate_employee};

/// Employee as seen on the wire.
///
/// Unknown JSON keys are ignored. The legacy key `dateOfjoining` is accepted
/// as an alias of `dateOfJoining`.
///
/// # Examples
/// ```
/// use employee_service::domain::Employee;
///
/// let employee: Employee = serde_json::from_str(
///     r#"{"name":"Ada","age":36,"salaryHike":12.5,"dateOfjoining":"2024-02-01"}"#,
/// )
/// .expect("valid employee JSON");
/// assert_eq!(employee.age, Some(36));
/// assert!(employee.date_of_joining.is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub email: Option<String>,
    /// Kept wide so out-of-range ages fail validation rather than parsing.
    pub age: Option<i64>,
    pub role: Option<String>,
    /// Out-of-range numbers are saturated by [`decimal_from_float`] so the
    /// bound rules report them.
    #[serde(
        default,
        serialize_with = "rust_decimal::serde::float_option::serialize",
        deserialize_with = "deserialize_salary_hike"
    )]
    pub salary_hike: Option<Decimal>,
    #[serde(alias = "dateOfjoining")]
    pub date_of_joining: Option<NaiveDate>,
    pub is_active: Option<bool>,
}

fn deserialize_salary_hike<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.map(decimal_from_float))
}

/// Convert a wire number to a [`Decimal`] without failing.
///
/// Values too large for `Decimal` saturate to `Decimal::MAX` (or its
/// negation); values too small to represent become one unit in the 28th
/// fractional place. Both still break the salary hike digit bound.
///
/// # Examples
/// ```
/// use rust_decimal::Decimal;
/// use employee_service::domain::decimal_from_float;
///
/// assert_eq!(decimal_from_float(12.5), Decimal::new(125, 1));
/// assert_eq!(decimal_from_float(1e30), Decimal::MAX);
/// assert_eq!(decimal_from_float(-1e30), Decimal::MIN);
/// ```
pub fn decimal_from_float(value: f64) -> Decimal {
    // Display for f64 is the shortest round-trip form and never uses exponents.
    if let Ok(decimal) = value.to_string().parse::<Decimal>() {
        return decimal;
    }
    let magnitude = if value.abs() >= 1.0 {
        Decimal::MAX
    } else {
        Decimal::new(1, 28)
    };
    if value.is_sign_negative() {
        -magnitude
    } else {
        magnitude
    }
}

/// Employee as persisted in the `employees` table.
///
/// `id` stays `None` until storage assigns one. `age` is not nullable in the
/// table and defaults to zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeRecord {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: i32,
    pub role: Option<String>,
    pub salary_hike: Option<Decimal>,
    pub date_of_joining: Option<NaiveDate>,
    pub is_active: Option<bool>,
}

/// Roles an employee may hold. Parsing is case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmployeeRole {
    Admin,
    User,
}

impl EmployeeRole {
    /// Every role, in declaration order.
    pub const ALL: [Self; 2] = [Self::Admin, Self::User];

    /// Wire name of the role.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::User => "USER",
        }
    }
}

impl fmt::Display for EmployeeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no [`EmployeeRole`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown employee role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for EmployeeRole {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| UnknownRole(s.to_owned()))
    }
}
