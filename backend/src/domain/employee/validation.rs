//! Field rules applied to candidate employees on create.
//!
//! Every rule runs; the caller receives each violation in field order.

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;
use rust_decimal::Decimal;

use super::{Employee, EmployeeRole};

/// Youngest accepted age, inclusive.
pub const MIN_AGE: i64 = 18;
/// Oldest accepted age, inclusive.
pub const MAX_AGE: i64 = 80;

const SALARY_HIKE_INTEGER_DIGITS: u32 = 3;
const SALARY_HIKE_FRACTION_DIGITS: u32 = 2;

/// A single failed rule. The display text is the client-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    #[error("Name can't be null")]
    MissingName,
    #[error("Email can't be blank")]
    BlankEmail,
    #[error("Put valid email")]
    MalformedEmail,
    #[error("Age must be between 18 and 80")]
    AgeOutOfRange,
    #[error("Role of employee can be ADMIN or USER")]
    UnknownRole,
    #[error("numeric value out of bounds (<3 digits>.<2 digits> expected)")]
    SalaryHikeDigits,
    #[error("Salary hike must be greater than or equal to 0.01")]
    SalaryHikeTooSmall,
    #[error("Salary hike must be less than or equal to 100.00")]
    SalaryHikeTooLarge,
    #[error("Salary hike must be Positive")]
    SalaryHikeNotPositive,
    #[error("Please! Enter valid date of joining")]
    JoiningDateInFuture,
    #[error("Active must be true")]
    Inactive,
}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // Local part of dot-atom characters, then one or more DNS labels.
        Regex::new(concat!(
            r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+",
            r"@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?",
            r"(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*$",
        ))
        .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Check `candidate` against every rule.
///
/// `today` is the calendar date the joining date is compared against.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use employee_service::domain::{Employee, Violation, validate_employee};
///
/// let today = NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid date");
/// let violations = validate_employee(&Employee::default(), today).unwrap_err();
/// assert_eq!(
///     violations,
///     vec![
///         Violation::MissingName,
///         Violation::BlankEmail,
///         Violation::AgeOutOfRange,
///         Violation::UnknownRole,
///         Violation::Inactive,
///     ]
/// );
/// ```
pub fn validate_employee(candidate: &Employee, today: NaiveDate) -> Result<(), Vec<Violation>> {
    let mut violations = Vec::new();

    if candidate.name.is_none() {
        violations.push(Violation::MissingName);
    }
    check_email(candidate.email.as_deref(), &mut violations);
    if !candidate
        .age
        .is_some_and(|age| (MIN_AGE..=MAX_AGE).contains(&age))
    {
        violations.push(Violation::AgeOutOfRange);
    }
    if !candidate
        .role
        .as_deref()
        .is_some_and(|role| role.parse::<EmployeeRole>().is_ok())
    {
        violations.push(Violation::UnknownRole);
    }
    if let Some(hike) = candidate.salary_hike {
        check_salary_hike(hike, &mut violations);
    }
    if candidate.date_of_joining.is_some_and(|date| date > today) {
        violations.push(Violation::JoiningDateInFuture);
    }
    if candidate.is_active != Some(true) {
        violations.push(Violation::Inactive);
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

fn check_email(email: Option<&str>, violations: &mut Vec<Violation>) {
    match email {
        Some(email) if !email.trim().is_empty() => {
            if !email_regex().is_match(email) {
                violations.push(Violation::MalformedEmail);
            }
        }
        _ => violations.push(Violation::BlankEmail),
    }
}

fn check_salary_hike(hike: Decimal, violations: &mut Vec<Violation>) {
    let (integer_digits, fraction_digits) = digit_counts(hike);
    if integer_digits > SALARY_HIKE_INTEGER_DIGITS || fraction_digits > SALARY_HIKE_FRACTION_DIGITS
    {
        violations.push(Violation::SalaryHikeDigits);
    }
    if hike < Decimal::new(1, 2) {
        violations.push(Violation::SalaryHikeTooSmall);
    }
    if hike > Decimal::new(100_00, 2) {
        violations.push(Violation::SalaryHikeTooLarge);
    }
    if hike <= Decimal::ZERO {
        violations.push(Violation::SalaryHikeNotPositive);
    }
}

/// Integer and fraction digit counts once trailing zeros are stripped.
fn digit_counts(value: Decimal) -> (u32, u32) {
    let normalized = value.normalize();
    let scale = normalized.scale();
    let precision = normalized
        .mantissa()
        .unsigned_abs()
        .checked_ilog10()
        .map_or(1, |log| log + 1);
    (precision.saturating_sub(scale), scale)
}
