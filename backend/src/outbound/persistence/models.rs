//! Internal Diesel row structs for database operations.
//!
//! These never leave the persistence layer; the repository converts them to
//! and from [`crate::domain::EmployeeRecord`].

use chrono::NaiveDate;
use diesel::prelude::*;
use rust_decimal::Decimal;

use super::schema::employees;

/// Row read from the employees table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = employees)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct EmployeeRow {
    pub id: i64,
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: i32,
    pub role: Option<String>,
    pub salary_hike: Option<Decimal>,
    pub date_of_joining: Option<NaiveDate>,
    pub is_active: Option<bool>,
}

/// Values written on insert or upsert.
///
/// A `None` id lets the sequence assign one.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = employees)]
pub(crate) struct NewEmployeeRow<'a> {
    pub id: Option<i64>,
    pub name: Option<&'a str>,
    pub email: Option<&'a str>,
    pub age: i32,
    pub role: Option<&'a str>,
    pub salary_hike: Option<Decimal>,
    pub date_of_joining: Option<NaiveDate>,
    pub is_active: Option<bool>,
}
