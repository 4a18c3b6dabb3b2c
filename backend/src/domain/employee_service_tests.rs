//! Tests for the employee service.

use std::sync::Arc;

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use mockable::Clock;
use rstest::{fixture, rstest};
use rust_decimal::Decimal;
use serde_json::json;

use super::*;
use crate::domain::ErrorCode;
use crate::domain::ports::MockEmployeeRepository;

struct FixtureClock {
    utc_now: DateTime<Utc>,
}

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.utc_now.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.utc_now
    }
}

fn fixture_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 14, 12, 0, 0)
        .single()
        .expect("valid fixture timestamp")
}

fn today() -> NaiveDate {
    fixture_timestamp().with_timezone(&Local).date_naive()
}

fn make_service(repo: MockEmployeeRepository) -> EmployeeService<MockEmployeeRepository> {
    EmployeeService::new(
        Arc::new(repo),
        Arc::new(FixtureClock {
            utc_now: fixture_timestamp(),
        }),
    )
}

#[fixture]
fn candidate() -> Employee {
    Employee {
        id: Some(77),
        name: Some("Margaret Hamilton".into()),
        email: Some("margaret@example.com".into()),
        age: Some(33),
        role: Some("USER".into()),
        salary_hike: Some(Decimal::new(850, 2)),
        date_of_joining: Some(today()),
        is_active: Some(true),
    }
}

fn stored(id: i64) -> EmployeeRecord {
    EmployeeRecord {
        id: Some(id),
        name: Some("Barbara Liskov".into()),
        email: Some("barbara@example.com".into()),
        age: 50,
        role: Some("ADMIN".into()),
        salary_hike: Some(Decimal::new(10, 0)),
        date_of_joining: NaiveDate::from_ymd_opt(2001, 5, 1),
        is_active: Some(true),
    }
}

fn assign_id(id: i64) -> impl FnOnce(EmployeeRecord) -> Result<EmployeeRecord, EmployeePersistenceError>
{
    move |mut record| {
        record.id = Some(id);
        Ok(record)
    }
}

#[tokio::test]
async fn get_maps_stored_record() {
    let mut repo = MockEmployeeRepository::new();
    repo.expect_find_by_id()
        .withf(|id| *id == 3)
        .times(1)
        .return_once(|_| Ok(Some(stored(3))));

    let employee = make_service(repo).get_employee(3).await.expect("found");

    assert_eq!(employee, Employee::from(stored(3)));
}

#[tokio::test]
async fn get_reports_missing_id_as_not_found() {
    let mut repo = MockEmployeeRepository::new();
    repo.expect_find_by_id().times(1).return_once(|_| Ok(None));

    let err = make_service(repo).get_employee(404).await.expect_err("missing");

    assert_eq!(err.code(), ErrorCode::NotFound);
    assert_eq!(err.message(), "Employee with id 404 not found");
}

#[tokio::test]
async fn list_of_empty_store_is_empty() {
    let mut repo = MockEmployeeRepository::new();
    repo.expect_find_all().times(1).return_once(|| Ok(Vec::new()));

    let employees = make_service(repo).list_employees().await.expect("list");

    assert!(employees.is_empty());
}

#[rstest]
#[tokio::test]
async fn create_clears_id_and_returns_persisted_record(candidate: Employee) {
    let mut repo = MockEmployeeRepository::new();
    repo.expect_save()
        .withf(|record| record.id.is_none())
        .times(1)
        .return_once(assign_id(1));

    let created = make_service(repo)
        .create_employee(candidate.clone())
        .await
        .expect("created");

    assert_eq!(created.id, Some(1));
    assert_eq!(
        Employee {
            id: None,
            ..created
        },
        Employee {
            id: None,
            ..candidate
        }
    );
}

#[rstest]
#[tokio::test]
async fn create_reports_every_violation_without_touching_storage(mut candidate: Employee) {
    candidate.age = Some(17);
    candidate.email = Some("broken".into());
    candidate.date_of_joining = today().succ_opt();
    let mut repo = MockEmployeeRepository::new();
    repo.expect_save().never();

    let err = make_service(repo)
        .create_employee(candidate)
        .await
        .expect_err("invalid");

    assert_eq!(err.code(), ErrorCode::ValidationFailed);
    assert_eq!(err.message(), "Input validation failed");
    assert_eq!(
        err.sub_errors(),
        [
            "Put valid email",
            "Age must be between 18 and 80",
            "Please! Enter valid date of joining",
        ]
    );
}

#[rstest]
#[tokio::test]
async fn create_surfaces_storage_failure_verbatim(candidate: Employee) {
    let mut repo = MockEmployeeRepository::new();
    repo.expect_save()
        .times(1)
        .return_once(|_| Err(EmployeePersistenceError::connection("pool timed out")));

    let err = make_service(repo)
        .create_employee(candidate)
        .await
        .expect_err("storage down");

    assert_eq!(err.code(), ErrorCode::InternalError);
    assert_eq!(err.message(), "pool timed out");
}

#[rstest]
#[tokio::test]
async fn replace_uses_path_id_and_skips_validation(mut candidate: Employee) {
    candidate.age = Some(5);
    candidate.is_active = Some(false);
    let mut repo = MockEmployeeRepository::new();
    repo.expect_exists_by_id().never();
    repo.expect_save()
        .withf(|record| record.id == Some(5) && record.age == 5)
        .times(1)
        .return_once(|record| Ok(record));

    let replaced = make_service(repo)
        .replace_employee(5, candidate)
        .await
        .expect("replaced");

    assert_eq!(replaced.id, Some(5));
    assert_eq!(replaced.is_active, Some(false));
}

#[rstest]
#[tokio::test]
async fn replace_rejects_age_beyond_storage_range(mut candidate: Employee) {
    candidate.age = Some(i64::MAX);
    let mut repo = MockEmployeeRepository::new();
    repo.expect_save().never();

    let err = make_service(repo)
        .replace_employee(1, candidate)
        .await
        .expect_err("mapping fault");

    assert_eq!(err.code(), ErrorCode::InternalError);
}

#[tokio::test]
async fn patch_returns_none_for_missing_id() {
    let mut repo = MockEmployeeRepository::new();
    repo.expect_exists_by_id().times(1).return_once(|_| Ok(false));
    repo.expect_find_by_id().never();
    repo.expect_save().never();

    let result = make_service(repo)
        .patch_employee(9, EmployeePatch::new())
        .await
        .expect("no failure");

    assert_eq!(result, None);
}

#[tokio::test]
async fn patch_merges_fields_onto_stored_record() {
    let mut repo = MockEmployeeRepository::new();
    repo.expect_exists_by_id().times(1).return_once(|_| Ok(true));
    repo.expect_find_by_id()
        .times(1)
        .return_once(|id| Ok(Some(stored(id))));
    repo.expect_save()
        .withf(|record| record.name.as_deref() == Some("B. Liskov") && record.age == 51)
        .times(1)
        .return_once(|record| Ok(record));
    let updates = json!({"name": "B. Liskov", "age": 51});
    let updates = updates.as_object().cloned().expect("object");

    let patched = make_service(repo)
        .patch_employee(2, updates)
        .await
        .expect("patched")
        .expect("present");

    assert_eq!(patched.email.as_deref(), Some("barbara@example.com"));
    assert_eq!(patched.age, Some(51));
}

#[rstest]
#[case(json!({"salary": 3}), "field not found: salary")]
#[case(json!({"id": 3}), "field id cannot be modified")]
#[tokio::test]
async fn patch_failure_is_internal_and_not_persisted(
    #[case] updates: serde_json::Value,
    #[case] message: &str,
) {
    let mut repo = MockEmployeeRepository::new();
    repo.expect_exists_by_id().times(1).return_once(|_| Ok(true));
    repo.expect_find_by_id()
        .times(1)
        .return_once(|id| Ok(Some(stored(id))));
    repo.expect_save().never();
    let updates = updates.as_object().cloned().expect("object");

    let err = make_service(repo)
        .patch_employee(2, updates)
        .await
        .expect_err("patch fails");

    assert_eq!(err.code(), ErrorCode::InternalError);
    assert_eq!(err.message(), message);
}

#[tokio::test]
async fn delete_reports_whether_a_row_was_removed() {
    let mut repo = MockEmployeeRepository::new();
    let mut seq = mockall::Sequence::new();
    repo.expect_exists_by_id()
        .times(1)
        .in_sequence(&mut seq)
        .return_once(|_| Ok(true));
    repo.expect_delete_by_id()
        .withf(|id| *id == 8)
        .times(1)
        .in_sequence(&mut seq)
        .return_once(|_| Ok(()));
    repo.expect_exists_by_id()
        .times(1)
        .in_sequence(&mut seq)
        .return_once(|_| Ok(false));
    let service = make_service(repo);

    assert!(service.delete_employee(8).await.expect("first delete"));
    assert!(!service.delete_employee(8).await.expect("second delete"));
}

#[tokio::test]
async fn delete_surfaces_query_failure() {
    let mut repo = MockEmployeeRepository::new();
    repo.expect_exists_by_id()
        .times(1)
        .return_once(|_| Err(EmployeePersistenceError::query("relation \"employees\" does not exist")));

    let err = make_service(repo)
        .delete_employee(1)
        .await
        .expect_err("query failure");

    assert_eq!(err.code(), ErrorCode::InternalError);
    assert_eq!(err.message(), "relation \"employees\" does not exist");
}
