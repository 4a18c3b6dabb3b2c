//! PostgreSQL-backed `EmployeeRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::sql_query;
use diesel::sql_types::BigInt;
use diesel::upsert::excluded;
use diesel_async::{AsyncPgConnection, RunQueryDsl};

use crate::domain::EmployeeRecord;
use crate::domain::ports::{EmployeePersistenceError, EmployeeRepository};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{EmployeeRow, NewEmployeeRow};
use super::pool::DbPool;
use super::schema::employees;

/// Diesel-backed implementation of the `EmployeeRepository` port.
#[derive(Clone)]
pub struct DieselEmployeeRepository {
    pool: DbPool,
}

impl DieselEmployeeRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn row_to_record(row: EmployeeRow) -> EmployeeRecord {
    EmployeeRecord {
        id: Some(row.id),
        name: row.name,
        email: row.email,
        age: row.age,
        role: row.role,
        salary_hike: row.salary_hike,
        date_of_joining: row.date_of_joining,
        is_active: row.is_active,
    }
}

fn record_to_row(record: &EmployeeRecord) -> NewEmployeeRow<'_> {
    NewEmployeeRow {
        id: record.id,
        name: record.name.as_deref(),
        email: record.email.as_deref(),
        age: record.age,
        role: record.role.as_deref(),
        salary_hike: record.salary_hike,
        date_of_joining: record.date_of_joining,
        is_active: record.is_active,
    }
}

/// Keeps generated ids clear of explicitly written ones.
const ADVANCE_ID_SEQUENCE_SQL: &str = "SELECT setval(pg_get_serial_sequence('employees', 'id'), \
     GREATEST($1, (SELECT last_value FROM employees_id_seq)))";

/// Insert or overwrite the row keyed by `id`, then move the id sequence past
/// it so later generated ids cannot collide.
async fn upsert_with_id(
    conn: &mut AsyncPgConnection,
    id: i64,
    row: &NewEmployeeRow<'_>,
) -> QueryResult<EmployeeRow> {
    use diesel_async::AsyncConnection as _;
    use diesel_async::scoped_futures::ScopedFutureExt as _;

    conn.transaction(|conn| {
        async move {
            let saved = diesel::insert_into(employees::table)
                .values(row)
                .on_conflict(employees::id)
                .do_update()
                .set((
                    employees::name.eq(excluded(employees::name)),
                    employees::email.eq(excluded(employees::email)),
                    employees::age.eq(excluded(employees::age)),
                    employees::role.eq(excluded(employees::role)),
                    employees::salary_hike.eq(excluded(employees::salary_hike)),
                    employees::date_of_joining.eq(excluded(employees::date_of_joining)),
                    employees::is_active.eq(excluded(employees::is_active)),
                ))
                .returning(EmployeeRow::as_returning())
                .get_result(conn)
                .await?;

            sql_query(ADVANCE_ID_SEQUENCE_SQL)
                .bind::<BigInt, _>(id)
                .execute(conn)
                .await?;

            Ok(saved)
        }
        .scope_boxed()
    })
    .await
}

#[async_trait]
impl EmployeeRepository for DieselEmployeeRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<EmployeeRecord>, EmployeePersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<EmployeeRow> = employees::table
            .find(id)
            .select(EmployeeRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(row_to_record))
    }

    async fn find_all(&self) -> Result<Vec<EmployeeRecord>, EmployeePersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<EmployeeRow> = employees::table
            .order(employees::id.asc())
            .select(EmployeeRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(row_to_record).collect())
    }

    async fn save(
        &self,
        record: EmployeeRecord,
    ) -> Result<EmployeeRecord, EmployeePersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = record_to_row(&record);

        let saved: EmployeeRow = match record.id {
            Some(id) => upsert_with_id(&mut conn, id, &row).await,
            None => {
                diesel::insert_into(employees::table)
                    .values(&row)
                    .returning(EmployeeRow::as_returning())
                    .get_result(&mut conn)
                    .await
            }
        }
        .map_err(map_diesel_error)?;

        Ok(row_to_record(saved))
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, EmployeePersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::select(diesel::dsl::exists(employees::table.find(id)))
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), EmployeePersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::delete(employees::table.find(id))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    #[test]
    fn row_conversion_keeps_every_column() {
        let record = EmployeeRecord {
            id: Some(12),
            name: Some("Frances Allen".into()),
            email: Some("frances@example.com".into()),
            age: 61,
            role: Some("ADMIN".into()),
            salary_hike: Some(Decimal::new(999, 2)),
            date_of_joining: NaiveDate::from_ymd_opt(1957, 7, 15),
            is_active: Some(true),
        };

        let row = record_to_row(&record);
        let back = row_to_record(EmployeeRow {
            id: 12,
            name: row.name.map(str::to_owned),
            email: row.email.map(str::to_owned),
            age: row.age,
            role: row.role.map(str::to_owned),
            salary_hike: row.salary_hike,
            date_of_joining: row.date_of_joining,
            is_active: row.is_active,
        });

        assert_eq!(back, record);
    }
}
