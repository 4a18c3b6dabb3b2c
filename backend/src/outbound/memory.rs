//! Process-local `EmployeeRepository` used when no database is configured.
//!
//! Records live in an ordered map, so `find_all` yields ascending ids like the
//! PostgreSQL adapter. Data is lost on restart.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::EmployeeRecord;
use crate::domain::ports::{EmployeePersistenceError, EmployeeRepository};

#[derive(Debug, Default)]
struct Store {
    rows: BTreeMap<i64, EmployeeRecord>,
    last_id: i64,
}

impl Store {
    fn next_id(&mut self) -> Result<i64, EmployeePersistenceError> {
        self.last_id = self
            .last_id
            .checked_add(1)
            .ok_or_else(|| EmployeePersistenceError::query("employee id sequence exhausted"))?;
        Ok(self.last_id)
    }
}

/// In-memory implementation of the `EmployeeRepository` port.
///
/// Generated ids continue after the largest id written so far, including
/// ids supplied through upsert.
///
/// # Examples
/// ```
/// use employee_service::domain::EmployeeRecord;
/// use employee_service::domain::ports::EmployeeRepository;
/// use employee_service::outbound::memory::InMemoryEmployeeRepository;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let repo = InMemoryEmployeeRepository::default();
/// let saved = repo.save(EmployeeRecord::default()).await.expect("saved");
/// assert_eq!(saved.id, Some(1));
/// # });
/// ```
#[derive(Debug, Default)]
pub struct InMemoryEmployeeRepository {
    store: Mutex<Store>,
}

impl InMemoryEmployeeRepository {
    fn lock(&self) -> Result<MutexGuard<'_, Store>, EmployeePersistenceError> {
        self.store
            .lock()
            .map_err(|_| EmployeePersistenceError::connection("employee store lock poisoned"))
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<EmployeeRecord>, EmployeePersistenceError> {
        Ok(self.lock()?.rows.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<EmployeeRecord>, EmployeePersistenceError> {
        Ok(self.lock()?.rows.values().cloned().collect())
    }

    async fn save(
        &self,
        mut record: EmployeeRecord,
    ) -> Result<EmployeeRecord, EmployeePersistenceError> {
        let mut store = self.lock()?;
        let id = match record.id {
            Some(id) => {
                store.last_id = store.last_id.max(id);
                id
            }
            None => store.next_id()?,
        };
        record.id = Some(id);
        store.rows.insert(id, record.clone());
        Ok(record)
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, EmployeePersistenceError> {
        Ok(self.lock()?.rows.contains_key(&id))
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), EmployeePersistenceError> {
        self.lock()?.rows.remove(&id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn repo() -> InMemoryEmployeeRepository {
        InMemoryEmployeeRepository::default()
    }

    fn named(name: &str) -> EmployeeRecord {
        EmployeeRecord {
            name: Some(name.to_owned()),
            ..EmployeeRecord::default()
        }
    }

    #[rstest]
    #[tokio::test]
    async fn inserts_assign_increasing_ids(repo: InMemoryEmployeeRepository) {
        let first = repo.save(named("a")).await.expect("first");
        let second = repo.save(named("b")).await.expect("second");

        assert_eq!((first.id, second.id), (Some(1), Some(2)));
    }

    #[rstest]
    #[tokio::test]
    async fn upsert_with_explicit_id_creates_then_overwrites(repo: InMemoryEmployeeRepository) {
        let mut record = named("first");
        record.id = Some(5);
        repo.save(record.clone()).await.expect("create");
        record.name = Some("second".into());
        repo.save(record).await.expect("overwrite");

        let stored = repo.find_by_id(5).await.expect("lookup");

        assert_eq!(stored.and_then(|r| r.name).as_deref(), Some("second"));
        assert_eq!(repo.find_all().await.expect("all").len(), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn generated_ids_skip_past_upserted_ids(repo: InMemoryEmployeeRepository) {
        let mut record = named("explicit");
        record.id = Some(10);
        repo.save(record).await.expect("upsert");

        let next = repo.save(named("generated")).await.expect("insert");

        assert_eq!(next.id, Some(11));
    }

    #[rstest]
    #[tokio::test]
    async fn find_all_orders_by_id(repo: InMemoryEmployeeRepository) {
        for id in [3, 1, 2] {
            let mut record = named("x");
            record.id = Some(id);
            repo.save(record).await.expect("save");
        }

        let ids: Vec<_> = repo
            .find_all()
            .await
            .expect("all")
            .into_iter()
            .filter_map(|r| r.id)
            .collect();

        assert_eq!(ids, [1, 2, 3]);
    }

    #[rstest]
    #[tokio::test]
    async fn delete_removes_and_tolerates_absent_rows(repo: InMemoryEmployeeRepository) {
        let saved = repo.save(named("gone")).await.expect("save");
        let id = saved.id.expect("assigned id");

        repo.delete_by_id(id).await.expect("delete");
        repo.delete_by_id(id).await.expect("delete again");

        assert!(!repo.exists_by_id(id).await.expect("exists"));
    }
}
