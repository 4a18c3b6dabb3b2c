//! Employee use-cases.
//!
//! [`EmployeeService`] implements the [`EmployeeOperations`] driving port on
//! top of any [`EmployeeRepository`]. Candidates are validated on create only;
//! replace and patch write what they are given.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{debug, info};

use crate::domain::ports::{EmployeeOperations, EmployeePersistenceError, EmployeeRepository};
use crate::domain::{
    Employee, EmployeePatch, EmployeeRecord, Error, MappingError, PatchError, apply_patch,
    validate_employee,
};

/// Employee service implementing the driving port.
#[derive(Clone)]
pub struct EmployeeService<R> {
    repository: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> EmployeeService<R> {
    /// Create a service over `repository`; `clock` supplies "today" for the
    /// joining date rule.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use mockable::DefaultClock;
    /// use employee_service::domain::EmployeeService;
    /// use employee_service::outbound::memory::InMemoryEmployeeRepository;
    ///
    /// let service = EmployeeService::new(
    ///     Arc::new(InMemoryEmployeeRepository::default()),
    ///     Arc::new(DefaultClock),
    /// );
    /// # let _ = service;
    /// ```
    pub fn new(repository: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }
}

impl<R> EmployeeService<R>
where
    R: EmployeeRepository,
{
    fn map_persistence_error(error: EmployeePersistenceError) -> Error {
        debug!(%error, "employee repository call failed");
        Error::internal(error.message())
    }

    fn map_mapping_error(error: MappingError) -> Error {
        Error::internal(error.to_string())
    }

    fn map_patch_error(error: PatchError) -> Error {
        Error::internal(error.to_string())
    }

    async fn persist(&self, record: EmployeeRecord) -> Result<Employee, Error> {
        let saved = self
            .repository
            .save(record)
            .await
            .map_err(Self::map_persistence_error)?;
        Ok(Employee::from(saved))
    }

    async fn exists(&self, id: i64) -> Result<bool, Error> {
        self.repository
            .exists_by_id(id)
            .await
            .map_err(Self::map_persistence_error)
    }
}

#[async_trait]
impl<R> EmployeeOperations for EmployeeService<R>
where
    R: EmployeeRepository,
{
    async fn get_employee(&self, id: i64) -> Result<Employee, Error> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(Self::map_persistence_error)?
            .map(Employee::from)
            .ok_or_else(|| Error::not_found(format!("Employee with id {id} not found")))
    }

    async fn list_employees(&self) -> Result<Vec<Employee>, Error> {
        let records = self
            .repository
            .find_all()
            .await
            .map_err(Self::map_persistence_error)?;
        Ok(records.into_iter().map(Employee::from).collect())
    }

    async fn create_employee(&self, candidate: Employee) -> Result<Employee, Error> {
        let today = self.clock.local().date_naive();
        if let Err(violations) = validate_employee(&candidate, today) {
            debug!(count = violations.len(), "employee candidate rejected");
            return Err(Error::validation(
                violations.iter().map(ToString::to_string),
            ));
        }

        let mut record = EmployeeRecord::try_from(candidate).map_err(Self::map_mapping_error)?;
        record.id = None;
        let created = self.persist(record).await?;
        info!(id = ?created.id, "employee created");
        Ok(created)
    }

    async fn replace_employee(&self, id: i64, candidate: Employee) -> Result<Employee, Error> {
        let mut record = EmployeeRecord::try_from(candidate).map_err(Self::map_mapping_error)?;
        record.id = Some(id);
        let replaced = self.persist(record).await?;
        info!(id, "employee replaced");
        Ok(replaced)
    }

    async fn patch_employee(
        &self,
        id: i64,
        updates: EmployeePatch,
    ) -> Result<Option<Employee>, Error> {
        if !self.exists(id).await? {
            debug!(id, "patch target absent");
            return Ok(None);
        }
        let Some(mut record) = self
            .repository
            .find_by_id(id)
            .await
            .map_err(Self::map_persistence_error)?
        else {
            debug!(id, "patch target removed before load");
            return Ok(None);
        };

        apply_patch(&mut record, &updates).map_err(Self::map_patch_error)?;
        let patched = self.persist(record).await?;
        info!(id, fields = updates.len(), "employee patched");
        Ok(Some(patched))
    }

    async fn delete_employee(&self, id: i64) -> Result<bool, Error> {
        if !self.exists(id).await? {
            debug!(id, "delete target absent");
            return Ok(false);
        }
        self.repository
            .delete_by_id(id)
            .await
            .map_err(Self::map_persistence_error)?;
        info!(id, "employee deleted");
        Ok(true)
    }
}

#[cfg(test)]
#[path = "employee_service_tests.rs"]
mod tests;
