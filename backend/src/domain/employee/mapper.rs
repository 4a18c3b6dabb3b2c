//! Conversions between [`Employee`] and [`EmployeeRecord`].

use super::{Employee, EmployeeRecord};

/// Raised when a transfer value cannot be represented in storage.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MappingError {
    #[error("age {value} does not fit the storage column")]
    AgeOutOfRange { value: i64 },
}

impl From<EmployeeRecord> for Employee {
    fn from(record: EmployeeRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            email: record.email,
            age: Some(i64::from(record.age)),
            role: record.role,
            salary_hike: record.salary_hike,
            date_of_joining: record.date_of_joining,
            is_active: record.is_active,
        }
    }
}

impl TryFrom<Employee> for EmployeeRecord {
    type Error = MappingError;

    /// A missing age maps to the column default of zero.
    fn try_from(employee: Employee) -> Result<Self, Self::Error> {
        let age = match employee.age {
            Some(value) => {
                i32::try_from(value).map_err(|_| MappingError::AgeOutOfRange { value })?
            }
            None => 0,
        };
        Ok(Self {
            id: employee.id,
            name: employee.name,
            email: employee.email,
            age,
            role: employee.role,
            salary_hike: employee.salary_hike,
            date_of_joining: employee.date_of_joining,
            is_active: employee.is_active,
        })
    }
}
