//! Diesel and pool failures mapped onto employee persistence errors.
//!
//! Messages are the driver's own description; callers surface them verbatim.

use tracing::debug;

use crate::domain::ports::EmployeePersistenceError;

use super::pool::PoolError;

pub(super) fn map_pool_error(error: PoolError) -> EmployeePersistenceError {
    let message = match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    };
    EmployeePersistenceError::connection(message)
}

pub(super) fn map_diesel_error(error: diesel::result::Error) -> EmployeePersistenceError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        other => debug!(error = %other, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, ref info) => {
            EmployeePersistenceError::connection(info.message())
        }
        other => EmployeePersistenceError::query(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(PoolError::Checkout { message: "timed out".into() })]
    #[case(PoolError::Build { message: "bad url".into() })]
    fn pool_failures_are_connection_errors(#[case] error: PoolError) {
        assert!(matches!(
            map_pool_error(error),
            EmployeePersistenceError::Connection { .. }
        ));
    }

    #[rstest]
    fn diesel_failures_keep_their_description() {
        let mapped = map_diesel_error(diesel::result::Error::NotFound);
        assert_eq!(mapped, EmployeePersistenceError::query("Record not found"));
    }
}
