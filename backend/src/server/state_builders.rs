//! Builders for HTTP state backed by the configured repository.

use std::sync::Arc;

use actix_web::web;
use mockable::{Clock, DefaultClock};

use employee_service::domain::EmployeeService;
use employee_service::domain::ports::{EmployeeOperations, EmployeeRepository};
use employee_service::inbound::http::state::HttpState;
use employee_service::outbound::memory::InMemoryEmployeeRepository;
use employee_service::outbound::persistence::DieselEmployeeRepository;

use super::ServerConfig;

fn employee_operations<R>(repository: R, clock: Arc<dyn Clock>) -> Arc<dyn EmployeeOperations>
where
    R: EmployeeRepository + 'static,
{
    Arc::new(EmployeeService::new(Arc::new(repository), clock))
}

/// Build the HTTP state, using PostgreSQL when a pool is configured and the
/// in-memory repository otherwise.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    let employees = match &config.db_pool {
        Some(pool) => employee_operations(DieselEmployeeRepository::new(pool.clone()), clock),
        None => employee_operations(InMemoryEmployeeRepository::default(), clock),
    };
    web::Data::new(HttpState::new(employees))
}
