//! Outbound adapters implementing the employee storage port.
//!
//! - **persistence**: PostgreSQL via Diesel, used when a database URL is
//!   configured.
//! - **memory**: process-local map, used otherwise and by tests.
//!
//! Adapters only translate between domain records and their own
//! representation. They contain no business rules.

pub mod memory;
pub mod persistence;
