//! # Staff Infrastructure
//!
//! PostgreSQL adapters for the staff registry ports.

pub mod database;

pub use database::{
    create_pool, PgCompanyRepository, PgEmployeeRepository, PgUnitOfWorkFactory,
};
