// ============================================================================
// Staff Core - Unit of Work Port
// File: crates/staff-core/src/repositories/unit_of_work.rs
// ============================================================================
//! Transactional boundary spanning employee and company mutations.
//!
//! One unit of work backs one reconcile call: every read and write issued
//! through it belongs to the same storage transaction. Nothing staged is
//! visible to other readers until [`UnitOfWork::commit`] succeeds, and a unit
//! of work dropped without commit discards its staged writes.

use async_trait::async_trait;

use crate::domain::{Company, Employee};
use crate::error::DomainError;

#[async_trait]
pub trait UnitOfWork: Send {
    async fn employee_by_id(&mut self, id: i32) -> Result<Option<Employee>, DomainError>;
    async fn employee_by_email(&mut self, email: &str) -> Result<Option<Employee>, DomainError>;
    async fn company_by_id(&mut self, id: i32) -> Result<Option<Company>, DomainError>;
    async fn company_by_name(&mut self, name: &str) -> Result<Option<Company>, DomainError>;
    async fn company_by_name_and_location(
        &mut self,
        company_name: &str,
        location: &str,
    ) -> Result<Option<Company>, DomainError>;

    async fn store_employee(&mut self, employee: &Employee) -> Result<(), DomainError>;
    async fn store_company_location(
        &mut self,
        company_id: i32,
        location: &str,
    ) -> Result<(), DomainError>;

    async fn commit(&mut self) -> Result<(), DomainError>;
    async fn rollback(&mut self) -> Result<(), DomainError>;
}

#[async_trait]
pub trait UnitOfWorkFactory: Send + Sync {
    async fn begin(&self) -> Result<Box<dyn UnitOfWork>, DomainError>;
}
