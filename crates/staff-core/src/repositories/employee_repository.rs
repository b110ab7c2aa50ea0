//! Employee repository trait (port)

use async_trait::async_trait;

use crate::domain::{Employee, NewEmployee};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Employee>, DomainError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Employee>, DomainError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, DomainError>;
    async fn create(&self, employee: &NewEmployee) -> Result<Employee, DomainError>;
    async fn update(&self, employee: &Employee) -> Result<Employee, DomainError>;
    /// Returns false when no row with the given id existed.
    async fn delete(&self, id: i32) -> Result<bool, DomainError>;
    async fn count_by_company(&self, company_id: i32) -> Result<i64, DomainError>;
}
