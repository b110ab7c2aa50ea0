//! Company repository trait (port)

use async_trait::async_trait;

use crate::domain::Company;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Company>, DomainError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Company>, DomainError>;
    async fn find_by_name(&self, name: &str) -> Result<Option<Company>, DomainError>;
    async fn create(&self, company_name: &str, location: &str) -> Result<Company, DomainError>;
    /// Returns false when no row with the given id existed.
    async fn delete(&self, id: i32) -> Result<bool, DomainError>;
}
