// ============================================================================
// Staff Core - Company Service
// File: crates/staff-core/src/services/company_service.rs
// ============================================================================
//! Company CRUD flows

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::Company;
use crate::error::DomainError;
use crate::repositories::{CompanyRepository, EmployeeRepository};

pub struct CompanyService<C: CompanyRepository, E: EmployeeRepository> {
    companies: Arc<C>,
    employees: Arc<E>,
}

impl<C: CompanyRepository, E: EmployeeRepository> CompanyService<C, E> {
    pub fn new(companies: Arc<C>, employees: Arc<E>) -> Self {
        Self {
            companies,
            employees,
        }
    }

    pub async fn list(&self) -> Result<Vec<Company>, DomainError> {
        self.companies.find_all().await
    }

    pub async fn get(&self, id: i32) -> Result<Company, DomainError> {
        self.companies
            .find_by_id(id)
            .await?
            .ok_or(DomainError::CompanyNotFound)
    }

    pub async fn create(
        &self,
        company_name: &str,
        location: &str,
    ) -> Result<Company, DomainError> {
        let company_name = company_name.trim();
        let location = location.trim();

        if company_name.is_empty() {
            return Err(DomainError::ValidationError(
                "Company name is required".to_string(),
            ));
        }

        // Fast-path check; the unique index on company_name is the
        // authoritative guard under concurrent creates.
        if self.companies.find_by_name(company_name).await?.is_some() {
            warn!("Create company failed: name already exists: {}", company_name);
            return Err(DomainError::CompanyNameAlreadyExists(
                company_name.to_string(),
            ));
        }

        let company = self.companies.create(company_name, location).await?;
        info!("Company created: {} ({})", company.company_name, company.id);
        Ok(company)
    }

    /// Deletion is restricted while employees still reference the company.
    pub async fn delete(&self, id: i32) -> Result<(), DomainError> {
        if self.companies.find_by_id(id).await?.is_none() {
            return Err(DomainError::CompanyNotFound);
        }

        let employee_count = self.employees.count_by_company(id).await?;
        if employee_count > 0 {
            warn!(
                "Delete company {} rejected: {} employees still attached",
                id, employee_count
            );
            return Err(DomainError::CompanyHasEmployees(id));
        }

        if !self.companies.delete(id).await? {
            return Err(DomainError::CompanyNotFound);
        }

        info!("Company deleted: {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::company_repository::MockCompanyRepository;
    use crate::repositories::employee_repository::MockEmployeeRepository;

    fn acme() -> Company {
        Company {
            id: 1,
            company_name: "Acme".to_string(),
            location: "NY".to_string(),
        }
    }

    #[tokio::test]
    async fn test_get_missing_company() {
        let mut companies = MockCompanyRepository::new();
        companies.expect_find_by_id().returning(|_| Ok(None));

        let service = CompanyService::new(
            Arc::new(companies),
            Arc::new(MockEmployeeRepository::new()),
        );

        assert!(matches!(
            service.get(42).await,
            Err(DomainError::CompanyNotFound)
        ));
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_name() {
        let mut companies = MockCompanyRepository::new();
        companies
            .expect_find_by_name()
            .returning(|_| Ok(Some(acme())));
        companies.expect_create().never();

        let service = CompanyService::new(
            Arc::new(companies),
            Arc::new(MockEmployeeRepository::new()),
        );

        assert!(matches!(
            service.create("Acme", "LA").await,
            Err(DomainError::CompanyNameAlreadyExists(name)) if name == "Acme"
        ));
    }

    #[tokio::test]
    async fn test_create_trims_name() {
        let mut companies = MockCompanyRepository::new();
        companies.expect_find_by_name().returning(|_| Ok(None));
        companies
            .expect_create()
            .withf(|name, location| name == "Acme" && location == "NY")
            .returning(|name, location| {
                Ok(Company {
                    id: 1,
                    company_name: name.to_string(),
                    location: location.to_string(),
                })
            });

        let service = CompanyService::new(
            Arc::new(companies),
            Arc::new(MockEmployeeRepository::new()),
        );

        let company = service.create("  Acme ", " NY ").await.unwrap();
        assert_eq!(company.company_name, "Acme");
    }

    #[tokio::test]
    async fn test_delete_restricted_with_employees() {
        let mut companies = MockCompanyRepository::new();
        companies
            .expect_find_by_id()
            .returning(|_| Ok(Some(acme())));
        companies.expect_delete().never();

        let mut employees = MockEmployeeRepository::new();
        employees.expect_count_by_company().returning(|_| Ok(3));

        let service = CompanyService::new(Arc::new(companies), Arc::new(employees));

        assert!(matches!(
            service.delete(1).await,
            Err(DomainError::CompanyHasEmployees(1))
        ));
    }

    #[tokio::test]
    async fn test_delete_without_employees() {
        let mut companies = MockCompanyRepository::new();
        companies
            .expect_find_by_id()
            .returning(|_| Ok(Some(acme())));
        companies.expect_delete().returning(|_| Ok(true));

        let mut employees = MockEmployeeRepository::new();
        employees.expect_count_by_company().returning(|_| Ok(0));

        let service = CompanyService::new(Arc::new(companies), Arc::new(employees));

        assert!(service.delete(1).await.is_ok());
    }
}
