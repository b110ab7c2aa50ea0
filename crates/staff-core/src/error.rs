//! Domain errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Employee not found")]
    EmployeeNotFound,

    #[error("Company not found")]
    CompanyNotFound,

    #[error("Company not found: {0}")]
    CompanyNotFoundByName(String),

    #[error("No company named {company_name} is known at {location}")]
    CompanyLocationNotFound {
        company_name: String,
        location: String,
    },

    #[error("Email already exists: {0}")]
    EmailAlreadyExists(String),

    #[error("Company name already exists: {0}")]
    CompanyNameAlreadyExists(String),

    #[error("Employee has no company")]
    EmployeeWithoutCompany,

    #[error("Company {0} still has employees")]
    CompanyHasEmployees(i32),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
