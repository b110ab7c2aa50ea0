// ============================================================================
// Staff Core - Employee Entity
// File: crates/staff-core/src/domain/employee.rs
// ============================================================================
//! Employee entity plus the composed read model returned to callers

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::Company;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Employee {
    pub id: i32,

    #[validate(length(min = 1, max = 120, message = "Name is required"))]
    pub name: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 1, max = 120, message = "Designation is required"))]
    pub designation: String,

    /// Fixed-point, two fractional digits in the store.
    pub salary: Decimal,

    pub company_id: i32,
}

/// Insert shape for a not-yet-persisted employee (id is generated by the store).
#[derive(Debug, Clone, Validate)]
pub struct NewEmployee {
    #[validate(length(min = 1, max = 120, message = "Name is required"))]
    pub name: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 1, max = 120, message = "Designation is required"))]
    pub designation: String,

    pub salary: Decimal,

    pub company_id: i32,
}

impl NewEmployee {
    pub fn new(
        name: String,
        email: String,
        designation: String,
        salary: Decimal,
        company_id: i32,
    ) -> Result<Self, validator::ValidationErrors> {
        let employee = Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            designation: designation.trim().to_string(),
            salary,
            company_id,
        };

        employee.validate()?;
        Ok(employee)
    }
}

/// Employee fields with the owning company nested, as exposed to callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeRecord {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub designation: String,
    pub salary: Decimal,
    pub company: Company,
}

impl EmployeeRecord {
    pub fn compose(employee: Employee, company: Company) -> Self {
        Self {
            id: employee.id,
            name: employee.name,
            email: employee.email,
            designation: employee.designation,
            salary: employee.salary,
            company,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_employee_trims_and_validates() {
        let employee = NewEmployee::new(
            "  Budi Santoso ".to_string(),
            "budi@example.com".to_string(),
            "Engineer".to_string(),
            Decimal::new(750_000, 2),
            1,
        )
        .unwrap();

        assert_eq!(employee.name, "Budi Santoso");
    }

    #[test]
    fn test_new_employee_rejects_bad_email() {
        let employee = NewEmployee::new(
            "Budi".to_string(),
            "not-an-email".to_string(),
            "Engineer".to_string(),
            Decimal::new(750_000, 2),
            1,
        );
        assert!(employee.is_err());
    }
}
