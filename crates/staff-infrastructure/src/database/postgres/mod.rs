//! PostgreSQL repository implementations

pub mod company_repo_impl;
pub mod employee_repo_impl;
pub mod unit_of_work_impl;

pub use company_repo_impl::PgCompanyRepository;
pub use employee_repo_impl::PgEmployeeRepository;
pub use unit_of_work_impl::PgUnitOfWorkFactory;

use rust_decimal::Decimal;
use sqlx::FromRow;

use staff_core::domain::{Company, Employee};

// Internal row types for SQLx mapping, shared between the repositories and
// the unit of work.

#[derive(Debug, FromRow)]
pub(crate) struct CompanyRow {
    pub id: i32,
    pub company_name: String,
    pub location: String,
}

impl From<CompanyRow> for Company {
    fn from(row: CompanyRow) -> Self {
        Company {
            id: row.id,
            company_name: row.company_name,
            location: row.location,
        }
    }
}

#[derive(Debug, FromRow)]
pub(crate) struct EmployeeRow {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub designation: String,
    pub salary: Decimal,
    pub company_id: i32,
}

impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        Employee {
            id: row.id,
            name: row.name,
            email: row.email,
            designation: row.designation,
            salary: row.salary,
            company_id: row.company_id,
        }
    }
}
