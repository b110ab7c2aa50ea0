//! Concrete service types wired to the PostgreSQL adapters.

use staff_core::services::{CompanyService, EmployeeService};
use staff_infrastructure::{PgCompanyRepository, PgEmployeeRepository, PgUnitOfWorkFactory};

pub type Companies = CompanyService<PgCompanyRepository, PgEmployeeRepository>;
pub type Employees =
    EmployeeService<PgEmployeeRepository, PgCompanyRepository, PgUnitOfWorkFactory>;
