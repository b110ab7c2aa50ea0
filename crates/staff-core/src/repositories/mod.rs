pub mod company_repository;
pub mod employee_repository;
pub mod unit_of_work;

pub use company_repository::CompanyRepository;
pub use employee_repository::EmployeeRepository;
pub use unit_of_work::{UnitOfWork, UnitOfWorkFactory};
