// ============================================================================
// Staff Infrastructure - PostgreSQL Employee Repository
// File: crates/staff-infrastructure/src/database/postgres/employee_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{error, info};

use staff_core::domain::{Employee, NewEmployee};
use staff_core::error::DomainError;
use staff_core::repositories::EmployeeRepository;

use super::EmployeeRow;

pub struct PgEmployeeRepository {
    pool: PgPool,
}

impl PgEmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeRepository for PgEmployeeRepository {
    async fn find_all(&self) -> Result<Vec<Employee>, DomainError> {
        let rows: Vec<EmployeeRow> = sqlx::query_as(
            r#"
            SELECT id, name, email, designation, salary, company_id
            FROM employees
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error listing employees: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Employee>, DomainError> {
        let row: Option<EmployeeRow> = sqlx::query_as(
            r#"
            SELECT id, name, email, designation, salary, company_id
            FROM employees
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error finding employee by id: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(|r| r.into()))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, DomainError> {
        let row: Option<EmployeeRow> = sqlx::query_as(
            r#"
            SELECT id, name, email, designation, salary, company_id
            FROM employees
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error finding employee by email: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(|r| r.into()))
    }

    async fn create(&self, employee: &NewEmployee) -> Result<Employee, DomainError> {
        info!("Creating employee with email: {}", employee.email);

        let row: EmployeeRow = sqlx::query_as(
            r#"
            INSERT INTO employees (name, email, designation, salary, company_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, email, designation, salary, company_id
            "#,
        )
        .bind(&employee.name)
        .bind(&employee.email)
        .bind(&employee.designation)
        .bind(employee.salary)
        .bind(employee.company_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error creating employee: {}", e);
            let msg = e.to_string();
            if msg.contains("unique") || msg.contains("duplicate") {
                DomainError::EmailAlreadyExists(employee.email.clone())
            } else {
                DomainError::DatabaseError(msg)
            }
        })?;

        info!("Employee created successfully: {}", row.id);
        Ok(row.into())
    }

    async fn update(&self, employee: &Employee) -> Result<Employee, DomainError> {
        let row: EmployeeRow = sqlx::query_as(
            r#"
            UPDATE employees
            SET
                name = $2,
                email = $3,
                designation = $4,
                salary = $5,
                company_id = $6
            WHERE id = $1
            RETURNING id, name, email, designation, salary, company_id
            "#,
        )
        .bind(employee.id)
        .bind(&employee.name)
        .bind(&employee.email)
        .bind(&employee.designation)
        .bind(employee.salary)
        .bind(employee.company_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error updating employee: {}", e);
            let msg = e.to_string();
            if msg.contains("unique") || msg.contains("duplicate") {
                DomainError::EmailAlreadyExists(employee.email.clone())
            } else {
                DomainError::DatabaseError(msg)
            }
        })?;

        Ok(row.into())
    }

    async fn delete(&self, id: i32) -> Result<bool, DomainError> {
        let result = sqlx::query(
            r#"
            DELETE FROM employees
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error deleting employee: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(result.rows_affected() > 0)
    }

    async fn count_by_company(&self, company_id: i32) -> Result<i64, DomainError> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM employees
            WHERE company_id = $1
            "#,
        )
        .bind(company_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error counting employees for company: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(count)
    }
}
