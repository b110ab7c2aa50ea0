// ============================================================================
// Staff Infrastructure - PostgreSQL Unit of Work
// File: crates/staff-infrastructure/src/database/postgres/unit_of_work_impl.rs
// ============================================================================
//! One `PgUnitOfWork` wraps one sqlx transaction. Reads and writes issued
//! through it share that transaction; dropping it without commit rolls back.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};
use tracing::error;

use staff_core::domain::{Company, Employee};
use staff_core::error::DomainError;
use staff_core::repositories::{UnitOfWork, UnitOfWorkFactory};

use super::{CompanyRow, EmployeeRow};

pub struct PgUnitOfWorkFactory {
    pool: PgPool,
}

impl PgUnitOfWorkFactory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UnitOfWorkFactory for PgUnitOfWorkFactory {
    async fn begin(&self) -> Result<Box<dyn UnitOfWork>, DomainError> {
        let tx = self.pool.begin().await.map_err(|e| {
            error!("Database error starting transaction: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(Box::new(PgUnitOfWork { tx: Some(tx) }))
    }
}

pub struct PgUnitOfWork {
    tx: Option<Transaction<'static, Postgres>>,
}

impl PgUnitOfWork {
    fn tx(&mut self) -> Result<&mut Transaction<'static, Postgres>, DomainError> {
        self.tx
            .as_mut()
            .ok_or_else(|| DomainError::DatabaseError("unit of work already completed".to_string()))
    }
}

#[async_trait]
impl UnitOfWork for PgUnitOfWork {
    async fn employee_by_id(&mut self, id: i32) -> Result<Option<Employee>, DomainError> {
        let tx = self.tx()?;
        let row: Option<EmployeeRow> = sqlx::query_as(
            r#"
            SELECT id, name, email, designation, salary, company_id
            FROM employees
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut **tx)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error finding employee by id: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(|r| r.into()))
    }

    async fn employee_by_email(&mut self, email: &str) -> Result<Option<Employee>, DomainError> {
        let tx = self.tx()?;
        let row: Option<EmployeeRow> = sqlx::query_as(
            r#"
            SELECT id, name, email, designation, salary, company_id
            FROM employees
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&mut **tx)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error finding employee by email: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(|r| r.into()))
    }

    async fn company_by_id(&mut self, id: i32) -> Result<Option<Company>, DomainError> {
        let tx = self.tx()?;
        let row: Option<CompanyRow> = sqlx::query_as(
            r#"
            SELECT id, company_name, location
            FROM companies
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut **tx)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error finding company by id: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(|r| r.into()))
    }

    async fn company_by_name(&mut self, name: &str) -> Result<Option<Company>, DomainError> {
        let tx = self.tx()?;
        let row: Option<CompanyRow> = sqlx::query_as(
            r#"
            SELECT id, company_name, location
            FROM companies
            WHERE company_name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(&mut **tx)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error finding company by name: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(|r| r.into()))
    }

    async fn company_by_name_and_location(
        &mut self,
        company_name: &str,
        location: &str,
    ) -> Result<Option<Company>, DomainError> {
        let tx = self.tx()?;
        let row: Option<CompanyRow> = sqlx::query_as(
            r#"
            SELECT id, company_name, location
            FROM companies
            WHERE company_name = $1 AND location = $2
            "#,
        )
        .bind(company_name)
        .bind(location)
        .fetch_optional(&mut **tx)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error finding company by name and location: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(|r| r.into()))
    }

    async fn store_employee(&mut self, employee: &Employee) -> Result<(), DomainError> {
        let tx = self.tx()?;
        sqlx::query(
            r#"
            UPDATE employees
            SET
                name = $2,
                email = $3,
                designation = $4,
                salary = $5,
                company_id = $6
            WHERE id = $1
            "#,
        )
        .bind(employee.id)
        .bind(&employee.name)
        .bind(&employee.email)
        .bind(&employee.designation)
        .bind(employee.salary)
        .bind(employee.company_id)
        .execute(&mut **tx)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error storing employee: {}", e);
            let msg = e.to_string();
            if msg.contains("unique") || msg.contains("duplicate") {
                DomainError::EmailAlreadyExists(employee.email.clone())
            } else {
                DomainError::DatabaseError(msg)
            }
        })?;

        Ok(())
    }

    async fn store_company_location(
        &mut self,
        company_id: i32,
        location: &str,
    ) -> Result<(), DomainError> {
        let tx = self.tx()?;
        sqlx::query(
            r#"
            UPDATE companies
            SET location = $2
            WHERE id = $1
            "#,
        )
        .bind(company_id)
        .bind(location)
        .execute(&mut **tx)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error storing company location: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(())
    }

    async fn commit(&mut self) -> Result<(), DomainError> {
        let tx = self.tx.take().ok_or_else(|| {
            DomainError::DatabaseError("unit of work already completed".to_string())
        })?;

        tx.commit().await.map_err(|e| {
            error!("Database error committing transaction: {}", e);
            DomainError::DatabaseError(e.to_string())
        })
    }

    async fn rollback(&mut self) -> Result<(), DomainError> {
        match self.tx.take() {
            Some(tx) => tx.rollback().await.map_err(|e| {
                error!("Database error rolling back transaction: {}", e);
                DomainError::DatabaseError(e.to_string())
            }),
            // Nothing left to undo.
            None => Ok(()),
        }
    }
}
