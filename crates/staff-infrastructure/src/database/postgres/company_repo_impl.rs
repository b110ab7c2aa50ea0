// ============================================================================
// Staff Infrastructure - PostgreSQL Company Repository
// File: crates/staff-infrastructure/src/database/postgres/company_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{error, info};

use staff_core::domain::Company;
use staff_core::error::DomainError;
use staff_core::repositories::CompanyRepository;

use super::CompanyRow;

pub struct PgCompanyRepository {
    pool: PgPool,
}

impl PgCompanyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CompanyRepository for PgCompanyRepository {
    async fn find_all(&self) -> Result<Vec<Company>, DomainError> {
        let rows: Vec<CompanyRow> = sqlx::query_as(
            r#"
            SELECT id, company_name, location
            FROM companies
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error listing companies: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Company>, DomainError> {
        let row: Option<CompanyRow> = sqlx::query_as(
            r#"
            SELECT id, company_name, location
            FROM companies
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error finding company by id: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(|r| r.into()))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Company>, DomainError> {
        let row: Option<CompanyRow> = sqlx::query_as(
            r#"
            SELECT id, company_name, location
            FROM companies
            WHERE company_name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error finding company by name: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(|r| r.into()))
    }

    async fn create(&self, company_name: &str, location: &str) -> Result<Company, DomainError> {
        info!("Creating company: {}", company_name);

        let row: CompanyRow = sqlx::query_as(
            r#"
            INSERT INTO companies (company_name, location)
            VALUES ($1, $2)
            RETURNING id, company_name, location
            "#,
        )
        .bind(company_name)
        .bind(location)
        .fetch_one(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error creating company: {}", e);
            let msg = e.to_string();
            if msg.contains("unique") || msg.contains("duplicate") {
                DomainError::CompanyNameAlreadyExists(company_name.to_string())
            } else {
                DomainError::DatabaseError(msg)
            }
        })?;

        Ok(row.into())
    }

    async fn delete(&self, id: i32) -> Result<bool, DomainError> {
        let result = sqlx::query(
            r#"
            DELETE FROM companies
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error deleting company: {}", e);
            let msg = e.to_string();
            if msg.contains("foreign key") {
                DomainError::CompanyHasEmployees(id)
            } else {
                DomainError::DatabaseError(msg)
            }
        })?;

        Ok(result.rows_affected() > 0)
    }
}
