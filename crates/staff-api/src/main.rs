use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tracing::info;

use staff_core::services::{CompanyService, EmployeeService};
use staff_infrastructure::{
    create_pool, PgCompanyRepository, PgEmployeeRepository, PgUnitOfWorkFactory,
};

use staff_api::config::Settings;
use staff_api::routes::build_router;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,staff_api=debug".to_string()),
        )
        .with_target(true)
        .json()
        .init();

    info!("🚀 Starting staff registry server...");

    // Load configuration
    let settings = Settings::load()?;
    info!("✅ Configuration loaded");

    // Initialize database pool
    let pool = create_pool(
        &settings.database.url,
        settings.database.max_connections,
        Duration::from_secs(settings.database.acquire_timeout_seconds),
    )
    .await?;
    info!("✅ Database connection established");

    // Initialize repositories and services
    let company_repo = Arc::new(PgCompanyRepository::new(pool.clone()));
    let employee_repo = Arc::new(PgEmployeeRepository::new(pool.clone()));
    let gateway = Arc::new(PgUnitOfWorkFactory::new(pool.clone()));

    let companies = Arc::new(CompanyService::new(
        company_repo.clone(),
        employee_repo.clone(),
    ));
    let employees = Arc::new(EmployeeService::new(employee_repo, company_repo, gateway));

    // Build router
    let app = build_router(companies, employees, pool);

    // Server address
    let addr = SocketAddr::from((
        settings.server.host.parse::<std::net::IpAddr>()?,
        settings.server.port,
    ));

    info!("🎯 Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
