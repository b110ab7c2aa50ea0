//! Router assembly

use std::sync::Arc;

use axum::{
    routing::get,
    Extension, Router,
};
use sqlx::PgPool;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

use crate::handlers;
use crate::state::{Companies, Employees};

pub fn build_router(companies: Arc<Companies>, employees: Arc<Employees>, pool: PgPool) -> Router {
    let public_routes = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/health/ready", get(handlers::health::readiness_check));

    let api_routes = Router::new()
        .route(
            "/companies",
            get(handlers::companies::list_companies).post(handlers::companies::add_company),
        )
        .route(
            "/companies/{company_id}",
            get(handlers::companies::read_company).delete(handlers::companies::remove_company),
        )
        .route(
            "/employees",
            get(handlers::employees::list_employees).post(handlers::employees::add_employee),
        )
        .route(
            "/employees/{employee_id}",
            get(handlers::employees::read_employee)
                .put(handlers::employees::modify_employee)
                .patch(handlers::employees::partial_update_employee)
                .delete(handlers::employees::remove_employee),
        );

    Router::new()
        .merge(public_routes)
        .merge(api_routes)
        .layer(Extension(companies))
        .layer(Extension(employees))
        .layer(Extension(pool))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
}
