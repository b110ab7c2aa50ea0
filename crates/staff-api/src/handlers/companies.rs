// ============================================================================
// Staff API - Company Handlers
// File: crates/staff-api/src/handlers/companies.rs
// ============================================================================
//! Company HTTP handlers (list, fetch, create, delete)

use std::sync::Arc;

use axum::{extract::Path, http::StatusCode, Extension, Json};
use serde::{Deserialize, Serialize};

use staff_core::domain::Company;

use crate::response::{error_reply, ApiResponse};
use crate::state::Companies;

/// Create request payload
#[derive(Debug, Deserialize)]
pub struct CreateCompanyRequest {
    pub company_name: String,
    pub location: String,
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub message: String,
}

/// GET /companies
pub async fn list_companies(
    Extension(service): Extension<Arc<Companies>>,
) -> Result<Json<ApiResponse<Vec<Company>>>, (StatusCode, Json<ApiResponse<()>>)> {
    let companies = service.list().await.map_err(error_reply)?;
    Ok(Json(ApiResponse::success(companies)))
}

/// GET /companies/{company_id}
pub async fn read_company(
    Extension(service): Extension<Arc<Companies>>,
    Path(company_id): Path<i32>,
) -> Result<Json<ApiResponse<Company>>, (StatusCode, Json<ApiResponse<()>>)> {
    let company = service.get(company_id).await.map_err(error_reply)?;
    Ok(Json(ApiResponse::success(company)))
}

/// POST /companies
pub async fn add_company(
    Extension(service): Extension<Arc<Companies>>,
    Json(payload): Json<CreateCompanyRequest>,
) -> Result<Json<ApiResponse<Company>>, (StatusCode, Json<ApiResponse<()>>)> {
    let company = service
        .create(&payload.company_name, &payload.location)
        .await
        .map_err(error_reply)?;
    Ok(Json(ApiResponse::success(company)))
}

/// DELETE /companies/{company_id}
pub async fn remove_company(
    Extension(service): Extension<Arc<Companies>>,
    Path(company_id): Path<i32>,
) -> Result<Json<ApiResponse<DeletedResponse>>, (StatusCode, Json<ApiResponse<()>>)> {
    service.delete(company_id).await.map_err(error_reply)?;
    Ok(Json(ApiResponse::success(DeletedResponse {
        message: "Company deleted successfully".to_string(),
    })))
}
