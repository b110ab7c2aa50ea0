// ============================================================================
// Staff API - Employee Handlers
// File: crates/staff-api/src/handlers/employees.rs
// ============================================================================
//! Employee HTTP handlers (list, fetch, create, replace, partial update,
//! delete)

use std::sync::Arc;

use axum::{extract::Path, http::StatusCode, Extension, Json};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use staff_core::domain::EmployeeRecord;
use staff_core::services::{CreateEmployee, EmployeeChanges};

use crate::response::{error_reply, ApiResponse};
use crate::state::Employees;

/// Full payload, shared by POST and PUT.
#[derive(Debug, Deserialize)]
pub struct EmployeePayload {
    pub name: String,
    pub email: String,
    pub designation: String,
    pub salary: Decimal,
    pub company_name: String,
}

impl From<EmployeePayload> for CreateEmployee {
    fn from(payload: EmployeePayload) -> Self {
        CreateEmployee {
            name: payload.name,
            email: payload.email,
            designation: payload.designation,
            salary: payload.salary,
            company_name: payload.company_name,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub message: String,
}

/// GET /employees
pub async fn list_employees(
    Extension(service): Extension<Arc<Employees>>,
) -> Result<Json<ApiResponse<Vec<EmployeeRecord>>>, (StatusCode, Json<ApiResponse<()>>)> {
    let employees = service.list().await.map_err(error_reply)?;
    Ok(Json(ApiResponse::success(employees)))
}

/// GET /employees/{employee_id}
pub async fn read_employee(
    Extension(service): Extension<Arc<Employees>>,
    Path(employee_id): Path<i32>,
) -> Result<Json<ApiResponse<EmployeeRecord>>, (StatusCode, Json<ApiResponse<()>>)> {
    let employee = service.get(employee_id).await.map_err(error_reply)?;
    Ok(Json(ApiResponse::success(employee)))
}

/// POST /employees
pub async fn add_employee(
    Extension(service): Extension<Arc<Employees>>,
    Json(payload): Json<EmployeePayload>,
) -> Result<Json<ApiResponse<EmployeeRecord>>, (StatusCode, Json<ApiResponse<()>>)> {
    let employee = service.create(payload.into()).await.map_err(error_reply)?;
    Ok(Json(ApiResponse::success(employee)))
}

/// PUT /employees/{employee_id}
pub async fn modify_employee(
    Extension(service): Extension<Arc<Employees>>,
    Path(employee_id): Path<i32>,
    Json(payload): Json<EmployeePayload>,
) -> Result<Json<ApiResponse<EmployeeRecord>>, (StatusCode, Json<ApiResponse<()>>)> {
    let employee = service
        .replace(employee_id, payload.into())
        .await
        .map_err(error_reply)?;
    Ok(Json(ApiResponse::success(employee)))
}

/// PATCH /employees/{employee_id}
///
/// The body is a sparse set of the updatable fields; unknown keys are dropped
/// by the decoder rather than rejected.
pub async fn partial_update_employee(
    Extension(service): Extension<Arc<Employees>>,
    Path(employee_id): Path<i32>,
    Json(changes): Json<EmployeeChanges>,
) -> Result<Json<ApiResponse<EmployeeRecord>>, (StatusCode, Json<ApiResponse<()>>)> {
    let employee = service
        .reconcile(employee_id, changes)
        .await
        .map_err(error_reply)?;
    Ok(Json(ApiResponse::success(employee)))
}

/// DELETE /employees/{employee_id}
pub async fn remove_employee(
    Extension(service): Extension<Arc<Employees>>,
    Path(employee_id): Path<i32>,
) -> Result<Json<ApiResponse<DeletedResponse>>, (StatusCode, Json<ApiResponse<()>>)> {
    service.delete(employee_id).await.map_err(error_reply)?;
    Ok(Json(ApiResponse::success(DeletedResponse {
        message: "Employee deleted successfully".to_string(),
    })))
}
