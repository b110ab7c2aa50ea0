//! API Response wrapper and error mapping

use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::Serialize;

use staff_core::error::DomainError;

#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<ApiError>,
    pub timestamp: String,
}

#[derive(Serialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            timestamp: Utc::now().to_rfc3339(),
        }
    }

    pub fn error(code: &str, message: &str) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ApiError {
                code: code.to_string(),
                message: message.to_string(),
            }),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

/// Maps the domain taxonomy onto HTTP statuses: the NotFound family is 404,
/// conflicts are 409, unmet preconditions are 422.
pub fn error_reply(err: DomainError) -> (StatusCode, Json<ApiResponse<()>>) {
    let (status, code) = match &err {
        DomainError::EmployeeNotFound
        | DomainError::CompanyNotFound
        | DomainError::CompanyNotFoundByName(_)
        | DomainError::CompanyLocationNotFound { .. } => (StatusCode::NOT_FOUND, "NOT_FOUND"),

        DomainError::EmailAlreadyExists(_) | DomainError::CompanyNameAlreadyExists(_) => {
            (StatusCode::CONFLICT, "CONFLICT")
        }

        DomainError::EmployeeWithoutCompany | DomainError::CompanyHasEmployees(_) => {
            (StatusCode::UNPROCESSABLE_ENTITY, "INVALID_STATE")
        }

        DomainError::ValidationError(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),

        DomainError::DatabaseError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "STORAGE_ERROR"),
    };

    (status, Json(ApiResponse::error(code, &err.to_string())))
}
