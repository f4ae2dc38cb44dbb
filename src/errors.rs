use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::services::capacity::AdmissionDenied;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("internal error: {0}")]
    Internal(anyhow::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("a booking already exists for this employee")]
    DuplicateBooking,

    #[error("session is full")]
    SlotFull,

    #[error("department quota for this session is full")]
    DepartmentQuotaFull,

    #[error("not found: {0}")]
    NotFound(String),
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err)
    }
}

impl From<AdmissionDenied> for AppError {
    fn from(denied: AdmissionDenied) -> Self {
        match denied {
            AdmissionDenied::SlotFull => AppError::SlotFull,
            AdmissionDenied::DepartmentQuotaFull => AppError::DepartmentQuotaFull,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::DuplicateBooking => StatusCode::CONFLICT,
            AppError::SlotFull => StatusCode::CONFLICT,
            AppError::DepartmentQuotaFull => StatusCode::CONFLICT,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        };

        // Capacity conflicts all surface as 409; the reason field carries the
        // distinction for callers that want it.
        let reason = match &self {
            AppError::DuplicateBooking => Some("duplicate_booking"),
            AppError::SlotFull => Some("slot_full"),
            AppError::DepartmentQuotaFull => Some("department_quota_full"),
            _ => None,
        };

        let mut body = serde_json::json!({ "error": self.to_string() });
        if let Some(reason) = reason {
            body["reason"] = reason.into();
        }
        (status, axum::Json(body)).into_response()
    }
}
