use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use tracing::warn;

use crate::{
    adapters::inbound::http::{
        dto::{ContactResponseDto, HealthResponseDto},
        router::AppState,
    },
    domain::errors::{
        ContactError, ContactField, FieldViolation, ValidationErrors, ViolationCode,
    },
};

/// Handle a contact form submission
pub async fn submit_contact(
    State(app_state): State<AppState>,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> (StatusCode, Json<ContactResponseDto>) {
    // Unreadable bodies are a client mistake like any other schema violation
    let payload = match payload {
        Ok(Json(payload)) => payload,
        Err(rejection) => {
            let detail = rejection.body_text();
            warn!(error = %detail, "Rejected unreadable contact payload");
            let violation =
                FieldViolation::new(ContactField::Form, ViolationCode::InvalidType, detail);
            return (
                StatusCode::BAD_REQUEST,
                Json(ContactResponseDto::invalid(&ValidationErrors::from(violation))),
            );
        }
    };

    match app_state.contact_service.submit(&payload).await {
        Ok(receipt) => (
            StatusCode::OK,
            Json(ContactResponseDto::accepted(&receipt.message)),
        ),
        Err(ContactError::Validation(errors)) => (
            StatusCode::BAD_REQUEST,
            Json(ContactResponseDto::invalid(&errors)),
        ),
        // Already logged with full detail by the service
        Err(ContactError::Storage(_)) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ContactResponseDto::failure()),
        ),
    }
}

/// Liveness probe
pub async fn health() -> Json<HealthResponseDto> {
    Json(HealthResponseDto::ok())
}
