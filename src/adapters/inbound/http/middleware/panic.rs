use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::any::Any;
use tracing::error;

use crate::adapters::inbound::http::dto::ContactResponseDto;

/// Turn a panic inside a handler into the same generic 500 a storage
/// failure produces. Used with `tower_http::catch_panic::CatchPanicLayer`.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    error!(panic = %detail, "Request handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ContactResponseDto::failure()),
    )
        .into_response()
}
