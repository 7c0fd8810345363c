use axum::Json;
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::ErrorReport;
use crate::state::SharedState;
use crate::validation::ValidationErrors;

/// Body for 404, plain 400 and 500 responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub timestamp: DateTime<Utc>,
    pub message: String,
    pub details: String,
    pub status: u16,
}

/// Body for validation failures.
#[derive(Debug, Serialize)]
pub struct ValidationErrorResponse {
    pub timestamp: DateTime<Utc>,
    pub status: u16,
    pub errors: ValidationErrors,
}

/// Renders the body of every failed response from the `ErrorReport` that
/// `AppError::into_response` left in its extensions. Responses without a
/// report pass through untouched.
pub async fn render_errors(
    State(state): State<SharedState>,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_string();
    let response = next.run(request).await;

    let Some(report) = response.extensions().get::<ErrorReport>().cloned() else {
        return response;
    };

    let timestamp = Utc::now();
    let details = format!("uri={path}");

    let rendered = match report {
        ErrorReport::Fields(errors) => (
            StatusCode::BAD_REQUEST,
            Json(ValidationErrorResponse {
                timestamp,
                status: StatusCode::BAD_REQUEST.as_u16(),
                errors,
            }),
        )
            .into_response(),
        ErrorReport::Message { status, message } => (
            status,
            Json(ErrorResponse {
                timestamp,
                message,
                details,
                status: status.as_u16(),
            }),
        )
            .into_response(),
        ErrorReport::Internal { category, message } => {
            let status = StatusCode::INTERNAL_SERVER_ERROR;
            let (message, details) = if state.config.expose_internal_errors {
                (format!("Internal Server Error: {category}"), message)
            } else {
                ("Internal Server Error".to_string(), details)
            };
            (
                status,
                Json(ErrorResponse {
                    timestamp,
                    message,
                    details,
                    status: status.as_u16(),
                }),
            )
                .into_response()
        }
    };

    // Keep headers set further in (CORS among them).
    let (mut parts, _) = response.into_parts();
    let (rendered_parts, body) = rendered.into_parts();
    parts.status = rendered_parts.status;
    parts.headers.extend(rendered_parts.headers);
    parts.extensions.remove::<ErrorReport>();
    Response::from_parts(parts, body)
}
