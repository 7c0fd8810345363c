use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::validation::ValidationErrors;

#[derive(Debug)]
pub enum AppError {
    NotFound {
        resource: &'static str,
        field: &'static str,
        value: String,
    },
    Validation(ValidationErrors),
    BadRequest(String),
    UnsupportedMediaType(String),
    RouteNotFound,
    Internal { category: String, message: String },
    Database(sqlx::Error),
}

impl AppError {
    pub fn not_found(resource: &'static str, field: &'static str, value: impl ToString) -> Self {
        AppError::NotFound {
            resource,
            field,
            value: value.to_string(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound { .. } | AppError::RouteNotFound => StatusCode::NOT_FOUND,
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            AppError::Internal { .. } | AppError::Database(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Category name reported for unclassified failures.
    pub fn category(&self) -> String {
        match self {
            AppError::Internal { category, .. } => category.clone(),
            AppError::Database(err) => database_category(err).to_string(),
            AppError::NotFound { .. } | AppError::RouteNotFound => "NotFound".to_string(),
            AppError::Validation(_) => "Validation".to_string(),
            AppError::BadRequest(_) => "BadRequest".to_string(),
            AppError::UnsupportedMediaType(_) => "UnsupportedMediaType".to_string(),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::NotFound {
                resource,
                field,
                value,
            } => write!(f, "{resource} not found with {field}: '{value}'"),
            AppError::Validation(errors) => write!(f, "Validation failed: {errors}"),
            AppError::BadRequest(msg) | AppError::UnsupportedMediaType(msg) => write!(f, "{msg}"),
            AppError::RouteNotFound => write!(f, "Resource not found"),
            AppError::Internal { message, .. } => write!(f, "{message}"),
            AppError::Database(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for AppError {}

/// Classification happens here; the body itself is rendered by
/// `middleware::errors::render_errors`, which knows the request path.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(category = %self.category(), "Unhandled failure: {self}");
        }

        let mut response = status.into_response();
        response.extensions_mut().insert(ErrorReport::from(self));
        response
    }
}

/// Classified failure carried on the response until it is rendered.
#[derive(Debug, Clone)]
pub enum ErrorReport {
    Message { status: StatusCode, message: String },
    Fields(ValidationErrors),
    Internal { category: String, message: String },
}

impl From<AppError> for ErrorReport {
    fn from(err: AppError) -> Self {
        match err {
            AppError::Validation(errors) => ErrorReport::Fields(errors),
            AppError::Internal { .. } | AppError::Database(_) => ErrorReport::Internal {
                category: err.category(),
                message: err.to_string(),
            },
            other => ErrorReport::Message {
                status: other.status(),
                message: other.to_string(),
            },
        }
    }
}

/// Failures raised by a `ProjectStore`.
#[derive(Debug)]
pub enum StoreError {
    NotFound {
        resource: &'static str,
        field: &'static str,
        value: String,
    },
    Constraint(String),
    Database(sqlx::Error),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::NotFound {
                resource,
                field,
                value,
            } => write!(f, "{resource} not found with {field}: '{value}'"),
            StoreError::Constraint(msg) => write!(f, "Constraint violation: {msg}"),
            StoreError::Database(err) => write!(f, "Database error: {err}"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        StoreError::Database(err)
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound {
                resource,
                field,
                value,
            } => AppError::NotFound {
                resource,
                field,
                value,
            },
            StoreError::Constraint(message) => AppError::Internal {
                category: "ConstraintViolation".to_string(),
                message,
            },
            StoreError::Database(err) => AppError::Database(err),
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Database(err)
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::Validation(errors)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::MissingJsonContentType(_) => {
                AppError::UnsupportedMediaType(rejection.body_text())
            }
            JsonRejection::JsonSyntaxError(_) | JsonRejection::JsonDataError(_) => {
                AppError::BadRequest(format!("Malformed request body: {}", rejection.body_text()))
            }
            _ => AppError::BadRequest(format!("Invalid request body: {}", rejection.body_text())),
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(format!("Invalid path parameter: {}", rejection.body_text()))
    }
}

fn database_category(err: &sqlx::Error) -> &'static str {
    match err {
        sqlx::Error::Database(_) => "DatabaseError",
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => "PoolUnavailable",
        sqlx::Error::Io(_) | sqlx::Error::Tls(_) => "ConnectionError",
        sqlx::Error::RowNotFound => "RowNotFound",
        sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => "DecodeError",
        _ => "SqlxError",
    }
}
