use crate::application::{
    ApplicationResult,
    error::{ApplicationError, FieldErrorKind},
};
use crate::domain::errors::DomainError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    message: String,
    field: Option<String>,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Field(field_err) => {
                let status = match field_err.kind {
                    FieldErrorKind::Invalid => StatusCode::BAD_REQUEST,
                    FieldErrorKind::Conflict => StatusCode::CONFLICT,
                    FieldErrorKind::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
                };
                Self {
                    status,
                    message: field_err.message,
                    field: Some(field_err.field),
                }
            }
            ApplicationError::Validation(msg) => Self::new(StatusCode::BAD_REQUEST, msg),
            ApplicationError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg),
            ApplicationError::Conflict(msg) => Self::new(StatusCode::CONFLICT, msg),
            ApplicationError::Infrastructure(msg) => Self::internal(&msg),
            ApplicationError::Domain(DomainError::Persistence(msg)) => Self::internal(&msg),
            ApplicationError::Domain(domain_err) => {
                Self::new(StatusCode::BAD_REQUEST, domain_err.to_string())
            }
        }
    }

    fn new(status: StatusCode, message: String) -> Self {
        Self {
            status,
            message,
            field: None,
        }
    }

    fn internal(detail: &str) -> Self {
        tracing::error!(error = detail, "request failed");
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal server error".into(),
        )
    }

    pub const fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let payload = ErrorResponse {
            error: self
                .status
                .canonical_reason()
                .unwrap_or("error")
                .to_string(),
            message: self.message,
            field: self.field,
        };
        (self.status, Json(payload)).into_response()
    }
}

/// Body of every non-2xx response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    /// Input field the error refers to, when there is one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}
