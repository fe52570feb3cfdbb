use std::time::Duration;

use actix_web::{
    error::ResponseError,
    http::{header::ContentType, StatusCode},
    HttpResponse
};
use derive_more::Display;
use validator::ValidationErrors;

use crate::constants::{
    DELIVERY_FAILED_MESSAGE, INTERNAL_ERROR_MESSAGE, INVALID_FORM_MESSAGE, RATE_LIMITED_MESSAGE,
};

/// Errors surfaced to HTTP callers.
///
/// `Display` carries the diagnostic detail and is only ever logged. The
/// response body always holds the generic message for the error category.
#[derive(Debug, Display)]
pub enum AppError {
    #[display("Invalid request: {_0}")]
    InvalidRequest(String),

    #[display("Rate limit exceeded for source {_0}")]
    RateLimited(String),

    #[display("Delivery failed: {_0}")]
    DeliveryFailed(String),

    #[display("Internal server error: {_0}")]
    InternalError(String),
}

impl AppError {
    pub fn public_message(&self) -> &'static str {
        match self {
            AppError::InvalidRequest(_) => INVALID_FORM_MESSAGE,
            AppError::RateLimited(_) => RATE_LIMITED_MESSAGE,
            AppError::DeliveryFailed(_) => DELIVERY_FAILED_MESSAGE,
            AppError::InternalError(_) => INTERNAL_ERROR_MESSAGE,
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::DeliveryFailed(_) | AppError::InternalError(_) => {
                tracing::error!(error = %self, "Contact request failed")
            }
            _ => tracing::info!(error = %self, "Contact request rejected"),
        }

        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .json(serde_json::json!({ "error": self.public_message() }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::RateLimited(_) => StatusCode::TOO_MANY_REQUESTS,
            AppError::DeliveryFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ContactRejection> for AppError {
    fn from(err: ContactRejection) -> Self {
        AppError::InvalidRequest(err.to_string())
    }
}

impl From<DeliveryError> for AppError {
    fn from(err: DeliveryError) -> Self {
        AppError::DeliveryFailed(err.to_string())
    }
}

impl From<RateLimitError> for AppError {
    fn from(err: RateLimitError) -> Self {
        AppError::InternalError(err.to_string())
    }
}

/// Why a raw payload could not become a `ContactSubmission`.
#[derive(Debug, Display)]
pub enum ContactRejection {
    #[display("payload is not a JSON object")]
    NotAnObject,

    #[display("field `{_0}` is missing or empty")]
    MissingField(&'static str),

    #[display("field `{_0}` must be a string")]
    NotText(&'static str),

    #[display("{_0}")]
    Invalid(ValidationErrors),
}

impl std::error::Error for ContactRejection {}

impl From<ValidationErrors> for ContactRejection {
    fn from(errors: ValidationErrors) -> Self {
        ContactRejection::Invalid(errors)
    }
}

#[derive(Debug, Display)]
pub enum DeliveryError {
    #[display("delivery did not finish within {}", humantime::format_duration(*_0))]
    TimedOut(Duration),

    #[display("transport error: {_0}")]
    Transport(String),

    #[display("backend answered with status {_0}")]
    Rejected(u16),
}

impl std::error::Error for DeliveryError {}

impl From<reqwest::Error> for DeliveryError {
    fn from(err: reqwest::Error) -> Self {
        DeliveryError::Transport(err.to_string())
    }
}

#[derive(Debug, Display)]
pub enum RateLimitError {
    #[display("Redis pool error: {_0}")]
    Pool(String),

    #[display("Redis operation failed: {_0}")]
    Redis(String),
}

impl std::error::Error for RateLimitError {}

impl From<deadpool_redis::PoolError> for RateLimitError {
    fn from(err: deadpool_redis::PoolError) -> Self {
        RateLimitError::Pool(err.to_string())
    }
}

impl From<redis::RedisError> for RateLimitError {
    fn from(err: redis::RedisError) -> Self {
        RateLimitError::Redis(err.to_string())
    }
}
