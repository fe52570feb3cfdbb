use actix_web::{error::JsonPayloadError, web};

use crate::errors::AppError;

/// Body extraction rules for JSON endpoints. Unreadable bodies get the same
/// 400 shape as a payload that fails validation.
pub fn json_config(max_payload_bytes: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(max_payload_bytes)
        .content_type_required(false)
        .error_handler(|err, _req| AppError::from(err).into())
}

impl From<JsonPayloadError> for AppError {
    fn from(err: JsonPayloadError) -> Self {
        AppError::InvalidRequest(format!("JSON payload error: {}", err))
    }
}
