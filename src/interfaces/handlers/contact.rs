use actix_web::{web, HttpResponse};
use serde_json::Value;

use crate::{errors::AppError, limiter::RateLimitStore, use_cases::extractors::ClientSource, AppState};

pub async fn submit_contact(
    source: ClientSource,
    state: web::Data<AppState>,
    payload: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    if !state.rate_limiter.admit(&source.0).await? {
        return Err(AppError::RateLimited(source.0));
    }

    let response = state.contact_handler.submit(&payload).await?;

    Ok(HttpResponse::Ok().json(response))
}
