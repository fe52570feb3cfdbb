use actix_web::{dev::Payload, web, FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::{errors::AppError, utils::client_ip::client_source_id, AppState};

/// Rate-limit key of the caller.
/// Usage: Add `source: ClientSource` as a parameter to your handler function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSource(pub String);

impl FromRequest for ClientSource {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        match req.app_data::<web::Data<AppState>>() {
            Some(state) => ready(Ok(ClientSource(client_source_id(req, state.trust_x_forwarded_for)))),
            None => {
                tracing::error!("AppState missing in ClientSource extractor");
                ready(Err(AppError::InternalError("application state not configured".into())))
            }
        }
    }
}
