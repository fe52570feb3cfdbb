use actix_web::{get, web, HttpResponse, Responder};
use chrono::Utc;
use humantime::format_duration;
use std::time::Duration;

use crate::{constants::START_TIME, AppState};

#[get("/")]
pub async fn home(state: web::Data<AppState>) -> impl Responder {
    let uptime = Utc::now()
        .signed_duration_since(*START_TIME)
        .to_std()
        .unwrap_or(Duration::ZERO);

    HttpResponse::Ok().json(serde_json::json!({
        "name": state.name,
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "uptime": format_duration(Duration::from_secs(uptime.as_secs())).to_string(),
        "started_at": START_TIME.to_rfc3339(),
    }))
}
