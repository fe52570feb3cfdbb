use actix_web::web;

use crate::handlers::home::home;

mod api;
mod json_error;

pub use json_error::json_config;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home);

    cfg.service(
        web::scope("/api")
            .configure(api::config_routes)
    );
}
