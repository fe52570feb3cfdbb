use actix_web::web;

use crate::handlers::{contact, system};

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(system::health_check)
        .service(
            web::resource("/contact")
                .route(web::post().to(contact::submit_contact))
        );
}
