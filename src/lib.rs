mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;
pub mod background_task;

pub use domain::{entities, use_cases};
pub use interfaces::{handlers, routes};
pub use infrastructure::{delivery, limiter, utils};

use delivery::DeliveryBackend;
use limiter::RateLimiterBackend;
use use_cases::contact::ContactHandler;

pub struct AppState {
    pub name: String,
    pub contact_handler: AppContactHandler,
    pub rate_limiter: RateLimiterBackend,
    pub trust_x_forwarded_for: bool,
}

pub type AppContactHandler = ContactHandler<DeliveryBackend>;

impl AppState {
    pub fn new(config: &settings::AppConfig) -> Result<Self, errors::DeliveryError> {
        let delivery = DeliveryBackend::from_config(config)?;
        let contact_handler = ContactHandler::new(delivery, config.delivery_timeout());
        let rate_limiter = RateLimiterBackend::from_config(config);

        Ok(AppState {
            name: config.name.clone(),
            contact_handler,
            rate_limiter,
            trust_x_forwarded_for: config.trust_x_forwarded_for,
        })
    }
}
