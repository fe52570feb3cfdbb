use async_trait::async_trait;

use crate::{entities::contact::ContactSubmission, errors::DeliveryError, settings::AppConfig};

pub mod log_delivery;
pub mod webhook;

pub use log_delivery::LogDelivery;
pub use webhook::WebhookDelivery;

/// Hands a validated submission to whatever notifies the site owner.
#[async_trait]
pub trait ContactDelivery: Send + Sync {
    async fn deliver(&self, submission: &ContactSubmission) -> Result<(), DeliveryError>;
}

#[derive(Clone)]
pub enum DeliveryBackend {
    Log(LogDelivery),
    Webhook(WebhookDelivery),
}

impl DeliveryBackend {
    pub fn from_config(config: &AppConfig) -> Result<Self, DeliveryError> {
        match &config.delivery_webhook_url {
            Some(url) => {
                tracing::info!("Contact submissions will be posted to the configured webhook");
                Ok(DeliveryBackend::Webhook(WebhookDelivery::new(url, config.delivery_timeout())?))
            }
            None => Ok(DeliveryBackend::Log(LogDelivery::new(config.delivery_delay()))),
        }
    }
}

#[async_trait]
impl ContactDelivery for DeliveryBackend {
    async fn deliver(&self, submission: &ContactSubmission) -> Result<(), DeliveryError> {
        match self {
            DeliveryBackend::Log(inner) => inner.deliver(submission).await,
            DeliveryBackend::Webhook(inner) => inner.deliver(submission).await,
        }
    }
}
