use std::time::Duration;

use serde_json::Value;

use crate::{
    constants::CONTACT_SENT_MESSAGE,
    delivery::ContactDelivery,
    entities::contact::{ContactResponse, ContactSubmission},
    errors::{AppError, DeliveryError},
};

pub struct ContactHandler<D>
where
    D: ContactDelivery,
{
    pub delivery: D,
    delivery_timeout: Duration,
}

impl<D> ContactHandler<D>
where
    D: ContactDelivery,
{
    pub fn new(delivery: D, delivery_timeout: Duration) -> Self {
        ContactHandler { delivery, delivery_timeout }
    }

    /// Validates a raw payload and hands it to the delivery backend once.
    /// Delivery failures and timeouts are reported, never retried.
    pub async fn submit(&self, payload: &Value) -> Result<ContactResponse, AppError> {
        let submission = ContactSubmission::parse(payload)?;

        tokio::time::timeout(self.delivery_timeout, self.delivery.deliver(&submission))
            .await
            .map_err(|_| DeliveryError::TimedOut(self.delivery_timeout))??;

        Ok(ContactResponse {
            message: CONTACT_SENT_MESSAGE.to_string(),
        })
    }
}
