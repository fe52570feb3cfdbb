use std::time::Duration;

use async_trait::async_trait;

use super::ContactDelivery;
use crate::{entities::contact::ContactSubmission, errors::DeliveryError};

/// Records the submission in the log and waits a fixed delay, standing in
/// for a mail provider round trip.
#[derive(Debug, Clone)]
pub struct LogDelivery {
    delay: Duration,
}

impl LogDelivery {
    pub fn new(delay: Duration) -> Self {
        LogDelivery { delay }
    }
}

#[async_trait]
impl ContactDelivery for LogDelivery {
    async fn deliver(&self, submission: &ContactSubmission) -> Result<(), DeliveryError> {
        tracing::info!(
            name = submission.name(),
            email = submission.email(),
            subject = submission.subject(),
            message = submission.message(),
            timestamp = %submission.received_at().to_rfc3339(),
            "Contact form submission"
        );

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        Ok(())
    }
}
