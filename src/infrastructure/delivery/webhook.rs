use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, Url};
use serde::Serialize;

use super::ContactDelivery;
use crate::{entities::contact::ContactSubmission, errors::DeliveryError};

#[derive(Debug, Serialize)]
struct ContactNotification<'a> {
    subject: String,
    name: &'a str,
    email: &'a str,
    message: &'a str,
    submitted_at: DateTime<Utc>,
}

impl<'a> From<&'a ContactSubmission> for ContactNotification<'a> {
    fn from(submission: &'a ContactSubmission) -> Self {
        ContactNotification {
            subject: format!("Portfolio Contact: {}", submission.subject()),
            name: submission.name(),
            email: submission.email(),
            message: submission.message(),
            submitted_at: submission.received_at(),
        }
    }
}

/// Posts each submission as JSON to an HTTP endpoint (mail relay, chat hook).
#[derive(Debug, Clone)]
pub struct WebhookDelivery {
    client: Client,
    url: Url,
}

impl WebhookDelivery {
    pub fn new(url: &str, timeout: Duration) -> Result<Self, DeliveryError> {
        let url = Url::parse(url).map_err(|e| DeliveryError::Transport(e.to_string()))?;
        let client = Client::builder().timeout(timeout).build()?;

        Ok(WebhookDelivery { client, url })
    }
}

#[async_trait]
impl ContactDelivery for WebhookDelivery {
    async fn deliver(&self, submission: &ContactSubmission) -> Result<(), DeliveryError> {
        let response = self.client
            .post(self.url.clone())
            .json(&ContactNotification::from(submission))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, "Webhook rejected contact submission");
            return Err(DeliveryError::Rejected(status.as_u16()));
        }

        tracing::info!(email = submission.email(), "Contact submission forwarded to webhook");
        Ok(())
    }
}
