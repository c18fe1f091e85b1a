use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::{error, info};

use crate::common::DeliveryError;
use crate::domains::notifications::models::Notification;
use crate::kernel::traits::BaseDeliveryService;

/// Webhook notification delivery
/// POSTs each notification record to a configured endpoint (a toast bridge,
/// a push gateway, whatever sits behind the URL). Best-effort: the caller
/// treats failures as non-fatal.
pub struct WebhookDelivery {
    client: Client,
    url: String,
    auth_token: Option<String>,
}

#[derive(Debug, Serialize)]
struct WebhookPayload<'a> {
    recipient_id: String,
    kind: String,
    title: &'a str,
    message: &'a str,
    reference_id: Option<String>,
}

impl WebhookDelivery {
    pub fn new(url: String, auth_token: Option<String>) -> Self {
        Self {
            client: Client::new(),
            url,
            auth_token,
        }
    }
}

#[async_trait]
impl BaseDeliveryService for WebhookDelivery {
    async fn deliver(&self, notification: &Notification) -> Result<(), DeliveryError> {
        let payload = WebhookPayload {
            recipient_id: notification.recipient_id.to_string(),
            kind: notification.kind.to_string(),
            title: &notification.title,
            message: &notification.message,
            reference_id: notification.reference_id.map(|id| id.to_string()),
        };

        let mut request = self.client.post(&self.url).json(&payload);

        // Add auth token if provided
        if let Some(token) = &self.auth_token {
            request = request.header("Authorization", format!("Bearer {}", token));
        }

        info!(
            notification_id = %notification.id,
            recipient_id = %notification.recipient_id,
            "Delivering notification via webhook"
        );

        let response = request
            .send()
            .await
            .map_err(|e| DeliveryError(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!("Webhook delivery failed {}: {}", status, body);
            return Err(DeliveryError(format!("webhook returned {status}")));
        }

        Ok(())
    }
}

/// No-op delivery sink, used when no webhook endpoint is configured.
pub struct NoopDelivery;

#[async_trait]
impl BaseDeliveryService for NoopDelivery {
    async fn deliver(&self, _notification: &Notification) -> Result<(), DeliveryError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_webhook_client_creation() {
        let delivery = WebhookDelivery::new("https://example.org/hook".to_string(), None);
        assert!(delivery.auth_token.is_none());

        let with_token = WebhookDelivery::new(
            "https://example.org/hook".to_string(),
            Some("test-token".to_string()),
        );
        assert!(with_token.auth_token.is_some());
    }
}
