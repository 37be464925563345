//! Webhook operations against the `/webhooks` resource family.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use helpwire_core::{ApiError, Client, Page, append_options};

use crate::models::{Webhook, WebhookListOptions, WebhookSigningSecret};

#[derive(Debug, Serialize)]
struct WebhookRequest<'a> {
    webhook: &'a Webhook,
}

#[derive(Debug, Deserialize)]
struct WebhookResponse {
    webhook: Webhook,
}

#[derive(Debug, Deserialize)]
struct WebhookListResponse {
    webhooks: Vec<Webhook>,
    #[serde(flatten)]
    page: Page,
}

#[derive(Debug, Deserialize)]
struct SigningSecretResponse {
    signing_secret: WebhookSigningSecret,
}

/// Operations on the webhook resource.
///
/// Every method performs exactly one HTTP round trip; the caller drives
/// pagination with the cursors in the returned [`Page`]. Dropping the
/// returned future cancels the in-flight call.
#[async_trait]
pub trait WebhookApi {
    /// List webhooks. `None` means no filters and server-default paging.
    async fn list_webhooks(
        &self,
        options: Option<&WebhookListOptions>,
    ) -> Result<(Vec<Webhook>, Page), ApiError>;

    /// Create a new webhook and return the server-assigned record.
    ///
    /// The server validates the payload; `name`, `endpoint`, `http_method`,
    /// `request_format` and `status` are expected to be set.
    async fn create_webhook(&self, hook: &Webhook) -> Result<Webhook, ApiError>;

    /// Get the webhook with the given identifier.
    async fn get_webhook(&self, id: &str) -> Result<Webhook, ApiError>;

    /// Replace the webhook with the given identifier.
    async fn update_webhook(&self, id: &str, hook: &Webhook) -> Result<(), ApiError>;

    /// Delete the webhook with the given identifier.
    async fn delete_webhook(&self, id: &str) -> Result<(), ApiError>;

    /// Get the signing secret used to verify the webhook's payloads.
    async fn get_webhook_signing_secret(&self, id: &str) -> Result<WebhookSigningSecret, ApiError>;
}

#[async_trait]
impl WebhookApi for Client {
    async fn list_webhooks(
        &self,
        options: Option<&WebhookListOptions>,
    ) -> Result<(Vec<Webhook>, Page), ApiError> {
        let default_options = WebhookListOptions::default();
        let options = options.unwrap_or(&default_options);

        let path = append_options("/webhooks", options);
        let body = self.get(&path).await?;
        let data: WebhookListResponse =
            serde_json::from_slice(&body).map_err(|e| ApiError::decode(&path, e))?;
        Ok((data.webhooks, data.page))
    }

    async fn create_webhook(&self, hook: &Webhook) -> Result<Webhook, ApiError> {
        let path = "/webhooks";
        let body = self.post(path, &WebhookRequest { webhook: hook }).await?;
        let data: WebhookResponse =
            serde_json::from_slice(&body).map_err(|e| ApiError::decode(path, e))?;
        Ok(data.webhook)
    }

    async fn get_webhook(&self, id: &str) -> Result<Webhook, ApiError> {
        let path = format!("/webhooks/{id}");
        let body = self.get(&path).await?;
        let data: WebhookResponse =
            serde_json::from_slice(&body).map_err(|e| ApiError::decode(&path, e))?;
        Ok(data.webhook)
    }

    async fn update_webhook(&self, id: &str, hook: &Webhook) -> Result<(), ApiError> {
        let path = format!("/webhooks/{id}");
        // Response body carries nothing of interest.
        self.put(&path, &WebhookRequest { webhook: hook }).await?;
        Ok(())
    }

    async fn delete_webhook(&self, id: &str) -> Result<(), ApiError> {
        let path = format!("/webhooks/{id}");
        self.delete(&path).await?;
        Ok(())
    }

    async fn get_webhook_signing_secret(&self, id: &str) -> Result<WebhookSigningSecret, ApiError> {
        let path = format!("/webhooks/{id}/signing_secret");
        let body = self.get(&path).await?;
        let data: SigningSecretResponse =
            serde_json::from_slice(&body).map_err(|e| ApiError::decode(&path, e))?;
        Ok(data.signing_secret)
    }
}

#[cfg(test)]
#[path = "api_tests.rs"]
mod tests;
