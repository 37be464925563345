//! Webhook resource types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use helpwire_core::QueryOptions;

/// A configured webhook registration.
///
/// Built by the caller for create/update requests (only the settable fields
/// are meaningful) or decoded from a server response with the server-owned
/// fields populated. `id`, the timestamps and the actor fields are assigned
/// by the server and never client-supplied.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Webhook {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authentication: Option<WebhookAuthentication>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub created_by: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub endpoint: String,
    /// Caller/server-defined structured value; its shape is not part of
    /// this resource's contract.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_source: Option<serde_json::Value>,
    pub http_method: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub name: String,
    pub request_format: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signing_secret: Option<WebhookSigningSecret>,
    pub status: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subscriptions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub updated_by: String,
}

/// How outbound webhook requests authenticate themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookAuthentication {
    #[serde(rename = "type")]
    pub auth_type: String,
    /// Opaque payload whose shape depends on `auth_type`.
    pub data: serde_json::Value,
    /// Where the credentials are added to the outbound request.
    pub add_position: String,
}

/// Server-generated secret for verifying payload authenticity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookSigningSecret {
    pub algorithm: String,
    pub secret: String,
}

/// Filters and cursor pagination for [`crate::WebhookApi::list_webhooks`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WebhookListOptions {
    /// Substring match on the webhook name.
    pub filter_name_contains: Option<String>,
    /// Filter by lifecycle status.
    pub filter_status: Option<String>,
    /// Cursor: return the page after this token.
    pub page_after: Option<String>,
    /// Cursor: return the page before this token.
    pub page_before: Option<String>,
    pub page_size: Option<u64>,
    pub sort: Option<String>,
}

impl QueryOptions for WebhookListOptions {
    fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(name) = &self.filter_name_contains {
            params.push(("filter[name_contains]", name.clone()));
        }
        if let Some(status) = &self.filter_status {
            params.push(("filter[status]", status.clone()));
        }
        if let Some(after) = &self.page_after {
            params.push(("page[after]", after.clone()));
        }
        if let Some(before) = &self.page_before {
            params.push(("page[before]", before.clone()));
        }
        if let Some(size) = self.page_size {
            params.push(("page[size]", size.to_string()));
        }
        if let Some(sort) = &self.sort {
            params.push(("sort", sort.clone()));
        }
        params
    }
}
