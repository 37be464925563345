//! Webhook resource bindings for the Helpwire API.
//!
//! Extends [`helpwire_core::Client`] with the `/webhooks` operations via
//! the [`WebhookApi`] trait.

mod api;
mod models;

pub use api::WebhookApi;
pub use models::{Webhook, WebhookAuthentication, WebhookListOptions, WebhookSigningSecret};
