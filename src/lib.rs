//! # Helpwire
//!
//! Typed client for the Helpwire helpdesk platform REST API.
//!
//! The [`Client`] handles transport, authentication and pagination; resource
//! bindings live in their own crates and extend the client through traits
//! such as [`WebhookApi`].
//!
//! ```no_run
//! use helpwire::{Client, Credential, WebhookApi};
//!
//! # async fn run() -> Result<(), helpwire::ApiError> {
//! let client = Client::new("https://example.helpwire.com/api/v2")?
//!     .with_credential(Credential::ApiToken {
//!         email: "agent@example.com".into(),
//!         token: "s3cr3t".into(),
//!     });
//!
//! let (webhooks, page) = client.list_webhooks(None).await?;
//! println!("{} webhooks, more: {}", webhooks.len(), page.has_more());
//! # Ok(())
//! # }
//! ```

pub use helpwire_core::{
    ApiError, Client, Credential, Page, PageLinks, PageMeta, QueryOptions, append_options,
};
pub use helpwire_webhooks::{
    Webhook, WebhookApi, WebhookAuthentication, WebhookListOptions, WebhookSigningSecret,
};
