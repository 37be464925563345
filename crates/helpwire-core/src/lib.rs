//! # Helpwire Core
//!
//! Shared plumbing for the Helpwire API client: the HTTP transport,
//! error types, cursor pagination and query-string encoding used by
//! every resource binding.

mod client;
mod error;
mod pagination;
mod query;

pub use client::{Client, Credential};
pub use error::ApiError;
pub use pagination::{Page, PageLinks, PageMeta};
pub use query::{QueryOptions, append_options};
