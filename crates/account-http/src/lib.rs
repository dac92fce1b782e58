//! # Account API HTTP Client
//!
//! HTTP client for the organisation account API.
//!
//! This crate provides:
//! - A deterministic URL builder for resource addresses
//! - A pluggable transport trait with a reqwest-backed default
//! - A client exposing create/fetch/list/delete over one resource type
//! - An error taxonomy classifying response status codes
//!
//! ## Example
//!
//! ```ignore
//! use account_core::{Resource, ResourceName};
//! use account_http::AccountClient;
//!
//! let client = AccountClient::new("https://api.example.com")
//!     .with_api_version("v1")
//!     .with_bearer_token(token);
//!
//! let created = client.create(ResourceName::Account, account).await?;
//! let fetched = client.fetch(ResourceName::Account, &created.data.id).await?;
//! ```

mod client;
mod error;
mod transport;
mod url;

pub use client::{AccountClient, ListFilter, DEFAULT_MIME_TYPE};
pub use error::AccountHttpError;
pub use transport::HttpTransport;
pub use url::UrlBuilder;
