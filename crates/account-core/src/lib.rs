//! # Account API Core
//!
//! Wire data model for the organisation account API.
//!
//! This crate provides:
//! - Resource and envelope type definitions (`data` / `links` wrapping)
//! - The resource-name-to-endpoint table
//! - The bad-request error payload returned with 400 responses
//!
//! ## Example
//!
//! ```rust,ignore
//! use account_core::{DataContainer, Resource};
//!
//! let account = Resource::account(id, organisation_id, attributes);
//! let body = serde_json::to_string(&DataContainer::new(account))?;
//! ```

pub mod types;

// Re-exports for convenience
pub use types::*;
