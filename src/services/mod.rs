//! Resource services.
//!
//! One service per backend resource, each a typed wrapper over the shared
//! `ApiClient`. Every method issues exactly one request and resolves to a
//! single `Result`; failures are logged here and handed back to the caller
//! as values.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │             Screen controllers / CLI            │
//! └─────────────────────┬───────────────────────────┘
//!                       │
//!                       ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                 Services Layer                      │
//! │  ┌────────────────┐ ┌────────────────┐              │
//! │  │ WasheryService │ │ CatalogService │              │
//! │  └────────────────┘ └────────────────┘              │
//! │  ┌────────────────┐ ┌────────────────┐              │
//! │  │ AuthService    │ │ ProfileService │──▶ session   │
//! │  └────────────────┘ └────────────────┘              │
//! └─────────────────────┬───────────────────────────────┘
//!                       │
//!                       ▼
//! ┌──────────────────────────────────────────────────┐
//! │        ApiClient → HttpBackend (reqwest)         │
//! └──────────────────────────────────────────────────┘
//! ```

pub mod auth_service;
pub mod catalog_service;
pub mod profile_service;
pub mod washery_service;

pub use auth_service::{AuthError, AuthService};
pub use catalog_service::CatalogService;
pub use profile_service::ProfileService;
pub use washery_service::WasheryService;

use crate::api::TransportError;
use serde::Serialize;
use serde_json::Value;

/// Encode a request body.
fn to_body<T: Serialize>(value: &T) -> Result<Value, TransportError> {
    serde_json::to_value(value)
        .map_err(|e| TransportError::network(format!("could not encode request body: {}", e)))
}
