//! HTTP transport adapter.
//!
//! ```text
//! ┌──────────────────────────────┐
//! │  Resource services           │
//! └──────────────┬───────────────┘
//!                │ send(method, path, body, query, auth)
//!                ▼
//! ┌──────────────────────────────┐     ┌───────────────┐
//! │  ApiClient                   │────▶│ SessionHolder │ (token read)
//! │  URL + query + auth header   │     └───────────────┘
//! │  non-2xx → TransportError    │
//! └──────────────┬───────────────┘
//!                │ HttpRequest
//!                ▼
//! ┌──────────────────────────────┐
//! │  HttpBackend (reqwest/fake)  │
//! └──────────────────────────────┘
//! ```

pub mod backend;
pub mod client;
pub mod error;
pub mod query;

pub use backend::{HttpBackend, HttpRequest, HttpResponse, ReqwestBackend};
pub use client::ApiClient;
pub use error::TransportError;
pub use query::Query;
