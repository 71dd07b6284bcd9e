//! Lavajato - client for the lava-jato car-wash booking service
//!
//! This library provides the typed REST client (transport adapter and
//! resource services), the shared session, location resolution, and the
//! screen controllers the `lavajato` command-line tool is built on.

// Core modules
pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod geolocation;
pub mod models;
pub mod screens;
pub mod services;
pub mod session;
pub mod state;
pub mod utils;

// Re-exports for convenience
pub use api::{ApiClient, HttpBackend, ReqwestBackend, TransportError};
pub use app::{App, Services};
pub use config::Config;
pub use session::{SessionHolder, SessionStore};
