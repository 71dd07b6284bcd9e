//! Screen controllers.
//!
//! A controller binds user input to service calls. It owns a `ViewState`
//! for its request, turns failures into user-facing text, and returns a
//! `ScreenAction` saying where to go next. Rendering is left to the caller.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │   CLI command                                │
//! └───────────────────────┬──────────────────────┘
//!                         │ input
//!                         ▼
//! ┌──────────────────────────────────────────────┐
//! │   Screen controller                          │
//! │   - validate input locally                   │
//! │   - ViewState: Idle → Loading → Loaded/Failed│
//! │   - returns ScreenAction                     │
//! └───────────────────────┬──────────────────────┘
//!                         │ one request per action
//!                         ▼
//! ┌──────────────────────────────────────────────┐
//! │   Services (app::Services)                   │
//! └──────────────────────────────────────────────┘
//! ```

pub mod login;
pub mod profile;
pub mod register;
pub mod vehicle;
pub mod washery_detail;
pub mod washery_list;

pub use login::LoginScreen;
pub use profile::ProfileScreen;
pub use register::RegisterScreen;
pub use vehicle::{Vehicle, VehicleScreen};
pub use washery_detail::{WasheryDetail, WasheryDetailScreen};
pub use washery_list::{Listing, ListingMode, WasheryListScreen};

use crate::api::TransportError;

/// User-facing text for a failed request.
pub fn describe_error(err: &TransportError) -> String {
    match err.status_code {
        None => format!("Could not reach the server ({}).", err.message),
        Some(401 | 403) => "Your session has expired. Please log in again.".to_string(),
        Some(404) => "Not found.".to_string(),
        Some(code) if code >= 500 => {
            "The server is unavailable right now. Try again later.".to_string()
        }
        Some(_) => err.message.clone(),
    }
}
