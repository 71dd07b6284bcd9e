//! Screen state and navigation.
//!
//! Each screen owns a `ViewState` for its request and reports what should
//! happen next through a `ScreenAction`, instead of mutating shared state.
//!
//! ```text
//!   Idle ──begin──▶ Loading ──finish(Ok)──▶ Loaded(T)
//!                      │
//!                      └────finish(Err)──▶ Failed(msg) ──begin──▶ Loading …
//! ```

pub mod view;

pub use view::ViewState;

/// Screens a controller can send the user to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenId {
    Login,
    Register,
    WasheryList,
    WasheryDetail(i64),
    Profile,
    Vehicles,
}

/// What a screen wants to happen after handling input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ScreenAction {
    /// Stay on the current screen.
    #[default]
    None,
    /// Go to another screen.
    Navigate(ScreenId),
    /// Show a message to the user.
    ShowMessage { title: String, content: String },
}

impl ScreenAction {
    pub fn message(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self::ShowMessage {
            title: title.into(),
            content: content.into(),
        }
    }
}
