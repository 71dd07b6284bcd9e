//! Per-screen request state.

/// What a screen is showing for its one outstanding request.
///
/// A single enum rather than separate `loading`/`error` flags, so a screen
/// can't be loading and failed at the same time.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    /// Nothing requested yet.
    Idle,
    /// A request is in flight.
    Loading,
    /// The last request succeeded.
    Loaded(T),
    /// The last request failed; holds the user-facing message.
    Failed(String),
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> ViewState<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Enter `Loading`, dropping whatever was shown before.
    pub fn begin(&mut self) {
        *self = Self::Loading;
    }

    /// Leave `Loading` with the outcome of the request.
    pub fn finish<E>(&mut self, result: Result<T, E>, describe: impl FnOnce(&E) -> String) {
        *self = match result {
            Ok(value) => Self::Loaded(value),
            Err(e) => Self::Failed(describe(&e)),
        };
    }

    /// Record a failure that happened before any request was made.
    pub fn fail(&mut self, message: impl Into<String>) {
        *self = Self::Failed(message.into());
    }

    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle() {
        let mut state: ViewState<u32> = ViewState::default();
        assert!(state.is_idle());

        state.begin();
        assert!(state.is_loading());
        assert_eq!(state.error(), None);

        state.finish(Ok::<_, String>(3), |e| e.clone());
        assert_eq!(state.loaded(), Some(&3));

        state.begin();
        assert_eq!(state.loaded(), None);
        state.finish(Err("offline".to_string()), |e| format!("failed: {}", e));
        assert_eq!(state.error(), Some("failed: offline"));
        assert!(!state.is_loading());

        state.reset();
        assert!(state.is_idle());
    }
}
