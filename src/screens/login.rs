//! Login screen controller.

use super::describe_error;
use crate::api::HttpBackend;
use crate::app::Services;
use crate::models::Session;
use crate::services::AuthError;
use crate::state::{ScreenAction, ScreenId, ViewState};

/// Login form and its request state.
#[derive(Default)]
pub struct LoginScreen {
    pub email: String,
    pub password: String,
    state: ViewState<Session>,
}

impl LoginScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_credentials(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            state: ViewState::Idle,
        }
    }

    pub fn state(&self) -> &ViewState<Session> {
        &self.state
    }

    /// Submit the form. On success the password is cleared and the user is
    /// sent to the washery list.
    pub async fn submit<B: HttpBackend>(&mut self, services: &Services<B>) -> ScreenAction {
        self.state.begin();
        let result = services.auth.login(&self.email, &self.password).await;
        let succeeded = result.is_ok();
        self.state.finish(result, describe_login_error);

        if succeeded {
            self.password.clear();
            ScreenAction::Navigate(ScreenId::WasheryList)
        } else {
            ScreenAction::None
        }
    }
}

fn describe_login_error(err: &AuthError) -> String {
    match err {
        AuthError::Validation(e) => capitalize(&e.to_string()),
        AuthError::Transport(e) if e.is_unauthorized() || e.status_code == Some(400) => {
            "Invalid email or password.".to_string()
        }
        AuthError::Transport(e) => describe_error(e),
    }
}

pub(crate) fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect::<String>() + ".",
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::TransportError;
    use crate::utils::ValidationError;

    #[test]
    fn test_login_error_text() {
        assert_eq!(
            describe_login_error(&AuthError::Transport(TransportError::http(401, "Bad credentials"))),
            "Invalid email or password."
        );
        assert_eq!(
            describe_login_error(&AuthError::Validation(ValidationError::InvalidEmail)),
            "Email address is not valid."
        );
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("passwords do not match"), "Passwords do not match.");
        assert_eq!(capitalize(""), "");
    }
}
