//! Profile screen controller: view, edit, password change, photo.
//!
//! Requires a session. Without one, or when the server rejects the token,
//! every action sends the user to the login screen.

use super::describe_error;
use super::login::capitalize;
use crate::api::{HttpBackend, TransportError};
use crate::app::Services;
use crate::models::{ProfileUpdate, User};
use crate::state::{ScreenAction, ScreenId, ViewState};
use crate::utils::validation::{require, validate_email};
use crate::utils::{PasswordChange, ValidationError};
use std::path::Path;

#[derive(Debug, Default)]
pub struct ProfileScreen {
    state: ViewState<User>,
}

impl ProfileScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ViewState<User> {
        &self.state
    }

    pub async fn load<B: HttpBackend>(&mut self, services: &Services<B>) -> ScreenAction {
        if !services.session.is_authenticated() {
            return ScreenAction::Navigate(ScreenId::Login);
        }
        self.state.begin();
        let result = services.profile.current_user().await;
        self.settle(result, None)
    }

    /// Save a new name and email.
    pub async fn save<B: HttpBackend>(
        &mut self,
        services: &Services<B>,
        name: &str,
        email: &str,
    ) -> ScreenAction {
        if !services.session.is_authenticated() {
            return ScreenAction::Navigate(ScreenId::Login);
        }
        if let Err(e) = require("name", name).and_then(|()| validate_email(email)) {
            return self.reject(&e);
        }

        let update = ProfileUpdate {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
        };
        self.state.begin();
        let result = services.profile.update_profile(&update).await;
        self.settle(result, Some("Profile updated."))
    }

    pub async fn change_password<B: HttpBackend>(
        &mut self,
        services: &Services<B>,
        form: &PasswordChange,
    ) -> ScreenAction {
        if !services.session.is_authenticated() {
            return ScreenAction::Navigate(ScreenId::Login);
        }
        if let Err(e) = form.validate() {
            return self.reject(&e);
        }

        let previous = self.state.loaded().cloned();
        self.state.begin();
        let result = services
            .profile
            .change_password(&form.current_password, &form.new_password)
            .await
            .map(|user| user.or(previous));
        self.settle_optional(result, "Password changed.")
    }

    pub async fn upload_photo<B: HttpBackend>(
        &mut self,
        services: &Services<B>,
        path: &Path,
    ) -> ScreenAction {
        if !services.session.is_authenticated() {
            return ScreenAction::Navigate(ScreenId::Login);
        }
        self.state.begin();
        let result = services.profile.upload_photo(path).await;
        self.settle(result, Some("Photo updated."))
    }

    pub async fn remove_photo<B: HttpBackend>(&mut self, services: &Services<B>) -> ScreenAction {
        if !services.session.is_authenticated() {
            return ScreenAction::Navigate(ScreenId::Login);
        }
        let previous = self.state.loaded().cloned();
        self.state.begin();
        let result = services
            .profile
            .remove_photo()
            .await
            .map(|user| user.or(previous));
        self.settle_optional(result, "Photo removed.")
    }

    fn reject(&mut self, err: &ValidationError) -> ScreenAction {
        self.state.fail(capitalize(&err.to_string()));
        ScreenAction::None
    }

    fn settle(&mut self, result: Result<User, TransportError>, success: Option<&str>) -> ScreenAction {
        let action = match &result {
            Ok(_) => success
                .map(|text| ScreenAction::message("Profile", text))
                .unwrap_or_default(),
            Err(e) if e.is_unauthorized() => ScreenAction::Navigate(ScreenId::Login),
            Err(_) => ScreenAction::None,
        };
        self.state.finish(result, describe_error);
        action
    }

    fn settle_optional(
        &mut self,
        result: Result<Option<User>, TransportError>,
        success: &str,
    ) -> ScreenAction {
        match result {
            Ok(Some(user)) => self.settle(Ok(user), Some(success)),
            Ok(None) => {
                self.state.reset();
                ScreenAction::message("Profile", success)
            }
            Err(e) => self.settle(Err(e), None),
        }
    }
}
