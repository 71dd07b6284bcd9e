//! Signup screen controller.

use super::describe_error;
use super::login::capitalize;
use crate::api::HttpBackend;
use crate::app::Services;
use crate::models::Session;
use crate::services::AuthError;
use crate::state::{ScreenAction, ScreenId, ViewState};
use crate::utils::Registration;

#[derive(Debug, Default)]
pub struct RegisterScreen {
    pub form: Registration,
    state: ViewState<Session>,
}

impl RegisterScreen {
    pub fn new(form: Registration) -> Self {
        Self {
            form,
            state: ViewState::Idle,
        }
    }

    pub fn state(&self) -> &ViewState<Session> {
        &self.state
    }

    /// Submit the form. Local validation failures show up as `Failed`
    /// without any request being made.
    pub async fn submit<B: HttpBackend>(&mut self, services: &Services<B>) -> ScreenAction {
        if let Err(e) = self.form.validate() {
            self.state.fail(capitalize(&e.to_string()));
            return ScreenAction::None;
        }

        self.state.begin();
        let result = services.auth.register(&self.form).await;
        let succeeded = result.is_ok();
        self.state.finish(result, |e| match e {
            AuthError::Validation(v) => capitalize(&v.to_string()),
            AuthError::Transport(t) => describe_error(t),
        });

        if succeeded {
            self.form.password.clear();
            self.form.confirm_password.clear();
            ScreenAction::Navigate(ScreenId::WasheryList)
        } else {
            ScreenAction::None
        }
    }
}
