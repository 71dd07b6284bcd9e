//! Login, signup and logout.

use super::to_body;
use crate::api::{ApiClient, HttpBackend, Query, TransportError};
use crate::models::user::{LoginRequest, RegisterRequest};
use crate::models::Session;
use crate::utils::validation::{require, validate_email};
use crate::utils::{Registration, ValidationError};
use reqwest::Method;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info};

/// Why an auth call failed: rejected locally, or by the server.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Service for `/api/auth` endpoints.
///
/// The only writer of a fresh session into the holder.
pub struct AuthService<B> {
    api: Arc<ApiClient<B>>,
}

impl<B> Clone for AuthService<B> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
        }
    }
}

impl<B: HttpBackend> AuthService<B> {
    pub fn new(api: Arc<ApiClient<B>>) -> Self {
        Self { api }
    }

    /// Create an account and start a session for it.
    ///
    /// The form is validated first; a mismatched confirmation or a blank
    /// field fails without any request being made.
    pub async fn register(&self, form: &Registration) -> Result<Session, AuthError> {
        form.validate()?;

        let body = to_body(&RegisterRequest {
            name: form.name.trim(),
            email: form.email.trim(),
            password: &form.password,
        })?;
        let session: Session = self
            .api
            .send_json(Method::POST, "/api/auth/cadastro", Some(body), &Query::new(), false)
            .await
            .inspect_err(|e| error!("Registration failed for {}: {}", form.email.trim(), e))?;

        self.api.session().set(session.clone());
        Ok(session)
    }

    /// Log in. On failure the session holder is left as it was.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        validate_email(email)?;
        require("password", password)?;

        let body = to_body(&LoginRequest {
            email: email.trim(),
            password,
        })?;
        let session: Session = self
            .api
            .send_json(Method::POST, "/api/auth/login", Some(body), &Query::new(), false)
            .await
            .inspect_err(|e| error!("Login failed for {}: {}", email.trim(), e))?;

        self.api.session().set(session.clone());
        Ok(session)
    }

    /// Forget the session locally. The backend has no logout endpoint.
    pub fn logout(&self) {
        info!("Logging out");
        self.api.session().clear();
    }
}
