//! Profile reads and mutations for the logged-in user.
//!
//! Every successful call writes its result back into the session holder,
//! replacing the user record as a whole. This is the only place outside
//! `AuthService` that mutates the session.

use super::to_body;
use crate::api::{ApiClient, HttpBackend, Query, TransportError};
use crate::models::user::{PasswordChangeRequest, PhotoUploadRequest};
use crate::models::{ProfileUpdate, User};
use crate::utils::photo;
use reqwest::Method;
use serde_json::Value;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Service for `/auth/profile` and `/auth/password`. All calls send the bearer token.
pub struct ProfileService<B> {
    api: Arc<ApiClient<B>>,
}

impl<B> Clone for ProfileService<B> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
        }
    }
}

impl<B: HttpBackend> ProfileService<B> {
    pub fn new(api: Arc<ApiClient<B>>) -> Self {
        Self { api }
    }

    /// Fetch the logged-in user's profile.
    pub async fn current_user(&self) -> Result<User, TransportError> {
        let user: User = self
            .api
            .send_json(Method::GET, "/auth/profile", None, &Query::new(), true)
            .await
            .inspect_err(|e| error!("Failed to fetch profile: {}", e))?;
        self.store(&user);
        Ok(user)
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<User, TransportError> {
        let body = to_body(update)?;
        let user: User = self
            .api
            .send_json(Method::PUT, "/auth/profile", Some(body), &Query::new(), true)
            .await
            .inspect_err(|e| error!("Failed to update profile: {}", e))?;
        self.store(&user);
        Ok(user)
    }

    /// Change the password.
    ///
    /// Returns the user record when the server sends one back; an empty or
    /// message-only response leaves the session untouched.
    pub async fn change_password(
        &self,
        current_password: &str,
        new_password: &str,
    ) -> Result<Option<User>, TransportError> {
        let body = to_body(&PasswordChangeRequest {
            current_password,
            new_password,
        })?;
        let value = self
            .api
            .send(Method::PUT, "/auth/password", Some(body), &Query::new(), true)
            .await
            .inspect_err(|e| error!("Failed to change password: {}", e))?;
        self.store_optional(value)
    }

    /// Upload a profile photo read from `path`, sent inline as a base64 data URI.
    pub async fn upload_photo(&self, path: &Path) -> Result<User, TransportError> {
        let photo = photo::read_as_data_uri(path).await.map_err(|e| {
            error!("Failed to read photo {:?}: {}", path, e);
            TransportError::network(format!("could not read {}: {}", path.display(), e))
        })?;
        info!("Uploading profile photo ({} bytes encoded)", photo.len());

        let body = to_body(&PhotoUploadRequest { photo })?;
        let user: User = self
            .api
            .send_json(Method::PUT, "/auth/profile/photo", Some(body), &Query::new(), true)
            .await
            .inspect_err(|e| error!("Failed to upload profile photo: {}", e))?;
        self.store(&user);
        Ok(user)
    }

    /// Remove the profile photo. Same empty-response rule as `change_password`.
    pub async fn remove_photo(&self) -> Result<Option<User>, TransportError> {
        let value = self
            .api
            .send(Method::DELETE, "/auth/profile/photo", None, &Query::new(), true)
            .await
            .inspect_err(|e| error!("Failed to remove profile photo: {}", e))?;
        self.store_optional(value)
    }

    fn store(&self, user: &User) {
        if self.api.session().replace_user(user.clone()).is_none() {
            warn!("Profile response for user {} arrived with no active session", user.id);
        }
    }

    /// Write back a response that may or may not be a user record.
    fn store_optional(&self, value: Value) -> Result<Option<User>, TransportError> {
        if value.is_null() {
            return Ok(None);
        }
        match serde_json::from_value::<User>(value) {
            Ok(user) => {
                self.store(&user);
                Ok(Some(user))
            }
            Err(e) => {
                debug!("Response carries no user record ({}), session unchanged", e);
                Ok(None)
            }
        }
    }
}
