use serde::{Deserialize, Serialize};
use std::fmt;

/// The authenticated user and their bearer token.
///
/// Returned by login and registration; JSON keys follow the backend.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(rename = "id")]
    pub user_id: i64,
    #[serde(rename = "nome")]
    pub display_name: String,
    pub email: String,
    pub token: String,
    #[serde(rename = "fotoPerfil", default, skip_serializing_if = "Option::is_none")]
    pub profile_photo: Option<String>,
}

impl Session {
    /// Build the session that follows a profile call: the user record comes
    /// from the response, the token from the response if it sent one.
    pub fn from_user(user: User, current_token: String) -> Self {
        Self {
            user_id: user.id,
            display_name: user.name,
            email: user.email,
            token: user.token.unwrap_or(current_token),
            profile_photo: user.profile_photo,
        }
    }

    pub fn user(&self) -> User {
        User {
            id: self.user_id,
            name: self.display_name.clone(),
            email: self.email.clone(),
            profile_photo: self.profile_photo.clone(),
            token: None,
        }
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("user_id", &self.user_id)
            .field("display_name", &self.display_name)
            .field("email", &self.email)
            .field("token", &crate::session::mask_token(&self.token))
            .field("profile_photo", &self.profile_photo.is_some())
            .finish()
    }
}

/// User record returned by the profile endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    #[serde(rename = "fotoPerfil", default, skip_serializing_if = "Option::is_none")]
    pub profile_photo: Option<String>,
    /// Some profile responses re-issue the token
    #[serde(default, skip_serializing)]
    pub token: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    #[serde(rename = "senha")]
    pub password: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest<'a> {
    #[serde(rename = "nome")]
    pub name: &'a str,
    pub email: &'a str,
    #[serde(rename = "senha")]
    pub password: &'a str,
}

/// Body of `PUT /auth/profile`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileUpdate {
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PasswordChangeRequest<'a> {
    #[serde(rename = "senhaAtual")]
    pub current_password: &'a str,
    #[serde(rename = "novaSenha")]
    pub new_password: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct PhotoUploadRequest {
    #[serde(rename = "fotoPerfil")]
    pub photo: String,
}
