//! User registration for Ladle.
//!
//! This module provides the signup functionality behind POST /signup.

use thiserror::Error;
use tracing::info;

use crate::auth::{hash_password, PasswordError};
use crate::db::{NewUser, User, UserRepository};
use crate::LadleError;

/// Registration-specific errors.
#[derive(Error, Debug)]
pub enum RegistrationError {
    /// Username or password missing/empty.
    #[error("username and password are required")]
    MissingCredentials,

    /// Username already exists.
    #[error("username already exists")]
    UsernameExists,

    /// Password hashing failed.
    #[error("password error: {0}")]
    Password(#[from] PasswordError),

    /// Database error.
    #[error("database error: {0}")]
    Database(String),
}

/// Registration request data.
#[derive(Debug, Clone)]
pub struct RegistrationRequest {
    /// Desired username.
    pub username: String,
    /// Password (plaintext; hashed before storage, never persisted as-is).
    pub password: String,
    /// Optional self-introduction.
    pub bio: Option<String>,
    /// Optional avatar image URL.
    pub image_url: Option<String>,
}

impl RegistrationRequest {
    /// Create a new registration request.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            bio: None,
            image_url: None,
        }
    }

    /// Set the bio text.
    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = Some(bio.into());
        self
    }

    /// Set the image URL.
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }
}

/// Register a new user.
///
/// This function:
/// 1. Validates that username and password are present
/// 2. Hashes the password
/// 3. Creates the user in the database, translating the store's
///    uniqueness violation into `UsernameExists`
///
/// # Returns
///
/// The newly created user on success, or a `RegistrationError` on failure.
pub async fn register(
    repo: &UserRepository<'_>,
    request: RegistrationRequest,
) -> std::result::Result<User, RegistrationError> {
    // 1. Validate required fields
    if request.username.is_empty() || request.password.is_empty() {
        return Err(RegistrationError::MissingCredentials);
    }

    // 2. Hash the password
    let password_hash = hash_password(&request.password)?;

    // 3. Create the user; the UNIQUE constraint is the arbiter for
    //    concurrent signups with the same username
    let mut new_user = NewUser::new(&request.username, &password_hash);

    if let Some(ref bio) = request.bio {
        new_user = new_user.with_bio(bio);
    }

    if let Some(ref image_url) = request.image_url {
        new_user = new_user.with_image_url(image_url);
    }

    let user = repo.create(&new_user).await.map_err(|e| match e {
        LadleError::Conflict(_) => RegistrationError::UsernameExists,
        other => RegistrationError::Database(other.to_string()),
    })?;

    info!(
        username = %user.username,
        user_id = user.id,
        "New user registered"
    );

    Ok(user)
}
