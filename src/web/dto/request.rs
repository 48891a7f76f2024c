//! Request DTOs for the Web API.
//!
//! Required fields are deserialized as `Option` so that a missing key
//! surfaces as a 422 with a message rather than a deserialization failure.

use serde::Deserialize;

/// Signup request.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    /// Username.
    #[serde(default)]
    pub username: Option<String>,
    /// Password.
    #[serde(default)]
    pub password: Option<String>,
    /// Self-introduction (optional).
    #[serde(default)]
    pub bio: Option<String>,
    /// Avatar image URL (optional).
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Login request.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Username.
    #[serde(default)]
    pub username: Option<String>,
    /// Password.
    #[serde(default)]
    pub password: Option<String>,
}

/// Recipe creation request.
#[derive(Debug, Deserialize)]
pub struct CreateRecipeRequest {
    /// Recipe title.
    #[serde(default)]
    pub title: Option<String>,
    /// Preparation instructions.
    #[serde(default)]
    pub instructions: Option<String>,
    /// Time to complete, in minutes.
    #[serde(default)]
    pub minutes_to_complete: Option<i64>,
}
