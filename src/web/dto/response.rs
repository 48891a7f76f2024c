//! Response DTOs for the Web API.

use serde::Serialize;

use crate::recipe::Recipe;

/// Simple message response.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// Human-readable message.
    pub message: String,
}

impl MessageResponse {
    /// Create a new message response.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    /// Username of the logged-in user.
    pub username: String,
}

/// Current session response (for GET /check_session).
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    /// User ID.
    pub id: i64,
    /// Username.
    pub username: String,
}

/// Recipe summary in list responses.
#[derive(Debug, Serialize)]
pub struct RecipeSummary {
    /// Recipe title.
    pub title: String,
    /// Preparation instructions.
    pub instructions: String,
    /// Time to complete, in minutes.
    pub minutes_to_complete: i64,
}

impl From<Recipe> for RecipeSummary {
    fn from(recipe: Recipe) -> Self {
        Self {
            title: recipe.title,
            instructions: recipe.instructions,
            minutes_to_complete: recipe.minutes_to_complete,
        }
    }
}

/// Full recipe record (for POST /recipes).
#[derive(Debug, Serialize)]
pub struct RecipeResponse {
    /// Recipe ID.
    pub id: i64,
    /// Recipe title.
    pub title: String,
    /// Preparation instructions.
    pub instructions: String,
    /// Time to complete, in minutes.
    pub minutes_to_complete: i64,
    /// Owning user ID.
    pub owner_id: i64,
}

impl From<Recipe> for RecipeResponse {
    fn from(recipe: Recipe) -> Self {
        Self {
            id: recipe.id,
            title: recipe.title,
            instructions: recipe.instructions,
            minutes_to_complete: recipe.minutes_to_complete,
            owner_id: recipe.owner_id,
        }
    }
}
