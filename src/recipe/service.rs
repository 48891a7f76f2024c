//! Recipe service for Ladle.
//!
//! This module provides high-level recipe operations with business logic:
//! input validation and owner-scoped access.

use crate::db::Database;
use crate::{LadleError, Result};

use super::repository::RecipeRepository;
use super::types::{NewRecipe, Recipe};

/// Service for recipe operations.
pub struct RecipeService<'a> {
    db: &'a Database,
}

impl<'a> RecipeService<'a> {
    /// Create a new RecipeService with the given database reference.
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Create a recipe.
    ///
    /// Validates the request and creates the recipe in the database. The
    /// owner id must come from the resolved session of the caller.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Title is empty
    /// - Instructions are empty
    /// - minutes_to_complete is not positive
    pub async fn create(&self, new_recipe: &NewRecipe) -> Result<Recipe> {
        let title = new_recipe.title.trim();
        if title.is_empty() {
            return Err(LadleError::Validation("title is required".to_string()));
        }

        let instructions = new_recipe.instructions.trim();
        if instructions.is_empty() {
            return Err(LadleError::Validation(
                "instructions are required".to_string(),
            ));
        }

        if new_recipe.minutes_to_complete <= 0 {
            return Err(LadleError::Validation(
                "minutes_to_complete must be a positive number".to_string(),
            ));
        }

        let repo = RecipeRepository::new(self.db.pool());
        let recipe = repo
            .create(&NewRecipe::new(
                title,
                instructions,
                new_recipe.minutes_to_complete,
                new_recipe.owner_id,
            ))
            .await?;

        Ok(recipe)
    }

    /// List recipes owned by a user.
    ///
    /// Returns only recipes whose owner_id matches, in insertion order.
    pub async fn list_for_owner(&self, owner_id: i64) -> Result<Vec<Recipe>> {
        let repo = RecipeRepository::new(self.db.pool());
        repo.list_by_owner(owner_id).await
    }
}
