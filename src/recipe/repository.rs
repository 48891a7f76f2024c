//! Recipe repository for Ladle.

use sqlx::SqlitePool;

use super::types::{NewRecipe, Recipe};
use crate::{LadleError, Result};

/// Repository for recipe operations.
///
/// Recipes are read-only after creation; there are no update or delete
/// operations.
pub struct RecipeRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> RecipeRepository<'a> {
    /// Create a new RecipeRepository with the given database pool reference.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new recipe.
    ///
    /// Returns the created recipe with the assigned ID.
    pub async fn create(&self, new_recipe: &NewRecipe) -> Result<Recipe> {
        let result = sqlx::query(
            "INSERT INTO recipes (title, instructions, minutes_to_complete, owner_id)
             VALUES (?, ?, ?, ?)",
        )
        .bind(&new_recipe.title)
        .bind(&new_recipe.instructions)
        .bind(new_recipe.minutes_to_complete)
        .bind(new_recipe.owner_id)
        .execute(self.pool)
        .await
        .map_err(|e| LadleError::Database(e.to_string()))?;

        let id = result.last_insert_rowid();
        self.get_by_id(id)
            .await?
            .ok_or_else(|| LadleError::NotFound("recipe".to_string()))
    }

    /// Get a recipe by ID.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Recipe>> {
        let result = sqlx::query_as::<_, Recipe>(
            "SELECT id, title, instructions, minutes_to_complete, owner_id, created_at
             FROM recipes WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| LadleError::Database(e.to_string()))?;

        Ok(result)
    }

    /// List recipes owned by a user, in insertion order.
    pub async fn list_by_owner(&self, owner_id: i64) -> Result<Vec<Recipe>> {
        let recipes = sqlx::query_as::<_, Recipe>(
            "SELECT id, title, instructions, minutes_to_complete, owner_id, created_at
             FROM recipes WHERE owner_id = ? ORDER BY id",
        )
        .bind(owner_id)
        .fetch_all(self.pool)
        .await
        .map_err(|e| LadleError::Database(e.to_string()))?;

        Ok(recipes)
    }

    /// Count all recipes.
    pub async fn count(&self) -> Result<i64> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM recipes")
            .fetch_one(self.pool)
            .await
            .map_err(|e| LadleError::Database(e.to_string()))?;
        Ok(count.0)
    }
}
