//! Recipe types for Ladle.

/// A recipe record.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Recipe {
    /// Recipe ID.
    pub id: i64,
    /// Recipe title.
    pub title: String,
    /// Preparation instructions.
    pub instructions: String,
    /// Time to complete, in minutes.
    pub minutes_to_complete: i64,
    /// Owning user ID, fixed at creation.
    pub owner_id: i64,
    /// When the recipe was created.
    pub created_at: String,
}

/// New recipe for creation.
#[derive(Debug, Clone)]
pub struct NewRecipe {
    /// Recipe title.
    pub title: String,
    /// Preparation instructions.
    pub instructions: String,
    /// Time to complete, in minutes.
    pub minutes_to_complete: i64,
    /// Owning user ID.
    pub owner_id: i64,
}

impl NewRecipe {
    /// Create a new recipe.
    pub fn new(
        title: impl Into<String>,
        instructions: impl Into<String>,
        minutes_to_complete: i64,
        owner_id: i64,
    ) -> Self {
        Self {
            title: title.into(),
            instructions: instructions.into(),
            minutes_to_complete,
            owner_id,
        }
    }
}
