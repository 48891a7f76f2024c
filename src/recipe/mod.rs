//! Recipe module for Ladle.
//!
//! Owner-scoped recipe records: create and list only.

mod repository;
mod service;
mod types;

pub use repository::RecipeRepository;
pub use service::RecipeService;
pub use types::{NewRecipe, Recipe};
