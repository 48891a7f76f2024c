//! Recipe handlers for the Web API.

use axum::{extract::State, http::StatusCode, Json};
use axum_extra::extract::cookie::CookieJar;
use std::sync::Arc;

use crate::recipe::{NewRecipe, RecipeService};
use crate::web::dto::{CreateRecipeRequest, RecipeResponse, RecipeSummary};
use crate::web::error::ApiError;
use crate::web::handlers::auth::{current_user, AppState};

/// GET /recipes - List the authenticated user's recipes.
pub async fn list_recipes(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
) -> Result<Json<Vec<RecipeSummary>>, ApiError> {
    let user = current_user(&state, &jar).await?;

    let service = RecipeService::new(&state.db);
    let recipes = service.list_for_owner(user.id).await.map_err(|e| {
        tracing::error!("Failed to list recipes: {}", e);
        ApiError::internal("Failed to list recipes")
    })?;

    let summaries = recipes.into_iter().map(RecipeSummary::from).collect();

    Ok(Json(summaries))
}

/// POST /recipes - Create a recipe owned by the authenticated user.
pub async fn create_recipe(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Json(req): Json<CreateRecipeRequest>,
) -> Result<(StatusCode, Json<RecipeResponse>), ApiError> {
    let user = current_user(&state, &jar).await?;

    // Validate input
    let (title, instructions, minutes) =
        match (req.title, req.instructions, req.minutes_to_complete) {
            (Some(t), Some(i), Some(m)) => (t, i, m),
            _ => {
                return Err(ApiError::unprocessable(
                    "Title, instructions, and minutes_to_complete are required.",
                ))
            }
        };

    let service = RecipeService::new(&state.db);
    let recipe = service
        .create(&NewRecipe::new(title, instructions, minutes, user.id))
        .await
        .map_err(ApiError::from)?;

    tracing::info!(
        recipe_id = recipe.id,
        owner_id = recipe.owner_id,
        "Recipe created"
    );

    Ok((StatusCode::CREATED, Json(RecipeResponse::from(recipe))))
}
