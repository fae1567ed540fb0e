use crate::api::{ApiError, ErrorResponse};
use crate::AppState;
use axum::{extract::State, Json};
use cookbook_core::Recipe;

#[utoipa::path(
    get,
    path = "/api/recipes",
    tag = "recipes",
    responses(
        (status = 200, description = "All recipes, newest first", body = Vec<Recipe>),
        (status = 500, description = "Database error", body = ErrorResponse)
    )
)]
pub async fn list_recipes(State(service): State<AppState>) -> Result<Json<Vec<Recipe>>, ApiError> {
    Ok(Json(service.list_recipes().await?))
}
