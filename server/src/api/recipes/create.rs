use crate::api::{ApiError, ErrorResponse};
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use cookbook_core::{NewRecipe, Recipe};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateRecipeRequest {
    /// 1 to 200 characters.
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/recipes",
    tag = "recipes",
    request_body = CreateRecipeRequest,
    responses(
        (status = 201, description = "Recipe created successfully", body = Recipe),
        (status = 400, description = "Invalid request", body = ErrorResponse)
    )
)]
pub async fn create_recipe(
    State(service): State<AppState>,
    Json(request): Json<CreateRecipeRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let new_recipe = NewRecipe::new(request.title, request.description)?;
    let recipe = service.create_recipe(new_recipe).await?;

    Ok((StatusCode::CREATED, Json(recipe)))
}
