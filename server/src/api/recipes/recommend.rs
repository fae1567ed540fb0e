use crate::api::{ApiError, ErrorResponse};
use crate::AppState;
use axum::{extract::State, Json};
use cookbook_core::Recommendation;

#[utoipa::path(
    get,
    path = "/api/recipes/recommendation",
    tag = "recipes",
    responses(
        (status = 200, description = "Recommended recipe, or a placeholder when there are none", body = Recommendation),
        (status = 500, description = "Database error", body = ErrorResponse)
    )
)]
pub async fn recommend_recipe(
    State(service): State<AppState>,
) -> Result<Json<Recommendation>, ApiError> {
    Ok(Json(service.recommend().await?))
}
