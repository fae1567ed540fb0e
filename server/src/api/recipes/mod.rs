pub mod create;
pub mod delete;
pub mod list;
pub mod recommend;

use crate::AppState;
use axum::routing::{delete, get};
use axum::Router;
use cookbook_core::{Recipe, Recommendation};
use utoipa::OpenApi;

/// Returns the router for /api/recipes endpoints (mounted at /api/recipes)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list::list_recipes).post(create::create_recipe))
        .route("/recommendation", get(recommend::recommend_recipe))
        .route("/{id}", delete(delete::delete_recipe))
}

#[derive(OpenApi)]
#[openapi(
    paths(
        create::create_recipe,
        list::list_recipes,
        delete::delete_recipe,
        recommend::recommend_recipe,
    ),
    components(schemas(create::CreateRecipeRequest, Recipe, Recommendation))
)]
pub struct ApiDoc;
