//! GraphQL transport. Resolvers call the same service as the REST handlers.

use async_graphql::http::GraphiQLSource;
use async_graphql::{Context, EmptySubscription, Object, Schema, SimpleObject};
use async_graphql_axum::GraphQL;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::Router;
use cookbook_core::{NewRecipe, Recipe, RecipeId, Recommendation};

use crate::AppState;

pub const PATH: &str = "/graphql";

pub type RecipeSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "Recipe")]
pub struct RecipeObject {
    pub id: RecipeId,
    pub title: String,
    pub description: Option<String>,
    /// RFC 3339 timestamp.
    pub created_at: String,
}

impl From<Recipe> for RecipeObject {
    fn from(recipe: Recipe) -> Self {
        Self {
            id: recipe.id,
            title: recipe.title,
            description: recipe.description,
            created_at: recipe.created_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "Recommendation")]
pub struct RecommendationObject {
    pub recommended_id: Option<RecipeId>,
    pub title: String,
    pub reason: String,
}

impl From<Recommendation> for RecommendationObject {
    fn from(rec: Recommendation) -> Self {
        Self {
            recommended_id: rec.recommended_id,
            title: rec.title,
            reason: rec.reason,
        }
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// All recipes, newest first.
    async fn recipes(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<RecipeObject>> {
        let service = ctx.data::<AppState>()?;
        let recipes = service.list_recipes().await?;
        Ok(recipes.into_iter().map(RecipeObject::from).collect())
    }

    async fn recommend_recipe(
        &self,
        ctx: &Context<'_>,
    ) -> async_graphql::Result<RecommendationObject> {
        let service = ctx.data::<AppState>()?;
        Ok(service.recommend().await?.into())
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn create_recipe(
        &self,
        ctx: &Context<'_>,
        title: String,
        description: Option<String>,
    ) -> async_graphql::Result<RecipeObject> {
        let service = ctx.data::<AppState>()?;
        let new_recipe = NewRecipe::new(title, description)?;
        Ok(service.create_recipe(new_recipe).await?.into())
    }

    /// Returns false when no recipe had this id.
    async fn delete_recipe(
        &self,
        ctx: &Context<'_>,
        recipe_id: RecipeId,
    ) -> async_graphql::Result<bool> {
        let service = ctx.data::<AppState>()?;
        Ok(service.delete_recipe(recipe_id).await?)
    }
}

pub fn build_schema(state: AppState) -> RecipeSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(state)
        .finish()
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(PATH).finish())
}

/// POST executes queries, GET serves GraphiQL.
pub fn router(schema: RecipeSchema) -> Router<AppState> {
    Router::new().route(PATH, get(graphiql).post_service(GraphQL::new(schema)))
}
