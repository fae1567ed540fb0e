//! Application operations shared by every transport.

use std::sync::Arc;

use crate::config::AiConfig;
use crate::error::ServiceError;
use crate::recipe::{NewRecipe, Recipe, RecipeId};
use crate::recommend::{build_strategy, Recommendation, RecommendationStrategy};
use crate::store::RecipeStore;

/// Owns the store handle and the recommendation strategy.
///
/// Holds no recipe state of its own: every call reads through to the store.
#[derive(Debug, Clone)]
pub struct RecipeService {
    store: Arc<dyn RecipeStore>,
    strategy: Arc<dyn RecommendationStrategy>,
}

impl RecipeService {
    /// Build a service whose strategy is chosen from `ai`.
    pub fn new(store: Arc<dyn RecipeStore>, ai: &AiConfig) -> Self {
        Self::with_strategy(store, build_strategy(ai))
    }

    pub fn with_strategy(
        store: Arc<dyn RecipeStore>,
        strategy: Arc<dyn RecommendationStrategy>,
    ) -> Self {
        Self { store, strategy }
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    pub async fn create_recipe(&self, recipe: NewRecipe) -> Result<Recipe, ServiceError> {
        let recipe = self.store.create(recipe).await?;
        tracing::info!(recipe_id = recipe.id, "Created recipe");
        Ok(recipe)
    }

    /// All recipes, newest first.
    pub async fn list_recipes(&self) -> Result<Vec<Recipe>, ServiceError> {
        Ok(self.store.list_all().await?)
    }

    /// Returns false when no recipe had this id.
    pub async fn delete_recipe(&self, id: RecipeId) -> Result<bool, ServiceError> {
        let deleted = self.store.delete(id).await?;
        if deleted {
            tracing::info!(recipe_id = id, "Deleted recipe");
        }
        Ok(deleted)
    }

    /// Recommend from a fresh read of the full recipe list.
    pub async fn recommend(&self) -> Result<Recommendation, ServiceError> {
        let recipes = self.store.list_all().await?;
        Ok(self.strategy.recommend(&recipes).await)
    }
}
