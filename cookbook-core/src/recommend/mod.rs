//! Recipe recommendation strategies.
//!
//! A strategy looks at the full recipe list (newest first) and always
//! produces a [`Recommendation`]. Degraded outcomes are reported through
//! the `reason` field, never as errors.

mod ai;
mod fallback;
pub mod prompt;

pub use ai::AiStrategy;
pub use fallback::FallbackStrategy;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::config::AiConfig;
use crate::llm::ClaudeProvider;
use crate::recipe::{Recipe, RecipeId};

/// Title returned when there is nothing to recommend.
pub const NO_RECIPES_TITLE: &str = "No recipes yet";

/// The outcome of one recommendation call. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Recommendation {
    /// Id of the chosen recipe, or null when there are no recipes.
    pub recommended_id: Option<RecipeId>,
    pub title: String,
    pub reason: String,
}

impl Recommendation {
    /// The empty-catalog result.
    pub fn none(reason: impl Into<String>) -> Self {
        Self {
            recommended_id: None,
            title: NO_RECIPES_TITLE.to_string(),
            reason: reason.into(),
        }
    }

    pub fn of(recipe: &Recipe, reason: impl Into<String>) -> Self {
        Self {
            recommended_id: Some(recipe.id),
            title: recipe.title.clone(),
            reason: reason.into(),
        }
    }
}

#[async_trait]
pub trait RecommendationStrategy: Send + Sync + fmt::Debug {
    /// Pick one recipe from `recipes`, which are ordered newest first.
    async fn recommend(&self, recipes: &[Recipe]) -> Recommendation;

    /// Short name for logs.
    fn name(&self) -> &'static str;
}

/// Choose the strategy for a service instance.
///
/// An API key selects the AI-backed strategy talking to Claude; without one
/// the deterministic fallback is used.
pub fn build_strategy(config: &AiConfig) -> Arc<dyn RecommendationStrategy> {
    match &config.api_key {
        Some(api_key) => {
            tracing::info!(model = %config.model, "Using AI recommendation strategy");
            let provider = ClaudeProvider::new(api_key.clone(), config.model.clone())
                .with_base_url(config.base_url.clone());
            Arc::new(AiStrategy::new(Arc::new(provider)))
        }
        None => {
            tracing::info!("ANTHROPIC_API_KEY not set, using fallback recommendation strategy");
            Arc::new(FallbackStrategy)
        }
    }
}
