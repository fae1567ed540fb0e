use async_trait::async_trait;
use std::sync::Arc;

use super::fallback::FallbackStrategy;
use super::{prompt, Recommendation, RecommendationStrategy};
use crate::llm::{LlmError, LlmProvider};
use crate::recipe::Recipe;

const EMPTY_REASON: &str = "Add some recipes and I will recommend one based on them.";

const PROVIDER_FAILED_REASON: &str = "AI parsing failed, fallback to most recent recipe.";

/// Strategy that asks an LLM provider to choose.
///
/// Any provider failure (transport, status, timeout, unparsable reply)
/// degrades to the fallback pick. There are no retries.
#[derive(Debug, Clone)]
pub struct AiStrategy {
    provider: Arc<dyn LlmProvider>,
}

impl AiStrategy {
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self { provider }
    }

    async fn ask_provider(&self, recipes: &[Recipe]) -> Result<Recommendation, LlmError> {
        let request = prompt::build_request(recipes)?;

        tracing::debug!(
            provider = self.provider.provider_name(),
            model = self.provider.model_name(),
            context_len = recipes.len().min(prompt::MAX_CONTEXT_RECIPES),
            "Requesting AI recommendation"
        );

        let text = self.provider.complete(&request).await?;
        prompt::parse_recommendation(&text)
    }
}

#[async_trait]
impl RecommendationStrategy for AiStrategy {
    async fn recommend(&self, recipes: &[Recipe]) -> Recommendation {
        if recipes.is_empty() {
            return Recommendation::none(EMPTY_REASON);
        }

        match self.ask_provider(recipes).await {
            Ok(recommendation) => {
                tracing::debug!(
                    recommended_id = ?recommendation.recommended_id,
                    "AI recommendation succeeded"
                );
                recommendation
            }
            Err(e) => {
                let fallback = FallbackStrategy::pick(recipes, PROVIDER_FAILED_REASON);
                tracing::warn!(
                    provider = self.provider.provider_name(),
                    error = %e,
                    fallback_id = ?fallback.recommended_id,
                    "AI recommendation failed, using most recent recipe"
                );
                fallback
            }
        }
    }

    fn name(&self) -> &'static str {
        "ai"
    }
}
