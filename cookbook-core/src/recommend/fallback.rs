use async_trait::async_trait;

use super::{Recommendation, RecommendationStrategy};
use crate::recipe::Recipe;

const EMPTY_REASON: &str = "Create a few recipes first, then I can recommend one.";

const MOST_RECENT_REASON: &str = "Fallback: returning the most recent recipe.";

/// Deterministic strategy: recommend the newest recipe.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackStrategy;

impl FallbackStrategy {
    /// Pick the head of `recipes` with the given reason. The AI strategy
    /// reuses this when the provider call fails.
    pub(crate) fn pick(recipes: &[Recipe], reason: &str) -> Recommendation {
        match recipes.first() {
            Some(recipe) => Recommendation::of(recipe, reason),
            None => Recommendation::none(EMPTY_REASON),
        }
    }
}

#[async_trait]
impl RecommendationStrategy for FallbackStrategy {
    async fn recommend(&self, recipes: &[Recipe]) -> Recommendation {
        Self::pick(recipes, MOST_RECENT_REASON)
    }

    fn name(&self) -> &'static str {
        "fallback"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommend::NO_RECIPES_TITLE;
    use chrono::{Duration, Utc};

    fn recipes(titles: &[&str]) -> Vec<Recipe> {
        let now = Utc::now();
        titles
            .iter()
            .enumerate()
            .map(|(i, title)| Recipe {
                id: 10 - i as i64,
                title: title.to_string(),
                description: None,
                created_at: now - Duration::minutes(i as i64),
            })
            .collect()
    }

    #[tokio::test]
    async fn test_empty_list() {
        let rec = FallbackStrategy.recommend(&[]).await;
        assert_eq!(rec.recommended_id, None);
        assert_eq!(rec.title, NO_RECIPES_TITLE);
        assert!(!rec.reason.is_empty());
    }

    #[tokio::test]
    async fn test_picks_first_recipe() {
        let list = recipes(&["Pizza", "Soup"]);
        let rec = FallbackStrategy.recommend(&list).await;
        assert_eq!(rec.recommended_id, Some(list[0].id));
        assert_eq!(rec.title, "Pizza");
        assert!(rec.reason.contains("most recent"));
    }

    #[tokio::test]
    async fn test_same_input_same_output() {
        let list = recipes(&["Tacos", "Burger", "Salad"]);
        let first = FallbackStrategy.recommend(&list).await;
        let second = FallbackStrategy.recommend(&list).await;
        assert_eq!(first, second);
    }
}
