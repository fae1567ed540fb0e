use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::ValidationError;

/// Maximum title length, counted in characters.
pub const TITLE_MAX_LEN: usize = 200;

pub type RecipeId = i64;

/// A stored recipe. Immutable once created; only deletion is supported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Recipe {
    pub id: RecipeId,
    pub title: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A validated request to create a recipe.
///
/// The only way to obtain one is [`NewRecipe::new`], so a store never sees
/// an empty or oversized title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecipe {
    title: String,
    description: Option<String>,
}

impl NewRecipe {
    pub fn new(
        title: impl Into<String>,
        description: Option<String>,
    ) -> Result<Self, ValidationError> {
        let title = title.into();

        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }

        let len = title.chars().count();
        if len > TITLE_MAX_LEN {
            return Err(ValidationError::TitleTooLong {
                len,
                max: TITLE_MAX_LEN,
            });
        }

        Ok(Self { title, description })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}
