//! The persistence contract the service depends on.

use async_trait::async_trait;
use chrono::Utc;
use std::fmt;
use std::sync::Mutex;

use crate::error::StoreError;
use crate::recipe::{NewRecipe, Recipe, RecipeId};

/// Durable CRUD over recipe records.
///
/// Implementations assign ids and creation timestamps. `list_all` must
/// return recipes newest first: the fallback recommendation picks the head
/// of that list.
#[async_trait]
pub trait RecipeStore: Send + Sync + fmt::Debug {
    async fn create(&self, recipe: NewRecipe) -> Result<Recipe, StoreError>;

    async fn list_all(&self) -> Result<Vec<Recipe>, StoreError>;

    /// Returns true iff a recipe with this id existed and was removed.
    async fn delete(&self, id: RecipeId) -> Result<bool, StoreError>;
}

/// Non-durable store backed by a vector. Used by tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<MemoryState>,
}

#[derive(Debug, Default)]
struct MemoryState {
    next_id: RecipeId,
    recipes: Vec<Recipe>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, MemoryState>, StoreError> {
        self.inner
            .lock()
            .map_err(|_| StoreError::Connection("memory store lock poisoned".to_string()))
    }
}

#[async_trait]
impl RecipeStore for MemoryStore {
    async fn create(&self, recipe: NewRecipe) -> Result<Recipe, StoreError> {
        let mut state = self.lock()?;
        state.next_id += 1;

        let recipe = Recipe {
            id: state.next_id,
            title: recipe.title().to_string(),
            description: recipe.description().map(str::to_string),
            created_at: Utc::now(),
        };
        state.recipes.push(recipe.clone());

        Ok(recipe)
    }

    async fn list_all(&self) -> Result<Vec<Recipe>, StoreError> {
        let state = self.lock()?;
        let mut recipes = state.recipes.clone();
        recipes.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(recipes)
    }

    async fn delete(&self, id: RecipeId) -> Result<bool, StoreError> {
        let mut state = self.lock()?;
        let before = state.recipes.len();
        state.recipes.retain(|r| r.id != id);
        Ok(state.recipes.len() < before)
    }
}
