//! Diesel-backed implementation of the recipe store.

use async_trait::async_trait;
use chrono::Utc;
use cookbook_core::{NewRecipe, Recipe, RecipeId, RecipeStore, StoreError};
use diesel::prelude::*;
use std::fmt;

use crate::db::DbPool;
use crate::models::{NewRecipeRow, RecipeRow};
use crate::schema::recipes;

#[derive(Clone)]
pub struct DieselStore {
    pool: DbPool,
}

impl fmt::Debug for DieselStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DieselStore").finish_non_exhaustive()
    }
}

impl DieselStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Run a blocking query on the blocking thread pool.
    async fn run<F, T>(&self, query: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut SqliteConnection) -> QueryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = pool
                .get()
                .map_err(|e| StoreError::Connection(e.to_string()))?;
            query(&mut *conn).map_err(|e| {
                tracing::error!("Recipe query failed: {}", e);
                StoreError::Query(e.to_string())
            })
        })
        .await
        .map_err(|e| StoreError::Task(e.to_string()))?
    }
}

#[async_trait]
impl RecipeStore for DieselStore {
    async fn create(&self, recipe: NewRecipe) -> Result<Recipe, StoreError> {
        let row = self
            .run(move |conn| {
                let new_row = NewRecipeRow {
                    title: recipe.title(),
                    description: recipe.description(),
                    created_at: Utc::now().naive_utc(),
                };

                diesel::insert_into(recipes::table)
                    .values(&new_row)
                    .returning(RecipeRow::as_returning())
                    .get_result(conn)
            })
            .await?;

        Ok(row.into())
    }

    async fn list_all(&self) -> Result<Vec<Recipe>, StoreError> {
        let rows = self
            .run(|conn| {
                recipes::table
                    .select(RecipeRow::as_select())
                    .order((recipes::created_at.desc(), recipes::id.desc()))
                    .load(conn)
            })
            .await?;

        Ok(rows.into_iter().map(Recipe::from).collect())
    }

    async fn delete(&self, id: RecipeId) -> Result<bool, StoreError> {
        let deleted = self
            .run(move |conn| diesel::delete(recipes::table.find(id)).execute(conn))
            .await?;

        Ok(deleted > 0)
    }
}
