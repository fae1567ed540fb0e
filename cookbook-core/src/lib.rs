//! Recipe catalog core: domain types, the store contract, recommendation
//! strategies and the service every transport delegates to.

pub mod config;
pub mod error;
pub mod llm;
pub mod recipe;
pub mod recommend;
pub mod service;
pub mod store;

pub use config::{AiConfig, AppConfig, ConfigError};
pub use error::{ServiceError, StoreError, ValidationError};
pub use recipe::{NewRecipe, Recipe, RecipeId, TITLE_MAX_LEN};
pub use recommend::{build_strategy, Recommendation, RecommendationStrategy};
pub use service::RecipeService;
pub use store::{MemoryStore, RecipeStore};
