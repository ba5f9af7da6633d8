//! Typed clients for the upstream data sources (USDA FoodData Central,
//! TheMealDB) plus the static fallback catalog.

pub mod fallback;
pub mod mealdb;
pub mod usda;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::ingredient::Ingredient;

/// Errors from upstream data-source calls. `Exhausted` is the terminal,
/// caller-distinguishable variant raised after the retry budget is spent.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("upstream returned status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("gave up after {attempts} attempts, last error: {last}")]
    Exhausted { attempts: u32, last: String },
}

/// Seam for the ingredient catalog source. The live implementation is
/// `UsdaClient`; carried in `AppState` as `Arc<dyn IngredientSource>` so the
/// planning handler never depends on a concrete upstream.
#[async_trait]
pub trait IngredientSource: Send + Sync {
    async fn fetch_ingredients(&self) -> Result<Vec<Ingredient>, FetchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exhausted_error_reports_attempts_and_cause() {
        let err = FetchError::Exhausted {
            attempts: 3,
            last: "status 503".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("3 attempts"));
        assert!(text.contains("503"));
    }
}
