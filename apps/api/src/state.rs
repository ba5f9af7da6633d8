use std::sync::Arc;

use crate::classifier::keywords::KeywordTables;
use crate::config::Config;
use crate::fetchers::mealdb::MealDbClient;
use crate::fetchers::IngredientSource;
use crate::llm_client::GeminiClient;

/// Shared application state injected into all route handlers via Axum
/// extractors. Cheap to clone: clients wrap pooled HTTP connections, the
/// keyword tables are static references.
#[derive(Clone)]
pub struct AppState {
    pub mealdb: MealDbClient,
    pub llm: GeminiClient,
    /// Pluggable catalog source. Default: `UsdaClient`.
    pub ingredients: Arc<dyn IngredientSource>,
    pub keywords: KeywordTables,
    /// Kept for handlers that need runtime settings; currently only `main`
    /// reads it.
    #[allow(dead_code)]
    pub config: Config,
}
