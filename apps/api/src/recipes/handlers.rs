//! Axum route handlers for the suggestion API and the isolated LLM check.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::classifier::DietaryPreference;
use crate::errors::AppError;
use crate::models::recipe::Recipe;
use crate::recipes::suggest_recipes;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SuggestRequest {
    /// Comma-separated allergy tags, e.g. "dairy, treenut".
    #[serde(default)]
    pub additional_allergies: String,
    /// Comma-separated ingredient list; only the first token drives the
    /// search.
    #[serde(default)]
    pub available_ingredients: String,
    #[serde(default)]
    pub dietary_preference: DietaryPreference,
}

/// Wire view of a suggested recipe — no internal ID.
#[derive(Debug, Serialize)]
pub struct RecipeView {
    pub title: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub thumbnail: Option<String>,
}

impl From<Recipe> for RecipeView {
    fn from(recipe: Recipe) -> Self {
        Self {
            title: recipe.title,
            ingredients: recipe.ingredients,
            instructions: recipe.instructions,
            thumbnail: recipe.thumbnail,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SuggestParameters {
    pub excluded_tags: Vec<String>,
    pub dietary_preference: DietaryPreference,
}

#[derive(Debug, Serialize)]
pub struct ApiInfo {
    pub source: &'static str,
    pub recipes_found: usize,
}

#[derive(Debug, Serialize)]
pub struct SuggestResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipes: Option<Vec<RecipeView>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub parameters: SuggestParameters,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_info: Option<ApiInfo>,
}

/// POST /meal/suggest
///
/// Finds recipes for the first available ingredient, filters them against
/// the user's allergy tags and dietary preference, and returns up to five
/// with LLM-enhanced instructions. Filter misses are a `success: false`
/// body; only a failed upstream search is an error (503).
pub async fn handle_suggest(
    State(state): State<AppState>,
    Json(request): Json<SuggestRequest>,
) -> Result<Json<SuggestResponse>, AppError> {
    let excluded_tags: Vec<String> = request
        .additional_allergies
        .split(',')
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect();
    let primary_ingredient = request
        .available_ingredients
        .split(',')
        .next()
        .unwrap_or_default()
        .trim()
        .to_string();

    let outcome = suggest_recipes(
        &state,
        &primary_ingredient,
        &excluded_tags,
        request.dietary_preference,
    )
    .await
    .map_err(|e| AppError::Upstream(format!("recipe search failed: {e}")))?;

    let parameters = SuggestParameters {
        excluded_tags,
        dietary_preference: request.dietary_preference,
    };

    let response = if !outcome.recipes.is_empty() {
        SuggestResponse {
            success: true,
            api_info: Some(ApiInfo {
                source: "TheMealDB + Gemini LLM",
                recipes_found: outcome.recipes.len(),
            }),
            recipes: Some(outcome.recipes.into_iter().map(RecipeView::from).collect()),
            message: None,
            parameters,
        }
    } else if outcome.total_found == 0 {
        SuggestResponse {
            success: false,
            recipes: None,
            message: Some("No recipes found for your main ingredient.".to_string()),
            parameters,
            api_info: None,
        }
    } else {
        SuggestResponse {
            success: false,
            recipes: None,
            message: Some(
                "Found recipes, but none matched your allergy/diet filters.".to_string(),
            ),
            parameters,
            api_info: None,
        }
    };

    Ok(Json(response))
}

#[derive(Debug, Serialize)]
pub struct LlmTestResponse {
    pub success: bool,
    pub original_recipe: RecipeView,
    pub enhanced_recipe: RecipeView,
    pub message: &'static str,
}

/// GET /llm/test
///
/// Isolated check of the enhancement path against a fixed recipe — no
/// recipe-database traffic involved.
pub async fn handle_llm_test(State(state): State<AppState>) -> Json<LlmTestResponse> {
    let mock = Recipe {
        id: "test".to_string(),
        title: "Chicken Fried Rice".to_string(),
        ingredients: vec![
            "2 cups cooked rice".to_string(),
            "1 chicken breast".to_string(),
            "2 eggs".to_string(),
            "1 tbsp soy sauce".to_string(),
        ],
        instructions: vec![
            "Cook the rice according to package directions.".to_string(),
            "Cut the chicken into small pieces and cook in a pan.".to_string(),
            "Scramble the eggs in the same pan.".to_string(),
            "Add the rice and soy sauce, mix well.".to_string(),
            "Serve hot.".to_string(),
        ],
        thumbnail: None,
    };

    let enhanced = state.llm.enhance_recipe(&mock).await;

    Json(LlmTestResponse {
        success: true,
        original_recipe: mock.into(),
        enhanced_recipe: enhanced.into(),
        message: "Isolated LLM test complete. Check enhanced_recipe for output quality.",
    })
}
