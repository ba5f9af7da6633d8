//! Recipe suggestion pipeline: search TheMealDB by primary ingredient,
//! fetch details, filter against allergy/diet constraints, enhance the
//! survivors' instructions via the LLM.

pub mod handlers;

use tracing::{debug, warn};

use crate::classifier::{is_diet_compatible, passes_allergen_filter, DietaryPreference};
use crate::fetchers::FetchError;
use crate::models::recipe::Recipe;
use crate::state::AppState;

/// Cap on suggested recipes per request.
const MAX_SUGGESTIONS: usize = 5;

/// Search ingredient used when the request names none.
const DEFAULT_SEARCH_INGREDIENT: &str = "chicken";

/// Outcome of one suggestion run. `total_found` is the upstream hit count
/// before filtering, so callers can distinguish "nothing upstream" from
/// "everything filtered out".
#[derive(Debug)]
pub struct SuggestionOutcome {
    pub total_found: usize,
    pub recipes: Vec<Recipe>,
}

/// Runs the full pipeline. A failed search is terminal; a failed details
/// lookup skips that recipe; a failed enhancement keeps the original
/// instructions (handled inside the LLM client).
pub async fn suggest_recipes(
    state: &AppState,
    primary_ingredient: &str,
    excluded_tags: &[String],
    preference: DietaryPreference,
) -> Result<SuggestionOutcome, FetchError> {
    let ingredient = if primary_ingredient.trim().is_empty() {
        DEFAULT_SEARCH_INGREDIENT
    } else {
        primary_ingredient
    };

    let summaries = state.mealdb.search_by_ingredient(ingredient).await?;
    let total_found = summaries.len();

    let mut recipes = Vec::new();
    for summary in summaries {
        let details = match state.mealdb.recipe_details(&summary.id).await {
            Ok(Some(recipe)) => recipe,
            Ok(None) => {
                debug!("no details for meal {}", summary.id);
                continue;
            }
            Err(e) => {
                // One bad lookup must not sink the whole request.
                warn!("details fetch failed for meal {}: {e}", summary.id);
                continue;
            }
        };

        if !passes_allergen_filter(&state.keywords, &details.ingredients, excluded_tags) {
            debug!("'{}' rejected by allergen filter", details.title);
            continue;
        }
        if !is_diet_compatible(&state.keywords, &details.title, &details.ingredients, preference) {
            debug!("'{}' rejected by diet filter", details.title);
            continue;
        }

        recipes.push(state.llm.enhance_recipe(&details).await);
        if recipes.len() >= MAX_SUGGESTIONS {
            break;
        }
    }

    Ok(SuggestionOutcome {
        total_found,
        recipes,
    })
}
