//! Axum route handler for the meal planning endpoint.

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::fetchers::fallback::fallback_catalog;
use crate::models::meal::{MealCombination, MealConstraints};
use crate::planner::find_best_meals;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct PlanResponse {
    pub success: bool,
    pub meals: Vec<MealCombination>,
    pub catalog_size: usize,
    /// "usda" when the live fetch succeeded, "fallback" otherwise.
    pub source: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// POST /meal/plan
///
/// Validates the constraint set, builds the ingredient catalog (live USDA
/// fetch, static fallback on terminal failure), and runs the combination
/// engine. An empty result is a `success: false` body, not an error.
pub async fn handle_plan(
    State(state): State<AppState>,
    Json(mut constraints): Json<MealConstraints>,
) -> Result<Json<PlanResponse>, AppError> {
    validate_constraints(&constraints)?;
    constraints.excluded_tags = constraints
        .excluded_tags
        .iter()
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect();

    let (catalog, source) = match state.ingredients.fetch_ingredients().await {
        Ok(catalog) => (catalog, "usda"),
        Err(e) => {
            warn!("ingredient fetch failed, using fallback catalog: {e}");
            (fallback_catalog(), "fallback")
        }
    };
    info!("planning over {} ingredients ({source})", catalog.len());

    let meals = find_best_meals(&catalog, &constraints, &state.keywords);
    let message = meals
        .is_empty()
        .then(|| "No meal combination satisfies the given constraints.".to_string());

    Ok(Json(PlanResponse {
        success: !meals.is_empty(),
        catalog_size: catalog.len(),
        source,
        meals,
        message,
    }))
}

fn validate_constraints(constraints: &MealConstraints) -> Result<(), AppError> {
    for (field, value) in [
        ("max_cost", constraints.max_cost),
        ("min_protein", constraints.min_protein),
        ("max_fat", constraints.max_fat),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(AppError::Validation(format!(
                "{field} must be a non-negative finite number"
            )));
        }
    }
    if constraints.max_ingredients < 2 {
        return Err(AppError::Validation(
            "max_ingredients must be at least 2".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constraints(max_cost: f64, min_protein: f64, max_fat: f64) -> MealConstraints {
        MealConstraints {
            max_cost,
            min_protein,
            max_fat,
            excluded_tags: vec![],
            max_ingredients: 4,
        }
    }

    #[test]
    fn test_validation_rejects_negative_thresholds() {
        assert!(validate_constraints(&constraints(-1.0, 10.0, 10.0)).is_err());
        assert!(validate_constraints(&constraints(1.0, -0.1, 10.0)).is_err());
    }

    #[test]
    fn test_validation_rejects_non_finite() {
        assert!(validate_constraints(&constraints(f64::NAN, 10.0, 10.0)).is_err());
        assert!(validate_constraints(&constraints(1.0, 10.0, f64::INFINITY)).is_err());
    }

    #[test]
    fn test_validation_rejects_single_ingredient_plans() {
        let mut c = constraints(1.0, 10.0, 10.0);
        c.max_ingredients = 1;
        assert!(validate_constraints(&c).is_err());
    }

    #[test]
    fn test_validation_accepts_well_formed() {
        assert!(validate_constraints(&constraints(1.0, 15.0, 15.0)).is_ok());
        assert!(validate_constraints(&constraints(0.0, 0.0, 0.0)).is_ok());
    }
}
