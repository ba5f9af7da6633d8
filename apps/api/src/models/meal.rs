use serde::{Deserialize, Serialize};

/// Thresholds and exclusions driving the combination engine.
/// Combination size is bounded below at 2 to force multi-ingredient meals.
#[derive(Debug, Clone, Deserialize)]
pub struct MealConstraints {
    pub max_cost: f64,
    pub min_protein: f64,
    pub max_fat: f64,
    #[serde(default)]
    pub excluded_tags: Vec<String>,
    #[serde(default = "default_max_ingredients")]
    pub max_ingredients: usize,
}

fn default_max_ingredients() -> usize {
    4
}

/// A scored, display-ready ingredient combination. Ephemeral — constructed,
/// ranked, returned, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealCombination {
    pub ingredients: Vec<String>,
    pub total_cost: f64,
    pub total_protein_g: f64,
    pub total_fat_g: f64,
    pub num_ingredients: usize,
    pub diversity_score: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constraints_default_max_ingredients_is_four() {
        let json = r#"{"max_cost": 1.0, "min_protein": 15.0, "max_fat": 15.0}"#;
        let constraints: MealConstraints = serde_json::from_str(json).unwrap();
        assert_eq!(constraints.max_ingredients, 4);
        assert!(constraints.excluded_tags.is_empty());
    }

    #[test]
    fn test_constraints_accept_explicit_exclusions() {
        let json = r#"{
            "max_cost": 2.0,
            "min_protein": 20.0,
            "max_fat": 10.0,
            "excluded_tags": ["dairy", "poultry"],
            "max_ingredients": 3
        }"#;
        let constraints: MealConstraints = serde_json::from_str(json).unwrap();
        assert_eq!(constraints.excluded_tags, vec!["dairy", "poultry"]);
        assert_eq!(constraints.max_ingredients, 3);
    }
}
