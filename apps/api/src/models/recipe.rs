use serde::{Deserialize, Serialize};

/// Basic recipe info returned by an ingredient search (ID, title, thumbnail).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeSummary {
    pub id: String,
    pub title: String,
    pub thumbnail: Option<String>,
}

/// Full recipe details: title, ingredient lines ("1 cup Flour"), and
/// step-by-step instructions. Instructions may be swapped for an enhanced
/// version; title and ingredient lines are always preserved from source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub thumbnail: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_serializes_with_expected_fields() {
        let recipe = Recipe {
            id: "52940".to_string(),
            title: "Brown Stew Chicken".to_string(),
            ingredients: vec!["1 whole Chicken".to_string()],
            instructions: vec!["Season the chicken.".to_string()],
            thumbnail: Some("https://example.com/thumb.jpg".to_string()),
        };
        let value = serde_json::to_value(&recipe).unwrap();
        assert_eq!(value["id"], "52940");
        assert_eq!(value["ingredients"][0], "1 whole Chicken");
        assert_eq!(value["thumbnail"], "https://example.com/thumb.jpg");
    }
}
