// Prompt constants and builders for recipe enhancement.

use serde_json::{json, Value};

use crate::models::recipe::Recipe;

/// System instruction for the enhancement call.
pub const ENHANCE_SYSTEM: &str =
    "You are a helpful cooking assistant focused on safety, clarity, and \
    budget-friendliness for allergy sufferers. Rewrite the provided recipe \
    instructions to be simpler (3-5 clear steps), explicitly mention cooking \
    temperatures/doneness for any meat/fish (e.g., 165\u{b0}F for chicken), and \
    maintain a low-cost tone. Use ONLY the ingredients listed. Do not add or \
    suggest others. Return the original title and the enhanced instructions \
    in JSON format.";

/// User query for one recipe: title, ingredient lines, original steps.
pub fn enhancement_query(recipe: &Recipe) -> String {
    format!(
        "Enhance the following recipe:\n\
        Title: {}\n\
        Ingredients: {}\n\
        Original Instructions:\n{}\n\n\
        Provide the rewritten instructions focusing on simplicity, safety \
        (cooking temps!), and using only the listed ingredients.",
        recipe.title,
        recipe.ingredients.join(", "),
        recipe.instructions.join("\n"),
    )
}

/// Response schema constraining the model to a list of instruction strings.
pub fn response_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "enhanced_instructions": {
                "type": "array",
                "items": {
                    "type": "string",
                    "description": "One clear, enhanced cooking step."
                }
            }
        },
        "required": ["enhanced_instructions"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_recipe() -> Recipe {
        Recipe {
            id: "1".to_string(),
            title: "Chicken Fried Rice".to_string(),
            ingredients: vec![
                "2 cups cooked rice".to_string(),
                "1 chicken breast".to_string(),
            ],
            instructions: vec!["Cook the rice.".to_string(), "Cook the chicken.".to_string()],
            thumbnail: None,
        }
    }

    #[test]
    fn test_query_carries_title_ingredients_and_steps() {
        let query = enhancement_query(&sample_recipe());
        assert!(query.contains("Title: Chicken Fried Rice"));
        assert!(query.contains("2 cups cooked rice, 1 chicken breast"));
        assert!(query.contains("Cook the chicken."));
    }

    #[test]
    fn test_schema_requires_enhanced_instructions() {
        let schema = response_schema();
        assert_eq!(schema["required"][0], "enhanced_instructions");
        assert_eq!(
            schema["properties"]["enhanced_instructions"]["type"],
            "array"
        );
    }
}
