use crate::models::ingredient::Ingredient;

/// Static catalog used only when every live USDA fetch fails terminally.
pub fn fallback_catalog() -> Vec<Ingredient> {
    fn entry(
        name: &str,
        cost: f64,
        protein: f64,
        carbs: f64,
        fat: f64,
        allergy_tags: &[&str],
    ) -> Ingredient {
        Ingredient {
            name: name.to_string(),
            cost_per_100g: cost,
            protein_g: protein,
            carbs_g: carbs,
            fat_g: fat,
            allergy_tags: allergy_tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    vec![
        entry("White Rice (Dry)", 0.10, 7.1, 80.0, 0.7, &[]),
        entry("Egg (Large, raw, shelled)", 0.25, 12.6, 1.1, 9.5, &["egg"]),
        entry(
            "Chicken Breast (Raw)",
            0.75,
            31.0,
            0.0,
            3.6,
            &["poultry", "meat"],
        ),
        entry(
            "All-Purpose Flour",
            0.15,
            10.3,
            76.3,
            1.0,
            &["wheat", "gluten"],
        ),
        entry("Canned Diced Tomato", 0.08, 0.9, 3.9, 0.2, &[]),
    ]
}
