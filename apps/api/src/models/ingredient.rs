use serde::{Deserialize, Serialize};

/// A single catalog ingredient with per-100g macros and an estimated cost.
/// Produced by the USDA fetcher or loaded from the static fallback catalog;
/// immutable once tagged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub cost_per_100g: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    pub allergy_tags: Vec<String>,
}

/// Coarse role label used only for meal-diversity heuristics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FunctionalTag {
    Protein,
    Starch,
    FatDairy,
    Produce,
    Other,
}
