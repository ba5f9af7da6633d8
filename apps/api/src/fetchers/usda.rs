//! USDA FoodData Central client — fetches staple foods, shapes them into
//! catalog ingredients with estimated costs and allergen tags.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::classifier::{self, keywords::KeywordTables};
use crate::fetchers::{FetchError, IngredientSource};
use crate::models::ingredient::Ingredient;

const USDA_BASE_URL: &str = "https://api.nal.usda.gov/fdc/v1";
/// Fixed staple queries covering poultry/red meat, grains, and dairy/eggs.
const STAPLE_QUERIES: &[&str] = &[
    "chicken beef pork turkey",
    "rice wheat flour oats",
    "egg dairy milk cheese",
];
const PAGE_SIZE: u32 = 100;
const MAX_RETRIES: u32 = 3;
/// Catalog cap. The engine is brute force; anything near this size is
/// already expensive downstream.
const MAX_CATALOG: usize = 150;

/// USDA numeric nutrient codes, used when `nutrientName` does not match.
const NUTRIENT_NUMBER_PROTEIN: &str = "203";
const NUTRIENT_NUMBER_FAT: &str = "204";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    foods: Vec<FoodRecord>,
}

#[derive(Debug, Deserialize)]
struct FoodRecord {
    #[serde(default)]
    description: String,
    #[serde(default, rename = "foodNutrients")]
    food_nutrients: Vec<FoodNutrient>,
}

#[derive(Debug, Deserialize)]
struct FoodNutrient {
    #[serde(rename = "nutrientName")]
    nutrient_name: Option<String>,
    #[serde(rename = "nutrientNumber")]
    nutrient_number: Option<String>,
    value: Option<f64>,
}

/// Client for the USDA food-composition search endpoint.
pub struct UsdaClient {
    http: Client,
    api_key: String,
    base_url: String,
    tables: KeywordTables,
}

impl UsdaClient {
    pub fn new(api_key: String, tables: KeywordTables) -> Self {
        Self {
            http: Client::builder()
                .timeout(std::time::Duration::from_secs(10))
                .build()
                .expect("failed to build HTTP client"),
            api_key,
            base_url: USDA_BASE_URL.to_string(),
            tables,
        }
    }

    /// One search query with the retry loop. Transport errors and non-2xx
    /// statuses are retried with deterministic backoff (1s, 2s); exhaustion
    /// is terminal.
    async fn search(&self, query: &str) -> Result<SearchResponse, FetchError> {
        let url = format!("{}/foods/search", self.base_url);
        let page_size = PAGE_SIZE.to_string();
        let mut last_error: Option<FetchError> = None;

        for attempt in 1..=MAX_RETRIES {
            if attempt > 1 {
                let delay = std::time::Duration::from_secs(1u64 << (attempt - 2));
                warn!(
                    "USDA search attempt {} failed, retrying after {}s",
                    attempt - 1,
                    delay.as_secs()
                );
                tokio::time::sleep(delay).await;
            }

            let response = self
                .http
                .get(&url)
                .query(&[
                    ("api_key", self.api_key.as_str()),
                    ("query", query),
                    ("pageSize", page_size.as_str()),
                    ("pageNumber", "1"),
                    ("dataType", "Foundation"),
                ])
                .send()
                .await;

            let response = match response {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(FetchError::Http(e));
                    continue;
                }
            };

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                last_error = Some(FetchError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            return response.json::<SearchResponse>().await.map_err(FetchError::Http);
        }

        Err(FetchError::Exhausted {
            attempts: MAX_RETRIES,
            last: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
        })
    }
}

#[async_trait]
impl IngredientSource for UsdaClient {
    async fn fetch_ingredients(&self) -> Result<Vec<Ingredient>, FetchError> {
        let mut catalog: Vec<Ingredient> = Vec::new();

        for (i, query) in STAPLE_QUERIES.iter().enumerate() {
            let response = self.search(query).await?;
            debug!(
                "USDA query {}/{} ('{query}') returned {} foods",
                i + 1,
                STAPLE_QUERIES.len(),
                response.foods.len()
            );

            for food in &response.foods {
                if let Some(ingredient) = shape_food(&self.tables, food) {
                    catalog.push(ingredient);
                    if catalog.len() >= MAX_CATALOG {
                        info!("ingredient catalog capped at {MAX_CATALOG}");
                        return Ok(catalog);
                    }
                }
            }
        }

        info!("fetched {} ingredients from USDA", catalog.len());
        Ok(catalog)
    }
}

/// Shapes one USDA food record into a catalog ingredient. Records with an
/// empty description are dropped; missing nutrients degrade to 0.0.
fn shape_food(tables: &KeywordTables, food: &FoodRecord) -> Option<Ingredient> {
    let name = food.description.trim();
    if name.is_empty() {
        return None;
    }

    let protein_g = extract_nutrient(&food.food_nutrients, "Protein");
    let fat_g = extract_nutrient(&food.food_nutrients, "Fat");

    Some(Ingredient {
        name: name.to_string(),
        cost_per_100g: estimate_cost(name, protein_g),
        protein_g: round1(protein_g),
        carbs_g: 0.0,
        fat_g: round1(fat_g),
        allergy_tags: classifier::tag_allergens(tables, name),
    })
}

/// Nutrient lookup: match by name first, then fall back to the fixed
/// numeric nutrient code. USDA records are inconsistent about naming, the
/// codes are stable.
fn extract_nutrient(nutrients: &[FoodNutrient], nutrient_name: &str) -> f64 {
    for nutrient in nutrients {
        if nutrient.nutrient_name.as_deref() == Some(nutrient_name) {
            return nutrient.value.unwrap_or(0.0);
        }
    }

    let code = match nutrient_name {
        "Protein" => Some(NUTRIENT_NUMBER_PROTEIN),
        "Fat" | "Total lipid" => Some(NUTRIENT_NUMBER_FAT),
        _ => None,
    };
    if let Some(code) = code {
        for nutrient in nutrients {
            if nutrient.nutrient_number.as_deref() == Some(code) {
                return nutrient.value.unwrap_or(0.0);
            }
        }
    }

    0.0
}

/// Cost estimate per 100g by category keyword bucket; no bucket match falls
/// back to a protein-linear default. USDA has no price data, so these are
/// deliberate rough figures for ranking, not accounting.
fn estimate_cost(name: &str, protein_g: f64) -> f64 {
    const BUCKETS: &[(&[&str], f64)] = &[
        (&["rice", "grain", "cereal", "oats", "quinoa"], 0.15),
        (&["chicken", "turkey", "poultry"], 0.75),
        (&["beef", "pork", "lamb", "meat"], 1.20),
        (&["fish", "salmon", "tuna", "cod"], 1.50),
        (&["egg", "eggs"], 0.25),
        (&["milk", "cheese", "dairy"], 0.40),
        (&["vegetable", "tomato", "onion", "carrot", "broccoli"], 0.30),
        (&["fruit", "apple", "banana", "orange", "berry"], 0.50),
        (&["nut", "almond", "walnut", "peanut"], 2.00),
        (&["bean", "lentil", "soy"], 0.20),
    ];

    let name_lower = name.to_lowercase();
    for (words, cost) in BUCKETS {
        if words.iter().any(|w| name_lower.contains(w)) {
            return *cost;
        }
    }
    0.10 + protein_g * 0.02
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nutrient(name: Option<&str>, number: Option<&str>, value: f64) -> FoodNutrient {
        FoodNutrient {
            nutrient_name: name.map(|s| s.to_string()),
            nutrient_number: number.map(|s| s.to_string()),
            value: Some(value),
        }
    }

    #[test]
    fn test_extract_nutrient_matches_by_name_first() {
        let nutrients = vec![
            nutrient(Some("Protein"), Some("203"), 31.0),
            nutrient(Some("Total lipid (fat)"), Some("204"), 3.6),
        ];
        assert_eq!(extract_nutrient(&nutrients, "Protein"), 31.0);
    }

    #[test]
    fn test_extract_nutrient_falls_back_to_code() {
        // Name variant the primary match misses; code 203 still resolves.
        let nutrients = vec![nutrient(Some("Protein, total"), Some("203"), 25.4)];
        assert_eq!(extract_nutrient(&nutrients, "Protein"), 25.4);
    }

    #[test]
    fn test_extract_fat_by_code_204() {
        let nutrients = vec![nutrient(Some("Total lipid (fat)"), Some("204"), 9.5)];
        assert_eq!(extract_nutrient(&nutrients, "Fat"), 9.5);
    }

    #[test]
    fn test_extract_missing_nutrient_is_zero() {
        let nutrients = vec![nutrient(Some("Energy"), Some("208"), 120.0)];
        assert_eq!(extract_nutrient(&nutrients, "Protein"), 0.0);
        assert_eq!(extract_nutrient(&[], "Fat"), 0.0);
    }

    #[test]
    fn test_cost_buckets() {
        assert_eq!(estimate_cost("White Rice", 7.1), 0.15);
        assert_eq!(estimate_cost("Chicken Breast", 31.0), 0.75);
        assert_eq!(estimate_cost("Ground Beef", 26.0), 1.20);
        assert_eq!(estimate_cost("Atlantic Salmon", 20.0), 1.50);
        assert_eq!(estimate_cost("Egg, whole", 12.6), 0.25);
        assert_eq!(estimate_cost("Cheddar Cheese", 25.0), 0.40);
        assert_eq!(estimate_cost("Tomato, red", 0.9), 0.30);
        assert_eq!(estimate_cost("Banana", 1.1), 0.50);
        assert_eq!(estimate_cost("Almond, raw", 21.0), 2.00);
        assert_eq!(estimate_cost("Black bean", 21.0), 0.20);
    }

    #[test]
    fn test_cost_default_is_protein_linear() {
        let cost = estimate_cost("Tofu", 8.0);
        assert!((cost - 0.26).abs() < 1e-9);
    }

    #[test]
    fn test_shape_food_from_search_json() {
        let json = r#"{
            "description": "Chicken, broiler or fryers, breast, skinless, boneless, meat only, raw",
            "foodNutrients": [
                {"nutrientName": "Protein", "nutrientNumber": "203", "value": 22.5},
                {"nutrientName": "Total lipid (fat)", "nutrientNumber": "204", "value": 1.93}
            ]
        }"#;
        let food: FoodRecord = serde_json::from_str(json).unwrap();
        let ing = shape_food(&KeywordTables::default(), &food).unwrap();
        assert!((ing.protein_g - 22.5).abs() < 1e-9);
        assert!((ing.fat_g - 1.9).abs() < 1e-9);
        assert_eq!(ing.cost_per_100g, 0.75);
        assert!(ing.allergy_tags.contains(&"poultry".to_string()));
    }

    #[test]
    fn test_shape_food_drops_empty_description() {
        let food = FoodRecord {
            description: "   ".to_string(),
            food_nutrients: vec![],
        };
        assert!(shape_food(&KeywordTables::default(), &food).is_none());
    }

    #[test]
    fn test_search_response_tolerates_missing_foods_field() {
        let response: SearchResponse = serde_json::from_str("{}").unwrap();
        assert!(response.foods.is_empty());
    }
}
