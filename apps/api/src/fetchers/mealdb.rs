//! TheMealDB client — filter-by-ingredient search and lookup-by-id details.

use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::fetchers::FetchError;
use crate::models::recipe::{Recipe, RecipeSummary};

const MEALDB_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";
/// Search results cap.
const SEARCH_LIMIT: usize = 10;
/// TheMealDB stores ingredients in numbered strIngredient1..20 fields.
const MAX_INGREDIENT_FIELDS: usize = 20;

#[derive(Debug, Deserialize)]
struct FilterResponse {
    /// TheMealDB returns `"meals": null` when nothing matches.
    meals: Option<Vec<FilterMeal>>,
}

#[derive(Debug, Deserialize)]
struct FilterMeal {
    #[serde(rename = "idMeal")]
    id: Option<String>,
    #[serde(rename = "strMeal")]
    title: Option<String>,
    #[serde(rename = "strMealThumb")]
    thumbnail: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LookupResponse {
    meals: Option<Vec<Value>>,
}

/// Client for TheMealDB free-tier API.
#[derive(Clone)]
pub struct MealDbClient {
    http: Client,
    base_url: String,
}

impl MealDbClient {
    pub fn new() -> Self {
        Self {
            http: Client::builder()
                .timeout(std::time::Duration::from_secs(10))
                .build()
                .expect("failed to build HTTP client"),
            base_url: MEALDB_BASE_URL.to_string(),
        }
    }

    /// Searches recipes containing a primary ingredient. No matches is an
    /// empty vec; transport/status failures are errors for the caller to
    /// surface.
    pub async fn search_by_ingredient(
        &self,
        ingredient: &str,
    ) -> Result<Vec<RecipeSummary>, FetchError> {
        let url = format!("{}/filter.php", self.base_url);
        let query = ingredient.trim().to_lowercase();

        let response = self.http.get(&url).query(&[("i", &query)]).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Api {
                status: status.as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }

        let body: FilterResponse = response.json().await?;
        let meals = body.meals.unwrap_or_default();
        debug!("mealdb search '{query}' returned {} meals", meals.len());

        Ok(meals
            .into_iter()
            .filter_map(|meal| {
                Some(RecipeSummary {
                    id: meal.id?,
                    title: meal.title?,
                    thumbnail: meal.thumbnail,
                })
            })
            .take(SEARCH_LIMIT)
            .collect())
    }

    /// Full details for one recipe. Unknown IDs resolve to `None`.
    pub async fn recipe_details(&self, meal_id: &str) -> Result<Option<Recipe>, FetchError> {
        let url = format!("{}/lookup.php", self.base_url);

        let response = self.http.get(&url).query(&[("i", meal_id)]).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Api {
                status: status.as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }

        let body: LookupResponse = response.json().await?;
        Ok(body
            .meals
            .and_then(|meals| meals.into_iter().next())
            .and_then(|meal| parse_meal(&meal)))
    }
}

impl Default for MealDbClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Extracts a `Recipe` from a raw lookup record: walks the numbered
/// ingredient/measure field pairs (stopping at the first empty ingredient)
/// and splits the instruction blob into steps.
fn parse_meal(meal: &Value) -> Option<Recipe> {
    let id = meal.get("idMeal")?.as_str()?.to_string();
    let title = meal.get("strMeal")?.as_str()?.to_string();
    let thumbnail = meal
        .get("strMealThumb")
        .and_then(Value::as_str)
        .map(str::to_string);

    let mut ingredients = Vec::new();
    for i in 1..=MAX_INGREDIENT_FIELDS {
        let name = meal
            .get(format!("strIngredient{i}"))
            .and_then(Value::as_str)
            .map(str::trim)
            .unwrap_or_default();
        if name.is_empty() {
            break;
        }
        let measure = meal
            .get(format!("strMeasure{i}"))
            .and_then(Value::as_str)
            .map(str::trim)
            .unwrap_or_default();
        ingredients.push(format!("{measure} {name}").trim().to_string());
    }

    let instructions = meal
        .get("strInstructions")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .split("\r\n")
        .map(str::trim)
        .filter(|step| !step.is_empty())
        .map(str::to_string)
        .collect();

    Some(Recipe {
        id,
        title,
        ingredients,
        instructions,
        thumbnail,
    })
}
