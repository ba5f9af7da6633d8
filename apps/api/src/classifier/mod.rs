//! Allergen/diet classifier — pure keyword substring matching over lower-cased
//! text. Not semantic parsing: partial-word false positives and negatives are
//! an accepted limitation.

pub mod keywords;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::models::ingredient::FunctionalTag;
use keywords::KeywordTables;

/// User dietary preference carried on suggestion requests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DietaryPreference {
    #[default]
    None,
    Vegetarian,
    Pescetarian,
}

/// Allergen categories whose keyword lists match the ingredient name.
/// Multiple tags may apply ("flour" is both wheat and gluten); no match
/// returns an empty vec, not an error.
pub fn tag_allergens(tables: &KeywordTables, name: &str) -> Vec<String> {
    let name_lower = name.to_lowercase();
    tables
        .ingredient_allergens
        .iter()
        .filter(|(_, words)| words.iter().any(|w| name_lower.contains(w)))
        .map(|(tag, _)| tag.to_string())
        .collect()
}

/// Functional role tags for an ingredient name. Falls back to `{Other}` when
/// no group matches so every ingredient contributes to the diversity union.
pub fn tag_functional(tables: &KeywordTables, name: &str) -> BTreeSet<FunctionalTag> {
    let name_lower = name.to_lowercase();
    let mut tags: BTreeSet<FunctionalTag> = tables
        .functional_groups
        .iter()
        .filter(|(_, words)| words.iter().any(|w| name_lower.contains(w)))
        .map(|(tag, _)| *tag)
        .collect();
    if tags.is_empty() {
        tags.insert(FunctionalTag::Other);
    }
    tags
}

/// Whether a recipe is compatible with a dietary preference, judged on the
/// concatenated lower-cased ingredient lines and title.
pub fn is_diet_compatible(
    tables: &KeywordTables,
    title: &str,
    ingredient_lines: &[String],
    preference: DietaryPreference,
) -> bool {
    let joined = ingredient_lines.join(" ").to_lowercase();
    let title_lower = title.to_lowercase();
    let hit = |word: &&str| joined.contains(*word) || title_lower.contains(*word);

    match preference {
        DietaryPreference::None => true,
        DietaryPreference::Vegetarian => {
            !tables.meat_poultry.iter().any(hit) && !tables.fish_shellfish.iter().any(hit)
        }
        // Fish allowed; only meat/poultry rejects.
        DietaryPreference::Pescetarian => !tables.meat_poultry.iter().any(hit),
    }
}

/// Whether a recipe's ingredient lines are free of every keyword the user's
/// excluded tags expand to. An empty exclusion list always passes.
pub fn passes_allergen_filter(
    tables: &KeywordTables,
    ingredient_lines: &[String],
    excluded_tags: &[String],
) -> bool {
    if excluded_tags.is_empty() {
        return true;
    }

    let mut keywords: BTreeSet<&str> = BTreeSet::new();
    for tag in excluded_tags {
        keywords.extend(tables.expand_user_tag(tag.as_str()));
    }

    for line in ingredient_lines {
        let line_lower = line.to_lowercase();
        if let Some(keyword) = keywords.iter().find(|k| line_lower.contains(**k)) {
            tracing::debug!("allergen hit: '{line}' contains '{keyword}', discarding");
            return false;
        }
    }
    true
}
