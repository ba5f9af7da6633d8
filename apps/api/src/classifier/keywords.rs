//! Keyword tables backing the allergen/diet classifier.
//!
//! These lists are compatibility surfaces: downstream filtering behavior is
//! defined by exactly these keywords, so edits here change which ingredients
//! and recipes get tagged or rejected. Built once at startup and passed
//! explicitly — never referenced as ambient globals.

use crate::models::ingredient::FunctionalTag;

/// Keyword groups for functional (meal-role) tagging.
const FUNCTIONAL_GROUPS: &[(FunctionalTag, &[&str])] = &[
    (
        FunctionalTag::Protein,
        &[
            "chicken", "turkey", "fish", "pork", "beef", "lamb", "egg", "tofu", "seitan",
        ],
    ),
    (
        FunctionalTag::Starch,
        &[
            "rice", "flour", "pasta", "noodle", "bread", "oats", "potato", "quinoa", "starch",
        ],
    ),
    (
        FunctionalTag::FatDairy,
        &["oil", "butter", "cream", "cheese", "fat", "margarine"],
    ),
    (
        FunctionalTag::Produce,
        &[
            "tomato", "onion", "garlic", "carrot", "pepper", "broccoli", "spinach", "fruit",
        ],
    ),
];

/// Category keywords used to tag raw ingredient names with allergen
/// categories at catalog-build time.
const INGREDIENT_ALLERGEN_KEYWORDS: &[(&str, &[&str])] = &[
    ("legume", &["bean", "lentil", "pea", "soy", "chickpea", "mung"]),
    (
        "treenut",
        &[
            "almond",
            "walnut",
            "cashew",
            "pecan",
            "pistachio",
            "hazelnut",
            "macadamia",
        ],
    ),
    ("peanut", &["peanut"]),
    (
        "meat",
        &["meat", "beef", "pork", "lamb", "veal", "venison", "bison"],
    ),
    (
        "poultry",
        &["chicken", "turkey", "duck", "goose", "quail", "pheasant"],
    ),
    (
        "fish",
        &[
            "fish", "salmon", "tuna", "cod", "halibut", "mackerel", "sardine", "anchovy",
            "trout", "bass", "snapper",
        ],
    ),
    (
        "shellfish",
        &[
            "shrimp", "prawn", "crab", "lobster", "scallop", "mussel", "oyster", "clam",
            "squid", "octopus", "crayfish",
        ],
    ),
    (
        "dairy",
        &["milk", "cheese", "butter", "yogurt", "cream", "whey", "casein"],
    ),
    ("egg", &["egg", "eggs", "mayonnaise", "mayo"]),
    (
        "wheat",
        &["wheat", "flour", "bread", "pasta", "noodle", "cereal"],
    ),
    (
        "gluten",
        &[
            "wheat", "flour", "bread", "pasta", "noodle", "cereal", "barley", "rye", "oats",
            "malt",
        ],
    ),
];

const LEGUME_EXPANSION: &[&str] = &[
    "bean",
    "beans",
    "lentil",
    "lentils",
    "pea",
    "peas",
    "chickpea",
    "chickpeas",
    "garbanzo",
    "soy",
    "soybean",
    "edamame",
    "black bean",
    "kidney bean",
    "pinto bean",
    "navy bean",
    "lima bean",
    "mung bean",
];

const PEANUT_EXPANSION: &[&str] = &["peanut", "peanuts", "groundnut"];

const TREENUT_EXPANSION: &[&str] = &[
    "almond",
    "almonds",
    "walnut",
    "walnuts",
    "cashew",
    "cashews",
    "pecan",
    "pecans",
    "hazelnut",
    "hazelnuts",
    "pistachio",
    "pistachios",
    "brazil nut",
    "macadamia",
];

const EGG_EXPANSION: &[&str] = &["egg", "eggs", "mayonnaise", "mayo", "egg white", "egg yolk"];

/// Expansion table from a user-supplied exclusion tag to the keywords
/// checked against recipe ingredient lines. Singular and plural tag
/// spellings both resolve; tags missing from this table fall back to the
/// tag itself as the sole keyword.
const USER_TAG_EXPANSION: &[(&str, &[&str])] = &[
    ("legume", LEGUME_EXPANSION),
    ("legumes", LEGUME_EXPANSION),
    ("peanut", PEANUT_EXPANSION),
    ("peanuts", PEANUT_EXPANSION),
    ("treenut", TREENUT_EXPANSION),
    ("treenuts", TREENUT_EXPANSION),
    ("egg", EGG_EXPANSION),
    ("eggs", EGG_EXPANSION),
    (
        "dairy",
        &["milk", "cheese", "butter", "yogurt", "cream", "whey", "casein"],
    ),
    (
        "wheat",
        &["wheat", "flour", "bread", "pasta", "noodle", "noodles", "cereal"],
    ),
    (
        "gluten",
        &[
            "wheat", "flour", "bread", "pasta", "noodle", "noodles", "cereal", "barley",
            "rye", "oats",
        ],
    ),
];

/// Meat and poultry keywords — rejected for both vegetarian and pescetarian.
const MEAT_POULTRY_KEYWORDS: &[&str] = &[
    "meat", "poultry", "beef", "pork", "sausage", "chicken", "turkey", "lamb", "duck",
    "goose", "venison", "bison",
];

/// Fish and shellfish keywords — rejected for vegetarian only.
const FISH_SHELLFISH_KEYWORDS: &[&str] = &[
    "fish", "shellfish", "salmon", "tuna", "cod", "haddock", "mackerel", "sardine",
    "anchovy", "trout", "bass", "snapper", "halibut", "tilapia", "sea bass", "shrimp",
    "prawn", "crab", "lobster", "scallop", "mussel", "oyster", "clam", "squid", "octopus",
    "crayfish", "caviar",
];

/// Immutable keyword configuration for the classifier. Constructed once in
/// `main` and shared through `AppState`.
#[derive(Debug, Clone, Copy)]
pub struct KeywordTables {
    pub functional_groups: &'static [(FunctionalTag, &'static [&'static str])],
    pub ingredient_allergens: &'static [(&'static str, &'static [&'static str])],
    pub user_tag_expansion: &'static [(&'static str, &'static [&'static str])],
    pub meat_poultry: &'static [&'static str],
    pub fish_shellfish: &'static [&'static str],
}

impl Default for KeywordTables {
    fn default() -> Self {
        Self {
            functional_groups: FUNCTIONAL_GROUPS,
            ingredient_allergens: INGREDIENT_ALLERGEN_KEYWORDS,
            user_tag_expansion: USER_TAG_EXPANSION,
            meat_poultry: MEAT_POULTRY_KEYWORDS,
            fish_shellfish: FISH_SHELLFISH_KEYWORDS,
        }
    }
}

impl KeywordTables {
    /// Keywords for a user exclusion tag. Unknown tags map to themselves so
    /// callers can exclude on any free-text tag.
    pub fn expand_user_tag<'a>(&self, tag: &'a str) -> Vec<&'a str> {
        self.user_tag_expansion
            .iter()
            .find(|(name, _)| *name == tag)
            .map(|(_, keywords)| keywords.to_vec())
            .unwrap_or_else(|| vec![tag])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_functional_groups_cover_four_roles() {
        let tables = KeywordTables::default();
        let roles: Vec<FunctionalTag> =
            tables.functional_groups.iter().map(|(t, _)| *t).collect();
        assert_eq!(
            roles,
            vec![
                FunctionalTag::Protein,
                FunctionalTag::Starch,
                FunctionalTag::FatDairy,
                FunctionalTag::Produce
            ]
        );
    }

    #[test]
    fn test_dairy_expansion_matches_contract() {
        let tables = KeywordTables::default();
        let keywords = tables.expand_user_tag("dairy");
        for expected in ["milk", "cheese", "butter", "yogurt", "cream", "whey", "casein"] {
            assert!(keywords.contains(&expected), "missing {expected}");
        }
    }

    #[test]
    fn test_plural_tag_aliases_resolve() {
        let tables = KeywordTables::default();
        assert_eq!(
            tables.expand_user_tag("treenut"),
            tables.expand_user_tag("treenuts")
        );
        assert_eq!(tables.expand_user_tag("eggs"), tables.expand_user_tag("egg"));
    }

    #[test]
    fn test_unknown_tag_falls_back_to_itself() {
        let tables = KeywordTables::default();
        assert_eq!(tables.expand_user_tag("sesame"), vec!["sesame"]);
    }

    #[test]
    fn test_gluten_is_superset_of_wheat_for_ingredients() {
        let tables = KeywordTables::default();
        let wheat = tables
            .ingredient_allergens
            .iter()
            .find(|(t, _)| *t == "wheat")
            .unwrap()
            .1;
        let gluten = tables
            .ingredient_allergens
            .iter()
            .find(|(t, _)| *t == "gluten")
            .unwrap()
            .1;
        for keyword in wheat {
            assert!(gluten.contains(keyword), "gluten missing {keyword}");
        }
    }
}
