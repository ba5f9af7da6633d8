//! Meal Combination Engine — exhaustive subset search over a safe ingredient
//! catalog, ranked by diversity, then protein, then cost.
//!
//! Pure and sequential: no I/O, deterministic output for identical inputs.
//! Enumeration is brute force (C(n,k) for k in 2..=max), acceptable for
//! catalogs of dozens of ingredients; larger catalogs need pruning upstream.

pub mod combinations;
pub mod handlers;
pub mod names;

use std::collections::BTreeSet;

use crate::classifier::{self, keywords::KeywordTables};
use crate::models::ingredient::{FunctionalTag, Ingredient};
use crate::models::meal::{MealCombination, MealConstraints};
use combinations::combinations;
use names::clean_name;

/// Number of ranked combinations returned.
const MAX_RESULTS: usize = 5;

/// Finds the top combinations of 2..=max_ingredients catalog entries that
/// satisfy the constraint set, ranked by (diversity desc, protein desc,
/// cost asc). Returns an empty vec when nothing survives — never an error.
///
/// Numeric sanity of catalog and constraints is the caller's responsibility.
pub fn find_best_meals(
    catalog: &[Ingredient],
    constraints: &MealConstraints,
    tables: &KeywordTables,
) -> Vec<MealCombination> {
    // Safety filter: drop anything carrying an excluded allergen tag, then
    // compute functional tags once per retained ingredient.
    let safe: Vec<(&Ingredient, BTreeSet<FunctionalTag>)> = catalog
        .iter()
        .filter(|ing| {
            !ing.allergy_tags
                .iter()
                .any(|tag| constraints.excluded_tags.contains(tag))
        })
        .map(|ing| (ing, classifier::tag_functional(tables, &ing.name)))
        .collect();

    let mut survivors: Vec<MealCombination> = Vec::new();

    // Size 1 is never considered: multi-ingredient meals are forced.
    for size in 2..=constraints.max_ingredients {
        for combo in combinations(safe.len(), size) {
            if let Some(meal) = evaluate_combination(&safe, &combo, constraints) {
                survivors.push(meal);
            }
        }
    }

    // Stable sort keeps enumeration order as the final tie-break.
    survivors.sort_by(|a, b| {
        b.diversity_score
            .cmp(&a.diversity_score)
            .then(b.total_protein_g.total_cmp(&a.total_protein_g))
            .then(a.total_cost.total_cmp(&b.total_cost))
    });
    survivors.truncate(MAX_RESULTS);
    survivors
}

/// Applies the duplicate-role rule, diversity floor, and threshold filter to
/// one combination; materializes it when it survives all three.
fn evaluate_combination(
    safe: &[(&Ingredient, BTreeSet<FunctionalTag>)],
    combo: &[usize],
    constraints: &MealConstraints,
) -> Option<MealCombination> {
    let mut starch_taken = false;
    let mut protein_taken = false;
    let mut tag_union: BTreeSet<FunctionalTag> = BTreeSet::new();

    for &idx in combo {
        let (_, roles) = &safe[idx];
        // Duplicate-role rule: at most one Starch member and one Protein
        // member. An ingredient carrying both roles occupies only the
        // Starch slot.
        if roles.contains(&FunctionalTag::Starch) {
            if starch_taken {
                return None;
            }
            starch_taken = true;
        } else if roles.contains(&FunctionalTag::Protein) {
            if protein_taken {
                return None;
            }
            protein_taken = true;
        }
        tag_union.extend(roles.iter().copied());
    }

    let diversity_score = tag_union.len();
    if diversity_score < 2 {
        return None;
    }

    let total_cost: f64 = combo.iter().map(|&i| safe[i].0.cost_per_100g).sum();
    let total_protein: f64 = combo.iter().map(|&i| safe[i].0.protein_g).sum();
    let total_fat: f64 = combo.iter().map(|&i| safe[i].0.fat_g).sum();

    if total_cost > constraints.max_cost
        || total_protein < constraints.min_protein
        || total_fat > constraints.max_fat
    {
        return None;
    }

    Some(MealCombination {
        ingredients: combo
            .iter()
            .map(|&i| clean_name(&safe[i].0.name))
            .collect(),
        total_cost: round_to(total_cost, 2),
        total_protein_g: round_to(total_protein, 1),
        total_fat_g: round_to(total_fat, 1),
        num_ingredients: combo.len(),
        diversity_score,
    })
}

fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10_f64.powi(places as i32);
    (value * factor).round() / factor
}
