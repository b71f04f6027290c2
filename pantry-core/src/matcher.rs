//! Recipe match scoring.
//!
//! Compares a user's canonical ingredients against one recipe and produces a
//! score that favors recipes the user can cook right now over recipes that
//! merely share a high fraction of ingredients.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::normalizer::{normalize_ingredient_list, normalize_ingredients};
use crate::recipe::{Recipe, RecipeIngredient};

/// Flat bonus when no mandatory ingredient is missing.
const COMPLETE_BONUS: f64 = 50.0;
/// Penalty per missing mandatory ingredient.
const MISSING_MANDATORY_PENALTY: f64 = 15.0;
/// Bonus per optional ingredient the user has.
const OPTIONAL_MATCH_BONUS: f64 = 5.0;

const MAX_SCORE: f64 = 100.0;

/// The ingredients a user has, as unique canonical tokens in input order.
#[derive(Debug, Clone, Default)]
pub struct UserIngredients {
    tokens: Vec<String>,
    lookup: HashSet<String>,
}

impl UserIngredients {
    /// Parse comma-separated free text.
    pub fn parse(text: &str) -> Self {
        Self::from_tokens(normalize_ingredient_list(text))
    }

    /// Normalize a list of raw ingredient names.
    pub fn from_items<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_tokens(normalize_ingredients(items))
    }

    fn from_tokens(tokens: Vec<String>) -> Self {
        let lookup = tokens.iter().cloned().collect();
        Self { tokens, lookup }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.lookup.contains(token)
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// How well a user's ingredients match one recipe.
///
/// Ingredient lists follow the recipe's declaration order. `matched` lists
/// mandatory matches before optional ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// In [0, 100], rounded to one decimal place.
    pub score: f64,
    pub matched: Vec<String>,
    pub missing_mandatory: Vec<String>,
    pub missing_optional: Vec<String>,
    /// True exactly when `missing_mandatory` is empty.
    pub can_make_now: bool,
}

/// Score a recipe against the user's ingredients.
pub fn score_recipe(user: &UserIngredients, recipe: &Recipe) -> MatchResult {
    let mandatory = canonical_names(&recipe.ingredients.mandatory);
    let optional = canonical_names(&recipe.ingredients.optional);

    let (matched_mandatory, missing_mandatory): (Vec<String>, Vec<String>) =
        mandatory.iter().cloned().partition(|t| user.contains(t));
    let (matched_optional, missing_optional): (Vec<String>, Vec<String>) =
        optional.iter().cloned().partition(|t| user.contains(t));

    let mut matched = matched_mandatory;
    for token in &matched_optional {
        if !matched.contains(token) {
            matched.push(token.clone());
        }
    }

    let total = mandatory.len() + optional.len();
    let score = if total == 0 {
        0.0
    } else {
        let coverage = matched.len() as f64 / total as f64 * MAX_SCORE;
        let completeness = if missing_mandatory.is_empty() {
            COMPLETE_BONUS
        } else {
            -MISSING_MANDATORY_PENALTY * missing_mandatory.len() as f64
        };
        let optional_bonus = OPTIONAL_MATCH_BONUS * matched_optional.len() as f64;

        round_one_decimal((coverage + completeness + optional_bonus).clamp(0.0, MAX_SCORE))
    };

    let can_make_now = missing_mandatory.is_empty();

    tracing::debug!(
        "Scored '{}': {} (matched {}/{}, missing {} mandatory)",
        recipe.name,
        score,
        matched.len(),
        total,
        missing_mandatory.len()
    );

    MatchResult {
        score,
        matched,
        missing_mandatory,
        missing_optional,
        can_make_now,
    }
}

/// Unique canonical names of a recipe's ingredient lines, in order.
fn canonical_names(ingredients: &[RecipeIngredient]) -> Vec<String> {
    normalize_ingredients(ingredients.iter().map(|i| i.name.as_str()))
}

/// Exact ties go to the even digit, so 56.25 becomes 56.2.
fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}
