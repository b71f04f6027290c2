//! Recipe ranking across a catalog.

use std::cmp::Ordering;

use serde::Serialize;

use crate::matcher::{score_recipe, MatchResult, UserIngredients};
use crate::recipe::{DietType, Recipe};
use crate::store::ReferenceData;
use crate::substitutes::SubstituteTable;

/// A recipe paired with its match against the user's ingredients.
#[derive(Debug, Clone, Serialize)]
pub struct RankedRecipe<'a> {
    pub recipe: &'a Recipe,
    #[serde(rename = "match_info")]
    pub result: MatchResult,
}

/// A missing ingredient and what could stand in for it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubstituteSuggestion {
    pub ingredient: String,
    pub mandatory: bool,
    /// Empty when the table has nothing for this ingredient.
    pub substitutes: Vec<String>,
}

impl RankedRecipe<'_> {
    /// Substitute suggestions for every missing ingredient, mandatory first.
    pub fn substitute_suggestions(
        &self,
        table: &SubstituteTable,
        limit: usize,
    ) -> Vec<SubstituteSuggestion> {
        let mandatory = self.result.missing_mandatory.iter().map(|i| (i, true));
        let optional = self.result.missing_optional.iter().map(|i| (i, false));

        mandatory
            .chain(optional)
            .map(|(ingredient, mandatory)| SubstituteSuggestion {
                ingredient: ingredient.clone(),
                mandatory,
                substitutes: table.top_substitutes(ingredient, limit).to_vec(),
            })
            .collect()
    }
}

/// Ranked results, can-make-now recipes first, then by descending score.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Ranking<'a> {
    entries: Vec<RankedRecipe<'a>>,
}

impl<'a> Ranking<'a> {
    pub fn entries(&self) -> &[RankedRecipe<'a>] {
        &self.entries
    }

    /// Every recipe the user can make with what they have.
    pub fn ready(&self) -> &[RankedRecipe<'a>] {
        &self.entries[..self.ready_count()]
    }

    /// Up to `limit` of the remaining recipes, best first.
    pub fn need_more(&self, limit: usize) -> &[RankedRecipe<'a>] {
        let rest = &self.entries[self.ready_count()..];
        &rest[..rest.len().min(limit)]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn ready_count(&self) -> usize {
        self.entries.partition_point(|e| e.result.can_make_now)
    }
}

/// Score and sort recipes against the user's ingredients.
///
/// With a dietary filter, recipes of the other type are dropped. Nothing is
/// dropped for a low score. The sort is stable, so equal entries keep their
/// input order.
pub fn rank_recipes<'a, I>(
    user: &UserIngredients,
    recipes: I,
    diet: Option<DietType>,
) -> Ranking<'a>
where
    I: IntoIterator<Item = &'a Recipe>,
{
    let mut entries: Vec<RankedRecipe<'a>> = recipes
        .into_iter()
        .filter(|recipe| diet.map_or(true, |d| recipe.diet == d))
        .map(|recipe| RankedRecipe {
            recipe,
            result: score_recipe(user, recipe),
        })
        .collect();

    entries.sort_by(|a, b| compare_results(&a.result, &b.result));

    tracing::info!(
        "Ranked {} recipes for {} ingredients ({} ready now)",
        entries.len(),
        user.len(),
        entries.iter().filter(|e| e.result.can_make_now).count()
    );

    Ranking { entries }
}

/// Normalize free-text input and rank the loaded catalog.
pub fn find_matching_recipes<'a>(
    input: &str,
    data: &'a ReferenceData,
    diet: Option<DietType>,
) -> Ranking<'a> {
    let user = UserIngredients::parse(input);
    rank_recipes(&user, &data.recipes, diet)
}

/// Descending by can-make-now, then by score.
fn compare_results(a: &MatchResult, b: &MatchResult) -> Ordering {
    b.can_make_now
        .cmp(&a.can_make_now)
        .then_with(|| b.score.total_cmp(&a.score))
}
