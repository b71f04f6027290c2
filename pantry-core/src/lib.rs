pub mod config;
pub mod error;
pub mod generated;
pub mod matcher;
pub mod normalizer;
pub mod ranker;
pub mod recipe;
pub mod store;
pub mod substitutes;

pub use config::PantryConfig;
pub use error::{DataError, ValidationError};
pub use generated::{parse_generated_recipes, validate_generated_recipe, GeneratedBatch};
pub use matcher::{score_recipe, MatchResult, UserIngredients};
pub use normalizer::{normalize_ingredient, normalize_ingredient_list, normalize_ingredients};
pub use ranker::{
    find_matching_recipes, rank_recipes, RankedRecipe, Ranking, SubstituteSuggestion,
};
pub use recipe::{DietType, Provenance, Recipe, RecipeIngredient, RecipeIngredients};
pub use store::{load_recipes, load_substitutes, ReferenceData};
pub use substitutes::SubstituteTable;
