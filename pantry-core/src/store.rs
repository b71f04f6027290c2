//! Read-only reference data: the recipe catalog and the substitute table.
//!
//! The `load_*` functions never fail. A missing or malformed file is logged
//! and treated as an empty collection, so "no recipes available" is an
//! ordinary state for callers. The `try_load_*` variants surface the error.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::config::PantryConfig;
use crate::error::DataError;
use crate::recipe::{Provenance, Recipe};
use crate::substitutes::SubstituteTable;

/// The raw JSON structure for the recipe catalog file.
#[derive(Deserialize)]
struct RecipesFile {
    #[serde(default)]
    recipes: Vec<serde_json::Value>,
}

/// The raw JSON structure for the substitutes file.
#[derive(Deserialize)]
struct SubstitutesFile {
    #[serde(default)]
    substitutes: BTreeMap<String, Vec<String>>,
}

/// Catalog and substitute table loaded together for one request.
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    pub recipes: Vec<Recipe>,
    pub substitutes: SubstituteTable,
}

impl ReferenceData {
    pub fn load(config: &PantryConfig) -> Self {
        let recipes = load_recipes(&config.recipes_path);
        let substitutes = load_substitutes(&config.substitutes_path);
        tracing::info!(
            "Loaded {} recipes and {} substitute entries",
            recipes.len(),
            substitutes.len()
        );
        Self {
            recipes,
            substitutes,
        }
    }
}

/// Load the recipe catalog, or an empty list if it can't be read.
pub fn load_recipes(path: &Path) -> Vec<Recipe> {
    try_load_recipes(path).unwrap_or_else(|e| {
        tracing::warn!("Recipe catalog unavailable: {}", e);
        Vec::new()
    })
}

/// Load the substitute table, or an empty table if it can't be read.
pub fn load_substitutes(path: &Path) -> SubstituteTable {
    try_load_substitutes(path).unwrap_or_else(|e| {
        tracing::warn!("Substitute table unavailable: {}", e);
        SubstituteTable::default()
    })
}

/// Load the recipe catalog.
///
/// Individual records that don't match the recipe shape are skipped with a
/// warning rather than failing the whole file.
pub fn try_load_recipes(path: &Path) -> Result<Vec<Recipe>, DataError> {
    let file: RecipesFile = read_json(path)?;
    Ok(parse_catalog_records(file.recipes))
}

pub fn try_load_substitutes(path: &Path) -> Result<SubstituteTable, DataError> {
    let file: SubstitutesFile = read_json(path)?;
    Ok(SubstituteTable::new(file.substitutes))
}

fn parse_catalog_records(records: Vec<serde_json::Value>) -> Vec<Recipe> {
    let total = records.len();
    let mut recipes = Vec::with_capacity(total);

    for (idx, value) in records.into_iter().enumerate() {
        match serde_json::from_value::<Recipe>(value) {
            Ok(mut recipe) => {
                recipe.provenance = Provenance::Catalog;
                recipes.push(recipe);
            }
            Err(e) => tracing::warn!("Skipping catalog recipe #{}: {}", idx, e),
        }
    }

    if recipes.len() < total {
        tracing::warn!(
            "Skipped {} of {} catalog recipes",
            total - recipes.len(),
            total
        );
    }

    recipes
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, DataError> {
    let content = fs::read_to_string(path).map_err(|source| DataError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| DataError::InvalidJson {
        path: path.to_path_buf(),
        source,
    })
}
