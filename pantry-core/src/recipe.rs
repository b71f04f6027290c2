//! Recipe records as loaded from the catalog or produced by a generator.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Dietary type of a recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DietType {
    #[serde(rename = "veg")]
    Veg,
    #[serde(rename = "non-veg")]
    NonVeg,
}

impl DietType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DietType::Veg => "veg",
            DietType::NonVeg => "non-veg",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "veg" => Some(DietType::Veg),
            "non-veg" => Some(DietType::NonVeg),
            _ => None,
        }
    }
}

impl fmt::Display for DietType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a recipe came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    /// The static reference catalog.
    #[default]
    Catalog,
    /// An external recipe generator.
    Generated,
}

/// A single ingredient line on a recipe. Only `name` takes part in matching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl RecipeIngredient {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount: None,
            category: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredients {
    pub mandatory: Vec<RecipeIngredient>,
    #[serde(default)]
    pub optional: Vec<RecipeIngredient>,
}

/// A recipe record. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(default)]
    pub id: u32,
    pub name: String,
    pub cuisine: String,
    #[serde(rename = "type")]
    pub diet: DietType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prep_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cook_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    pub ingredients: RecipeIngredients,
    /// Recipe-local substitute hints. The global substitute table is what
    /// lookups use; these are carried for display only.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub substitutes: HashMap<String, Vec<String>>,
    pub instructions: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Set by whichever loader produced the record, never read from input.
    #[serde(skip_deserializing, default)]
    pub provenance: Provenance,
}

impl Recipe {
    pub fn is_generated(&self) -> bool {
        self.provenance == Provenance::Generated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG_RECIPE: &str = r#"{
        "id": 3,
        "name": "Egg Fried Rice",
        "cuisine": "Asian",
        "type": "non-veg",
        "prep_time": "10 mins",
        "cook_time": "15 mins",
        "servings": 2,
        "difficulty": "easy",
        "ingredients": {
            "mandatory": [
                {"name": "rice", "amount": "2 cups", "category": "grain"},
                {"name": "eggs", "amount": "2", "category": "protein"}
            ],
            "optional": [{"name": "spring onion"}]
        },
        "substitutes": {"rice": ["quinoa"]},
        "instructions": ["Scramble the eggs", "Add rice and fry"],
        "tags": ["quick"]
    }"#;

    #[test]
    fn test_deserialize_catalog_recipe() {
        let recipe: Recipe = serde_json::from_str(CATALOG_RECIPE).unwrap();
        assert_eq!(recipe.id, 3);
        assert_eq!(recipe.diet, DietType::NonVeg);
        assert_eq!(recipe.ingredients.mandatory.len(), 2);
        assert_eq!(recipe.ingredients.optional[0].amount, None);
        assert_eq!(recipe.provenance, Provenance::Catalog);
        assert!(!recipe.is_generated());
    }

    #[test]
    fn test_provenance_not_read_from_input() {
        let json = CATALOG_RECIPE.replacen("\"id\": 3,", "\"id\": 3, \"provenance\": \"generated\",", 1);
        let recipe: Recipe = serde_json::from_str(&json).unwrap();
        assert_eq!(recipe.provenance, Provenance::Catalog);
    }

    #[test]
    fn test_optional_ingredients_default_empty() {
        let json = r#"{
            "name": "Toast",
            "cuisine": "Continental",
            "type": "veg",
            "ingredients": {"mandatory": [{"name": "bread"}]},
            "instructions": ["Toast the bread"]
        }"#;
        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert!(recipe.ingredients.optional.is_empty());
        assert_eq!(recipe.id, 0);
    }

    #[test]
    fn test_unknown_diet_type_rejected() {
        let json = CATALOG_RECIPE.replace("\"non-veg\"", "\"vegan\"");
        assert!(serde_json::from_str::<Recipe>(&json).is_err());
    }

    #[test]
    fn test_diet_type_strings() {
        assert_eq!(DietType::from_str("veg"), Some(DietType::Veg));
        assert_eq!(DietType::from_str("non-veg"), Some(DietType::NonVeg));
        assert_eq!(DietType::from_str("Veg"), None);
        assert_eq!(DietType::NonVeg.to_string(), "non-veg");
    }
}
