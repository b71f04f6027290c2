//! Validation boundary for recipes produced by an external generator.
//!
//! Generator output is untrusted text. It may be wrapped in Markdown code
//! fences or surrounded by chatter, and individual recipes may be missing
//! fields. Only records that pass validation come out as `Recipe`s, tagged
//! `Provenance::Generated`, so the scorer never sees a malformed record.

use serde_json::Value;

use crate::error::ValidationError;
use crate::recipe::{DietType, Provenance, Recipe};

/// Fields a generated recipe must carry.
const REQUIRED_FIELDS: &[&str] = &["name", "cuisine", "type", "ingredients", "instructions"];

/// Recipes that survived validation, plus how many were turned away.
#[derive(Debug, Clone, Default)]
pub struct GeneratedBatch {
    pub recipes: Vec<Recipe>,
    pub rejected: usize,
}

/// Parse raw generator output into validated recipes.
///
/// Returns at most `limit` recipes. Text with no recognizable JSON payload
/// yields an empty batch.
pub fn parse_generated_recipes(text: &str, limit: usize) -> GeneratedBatch {
    let Some(payload) = extract_json_payload(text) else {
        tracing::warn!("No JSON object found in generator response");
        return GeneratedBatch::default();
    };

    let data: Value = match serde_json::from_str(payload) {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!("Generator response is not valid JSON: {}", e);
            return GeneratedBatch::default();
        }
    };

    let candidates = match data.get("recipes") {
        Some(Value::Array(items)) => items.as_slice(),
        _ => &[],
    };

    let mut batch = GeneratedBatch::default();
    for (idx, candidate) in candidates.iter().enumerate() {
        match validate_generated_recipe(candidate) {
            Ok(recipe) => {
                tracing::debug!("Generated recipe #{} '{}' accepted", idx, recipe.name);
                batch.recipes.push(recipe);
            }
            Err(e) => {
                tracing::warn!("Generated recipe #{} rejected: {}", idx, e);
                batch.rejected += 1;
            }
        }
    }

    batch.recipes.truncate(limit);
    tracing::info!(
        "Accepted {} generated recipes ({} rejected)",
        batch.recipes.len(),
        batch.rejected
    );
    batch
}

/// Check a single generated record and convert it to a `Recipe`.
pub fn validate_generated_recipe(value: &Value) -> Result<Recipe, ValidationError> {
    let obj = value.as_object().ok_or(ValidationError::NotAnObject)?;

    for field in REQUIRED_FIELDS {
        if !obj.contains_key(*field) {
            return Err(ValidationError::MissingField(*field));
        }
    }

    if obj["ingredients"].get("mandatory").is_none() {
        return Err(ValidationError::MissingMandatory);
    }

    if !obj["instructions"].is_array() {
        return Err(ValidationError::InstructionsNotList);
    }

    let diet = &obj["type"];
    if diet.as_str().and_then(DietType::from_str).is_none() {
        return Err(ValidationError::InvalidType(diet.to_string()));
    }

    let mut recipe: Recipe = serde_json::from_value(value.clone())
        .map_err(|e| ValidationError::Malformed(e.to_string()))?;
    recipe.provenance = Provenance::Generated;
    Ok(recipe)
}

/// Locate the JSON object inside generator output.
///
/// Strips a ```json (or bare ```) fence if present, then takes everything
/// from the first `{` to the last `}`.
pub fn extract_json_payload(text: &str) -> Option<&str> {
    let text = text.trim();

    let inner = if let Some((_, rest)) = text.split_once("```json") {
        rest.split("```").next().unwrap_or(rest)
    } else if let Some((_, rest)) = text.split_once("```") {
        rest.split("```").next().unwrap_or(rest)
    } else {
        text
    };

    let inner = inner.trim();
    let start = inner.find('{')?;
    let end = inner.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&inner[start..=end])
}
