//! End-to-end ranking against the sample reference data in `data/`.

use pantry_core::{
    find_matching_recipes, parse_generated_recipes, rank_recipes, DietType, PantryConfig,
    Provenance, ReferenceData, UserIngredients,
};
use std::path::Path;

fn reference_data() -> ReferenceData {
    let data_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../data");
    let data = ReferenceData::load(&PantryConfig::with_data_dir(data_dir));
    assert!(!data.recipes.is_empty(), "Sample catalog failed to load");
    data
}

#[test]
fn test_sample_catalog_loads() {
    let data = reference_data();
    assert_eq!(data.recipes.len(), 8);
    assert!(data
        .recipes
        .iter()
        .all(|r| r.provenance == Provenance::Catalog));
    assert!(!data.substitutes.is_empty());
}

#[test]
fn test_partial_match_ranks_first() {
    let data = reference_data();
    let ranking = find_matching_recipes("chicken, rice", &data, None);

    assert!(ranking.ready().is_empty());
    let top = &ranking.entries()[0];
    assert_eq!(top.recipe.name, "Chicken Fried Rice");
    // 100 * 2/5 - 15
    assert_eq!(top.result.score, 25.0);
    assert_eq!(top.result.missing_mandatory, vec!["onion"]);
}

#[test]
fn test_complete_match_is_ready() {
    let data = reference_data();
    let ranking = find_matching_recipes("Eggs, bread, butter", &data, None);

    let ready: Vec<&str> = ranking.ready().iter().map(|e| e.recipe.name.as_str()).collect();
    assert_eq!(ready, vec!["Egg Toast"]);
    assert_eq!(ranking.ready()[0].result.score, 100.0);
    // Masala Omelette: 100 * 1/5 - 15
    let omelette = ranking
        .entries()
        .iter()
        .find(|e| e.recipe.name == "Masala Omelette")
        .unwrap();
    assert_eq!(omelette.result.score, 5.0);
}

#[test]
fn test_every_recipe_is_returned() {
    let data = reference_data();
    let ranking = find_matching_recipes("saffron", &data, None);
    assert_eq!(ranking.len(), data.recipes.len());
}

#[test]
fn test_veg_filter() {
    let data = reference_data();
    let ranking = find_matching_recipes("onion, tomato, rice", &data, Some(DietType::Veg));

    assert_eq!(ranking.len(), 4);
    assert!(ranking
        .entries()
        .iter()
        .all(|e| e.recipe.diet == DietType::Veg));
    assert_eq!(ranking.ready()[0].recipe.name, "Tomato Rice");
}

#[test]
fn test_substitute_lookup_normalizes() {
    let data = reference_data();
    let eggs = data.substitutes.substitutes_for("Eggs");
    assert!(!eggs.is_empty());
    assert_eq!(eggs, data.substitutes.substitutes_for("egg"));
    assert_eq!(eggs[0], "flax egg");
}

#[test]
fn test_suggestions_for_missing_ingredients() {
    let data = reference_data();
    let ranking = find_matching_recipes("chicken, rice", &data, None);
    let suggestions = ranking.entries()[0].substitute_suggestions(&data.substitutes, 3);

    assert_eq!(suggestions[0].ingredient, "onion");
    assert!(suggestions[0].mandatory);
    assert_eq!(suggestions[0].substitutes, vec!["shallot", "leek", "spring onion"]);
}

#[test]
fn test_generated_recipes_rank_with_catalog() {
    let data = reference_data();
    let response = r#"```json
{
  "recipes": [
    {
      "id": 100,
      "name": "Banana Peanut Butter Toast",
      "cuisine": "Continental",
      "type": "veg",
      "ingredients": {
        "mandatory": [{"name": "bread"}, {"name": "peanut butter"}, {"name": "banana"}],
        "optional": [{"name": "honey"}]
      },
      "instructions": ["Toast the bread", "Spread and top with banana"]
    },
    {
      "id": 101,
      "name": "Broken Recipe",
      "cuisine": "Unknown",
      "type": "keto",
      "ingredients": {"mandatory": []},
      "instructions": []
    }
  ]
}
```"#;

    let batch = parse_generated_recipes(response, 2);
    assert_eq!(batch.recipes.len(), 1);
    assert_eq!(batch.rejected, 1);

    let user = UserIngredients::parse("peanut butter, banana, bread");
    let ranking = rank_recipes(&user, data.recipes.iter().chain(&batch.recipes), None);

    let top = &ranking.ready()[0];
    assert_eq!(top.recipe.name, "Banana Peanut Butter Toast");
    assert_eq!(top.recipe.provenance, Provenance::Generated);
    assert_eq!(ranking.len(), data.recipes.len() + 1);
}
