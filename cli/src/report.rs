//! Plain-text output for ranked recipes.

use pantry_core::{
    GeneratedBatch, PantryConfig, RankedRecipe, Ranking, SubstituteTable, UserIngredients,
};

pub fn print_ranking(
    user: &UserIngredients,
    ranking: &Ranking<'_>,
    substitutes: &SubstituteTable,
    config: &PantryConfig,
) {
    println!("You have: {}", user.tokens().join(", "));

    if ranking.is_empty() {
        println!("\nNo recipes found with those ingredients.");
        return;
    }

    let ready = ranking.ready();
    if !ready.is_empty() {
        println!("\n== Ready to cook ({}) ==", ready.len());
        for entry in ready {
            print_entry(entry, substitutes, config.substitute_limit);
        }
    }

    let need_more = ranking.need_more(config.need_more_limit);
    if !need_more.is_empty() {
        println!("\n== Need a few more ingredients ==");
        for entry in need_more {
            print_entry(entry, substitutes, config.substitute_limit);
        }
    }
}

fn print_entry(entry: &RankedRecipe<'_>, substitutes: &SubstituteTable, limit: usize) {
    let recipe = entry.recipe;
    let badge = if recipe.is_generated() { " [generated]" } else { "" };
    println!(
        "\n{}{} ({}, {}) - score {:.1}",
        recipe.name, badge, recipe.cuisine, recipe.diet, entry.result.score
    );

    if !entry.result.matched.is_empty() {
        println!("  have: {}", entry.result.matched.join(", "));
    }

    for suggestion in entry.substitute_suggestions(substitutes, limit) {
        let label = if suggestion.mandatory { "need" } else { "optional" };
        if suggestion.substitutes.is_empty() {
            println!("  {}: {}", label, suggestion.ingredient);
        } else {
            println!(
                "  {}: {} (or use: {})",
                label,
                suggestion.ingredient,
                suggestion.substitutes.join(", ")
            );
        }
    }
}

pub fn print_substitutes(ingredient: &str, substitutes: &[String]) {
    if substitutes.is_empty() {
        println!("No substitutes known for {}", ingredient);
        return;
    }
    for (idx, substitute) in substitutes.iter().enumerate() {
        println!("{}. {}", idx + 1, substitute);
    }
}

pub fn print_check(batch: &GeneratedBatch) {
    println!("{} valid, {} rejected", batch.recipes.len(), batch.rejected);
    for recipe in &batch.recipes {
        println!(
            "  {} ({}, {}): {} mandatory, {} optional, {} steps",
            recipe.name,
            recipe.cuisine,
            recipe.diet,
            recipe.ingredients.mandatory.len(),
            recipe.ingredients.optional.len(),
            recipe.instructions.len()
        );
    }
}
