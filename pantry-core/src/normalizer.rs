//! Ingredient name normalization.
//!
//! Turns noisy user text (e.g., "Fresh  Tomatoes") into canonical tokens
//! ("tomato") so that user input and recipe ingredients compare by plain
//! string equality.

use std::collections::HashSet;

/// Irregular and common plurals, matched against the whole string only.
const SINGULAR_FORMS: &[(&str, &str)] = &[
    ("tomatoes", "tomato"),
    ("potatoes", "potato"),
    ("onions", "onion"),
    ("carrots", "carrot"),
    ("peppers", "pepper"),
    ("mushrooms", "mushroom"),
    ("beans", "bean"),
    ("peas", "pea"),
    ("chickpeas", "chickpea"),
    ("eggs", "egg"),
    ("cloves", "clove"),
    ("leaves", "leaf"),
];

/// Descriptive words that don't affect matching.
///
/// Removed as plain substrings in declaration order, so a word that merely
/// contains one of these ("groundnut") loses that part too.
const MODIFIER_WORDS: &[&str] = &[
    "fresh", "dried", "raw", "cooked", "chopped", "diced", "sliced", "minced", "whole", "ground",
    "powdered", "large", "small", "medium",
];

/// Normalize a single ingredient name into its canonical token.
///
/// Never fails: empty or whitespace-only input yields an empty string.
/// The plural lookup and modifier stripping are repeated until the token
/// stops changing, so `normalize_ingredient` is idempotent.
pub fn normalize_ingredient(raw: &str) -> String {
    let mut current = collapse_whitespace(&raw.to_lowercase());

    loop {
        let next = normalize_pass(&current);
        if next == current {
            return next;
        }
        current = next;
    }
}

/// One pass of singularization followed by modifier removal.
fn normalize_pass(token: &str) -> String {
    let mut result = singularize(token).to_string();

    for word in MODIFIER_WORDS {
        if result.contains(word) {
            result = result.replace(word, "").trim().to_string();
        }
    }

    collapse_whitespace(&result)
}

fn singularize(token: &str) -> &str {
    SINGULAR_FORMS
        .iter()
        .find(|(plural, _)| *plural == token)
        .map(|(_, singular)| *singular)
        .unwrap_or(token)
}

/// Trim and collapse any run of whitespace into a single space.
fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalize comma-separated free text into a list of canonical tokens.
///
/// e.g., "Tomatoes, fresh Onion, egg" -> ["tomato", "onion", "egg"]
pub fn normalize_ingredient_list(text: &str) -> Vec<String> {
    normalize_ingredients(text.split(','))
}

/// Normalize a list of ingredient names.
///
/// Drops entries that normalize to nothing and collapses duplicates, keeping
/// the first occurrence's position.
pub fn normalize_ingredients<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut result = Vec::new();

    for item in items {
        let token = normalize_ingredient(item.as_ref());
        if !token.is_empty() && seen.insert(token.clone()) {
            result.push(token);
        }
    }

    result
}
