mod report;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use pantry_core::{
    normalize_ingredient_list, parse_generated_recipes, rank_recipes, DietType, GeneratedBatch,
    PantryConfig, ReferenceData, UserIngredients,
};

/// Generated recipes beyond this many are dropped.
const MAX_GENERATED_RECIPES: usize = 2;

#[derive(Parser)]
#[command(name = "pantry")]
#[command(about = "Find recipes you can cook with what you have", long_about = None)]
struct Cli {
    /// Recipe catalog JSON (default: $PANTRY_RECIPES_PATH or data/recipes.json)
    #[arg(long, global = true)]
    recipes: Option<PathBuf>,

    /// Substitute table JSON (default: $PANTRY_SUBSTITUTES_PATH or data/substitutes.json)
    #[arg(long, global = true)]
    substitutes: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Diet {
    Veg,
    NonVeg,
}

impl From<Diet> for DietType {
    fn from(diet: Diet) -> Self {
        match diet {
            Diet::Veg => DietType::Veg,
            Diet::NonVeg => DietType::NonVeg,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Rank recipes against a comma-separated ingredient list
    Match {
        /// Ingredients you have, e.g. "chicken, rice, onion"
        ingredients: String,
        /// Only show recipes of this dietary type
        #[arg(long, value_enum)]
        diet: Option<Diet>,
        /// Raw recipe generator response to rank alongside the catalog
        #[arg(long)]
        generated: Option<PathBuf>,
        /// How many not-yet-makeable recipes to show
        #[arg(long)]
        limit: Option<usize>,
        /// Print the full ranking as JSON
        #[arg(long)]
        json: bool,
    },
    /// List substitutes for an ingredient
    Substitutes {
        ingredient: String,
    },
    /// Show how an ingredient list is normalized
    Normalize {
        text: String,
    },
    /// Validate a recipe generator response
    Check {
        /// File containing the raw response text
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = PantryConfig::from_env();
    if let Some(path) = cli.recipes {
        config.recipes_path = path;
    }
    if let Some(path) = cli.substitutes {
        config.substitutes_path = path;
    }

    match cli.command {
        Commands::Match {
            ingredients,
            diet,
            generated,
            limit,
            json,
        } => {
            if let Some(limit) = limit {
                config.need_more_limit = limit;
            }
            run_match(
                &config,
                &ingredients,
                diet.map(DietType::from),
                generated,
                json,
            )?;
        }
        Commands::Substitutes { ingredient } => {
            let data = ReferenceData::load(&config);
            report::print_substitutes(&ingredient, data.substitutes.substitutes_for(&ingredient));
        }
        Commands::Normalize { text } => {
            for token in normalize_ingredient_list(&text) {
                println!("{}", token);
            }
        }
        Commands::Check { file } => {
            let batch = read_generated(&file, usize::MAX)?;
            report::print_check(&batch);
        }
    }

    Ok(())
}

fn run_match(
    config: &PantryConfig,
    ingredients: &str,
    diet: Option<DietType>,
    generated: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let user = UserIngredients::parse(ingredients);
    if user.is_empty() {
        println!("Please enter at least one ingredient.");
        return Ok(());
    }

    let data = ReferenceData::load(config);
    let batch = match generated {
        Some(path) => read_generated(&path, MAX_GENERATED_RECIPES)?,
        None => GeneratedBatch::default(),
    };

    tracing::info!(
        "Matching {} ingredients against {} catalog and {} generated recipes",
        user.len(),
        data.recipes.len(),
        batch.recipes.len()
    );

    let ranking = rank_recipes(&user, data.recipes.iter().chain(&batch.recipes), diet);

    if json {
        println!("{}", serde_json::to_string_pretty(&ranking)?);
        return Ok(());
    }

    report::print_ranking(&user, &ranking, &data.substitutes, config);
    Ok(())
}

fn read_generated(path: &Path, limit: usize) -> Result<GeneratedBatch> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read generator response {}", path.display()))?;
    Ok(parse_generated_recipes(&text, limit))
}
