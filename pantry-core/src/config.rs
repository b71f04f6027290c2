//! Configuration from environment variables.

use std::env;
use std::path::PathBuf;

/// Default directory holding the reference data files.
pub const DEFAULT_DATA_DIR: &str = "data";

/// Default number of not-yet-makeable recipes a caller shows.
pub const DEFAULT_NEED_MORE_LIMIT: usize = 10;

/// Default number of substitutes suggested per missing ingredient.
pub const DEFAULT_SUBSTITUTE_LIMIT: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct PantryConfig {
    /// Path to the recipe catalog JSON.
    pub recipes_path: PathBuf,
    /// Path to the substitute table JSON.
    pub substitutes_path: PathBuf,
    pub need_more_limit: usize,
    pub substitute_limit: usize,
}

impl Default for PantryConfig {
    fn default() -> Self {
        Self::with_data_dir(DEFAULT_DATA_DIR)
    }
}

impl PantryConfig {
    /// Standard file layout under a data directory.
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        Self {
            recipes_path: data_dir.join("recipes.json"),
            substitutes_path: data_dir.join("substitutes.json"),
            need_more_limit: DEFAULT_NEED_MORE_LIMIT,
            substitute_limit: DEFAULT_SUBSTITUTE_LIMIT,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `PANTRY_DATA_DIR`: Reference data directory (default: "data")
    /// - `PANTRY_RECIPES_PATH`: Recipe catalog (default: "<data dir>/recipes.json")
    /// - `PANTRY_SUBSTITUTES_PATH`: Substitute table (default: "<data dir>/substitutes.json")
    /// - `PANTRY_NEED_MORE_LIMIT`: Not-yet-makeable recipes to show (default: 10)
    /// - `PANTRY_SUBSTITUTE_LIMIT`: Substitutes per missing ingredient (default: 3)
    pub fn from_env() -> Self {
        let data_dir =
            env::var("PANTRY_DATA_DIR").unwrap_or_else(|_| DEFAULT_DATA_DIR.to_string());
        let mut config = Self::with_data_dir(data_dir);

        if let Ok(path) = env::var("PANTRY_RECIPES_PATH") {
            config.recipes_path = PathBuf::from(path);
        }
        if let Ok(path) = env::var("PANTRY_SUBSTITUTES_PATH") {
            config.substitutes_path = PathBuf::from(path);
        }

        config.need_more_limit = env::var("PANTRY_NEED_MORE_LIMIT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_NEED_MORE_LIMIT);

        config.substitute_limit = env::var("PANTRY_SUBSTITUTE_LIMIT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_SUBSTITUTE_LIMIT);

        config
    }
}
