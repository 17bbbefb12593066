//! TOML meal file parser.
//!
//! Loads meals from TOML files and validates them.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::{Difficulty, Meal};

/// Intermediate TOML structure for parsing meal files.
#[derive(Debug, Deserialize)]
struct TomlMealFile {
    #[serde(default)]
    meals: Vec<TomlMeal>,
}

#[derive(Debug, Deserialize)]
struct TomlMeal {
    id: i64,
    #[serde(alias = "name")]
    meal: String,
    cuisine: String,
    price: f64,
    difficulty: String,
}

/// Parse a single TOML file into a list of meals.
pub fn parse_meals(path: &Path) -> Result<Vec<Meal>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read meal file: {}", path.display()))?;

    parse_meals_str(&content, path)
}

/// Parse a TOML string into meals (useful for testing).
pub fn parse_meals_str(content: &str, source_path: &Path) -> Result<Vec<Meal>> {
    let parsed: TomlMealFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let meals = parsed
        .meals
        .into_iter()
        .map(|m| {
            let difficulty: Difficulty = m
                .difficulty
                .parse()
                .with_context(|| format!("meal {} ({})", m.id, m.meal))?;
            Ok(Meal::new(m.id, m.meal, m.cuisine, m.price, difficulty))
        })
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!("loaded {} meals from {}", meals.len(), source_path.display());
    Ok(meals)
}

/// A warning from meal validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The meal ID (if applicable).
    pub meal_id: Option<i64>,
    /// Warning message.
    pub message: String,
}

/// Validate a list of meals for common issues.
pub fn validate_meals(meals: &[Meal]) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if meals.len() < 2 {
        warnings.push(ValidationWarning {
            meal_id: None,
            message: format!("only {} meal(s); a battle needs two", meals.len()),
        });
    }

    let mut seen_ids = HashSet::new();
    for meal in meals {
        if !seen_ids.insert(meal.id) {
            warnings.push(ValidationWarning {
                meal_id: Some(meal.id),
                message: format!("duplicate meal ID: {}", meal.id),
            });
        }
    }

    for meal in meals {
        if let Err(e) = meal.validate() {
            warnings.push(ValidationWarning {
                meal_id: Some(meal.id),
                message: e.to_string(),
            });
        }
        if meal.cuisine.trim().is_empty() {
            warnings.push(ValidationWarning {
                meal_id: Some(meal.id),
                message: "cuisine is empty".into(),
            });
        }
    }

    warnings
}
