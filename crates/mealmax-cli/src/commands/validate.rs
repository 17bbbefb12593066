//! The `mealmax validate` command.

use std::path::PathBuf;

use anyhow::Result;

pub fn execute(meals_path: PathBuf) -> Result<()> {
    let meals = mealmax_core::parser::parse_meals(&meals_path)?;

    println!("Meal file: {} ({} meals)", meals_path.display(), meals.len());

    let warnings = mealmax_core::parser::validate_meals(&meals);
    for w in &warnings {
        let prefix = w
            .meal_id
            .map(|id| format!("  [{id}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("All meals valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
