//! The `mealmax score` command.

use std::path::PathBuf;

use anyhow::Result;

use mealmax_core::parser;
use mealmax_core::scoring::compute_score;

pub fn execute(meals_path: PathBuf) -> Result<()> {
    use comfy_table::{Cell, Table};

    let meals = parser::parse_meals(&meals_path)?;

    let mut table = Table::new();
    table.set_header(vec!["ID", "Meal", "Cuisine", "Price", "Difficulty", "Score"]);

    for meal in &meals {
        table.add_row(vec![
            Cell::new(meal.id),
            Cell::new(&meal.name),
            Cell::new(&meal.cuisine),
            Cell::new(format!("{:.2}", meal.price)),
            Cell::new(meal.difficulty),
            Cell::new(format!("{:.3}", compute_score(meal))),
        ]);
    }

    println!("{table}");
    Ok(())
}
