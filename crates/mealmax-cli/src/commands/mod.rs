pub mod battle;
pub mod init;
pub mod score;
pub mod tournament;
pub mod validate;

use mealmax_core::random::SeededRandom;
use mealmax_core::Meal;

/// Build the random source, seeded when a seed is known.
fn random_source(seed: Option<u64>) -> SeededRandom {
    match seed {
        Some(seed) => SeededRandom::new(seed),
        None => SeededRandom::from_entropy(),
    }
}

fn describe(meal: &Meal) -> String {
    format!(
        "{} ({}, {}, ${:.2})",
        meal.name, meal.cuisine, meal.difficulty, meal.price
    )
}
