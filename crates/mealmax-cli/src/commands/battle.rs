//! The `mealmax battle` command.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};

use mealmax_core::parser;
use mealmax_core::statistics::InMemoryStats;
use mealmax_core::BattleEngine;

use crate::config::load_config_from;

pub fn execute(
    meals_path: PathBuf,
    first: i64,
    second: i64,
    seed: Option<u64>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    anyhow::ensure!(first != second, "a meal cannot battle itself (id {first})");

    let config = load_config_from(config_path.as_deref())?;
    let meals = parser::parse_meals(&meals_path)?;

    let find = |id: i64| {
        meals
            .iter()
            .find(|m| m.id == id)
            .cloned()
            .with_context(|| format!("meal {id} not found in {}", meals_path.display()))
    };
    let first = find(first)?;
    let second = find(second)?;

    let seed = seed.or(config.seed);
    let stats = Arc::new(InMemoryStats::new());
    let mut engine = BattleEngine::new(Arc::new(super::random_source(seed)), stats.clone());

    engine.add_combatant(first)?;
    engine.add_combatant(second)?;

    for meal in engine.get_roster() {
        println!(
            "{}: score {:.3}",
            super::describe(meal),
            mealmax_core::scoring::compute_score(meal)
        );
    }

    let winner = engine.run_battle()?;

    if let Some(outcome) = engine.last_outcome() {
        println!(
            "Delta {:.3}, threshold {:.3}, draw {:.3}{}",
            outcome.delta,
            outcome.threshold,
            outcome.draw,
            if outcome.upset { " (upset!)" } else { "" }
        );
    }
    println!("Winner: {winner}");

    for (id, outcome) in stats.calls() {
        println!("  meal {id}: {outcome}");
    }

    Ok(())
}
