//! The `mealmax tournament` command.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;

use mealmax_core::parser;
use mealmax_core::report::BattleReport;
use mealmax_core::statistics::{InMemoryStats, LeaderboardEntry, SortBy};
use mealmax_core::BattleEngine;

use crate::config::load_config_from;

pub fn execute(
    meals_path: PathBuf,
    seed: Option<u64>,
    sort: Option<String>,
    output: Option<PathBuf>,
    save: bool,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;

    let sort: SortBy = match sort {
        Some(s) => s.parse().map_err(|e: String| anyhow::anyhow!("{}", e))?,
        None => config.leaderboard_sort,
    };

    let meals = parser::parse_meals(&meals_path)?;
    for w in parser::validate_meals(&meals) {
        eprintln!("Warning: {}", w.message);
    }

    let seed = seed.or(config.seed);
    let stats = Arc::new(InMemoryStats::new());
    let mut engine = BattleEngine::new(Arc::new(super::random_source(seed)), stats.clone());

    eprintln!(
        "mealmax v0.1.0 — {} meals, {} battles",
        meals.len(),
        meals.len().saturating_sub(1)
    );

    let result = engine.run_tournament(&meals)?;

    for (round, battle) in result.battles.iter().enumerate() {
        println!(
            "Round {}: {} ({:.1}) beat {} ({:.1}), draw {:.3} vs threshold {:.3}{}",
            round + 1,
            battle.winner,
            battle.winner_score,
            battle.loser,
            battle.loser_score,
            battle.draw,
            battle.threshold,
            if battle.upset { " (upset!)" } else { "" }
        );
    }
    println!("Champion: {}", result.champion);

    let leaderboard = stats.leaderboard(&meals, sort);
    print_leaderboard(&leaderboard);

    let report = BattleReport::from_tournament(&result, leaderboard, sort, seed);
    let path = match output {
        Some(path) => Some(path),
        None if save => {
            let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H%M%S");
            Some(config.output_dir.join(format!("tournament-{timestamp}.json")))
        }
        None => None,
    };
    if let Some(path) = path {
        report.save_json(&path)?;
        eprintln!("Report saved to: {}", path.display());
    }

    Ok(())
}

fn print_leaderboard(entries: &[LeaderboardEntry]) {
    use comfy_table::{Cell, Table};

    let mut table = Table::new();
    table.set_header(vec!["Rank", "Meal", "Cuisine", "Battles", "Wins", "Win %"]);

    for (rank, entry) in entries.iter().enumerate() {
        table.add_row(vec![
            Cell::new(rank + 1),
            Cell::new(&entry.name),
            Cell::new(&entry.cuisine),
            Cell::new(entry.battles),
            Cell::new(entry.wins),
            Cell::new(format!("{:.1}%", entry.win_pct * 100.0)),
        ]);
    }

    println!("\n{table}");
}
