//! Battle report types with JSON persistence.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::engine::{BattleOutcome, TournamentResult};
use crate::statistics::{LeaderboardEntry, SortBy};

/// A record of one or more battles and the resulting standings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BattleReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    /// Seed of the random source, when one was used.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Battles in the order they were fought.
    pub battles: Vec<BattleOutcome>,
    /// Last meal standing.
    #[serde(default)]
    pub champion: Option<String>,
    /// How the leaderboard was sorted.
    #[serde(default)]
    pub sort: SortBy,
    /// Standings after the last battle.
    #[serde(default)]
    pub leaderboard: Vec<LeaderboardEntry>,
}

impl BattleReport {
    pub fn from_tournament(
        result: &TournamentResult,
        leaderboard: Vec<LeaderboardEntry>,
        sort: SortBy,
        seed: Option<u64>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            seed,
            battles: result.battles.clone(),
            champion: Some(result.champion.clone()),
            sort,
            leaderboard,
        }
    }

    /// Number of battles won by the lower-scoring meal.
    pub fn upset_count(&self) -> usize {
        self.battles.iter().filter(|b| b.upset).count()
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: BattleReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }
}
