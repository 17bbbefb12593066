//! Win/loss statistics and the leaderboard.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::{Mutex, MutexGuard};

use serde::{Deserialize, Serialize};

use crate::model::Meal;
use crate::traits::{Outcome, StatsRecorder};

/// Battle record for a single meal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealStats {
    pub battles: u32,
    pub wins: u32,
    pub losses: u32,
}

impl MealStats {
    /// Fraction of battles won, 0 when the meal has not battled.
    pub fn win_pct(&self) -> f64 {
        if self.battles == 0 {
            0.0
        } else {
            self.wins as f64 / self.battles as f64
        }
    }
}

/// How to order the leaderboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    #[default]
    Wins,
    WinPct,
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortBy::Wins => write!(f, "wins"),
            SortBy::WinPct => write!(f, "win_pct"),
        }
    }
}

impl FromStr for SortBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "wins" => Ok(SortBy::Wins),
            "win_pct" | "win-pct" | "pct" => Ok(SortBy::WinPct),
            other => Err(format!("unknown leaderboard sort: {other}")),
        }
    }
}

/// One row of the leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub id: i64,
    pub name: String,
    pub cuisine: String,
    pub battles: u32,
    pub wins: u32,
    pub win_pct: f64,
}

#[derive(Default)]
struct Inner {
    stats: HashMap<i64, MealStats>,
    calls: Vec<(i64, Outcome)>,
}

/// In-memory [`StatsRecorder`].
///
/// Accepts any id; the leaderboard only lists meals it is handed.
#[derive(Default)]
pub struct InMemoryStats {
    inner: Mutex<Inner>,
}

impl InMemoryStats {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Stats for one meal, if it has battled.
    pub fn get(&self, id: i64) -> Option<MealStats> {
        self.lock().stats.get(&id).copied()
    }

    /// Every `record` call in order.
    pub fn calls(&self) -> Vec<(i64, Outcome)> {
        self.lock().calls.clone()
    }

    /// Build the leaderboard for `meals`, best first. Ties are broken by id.
    pub fn leaderboard(&self, meals: &[Meal], sort: SortBy) -> Vec<LeaderboardEntry> {
        let inner = self.lock();
        let mut entries: Vec<LeaderboardEntry> = meals
            .iter()
            .map(|meal| {
                let stats = inner.stats.get(&meal.id).copied().unwrap_or_default();
                LeaderboardEntry {
                    id: meal.id,
                    name: meal.name.clone(),
                    cuisine: meal.cuisine.clone(),
                    battles: stats.battles,
                    wins: stats.wins,
                    win_pct: stats.win_pct(),
                }
            })
            .collect();

        entries.sort_by(|a, b| {
            let primary = match sort {
                SortBy::Wins => b.wins.cmp(&a.wins),
                SortBy::WinPct => b.win_pct.total_cmp(&a.win_pct),
            };
            primary.then(a.id.cmp(&b.id))
        });
        entries
    }
}

impl StatsRecorder for InMemoryStats {
    fn record(&self, id: i64, outcome: Outcome) -> anyhow::Result<()> {
        let mut inner = self
            .inner
            .lock()
            .map_err(|_| anyhow::anyhow!("stats lock poisoned"))?;
        let entry = inner.stats.entry(id).or_default();
        entry.battles += 1;
        match outcome {
            Outcome::Win => entry.wins += 1,
            Outcome::Loss => entry.losses += 1,
        }
        inner.calls.push((id, outcome));
        tracing::debug!("recorded {outcome} for meal {id}");
        Ok(())
    }
}
