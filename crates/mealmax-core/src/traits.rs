//! Collaborator traits for the battle engine.
//!
//! The engine never reaches for randomness or persistence on its own. Both are
//! supplied by the surrounding application through these traits.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Random source
// ---------------------------------------------------------------------------

/// Source of uniform random numbers in `[0, 1)`.
pub trait RandomSource: Send + Sync {
    /// Draw one number in `[0, 1)`.
    fn draw(&self) -> f64;
}

// ---------------------------------------------------------------------------
// Stats recorder
// ---------------------------------------------------------------------------

/// Result of a battle from one combatant's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Loss,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Win => write!(f, "win"),
            Outcome::Loss => write!(f, "loss"),
        }
    }
}

/// Receives win/loss results after each battle.
pub trait StatsRecorder: Send + Sync {
    /// Record one outcome for the meal with the given id.
    fn record(&self, id: i64, outcome: Outcome) -> anyhow::Result<()>;
}
