//! Battle error types.
//!
//! The two roster errors carry the exact messages callers match on, so their
//! text must not change.

use thiserror::Error;

/// Errors that can occur while prepping meals or running a battle.
#[derive(Debug, Error)]
pub enum BattleError {
    /// A third combatant was added to a full roster.
    #[error("Combatant list is full, cannot add more combatants.")]
    RosterFull,

    /// A battle was started with fewer than two combatants.
    #[error("Two combatants must be prepped for a battle.")]
    NotEnoughCombatants,

    /// The meal's price is not a positive, finite number.
    #[error("invalid price for meal {id}: {price}")]
    InvalidPrice { id: i64, price: f64 },

    /// The meal has an empty name.
    #[error("meal {0} has an empty name")]
    EmptyName(i64),

    /// Two different meals share an id, so their results would merge.
    #[error("duplicate meal ID: {0}")]
    DuplicateId(i64),

    /// A difficulty string outside LOW/MED/HIGH.
    #[error("unknown difficulty: {0}")]
    UnknownDifficulty(String),

    /// The random source produced a value outside [0, 1).
    #[error("random draw {0} is outside [0, 1)")]
    InvalidDraw(f64),

    /// The stats recorder failed.
    #[error("failed to record battle result")]
    Recorder(#[source] anyhow::Error),
}

impl BattleError {
    /// Returns `true` for errors caused by the roster being in the wrong state
    /// for the requested operation.
    pub fn is_invalid_state(&self) -> bool {
        matches!(
            self,
            BattleError::RosterFull | BattleError::NotEnoughCombatants
        )
    }
}
