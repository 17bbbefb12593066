//! mealmax-core — Meal scoring, battle engine, and statistics.
//!
//! This crate defines the meal data model, the scoring formula, the
//! two-combatant battle engine, and the collaborators it reports to.

pub mod engine;
pub mod error;
pub mod model;
pub mod parser;
pub mod random;
pub mod report;
pub mod scoring;
pub mod statistics;
pub mod traits;

pub use engine::{BattleEngine, BattleOutcome, TournamentResult};
pub use error::BattleError;
pub use model::{Difficulty, Meal};
