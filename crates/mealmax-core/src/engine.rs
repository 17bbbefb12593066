//! The battle engine.
//!
//! Holds up to two prepped meals, scores them, and picks a winner by comparing
//! an injected random draw against a threshold derived from the score gap.

use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::BattleError;
use crate::model::Meal;
use crate::scoring::{compute_score, normalized_delta, win_threshold};
use crate::traits::{Outcome, RandomSource, StatsRecorder};

/// Maximum number of meals in the roster.
pub const MAX_COMBATANTS: usize = 2;

/// Everything that went into deciding one battle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleOutcome {
    pub winner_id: i64,
    pub winner: String,
    pub winner_score: f64,
    pub loser_id: i64,
    pub loser: String,
    pub loser_score: f64,
    /// Normalized score separation in `[0, 1]`.
    pub delta: f64,
    /// Probability the higher scorer had of winning.
    pub threshold: f64,
    /// The random draw compared against `threshold`.
    pub draw: f64,
    /// Whether the lower scorer won.
    pub upset: bool,
}

/// Result of a king-of-the-hill run over a list of meals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentResult {
    pub champion: String,
    pub champion_id: i64,
    pub battles: Vec<BattleOutcome>,
}

/// The battle engine.
pub struct BattleEngine {
    roster: Vec<Meal>,
    random: Arc<dyn RandomSource>,
    recorder: Arc<dyn StatsRecorder>,
    last_outcome: Option<BattleOutcome>,
}

impl BattleEngine {
    pub fn new(random: Arc<dyn RandomSource>, recorder: Arc<dyn StatsRecorder>) -> Self {
        Self {
            roster: Vec::with_capacity(MAX_COMBATANTS),
            random,
            recorder,
            last_outcome: None,
        }
    }

    /// Add a meal to the roster if there's room.
    pub fn add_combatant(&mut self, meal: Meal) -> Result<(), BattleError> {
        if self.roster.len() >= MAX_COMBATANTS {
            tracing::error!(
                "attempted to add combatant '{}' but combatants list is full",
                meal.name
            );
            return Err(BattleError::RosterFull);
        }
        meal.validate()?;

        tracing::info!("adding combatant '{}' to combatants list", meal.name);
        self.roster.push(meal);
        tracing::debug!(
            "current combatants: {:?}",
            self.roster.iter().map(|m| m.name.as_str()).collect::<Vec<_>>()
        );
        Ok(())
    }

    /// Empty the roster. Statistics are untouched.
    pub fn clear_roster(&mut self) {
        tracing::info!("clearing the combatants list");
        self.roster.clear();
    }

    /// The current roster in insertion order.
    pub fn get_roster(&self) -> &[Meal] {
        &self.roster
    }

    /// Score a meal. See [`compute_score`].
    pub fn compute_score(&self, meal: &Meal) -> f64 {
        let score = compute_score(meal);
        tracing::info!(
            "battle score for {}: price={:.3}, cuisine={}, difficulty={} -> {:.3}",
            meal.name,
            meal.price,
            meal.cuisine,
            meal.difficulty,
            score
        );
        score
    }

    /// The outcome of the most recent battle, if any.
    pub fn last_outcome(&self) -> Option<&BattleOutcome> {
        self.last_outcome.as_ref()
    }

    /// Run a battle between the two prepped meals and return the winner's name.
    ///
    /// Both results are reported to the stats recorder before the loser is
    /// removed. If recording fails the roster is left as it was.
    pub fn run_battle(&mut self) -> Result<String, BattleError> {
        if self.roster.len() < MAX_COMBATANTS {
            tracing::error!("not enough combatants to start a battle");
            return Err(BattleError::NotEnoughCombatants);
        }

        let (first, second) = (&self.roster[0], &self.roster[1]);
        tracing::info!("battle started between {} and {}", first.name, second.name);

        let score_a = self.compute_score(first);
        let score_b = self.compute_score(second);

        let delta = normalized_delta(score_a, score_b);
        let threshold = win_threshold(delta);
        tracing::info!("delta between scores: {delta:.3}, threshold: {threshold:.3}");

        let draw = self.random.draw();
        if !(0.0..1.0).contains(&draw) {
            return Err(BattleError::InvalidDraw(draw));
        }
        tracing::info!("random draw: {draw:.3}");

        // Ties count the first-prepped meal as the higher scorer.
        let (higher, lower) = if score_a >= score_b { (0, 1) } else { (1, 0) };
        let upset = draw >= threshold;
        let (winner_idx, loser_idx) = if upset { (lower, higher) } else { (higher, lower) };

        let winner = &self.roster[winner_idx];
        let loser = &self.roster[loser_idx];
        let (winner_score, loser_score) = if winner_idx == 0 {
            (score_a, score_b)
        } else {
            (score_b, score_a)
        };
        tracing::info!("the winner is: {}", winner.name);

        self.recorder
            .record(winner.id, Outcome::Win)
            .map_err(BattleError::Recorder)?;
        self.recorder
            .record(loser.id, Outcome::Loss)
            .map_err(BattleError::Recorder)?;

        let outcome = BattleOutcome {
            winner_id: winner.id,
            winner: winner.name.clone(),
            winner_score,
            loser_id: loser.id,
            loser: loser.name.clone(),
            loser_score,
            delta,
            threshold,
            draw,
            upset,
        };

        self.roster.remove(loser_idx);
        let name = outcome.winner.clone();
        self.last_outcome = Some(outcome);
        Ok(name)
    }

    /// Run king-of-the-hill over `meals`: the first two battle, then each
    /// following meal challenges the surviving winner.
    pub fn run_tournament(&mut self, meals: &[Meal]) -> Result<TournamentResult, BattleError> {
        let Some((first, challengers)) = meals.split_first() else {
            return Err(BattleError::NotEnoughCombatants);
        };
        if challengers.is_empty() {
            return Err(BattleError::NotEnoughCombatants);
        }

        // Results are keyed by id, so every meal must have its own.
        let mut seen = HashSet::with_capacity(meals.len());
        if let Some(dup) = meals.iter().find(|m| !seen.insert(m.id)) {
            tracing::error!("meal id {} appears more than once", dup.id);
            return Err(BattleError::DuplicateId(dup.id));
        }

        self.clear_roster();
        self.add_combatant(first.clone())?;

        let mut battles = Vec::with_capacity(challengers.len());
        for challenger in challengers {
            self.add_combatant(challenger.clone())?;
            self.run_battle()?;
            if let Some(outcome) = &self.last_outcome {
                battles.push(outcome.clone());
            }
        }

        let champion = self
            .roster
            .first()
            .ok_or(BattleError::NotEnoughCombatants)?;
        tracing::info!(
            "tournament over after {} battles, champion: {}",
            battles.len(),
            champion.name
        );
        Ok(TournamentResult {
            champion: champion.name.clone(),
            champion_id: champion.id,
            battles,
        })
    }
}
