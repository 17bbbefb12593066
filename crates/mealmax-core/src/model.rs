//! Core data model types for mealmax.
//!
//! A [`Meal`] is the combatant record that gets prepped, scored, and battled.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::BattleError;

/// A meal entered into a battle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    /// Unique identifier, used when reporting results.
    pub id: i64,
    /// Meal name (e.g. "Sushi").
    #[serde(alias = "meal")]
    pub name: String,
    /// Cuisine category (e.g. "Japanese"). Its length feeds the score.
    pub cuisine: String,
    /// Price, strictly positive.
    pub price: f64,
    /// Preparation difficulty.
    pub difficulty: Difficulty,
}

impl Meal {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        cuisine: impl Into<String>,
        price: f64,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            cuisine: cuisine.into(),
            price,
            difficulty,
        }
    }

    /// Check that the meal can be scored.
    pub fn validate(&self) -> Result<(), BattleError> {
        if self.name.trim().is_empty() {
            return Err(BattleError::EmptyName(self.id));
        }
        if !self.price.is_finite() || self.price <= 0.0 {
            return Err(BattleError::InvalidPrice {
                id: self.id,
                price: self.price,
            });
        }
        Ok(())
    }
}

/// Preparation difficulty of a meal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Difficulty {
    Low,
    Med,
    High,
}

impl Difficulty {
    /// Subtractive penalty applied to the battle score. Easier meals are
    /// penalized more.
    pub fn penalty(self) -> f64 {
        match self {
            Difficulty::Low => 3.0,
            Difficulty::Med => 2.0,
            Difficulty::High => 1.0,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Low => write!(f, "LOW"),
            Difficulty::Med => write!(f, "MED"),
            Difficulty::High => write!(f, "HIGH"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = BattleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LOW" => Ok(Difficulty::Low),
            "MED" => Ok(Difficulty::Med),
            "HIGH" => Ok(Difficulty::High),
            _ => Err(BattleError::UnknownDifficulty(s.to_string())),
        }
    }
}
