//! Core domain types for the numerology engine.
//!
//! This module defines the pieces of a `Reading`:
//! - Core numbers and the intermediate sums behind them
//! - Intensity (digit frequency) tables
//! - Pinnacle/Challenge cycles and their age bands

use crate::BirthDate;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Core Numbers
// ============================================================================

/// Per-component reductions feeding the Life Path
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LifePathSteps {
    pub year_core: u32,
    pub month_core: u32,
    pub day_core: u32,
    /// `year_core + month_core + day_core` before the final reduction
    pub total: u32,
}

/// Raw letter-value sums before reduction
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NameSums {
    pub destiny: u32,
    pub soul: u32,
    pub personality: u32,
}

/// The five core numbers, all reduced with master numbers kept
///
/// Destiny, Soul and Personality are 0 when the name has no Latin letters.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CoreNumbers {
    pub life_path: u32,
    pub destiny: u32,
    pub soul: u32,
    pub personality: u32,
    pub maturity: u32,
}

// ============================================================================
// Intensity
// ============================================================================

/// Which digits the intensity table is tallied over
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IntensitySource {
    /// Digits of year, month and day (no zero padding)
    #[default]
    BirthDate,
    /// The 1-9 value of each name letter
    NameValues,
}

impl fmt::Display for IntensitySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntensitySource::BirthDate => f.write_str("birth date digits"),
            IntensitySource::NameValues => f.write_str("name letter values"),
        }
    }
}

/// Frequency of the digits 1-9 over a digit source
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Intensity {
    pub source: IntensitySource,
    /// The digits that were tallied, zeros removed
    pub digits: String,
    /// `counts[i]` is the number of occurrences of digit `i + 1`
    pub counts: [u32; 9],
    /// Digits seen three times or more, ascending
    pub strong: Vec<u32>,
    /// Digits never seen, ascending
    pub missing: Vec<u32>,
}

// ============================================================================
// Cycles
// ============================================================================

/// An inclusive age range; `end` is `None` for the open-ended last period
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AgeBand {
    pub start: u32,
    pub end: Option<u32>,
}

impl fmt::Display for AgeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.end {
            Some(end) => write!(f, "{}–{}", self.start, end),
            None => write!(f, "{}–", self.start),
        }
    }
}

/// Pinnacles, Challenges and the four periods they apply to
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Cycles {
    /// Single-digit month
    pub mm1: u32,
    /// Single-digit day
    pub dd1: u32,
    /// Single-digit year
    pub yy1: u32,
    pub pinnacles: [u32; 4],
    pub challenges: [u32; 4],
    /// Last age of the first period
    pub end1: u32,
    pub ages: [AgeBand; 4],
}

// ============================================================================
// Reading
// ============================================================================

/// Everything derived from one (name, birth date) pair
///
/// Always built in one piece by `engine::calculate`; there are no
/// partially filled readings.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Reading {
    pub birth_date: BirthDate,
    /// The name reduced to A-Z
    pub letters: String,
    pub life_path_steps: LifePathSteps,
    pub name_sums: NameSums,
    pub core: CoreNumbers,
    pub intensity: Intensity,
    pub cycles: Cycles,
}
