//! Calculation engine turning a (name, birth date) pair into a `Reading`.
//!
//! The adopted rule set:
//! - Core numbers keep the master numbers 11, 22, 33
//! - Pinnacles sum raw date components and keep master numbers
//! - Challenges take differences of single-digit components
//! - Intensity tallies birth date digits unless told otherwise
//!
//! All functions here are pure. A reading is computed whole or not at all.

use crate::letters::NameInput;
use crate::{
    core_numbers, cycles, intensity, parse_birth_date, BirthDate, IntensitySource, Reading,
};
use serde::{Deserialize, Serialize};

/// Knobs a host may set for a calculation
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CalculationOptions {
    #[serde(default)]
    pub intensity_source: IntensitySource,
}

/// Calculate a reading with default options
///
/// Returns `None` only when `birth_date` is not a real `YYYY-MM-DD` date.
/// An empty or non-Latin name is fine and yields zero name numbers.
pub fn calculate(name: &str, birth_date: &str) -> Option<Reading> {
    calculate_with(name, birth_date, &CalculationOptions::default())
}

/// Calculate a reading with explicit options
pub fn calculate_with(
    name: &str,
    birth_date: &str,
    options: &CalculationOptions,
) -> Option<Reading> {
    let Some(date) = parse_birth_date(birth_date) else {
        tracing::debug!("Rejected birth date {:?}", birth_date);
        return None;
    };

    Some(calculate_for(&NameInput::new(name), date, options))
}

/// Calculate a reading from already validated inputs
pub fn calculate_for(name: &NameInput, date: BirthDate, options: &CalculationOptions) -> Reading {
    let life_path_steps = core_numbers::life_path_steps(&date);
    let name_sums = core_numbers::name_sums(name);
    let core = core_numbers::core_numbers(&life_path_steps, &name_sums);
    let intensity = intensity::intensity(options.intensity_source, &date, name);
    let cycles = cycles::cycles(&date, core.life_path);

    if name.is_empty() {
        tracing::debug!("No Latin letters in name; name numbers will be 0");
    }

    tracing::debug!(
        "Reading for {} / {}: life path {}, destiny {}, maturity {}",
        name,
        date,
        core.life_path,
        core.destiny,
        core.maturity
    );

    Reading {
        birth_date: date,
        letters: name.as_str().to_string(),
        life_path_steps,
        name_sums,
        core,
        intensity,
        cycles,
    }
}
