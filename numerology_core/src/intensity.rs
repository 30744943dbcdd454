//! Digit frequency (intensity) tables.

use crate::letters::NameInput;
use crate::{BirthDate, Intensity, IntensitySource};

/// Count at or above which a digit is reported as strong
pub const STRONG_THRESHOLD: u32 = 3;

impl Intensity {
    /// Tally the digits 1-9 found in `digits`; zeros and other characters are skipped
    pub fn tally(source: IntensitySource, digits: &str) -> Self {
        let mut counts = [0u32; 9];
        let mut kept = String::with_capacity(digits.len());

        for ch in digits.chars() {
            if let Some(d @ 1..=9) = ch.to_digit(10) {
                counts[d as usize - 1] += 1;
                kept.push(ch);
            }
        }

        let strong = digits_where(&counts, |c| c >= STRONG_THRESHOLD);
        let missing = digits_where(&counts, |c| c == 0);

        Self {
            source,
            digits: kept,
            counts,
            strong,
            missing,
        }
    }

    /// Occurrences of `digit` (1-9); 0 for anything else
    pub fn count(&self, digit: u32) -> u32 {
        match digit {
            1..=9 => self.counts[digit as usize - 1],
            _ => 0,
        }
    }
}

/// Build the digit string for a source
pub fn source_digits(source: IntensitySource, date: &BirthDate, name: &NameInput) -> String {
    match source {
        IntensitySource::BirthDate => {
            format!("{}{}{}", date.year(), date.month(), date.day())
        }
        IntensitySource::NameValues => name
            .values()
            .map(|(_, value, _)| value.to_string())
            .collect(),
    }
}

/// Intensity table for a date/name pair under `source`
pub fn intensity(source: IntensitySource, date: &BirthDate, name: &NameInput) -> Intensity {
    Intensity::tally(source, &source_digits(source, date, name))
}

fn digits_where(counts: &[u32; 9], pred: impl Fn(u32) -> bool) -> Vec<u32> {
    (1..=9u32).filter(|&d| pred(counts[d as usize - 1])).collect()
}
