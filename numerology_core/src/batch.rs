//! Batch calculation over CSV.
//!
//! Input rows carry `name,birth_date`; each produces exactly one output row.
//! Rows with an invalid date are kept with status `invalid_date` and empty
//! number columns so the output lines up with the input.

use crate::engine::{calculate_with, CalculationOptions};
use crate::{Reading, Result};
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

/// A row of the input CSV
#[derive(Debug, Deserialize)]
struct InputRow {
    #[serde(default)]
    name: String,
    birth_date: String,
}

/// Outcome of a single row
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
enum RowStatus {
    Ok,
    InvalidDate,
}

/// A row in the CSV output
#[derive(Debug, Default, Serialize)]
struct OutputRow {
    name: String,
    birth_date: String,
    status: Option<RowStatus>,
    life_path: Option<u32>,
    destiny: Option<u32>,
    soul: Option<u32>,
    personality: Option<u32>,
    maturity: Option<u32>,
    pinnacle_1: Option<u32>,
    pinnacle_2: Option<u32>,
    pinnacle_3: Option<u32>,
    pinnacle_4: Option<u32>,
    challenge_1: Option<u32>,
    challenge_2: Option<u32>,
    challenge_3: Option<u32>,
    challenge_4: Option<u32>,
    period_1: Option<String>,
    period_2: Option<String>,
    period_3: Option<String>,
    period_4: Option<String>,
    strong: Option<String>,
    missing: Option<String>,
}

impl OutputRow {
    fn invalid(input: InputRow) -> Self {
        Self {
            name: input.name,
            birth_date: input.birth_date,
            status: Some(RowStatus::InvalidDate),
            ..Self::default()
        }
    }

    fn from_reading(input: InputRow, reading: &Reading) -> Self {
        let core = &reading.core;
        let cycles = &reading.cycles;
        let [p1, p2, p3, p4] = cycles.pinnacles;
        let [c1, c2, c3, c4] = cycles.challenges;
        let [a1, a2, a3, a4] = cycles.ages.map(|band| Some(band.to_string()));

        Self {
            name: input.name,
            birth_date: input.birth_date,
            status: Some(RowStatus::Ok),
            life_path: Some(core.life_path),
            destiny: Some(core.destiny),
            soul: Some(core.soul),
            personality: Some(core.personality),
            maturity: Some(core.maturity),
            pinnacle_1: Some(p1),
            pinnacle_2: Some(p2),
            pinnacle_3: Some(p3),
            pinnacle_4: Some(p4),
            challenge_1: Some(c1),
            challenge_2: Some(c2),
            challenge_3: Some(c3),
            challenge_4: Some(c4),
            period_1: a1,
            period_2: a2,
            period_3: a3,
            period_4: a4,
            strong: Some(join_digits(&reading.intensity.strong)),
            missing: Some(join_digits(&reading.intensity.missing)),
        }
    }
}

/// Counts reported after a batch run
#[derive(Clone, Copy, Debug, Default, Serialize, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub calculated: usize,
    pub invalid: usize,
}

/// Calculate a reading for every row of `reader`, writing results to `writer`
///
/// The input must have a header row with at least a `birth_date` column;
/// `name` may be missing or empty. Input cells are trimmed.
pub fn calculate_csv<R: Read, W: Write>(
    reader: R,
    writer: W,
    options: &CalculationOptions,
) -> Result<BatchSummary> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut writer = csv::Writer::from_writer(writer);
    let mut summary = BatchSummary::default();

    for record in reader.deserialize() {
        let input: InputRow = record?;
        summary.total += 1;

        let row = match calculate_with(&input.name, &input.birth_date, options) {
            Some(reading) => {
                summary.calculated += 1;
                OutputRow::from_reading(input, &reading)
            }
            None => {
                summary.invalid += 1;
                tracing::warn!(
                    "Row {}: invalid birth date {:?}",
                    summary.total,
                    input.birth_date
                );
                OutputRow::invalid(input)
            }
        };

        writer.serialize(row)?;
    }

    writer.flush()?;

    tracing::info!(
        "Batch complete: {} rows, {} calculated, {} invalid",
        summary.total,
        summary.calculated,
        summary.invalid
    );

    Ok(summary)
}

fn join_digits(digits: &[u32]) -> String {
    digits
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::IntensitySource;

    fn run(input: &str, options: &CalculationOptions) -> (BatchSummary, String) {
        let mut out = Vec::new();
        let summary = calculate_csv(input.as_bytes(), &mut out, options).unwrap();
        (summary, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_batch_mixed_rows() {
        let input = "name,birth_date\nAnna,1990-07-15\nBob,2023-02-29\n,2024-02-29\n";
        let (summary, output) = run(input, &CalculationOptions::default());

        assert_eq!(
            summary,
            BatchSummary {
                total: 3,
                calculated: 2,
                invalid: 1
            }
        );

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("name,birth_date,status,life_path,destiny"));
        assert!(lines[1].starts_with("Anna,1990-07-15,ok,5,3,2,1,8,22,7,11,8,1,5,4,6,0–31,32–40,41–49,50–,,"));
        assert_eq!(lines[2], "Bob,2023-02-29,invalid_date,,,,,,,,,,,,,,,,,,,");
        assert!(lines[3].starts_with(",2024-02-29,ok,"));
    }

    #[test]
    fn test_batch_trims_cells() {
        let input = "name,birth_date\n  Anna  , 1990-07-15 \n";
        let (summary, output) = run(input, &CalculationOptions::default());
        assert_eq!(summary.calculated, 1);
        assert!(output.lines().nth(1).unwrap().starts_with("Anna,1990-07-15,ok,5"));
    }

    #[test]
    fn test_batch_strong_digits_use_options() {
        let options = CalculationOptions {
            intensity_source: IntensitySource::NameValues,
        };
        // N N N -> 5 5 5
        let (_, output) = run("name,birth_date\nNNN,1990-07-15\n", &options);
        let row = output.lines().nth(1).unwrap();
        assert!(row.ends_with(",5,1 2 3 4 6 7 8 9"));
    }

    #[test]
    fn test_batch_missing_column_is_error() {
        let mut out = Vec::new();
        let result = calculate_csv(
            "name\nAnna\n".as_bytes(),
            &mut out,
            &CalculationOptions::default(),
        );
        assert!(matches!(result, Err(crate::Error::Csv(_))));
    }

    #[test]
    fn test_batch_empty_input() {
        let (summary, output) = run("name,birth_date\n", &CalculationOptions::default());
        assert_eq!(summary, BatchSummary::default());
        assert!(output.is_empty());
    }
}
