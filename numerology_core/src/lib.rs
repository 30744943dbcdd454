#![forbid(unsafe_code)]

//! Numerology calculation engine.
//!
//! This crate provides:
//! - Birth date validation and Pythagorean letter values
//! - Digit reduction (master-number preserving and single-digit)
//! - Core numbers, Pinnacle/Challenge cycles and intensity tables
//! - A step-by-step narrative of each calculation
//! - CSV batch calculation and configuration loading

pub mod types;
pub mod error;
pub mod date;
pub mod letters;
pub mod reduce;
pub mod core_numbers;
pub mod cycles;
pub mod intensity;
pub mod engine;
pub mod narrative;
pub mod batch;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use date::{parse_birth_date, BirthDate};
pub use letters::{letter_value, LetterKind, NameInput};
pub use reduce::{reduce_core, reduce_single};
pub use engine::{calculate, calculate_for, calculate_with, CalculationOptions};
pub use narrative::{explain, NarrativeStep};
pub use batch::{calculate_csv, BatchSummary};
pub use config::{Config, OutputFormat};
