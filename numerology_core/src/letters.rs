//! Pythagorean letter values and name normalization.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Vowel/consonant classification of a Latin letter
///
/// Y is always a consonant.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum LetterKind {
    Vowel,
    Consonant,
}

/// Value of an uppercase Latin letter: A=1 … I=9, J=1 … R=9, S=1 … Z=8
///
/// Any other character (lowercase included) is worth 0.
pub fn letter_value(ch: char) -> u32 {
    if ch.is_ascii_uppercase() {
        (ch as u32 - 'A' as u32) % 9 + 1
    } else {
        0
    }
}

/// Classify an uppercase Latin letter; `None` outside A-Z
pub fn classify(ch: char) -> Option<LetterKind> {
    match ch {
        'A' | 'E' | 'I' | 'O' | 'U' => Some(LetterKind::Vowel),
        'B'..='Z' => Some(LetterKind::Consonant),
        _ => None,
    }
}

/// A name reduced to the uppercase Latin letters A-Z
///
/// Built fresh from user text for each calculation. May be empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NameInput {
    letters: String,
}

impl NameInput {
    /// Uppercase `raw` and keep only A-Z
    pub fn new(raw: &str) -> Self {
        let letters = raw
            .chars()
            .flat_map(char::to_uppercase)
            .filter(char::is_ascii_uppercase)
            .collect();
        Self { letters }
    }

    pub fn as_str(&self) -> &str {
        &self.letters
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Iterate over (letter, value, kind) for every retained letter
    pub fn values(&self) -> impl Iterator<Item = (char, u32, LetterKind)> + '_ {
        self.letters.chars().filter_map(|ch| {
            classify(ch).map(|kind| (ch, letter_value(ch), kind))
        })
    }
}

impl fmt::Display for NameInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.letters)
    }
}
