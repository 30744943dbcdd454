//! Life Path, Destiny, Soul, Personality and Maturity.
//!
//! Every final reduction here keeps master numbers (11, 22, 33).

use crate::letters::{LetterKind, NameInput};
use crate::reduce::reduce_core;
use crate::{BirthDate, CoreNumbers, LifePathSteps, NameSums};

/// Reduce each date component, then their sum
pub fn life_path_steps(date: &BirthDate) -> LifePathSteps {
    let year_core = reduce_core(date.year());
    let month_core = reduce_core(date.month());
    let day_core = reduce_core(date.day());

    LifePathSteps {
        year_core,
        month_core,
        day_core,
        total: year_core + month_core + day_core,
    }
}

/// Accumulate letter values: all letters into Destiny, vowels into Soul,
/// consonants into Personality
pub fn name_sums(name: &NameInput) -> NameSums {
    let mut sums = NameSums::default();

    for (_, value, kind) in name.values() {
        sums.destiny += value;
        match kind {
            LetterKind::Vowel => sums.soul += value,
            LetterKind::Consonant => sums.personality += value,
        }
    }

    sums
}

/// Reduce the intermediate sums into the five core numbers
pub fn core_numbers(steps: &LifePathSteps, sums: &NameSums) -> CoreNumbers {
    let life_path = reduce_core(steps.total);
    let destiny = reduce_core(sums.destiny);

    CoreNumbers {
        life_path,
        destiny,
        soul: reduce_core(sums.soul),
        personality: reduce_core(sums.personality),
        maturity: reduce_core(life_path + destiny),
    }
}
