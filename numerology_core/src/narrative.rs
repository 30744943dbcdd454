//! Step-by-step explanation of how a reading was calculated.
//!
//! Hosts show these lines next to the numbers so a reader can check the
//! arithmetic by hand.

use crate::reduce::reduce_single;
use crate::Reading;
use serde::Serialize;

/// One labelled line of the explanation
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct NarrativeStep {
    pub label: &'static str,
    pub detail: String,
}

impl NarrativeStep {
    fn new(label: &'static str, detail: String) -> Self {
        Self { label, detail }
    }
}

/// The reduction rules this engine follows
pub fn rules() -> &'static [&'static str] {
    &[
        "Sums are reduced by adding their digits, repeating until the result is 1-9 or a master number (e.g. 29 -> 2+9 = 11).",
        "Core numbers (Life Path, Destiny, Soul, Personality, Maturity) keep 11, 22 and 33 as master numbers.",
        "Pinnacles add the raw month, day and year, and keep master numbers.",
        "Challenges subtract the single-digit month, day and year.",
        "Letters use the Pythagorean table (A=1 ... I=9, J=1 ...); vowels are A, E, I, O, U and Y is a consonant.",
    ]
}

/// Explain every figure of `reading` with its actual intermediate values
pub fn explain(reading: &Reading) -> Vec<NarrativeStep> {
    let date = &reading.birth_date;
    let steps = &reading.life_path_steps;
    let sums = &reading.name_sums;
    let core = &reading.core;
    let intensity = &reading.intensity;
    let cycles = &reading.cycles;
    let letters = if reading.letters.is_empty() {
        "-"
    } else {
        reading.letters.as_str()
    };

    let lp_single = reduce_single(core.life_path);
    let ages: Vec<String> = cycles.ages.iter().map(ToString::to_string).collect();

    vec![
        NarrativeStep::new(
            "Life Path",
            format!(
                "year {} -> {}, month {} -> {}, day {} -> {}; {} + {} + {} = {}; reduced (11/22/33 kept) -> {}",
                date.year(),
                steps.year_core,
                date.month(),
                steps.month_core,
                date.day(),
                steps.day_core,
                steps.year_core,
                steps.month_core,
                steps.day_core,
                steps.total,
                core.life_path
            ),
        ),
        NarrativeStep::new(
            "Destiny",
            format!(
                "letters {} summed with the Pythagorean table = {}; reduced -> {}",
                letters,
                sums.destiny,
                show(core.destiny)
            ),
        ),
        NarrativeStep::new(
            "Soul",
            format!(
                "vowels (A, E, I, O, U) summed = {}; reduced -> {}",
                sums.soul,
                show(core.soul)
            ),
        ),
        NarrativeStep::new(
            "Personality",
            format!(
                "consonants summed = {}; reduced -> {}",
                sums.personality,
                show(core.personality)
            ),
        ),
        NarrativeStep::new(
            "Maturity",
            format!(
                "Life Path + Destiny = {} + {} = {}; reduced -> {}",
                core.life_path,
                core.destiny,
                core.life_path + core.destiny,
                core.maturity
            ),
        ),
        NarrativeStep::new(
            "Intensity digits",
            format!(
                "{} with zeros removed: {}",
                intensity.source,
                if intensity.digits.is_empty() {
                    "-"
                } else {
                    intensity.digits.as_str()
                }
            ),
        ),
        NarrativeStep::new(
            "Strong / missing",
            format!(
                "strong (3 or more): {}; missing (0): {}",
                list(&intensity.strong),
                list(&intensity.missing)
            ),
        ),
        NarrativeStep::new(
            "Age bands",
            format!(
                "end of first period = 36 - {} (Life Path {} as one digit) = {}; periods {}",
                lp_single,
                core.life_path,
                cycles.end1,
                ages.join(" / ")
            ),
        ),
        NarrativeStep::new(
            "Pinnacles",
            format!(
                "P1 = month + day = {} + {} -> {}, P2 = day + year = {} + {} -> {}, \
                 P3 = P1 + P2 -> {}, P4 = month + year = {} + {} -> {}",
                date.month(),
                date.day(),
                cycles.pinnacles[0],
                date.day(),
                date.year(),
                cycles.pinnacles[1],
                cycles.pinnacles[2],
                date.month(),
                date.year(),
                cycles.pinnacles[3]
            ),
        ),
        NarrativeStep::new(
            "Challenges",
            format!(
                "month {} -> {}, day {} -> {}, year {} -> {}; C1 = |month - day| = {}, \
                 C2 = |day - year| = {}, C3 = |C1 - C2| = {}, C4 = |month - year| = {}",
                date.month(),
                cycles.mm1,
                date.day(),
                cycles.dd1,
                date.year(),
                cycles.yy1,
                cycles.challenges[0],
                cycles.challenges[1],
                cycles.challenges[2],
                cycles.challenges[3]
            ),
        ),
    ]
}

/// A zero core number means "no value"
fn show(n: u32) -> String {
    if n == 0 {
        "-".to_string()
    } else {
        n.to_string()
    }
}

fn list(digits: &[u32]) -> String {
    if digits.is_empty() {
        "none".to_string()
    } else {
        digits
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculate;

    #[test]
    fn test_explain_order_and_values() {
        let reading = calculate("Anna", "1990-07-15").unwrap();
        let steps = explain(&reading);

        let labels: Vec<_> = steps.iter().map(|s| s.label).collect();
        assert_eq!(
            labels,
            vec![
                "Life Path",
                "Destiny",
                "Soul",
                "Personality",
                "Maturity",
                "Intensity digits",
                "Strong / missing",
                "Age bands",
                "Pinnacles",
                "Challenges",
            ]
        );

        assert_eq!(
            steps[0].detail,
            "year 1990 -> 1, month 7 -> 7, day 15 -> 6; 1 + 7 + 6 = 14; reduced (11/22/33 kept) -> 5"
        );
        assert!(steps[1].detail.contains("ANNA"));
        assert!(steps[1].detail.ends_with("= 12; reduced -> 3"));
        assert!(steps[7].detail.contains("0–31 / 32–40 / 41–49 / 50–"));
        assert!(steps[9].detail.ends_with("C4 = |month - year| = 6"));
    }

    #[test]
    fn test_empty_name_shows_dashes() {
        let reading = calculate("", "1990-07-15").unwrap();
        let steps = explain(&reading);
        assert!(steps[1].detail.starts_with("letters - summed"));
        assert!(steps[1].detail.ends_with("reduced -> -"));
        assert!(steps[6].detail.contains("strong (3 or more): none"));
    }

    #[test]
    fn test_rules_mention_masters() {
        assert!(rules().iter().any(|r| r.contains("11, 22 and 33")));
        assert!(rules()[0].contains("1-9 or a master number"));
        assert!(!rules()[0].contains("one digit remains"));
    }
}
