//! Pinnacles, Challenges and the four life periods.
//!
//! Pinnacles sum the raw date components and keep master numbers.
//! Challenges take differences of the single-digit components.

use crate::reduce::{reduce_core, reduce_single};
use crate::{AgeBand, BirthDate, Cycles};

/// Base from which the single-digit Life Path is subtracted to end the first period
const FIRST_PERIOD_BASE: u32 = 36;

/// Length of the second and third periods
const MIDDLE_PERIOD_YEARS: u32 = 9;

/// Derive all cycle numbers for a date and its Life Path
pub fn cycles(date: &BirthDate, life_path: u32) -> Cycles {
    let (month, day, year) = (date.month(), date.day(), date.year());
    let mm1 = reduce_single(month);
    let dd1 = reduce_single(day);
    let yy1 = reduce_single(year);

    let end1 = first_period_end(life_path);

    Cycles {
        mm1,
        dd1,
        yy1,
        pinnacles: pinnacles(month, day, year),
        challenges: challenges(mm1, dd1, yy1),
        end1,
        ages: age_bands(end1),
    }
}

/// P1 = month+day, P2 = day+year, P3 = P1+P2, P4 = month+year
pub fn pinnacles(month: u32, day: u32, year: u32) -> [u32; 4] {
    let p1 = reduce_core(month + day);
    let p2 = reduce_core(day + year);
    [p1, p2, reduce_core(p1 + p2), reduce_core(month + year)]
}

/// C1 = |m-d|, C2 = |d-y|, C3 = |C1-C2|, C4 = |m-y| over single digits
pub fn challenges(mm1: u32, dd1: u32, yy1: u32) -> [u32; 4] {
    let c1 = reduce_core(mm1.abs_diff(dd1));
    let c2 = reduce_core(dd1.abs_diff(yy1));
    [c1, c2, reduce_core(c1.abs_diff(c2)), reduce_core(mm1.abs_diff(yy1))]
}

/// `36 - reduce_single(life_path)`
pub fn first_period_end(life_path: u32) -> u32 {
    FIRST_PERIOD_BASE - reduce_single(life_path)
}

/// The four periods: `0..=end1`, then two nine-year periods, then open-ended
pub fn age_bands(end1: u32) -> [AgeBand; 4] {
    let second_start = end1 + 1;
    let third_start = second_start + MIDDLE_PERIOD_YEARS;
    let fourth_start = third_start + MIDDLE_PERIOD_YEARS;

    [
        AgeBand {
            start: 0,
            end: Some(end1),
        },
        AgeBand {
            start: second_start,
            end: Some(third_start - 1),
        },
        AgeBand {
            start: third_start,
            end: Some(fourth_start - 1),
        },
        AgeBand {
            start: fourth_start,
            end: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_birth_date;

    #[test]
    fn test_cycles_for_known_date() {
        let date = parse_birth_date("1990-07-15").unwrap();
        let c = cycles(&date, 5);

        assert_eq!((c.mm1, c.dd1, c.yy1), (7, 6, 1));
        // 7+15 = 22 kept; 15+1990 = 2005 -> 7; 22+7 = 29 -> 11; 7+1990 = 1997 -> 26 -> 8
        assert_eq!(c.pinnacles, [22, 7, 11, 8]);
        assert_eq!(c.challenges, [1, 5, 4, 6]);
        assert_eq!(c.end1, 31);
    }

    #[test]
    fn test_age_bands_for_life_path_5() {
        let bands = age_bands(first_period_end(5));
        let labels: Vec<String> = bands.iter().map(ToString::to_string).collect();
        assert_eq!(labels, vec!["0–31", "32–40", "41–49", "50–"]);
    }

    #[test]
    fn test_master_life_path_uses_single_digit_for_end1() {
        // 11 -> 2, 22 -> 4, 33 -> 6
        assert_eq!(first_period_end(11), 34);
        assert_eq!(first_period_end(22), 32);
        assert_eq!(first_period_end(33), 30);
    }

    #[test]
    fn test_challenges_never_negative() {
        for mm1 in 1..=9 {
            for dd1 in 1..=9 {
                for yy1 in 1..=9 {
                    let c = challenges(mm1, dd1, yy1);
                    assert!(c.iter().all(|&n| n <= 8));
                }
            }
        }
        assert_eq!(challenges(3, 3, 3), [0, 0, 0, 0]);
    }

    #[test]
    fn test_pinnacle_three_uses_reduced_inputs() {
        // month 11 + day 29 = 40 -> 4; 29 + 2000 = 2029 -> 13 -> 4; 4 + 4 = 8
        let p = pinnacles(11, 29, 2000);
        assert_eq!(p, [4, 4, 8, 4]);

        // month 2 + day 9 = 11 kept; 9 + 2002 = 2011 -> 4; 11 + 4 = 15 -> 6
        let p = pinnacles(2, 9, 2002);
        assert_eq!(p[0], 11);
        assert_eq!(p[2], 6);
    }
}
