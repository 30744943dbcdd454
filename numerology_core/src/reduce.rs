//! Digit reduction.
//!
//! Two modes are used throughout the engine:
//! - core-preserving (`reduce_core`): stops at the master numbers 11, 22, 33
//! - single-digit (`reduce_single`): always ends in 1..=9
//!
//! Both return 0 for an input of 0.

/// Master numbers kept intact by `reduce_core`
pub const MASTER_NUMBERS: [u32; 3] = [11, 22, 33];

/// Sum of the base-10 digits of `n`
pub fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Whether `n` is one of 11, 22, 33
pub fn is_master(n: u32) -> bool {
    MASTER_NUMBERS.contains(&n)
}

/// Reduce by repeated digit sums, keeping master numbers
///
/// Output is in {0..=9, 11, 22, 33}.
pub fn reduce_core(mut n: u32) -> u32 {
    while n > 9 && !is_master(n) {
        n = digit_sum(n);
    }
    n
}

/// Reduce by repeated digit sums down to a single digit
///
/// Output is in 0..=9.
pub fn reduce_single(mut n: u32) -> u32 {
    while n > 9 {
        n = digit_sum(n);
    }
    n
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_sum() {
        assert_eq!(digit_sum(0), 0);
        assert_eq!(digit_sum(7), 7);
        assert_eq!(digit_sum(1990), 19);
        assert_eq!(digit_sum(9999), 36);
    }

    #[test]
    fn test_reduce_core_keeps_masters() {
        assert_eq!(reduce_core(11), 11);
        assert_eq!(reduce_core(22), 22);
        assert_eq!(reduce_core(33), 33);
        assert_eq!(reduce_core(29), 11);
        assert_eq!(reduce_core(1990), 1);
        assert_eq!(reduce_core(14), 5);
        // 44 is not a master number
        assert_eq!(reduce_core(44), 8);
    }

    #[test]
    fn test_reduce_single_ignores_masters() {
        assert_eq!(reduce_single(11), 2);
        assert_eq!(reduce_single(29), 2);
        assert_eq!(reduce_single(33), 6);
        assert_eq!(reduce_single(5), 5);
    }

    #[test]
    fn test_zero_is_boundary() {
        assert_eq!(reduce_core(0), 0);
        assert_eq!(reduce_single(0), 0);
    }

    #[test]
    fn test_idempotent_and_in_range() {
        for n in 1..=20_000u32 {
            let core = reduce_core(n);
            assert_eq!(reduce_core(core), core, "reduce_core not idempotent for {}", n);
            assert!((1..=9).contains(&core) || is_master(core), "{} -> {}", n, core);

            let single = reduce_single(n);
            assert_eq!(reduce_single(single), single);
            assert!((1..=9).contains(&single), "{} -> {}", n, single);
        }
    }
}
