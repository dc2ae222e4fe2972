//! Prime number helpers used to size hash tables.

use crate::util::error::CapacityOverflow;
use crate::util::result::ResultExtension;

/// Returns true if `n` is prime, using trial division.
pub const fn is_prime(n: usize) -> bool {
    if n < 2 { return false; }

    let mut divisor = 2;
    // Written as a division so that divisor * divisor can't overflow.
    while divisor <= n / divisor {
        if n % divisor == 0 { return false; }
        divisor += 1;
    }
    true
}

/// Returns the smallest prime strictly greater than `n`.
///
/// # Panics
/// Panics if there is no such prime representable as a [`usize`].
#[track_caller]
pub fn next_prime(n: usize) -> usize {
    let mut candidate = n.checked_add(1).ok_or(CapacityOverflow).throw();
    while !is_prime(candidate) {
        candidate = candidate.checked_add(1).ok_or(CapacityOverflow).throw();
    }
    candidate
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::util::panic::assert_panics;

    #[rstest]
    #[case(0, 2)]
    #[case(1, 2)]
    #[case(2, 3)]
    #[case(13, 17)]
    #[case(24, 29)]
    #[case(202, 211)]
    #[case(422, 431)]
    #[case(7918, 7919)]
    fn test_next_prime(#[case] n: usize, #[case] expected: usize) {
        assert_eq!(next_prime(n), expected);
    }

    #[test]
    fn test_is_prime() {
        let primes = (0..50).filter(|n| is_prime(*n)).collect::<Vec<_>>();
        assert_eq!(primes, [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47]);
        assert!(is_prime(104_729));
        assert!(!is_prime(104_730));
    }

    #[test]
    fn test_next_prime_overflow() {
        assert_panics!({
            next_prime(usize::MAX);
        });
    }
}
