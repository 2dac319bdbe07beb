//! Numeric kernels: primality, Fibonacci, GCD/LCM folds.
//!
//! Inputs are arbitrary-precision signed integers ([`BigInt`]), matching the
//! unbounded integers the wire format allows. Values that fit in `u64` take
//! a machine-word fast path for primality.

use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{One, ToPrimitive, Zero};

/// Trial-division primality test over 6k±1 candidates.
///
/// Anything `<= 1` is not prime.
pub fn is_prime(n: &BigInt) -> bool {
    if n.sign() != Sign::Plus {
        return false;
    }
    match n.to_u64() {
        Some(small) => is_prime_u64(small),
        None => is_prime_big(n.magnitude()),
    }
}

/// [`is_prime`] for values that fit in a machine word.
pub fn is_prime_u64(n: u64) -> bool {
    if n <= 1 {
        return false;
    }
    if n <= 3 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }
    let mut i: u64 = 5;
    // `i <= n / i` keeps the bound check from overflowing near u64::MAX.
    while i <= n / i {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

fn is_prime_big(n: &BigUint) -> bool {
    let two = BigUint::from(2u32);
    let three = BigUint::from(3u32);
    if *n <= three {
        return *n >= two;
    }
    if (n % &two).is_zero() || (n % &three).is_zero() {
        return false;
    }
    let mut i = BigUint::from(5u32);
    while &i * &i <= *n {
        if (n % &i).is_zero() || (n % (&i + &two)).is_zero() {
            return false;
        }
        i += 6u32;
    }
    true
}

/// The first `n` Fibonacci terms, starting `0, 1, 1, 2, ...`.
pub fn fibonacci_series(n: usize) -> Vec<BigUint> {
    let mut seq = Vec::with_capacity(n);
    if n == 0 {
        return seq;
    }
    seq.push(BigUint::zero());
    if n == 1 {
        return seq;
    }
    seq.push(BigUint::one());
    while seq.len() < n {
        let next = &seq[seq.len() - 1] + &seq[seq.len() - 2];
        seq.push(next);
    }
    seq
}

/// Euclidean GCD. `gcd(0, 0) == 0`.
pub fn gcd(a: &BigUint, b: &BigUint) -> BigUint {
    a.gcd(b)
}

/// Pairwise LCM; zero if either operand is zero.
pub fn lcm(a: &BigUint, b: &BigUint) -> BigUint {
    if a.is_zero() || b.is_zero() {
        return BigUint::zero();
    }
    a.lcm(b)
}

/// LCM of a list, folded left from `|nums[0]|`. Empty input yields zero.
pub fn lcm_of_list(nums: &[BigInt]) -> BigUint {
    let Some((first, rest)) = nums.split_first() else {
        return BigUint::zero();
    };
    rest.iter()
        .fold(first.magnitude().clone(), |acc, x| lcm(&acc, x.magnitude()))
}

/// HCF of a list, folded left from `|nums[0]|`. Empty input yields zero.
pub fn hcf_of_list(nums: &[BigInt]) -> BigUint {
    let Some((first, rest)) = nums.split_first() else {
        return BigUint::zero();
    };
    rest.iter()
        .fold(first.magnitude().clone(), |acc, x| gcd(&acc, x.magnitude()))
}

/// Keeps the primes of `nums`, preserving order.
pub fn filter_primes(nums: &[BigInt]) -> Vec<BigInt> {
    nums.iter().filter(|n| is_prime(n)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn big(nums: &[i64]) -> Vec<BigInt> {
        nums.iter().map(|&n| BigInt::from(n)).collect()
    }

    fn naive_is_prime(n: i64) -> bool {
        n > 1 && (2..n).take_while(|d| d * d <= n).all(|d| n % d != 0)
    }

    #[test]
    fn is_prime_small_values() {
        assert!(is_prime(&BigInt::from(2)));
        assert!(is_prime(&BigInt::from(3)));
        assert!(!is_prime(&BigInt::from(1)));
        assert!(!is_prime(&BigInt::from(0)));
        assert!(!is_prime(&BigInt::from(-7)));
        assert!(!is_prime(&BigInt::from(25)));
        assert!(!is_prime(&BigInt::from(49)));
        assert!(is_prime(&BigInt::from(7919)));
    }

    #[test]
    fn is_prime_agrees_with_trial_division() {
        for n in -1000..=10_000 {
            assert_eq!(is_prime(&BigInt::from(n)), naive_is_prime(n), "mismatch at {}", n);
        }
    }

    #[test]
    fn is_prime_large_values() {
        assert!(is_prime_u64(1_000_000_007));
        assert!(!is_prime_u64(1_000_000_007 * 3));
        // 2^64 - 1 = 3 * 5 * 17 * ...
        assert!(!is_prime_u64(u64::MAX));
    }

    #[test]
    fn is_prime_beyond_u64() {
        let two_pow_64 = BigInt::from(u64::MAX) + 1;
        assert!(!is_prime(&two_pow_64));
        assert!(!is_prime(&(two_pow_64.clone() + 1))); // 274177 * 67280421310721
        assert!(!is_prime(&(-two_pow_64)));
    }

    #[test]
    fn fibonacci_edges() {
        assert!(fibonacci_series(0).is_empty());
        assert_eq!(fibonacci_series(1), vec![BigUint::zero()]);
        let five: Vec<u32> = fibonacci_series(5)
            .iter()
            .map(|t| u32::try_from(t).unwrap())
            .collect();
        assert_eq!(five, vec![0, 1, 1, 2, 3]);
    }

    #[test]
    fn fibonacci_thousandth_term_exceeds_u64() {
        let seq = fibonacci_series(1000);
        assert_eq!(seq.len(), 1000);
        assert!(seq[999].bits() > 64);
        assert_eq!(
            seq[999].to_string(),
            "26863810024485359386146727202142923967616609318986952340123175997617981700247881689338369654483356564191827856161443356312976673642210350324634850410377680367334151172899169723197082763985615764450078474174626"
        );
    }

    #[test]
    fn lcm_and_hcf_examples() {
        assert_eq!(lcm_of_list(&big(&[4, 6, 10])), BigUint::from(60u32));
        assert_eq!(hcf_of_list(&big(&[12, 18, 24])), BigUint::from(6u32));
        assert_eq!(lcm_of_list(&big(&[-4, 6])), BigUint::from(12u32));
        assert_eq!(hcf_of_list(&big(&[-12, 18])), BigUint::from(6u32));
        assert_eq!(lcm_of_list(&big(&[5, 0, 3])), BigUint::zero());
        assert_eq!(hcf_of_list(&big(&[0, 0])), BigUint::zero());
        assert_eq!(hcf_of_list(&big(&[0, 9])), BigUint::from(9u32));
    }

    #[test]
    fn empty_lists_fold_to_zero() {
        assert_eq!(lcm_of_list(&[]), BigUint::zero());
        assert_eq!(hcf_of_list(&[]), BigUint::zero());
    }

    #[test]
    fn operands_beyond_u64() {
        let two_pow_64: BigInt = BigInt::from(u64::MAX) + 1;
        let two_pow_65: BigInt = &two_pow_64 * 2;
        assert_eq!(
            hcf_of_list(&[two_pow_64.clone(), two_pow_65.clone()]).to_string(),
            "18446744073709551616"
        );
        assert_eq!(
            lcm_of_list(&[two_pow_65, BigInt::from(3)]).to_string(),
            "110680464442257309696"
        );
        assert_eq!(
            hcf_of_list(&big(&[i64::MIN])),
            BigUint::from(1u64 << 63)
        );
    }

    #[test]
    fn filter_primes_keeps_order() {
        assert_eq!(filter_primes(&big(&[2, 3, 4, 5, 9, 11])), big(&[2, 3, 5, 11]));
        assert_eq!(filter_primes(&big(&[11, -3, 2, 2])), big(&[11, 2, 2]));
    }

    proptest! {
        #[test]
        fn fibonacci_terms_follow_recurrence(n in 0usize..=1000) {
            let seq = fibonacci_series(n);
            prop_assert_eq!(seq.len(), n);
            if n >= 2 {
                prop_assert!(seq[0].is_zero());
                prop_assert!(seq[1].is_one());
            }
            for i in 2..seq.len() {
                prop_assert_eq!(&seq[i], &(&seq[i - 1] + &seq[i - 2]));
            }
        }

        #[test]
        fn hcf_divides_every_element(nums in prop::collection::vec(-10_000i64..10_000, 1..50)) {
            let h = hcf_of_list(&big(&nums));
            if h.is_zero() {
                prop_assert!(nums.iter().all(|&x| x == 0));
            } else {
                for x in &nums {
                    prop_assert!((BigUint::from(x.unsigned_abs()) % &h).is_zero());
                }
            }
        }

        #[test]
        fn lcm_is_divided_by_every_element(nums in prop::collection::vec(-500i64..500, 1..20)) {
            let l = lcm_of_list(&big(&nums));
            for x in nums.iter().filter(|&&x| x != 0) {
                prop_assert!((&l % BigUint::from(x.unsigned_abs())).is_zero());
            }
        }

        #[test]
        fn u64_fast_path_matches_big_path(n in 2u64..200_000) {
            prop_assert_eq!(is_prime_u64(n), is_prime_big(&BigUint::from(n)));
        }
    }
}
