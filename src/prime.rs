use num_bigint::{BigUint, RandBigInt};
use rand::Rng;

use crate::algo;

/// Picks a uniform starting point in (floor, 2*floor] and walks upward
/// until the candidate passes the primality test.
///
/// The walk makes the draw non-uniform over primes: a prime sitting after
/// a long gap is hit by every starting point inside that gap. That skew is
/// accepted, the same way the scan is allowed to land past 2*floor when
/// the tail of the window holds no prime. The result is always prime and
/// strictly above the floor.
///
/// Panics if floor is zero, since the window is empty then.
pub fn gen_prime(mut rng: impl Rng, floor: &BigUint) -> BigUint {
    let low = floor + 1u32;
    let high = floor * 2u32 + 1u32;
    let mut candidate = rng.gen_biguint_range(&low, &high);
    while !algo::is_prime(&candidate) {
        candidate += 1u32;
    }
    candidate
}

/// Generates two distinct primes above the floor.
///
/// The second search window starts right above the first prime, not at
/// the caller's floor. Distinctness rests entirely on that coupling:
/// q is drawn from (p, 2p + 2], so q > p always, with no equality check
/// anywhere.
pub fn gen_prime_pair(mut rng: impl Rng, floor: &BigUint) -> (BigUint, BigUint) {
    let p = gen_prime(&mut rng, floor);
    let q = gen_prime(&mut rng, &(&p + 1u32));
    (p, q)
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, thread_rng, SeedableRng};

    use super::*;

    #[test]
    fn prime_is_above_floor() {
        for floor in [1u32, 5, 100, 1000, 50_000] {
            let floor = BigUint::from(floor);
            let p = gen_prime(thread_rng(), &floor);
            assert!(p > floor);
            assert!(algo::is_prime(&p));
        }
    }

    #[test]
    fn pair_is_distinct_and_ordered() {
        for _ in 0..16 {
            let (p, q) = gen_prime_pair(thread_rng(), &BigUint::from(1000u32));
            assert!(q > p);
            assert!(algo::is_prime(&p));
            assert!(algo::is_prime(&q));
        }
    }

    #[test]
    fn seeded_runs_agree() {
        let floor = BigUint::from(1000u32);
        let a = gen_prime_pair(StdRng::seed_from_u64(42), &floor);
        let b = gen_prime_pair(StdRng::seed_from_u64(42), &floor);
        assert_eq!(a, b);
    }
}
