use num_bigint::{BigInt, BigUint, ToBigInt};
use num_integer::Integer;
use num_traits::{One, Zero};

/// Extended Euclidian algorithm. Taken directly from wikipedia
#[allow(clippy::many_single_char_names)]
pub fn egcd(a: &BigUint, b: &BigUint) -> (BigInt, BigInt, BigInt) {
    let (mut old_r, mut r) = (a.to_bigint().unwrap(), b.to_bigint().unwrap());
    let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());
    let (mut old_t, mut t) = (BigInt::zero(), BigInt::one());

    while !r.is_zero() {
        let q = &old_r / &r;

        let temp = r.clone();
        r = old_r - &q * r;
        old_r = temp;

        let temp = s.clone();
        s = old_s - &q * s;
        old_s = temp;

        let temp = t.clone();
        t = old_t - q * t;
        old_t = temp;
    }
    (old_r, old_s, old_t)
}

/// Returns true if a and b share no factor besides 1
pub fn is_coprime(a: &BigUint, b: &BigUint) -> bool {
    let (g, _, _) = egcd(a, b);
    g == One::one()
}

/// Modulo inverse. Taken directly from wikipedia. Returns None if inverse
/// doesn't exist, including for a zero modulus which has no residues at all
#[allow(clippy::many_single_char_names)]
pub fn invmod(a: &BigUint, n: &BigUint) -> Option<BigUint> {
    if n.is_zero() {
        return None;
    }
    let (gcd, inverse, _) = egcd(a, n);
    if gcd == One::one() {
        let res = inverse.mod_floor(&n.to_bigint().unwrap());
        Some(res.to_biguint().unwrap())
    } else {
        None
    }
}

/// Deterministic trial division test. Strikes out multiples of 2 and 3,
/// then walks divisor candidates 6k - 1, 6k + 1 while their square is at
/// most x.
pub fn is_prime(x: &BigUint) -> bool {
    if x <= &BigUint::one() {
        return false;
    }
    let two = BigUint::from(2u32);
    let three = BigUint::from(3u32);
    if x <= &three {
        return true;
    }
    if (x % &two).is_zero() || (x % &three).is_zero() {
        return false;
    }
    let mut i = BigUint::from(5u32);
    while &i * &i <= *x {
        if (x % &i).is_zero() || (x % (&i + &two)).is_zero() {
            return false;
        }
        i += 6u32;
    }
    true
}
