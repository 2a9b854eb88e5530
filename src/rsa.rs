use num_bigint::{BigUint, RandBigInt};
use num_traits::One;
use rand::Rng;
use thiserror::Error;

use crate::{algo, prime};

/// Default floor for generated primes
const DEFAULT_PRIME_FLOOR: u64 = 1000;

#[derive(Debug, Error)]
pub enum KeyGenError {
    #[error("prime floor must be positive")]
    FloorTooSmall,

    #[error("{0} is not prime")]
    NotPrime(BigUint),

    #[error("totient too small, no public exponent exists")]
    DegenerateModulus,
}

#[derive(Debug, Error)]
pub enum CipherError {
    #[error("block is larger than modulus")]
    BlockTooLarge,
}

/// Rsa public key
pub struct RsaPublic {
    e: BigUint,
    n: BigUint,
}

/// Rsa private key
pub struct RsaPrivate {
    d: BigUint,
    n: BigUint,
}

/// A derived set of rsa parameters. The primes and the totient never
/// leave this struct; consumers only get the two key views, which carry
/// the exponents and the modulus.
#[allow(dead_code)]
#[derive(Debug)]
pub struct KeyPair {
    p: BigUint,
    q: BigUint,
    n: BigUint,
    phi: BigUint,
    e: BigUint,
    d: BigUint,
}

impl KeyPair {
    /// Generates a pair from primes above the default floor of 1000.
    pub fn generate(rng: impl Rng) -> Result<Self, KeyGenError> {
        Self::generate_above(rng, DEFAULT_PRIME_FLOOR)
    }

    /// Generates a pair from primes above the given floor. The floor
    /// controls the magnitude of the modulus, and with it the largest
    /// block that can be encrypted.
    pub fn generate_above(mut rng: impl Rng, floor: u64) -> Result<Self, KeyGenError> {
        if floor == 0 {
            return Err(KeyGenError::FloorTooSmall);
        }
        let (p, q) = prime::gen_prime_pair(&mut rng, &BigUint::from(floor));
        Self::derive(rng, p, q)
    }

    /// Builds a pair from explicit primes. Both inputs are checked, since
    /// the derived exponents would be garbage for composite inputs.
    /// Equal primes are not rejected here; the degenerate p = q = 2 case
    /// is caught by the totient check.
    pub fn from_primes(rng: impl Rng, p: BigUint, q: BigUint) -> Result<Self, KeyGenError> {
        if !algo::is_prime(&p) {
            return Err(KeyGenError::NotPrime(p));
        }
        if !algo::is_prime(&q) {
            return Err(KeyGenError::NotPrime(q));
        }
        Self::derive(rng, p, q)
    }

    /// One atomic derivation step. Nothing in the pair is ever rewritten
    /// after this returns.
    fn derive(mut rng: impl Rng, p: BigUint, q: BigUint) -> Result<Self, KeyGenError> {
        let n = &p * &q;
        let phi = (&p - 1u32) * (&q - 1u32);
        if phi <= BigUint::one() {
            return Err(KeyGenError::DegenerateModulus);
        }
        let two = BigUint::from(2u32);
        // phi + 1 < n is coprime to phi, so a valid draw always exists
        let e = loop {
            let candidate = rng.gen_biguint_range(&two, &n);
            if algo::is_coprime(&candidate, &phi) {
                break candidate;
            }
        };
        let d = algo::invmod(&e, &phi).expect("e is sampled coprime to phi");
        Ok(Self { p, q, n, phi, e, d })
    }

    /// Public half (e, n) of the pair.
    pub fn public(&self) -> RsaPublic {
        RsaPublic {
            e: self.e.clone(),
            n: self.n.clone(),
        }
    }

    /// Private half (d, n) of the pair.
    pub fn private(&self) -> RsaPrivate {
        RsaPrivate {
            d: self.d.clone(),
            n: self.n.clone(),
        }
    }
}

impl RsaPublic {
    pub fn new(e: BigUint, n: BigUint) -> Self {
        Self { e, n }
    }

    /// Encrypting a single block that will be decrypted using private key
    pub fn encrypt_block(&self, num: &BigUint) -> Result<BigUint, CipherError> {
        if num >= &self.n {
            return Err(CipherError::BlockTooLarge);
        }
        Ok(num.modpow(&self.e, &self.n))
    }

    /// Get a reference to the rsa public's e.
    pub fn e(&self) -> &BigUint {
        &self.e
    }

    /// Get a reference to the rsa public's n.
    pub fn n(&self) -> &BigUint {
        &self.n
    }
}

impl RsaPrivate {
    pub fn new(d: BigUint, n: BigUint) -> Self {
        Self { d, n }
    }

    /// Decrypts a single block produced by the matching public key
    pub fn decrypt_block(&self, num: &BigUint) -> Result<BigUint, CipherError> {
        if num >= &self.n {
            return Err(CipherError::BlockTooLarge);
        }
        Ok(num.modpow(&self.d, &self.n))
    }

    /// Get a reference to the rsa private's d.
    pub fn d(&self) -> &BigUint {
        &self.d
    }

    /// Get a reference to the rsa private's n.
    pub fn n(&self) -> &BigUint {
        &self.n
    }
}
