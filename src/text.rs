//! Character-wise text encryption on top of the block primitives.
//!
//! Every character is one independent block: its code point goes through
//! the block transform and the result is re-encoded as a character. There
//! is no padding or chaining, so the modulus must be larger than every
//! code point in the input; anything bigger is rejected before it can
//! corrupt the output.
//!
//! A processed block can also land in a gap of the encoding space, either
//! the surrogate range or past U+10FFFF whenever the modulus exceeds it.
//! Such blocks are reported as [`TextError::NotACharacter`] instead of
//! being silently mangled.
//!
//! # Usage
//! ```
//! use rand::thread_rng;
//! use rsa_primitives::{rsa::KeyPair, text};
//!
//! let pair = KeyPair::from_primes(thread_rng(), 61u32.into(), 53u32.into()).unwrap();
//!
//! let encrypted = text::encrypt_text("hello", &pair.public()).unwrap();
//! let decrypted = text::decrypt_text(&encrypted, &pair.private()).unwrap();
//!
//! assert_eq!(decrypted, "hello");
//! ```
use num_bigint::BigUint;
use num_traits::ToPrimitive;
use thiserror::Error;

use crate::rsa::{CipherError, RsaPrivate, RsaPublic};

#[derive(Debug, Error)]
pub enum TextError {
    #[error("character {0:?} does not fit under the modulus")]
    CharTooLarge(char),

    #[error("block {0} has no character encoding")]
    NotACharacter(BigUint),

    #[error(transparent)]
    Cipher(#[from] CipherError),
}

/// Encrypts a string one character per block.
///
/// A code point at or above the modulus would decrypt to garbage, so it
/// is rejected up front as [`TextError::CharTooLarge`].
pub fn encrypt_text(s: &str, key: &RsaPublic) -> Result<String, TextError> {
    s.chars()
        .map(|ch| {
            let m = BigUint::from(ch as u32);
            if &m >= key.n() {
                return Err(TextError::CharTooLarge(ch));
            }
            let block = key.encrypt_block(&m)?;
            block_to_char(block)
        })
        .collect()
}

/// Decrypts a string produced by [`encrypt_text`] with the matching
/// public key.
pub fn decrypt_text(s: &str, key: &RsaPrivate) -> Result<String, TextError> {
    s.chars()
        .map(|ch| {
            let block = key.decrypt_block(&BigUint::from(ch as u32))?;
            block_to_char(block)
        })
        .collect()
}

fn block_to_char(block: BigUint) -> Result<char, TextError> {
    block
        .to_u32()
        .and_then(char::from_u32)
        .ok_or_else(|| TextError::NotACharacter(block))
}

#[cfg(test)]
mod tests {
    use rand::thread_rng;

    use crate::rsa::KeyPair;

    use super::*;

    fn small_pair() -> KeyPair {
        KeyPair::from_primes(thread_rng(), 61u32.into(), 53u32.into()).unwrap()
    }

    #[test]
    fn single_char_round_trip() {
        let pair = small_pair();
        let encrypted = encrypt_text("A", &pair.public()).unwrap();
        assert_eq!(decrypt_text(&encrypted, &pair.private()).unwrap(), "A");
    }

    #[test]
    fn longer_round_trip() {
        let pair = small_pair();
        let msg = "It was me who ate the cake";
        let encrypted = encrypt_text(msg, &pair.public()).unwrap();
        assert_eq!(decrypt_text(&encrypted, &pair.private()).unwrap(), msg);
    }

    #[test]
    fn code_point_above_modulus_is_rejected() {
        let pair = small_pair();
        let err = encrypt_text("€", &pair.public()).unwrap_err();
        assert!(matches!(err, TextError::CharTooLarge('€')));
    }

    #[test]
    fn block_landing_in_surrogates_is_reported() {
        // 236^2 = 55696 sits inside the surrogate range
        let key = RsaPublic::new(BigUint::from(2u32), BigUint::from(57344u32));
        let err = encrypt_text("\u{ec}", &key).unwrap_err();
        assert!(matches!(err, TextError::NotACharacter(_)));
    }

    #[test]
    fn oversized_cipher_unit_propagates() {
        let pair = small_pair();
        let err = decrypt_text("€", &pair.private()).unwrap_err();
        assert!(matches!(err, TextError::Cipher(CipherError::BlockTooLarge)));
    }
}
