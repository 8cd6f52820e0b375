//! KECCAK and SHA-3 on the bit level
//!
//! This crate provides a portable, pure Rust reference implementation of the
//! KECCAK-p permutations, the sponge construction and the SHA-3 functions
//! standardized in [FIPS 202].
//!
//! Every step works on individual bits exactly as written in the standard:
//! strings of bits are converted into a `5 x 5 x w` state array, the step
//! mappings θ, ρ, π, χ and ι are evaluated bit by bit, and the round constants
//! are derived from their LFSR instead of a table. This supports all seven
//! permutation widths (`b = 25 ... 1600`) and messages of any bit length.
//!
//! # Limitations
//!
//! This software is intended as a learning exercise and not for production use.
//!
//! Performance is not a goal. This implementation is orders of magnitude slower
//! than lane oriented ones and makes no attempt at constant-time execution.
//!
//! The whole message must be available upfront, there is no incremental
//! `update` API.
//!
//! # Example Usage
//! ```
//! # use keccak_ref::{hash, sha3_256};
//! #
//! let message = b"your input bytes";
//! let hash_bytes: [u8; 32] = sha3_256(message);
//! let expected = "414d4b6d11a92aaeeebe35f9374942f563848d345631bf5537407252dca6b378";
//! assert_eq!(expected, hex::encode(hash_bytes));
//! assert_eq!(expected, hash(message));
//! ```
//!
//! [FIPS 202]: https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.202.pdf

mod bits;
mod error;
mod hasher;
mod params;
mod permute;
mod round_constants;
mod sponge;
mod state;

pub use crate::{
    bits::{BitOrder, BitSequence},
    error::{Error, Result},
    hasher::{Domain, Hasher},
    params::Params,
    permute::{KeccakP, chi, iota, keccak_p, pi, rho, round, theta},
    round_constants::{rc, round_constant},
    sponge::{AbsorbState, Sponge, SqueezeState, pad10_1},
    state::{StateArray, Width, to_cube, to_flat},
};

/// SHA3-256 of `message` as lowercase hex.
pub fn hash(message: &[u8]) -> String {
    hex::encode(sha3_256(message))
}

macro_rules! sha3_fn {
    ($name:ident, $hasher:ident, $bits:literal, $bytes:literal) => {
        #[doc = concat!("SHA-3 Hash with ", $bits, " bits (", $bytes, " bytes) output.")]
        pub fn $name(message: &[u8]) -> [u8; $bytes] {
            Hasher::$hasher
                .digest(message)
                .expect(concat!("SHA3-", $bits, " parameters are valid"))
                .try_into()
                .expect(concat!("SHA3-", $bits, " digest has ", $bytes, " bytes"))
        }
    };
}

sha3_fn!(sha3_224, SHA3_224, 224, 28);
sha3_fn!(sha3_256, SHA3_256, 256, 32);
sha3_fn!(sha3_384, SHA3_384, 384, 48);
sha3_fn!(sha3_512, SHA3_512, 512, 64);

/// SHAKE128 with `output_len` bytes of output.
pub fn shake128(message: &[u8], output_len: usize) -> Result<Vec<u8>> {
    Hasher::shake128(8 * output_len)?.digest(message)
}

/// SHAKE256 with `output_len` bytes of output.
pub fn shake256(message: &[u8], output_len: usize) -> Result<Vec<u8>> {
    Hasher::shake256(8 * output_len)?.digest(message)
}

/// KECCAK[c](N, d): the sponge over KECCAK-p[1600, 24] without any domain
/// separation suffix (Section 5.2).
pub fn keccak(capacity: usize, message: &BitSequence, output_len: usize) -> Result<BitSequence> {
    Hasher::new(Params::keccak(capacity, output_len)?, Domain::Keccak).digest_bits(message)
}
