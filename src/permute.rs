//! KECCAK-p permutations on the bit level.
//!
//! The five step mappings are implemented exactly as the per-bit formulas of
//! Section 3.2, for every lane width `w` in `{1, 2, 4, ..., 64}`. Each step is a
//! free function that takes a state array and returns the transformed one, so
//! a step always reads the complete output of the previous step.
#![allow(non_snake_case)]
use tracing::trace;

use crate::{
    bits::BitSequence,
    error::Result,
    round_constants::round_constant,
    state::{StateArray, Width},
};

// NOTE: References to Sections, Algorithms, Tables, etc. refer to the
// FIPS 202 standard (https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.202.pdf)
// if not otherwise specified.

/// 3.2.1 Algorithm 1: θ(A)
pub fn theta(A: &StateArray) -> StateArray {
    let w = A.width().lane_width();
    // Step 1
    // Parity of the 5 * w columns
    let mut C = vec![vec![false; w]; 5];
    for (x, Cx) in C.iter_mut().enumerate() {
        for (z, Cxz) in Cx.iter_mut().enumerate() {
            *Cxz = (0..5).fold(false, |parity, y| parity ^ A[(x, y, z)]);
        }
    }

    // Step 2
    // (x + 4) % 5 is equivalent to (x - 1) % 5, (z + w - 1) % w to (z - 1) % w
    let mut D = vec![vec![false; w]; 5];
    for (x, Dx) in D.iter_mut().enumerate() {
        for (z, Dxz) in Dx.iter_mut().enumerate() {
            *Dxz = C[(x + 4) % 5][z] ^ C[(x + 1) % 5][(z + w - 1) % w];
        }
    }

    // Step 3
    let mut A_prime = A.clone();
    for x in 0..5 {
        for y in 0..5 {
            for z in 0..w {
                A_prime[(x, y, z)] ^= D[x][z];
            }
        }
    }
    A_prime
}

/// Rotation offset of the lane visited at step `t` of [`rho`], before the
/// reduction modulo `w`.
fn rho_offset(t: usize) -> usize {
    (t + 1) * (t + 2) / 2
}

/// 3.2.2 Algorithm 2: ρ(A)
///
/// Quote from 3.2.2 (description of ρ):
/// > The effect of ρ is to rotate the bits of each lane by a length, called the
/// > offset, which depends on the fixed x and y coordinates of the
/// > lane. Equivalently, for each bit in the lane, the z coordinate is
/// > modified by adding the offset, modulo the lane size.
pub fn rho(A: &StateArray) -> StateArray {
    let w = A.width().lane_width();
    // Lane (0, 0) is never visited and keeps its value
    let mut A_prime = A.clone();
    let (mut x, mut y) = (1, 0);
    for t in 0..24 {
        let offset = rho_offset(t) % w;
        for z in 0..w {
            A_prime[(x, y, z)] = A[(x, y, z + w - offset)];
        }
        (x, y) = (y, (2 * x + 3 * y) % 5);
    }
    A_prime
}

/// 3.2.3 Algorithm 3: π(A)
///
/// Quote from 3.2.3 (description of π):
/// > The effect of π is to rearrange the positions of the lanes, as illustrated
/// > for any slice in Figure 5 below.
pub fn pi(A: &StateArray) -> StateArray {
    let w = A.width().lane_width();
    let mut A_prime = StateArray::zero(A.width());
    for x in 0..5 {
        for y in 0..5 {
            for z in 0..w {
                A_prime[(x, y, z)] = A[(x + 3 * y, x, z)];
            }
        }
    }
    A_prime
}

/// 3.2.4 Algorithm 4: χ(A)
///
/// Quote from 3.2.4:
/// > The effect of χ is to XOR each bit with a non-linear function of two other
/// > bits in its row
pub fn chi(A: &StateArray) -> StateArray {
    let w = A.width().lane_width();
    let mut A_prime = StateArray::zero(A.width());
    for x in 0..5 {
        for y in 0..5 {
            for z in 0..w {
                A_prime[(x, y, z)] = A[(x, y, z)] ^ (!A[(x + 1, y, z)] & A[(x + 2, y, z)]);
            }
        }
    }
    A_prime
}

/// 3.2.5 Algorithm 6: ι(A, ir)
///
/// Quote from 3.2.5:
/// > The effect of ι is to modify some of the bits of Lane (0, 0) in a manner
/// > that depends on the round
/// > index ir. The other 24 lanes are not affected by ι.
pub fn iota(A: &StateArray, ir: usize) -> StateArray {
    let RC = round_constant(ir, A.width());
    let mut A_prime = A.clone();
    for (z, RCz) in RC.iter().enumerate() {
        A_prime[(0, 0, z)] ^= RCz;
    }
    A_prime
}

/// 3.3 Rnd(A, ir) = ι(χ(π(ρ(θ(A)))), ir)
pub fn round(A: &StateArray, ir: usize) -> StateArray {
    iota(&chi(&pi(&rho(&theta(A)))), ir)
}

/// 3.3 Algorithm 7: KECCAK-p[b, nr](S)
///
/// Round indices run from `0` to `nr - 1`. For `nr = 12 + 2ℓ` this is
/// KECCAK-f[b] (Section 3.4).
pub fn keccak_p(S: &BitSequence, width: Width, rounds: usize) -> Result<BitSequence> {
    trace!(b = width.bits(), nr = rounds, "keccak-p");
    let mut A = StateArray::from_bits(S, width)?;
    for ir in 0..rounds {
        A = round(&A, ir);
    }
    Ok(A.to_bits())
}

/// The permutation `f = KECCAK-p[b, nr]` driven by the sponge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeccakP {
    pub width: Width,
    pub rounds: usize,
}

impl KeccakP {
    pub fn new(width: Width, rounds: usize) -> Self {
        Self { width, rounds }
    }

    /// KECCAK-f[b] = KECCAK-p[b, 12 + 2ℓ]
    pub fn keccak_f(width: Width) -> Self {
        Self::new(width, width.keccak_f_rounds())
    }

    /// Apply the permutation to a string of exactly `b` bits.
    pub fn permute(&self, S: &BitSequence) -> Result<BitSequence> {
        keccak_p(S, self.width, self.rounds)
    }
}
