//! KECCAK Sponge construction (Section 4).
//!
//! One sponge invocation moves through padding, absorbing and squeezing. The
//! two stateful phases are separate types: an [`AbsorbState`] only accepts
//! complete blocks and is consumed by [`AbsorbState::into_squeeze`], after
//! which no further input can be absorbed.
#![allow(non_snake_case)]
use tracing::debug;

use crate::{
    bits::BitSequence,
    error::{Error, Result},
    params::Params,
    permute::KeccakP,
};

/// 5.1 Algorithm 9: pad10*1(x, m)
///
/// Returns the padding `1 || 0^j || 1` with `j = (-m - 2) mod x`, so that
/// `m + len(pad)` is the smallest multiple of `x` that is at least `m + 2`.
pub fn pad10_1(x: usize, m: usize) -> Result<BitSequence> {
    if x == 0 {
        return Err(Error::ZeroBlockSize);
    }
    // (-m - 2) mod x without leaving unsigned arithmetic
    let j = (x - (m + 2) % x) % x;
    Ok(std::iter::once(true)
        .chain(std::iter::repeat_n(false, j))
        .chain(std::iter::once(true))
        .collect())
}

/// 4. Algorithm 8: SPONGE[f, pad, r](N, d)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sponge {
    f: KeccakP,
    rate: usize,
}

impl Sponge {
    pub fn new(params: &Params) -> Self {
        Self {
            f: KeccakP::new(params.width(), params.rounds()),
            rate: params.rate(),
        }
    }

    pub fn rate(&self) -> usize {
        self.rate
    }

    pub fn capacity(&self) -> usize {
        self.f.width.bits() - self.rate
    }

    /// `P = N || pad(r, len(N))`
    pub fn pad(&self, N: &BitSequence) -> Result<BitSequence> {
        let padding = pad10_1(self.rate, N.len())?;
        debug!(
            message_bits = N.len(),
            padding_bits = padding.len(),
            rate = self.rate,
            "pad10*1"
        );
        Ok(N.concat(&padding))
    }

    /// Start absorbing with the all-zero state.
    pub fn start(&self) -> AbsorbState {
        AbsorbState::new(self.f, self.rate)
    }

    /// Absorb a padded message block by block.
    pub fn absorb(&self, P: &BitSequence) -> Result<SqueezeState> {
        if P.len() % self.rate != 0 {
            return Err(Error::PaddedLength {
                len: P.len(),
                rate: self.rate,
            });
        }
        debug!(blocks = P.len() / self.rate, "absorbing");
        let mut absorb = self.start();
        for P_i in P.chunks(self.rate) {
            absorb.absorb_block(&P_i)?;
        }
        Ok(absorb.into_squeeze())
    }

    /// Run the whole construction: pad `N`, absorb it and squeeze `d` bits.
    pub fn digest(&self, N: &BitSequence, d: usize) -> Result<BitSequence> {
        if d == 0 {
            return Err(Error::ZeroOutputLength);
        }
        let P = self.pad(N)?;
        self.absorb(&P)?.squeeze(d)
    }
}

/// Absorb complete `r`-bit blocks into the `b`-bit state.
pub struct AbsorbState {
    f: KeccakP,
    rate: usize,
    S: BitSequence,
}

impl AbsorbState {
    /// Initial state `S = 0^b`.
    fn new(f: KeccakP, rate: usize) -> Self {
        Self {
            f,
            rate,
            S: BitSequence::zeros(f.width.bits()),
        }
    }

    /// `S = f(S ⊕ (P_i || 0^c))`
    pub fn absorb_block(&mut self, P_i: &BitSequence) -> Result<()> {
        if P_i.len() != self.rate {
            return Err(Error::BlockLength {
                rate: self.rate,
                actual: P_i.len(),
            });
        }
        let capacity = self.f.width.bits() - self.rate;
        let block = P_i.concat(&BitSequence::zeros(capacity));
        self.S = self.f.permute(&self.S.xor(&block)?)?;
        Ok(())
    }

    /// Finish absorbing.
    ///
    /// Unlike an incremental hasher there is no padding to add here, the
    /// message was padded as a whole before absorbing.
    pub fn into_squeeze(self) -> SqueezeState {
        SqueezeState {
            f: self.f,
            rate: self.rate,
            S: self.S,
        }
    }
}

/// Squeeze output bits from the state left by absorbing.
pub struct SqueezeState {
    f: KeccakP,
    rate: usize,
    S: BitSequence,
}

impl SqueezeState {
    /// Steps 7 to 10 of Algorithm 8.
    ///
    /// The first `r` bits are read without a further permutation, additional
    /// blocks are only produced if `d > r`.
    pub fn squeeze(mut self, d: usize) -> Result<BitSequence> {
        let mut Z = self.S.truncated(self.rate);
        let mut blocks = 1;
        while Z.len() < d {
            self.S = self.f.permute(&self.S)?;
            Z = Z.concat(&self.S.truncated(self.rate));
            blocks += 1;
        }
        debug!(blocks, output_bits = d, "squeezed");
        if Z.len() < d {
            return Err(Error::ShortSqueeze {
                produced: Z.len(),
                requested: d,
            });
        }
        Ok(Z.truncated(d))
    }
}
