//! The state array `A` of KECCAK-p and its conversion from and to bit strings.
#![allow(non_snake_case)]
use std::ops::{Index, IndexMut};

use crate::{
    bits::BitSequence,
    error::{Error, Result},
};

// NOTE: References to Sections, Algorithms, Tables, etc. refer to the
// FIPS 202 standard (https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.202.pdf)
// if not otherwise specified.

/// Permutation width `b = 25 * w` of KECCAK-p (Table 1).
///
/// Only the seven standard widths are representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Width {
    w: usize,
}

impl Width {
    /// Largest lane width (`w = 64`) and the width of all SHA-3 functions.
    pub const B1600: Width = Width { w: 64 };

    /// All valid widths, smallest first.
    pub const ALL: [Width; 7] = [
        Width { w: 1 },
        Width { w: 2 },
        Width { w: 4 },
        Width { w: 8 },
        Width { w: 16 },
        Width { w: 32 },
        Width { w: 64 },
    ];

    /// Width from the total state size `b`.
    pub fn new(b: usize) -> Result<Self> {
        if b % 25 != 0 {
            return Err(Error::InvalidWidth(b));
        }
        Self::from_lane_width(b / 25).map_err(|_| Error::InvalidWidth(b))
    }

    /// Width from the lane size `w`.
    pub fn from_lane_width(w: usize) -> Result<Self> {
        if w.is_power_of_two() && w <= 64 {
            Ok(Width { w })
        } else {
            Err(Error::InvalidLaneWidth(w))
        }
    }

    /// `b`
    pub fn bits(self) -> usize {
        25 * self.w
    }

    /// `w = b / 25`
    pub fn lane_width(self) -> usize {
        self.w
    }

    /// `ℓ = log2(w)`
    pub fn log2_lane_width(self) -> u32 {
        self.w.trailing_zeros()
    }

    /// Number of rounds of KECCAK-f[b], `12 + 2ℓ` (Section 3.4).
    pub fn keccak_f_rounds(self) -> usize {
        12 + 2 * self.log2_lane_width() as usize
    }
}

/// State array: a `5 x 5 x w` cube of bits.
///
/// Bits are addressed with `A[(x, y, z)]`. `x` and `y` are taken modulo 5 and
/// `z` modulo `w`, so the step mappings can write `x + 4` for `x - 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateArray {
    width: Width,
    // Stored in the order of the flat string, i.e. at w * (5y + x) + z.
    bits: Vec<bool>,
}

impl StateArray {
    /// All-zero state of the given width.
    pub fn zero(width: Width) -> Self {
        Self {
            width,
            bits: vec![false; width.bits()],
        }
    }

    pub fn width(&self) -> Width {
        self.width
    }

    /// 3.1.2 Converting Strings to State Arrays
    ///
    /// `A[x, y, z] = S[w(5y + x) + z]`
    pub fn from_bits(S: &BitSequence, width: Width) -> Result<Self> {
        if S.len() != width.bits() {
            return Err(Error::StateLength {
                expected: width.bits(),
                actual: S.len(),
            });
        }
        let mut A = Self::zero(width);
        let w = width.lane_width();
        for x in 0..5 {
            for y in 0..5 {
                for z in 0..w {
                    A[(x, y, z)] = S[w * (5 * y + x) + z];
                }
            }
        }
        Ok(A)
    }

    /// 3.1.3 Converting State Arrays to Strings
    ///
    /// Exact inverse of [`StateArray::from_bits`].
    pub fn to_bits(&self) -> BitSequence {
        let w = self.width.lane_width();
        let mut S = vec![false; self.width.bits()];
        for x in 0..5 {
            for y in 0..5 {
                for z in 0..w {
                    S[w * (5 * y + x) + z] = self[(x, y, z)];
                }
            }
        }
        BitSequence::from(S)
    }

    /// The lane at `(x, y)` as an integer with bit `z` at position `z`.
    ///
    /// Mostly useful for comparing against lane oriented reference tables.
    pub fn lane(&self, x: usize, y: usize) -> u64 {
        (0..self.width.lane_width()).fold(0, |lane, z| lane | (u64::from(self[(x, y, z)]) << z))
    }

    #[inline(always)]
    fn idx(&self, x: usize, y: usize, z: usize) -> usize {
        let w = self.width.lane_width();
        w * (5 * (y % 5) + (x % 5)) + (z % w)
    }
}

/// Construct a state directly from flat bits, see [`StateArray::from_bits`].
pub fn to_cube(S: &BitSequence, width: Width) -> Result<StateArray> {
    StateArray::from_bits(S, width)
}

/// Flatten a state, see [`StateArray::to_bits`].
pub fn to_flat(A: &StateArray) -> BitSequence {
    A.to_bits()
}

impl Index<(usize, usize, usize)> for StateArray {
    type Output = bool;

    #[inline(always)]
    fn index(&self, (x, y, z): (usize, usize, usize)) -> &bool {
        &self.bits[self.idx(x, y, z)]
    }
}

impl IndexMut<(usize, usize, usize)> for StateArray {
    #[inline(always)]
    fn index_mut(&mut self, (x, y, z): (usize, usize, usize)) -> &mut bool {
        let i = self.idx(x, y, z);
        &mut self.bits[i]
    }
}
