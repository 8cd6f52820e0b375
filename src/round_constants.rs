//! Round constants for the ι step mapping.
//!
//! Instead of a hard-coded table, the constants are derived from the LFSR of
//! 3.2.5 Algorithm 5, which makes them available for every lane width.
#![allow(non_snake_case)]

use crate::{bits::BitSequence, state::Width};

/// 3.2.5 Algorithm 5: rc(t)
///
/// Output bit of the LFSR with feedback polynomial `x^8 + x^6 + x^5 + x^4 + 1`
/// after `t mod 255` steps.
pub fn rc(t: usize) -> bool {
    let steps = t % 255;
    if steps == 0 {
        return true;
    }
    // R[i] is held in bit i of `r`, so R = 10000000 is 0b0000_0001.
    let mut r: u16 = 0b0000_0001;
    for _ in 0..steps {
        // R = 0 || R
        r <<= 1;
        let r8 = (r >> 8) & 1;
        r ^= r8 | (r8 << 4) | (r8 << 5) | (r8 << 6);
        // Trunc_8(R)
        r &= 0xff;
    }
    r & 1 == 1
}

/// The `w`-bit round constant `RC` for round index `ir` (3.2.5 Algorithm 6,
/// steps 2 and 3): `RC[2^j - 1] = rc(j + 7 ir)` for `0 <= j <= ℓ`.
pub fn round_constant(ir: usize, width: Width) -> BitSequence {
    let mut RC = vec![false; width.lane_width()];
    for j in 0..=width.log2_lane_width() as usize {
        RC[(1 << j) - 1] = rc(j + 7 * ir);
    }
    BitSequence::from(RC)
}
