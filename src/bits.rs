//! Bit strings as used throughout FIPS 202.
//!
//! Keccak is specified over strings of bits, not bytes. [`BitSequence`] is a
//! plain ordered list of bits with the handful of operations the sponge needs:
//! slicing, concatenation, XOR, and conversion from and to bytes.
use std::{
    fmt,
    ops::{Index, Range},
    str::FromStr,
};

use crate::error::{Error, Result};

/// Order of bits inside a byte when converting between bytes and bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BitOrder {
    /// Least significant bit first. This is the `h2b`/`b2h` convention of
    /// FIPS 202 (Appendix B.1) and the one needed to reproduce the published
    /// SHA-3 test vectors.
    #[default]
    Lsb0,
    /// Most significant bit first, i.e. the bits read like the binary literal
    /// of the byte.
    Msb0,
}

impl BitOrder {
    /// Shift that moves bit number `i` (0..8) of a byte into the lowest position.
    fn shift(self, i: usize) -> usize {
        match self {
            BitOrder::Lsb0 => i,
            BitOrder::Msb0 => 7 - i,
        }
    }
}

/// Ordered sequence of bits with known length.
#[derive(Clone, PartialEq, Eq, Default, Hash)]
pub struct BitSequence {
    bits: Vec<bool>,
}

impl BitSequence {
    /// Empty bit sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// `len` zero bits (`0^len`).
    pub fn zeros(len: usize) -> Self {
        Self {
            bits: vec![false; len],
        }
    }

    /// Expand `bytes` into `8 * bytes.len()` bits.
    pub fn from_bytes(bytes: &[u8], order: BitOrder) -> Self {
        bytes
            .iter()
            .flat_map(|byte| (0..8).map(move |i| (byte >> order.shift(i)) & 1 == 1))
            .collect()
    }

    /// Pack the bits into bytes.
    ///
    /// If the length is not a multiple of 8 the last byte is filled up with
    /// zero bits.
    pub fn to_bytes(&self, order: BitOrder) -> Vec<u8> {
        self.bits
            .chunks(8)
            .map(|chunk| {
                chunk
                    .iter()
                    .enumerate()
                    .fold(0_u8, |byte, (i, &bit)| byte | (u8::from(bit) << order.shift(i)))
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn get(&self, i: usize) -> Option<bool> {
        self.bits.get(i).copied()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = bool> + '_ {
        self.bits.iter().copied()
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.bits
    }

    /// Copy of the bits in `range`.
    ///
    /// # Panics
    /// If `range` is out of bounds, like slice indexing.
    pub fn slice(&self, range: Range<usize>) -> Self {
        Self::from(&self.bits[range])
    }

    /// `Trunc_s(X)`: the first `s` bits, or all bits if the sequence is shorter.
    pub fn truncated(&self, s: usize) -> Self {
        self.slice(0..s.min(self.len()))
    }

    /// `X || Y`
    pub fn concat(&self, other: &BitSequence) -> Self {
        self.iter().chain(other.iter()).collect()
    }

    /// Bitwise XOR of two sequences of equal length.
    pub fn xor(&self, other: &BitSequence) -> Result<Self> {
        if self.len() != other.len() {
            return Err(Error::XorLength {
                left: self.len(),
                right: other.len(),
            });
        }
        Ok(self.iter().zip(other.iter()).map(|(a, b)| a ^ b).collect())
    }

    /// Number of positions in which the two sequences differ. Positions past
    /// the end of the shorter sequence are not counted.
    pub fn hamming_distance(&self, other: &BitSequence) -> usize {
        self.iter().zip(other.iter()).filter(|(a, b)| a != b).count()
    }

    /// Non-overlapping chunks of `size` bits. The last chunk may be shorter.
    pub fn chunks(&self, size: usize) -> impl Iterator<Item = BitSequence> + '_ {
        self.bits.chunks(size).map(BitSequence::from)
    }
}

impl From<Vec<bool>> for BitSequence {
    fn from(bits: Vec<bool>) -> Self {
        Self { bits }
    }
}

impl From<&[bool]> for BitSequence {
    fn from(bits: &[bool]) -> Self {
        Self {
            bits: bits.to_vec(),
        }
    }
}

impl FromIterator<bool> for BitSequence {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self {
            bits: iter.into_iter().collect(),
        }
    }
}

impl Index<usize> for BitSequence {
    type Output = bool;

    fn index(&self, i: usize) -> &bool {
        &self.bits[i]
    }
}

/// Parses strings of `0` and `1`. Underscores are ignored so that long
/// literals can be grouped, e.g. `"1000_0000"`.
impl FromStr for BitSequence {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        s.chars()
            .filter(|&c| c != '_')
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                other => Err(Error::InvalidBit(other)),
            })
            .collect()
    }
}

impl fmt::Display for BitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl fmt::Debug for BitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitSequence({}: {self})", self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::{BitOrder, BitSequence};
    use crate::error::Error;

    fn bits(s: &str) -> BitSequence {
        s.parse().unwrap()
    }

    #[test]
    fn byte_order() {
        let lsb = BitSequence::from_bytes(&[0b0000_0110], BitOrder::Lsb0);
        assert_eq!(bits("01100000"), lsb);
        let msb = BitSequence::from_bytes(&[0b0000_0110], BitOrder::Msb0);
        assert_eq!(bits("00000110"), msb);
    }

    #[test]
    fn bytes_round_trip_both_orders() {
        let bytes: Vec<u8> = (0..=255).collect();
        for order in [BitOrder::Lsb0, BitOrder::Msb0] {
            let seq = BitSequence::from_bytes(&bytes, order);
            assert_eq!(8 * bytes.len(), seq.len());
            assert_eq!(bytes, seq.to_bytes(order), "{order:?}");
        }
    }

    #[test]
    fn partial_byte_is_zero_filled() {
        assert_eq!(vec![0b0000_0101], bits("101").to_bytes(BitOrder::Lsb0));
        assert_eq!(vec![0b1010_0000], bits("101").to_bytes(BitOrder::Msb0));
    }

    #[test]
    fn slice_concat_truncate() {
        let a = bits("1100");
        let b = bits("01");
        assert_eq!(bits("110001"), a.concat(&b));
        assert_eq!(bits("10"), a.slice(1..3));
        assert_eq!(bits("11"), a.truncated(2));
        assert_eq!(a, a.truncated(10));
        assert_eq!(a, a.concat(&BitSequence::new()));
    }

    #[test]
    fn xor_requires_equal_length() {
        assert_eq!(Ok(bits("0110")), bits("1100").xor(&bits("1010")));
        assert_eq!(
            Err(Error::XorLength { left: 4, right: 3 }),
            bits("1100").xor(&bits("101"))
        );
    }

    #[test]
    fn chunks_keep_remainder() {
        let chunks: Vec<_> = bits("11001").chunks(2).collect();
        assert_eq!(vec![bits("11"), bits("00"), bits("1")], chunks);
    }

    #[test]
    fn parse_and_display() {
        let seq = bits("1000_0001");
        assert_eq!(8, seq.len());
        assert_eq!("10000001", seq.to_string());
        assert_eq!(Err(Error::InvalidBit('2')), "102".parse::<BitSequence>());
    }
}
