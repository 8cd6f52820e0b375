//! Parameter sets of the sponge construction.
use crate::{
    error::{Error, Result},
    state::Width,
};

/// `{capacity c, permutation width b, round count nr, output length d}`.
///
/// All lengths are in bits. The rate is derived as `r = b - c` and is always
/// positive for a constructed `Params`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Params {
    width: Width,
    rounds: usize,
    capacity: usize,
    output_len: usize,
}

impl Params {
    /// SHA3-224: KECCAK[448](M || 01, 224)
    pub const SHA3_224: Params = Params::sha3(224);
    /// SHA3-256: KECCAK[512](M || 01, 256)
    pub const SHA3_256: Params = Params::sha3(256);
    /// SHA3-384: KECCAK[768](M || 01, 384)
    pub const SHA3_384: Params = Params::sha3(384);
    /// SHA3-512: KECCAK[1024](M || 01, 512)
    pub const SHA3_512: Params = Params::sha3(512);

    /// The SHA-3 functions use a capacity of twice the digest length on
    /// KECCAK-f[1600] (Section 6.1).
    const fn sha3(output_len: usize) -> Self {
        Params {
            width: Width::B1600,
            rounds: 24,
            capacity: 2 * output_len,
            output_len,
        }
    }

    /// Validated parameter set for an arbitrary KECCAK-p sponge.
    pub fn new(width: usize, rounds: usize, capacity: usize, output_len: usize) -> Result<Self> {
        let width = Width::new(width)?;
        if capacity >= width.bits() {
            return Err(Error::NonPositiveRate {
                width: width.bits(),
                capacity,
            });
        }
        if output_len == 0 {
            return Err(Error::ZeroOutputLength);
        }
        Ok(Params {
            width,
            rounds,
            capacity,
            output_len,
        })
    }

    /// KECCAK[c] with output length `d` (Section 5.2).
    pub fn keccak(capacity: usize, output_len: usize) -> Result<Self> {
        Self::new(Width::B1600.bits(), 24, capacity, output_len)
    }

    /// Same parameters with a different output length.
    pub fn with_output_len(self, output_len: usize) -> Result<Self> {
        if output_len == 0 {
            return Err(Error::ZeroOutputLength);
        }
        Ok(Params { output_len, ..self })
    }

    pub fn width(&self) -> Width {
        self.width
    }

    pub fn rounds(&self) -> usize {
        self.rounds
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// `r = b - c`
    pub fn rate(&self) -> usize {
        self.width.bits() - self.capacity
    }

    pub fn output_len(&self) -> usize {
        self.output_len
    }
}

#[cfg(test)]
mod tests {
    use super::Params;
    use crate::error::Error;

    #[test]
    fn sha3_rates() {
        let rates: Vec<_> = [
            Params::SHA3_224,
            Params::SHA3_256,
            Params::SHA3_384,
            Params::SHA3_512,
        ]
        .iter()
        .map(|p| p.rate())
        .collect();
        assert_eq!(vec![1152, 1088, 832, 576], rates);
        assert_eq!(Params::keccak(512, 256), Ok(Params::SHA3_256));
    }

    #[test]
    fn rejects_invalid_configurations() {
        assert_eq!(
            Err(Error::NonPositiveRate {
                width: 1600,
                capacity: 1600
            }),
            Params::new(1600, 24, 1600, 256)
        );
        assert_eq!(Err(Error::InvalidWidth(1500)), Params::new(1500, 24, 512, 256));
        assert_eq!(Err(Error::ZeroOutputLength), Params::new(200, 18, 100, 0));
        assert_eq!(
            Err(Error::ZeroOutputLength),
            Params::SHA3_256.with_output_len(0)
        );
    }

    #[test]
    fn small_width() {
        let params = Params::new(200, 18, 40, 80).unwrap();
        assert_eq!(160, params.rate());
        assert_eq!(8, params.width().lane_width());
    }
}
