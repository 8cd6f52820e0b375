use crate::{
    bits::{BitOrder, BitSequence},
    error::Result,
    params::Params,
    sponge::Sponge,
};

/// Domain separation bits appended to the message before padding
/// (Section 6).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    /// `M || 01` for the SHA-3 hash functions.
    Sha3,
    /// `M || 1111` for the SHAKE extendable-output functions.
    Shake,
    /// Plain KECCAK[c] without suffix.
    Keccak,
}

impl Domain {
    fn suffix(self) -> BitSequence {
        let bits: &[bool] = match self {
            Domain::Sha3 => &[false, true],
            Domain::Shake => &[true, true, true, true],
            Domain::Keccak => &[],
        };
        BitSequence::from(bits)
    }
}

/// A member of the SHA-3 family: a sponge parameter set together with its
/// domain separation suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hasher {
    params: Params,
    domain: Domain,
}

impl Hasher {
    pub const SHA3_224: Hasher = Hasher::sha3(Params::SHA3_224);
    pub const SHA3_256: Hasher = Hasher::sha3(Params::SHA3_256);
    pub const SHA3_384: Hasher = Hasher::sha3(Params::SHA3_384);
    pub const SHA3_512: Hasher = Hasher::sha3(Params::SHA3_512);

    const fn sha3(params: Params) -> Self {
        Hasher {
            params,
            domain: Domain::Sha3,
        }
    }

    /// Arbitrary parameter set with the given domain suffix.
    pub fn new(params: Params, domain: Domain) -> Self {
        Hasher { params, domain }
    }

    /// SHAKE128(M, d) = KECCAK[256](M || 1111, d)
    pub fn shake128(output_len: usize) -> Result<Self> {
        Ok(Self::new(Params::keccak(256, output_len)?, Domain::Shake))
    }

    /// SHAKE256(M, d) = KECCAK[512](M || 1111, d)
    pub fn shake256(output_len: usize) -> Result<Self> {
        Ok(Self::new(Params::keccak(512, output_len)?, Domain::Shake))
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    /// Hash a message given as bits. The result has exactly `d` bits.
    pub fn digest_bits(&self, message: &BitSequence) -> Result<BitSequence> {
        let input = message.concat(&self.domain.suffix());
        Sponge::new(&self.params).digest(&input, self.params.output_len())
    }

    /// Hash a byte message.
    ///
    /// Bytes are converted to bits and back with the FIPS 202 conventions
    /// (Appendix B.1). An output length that is not a multiple of 8 leaves
    /// the high bits of the last byte zero.
    pub fn digest(&self, message: &[u8]) -> Result<Vec<u8>> {
        let message = BitSequence::from_bytes(message, BitOrder::Lsb0);
        Ok(self.digest_bits(&message)?.to_bytes(BitOrder::Lsb0))
    }

    /// [`Hasher::digest`] as lowercase hex.
    pub fn hex_digest(&self, message: &[u8]) -> Result<String> {
        self.digest(message).map(hex::encode)
    }
}
