/// Errors raised by the permutation and sponge.
///
/// Configuration errors are returned before any computation starts. The
/// remaining variants report a violated size invariant together with the
/// offending lengths.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid permutation width b = {0}: b must be 25 * w with w a power of two <= 64")]
    InvalidWidth(usize),
    #[error("invalid lane width w = {0}: w must be a power of two <= 64")]
    InvalidLaneWidth(usize),
    #[error("rate must be positive: width {width} - capacity {capacity} <= 0")]
    NonPositiveRate { width: usize, capacity: usize },
    #[error("padding block size must be positive")]
    ZeroBlockSize,
    #[error("output length must be positive")]
    ZeroOutputLength,
    #[error("invalid bit character {0:?}, expected '0' or '1'")]
    InvalidBit(char),
    #[error("state conversion expects {expected} bits, got {actual}")]
    StateLength { expected: usize, actual: usize },
    #[error("xor of bit sequences with different lengths ({left} and {right})")]
    XorLength { left: usize, right: usize },
    #[error("absorbed block must be exactly {rate} bits, got {actual}")]
    BlockLength { rate: usize, actual: usize },
    #[error("padded message of {len} bits is not a multiple of the rate {rate}")]
    PaddedLength { len: usize, rate: usize },
    #[error("squeeze produced {produced} bits, {requested} requested")]
    ShortSqueeze { produced: usize, requested: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
