use thiserror::Error;

pub type LifeResult<T> = Result<T, LifeError>;

/// Contract violations reported by node operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LifeError {
    #[error("dimension must be a power of two >= 2, got {0}")]
    InvalidDimension(u64),

    #[error("dimension {0} is larger than the maximum of 2^62")]
    DimensionTooLarge(u64),

    #[error("children must share a dimension, got nw={nw} ne={ne} sw={sw} se={se}")]
    MismatchedChildren { nw: u64, ne: u64, sw: u64, se: u64 },

    #[error("leaf value must be in 0..16, got {0}")]
    InvalidLeaf(u8),

    #[error("'{0}' is not supported on a leaf")]
    UnsupportedOnLeaf(&'static str),

    #[error("cell ({x}, {y}) is outside a universe of dimension {dimension}")]
    OutOfBounds { x: i64, y: i64, dimension: u64 },

    #[error("malformed pattern: {0}")]
    MalformedPattern(String),
}
