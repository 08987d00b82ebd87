use num_bigint::BigInt;
use thiserror::Error;

/// Failures of the reconstruction core itself. Every kind is final for the
/// case it occurs in; none is worth retrying.
#[derive(Debug, Error)]
pub enum RecoverError {
    #[error("value {value:?} is not a valid base-{base} integer")]
    Decode { value: String, base: u32 },

    #[error("need {needed} shares to reconstruct, only {available} available")]
    InsufficientShares { needed: usize, available: usize },

    #[error("duplicate x-coordinate {x} among the selected shares")]
    SingularShareSet { x: i64 },

    #[error("interpolated secret is not an integer (residual denominator {denominator}); share set is corrupt or inconsistent")]
    ArithmeticIntegrity { denominator: BigInt },
}

/// Failures while turning one case file into a typed `Case`, plus the core
/// kinds passed through unchanged.
#[derive(Debug, Error)]
pub enum CaseError {
    #[error("could not read case file: {0}")]
    Io(#[from] std::io::Error),

    #[error("case file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("share key {key:?} is not an integer x-coordinate")]
    InvalidCoordinate { key: String },

    #[error("share x={x} declares base {base:?}, which is not a positive integer")]
    InvalidBase { x: i64, base: String },

    #[error(transparent)]
    Recover(#[from] RecoverError),
}
