//! Error types for DLEQ proofs

/// Main error types for the library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Points handed to the prover belong to different curves.
    #[error("points are on different curves")]
    InconsistentCurves,

    /// A point handed to the prover does not satisfy the curve equation.
    #[error("one of the points is off the curve")]
    PointOffCurve,

    /// An encoded point did not decode to valid coordinates.
    #[error("marshaled point was invalid")]
    InvalidPoint,

    /// The entropy source could not supply bytes.
    #[error("entropy source failure: {0}")]
    Entropy(#[from] rand_core::Error),

    /// The entropy source kept producing out-of-range candidates.
    #[error("scalar sampling rejected {0} consecutive candidates")]
    SamplingExhausted(usize),

    /// Invalid curve or protocol parameters were provided.
    #[error("Invalid parameters: {0}")]
    InvalidParams(String),

    /// A scalar value is invalid or out of range.
    #[error("Invalid scalar: {0}")]
    InvalidScalar(String),

    /// The hash identifier is not one this crate knows.
    #[error("Unknown hash algorithm: {0}")]
    UnknownHashAlgorithm(String),

    /// The curve name is not one of the built-in curves.
    #[error("Unknown curve: {0}")]
    UnknownCurve(String),

    /// A serialized proof could not be parsed.
    #[error("Malformed proof: {0}")]
    MalformedProof(String),

    /// An encoded proof is missing one or more fields.
    #[error("proof is missing fields")]
    IncompleteProof,
}

/// Result type alias for DLEQ operations.
pub type Result<T> = core::result::Result<T, Error>;
