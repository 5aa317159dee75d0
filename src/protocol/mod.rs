/// Binary and text wire formats.
pub mod encoding;
/// The proof record and its accessors.
pub mod proof;
/// Proof construction.
pub mod prover;
/// Hash transcript for the Fiat-Shamir transformation.
pub mod transcript;
/// Proof verification.
pub mod verifier;

pub use encoding::EncodedProof;
pub use proof::Proof;
pub use transcript::Transcript;
