use hexmerkle_version::error::MerkleVersionError;
use thiserror::Error;

/// Errors from Merkle reductions.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// An input could not be decoded as hex (strict decoding only).
    #[error("invalid hex input {input:?}: {source}")]
    InvalidHex {
        /// The offending hex text.
        input: String,
        /// The underlying decode failure.
        source: hex::FromHexError,
    },
    /// The bounded reduction loop did not converge to a single root.
    #[error("failed to compute root: no convergence after {iterations} reductions (limit {limit})")]
    ReductionOverrun {
        /// Reductions performed before giving up.
        iterations: usize,
        /// The iteration bound that was exceeded.
        limit: usize,
    },
    /// The requested feature version is not known to this build.
    #[error(transparent)]
    VersionError(#[from] MerkleVersionError),
}
