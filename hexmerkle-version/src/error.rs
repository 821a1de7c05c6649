use thiserror::Error;
use versioned_feature_core::FeatureVersion;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MerkleVersionError {
    /// Expected some specific versions
    #[error("merkle unknown version on {method}, received: {received}")]
    UnknownVersionMismatch {
        /// method
        method: String,
        /// the allowed versions for this method
        known_versions: Vec<FeatureVersion>,
        /// requested version
        received: FeatureVersion,
    },
}
