pub mod reduction_versions;
pub mod v1;
pub mod v2;

pub use versioned_feature_core::*;

use crate::version::{reduction_versions::ReductionVersions, v1::MERKLE_V1, v2::MERKLE_V2};

/// A complete set of feature versions for every reduction operation.
#[derive(Clone, Debug, Default)]
pub struct MerkleVersion {
    /// Identifier used by [`MerkleVersion::get`].
    pub protocol_version: u32,
    /// Feature versions of the node helpers and reducers.
    pub reduction: ReductionVersions,
}

impl MerkleVersion {
    /// The compatible behaviour set: reproduces the historical tree shape.
    pub fn first<'a>() -> &'a Self {
        &MERKLE_VERSIONS[0]
    }

    /// The current behaviour set: every branch is captured.
    pub fn latest<'a>() -> &'a Self {
        &MERKLE_VERSIONS[MERKLE_VERSIONS.len() - 1]
    }

    /// Looks up the version table entry for `protocol_version`.
    pub fn get<'a>(protocol_version: u32) -> Option<&'a Self> {
        MERKLE_VERSIONS
            .iter()
            .find(|version| version.protocol_version == protocol_version)
    }
}

/// Every known version, oldest first.
pub const MERKLE_VERSIONS: &[MerkleVersion] = &[MERKLE_V1, MERKLE_V2];
