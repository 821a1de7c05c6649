use crate::version::{MerkleVersion, reduction_versions::ReductionVersions};

/// Compatible version: historical tree shape.
pub const MERKLE_V1: MerkleVersion = MerkleVersion {
    protocol_version: 0,
    reduction: ReductionVersions {
        node_hash: 0,
        node_root: 0,
        compute_root: 0,
        compute_tree: 0,
    },
};
