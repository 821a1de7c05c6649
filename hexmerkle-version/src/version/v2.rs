use crate::version::{MerkleVersion, reduction_versions::ReductionVersions};

/// Current version: full branch capture.
pub const MERKLE_V2: MerkleVersion = MerkleVersion {
    protocol_version: 1,
    reduction: ReductionVersions {
        node_hash: 0,
        node_root: 0,
        compute_root: 0,
        compute_tree: 1,
    },
};
