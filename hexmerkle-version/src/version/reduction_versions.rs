use versioned_feature_core::FeatureVersion;

/// Feature versions of the reduction operations.
#[derive(Clone, Debug, Default)]
pub struct ReductionVersions {
    /// Byte reversal of a single element.
    pub node_hash: FeatureVersion,
    /// Combination of two node hashes.
    pub node_root: FeatureVersion,
    /// Root-only reduction.
    pub compute_root: FeatureVersion,
    /// 0: branch capture capped at half the padded input, singleton trees
    /// carry one left-only branch. 1: every level captured, singleton trees
    /// carry no branches.
    pub compute_tree: FeatureVersion,
}
