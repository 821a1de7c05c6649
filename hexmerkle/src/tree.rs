//! Verbose Merkle trees: the root together with the leaves and branches
//! produced on the way to it.

use hexmerkle_costs::{CostResult, CostsExt, OperationCost, cost_return_on_error};
use hexmerkle_version::{error::MerkleVersionError, version::MerkleVersion};
use tracing::debug;

use crate::{
    Error,
    node::{Branch, HexDecoding},
    reduce::{padded_nodes, reduce_with_limit, singleton_root},
};

/// The result of [`compute_tree`].
///
/// `root` is always equal to what [`compute_root`](crate::compute_root)
/// returns for the same input. `leaves` holds the node hash of every
/// (padded) input element in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MerkleTree {
    /// Final fingerprint; empty for an empty input.
    pub root: String,
    /// Pairings in reduction order.
    pub branches: Vec<Branch>,
    /// Node hashes of the input elements.
    pub leaves: Vec<String>,
}

impl MerkleTree {
    /// Returns `true` for the tree of an empty input.
    pub fn is_empty(&self) -> bool {
        self.root.is_empty() && self.branches.is_empty() && self.leaves.is_empty()
    }
}

/// Computes the Merkle tree of `elements`.
///
/// Which branches are kept, and the shape of a single-element tree, depend
/// on `merkle_version.reduction.compute_tree`:
///
/// - `0`: at most half the padded input count of branches are kept across
///   all levels, so only the first level is guaranteed to be complete. A
///   single element yields a tree whose only branch has just `leaf_left`.
/// - `1`: every branch of every level is kept. A single element yields no
///   branches and the element as its only leaf.
pub fn compute_tree<S: AsRef<str>>(
    elements: &[S],
    merkle_version: &MerkleVersion,
) -> CostResult<MerkleTree, Error> {
    compute_tree_with_decoding(elements, HexDecoding::Permissive, merkle_version)
}

/// Like [`compute_tree`] but fails with [`Error::InvalidHex`] on the first
/// element that is not valid hex.
pub fn compute_tree_strict<S: AsRef<str>>(
    elements: &[S],
    merkle_version: &MerkleVersion,
) -> CostResult<MerkleTree, Error> {
    compute_tree_with_decoding(elements, HexDecoding::Strict, merkle_version)
}

/// Computes the Merkle tree of `elements` with an explicit decoding mode.
pub fn compute_tree_with_decoding<S: AsRef<str>>(
    elements: &[S],
    decoding: HexDecoding,
    merkle_version: &MerkleVersion,
) -> CostResult<MerkleTree, Error> {
    match merkle_version.reduction.compute_tree {
        0 => compute_tree_v0(elements, decoding, merkle_version),
        1 => compute_tree_v1(elements, decoding, merkle_version),
        version => Err(Error::VersionError(
            MerkleVersionError::UnknownVersionMismatch {
                method: "compute_tree".to_string(),
                known_versions: vec![0, 1],
                received: version,
            },
        ))
        .wrap_with_cost(OperationCost::default()),
    }
}

fn compute_tree_v0<S: AsRef<str>>(
    elements: &[S],
    decoding: HexDecoding,
    merkle_version: &MerkleVersion,
) -> CostResult<MerkleTree, Error> {
    let mut cost = OperationCost::default();

    match elements {
        [] => return Ok(MerkleTree::default()).wrap_with_cost(cost),
        [only] => {
            let root = cost_return_on_error!(&mut cost, singleton_root(only.as_ref(), decoding));
            let branch = Branch {
                leaf_left: root.clone(),
                ..Default::default()
            };
            return Ok(MerkleTree {
                root,
                branches: vec![branch],
                leaves: Vec::new(),
            })
            .wrap_with_cost(cost);
        }
        _ => {}
    }

    let nodes = padded_nodes(elements);
    let branch_cap = nodes.len() / 2;
    build_tree(nodes, Some(branch_cap), decoding, merkle_version)
}

fn compute_tree_v1<S: AsRef<str>>(
    elements: &[S],
    decoding: HexDecoding,
    merkle_version: &MerkleVersion,
) -> CostResult<MerkleTree, Error> {
    let mut cost = OperationCost::default();

    match elements {
        [] => return Ok(MerkleTree::default()).wrap_with_cost(cost),
        [only] => {
            let root = cost_return_on_error!(&mut cost, singleton_root(only.as_ref(), decoding));
            return Ok(MerkleTree {
                leaves: vec![root.clone()],
                root,
                branches: Vec::new(),
            })
            .wrap_with_cost(cost);
        }
        _ => {}
    }

    build_tree(padded_nodes(elements), None, decoding, merkle_version)
}

/// Reduces `nodes` (at least two, already padded) while recording the
/// first-level leaves and up to `branch_cap` branches.
fn build_tree(
    nodes: Vec<String>,
    branch_cap: Option<usize>,
    decoding: HexDecoding,
    merkle_version: &MerkleVersion,
) -> CostResult<MerkleTree, Error> {
    let element_count = nodes.len();
    let limit = nodes.len();
    let mut leaves = Vec::with_capacity(element_count);
    let mut branches = Vec::with_capacity(branch_cap.unwrap_or(element_count));

    let ctx = reduce_with_limit(
        nodes,
        limit,
        decoding,
        merkle_version,
        |_, left, right, parent| {
            if leaves.len() < element_count {
                leaves.push(left.to_owned());
                leaves.push(right.to_owned());
            }
            if branch_cap.is_none_or(|cap| branches.len() < cap) {
                branches.push(Branch {
                    root: parent.to_owned(),
                    leaf_left: left.to_owned(),
                    leaf_right: right.to_owned(),
                });
            }
        },
    );

    let cost = ctx.cost;
    ctx.map_ok(|root| {
        debug!(
            elements = element_count,
            branches = branches.len(),
            levels = cost.reduction_levels,
            "computed merkle tree"
        );
        MerkleTree {
            root,
            branches,
            leaves,
        }
    })
}
