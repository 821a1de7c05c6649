//! Level-by-level reduction of a hex sequence to its Merkle root.

use hexmerkle_costs::{CostResult, CostsExt, OperationCost, cost_return_on_error};
use hexmerkle_version::{check_merkle_v0_with_cost, version::MerkleVersion};
use tracing::{debug, trace};

use crate::{
    Error,
    node::{HexDecoding, decode_hex, node_hash, node_root},
};

/// Pads `nodes` to an even length by repeating the last element.
pub(crate) fn pad_to_even(nodes: &mut Vec<String>) {
    if nodes.len() % 2 != 0 {
        if let Some(last) = nodes.last().cloned() {
            nodes.push(last);
        }
    }
}

/// Copies the input into an owned working list, padded to an even length.
pub(crate) fn padded_nodes<S: AsRef<str>>(elements: &[S]) -> Vec<String> {
    let mut nodes = Vec::with_capacity(elements.len() + 1);
    nodes.extend(elements.iter().map(|element| element.as_ref().to_owned()));
    pad_to_even(&mut nodes);
    nodes
}

/// Returns the sole element of a single-element input, validating it first
/// when decoding is strict.
pub(crate) fn singleton_root(element: &str, decoding: HexDecoding) -> CostResult<String, Error> {
    let mut cost = OperationCost::default();
    if decoding == HexDecoding::Strict {
        cost_return_on_error!(&mut cost, decode_hex(element, decoding));
    }
    Ok(element.to_owned()).wrap_with_cost(cost)
}

/// Folds `nodes` pair by pair until one element remains.
///
/// `visit` sees every pairing as `(level, left, right, parent)` where `left`
/// and `right` are the node hashes that entered the pairing. Odd levels are
/// padded by repeating their last element. After `limit` reductions without
/// reaching a single element the fold gives up with
/// [`Error::ReductionOverrun`].
///
/// `nodes` must hold at least two elements.
pub(crate) fn reduce_with_limit<F>(
    mut nodes: Vec<String>,
    limit: usize,
    decoding: HexDecoding,
    merkle_version: &MerkleVersion,
    mut visit: F,
) -> CostResult<String, Error>
where
    F: FnMut(usize, &str, &str, &str),
{
    let mut cost = OperationCost::default();
    let mut iterations = 0;

    loop {
        if iterations > limit {
            return Err(Error::ReductionOverrun { iterations, limit }).wrap_with_cost(cost);
        }

        pad_to_even(&mut nodes);
        let mut next = Vec::with_capacity(nodes.len() / 2);

        for pair in nodes.chunks_exact(2) {
            let left = cost_return_on_error!(
                &mut cost,
                node_hash(&pair[0], decoding, merkle_version)
            );
            let right = cost_return_on_error!(
                &mut cost,
                node_hash(&pair[1], decoding, merkle_version)
            );
            let parent = cost_return_on_error!(
                &mut cost,
                node_root(&left, &right, decoding, merkle_version)
            );
            visit(iterations, &left, &right, &parent);
            next.push(parent);
        }

        cost.reduction_levels += 1;
        trace!(level = iterations, width = next.len(), "reduced merkle level");

        if next.len() == 1 {
            return Ok(next.swap_remove(0)).wrap_with_cost(cost);
        }

        nodes = next;
        iterations += 1;
    }
}

/// Computes the Merkle root of `elements`.
///
/// An empty input yields an empty root; a single element is returned
/// unchanged. Malformed hex is hashed as empty bytes, see
/// [`compute_root_strict`] to reject it instead.
pub fn compute_root<S: AsRef<str>>(
    elements: &[S],
    merkle_version: &MerkleVersion,
) -> CostResult<String, Error> {
    compute_root_with_decoding(elements, HexDecoding::Permissive, merkle_version)
}

/// Like [`compute_root`] but fails with [`Error::InvalidHex`] on the first
/// element that is not valid hex.
pub fn compute_root_strict<S: AsRef<str>>(
    elements: &[S],
    merkle_version: &MerkleVersion,
) -> CostResult<String, Error> {
    compute_root_with_decoding(elements, HexDecoding::Strict, merkle_version)
}

/// Computes the Merkle root of `elements` with an explicit decoding mode.
pub fn compute_root_with_decoding<S: AsRef<str>>(
    elements: &[S],
    decoding: HexDecoding,
    merkle_version: &MerkleVersion,
) -> CostResult<String, Error> {
    check_merkle_v0_with_cost!("compute_root", merkle_version.reduction.compute_root);

    match elements {
        [] => return Ok(String::new()).wrap_with_cost(OperationCost::default()),
        [only] => return singleton_root(only.as_ref(), decoding),
        _ => {}
    }

    let nodes = padded_nodes(elements);
    let limit = nodes.len();
    let ctx = reduce_with_limit(nodes, limit, decoding, merkle_version, |_, _, _, _| {});
    if ctx.value.is_ok() {
        debug!(
            elements = elements.len(),
            levels = ctx.cost.reduction_levels,
            node_calls = ctx.cost.hash_node_calls,
            "computed merkle root"
        );
    }
    ctx
}

/// Computes the roots of two datasets and reports whether they match.
///
/// The returned cost covers both reductions.
pub fn roots_match<A: AsRef<str>, B: AsRef<str>>(
    left: &[A],
    right: &[B],
    merkle_version: &MerkleVersion,
) -> CostResult<bool, Error> {
    let mut cost = OperationCost::default();
    let left_root = cost_return_on_error!(&mut cost, compute_root(left, merkle_version));
    let right_root = cost_return_on_error!(&mut cost, compute_root(right, merkle_version));
    Ok(left_root == right_root).wrap_with_cost(cost)
}
