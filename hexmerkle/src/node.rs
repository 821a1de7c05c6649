//! Node combination over hex text.
//!
//! Every input element enters a pairing through [`node_hash`] (decode,
//! reverse, re-encode) and every pair is folded into its parent through
//! [`node_root`] (concatenate as text, decode, double SHA-256, reverse,
//! encode). Both helpers work on lowercase hex strings end to end.

use hexmerkle_costs::{CostResult, CostsExt, OperationCost, cost_return_on_error};
use hexmerkle_version::{check_merkle_v0_with_cost, version::MerkleVersion};
use tracing::warn;

use crate::{
    Error,
    hash::{double_sha256, reverse_bytes},
};

/// How malformed hex input is treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HexDecoding {
    /// Malformed hex decodes to an empty byte sequence. The failure is only
    /// visible in [`OperationCost::decode_failures`].
    #[default]
    Permissive,
    /// Malformed hex fails the operation with [`Error::InvalidHex`].
    Strict,
}

/// One pairing: two children and their combined parent.
///
/// `root == node_root(leaf_left, leaf_right)` for every branch produced by a
/// full pairing. Single-element trees built with the compatible tree version
/// carry a branch with only `leaf_left` set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Branch {
    /// Combined hash of the two children.
    pub root: String,
    /// Left child as it entered the pairing.
    pub leaf_left: String,
    /// Right child as it entered the pairing.
    pub leaf_right: String,
}

impl Branch {
    /// Recomputes the parent of the two children and compares it with
    /// `root`. A branch with an empty `root` never verifies.
    pub fn verify(&self, merkle_version: &MerkleVersion) -> CostResult<bool, Error> {
        if self.root.is_empty() {
            return Ok(false).wrap_with_cost(OperationCost::default());
        }
        node_root(
            &self.leaf_left,
            &self.leaf_right,
            HexDecoding::Permissive,
            merkle_version,
        )
        .map_ok(|root| root == self.root)
    }
}

pub(crate) fn decode_hex(text: &str, decoding: HexDecoding) -> CostResult<Vec<u8>, Error> {
    match hex::decode(text) {
        Ok(bytes) => Ok(bytes).wrap_with_cost(OperationCost::default()),
        Err(source) => match decoding {
            HexDecoding::Permissive => {
                warn!(input = text, error = %source, "malformed hex decoded as empty bytes");
                Ok(Vec::new()).wrap_with_cost(OperationCost::with_decode_failures(1))
            }
            HexDecoding::Strict => Err(Error::InvalidHex {
                input: text.to_owned(),
                source,
            })
            .wrap_with_cost(OperationCost::default()),
        },
    }
}

/// Reverses the byte order of a hex-encoded value.
///
/// Applied to every element before it takes part in a pairing.
pub fn node_hash(
    text: &str,
    decoding: HexDecoding,
    merkle_version: &MerkleVersion,
) -> CostResult<String, Error> {
    check_merkle_v0_with_cost!("node_hash", merkle_version.reduction.node_hash);
    decode_hex(text, decoding).map_ok(|bytes| hex::encode(reverse_bytes(&bytes)))
}

/// Combines two node hashes into their parent.
///
/// The operands are concatenated as text, left then right, before decoding.
pub fn node_root(
    left: &str,
    right: &str,
    decoding: HexDecoding,
    merkle_version: &MerkleVersion,
) -> CostResult<String, Error> {
    check_merkle_v0_with_cost!("node_root", merkle_version.reduction.node_root);
    let mut cost = OperationCost::default();

    let mut paired = String::with_capacity(left.len() + right.len());
    paired.push_str(left);
    paired.push_str(right);
    let bytes = cost_return_on_error!(&mut cost, decode_hex(&paired, decoding));

    cost += OperationCost::for_node_root(bytes.len());
    let parent = hex::encode(reverse_bytes(&double_sha256(&bytes)));
    Ok(parent).wrap_with_cost(cost)
}

/// Builds the branch joining two plain-text records.
///
/// Both texts are hex-encoded first, then hashed and combined exactly like
/// the first pairing of a reduction.
pub fn branch_from_plain_text(
    left: &str,
    right: &str,
    merkle_version: &MerkleVersion,
) -> CostResult<Branch, Error> {
    let mut cost = OperationCost::default();
    let decoding = HexDecoding::Permissive;

    let leaf_left = cost_return_on_error!(
        &mut cost,
        node_hash(&hex::encode(left), decoding, merkle_version)
    );
    let leaf_right = cost_return_on_error!(
        &mut cost,
        node_hash(&hex::encode(right), decoding, merkle_version)
    );
    let root = cost_return_on_error!(
        &mut cost,
        node_root(&leaf_left, &leaf_right, decoding, merkle_version)
    );

    Ok(Branch {
        root,
        leaf_left,
        leaf_right,
    })
    .wrap_with_cost(cost)
}

/// Hex-encodes raw records (rows, files, serialized objects) into the input
/// sequence accepted by the reducers.
pub fn hex_encode_records<I, R>(records: I) -> Vec<String>
where
    I: IntoIterator<Item = R>,
    R: AsRef<[u8]>,
{
    records.into_iter().map(hex::encode).collect()
}
