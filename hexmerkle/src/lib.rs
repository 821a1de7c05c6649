//! Bitcoin-style Merkle roots over hex-encoded records.
//!
//! Records are supplied as an ordered list of hex strings and folded pairwise
//! into a single fingerprint, using double SHA-256 and the reversed byte
//! order Bitcoin displays hashes in. Any change to a record, or to its
//! position, changes the root, so two large datasets can be compared by
//! comparing their roots.
//!
//! # Operations
//!
//! - [`compute_root`]: the root alone.
//! - [`compute_tree`]: the root plus the leaves and branches that produced
//!   it ([`MerkleTree`]).
//! - [`double_sha256`], [`reverse_bytes`]: the underlying primitives.
//! - [`node_hash`], [`node_root`], [`branch_from_plain_text`]: single
//!   pairing steps.
//!
//! Every operation takes a [`MerkleVersion`] selecting versioned behaviour,
//! and returns its result wrapped in a [`CostContext`] describing the hashing
//! it did.
//!
//! # Malformed input
//!
//! By default malformed hex is decoded as an empty byte sequence and hashed
//! anyway; the `*_strict` variants fail with [`Error::InvalidHex`] instead.

#![warn(missing_docs)]

mod error;
mod hash;
mod node;
mod reduce;
mod tree;

#[cfg(test)]
mod tests;

pub use error::Error;
pub use hash::{CryptoHash, HASH_LENGTH, double_sha256, reverse_bytes};
pub use hexmerkle_costs::{CostContext, CostResult, CostsExt, OperationCost};
pub use hexmerkle_version::version::MerkleVersion;
pub use node::{Branch, HexDecoding, branch_from_plain_text, hex_encode_records, node_hash, node_root};
pub use reduce::{compute_root, compute_root_strict, compute_root_with_decoding, roots_match};
pub use tree::{MerkleTree, compute_tree, compute_tree_strict, compute_tree_with_decoding};
