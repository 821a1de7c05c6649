#![deny(missing_docs)]
//! Interface crate to unify how the costs of Merkle reductions are passed and
//! retrieved.
//!
//! Every reduction in `hexmerkle` returns its value wrapped in a
//! [`CostContext`], so callers comparing large datasets can see how much
//! hashing a fingerprint took without timing it.

/// Cost-carrying results and the helpers that thread them through calls.
pub mod context;

use std::ops::{Add, AddAssign};

pub use context::{CostContext, CostResult, CostsExt};

/// Work performed by a reduction (approximately).
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct OperationCost {
    /// How many times two nodes were combined into a parent.
    pub hash_node_calls: u32,
    /// How many single SHA-256 invocations were made (two per node).
    pub digest_calls: u32,
    /// How many bytes were fed into the first digest of every node.
    pub hashed_bytes: u64,
    /// How many reduction passes completed.
    pub reduction_levels: u16,
    /// How many malformed hex inputs were decoded as empty byte sequences.
    pub decode_failures: u32,
}

impl OperationCost {
    /// Returns `true` when no work was recorded.
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// Helper function to build default `OperationCost` with different
    /// `hash_node_calls`.
    pub fn with_hash_node_calls(hash_node_calls: u32) -> Self {
        OperationCost {
            hash_node_calls,
            ..Default::default()
        }
    }

    /// Helper function to build default `OperationCost` with different
    /// `digest_calls`.
    pub fn with_digest_calls(digest_calls: u32) -> Self {
        OperationCost {
            digest_calls,
            ..Default::default()
        }
    }

    /// Helper function to build default `OperationCost` with different
    /// `reduction_levels`.
    pub fn with_reduction_levels(reduction_levels: u16) -> Self {
        OperationCost {
            reduction_levels,
            ..Default::default()
        }
    }

    /// Helper function to build default `OperationCost` with different
    /// `decode_failures`.
    pub fn with_decode_failures(decode_failures: u32) -> Self {
        OperationCost {
            decode_failures,
            ..Default::default()
        }
    }

    /// Cost of combining two nodes whose concatenation decoded to
    /// `input_len` bytes: one node call and two digests.
    pub fn for_node_root(input_len: usize) -> Self {
        OperationCost {
            hash_node_calls: 1,
            digest_calls: 2,
            hashed_bytes: input_len as u64,
            ..Default::default()
        }
    }
}

impl Add for OperationCost {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        OperationCost {
            hash_node_calls: self.hash_node_calls + rhs.hash_node_calls,
            digest_calls: self.digest_calls + rhs.digest_calls,
            hashed_bytes: self.hashed_bytes + rhs.hashed_bytes,
            reduction_levels: self.reduction_levels + rhs.reduction_levels,
            decode_failures: self.decode_failures + rhs.decode_failures,
        }
    }
}

impl AddAssign for OperationCost {
    fn add_assign(&mut self, rhs: Self) {
        self.hash_node_calls += rhs.hash_node_calls;
        self.digest_calls += rhs.digest_calls;
        self.hashed_bytes += rhs.hashed_bytes;
        self.reduction_levels += rhs.reduction_levels;
        self.decode_failures += rhs.decode_failures;
    }
}
