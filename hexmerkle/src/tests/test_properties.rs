use proptest::prelude::*;

use crate::{
    HexDecoding, MerkleVersion, compute_root, compute_root_strict, compute_tree, node_hash,
    reverse_bytes,
};

/// Up to 40 transaction-id sized records.
fn records() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(any::<[u8; 32]>(), 0..40)
        .prop_map(|rows| rows.into_iter().map(hex::encode).collect())
}

fn root(elements: &[String]) -> String {
    compute_root(elements, MerkleVersion::latest())
        .unwrap()
        .expect("root")
}

proptest! {
    #[test]
    fn test_reverse_is_an_involution(bytes in prop::collection::vec(any::<u8>(), 0..128)) {
        prop_assert_eq!(reverse_bytes(&reverse_bytes(&bytes)), bytes);
    }

    #[test]
    fn test_root_is_deterministic(elements in records()) {
        prop_assert_eq!(root(&elements), root(&elements));
    }

    #[test]
    fn test_strict_and_permissive_agree_on_valid_hex(elements in records()) {
        let strict = compute_root_strict(&elements, MerkleVersion::latest())
            .unwrap()
            .expect("strict");
        prop_assert_eq!(strict, root(&elements));
    }

    #[test]
    fn test_odd_input_equals_input_with_last_repeated(
        elements in records().prop_filter("odd, more than one", |e| e.len() > 1 && e.len() % 2 == 1)
    ) {
        let mut padded = elements.clone();
        padded.push(elements[elements.len() - 1].clone());
        prop_assert_eq!(root(&elements), root(&padded));
    }

    #[test]
    fn test_swapping_distinct_neighbours_changes_root(
        elements in records().prop_filter("two or more", |e| e.len() >= 2),
        index in any::<prop::sample::Index>(),
    ) {
        let i = index.index(elements.len() - 1);
        prop_assume!(elements[i] != elements[i + 1]);
        let mut swapped = elements.clone();
        swapped.swap(i, i + 1);
        prop_assert_ne!(root(&elements), root(&swapped));
    }

    #[test]
    fn test_changing_one_byte_changes_root(
        elements in records().prop_filter("two or more", |e| e.len() >= 2),
        index in any::<prop::sample::Index>(),
        flip in 1u8..=255,
    ) {
        let i = index.index(elements.len());
        let mut bytes = hex::decode(&elements[i]).expect("generated hex");
        bytes[0] ^= flip;
        let mut changed = elements.clone();
        changed[i] = hex::encode(bytes);
        prop_assert_ne!(root(&elements), root(&changed));
    }

    #[test]
    fn test_tree_agrees_with_root(elements in records()) {
        for version in [MerkleVersion::first(), MerkleVersion::latest()] {
            let tree = compute_tree(&elements, version).unwrap().expect("tree");
            prop_assert_eq!(&tree.root, &root(&elements));
        }
    }

    #[test]
    fn test_tree_leaves_cover_padded_input(
        elements in records().prop_filter("two or more", |e| e.len() >= 2)
    ) {
        let padded_len = elements.len() + elements.len() % 2;
        for version in [MerkleVersion::first(), MerkleVersion::latest()] {
            let tree = compute_tree(&elements, version).unwrap().expect("tree");
            prop_assert_eq!(tree.leaves.len(), padded_len);
            let first = node_hash(&elements[0], HexDecoding::Strict, version)
                .unwrap()
                .expect("hash");
            prop_assert_eq!(&tree.leaves[0], &first);
        }
    }

    #[test]
    fn test_hash_calls_match_pairings(elements in records().prop_filter("two or more", |e| e.len() >= 2)) {
        let mut width = elements.len();
        let mut pairings = 0;
        while width > 1 {
            width = width.div_ceil(2);
            pairings += width;
        }
        let ctx = compute_root(&elements, MerkleVersion::latest());
        prop_assert_eq!(ctx.cost().hash_node_calls as usize, pairings);
        prop_assert_eq!(ctx.cost().digest_calls, 2 * ctx.cost().hash_node_calls);
    }
}
