use std::thread;

use crate::{MerkleVersion, compute_root, compute_tree, hex_encode_records};

fn dataset(seed: usize) -> Vec<String> {
    hex_encode_records((0..257).map(|i| format!("dataset {} row {}", seed, i)))
}

#[test]
fn test_independent_reductions_run_concurrently() {
    let expected: Vec<String> = (0..4)
        .map(|seed| {
            compute_root(&dataset(seed), MerkleVersion::latest())
                .unwrap()
                .expect("root")
        })
        .collect();

    let handles: Vec<_> = (0..4)
        .map(|seed| {
            thread::spawn(move || {
                let elements = dataset(seed);
                let version = MerkleVersion::latest();
                let root = compute_root(&elements, version).unwrap().expect("root");
                let tree = compute_tree(&elements, version).unwrap().expect("tree");
                assert_eq!(tree.root, root);
                root
            })
        })
        .collect();

    for (handle, expected) in handles.into_iter().zip(expected) {
        assert_eq!(handle.join().expect("thread"), expected);
    }
}
