use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use hexmerkle::{MerkleVersion, compute_root, compute_tree, hex_encode_records};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Random 32-byte records, hex-encoded.
fn prepare_records(count: usize) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(count as u64);
    hex_encode_records((0..count).map(|_| rng.r#gen::<[u8; 32]>()))
}

fn bench(c: &mut Criterion) {
    let version = MerkleVersion::latest();

    {
        let mut group = c.benchmark_group("merkle root");
        for size in [1_000, 10_000, 100_000] {
            let records = prepare_records(size);
            group.bench_with_input(BenchmarkId::new("records", size), &records, |b, records| {
                b.iter(|| compute_root(records, version).unwrap().expect("root"));
            });
        }
    }

    {
        let mut group = c.benchmark_group("merkle tree");
        for size in [1_000, 10_000] {
            let records = prepare_records(size);
            for tree_version in [MerkleVersion::first(), MerkleVersion::latest()] {
                group.bench_with_input(
                    BenchmarkId::new(
                        format!("records/v{}", tree_version.reduction.compute_tree),
                        size,
                    ),
                    &records,
                    |b, records| {
                        b.iter(|| compute_tree(records, tree_version).unwrap().expect("tree"));
                    },
                );
            }
        }
    }
}

criterion_group!(benches, bench);
criterion_main!(benches);
