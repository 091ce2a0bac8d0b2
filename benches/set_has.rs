//! Micro-benchmark for `Set::has`, compared against a sorted-`Vec`
//! binary-search baseline over the same key set.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use succinct_set::Set;

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

fn generate_sorted_keys(count: usize, max_len: usize, seed: u64) -> Vec<String> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut keys: Vec<String> = (0..count)
        .map(|_| {
            let len = rng.gen_range(1..=max_len);
            (0..len).map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char).collect()
        })
        .collect();
    keys.sort();
    keys.dedup();
    keys
}

fn bench_has(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_has");

    for count in [1_000, 10_000, 100_000] {
        let keys = generate_sorted_keys(count, 12, 42);
        let set = Set::construct(&keys);

        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let queries: Vec<&String> = (0..10_000).map(|_| &keys[rng.gen_range(0..keys.len())]).collect();

        group.bench_with_input(BenchmarkId::new("trie", keys.len()), &queries, |b, queries| {
            b.iter(|| {
                let mut hits = 0usize;
                for q in queries {
                    if set.has(black_box(q.as_str())) {
                        hits += 1;
                    }
                }
                hits
            })
        });

        group.bench_with_input(BenchmarkId::new("binary_search", keys.len()), &queries, |b, queries| {
            b.iter(|| {
                let mut hits = 0usize;
                for q in queries {
                    if keys.binary_search(q).is_ok() {
                        hits += 1;
                    }
                }
                hits
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_has);
criterion_main!(benches);
