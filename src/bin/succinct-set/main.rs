//! `succinct-set` CLI: build a set from a newline-delimited key file and
//! test membership, wrapping the two public entry points and nothing else.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;
use succinct_set::Set;

#[derive(Debug, Parser)]
#[command(name = "succinct-set")]
#[command(about = "Build and query a LOUDS-encoded succinct key set", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Build a set from a sorted key file and report its size.
    Build(BuildArgs),
    /// Build a set from a sorted key file and test a key for membership.
    Has(HasArgs),
    /// Build a set, then sample random absent keys and report hit rate.
    Bench(BenchArgs),
}

#[derive(Debug, Parser)]
struct BuildArgs {
    /// Path to a newline-delimited, pre-sorted, duplicate-free key file.
    keys_file: PathBuf,
}

#[derive(Debug, Parser)]
struct HasArgs {
    /// Path to a newline-delimited, pre-sorted, duplicate-free key file.
    keys_file: PathBuf,
    /// The key to test for membership.
    key: String,
}

#[derive(Debug, Parser)]
struct BenchArgs {
    /// Path to a newline-delimited, pre-sorted, duplicate-free key file.
    keys_file: PathBuf,
    /// Number of random absent keys to probe.
    #[arg(short, long, default_value = "10000")]
    count: usize,
    /// Random seed for reproducible sampling.
    #[arg(short, long, default_value = "42")]
    seed: u64,
}

fn read_keys(path: &PathBuf) -> Result<Vec<String>> {
    let contents = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    Ok(contents.lines().map(str::to_owned).collect())
}

/// A random byte string over the same alphabet as `sample`, for probing
/// absent-key throughput without needing a dictionary of known misses.
fn random_key(rng: &mut ChaCha8Rng, alphabet: &[u8], max_len: usize) -> String {
    let len = rng.gen_range(1..=max_len);
    (0..len).map(|_| alphabet[rng.gen_range(0..alphabet.len())] as char).collect()
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build(args) => {
            let keys = read_keys(&args.keys_file)?;
            let raw_size: usize = keys.iter().map(|k| k.len()).sum();
            let set = Set::construct(&keys);

            println!("keys:            {}", keys.len());
            println!("nodes:           {}", set.node_count());
            println!("edges (labels):  {}", set.labels().len());
            println!("raw key bytes:   {raw_size}");
            println!("encoded bytes:   {}", set.heap_size());
            if raw_size > 0 {
                let ratio = (set.heap_size() as f64 / raw_size as f64) * 100.0;
                println!("ratio:           {ratio:.1}%");
            }
            Ok(())
        }
        Command::Has(args) => {
            let keys = read_keys(&args.keys_file)?;
            let set = Set::construct(&keys);
            println!("{}", set.has(&args.key));
            Ok(())
        }
        Command::Bench(args) => {
            let keys = read_keys(&args.keys_file)?;
            let set = Set::construct(&keys);

            let alphabet: Vec<u8> = {
                let mut seen: Vec<u8> = keys.iter().flat_map(|k| k.bytes()).collect();
                seen.sort_unstable();
                seen.dedup();
                if seen.is_empty() {
                    (b'a'..=b'z').collect()
                } else {
                    seen
                }
            };
            let max_len = keys.iter().map(|k| k.len()).max().unwrap_or(8).max(1);

            let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
            let mut hits = 0usize;
            for _ in 0..args.count {
                let probe = random_key(&mut rng, &alphabet, max_len);
                if set.has(&probe) {
                    hits += 1;
                }
            }

            println!("probes:  {}", args.count);
            println!("hits:    {hits}");
            println!("hit rate: {:.3}%", (hits as f64 / args.count as f64) * 100.0);
            Ok(())
        }
    }
}
