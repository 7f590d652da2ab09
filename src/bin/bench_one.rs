use std::path::PathBuf;

use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use search_bench::{bench::bench_one, config::DEFAULT_SEED, Algorithm};

/// Scaling of a single algorithm over array sizes 2^start..=2^stop.
#[derive(Parser)]
struct Args {
    #[clap(long, value_enum)]
    alg: Algorithm,

    #[clap(long, default_value_t = 4)]
    start: u32,

    #[clap(long, default_value_t = 20)]
    stop: u32,

    /// Sweeps over all keys per size.
    #[clap(long, default_value_t = 3)]
    runs: usize,

    #[clap(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Save the results as JSON.
    #[clap(long)]
    json: Option<PathBuf>,

    #[clap(short, default_value_t = 0, action = clap::ArgAction::Count,)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    stderrlog::new()
        .color(stderrlog::ColorChoice::Auto)
        .verbosity(2 + args.verbose as usize)
        .show_level(true)
        .init()?;

    anyhow::ensure!(
        args.start <= args.stop && args.stop < usize::BITS,
        "invalid size range 2^{}..=2^{}",
        args.start,
        args.stop
    );
    let sizes: Vec<usize> = (args.start..=args.stop).map(|p| 1 << p).collect();

    let rng = &mut ChaCha8Rng::seed_from_u64(args.seed);
    let results = bench_one(args.alg, &sizes, args.runs, rng)?;
    for p in &results {
        println!("{} {} {}", p.size, p.latency, p.iterations);
    }

    if let Some(path) = &args.json {
        let f = std::fs::File::create(path)?;
        serde_json::to_writer(f, &results)?;
    }
    Ok(())
}
