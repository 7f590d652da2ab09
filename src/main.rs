use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::{debug, info};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use search_bench::{report, util::*, Bench, Config};

#[derive(Parser)]
struct Args {
    /// Number of elements in the sorted array.
    size: Option<usize>,
    /// Number of passes over all keys.
    passes: Option<usize>,

    /// Seed for generating the array.
    #[clap(long)]
    seed: Option<u64>,
    /// File the summary line is appended to.
    #[clap(long)]
    out: Option<PathBuf>,
    /// Also save the full report as JSON.
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

    let config = Config::validate(args.size, args.passes, args.seed, args.out, args.json)?;
    debug!("{config:?}");

    // Get a fixed seeded rng.
    let rng = &mut ChaCha8Rng::seed_from_u64(config.seed);

    let vals = time(&format!("Generating {} elements", config.size), || {
        gen_vals(config.size, rng)
    })
    .context("generating the array")?;

    let bench = Bench::new(vals, config.passes)?;
    info!("Array takes {}", byte_size(bench.vals()));

    println!("Running search algorithms for {} elements\n", config.size);
    println!("{}", report::header());
    let result = bench.run_with(|pass, timing| println!("{}", report::pass_line(pass, timing)));

    println!("\n\n{}", report::summary(&result));

    report::append_result(&config.out, &result)
        .with_context(|| format!("appending results to {:?}", config.out))?;
    if let Some(json) = &config.json {
        report::save_json(json, &result).with_context(|| format!("saving report to {json:?}"))?;
    }
    Ok(())
}
