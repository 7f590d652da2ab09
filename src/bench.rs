use std::{
    hint::black_box,
    time::{Duration, Instant},
};

use log::{debug, info, warn};
use rand::Rng;
use serde::Serialize;

use crate::{
    error::{Error, Result},
    util::{byte_size, gen_vals},
    Algorithm, SearchFn,
};

/// Timings of one pass, indexed by `Algorithm::idx`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct PassTiming {
    /// Time of the full sweep over all keys.
    pub times: [Duration; 3],
    /// Number of keys that were not found. Always 0 for a correct search.
    pub anomalies: [usize; 3],
}

impl PassTiming {
    pub fn time(&self, alg: Algorithm) -> Duration {
        self.times[alg.idx()]
    }
}

/// Percentage by which `other` improves on `base`: positive when `other` is
/// smaller (faster, or fewer iterations), negative when it is larger.
pub fn percent_delta(base: f64, other: f64) -> f64 {
    if base == 0. {
        return 0.;
    }
    (base - other) * 100. / base
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Deltas {
    pub quaternary_vs_binary: f64,
    pub interpolation_vs_binary: f64,
    pub interpolation_vs_quaternary: f64,
}

impl Deltas {
    /// `vals` is indexed by `Algorithm::idx`.
    pub fn new(vals: [f64; 3]) -> Self {
        let [bin, quat, interp] = vals;
        Deltas {
            quaternary_vs_binary: percent_delta(bin, quat),
            interpolation_vs_binary: percent_delta(bin, interp),
            interpolation_vs_quaternary: percent_delta(quat, interp),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Summary {
    /// Average sweep time in seconds.
    pub avg_secs: [f64; 3],
    pub time_deltas: Deltas,
    pub iteration_deltas: Deltas,
}

impl Summary {
    pub fn new(records: &[PassTiming], iterations: [usize; 3]) -> Self {
        let passes = records.len().max(1) as f64;
        let avg_secs = Algorithm::ALL.map(|alg| {
            records
                .iter()
                .map(|r| r.time(alg).as_secs_f64())
                .sum::<f64>()
                / passes
        });
        Summary {
            avg_secs,
            time_deltas: Deltas::new(avg_secs),
            iteration_deltas: Deltas::new(iterations.map(|it| it as f64)),
        }
    }

    pub fn avg(&self, alg: Algorithm) -> f64 {
        self.avg_secs[alg.idx()]
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct BenchReport {
    /// Number of elements, which is also the number of keys per sweep.
    pub size: usize,
    pub passes: usize,
    pub records: Vec<PassTiming>,
    /// Loop iterations of each algorithm, summed over all passes and keys.
    pub iterations: [usize; 3],
    pub summary: Summary,
}

impl BenchReport {
    pub fn iterations(&self, alg: Algorithm) -> usize {
        self.iterations[alg.idx()]
    }

    pub fn total_anomalies(&self) -> usize {
        self.records.iter().flat_map(|r| r.anomalies).sum()
    }
}

/// Time `f` over every value of `vals` as key.
///
/// Only the searches and the not-found tally run inside the timed region.
pub fn sweep(vals: &[u64], f: SearchFn, cnt: &mut usize) -> (Duration, usize) {
    let mut anomalies = 0;
    let start = Instant::now();
    for &q in vals {
        if black_box(f(vals, black_box(q), cnt)).is_none() {
            anomalies += 1;
        }
    }
    (start.elapsed(), anomalies)
}

/// Runs all algorithms over all keys for a fixed number of passes.
pub struct Bench {
    vals: Vec<u64>,
    passes: usize,
    /// One iteration counter per algorithm, never reset during a run.
    cnts: [usize; 3],
    search_fns: [SearchFn; 3],
}

impl Bench {
    pub fn new(vals: Vec<u64>, passes: usize) -> Result<Self> {
        if vals.is_empty() {
            return Err(Error::InvalidArgument(
                "cannot benchmark an empty array".to_string(),
            ));
        }
        if passes == 0 {
            return Err(Error::InvalidArgument(
                "pass count must be positive".to_string(),
            ));
        }
        Ok(Bench {
            vals,
            passes,
            cnts: [0; 3],
            search_fns: Algorithm::ALL.map(|alg| alg.search_fn()),
        })
    }

    pub fn vals(&self) -> &[u64] {
        &self.vals
    }

    /// Current iteration totals, indexed by `Algorithm::idx`.
    pub fn iterations(&self) -> [usize; 3] {
        self.cnts
    }

    /// Replace the search used for `alg`.
    #[cfg(test)]
    pub(crate) fn with_search_fn(mut self, alg: Algorithm, f: SearchFn) -> Self {
        self.search_fns[alg.idx()] = f;
        self
    }

    pub fn run_pass(&mut self, pass: usize) -> PassTiming {
        let mut timing = PassTiming::default();
        for alg in Algorithm::ALL {
            let i = alg.idx();
            let (elapsed, anomalies) = sweep(&self.vals, self.search_fns[i], &mut self.cnts[i]);
            timing.times[i] = elapsed;
            timing.anomalies[i] = anomalies;
        }
        for alg in Algorithm::ALL {
            let anomalies = timing.anomalies[alg.idx()];
            if anomalies > 0 {
                warn!(
                    "{}: {anomalies} of {} keys not found in pass {pass}",
                    alg.name(),
                    self.vals.len()
                );
            }
        }
        debug!(
            "pass {pass}: {:?} {:?} {:?}",
            timing.times[0], timing.times[1], timing.times[2]
        );
        timing
    }

    pub fn run(self) -> BenchReport {
        self.run_with(|_, _| {})
    }

    /// Run all passes, calling `on_pass` after each one.
    pub fn run_with(mut self, mut on_pass: impl FnMut(usize, &PassTiming)) -> BenchReport {
        info!(
            "Running {} passes over {} elements",
            self.passes,
            self.vals.len()
        );
        let mut records = Vec::with_capacity(self.passes);
        for pass in 0..self.passes {
            let timing = self.run_pass(pass);
            on_pass(pass, &timing);
            records.push(timing);
        }
        let summary = Summary::new(&records, self.cnts);
        BenchReport {
            size: self.vals.len(),
            passes: self.passes,
            records,
            iterations: self.cnts,
            summary,
        }
    }
}

/// Cost of a single algorithm at one array size.
#[derive(Clone, Debug, Serialize)]
pub struct ScalingPoint {
    pub size: usize,
    /// Average time per query, in nanoseconds.
    pub latency: f64,
    /// Average loop iterations per query.
    pub iterations: f64,
    pub anomalies: usize,
}

/// Benchmark one algorithm on a fresh array of each size, `runs` sweeps each.
pub fn bench_one(
    alg: Algorithm,
    sizes: &[usize],
    runs: usize,
    rng: &mut impl Rng,
) -> Result<Vec<ScalingPoint>> {
    if runs == 0 {
        return Err(Error::InvalidArgument(
            "run count must be positive".to_string(),
        ));
    }
    let f = alg.search_fn();
    let mut results = Vec::with_capacity(sizes.len());
    for &size in sizes {
        let vals = gen_vals(size, rng)?;
        let mut cnt = 0;
        let mut total = Duration::ZERO;
        let mut anomalies = 0;
        for _ in 0..runs {
            let (elapsed, a) = sweep(&vals, f, &mut cnt);
            total += elapsed;
            anomalies += a;
        }
        if anomalies > 0 {
            warn!("{}: {anomalies} keys not found at size {size}", alg.name());
        }
        let queries = (size * runs) as f64;
        let latency = total.as_nanos() as f64 / queries;
        let iterations = cnt as f64 / queries;
        info!(
            "{:<14} n = {:>10} ({:>9}), {latency:>8.2}ns/query {iterations:>6.2} it/query",
            alg.name(),
            size,
            byte_size(&vals)
        );
        results.push(ScalingPoint {
            size,
            latency,
            iterations,
            anomalies,
        });
    }
    Ok(results)
}
