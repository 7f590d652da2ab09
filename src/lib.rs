pub mod bench;
pub mod binary_search;
pub mod config;
pub mod error;
pub mod interp_search;
pub mod quaternary_search;
pub mod report;
pub mod util;


pub use bench::{Bench, BenchReport, PassTiming, Summary};
pub use config::Config;
pub use error::{Error, Result};
pub use util::*;

#[ctor::ctor]
fn init_color_backtrace() {
    color_backtrace::install();
}

/// Return the index of the key, counting loop iterations in the last argument.
pub type SearchFn = fn(&[u64], u64, &mut usize) -> Option<usize>;

/// The benchmarked search schemes, in the order they run in each pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Algorithm {
    Binary,
    Quaternary,
    Interpolation,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [
        Algorithm::Binary,
        Algorithm::Quaternary,
        Algorithm::Interpolation,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Binary => "Binary",
            Algorithm::Quaternary => "Quaternary",
            Algorithm::Interpolation => "Interpolation",
        }
    }

    pub fn search_fn(&self) -> SearchFn {
        match self {
            Algorithm::Binary => binary_search::binary_search::<u64>,
            Algorithm::Quaternary => quaternary_search::quaternary_search::<u64>,
            Algorithm::Interpolation => interp_search::interpolation_search::<u64>,
        }
    }

    pub fn search(&self, vals: &[u64], q: u64, cnt: &mut usize) -> Option<usize> {
        (self.search_fn())(vals, q, cnt)
    }

    /// Position in `Algorithm::ALL`, used to index per-algorithm arrays.
    pub fn idx(&self) -> usize {
        *self as usize
    }
}
