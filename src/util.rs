use itertools::Itertools;
use log::info;
use rand::Rng;

use crate::error::{Error, Result};

/// Smallest gap between two consecutive generated values.
pub const MIN_STEP: u64 = 1;
/// Largest gap between two consecutive generated values.
pub const MAX_STEP: u64 = 10;

/// Generate `n` strictly increasing values.
///
/// Starting from 0, each value is the previous one plus a uniform random step
/// in `MIN_STEP..=MAX_STEP`, so there are no duplicates and the first value is
/// at least `MIN_STEP`.
pub fn gen_vals(n: usize, rng: &mut impl Rng) -> Result<Vec<u64>> {
    if n == 0 {
        return Err(Error::InvalidArgument(
            "array size must be positive".to_string(),
        ));
    }
    let mut vals = Vec::new();
    vals.try_reserve_exact(n)
        .map_err(|_| Error::Allocation { len: n })?;

    let mut num = 0u64;
    for _ in 0..n {
        num = num.saturating_add(rng.gen_range(MIN_STEP..=MAX_STEP));
        vals.push(num);
    }
    Ok(vals)
}

pub fn is_strictly_increasing(vals: &[u64]) -> bool {
    vals.iter().tuple_windows().all(|(x, y)| x < y)
}

/// Size of the values in memory, human readable.
pub fn byte_size(vals: &[u64]) -> String {
    let sz = size::Size::from_bytes(std::mem::size_of_val(vals));
    format!("{}", sz)
}

pub fn time<T>(t: &str, f: impl FnOnce() -> T) -> T {
    info!("{t}: Starting");
    let start = std::time::Instant::now();
    let r = f();
    let elapsed = start.elapsed();
    info!("{t}: Elapsed: {:?}", elapsed);
    r
}
