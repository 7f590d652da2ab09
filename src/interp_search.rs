use num_traits::{PrimInt, Unsigned};

/// Linear interpolation of the position of `q` between `lo` and `hi`.
///
/// Computed in `u128`, so `(hi - lo) * (q - l_val)` can not overflow for any
/// 64-bit input. The division rounds toward zero, i.e. down. The result is
/// clamped to `[lo, hi]`; a zero denominator probes `lo`.
#[inline(always)]
fn interpolate<T: PrimInt + Unsigned + Into<u128>>(
    lo: usize,
    hi: usize,
    l_val: T,
    r_val: T,
    q: T,
) -> usize {
    let den: u128 = (r_val - l_val).into();
    if den == 0 {
        return lo;
    }
    let diff: u128 = (q - l_val).into();
    let num = (hi - lo) as u128 * diff;
    let offset = (num / den) as usize;
    (lo + offset).min(hi)
}

/// Return the index of `q` in `vals`, or `None` when it is not present.
///
/// Inclusive bounds `[lo, hi]`. The loop only continues while
/// `vals[lo] <= q <= vals[hi]`, which also guarantees `l_val <= q` in
/// `interpolate`.
pub fn interpolation_search<T: PrimInt + Unsigned + Into<u128>>(
    vals: &[T],
    q: T,
    cnt: &mut usize,
) -> Option<usize> {
    if vals.is_empty() {
        return None;
    }
    let mut lo = 0;
    let mut hi = vals.len() - 1;
    while lo <= hi && vals[lo] <= q && q <= vals[hi] {
        *cnt += 1;
        if lo == hi {
            return (vals[lo] == q).then_some(lo);
        }

        let pos = interpolate(lo, hi, vals[lo], vals[hi], q);
        let v = vals[pos];
        if v == q {
            return Some(pos);
        }
        if v < q {
            lo = pos + 1;
        } else {
            // v > q >= vals[lo], so pos > lo >= 0.
            hi = pos - 1;
        }
    }
    None
}
