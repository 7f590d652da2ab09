use num_traits::{PrimInt, Unsigned};

/// Return the index of `q` in `vals`, or `None` when it is not present.
///
/// Every iteration probes both ends of the remaining range and the three
/// points `p`, `q`, `r` that split it into four parts, then continues in the
/// part that can still hold the key. Tested points are excluded from the next
/// range, so the range shrinks by at least one element per iteration even when
/// it is too small to split (`gap == 0`).
pub fn quaternary_search<T: PrimInt + Unsigned>(
    vals: &[T],
    key: T,
    cnt: &mut usize,
) -> Option<usize> {
    // Half-open [lo, hi); `end` is the last index still in range.
    let mut lo = 0;
    let mut hi = vals.len();
    while lo < hi {
        *cnt += 1;
        let end = hi - 1;
        let gap = (end - lo) / 4;

        let p = lo + gap;
        let q = p + gap;
        let r = q + gap;

        for i in [lo, end, p, q, r] {
            if vals[i] == key {
                return Some(i);
            }
        }

        if key > vals[r] {
            lo = r + 1;
            hi = end;
        } else if key > vals[q] {
            lo = q + 1;
            hi = r;
        } else if key > vals[p] {
            lo = p + 1;
            hi = q;
        } else {
            lo += 1;
            hi = p;
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binary_search::binary_search;

    const VALS: [u64; 7] = [1, 3, 6, 10, 15, 21, 28];

    #[test]
    fn finds_present_key() {
        let cnt = &mut 0;
        assert_eq!(quaternary_search(&VALS, 15, cnt), Some(4));
        assert_eq!(*cnt, 2);
    }

    #[test]
    fn finds_boundaries() {
        let cnt = &mut 0;
        assert_eq!(quaternary_search(&VALS, 1, cnt), Some(0));
        assert_eq!(quaternary_search(&VALS, 28, cnt), Some(6));
        assert_eq!(*cnt, 2);
    }

    #[test]
    fn missing_keys() {
        let cnt = &mut 0;
        for q in [0, 2, 4, 11, 22, 27, 29, u64::MAX] {
            assert_eq!(quaternary_search(&VALS, q, cnt), None, "q = {q}");
        }
    }

    #[test]
    fn single_element() {
        let cnt = &mut 0;
        assert_eq!(quaternary_search(&[5u64], 5, cnt), Some(0));
        assert_eq!(*cnt, 1);
        assert_eq!(quaternary_search(&[5u64], 4, cnt), None);
        assert_eq!(quaternary_search(&[5u64], 6, cnt), None);
    }

    #[test]
    fn small_ranges_terminate() {
        // Sizes below 4 have gap == 0 on the first iteration.
        for n in 0..=8u64 {
            let vals: Vec<u64> = (0..n).map(|i| 2 * i + 1).collect();
            for q in 0..=2 * n + 1 {
                let cnt = &mut 0;
                let expected = vals.binary_search(&q).ok();
                assert_eq!(quaternary_search(&vals, q, cnt), expected, "n = {n} q = {q}");
                assert!(*cnt <= n as usize);
            }
        }
    }

    #[test]
    fn fewer_iterations_than_binary() {
        let vals: Vec<u32> = (0..100_000).map(|i| 7 * i + 3).collect();
        let (bin_cnt, quat_cnt) = (&mut 0, &mut 0);
        for (i, &q) in vals.iter().enumerate() {
            assert_eq!(binary_search(&vals, q, bin_cnt), Some(i));
            assert_eq!(quaternary_search(&vals, q, quat_cnt), Some(i));
        }
        assert!(quat_cnt <= bin_cnt, "{quat_cnt} > {bin_cnt}");
    }
}
