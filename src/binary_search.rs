use num_traits::{PrimInt, Unsigned};

// completely basic binsearch
/// Return the index of `q` in `vals`, or `None` when it is not present.
///
/// Bounds are half-open `[l, r)`, so narrowing to the left of index 0 never
/// underflows. The midpoints are the same as for the inclusive `[l, r - 1]`
/// formulation.
pub fn binary_search<T: PrimInt + Unsigned>(vals: &[T], q: T, cnt: &mut usize) -> Option<usize> {
    let mut l = 0;
    let mut r = vals.len();
    while l < r {
        *cnt += 1;
        let m = l + (r - l) / 2;
        let v = vals[m];
        if v == q {
            return Some(m);
        } else if v > q {
            r = m;
        } else {
            l = m + 1;
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALS: [u64; 7] = [1, 3, 6, 10, 15, 21, 28];

    #[test]
    fn finds_present_key() {
        let cnt = &mut 0;
        assert_eq!(binary_search(&VALS, 15, cnt), Some(4));
        assert_eq!(*cnt, 3);
    }

    #[test]
    fn missing_keys() {
        let cnt = &mut 0;
        for q in [0, 2, 11, 27, 29, u64::MAX] {
            assert_eq!(binary_search(&VALS, q, cnt), None, "q = {q}");
        }
    }

    #[test]
    fn single_element() {
        let cnt = &mut 0;
        assert_eq!(binary_search(&[5u64], 5, cnt), Some(0));
        assert_eq!(*cnt, 1);
        assert_eq!(binary_search(&[5u64], 4, cnt), None);
        assert_eq!(binary_search(&[5u64], 6, cnt), None);
    }

    #[test]
    fn empty() {
        let cnt = &mut 0;
        assert_eq!(binary_search::<u64>(&[], 5, cnt), None);
        assert_eq!(*cnt, 0);
    }

    #[test]
    fn every_key_u32() {
        let vals: Vec<u32> = (0..1000).map(|i| 3 * i + 1).collect();
        let cnt = &mut 0;
        for (i, &q) in vals.iter().enumerate() {
            assert_eq!(binary_search(&vals, q, cnt), Some(i));
        }
        // At most ceil(log2(1001)) = 10 iterations per key.
        assert!(*cnt <= 10 * vals.len());
    }
}
