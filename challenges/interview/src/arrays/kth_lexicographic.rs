//https://leetcode.com/problems/k-th-smallest-in-lexicographical-order/
use crate::{Scanner, Writer};
use thiserror::Error;

pub fn solve(input: &mut Scanner, out: &mut Writer) {
    let parts: Vec<u64> = input.parse_vec();

    let [n, k] = parts[..] else {
        panic!("Expected 2 values")
    };

    let result = find_kth(n, k).expect("k must lie in 1..=n");

    out.println(result);
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("invalid argument: k must lie in 1..=n, got n={n} k={k}")]
    InvalidArgument { n: u64, k: u64 },
}

// The integers 1..=n read as decimal strings form a forest of denary trees:
// node v has children v*10 ..= v*10+9, pruned at n, with roots 1..=9. String
// order is exactly pre-order over that forest, so the kth string can be found
// by walking pre-order without materializing the tree. At each node, count
// how many numbers sit in its subtree; either the answer is past the whole
// subtree (skip to the next sibling) or inside it (step down to the first
// child).
pub fn find_kth(n: u64, k: u64) -> Result<u64, Error> {
    if n < 1 || k < 1 || k > n {
        return Err(Error::InvalidArgument { n, k });
    }

    // k - 1 pre-order steps remain after visiting the first node, 1.
    let mut remaining = k - 1;
    let mut curr: u64 = 1;

    while remaining > 0 {
        let steps = subtree_count(n, curr, curr + 1);
        if steps <= remaining {
            // The answer is past curr's entire subtree.
            remaining -= steps;
            curr += 1;
        } else {
            // The answer is below curr. Descending to the first child spends
            // one step, the visit of curr itself.
            curr *= 10;
            remaining -= 1;
        }
    }

    Ok(curr)
}

// How many integers in [1, n] have lo's decimal string as a prefix, counted
// level by level. Each level widens the half-open candidate range [lo, hi)
// tenfold; min(n + 1, hi) - lo of that level survive the cutoff at n. Bounds
// overshoot n by up to a factor of ten before the loop exits, which is why
// everything here is u64 even when n would fit in 32 bits.
fn subtree_count(n: u64, mut lo: u64, mut hi: u64) -> u64 {
    let mut count = 0;
    while lo <= n {
        count += (n + 1).min(hi) - lo;
        lo *= 10;
        hi *= 10;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::run_solver;

    // Reference: sort 1..=n as decimal strings.
    fn string_sorted(n: u64) -> Vec<u64> {
        let mut numbers: Vec<u64> = (1..=n).collect();
        numbers.sort_by(|a, b| a.to_string().cmp(&b.to_string()));
        numbers
    }

    #[test]
    fn test_canonical_example() {
        // 1, 10, 11, 12, 13, 2, 3, ...
        assert_eq!(find_kth(13, 2), Ok(10));
        assert_eq!(find_kth(13, 5), Ok(13));
        assert_eq!(find_kth(13, 6), Ok(2));
    }

    #[test]
    fn test_single_element() {
        assert_eq!(find_kth(1, 1), Ok(1));
    }

    #[test]
    fn test_first_is_always_one() {
        for n in [1, 2, 9, 10, 42, 100, 999, 1000, 123_456] {
            assert_eq!(find_kth(n, 1), Ok(1), "Failed for n: {}", n);
        }
    }

    #[test]
    fn test_power_of_ten_boundaries() {
        // 1, 10, 2, 3, 4, 5, 6, 7, 8, 9 - the truncated subtree under 1
        // pushes 9 to the last position.
        assert_eq!(find_kth(10, 2), Ok(10));
        assert_eq!(find_kth(10, 10), Ok(9));
        assert_eq!(find_kth(100, 100), Ok(99));
        assert_eq!(find_kth(1000, 1000), Ok(999));
    }

    #[test]
    fn test_last_position() {
        // find(n, n) is n only when n sorts last as a string, so check
        // against the reference instead of assuming.
        for n in [9, 13, 100, 256, 1000] {
            let expected = *string_sorted(n).last().unwrap();
            assert_eq!(find_kth(n, n), Ok(expected), "Failed for n: {}", n);
        }
    }

    #[test]
    fn test_matches_string_sort() {
        let sweep = (1..=300u64).chain([1000]);
        for n in sweep {
            let expected = string_sorted(n);
            for (i, want) in expected.iter().enumerate() {
                let k = i as u64 + 1;
                assert_eq!(
                    find_kth(n, k),
                    Ok(*want),
                    "Failed for n: {} k: {}",
                    n,
                    k
                );
            }
        }
    }

    #[test]
    fn test_invalid_arguments() {
        assert_eq!(find_kth(5, 0), Err(Error::InvalidArgument { n: 5, k: 0 }));
        assert_eq!(find_kth(5, 6), Err(Error::InvalidArgument { n: 5, k: 6 }));
        assert_eq!(find_kth(0, 1), Err(Error::InvalidArgument { n: 0, k: 1 }));
        assert_eq!(find_kth(0, 0), Err(Error::InvalidArgument { n: 0, k: 0 }));
    }

    #[test]
    fn test_solve_glue() {
        assert_eq!(run_solver("13 2", solve), "10\n");
        assert_eq!(run_solver("681692778 351251360", solve), "416126219\n");
    }
}
