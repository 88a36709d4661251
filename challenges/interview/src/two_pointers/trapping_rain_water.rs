//https://leetcode.com/problems/trapping-rain-water/
use crate::{Scanner, Writer};

pub fn solve(input: &mut Scanner, out: &mut Writer) {
    let heights: Vec<u64> = input.parse_vec();

    out.println(trapped(&heights));
}

// Two pointers closing in from both ends, one pass, O(1) space.
//
// Water above any bar is bounded by the lower of the tallest walls on either
// side of it. The side with the lower current bar always advances; on that
// side the running maximum is already the binding wall (the other side holds
// something at least as tall), so the deficit below the running maximum can
// be banked immediately.
pub fn trapped(heights: &[u64]) -> u64 {
    if heights.is_empty() {
        return 0;
    }

    let mut left = 0;
    let mut right = heights.len() - 1;
    let mut left_max = 0;
    let mut right_max = 0;
    let mut water = 0;

    while left < right {
        if heights[left] < heights[right] {
            if heights[left] > left_max {
                left_max = heights[left];
            } else {
                water += left_max - heights[left];
            }
            left += 1;
        } else {
            if heights[right] > right_max {
                right_max = heights[right];
            } else {
                water += right_max - heights[right];
            }
            right -= 1;
        }
    }

    water
}

#[allow(dead_code)]
// Two-pass prefix/suffix maxima variant, O(n) extra space. Water over bar i
// is min(left_max[i], right_max[i]) - heights[i]. Kept as a reference for
// cross-checking the one-pass solver.
fn trapped_two_pass(heights: &[u64]) -> u64 {
    if heights.is_empty() {
        return 0;
    }

    let size = heights.len();
    let mut left_max = vec![0; size];
    let mut right_max = vec![0; size];

    left_max[0] = heights[0];
    for i in 1..size {
        left_max[i] = heights[i].max(left_max[i - 1]);
    }
    right_max[size - 1] = heights[size - 1];
    for i in (0..size - 1).rev() {
        right_max[i] = heights[i].max(right_max[i + 1]);
    }

    (0..size)
        .map(|i| left_max[i].min(right_max[i]) - heights[i])
        .sum()
}
