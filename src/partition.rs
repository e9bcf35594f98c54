//! Two-way partition queries derived from the subset-sum recurrence.
//!
//! Every function here splits the input into two complementary subsets, so
//! each item lands on exactly one side. The work is a single feasibility or
//! counting sweep up to half the total; the answer is read off the final row
//! rather than a single cell.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::engine::{self, weight_only, Count, Exists};
use crate::subset_sum::{subset_sum_count, subset_sum_exists};

/// Decides whether `items` can be split into two subsets with equal sums.
///
/// An odd total can never split evenly, so that case returns false without
/// touching a table. The empty list splits into two empty sides.
///
/// # Examples
///
/// ```
/// use knapsack_dp::can_partition_equal;
///
/// assert!(can_partition_equal(&[1, 5, 11, 5])); // {11} vs {1, 5, 5}
/// assert!(!can_partition_equal(&[1, 2, 3, 5]));
/// ```
pub fn can_partition_equal(items: &[usize]) -> bool {
    let total: usize = items.iter().sum();
    if total % 2 != 0 {
        return false;
    }
    subset_sum_exists(items, total / 2)
}

/// Finds the minimum possible `|sumA - sumB|` over all ways of splitting
/// `items` into two complementary subsets.
///
/// One side's sum `s` fixes the other at `total - s`, so the difference is
/// `total - 2s` for `s` at or below the midpoint; maximizing the feasible
/// `s` minimizes it. Sums above the midpoint mirror sums below it.
///
/// # Examples
///
/// ```
/// use knapsack_dp::min_partition_difference;
///
/// assert_eq!(min_partition_difference(&[1, 2, 3, 9]), 3); // {1,2,3} vs {9}
/// assert_eq!(min_partition_difference(&[]), 0);
/// ```
pub fn min_partition_difference(items: &[usize]) -> usize {
    let total: usize = items.iter().sum();
    let row = engine::final_row::<Exists>(&weight_only(items), total / 2);
    // Sum 0 is always feasible, so the scan cannot come up empty.
    let best = (0..=total / 2).rev().find(|&s| row[s]).unwrap_or(0);
    total - 2 * best
}

/// Extends [`min_partition_difference`]: reports the minimum difference
/// together with how many subsets realize the best near-half sum.
///
/// A single counting pass suffices: a nonzero count implies feasibility, so
/// scanning the counting row locates the best sum and its multiplicity at
/// once. When the total is even and splits perfectly, each equal split is
/// counted twice (once per side).
///
/// # Examples
///
/// ```
/// use knapsack_dp::best_partition_count;
/// use num_bigint::BigUint;
///
/// let (difference, count) = best_partition_count(&[1, 2, 3, 9]);
/// assert_eq!(difference, 3);
/// assert_eq!(count, BigUint::from(1u32)); // only {1, 2, 3} reaches 6
/// ```
pub fn best_partition_count(items: &[usize]) -> (usize, BigUint) {
    let total: usize = items.iter().sum();
    let row = engine::final_row::<Count>(&weight_only(items), total / 2);
    let best = (0..=total / 2).rev().find(|&s| !row[s].is_zero()).unwrap_or(0);
    log::debug!("best near-half sum {} of total {}", best, total);
    (total - 2 * best, row[best].clone())
}

/// Counts the splits of `items` into two complementary subsets whose sums
/// differ by exactly `diff`, attributed to the larger side.
///
/// A split with sums `s1 >= s2` and `s1 - s2 = diff` forces
/// `s1 = (total + diff) / 2`, so the answer is a subset count at that sum.
/// Parity mismatches and `diff > total` yield zero. For `diff == 0` each
/// split is counted twice, since both sides qualify as "the larger one".
pub fn count_partitions_with_difference(items: &[usize], diff: usize) -> BigUint {
    let total: usize = items.iter().sum();
    if diff > total || (total + diff) % 2 != 0 {
        return BigUint::zero();
    }
    subset_sum_count(items, (total + diff) / 2)
}

/// Counts the ways of assigning `+` or `-` to every item so the signed sum
/// equals `target`.
///
/// Choosing the positive side fixes its sum at `(total + target) / 2`, so
/// this reduces to a subset count; negating `target` mirrors the sides and
/// yields the same answer. Zero-valued items still carry a sign, so each
/// zero doubles the count.
///
/// # Examples
///
/// ```
/// use knapsack_dp::target_sum_ways;
/// use num_bigint::BigUint;
///
/// // Flip exactly one of the five ones: 5 ways to reach 3.
/// assert_eq!(target_sum_ways(&[1, 1, 1, 1, 1], 3), BigUint::from(5u32));
/// ```
pub fn target_sum_ways(items: &[usize], target: i64) -> BigUint {
    let total: usize = items.iter().sum();
    let magnitude = target.unsigned_abs() as usize;
    if magnitude > total || (total + magnitude) % 2 != 0 {
        return BigUint::zero();
    }
    subset_sum_count(items, (total + magnitude) / 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_partition_basic() {
        assert!(can_partition_equal(&[1, 5, 11, 5]));
        assert!(!can_partition_equal(&[1, 2, 3, 5]));
    }

    #[test]
    fn test_equal_partition_odd_total() {
        // 1 + 2 + 3 + 9 = 15: rejected before any table is built.
        assert!(!can_partition_equal(&[1, 2, 3, 9]));
    }

    #[test]
    fn test_equal_partition_even_but_infeasible() {
        // Total 104 is even, but nothing reaches 52.
        assert!(!can_partition_equal(&[1, 1, 1, 1, 100]));
    }

    #[test]
    fn test_equal_partition_empty() {
        assert!(can_partition_equal(&[]));
    }

    #[test]
    fn test_min_difference_basic() {
        assert_eq!(min_partition_difference(&[1, 2, 3, 9]), 3);
        assert_eq!(min_partition_difference(&[1, 5, 11, 5]), 0);
    }

    #[test]
    fn test_min_difference_degenerate() {
        assert_eq!(min_partition_difference(&[]), 0);
        // A single item sits alone on one side.
        assert_eq!(min_partition_difference(&[7]), 7);
        assert_eq!(min_partition_difference(&[1, 1, 1, 1, 100]), 96);
    }

    #[test]
    fn test_min_difference_agrees_with_equal_partition() {
        let cases: [&[usize]; 5] = [
            &[1, 5, 11, 5],
            &[1, 2, 3, 9],
            &[2, 2, 2],
            &[1, 1, 1, 1, 100],
            &[],
        ];
        for items in cases {
            assert_eq!(
                can_partition_equal(items),
                min_partition_difference(items) == 0,
                "items {:?}",
                items
            );
        }
    }

    #[test]
    fn test_best_partition_count_basic() {
        let (difference, count) = best_partition_count(&[1, 2, 3, 9]);
        assert_eq!(difference, 3);
        assert_eq!(count, BigUint::from(1u32));
    }

    #[test]
    fn test_best_partition_count_equal_split() {
        // Sums of 11: {11} and {1, 5, 5}, one per side of the same split.
        let (difference, count) = best_partition_count(&[1, 5, 11, 5]);
        assert_eq!(difference, 0);
        assert_eq!(count, BigUint::from(2u32));
    }

    #[test]
    fn test_best_partition_count_empty() {
        let (difference, count) = best_partition_count(&[]);
        assert_eq!(difference, 0);
        assert_eq!(count, BigUint::from(1u32));
    }

    #[test]
    fn test_count_partitions_with_difference() {
        // Total 7, larger side 4: {1a,3}, {1b,3}, {1,1,2}.
        assert_eq!(
            count_partitions_with_difference(&[1, 1, 2, 3], 1),
            BigUint::from(3u32)
        );
        // Parity mismatch: total 7, difference 2 would need side sums 4.5.
        assert!(count_partitions_with_difference(&[1, 1, 2, 3], 2).is_zero());
        assert!(count_partitions_with_difference(&[1, 2], 10).is_zero());
    }

    #[test]
    fn test_target_sum_basic() {
        assert_eq!(target_sum_ways(&[1, 1, 1, 1, 1], 3), BigUint::from(5u32));
        assert_eq!(target_sum_ways(&[1, 1, 1, 1, 1], -3), BigUint::from(5u32));
        assert_eq!(target_sum_ways(&[1, 1], 0), BigUint::from(2u32));
    }

    #[test]
    fn test_target_sum_unreachable() {
        assert!(target_sum_ways(&[1, 1, 1, 1, 1], 6).is_zero());
        // Parity: five ones can only reach odd signed sums.
        assert!(target_sum_ways(&[1, 1, 1, 1, 1], 2).is_zero());
    }

    #[test]
    fn test_target_sum_zero_items_carry_signs() {
        // +0+1 and -0+1 both reach 1.
        assert_eq!(target_sum_ways(&[0, 1], 1), BigUint::from(2u32));
    }
}
