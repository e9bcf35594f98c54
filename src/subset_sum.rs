use num_bigint::BigUint;

use crate::engine::{self, weight_only, Count, Exists};

/// Decides whether any subset of `items`, each item used at most once, sums
/// exactly to `target`.
///
/// A target of 0 is always reachable via the empty subset; an empty `items`
/// can reach nothing else.
///
/// # Examples
///
/// ```
/// use knapsack_dp::subset_sum_exists;
///
/// assert!(subset_sum_exists(&[1, 2, 3, 9], 6)); // 1 + 2 + 3
/// assert!(!subset_sum_exists(&[1, 2, 3, 9], 7));
/// ```
pub fn subset_sum_exists(items: &[usize], target: usize) -> bool {
    let row = engine::final_row::<Exists>(&weight_only(items), target);
    row[target]
}

/// Counts the subsets of `items` summing exactly to `target`.
///
/// Equal items at different positions are distinct subsets. The count is
/// returned as a [`BigUint`]: a list of `n` items has up to `2^n` subsets,
/// which outgrows any fixed-width integer long before the table does.
///
/// # Examples
///
/// ```
/// use knapsack_dp::subset_sum_count;
/// use num_bigint::BigUint;
///
/// // {3}, {3} at the other position, and {1, 2}.
/// assert_eq!(subset_sum_count(&[1, 2, 3, 3], 3), BigUint::from(3u32));
/// ```
pub fn subset_sum_count(items: &[usize], target: usize) -> BigUint {
    let row = engine::final_row::<Count>(&weight_only(items), target);
    row[target].clone()
}
