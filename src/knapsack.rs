use crate::engine::{self, MaxValue};
use crate::error::{Error, Result};

/// Computes the best total value achievable by selecting a subset of items,
/// each used at most once, whose weights fit within `capacity`.
///
/// Items are described by two parallel slices: `weights[i]` pairs with
/// `values[i]`. The table is filled bottom-up with a rolling row.
///
/// # Examples
///
/// ```
/// use knapsack_dp::knapsack_max_value;
///
/// let weights = [1, 6, 11, 5];
/// let values = [1, 6, 11, 5];
/// // Weight 6 fits either item 1 alone or items 0 and 3 together; both are worth 6.
/// assert_eq!(knapsack_max_value(&weights, &values, 6), Ok(6));
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if `weights` and `values` have different
/// lengths. No partial result is produced.
pub fn knapsack_max_value(weights: &[usize], values: &[usize], capacity: usize) -> Result<usize> {
    let items = pair_items(weights, values)?;
    let row = engine::final_row::<MaxValue>(&items, capacity);
    Ok(row[capacity])
}

/// Top-down variant of [`knapsack_max_value`]: memoized recursion over the
/// same (items-considered, remaining-capacity) state space.
///
/// Only the states actually reachable from `(n, capacity)` are computed,
/// which can be far fewer than the full table for sparse weight sets. The
/// result is always identical to the tabulated one.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if `weights` and `values` have different
/// lengths.
pub fn knapsack_max_value_memo(
    weights: &[usize],
    values: &[usize],
    capacity: usize,
) -> Result<usize> {
    let items = pair_items(weights, values)?;
    let mut memo = vec![vec![None; capacity + 1]; items.len() + 1];
    Ok(solve_memo(&items, items.len(), capacity, &mut memo))
}

fn solve_memo(
    items: &[(usize, usize)],
    n: usize,
    capacity: usize,
    memo: &mut [Vec<Option<usize>>],
) -> usize {
    // Smallest valid inputs: nothing left to pick, or no room to pick it.
    if n == 0 || capacity == 0 {
        return 0;
    }
    if let Some(cached) = memo[n][capacity] {
        return cached;
    }
    let (weight, value) = items[n - 1];
    let best = if weight <= capacity {
        let include = value + solve_memo(items, n - 1, capacity - weight, memo);
        let exclude = solve_memo(items, n - 1, capacity, memo);
        include.max(exclude)
    } else {
        solve_memo(items, n - 1, capacity, memo)
    };
    memo[n][capacity] = Some(best);
    best
}

/// Reconstructs one optimal selection for the 0-1 knapsack, returned as
/// ascending item indices.
///
/// If several selections achieve the optimal value, only one is returned.
///
/// # Examples
///
/// ```
/// use knapsack_dp::knapsack_best_items;
///
/// let weights = [5, 4, 6, 4];
/// let values = [10, 40, 30, 50];
/// // Items 1 and 3 weigh 8 and are worth 90, the optimum at capacity 10.
/// assert_eq!(knapsack_best_items(&weights, &values, 10), Ok(vec![1, 3]));
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if `weights` and `values` have different
/// lengths.
pub fn knapsack_best_items(
    weights: &[usize],
    values: &[usize],
    capacity: usize,
) -> Result<Vec<usize>> {
    let items = pair_items(weights, values)?;
    let table = engine::full_table::<MaxValue>(&items, capacity);

    // Walk back from (n, capacity): a cell that differs from the one above
    // it can only come from the include branch.
    let mut chosen = Vec::new();
    let mut j = capacity;
    for i in (1..=items.len()).rev() {
        if table[i][j] != table[i - 1][j] {
            chosen.push(i - 1);
            j -= items[i - 1].0;
        }
    }

    chosen.reverse();
    Ok(chosen)
}

/// Zips the parallel slices, rejecting mismatched lengths up front.
fn pair_items(weights: &[usize], values: &[usize]) -> Result<Vec<(usize, usize)>> {
    if weights.len() != values.len() {
        return Err(Error::invalid_input(format!(
            "weights and values must have the same length (got {} and {})",
            weights.len(),
            values.len()
        )));
    }
    Ok(weights.iter().copied().zip(values.iter().copied()).collect())
}
