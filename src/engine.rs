//! Shared tabulation engine for the 0-1 knapsack / subset-sum family.
//!
//! Every query in this crate evaluates the same recurrence over an
//! (items-considered × remaining-capacity) state space and differs only in
//! what a table cell means. [`TableMode`] captures that difference: the cell
//! type, the base-case identity, the transform applied on the include branch,
//! and the operator merging the include and exclude branches.
//!
//! Filling is bottom-up. [`final_row`] keeps a single rolling row and is the
//! default; [`full_table`] materializes the whole `(n+1) × (W+1)` table for
//! callers that need interior cells, such as backtracking a selection.

use num_bigint::BigUint;
use num_traits::{One, Zero};

/// A query mode for the shared 0-1 recurrence.
///
/// Implementors are zero-sized markers; the engine is generic over the mode
/// so the table-filling logic exists exactly once.
pub trait TableMode {
    /// Cell type stored in the DP table.
    type Cell: Clone;

    /// Value of `table[0][j]`: what selecting zero items achieves at
    /// capacity `j`. This is the identity for the mode; `table[i][0]`
    /// degenerates to the same value.
    fn empty(j: usize) -> Self::Cell;

    /// Transforms the subproblem cell `table[i-1][j - w]` when item `i`
    /// (carrying `value`) is included.
    fn include(sub: Self::Cell, value: usize) -> Self::Cell;

    /// Merges the exclude branch `table[i-1][j]` with the include branch.
    fn combine(exclude: Self::Cell, include: Self::Cell) -> Self::Cell;
}

/// Optimal-value mode: `table[i][j]` is the best achievable value using the
/// first `i` items within capacity `j`.
pub struct MaxValue;

impl TableMode for MaxValue {
    type Cell = usize;

    fn empty(_j: usize) -> usize {
        0
    }

    fn include(sub: usize, value: usize) -> usize {
        sub + value
    }

    fn combine(exclude: usize, include: usize) -> usize {
        exclude.max(include)
    }
}

/// Feasibility mode: `table[i][j]` is true iff some subset of the first `i`
/// items sums exactly to `j`.
pub struct Exists;

impl TableMode for Exists {
    type Cell = bool;

    fn empty(j: usize) -> bool {
        j == 0
    }

    fn include(sub: bool, _value: usize) -> bool {
        sub
    }

    fn combine(exclude: bool, include: bool) -> bool {
        exclude || include
    }
}

/// Counting mode: `table[i][j]` is the number of subsets of the first `i`
/// items summing exactly to `j`. Counts grow like `2^n`, so cells are
/// arbitrary-precision.
pub struct Count;

impl TableMode for Count {
    type Cell = BigUint;

    fn empty(j: usize) -> BigUint {
        if j == 0 {
            BigUint::one()
        } else {
            BigUint::zero()
        }
    }

    fn include(sub: BigUint, _value: usize) -> BigUint {
        sub
    }

    fn combine(exclude: BigUint, include: BigUint) -> BigUint {
        exclude + include
    }
}

/// Fills the recurrence for `items` (weight/value pairs) up to `capacity`
/// and returns the final row: cell `j` answers the mode's query at capacity
/// `j` with every item considered.
///
/// A single row is kept and updated in place. `j` walks from high to low for
/// each item, so the cell at `j - w` still holds the previous item's row
/// when it is read.
pub fn final_row<M: TableMode>(items: &[(usize, usize)], capacity: usize) -> Vec<M::Cell> {
    log::debug!(
        "filling rolling row: {} items, capacity {}",
        items.len(),
        capacity
    );
    let mut row: Vec<M::Cell> = (0..=capacity).map(M::empty).collect();
    for &(weight, value) in items {
        // An item heavier than the whole table only ever takes the exclude
        // branch, which the in-place row already holds.
        if weight > capacity {
            continue;
        }
        for j in (weight..=capacity).rev() {
            let include = M::include(row[j - weight].clone(), value);
            row[j] = M::combine(row[j].clone(), include);
        }
    }
    row
}

/// Fills and returns the whole `(n+1) × (W+1)` table, row-major.
///
/// [`final_row`] is cheaper and answers most queries; this variant exists
/// for callers that need interior cells.
pub fn full_table<M: TableMode>(items: &[(usize, usize)], capacity: usize) -> Vec<Vec<M::Cell>> {
    log::debug!(
        "filling full table: {} rows x {} columns",
        items.len() + 1,
        capacity + 1
    );
    let mut table: Vec<Vec<M::Cell>> = Vec::with_capacity(items.len() + 1);
    table.push((0..=capacity).map(M::empty).collect());
    for (i, &(weight, value)) in items.iter().enumerate() {
        let mut row: Vec<M::Cell> = Vec::with_capacity(capacity + 1);
        for j in 0..=capacity {
            let exclude = table[i][j].clone();
            let cell = if weight <= j {
                let include = M::include(table[i][j - weight].clone(), value);
                M::combine(exclude, include)
            } else {
                exclude
            };
            row.push(cell);
        }
        table.push(row);
    }
    table
}

/// Pairs plain weights with zero values for the modes that ignore values.
pub(crate) fn weight_only(items: &[usize]) -> Vec<(usize, usize)> {
    items.iter().map(|&w| (w, 0)).collect()
}
