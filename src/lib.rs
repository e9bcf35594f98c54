//! 0-1 knapsack and subset-sum dynamic programming algorithms.
//!
//! Four query families share one recurrence over an
//! (items-considered × remaining-capacity) state space:
//!
//! - optimal value under a capacity bound ([`knapsack_max_value`]),
//! - feasibility of a target sum ([`subset_sum_exists`]),
//! - counting subsets that reach a target sum ([`subset_sum_count`]),
//! - derived partition queries ([`can_partition_equal`],
//!   [`min_partition_difference`], [`best_partition_count`]).
//!
//! The shared recurrence lives in [`engine`], parameterized by a
//! [`TableMode`] so the table-filling logic is written once. Everything is
//! synchronous and pure: each query allocates its own table, fills it in a
//! single pass, and discards it.

pub mod engine;
pub mod error;
pub mod knapsack;
pub mod partition;
pub mod subset_sum;
pub mod unbounded;

// Re-export the query functions with descriptive names
pub use engine::{final_row, full_table, Count, Exists, MaxValue, TableMode};
pub use error::{Error, Result};
pub use knapsack::{knapsack_best_items, knapsack_max_value, knapsack_max_value_memo};
pub use partition::{
    best_partition_count, can_partition_equal, count_partitions_with_difference,
    min_partition_difference, target_sum_ways,
};
pub use subset_sum::{subset_sum_count, subset_sum_exists};
pub use unbounded::rod_cutting;
