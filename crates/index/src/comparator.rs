//! Comparator implementations for rows.
//!
//! `RowComparator` orders rows by a subset of their columns. Sort uses it as a
//! total order and Unique uses it as an equality probe.

use alloc::vec::Vec;
use core::cmp::Ordering;
use rowflow_core::Row;

/// Sort order for a key column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Order {
    /// Ascending order (smallest first)
    Asc,
    /// Descending order (largest first)
    Desc,
}

impl Order {
    /// Applies this order to a comparison result.
    #[inline]
    pub fn apply(&self, ord: Ordering) -> Ordering {
        match self {
            Order::Asc => ord,
            Order::Desc => ord.reverse(),
        }
    }
}

/// Trait for comparing keys.
pub trait Comparator<K: ?Sized> {
    /// Compares two keys according to the comparator's ordering.
    fn compare(&self, a: &K, b: &K) -> Ordering;

    /// Returns true if a < b according to this comparator.
    fn is_less(&self, a: &K, b: &K) -> bool {
        self.compare(a, b) == Ordering::Less
    }

    /// Returns true if a > b according to this comparator.
    fn is_greater(&self, a: &K, b: &K) -> bool {
        self.compare(a, b) == Ordering::Greater
    }

    /// Returns true if a == b according to this comparator.
    fn is_equal(&self, a: &K, b: &K) -> bool {
        self.compare(a, b) == Ordering::Equal
    }
}

/// Total order over rows restricted to a list of key columns.
///
/// Columns are compared lexicographically in the order given. A row that lacks a
/// value at a key position sorts before one that has it.
#[derive(Clone, Debug)]
pub struct RowComparator {
    keys: Vec<(usize, Order)>,
}

impl RowComparator {
    /// Creates an ascending comparator over the given column positions.
    pub fn new(columns: &[usize]) -> Self {
        Self {
            keys: columns.iter().map(|&c| (c, Order::Asc)).collect(),
        }
    }

    /// Creates a comparator with an explicit order per key column.
    pub fn with_orders(keys: Vec<(usize, Order)>) -> Self {
        Self { keys }
    }

    /// Creates an ascending comparator over columns `0..arity`.
    pub fn all_columns(arity: usize) -> Self {
        Self {
            keys: (0..arity).map(|c| (c, Order::Asc)).collect(),
        }
    }

    /// Returns the key columns and their orders.
    pub fn keys(&self) -> &[(usize, Order)] {
        &self.keys
    }

    /// Equality probe: true if the rows agree on every key column.
    #[inline]
    pub fn cmp(&self, a: &Row, b: &Row) -> bool {
        self.is_equal(a, b)
    }
}

impl Comparator<Row> for RowComparator {
    fn compare(&self, a: &Row, b: &Row) -> Ordering {
        for &(col, order) in &self.keys {
            let cmp = match (a.get(col), b.get(col)) {
                (Some(av), Some(bv)) => order.apply(av.cmp(bv)),
                (None, Some(_)) => Ordering::Less,
                (Some(_), None) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            };

            if cmp != Ordering::Equal {
                return cmp;
            }
        }
        Ordering::Equal
    }
}
