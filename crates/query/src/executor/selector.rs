//! Column selection over a fixed input arity.

use alloc::vec::Vec;
use hashbrown::HashSet;
use rowflow_core::{Error, Result, Row, Value};

/// Splits the columns of an input into a requested (selected) list and the
/// remaining (unselected) positions.
///
/// Selected positions keep the requested order; unselected positions are
/// ascending.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnSelector {
    arity: usize,
    selected: Vec<usize>,
    unselected: Vec<usize>,
}

impl ColumnSelector {
    /// Creates a selector for `columns` against an input of `arity` columns.
    ///
    /// Fails with `ColumnIndexOutOfRange` for a position `>= arity` and with
    /// `DuplicateColumn` when a position is requested twice.
    pub fn new(arity: usize, columns: &[usize]) -> Result<Self> {
        let mut seen = HashSet::with_capacity(columns.len());
        for &column in columns {
            if column >= arity {
                return Err(Error::column_out_of_range(column, arity));
            }
            if !seen.insert(column) {
                return Err(Error::DuplicateColumn { index: column });
            }
        }

        let unselected = (0..arity).filter(|c| !seen.contains(c)).collect();
        Ok(Self {
            arity,
            selected: columns.to_vec(),
            unselected,
        })
    }

    /// Input arity the selector was built against.
    #[inline]
    pub fn arity(&self) -> usize {
        self.arity
    }

    #[inline]
    pub fn n_selected(&self) -> usize {
        self.selected.len()
    }

    /// Position of the i-th selected column. Panics if `i >= n_selected()`.
    #[inline]
    pub fn selected(&self, i: usize) -> usize {
        self.selected[i]
    }

    #[inline]
    pub fn n_unselected(&self) -> usize {
        self.unselected.len()
    }

    /// Position of the i-th unselected column. Panics if `i >= n_unselected()`.
    #[inline]
    pub fn unselected(&self, i: usize) -> usize {
        self.unselected[i]
    }

    pub fn selected_columns(&self) -> &[usize] {
        &self.selected
    }

    pub fn unselected_columns(&self) -> &[usize] {
        &self.unselected
    }

    /// Values of the selected columns of `row`, in requested order.
    pub fn select(&self, row: &Row) -> Result<Vec<Value>> {
        Self::pick(row, &self.selected)
    }

    /// Values of the unselected columns of `row`, in ascending position order.
    pub fn reject(&self, row: &Row) -> Result<Vec<Value>> {
        Self::pick(row, &self.unselected)
    }

    fn pick(row: &Row, columns: &[usize]) -> Result<Vec<Value>> {
        columns.iter().map(|&c| row.at(c).cloned()).collect()
    }
}
