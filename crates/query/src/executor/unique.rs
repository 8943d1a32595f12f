//! Unique operator.

use crate::executor::Operator;
use alloc::rc::Rc;
use rowflow_core::schema::Table;
use rowflow_core::{Result, Row, RowRef};
use rowflow_index::RowComparator;

/// Unique operator - drops rows equal, on every column, to the row emitted just
/// before them.
///
/// Only adjacent duplicates collapse, so the child is normally a `Sort`. The
/// last emitted row is kept as a value copy, not as a shared handle.
pub struct Unique<I> {
    child: I,
    comparator: RowComparator,
    last: Option<Row>,
    dropped: usize,
}

impl<I: Operator> Unique<I> {
    /// Creates a new unique operator.
    pub fn new(child: I) -> Self {
        let comparator = RowComparator::all_columns(child.arity());
        Self {
            child,
            comparator,
            last: None,
            dropped: 0,
        }
    }
}

impl<I: Operator> Operator for Unique<I> {
    fn open(&mut self) -> Result<()> {
        self.last = None;
        self.dropped = 0;
        self.child.open()
    }

    fn next(&mut self) -> Result<Option<RowRef>> {
        while let Some(row) = self.child.next()? {
            let duplicate = match &self.last {
                Some(last) => self.comparator.cmp(last, &row),
                None => false,
            };
            if duplicate {
                trace_row!("unique dropped {:?}", row.values());
                self.dropped += 1;
                continue;
            }
            self.last = Some(Row::clone(&row));
            return Ok(Some(row));
        }
        Ok(None)
    }

    fn close(&mut self) {
        log::debug!(
            "unique over {} dropped {} duplicates",
            self.child.schema().name(),
            self.dropped
        );
        self.last = None;
        self.child.close();
    }

    fn schema(&self) -> &Rc<Table> {
        self.child.schema()
    }
}
