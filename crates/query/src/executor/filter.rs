//! Select operator.

use crate::executor::Operator;
use crate::predicate::Predicate;
use alloc::rc::Rc;
use rowflow_core::schema::Table;
use rowflow_core::{Result, RowRef};

/// Select operator - passes on the child rows a predicate accepts.
///
/// Rejected rows are dropped as they are pulled. Output keeps child order.
pub struct Select<I, P> {
    child: I,
    predicate: P,
    rejected: usize,
}

impl<I: Operator, P: Predicate> Select<I, P> {
    /// Creates a new select operator.
    pub fn new(child: I, predicate: P) -> Self {
        Self {
            child,
            predicate,
            rejected: 0,
        }
    }
}

impl<I: Operator, P: Predicate> Operator for Select<I, P> {
    fn open(&mut self) -> Result<()> {
        self.rejected = 0;
        self.child.open()
    }

    fn next(&mut self) -> Result<Option<RowRef>> {
        while let Some(row) = self.child.next()? {
            if self.predicate.eval(&row) {
                trace_row!("select accepted {:?}", row.values());
                return Ok(Some(row));
            }
            trace_row!("select rejected {:?}", row.values());
            self.rejected += 1;
        }
        Ok(None)
    }

    fn close(&mut self) {
        log::debug!(
            "select over {} rejected {} rows",
            self.child.schema().name(),
            self.rejected
        );
        self.child.close();
    }

    fn schema(&self) -> &Rc<Table> {
        self.child.schema()
    }
}
