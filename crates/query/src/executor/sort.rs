//! Sort operator.

use crate::executor::operator::drain;
use crate::executor::Operator;
use alloc::rc::Rc;
use alloc::vec::{self, Vec};
use rowflow_core::schema::Table;
use rowflow_core::{Error, Result, RowRef};
use rowflow_index::{Comparator, Order, RowComparator};

/// Sort operator - materializes its child and emits the rows in key order.
///
/// `open()` drains the child completely and closes it straight away; `next()`
/// then hands out the buffered rows. The sort is stable, so rows with equal
/// keys keep their child order.
pub struct Sort<I> {
    child: I,
    comparator: RowComparator,
    rows: vec::IntoIter<RowRef>,
}

impl<I: Operator> Sort<I> {
    /// Creates an ascending sort on the given child column positions.
    pub fn new(child: I, columns: &[usize]) -> Result<Self> {
        Self::with_orders(child, columns.iter().map(|&c| (c, Order::Asc)).collect())
    }

    /// Creates a sort with an explicit order per key column.
    pub fn with_orders(child: I, keys: Vec<(usize, Order)>) -> Result<Self> {
        let arity = child.arity();
        if let Some(&(column, _)) = keys.iter().find(|(c, _)| *c >= arity) {
            return Err(Error::column_out_of_range(column, arity));
        }
        Ok(Self {
            child,
            comparator: RowComparator::with_orders(keys),
            rows: Vec::new().into_iter(),
        })
    }
}

impl<I: Operator> Operator for Sort<I> {
    fn open(&mut self) -> Result<()> {
        self.child.open()?;
        let drained = drain(&mut self.child);
        self.child.close();

        let mut rows = drained?;
        rows.sort_by(|a, b| self.comparator.compare(&**a, &**b));
        log::debug!(
            "sort materialized {} rows from {}",
            rows.len(),
            self.child.schema().name()
        );
        self.rows = rows.into_iter();
        Ok(())
    }

    fn next(&mut self) -> Result<Option<RowRef>> {
        Ok(self.rows.next())
    }

    fn close(&mut self) {
        self.rows = Vec::new().into_iter();
    }

    fn schema(&self) -> &Rc<Table> {
        self.child.schema()
    }
}
