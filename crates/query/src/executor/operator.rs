//! Operator trait for query execution.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;
use rowflow_core::schema::Table;
use rowflow_core::{Result, RowRef};

/// A pull-based query operator.
///
/// The caller drives an operator with `open()` once, `next()` until it returns
/// `Ok(None)`, then `close()`. A row returned by `next()` belongs to the caller;
/// dropping the handle releases it.
///
/// Every operator can be restarted with `close()` followed by `open()`, which
/// yields the full result again from the beginning. `next()` before `open()` or
/// after exhaustion returns `Ok(None)`.
pub trait Operator {
    /// Initializes cursors and buffers, opening children first.
    fn open(&mut self) -> Result<()>;

    /// Returns the next row, or `None` once exhausted.
    fn next(&mut self) -> Result<Option<RowRef>>;

    /// Releases cursors and any rows still held, closing children.
    fn close(&mut self);

    /// Schema of the rows this operator produces. Known before `open()`.
    fn schema(&self) -> &Rc<Table>;

    /// Number of columns in every produced row.
    fn arity(&self) -> usize {
        self.schema().arity()
    }
}

/// A type-erased operator, for trees assembled at runtime.
pub type BoxedOperator<'a> = Box<dyn Operator + 'a>;

impl<O: Operator + ?Sized> Operator for Box<O> {
    fn open(&mut self) -> Result<()> {
        (**self).open()
    }

    fn next(&mut self) -> Result<Option<RowRef>> {
        (**self).next()
    }

    fn close(&mut self) {
        (**self).close()
    }

    fn schema(&self) -> &Rc<Table> {
        (**self).schema()
    }

    fn arity(&self) -> usize {
        (**self).arity()
    }
}

/// Pulls every remaining row from an opened operator.
pub(crate) fn drain<O: Operator + ?Sized>(op: &mut O) -> Result<Vec<RowRef>> {
    let mut rows = Vec::new();
    while let Some(row) = op.next()? {
        rows.push(row);
    }
    Ok(rows)
}

/// Runs an operator to completion: open, drain, close.
///
/// The operator is closed even when opening or pulling fails.
pub fn collect<O: Operator + ?Sized>(op: &mut O) -> Result<Vec<RowRef>> {
    let result = op.open().and_then(|_| drain(op));
    op.close();
    result
}
