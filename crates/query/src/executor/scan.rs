//! Scan operators.

use crate::executor::Operator;
use alloc::rc::Rc;
use alloc::vec::Vec;
use rowflow_core::schema::Table;
use rowflow_core::{Result, RowRef, Value};
use rowflow_index::{IndexRange, KeyRange, OrderedIndex};
use rowflow_storage::{RowStore, Rows};

/// Full table scan in the store's iteration order.
///
/// Rows stay owned by the store; the scan hands out shared handles to them.
pub struct TableScan<'a> {
    store: &'a RowStore,
    cursor: Option<Rows<'a>>,
    produced: usize,
}

impl<'a> TableScan<'a> {
    /// Creates a new table scan.
    pub fn new(store: &'a RowStore) -> Self {
        Self {
            store,
            cursor: None,
            produced: 0,
        }
    }
}

impl Operator for TableScan<'_> {
    fn open(&mut self) -> Result<()> {
        self.cursor = Some(self.store.rows());
        self.produced = 0;
        Ok(())
    }

    fn next(&mut self) -> Result<Option<RowRef>> {
        let row = self.cursor.as_mut().and_then(|rows| rows.next()).cloned();
        if row.is_some() {
            self.produced += 1;
        }
        Ok(row)
    }

    fn close(&mut self) {
        if self.cursor.take().is_some() {
            log::debug!("scan of {} produced {} rows", self.store.name(), self.produced);
        }
    }

    fn schema(&self) -> &Rc<Table> {
        self.store.schema()
    }
}

/// Ordered range scan over an index.
///
/// Yields the index's key rows whose key falls inside the range, in key order.
/// Produced rows carry only the indexed columns.
pub struct IndexScan<'a> {
    index: &'a OrderedIndex,
    range: KeyRange<Vec<Value>>,
    cursor: Option<IndexRange<'a>>,
}

impl<'a> IndexScan<'a> {
    /// Creates a scan of the keys in `[lo, hi]`, or of keys equal to `lo` when
    /// `hi` is `None`.
    pub fn new(index: &'a OrderedIndex, lo: Vec<Value>, hi: Option<Vec<Value>>) -> Result<Self> {
        let range = match hi {
            Some(hi) => KeyRange::bound(lo, hi, false, false),
            None => KeyRange::only(lo),
        };
        Self::with_range(index, range)
    }

    /// Creates a scan over an arbitrary key range.
    ///
    /// Fails with `ArityMismatch` if a bound does not have one value per index
    /// column.
    pub fn with_range(index: &'a OrderedIndex, range: KeyRange<Vec<Value>>) -> Result<Self> {
        index.range(&range)?;
        Ok(Self {
            index,
            range,
            cursor: None,
        })
    }

    /// Returns the scanned key range.
    pub fn range(&self) -> &KeyRange<Vec<Value>> {
        &self.range
    }
}

impl Operator for IndexScan<'_> {
    fn open(&mut self) -> Result<()> {
        self.cursor = Some(self.index.range(&self.range)?);
        Ok(())
    }

    fn next(&mut self) -> Result<Option<RowRef>> {
        Ok(self.cursor.as_mut().and_then(|rows| rows.next()).cloned())
    }

    fn close(&mut self) {
        self.cursor = None;
    }

    fn schema(&self) -> &Rc<Table> {
        self.index.schema()
    }
}
