//! Ordered secondary index over a subset of a table's columns.
//!
//! Each indexed table row contributes one key row (the indexed columns only, in
//! index column order). Key rows are kept in key order; rows with equal keys keep
//! their insertion order.

use crate::range::KeyRange;
use alloc::collections::btree_map::{self, BTreeMap};
use alloc::format;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::ops::Bound;
use core::slice;
use rowflow_core::schema::{Column, Table};
use rowflow_core::{Error, Result, Row, RowRef, Value};

type Entries = BTreeMap<Vec<Value>, Vec<RowRef>>;

/// An ordered index supporting range queries by key row.
#[derive(Debug)]
pub struct OrderedIndex {
    name: String,
    /// Positions of the indexed columns in the table schema.
    key_columns: Vec<usize>,
    /// Schema of the key rows produced by this index.
    schema: Rc<Table>,
    entries: Entries,
    len: usize,
}

impl OrderedIndex {
    /// Creates an empty index over the named columns of `table`.
    pub fn new(name: impl Into<String>, table: &Table, columns: &[&str]) -> Result<Self> {
        let name = name.into();
        if columns.is_empty() {
            return Err(Error::invalid_schema(format!("Index {} has no columns", name)));
        }

        let mut key_columns = Vec::with_capacity(columns.len());
        let mut key_schema = Vec::with_capacity(columns.len());
        for column_name in columns {
            let position = table.require_position(column_name)?;
            let column = &table.columns()[position];
            if !column.is_indexable() {
                return Err(Error::invalid_schema(format!(
                    "Column is not indexable: {}",
                    column_name
                )));
            }
            if key_columns.contains(&position) {
                return Err(Error::invalid_schema(format!(
                    "Column {} indexed twice in {}",
                    column_name, name
                )));
            }
            key_columns.push(position);
            key_schema.push(Column::new(column.name(), column.data_type()).nullable(column.is_nullable()));
        }

        let schema = Rc::new(Table::derived(format!("{}.{}", table.name(), name), key_schema));
        Ok(Self {
            name,
            key_columns,
            schema,
            entries: BTreeMap::new(),
            len: 0,
        })
    }

    /// Returns the index name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the positions of the indexed columns in the table schema.
    pub fn key_columns(&self) -> &[usize] {
        &self.key_columns
    }

    /// Returns the schema of the key rows this index yields.
    pub fn schema(&self) -> &Rc<Table> {
        &self.schema
    }

    /// Returns the number of indexed columns.
    #[inline]
    pub fn n_columns(&self) -> usize {
        self.key_columns.len()
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the index is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Extracts the key of a table row.
    pub fn key_of(&self, row: &Row) -> Result<Vec<Value>> {
        self.key_columns
            .iter()
            .map(|&c| row.at(c).cloned())
            .collect()
    }

    /// Builds the entry a table row would add, without touching the index.
    pub fn prepare(&self, row: &Row) -> Result<IndexEntry> {
        let key = self.key_of(row)?;
        let key_row = Row::from_values(self.schema.clone(), key.iter().cloned())?;
        Ok(IndexEntry {
            key,
            row: Rc::new(key_row),
        })
    }

    /// Adds an entry built by `prepare`.
    pub fn commit(&mut self, entry: IndexEntry) {
        self.entries.entry(entry.key).or_default().push(entry.row);
        self.len += 1;
    }

    /// Adds the key row for a table row.
    pub fn insert(&mut self, row: &Row) -> Result<()> {
        let entry = self.prepare(row)?;
        self.commit(entry);
        Ok(())
    }

    /// Removes one key row for a table row. Returns false if the key is absent.
    pub fn remove(&mut self, row: &Row) -> Result<bool> {
        let key = self.key_of(row)?;
        Ok(self.remove_key(&key))
    }

    /// Removes one key row stored under `key`. Returns false if the key is absent.
    pub fn remove_key(&mut self, key: &[Value]) -> bool {
        let Some(rows) = self.entries.get_mut(key) else {
            return false;
        };
        rows.pop();
        if rows.is_empty() {
            self.entries.remove(key);
        }
        self.len -= 1;
        true
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.len = 0;
    }

    fn check_key(&self, key: &[Value]) -> Result<()> {
        if key.len() != self.n_columns() {
            return Err(Error::arity_mismatch(
                self.schema.name(),
                self.n_columns(),
                key.len(),
            ));
        }
        Ok(())
    }

    /// Entries from the first key not less than `key` to the end.
    pub fn lower_bound(&self, key: &[Value]) -> Result<IndexRange<'_>> {
        self.check_key(key)?;
        Ok(IndexRange::new(
            self.entries
                .range::<[Value], _>((Bound::Included(key), Bound::Unbounded)),
        ))
    }

    /// Entries from the first key greater than `key` to the end.
    pub fn upper_bound(&self, key: &[Value]) -> Result<IndexRange<'_>> {
        self.check_key(key)?;
        Ok(IndexRange::new(
            self.entries
                .range::<[Value], _>((Bound::Excluded(key), Bound::Unbounded)),
        ))
    }

    /// Entries whose key falls inside `range`, in key order.
    ///
    /// Every key in the range must have exactly `n_columns()` values. An inverted
    /// range yields nothing.
    pub fn range(&self, range: &KeyRange<Vec<Value>>) -> Result<IndexRange<'_>> {
        range.try_for_each_key(|key| self.check_key(key))?;
        if range.is_empty_range() {
            return Ok(IndexRange::empty());
        }
        Ok(IndexRange::new(self.entries.range::<Vec<Value>, _>(range.as_bounds())))
    }

    /// All key rows in key order.
    pub fn iter(&self) -> IndexRange<'_> {
        IndexRange::new(self.entries.range::<Vec<Value>, _>(..))
    }
}

/// A key row ready to be added to an index.
#[derive(Debug)]
pub struct IndexEntry {
    key: Vec<Value>,
    row: RowRef,
}

impl IndexEntry {
    /// Returns the key the entry is stored under.
    pub fn key(&self) -> &[Value] {
        &self.key
    }
}

/// Iterator over the key rows of an index range.
pub struct IndexRange<'a> {
    outer: Option<btree_map::Range<'a, Vec<Value>, Vec<RowRef>>>,
    inner: slice::Iter<'a, RowRef>,
}

impl<'a> IndexRange<'a> {
    fn new(outer: btree_map::Range<'a, Vec<Value>, Vec<RowRef>>) -> Self {
        Self {
            outer: Some(outer),
            inner: <&[RowRef]>::default().iter(),
        }
    }

    fn empty() -> Self {
        Self {
            outer: None,
            inner: <&[RowRef]>::default().iter(),
        }
    }
}

impl<'a> Iterator for IndexRange<'a> {
    type Item = &'a RowRef;

    fn next(&mut self) -> Option<&'a RowRef> {
        loop {
            if let Some(row) = self.inner.next() {
                return Some(row);
            }
            let (_, rows) = self.outer.as_mut()?.next()?;
            self.inner = rows.iter();
        }
    }
}
