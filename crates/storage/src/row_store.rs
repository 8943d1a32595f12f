//! Row storage for rowflow.
//!
//! This module provides the `RowStore` struct which holds the rows of a single
//! table. Rows are unique by value and iterate in ascending value order. Named
//! ordered indexes are kept in sync on every insert and remove.

use alloc::collections::btree_map::{self, BTreeMap};
use alloc::format;
use alloc::rc::Rc;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use hashbrown::HashMap;
use rowflow_core::schema::{Column, Table};
use rowflow_core::{Error, Result, Row, RowRef, Value};
use rowflow_index::OrderedIndex;

/// Iterator over the rows of a store, in ascending value order.
pub type Rows<'a> = btree_map::Values<'a, Vec<Value>, RowRef>;

/// Row storage for a single table.
pub struct RowStore {
    /// Table schema.
    schema: Rc<Table>,
    /// Rows keyed by their values.
    rows: BTreeMap<Vec<Value>, RowRef>,
    /// Secondary indexes by name.
    indices: HashMap<String, OrderedIndex>,
}

impl RowStore {
    /// Creates a new, empty row store for the given table schema.
    pub fn new(schema: Rc<Table>) -> Self {
        Self {
            schema,
            rows: BTreeMap::new(),
            indices: HashMap::new(),
        }
    }

    /// Returns the table schema.
    pub fn schema(&self) -> &Rc<Table> {
        &self.schema
    }

    /// Returns the table name.
    pub fn name(&self) -> &str {
        self.schema.name()
    }

    /// Returns the column definitions.
    pub fn columns(&self) -> &[Column] {
        self.schema.columns()
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the rows in ascending value order.
    pub fn rows(&self) -> Rows<'_> {
        self.rows.values()
    }

    /// Checks that a row fits this table: arity, column names, then each value
    /// against its column's type and nullability.
    fn check_row(&self, row: &Row) -> Result<()> {
        if row.len() != self.schema.arity() {
            return Err(Error::arity_mismatch(
                self.schema.name(),
                self.schema.arity(),
                row.len(),
            ));
        }
        if Rc::ptr_eq(row.schema(), &self.schema) {
            return Ok(());
        }
        if !row.schema().same_shape(&self.schema) {
            return Err(Error::invalid_operation(format!(
                "Row of {} does not belong to table {}",
                row.schema().name(),
                self.schema.name()
            )));
        }
        for (column, value) in self.schema.columns().iter().zip(row.values()) {
            match value.data_type() {
                None if !column.is_nullable() => {
                    return Err(Error::null_constraint(column.name()));
                }
                Some(got) if got != column.data_type() => {
                    return Err(Error::type_mismatch(column.name(), column.data_type(), got));
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Inserts a row.
    ///
    /// Returns `Ok(false)` without storing anything if an equal row is already
    /// present. Index entries are all built before any index changes, so a
    /// failed insert leaves the store and every index as they were.
    pub fn insert(&mut self, row: Row) -> Result<bool> {
        self.check_row(&row)?;
        if self.rows.contains_key(row.values()) {
            return Ok(false);
        }
        let row = if Rc::ptr_eq(row.schema(), &self.schema) {
            row
        } else {
            Row::from_values(self.schema.clone(), row.into_values())?
        };

        let entries = self
            .indices
            .iter()
            .map(|(name, index)| index.prepare(&row).map(|entry| (name.clone(), entry)))
            .collect::<Result<Vec<_>>>()?;
        for (name, entry) in entries {
            if let Some(index) = self.indices.get_mut(&name) {
                index.commit(entry);
            }
        }
        self.rows.insert(row.values().to_vec(), Rc::new(row));
        Ok(true)
    }

    /// Builds a row from `values` against this table's schema and inserts it.
    pub fn insert_values(&mut self, values: Vec<Value>) -> Result<bool> {
        if values.len() != self.schema.arity() {
            return Err(Error::arity_mismatch(
                self.schema.name(),
                self.schema.arity(),
                values.len(),
            ));
        }
        let row = Row::from_values(self.schema.clone(), values)?;
        self.insert(row)
    }

    /// Removes the row equal to `row`. Returns false if no such row is stored.
    ///
    /// Handles to the removed row that are still held elsewhere stay valid.
    pub fn remove(&mut self, row: &Row) -> Result<bool> {
        self.check_row(row)?;
        if !self.rows.contains_key(row.values()) {
            return Ok(false);
        }
        let keys = self
            .indices
            .iter()
            .map(|(name, index)| index.key_of(row).map(|key| (name.clone(), key)))
            .collect::<Result<Vec<_>>>()?;
        for (name, key) in keys {
            if let Some(index) = self.indices.get_mut(&name) {
                index.remove_key(&key);
            }
        }
        self.rows.remove(row.values());
        Ok(true)
    }

    /// Returns true if a row equal to `row` is stored.
    pub fn contains(&self, row: &Row) -> Result<bool> {
        self.check_row(row)?;
        Ok(self.rows.contains_key(row.values()))
    }

    /// Creates an ordered index over the named columns and fills it from the
    /// rows already stored.
    pub fn create_index(&mut self, name: &str, columns: &[&str]) -> Result<()> {
        if self.indices.contains_key(name) {
            return Err(Error::invalid_schema(format!(
                "Index already exists: {}",
                name
            )));
        }
        let mut index = OrderedIndex::new(name, &self.schema, columns)?;
        for row in self.rows.values() {
            index.insert(row)?;
        }
        log::debug!(
            "created index {} on {} over {:?} ({} entries)",
            name,
            self.schema.name(),
            columns,
            index.len()
        );
        self.indices.insert(name.to_string(), index);
        Ok(())
    }

    /// Gets an index by name.
    pub fn index(&self, name: &str) -> Result<&OrderedIndex> {
        self.indices
            .get(name)
            .ok_or_else(|| Error::index_not_found(self.schema.name(), name))
    }

    /// Returns the names of all indexes.
    pub fn index_names(&self) -> Vec<&str> {
        self.indices.keys().map(|k| k.as_str()).collect()
    }

    /// Clears all rows and index entries.
    pub fn clear(&mut self) {
        self.rows.clear();
        for index in self.indices.values_mut() {
            index.clear();
        }
    }
}
