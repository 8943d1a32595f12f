//! Row structure for rowflow.
//!
//! A `Row` is an ordered sequence of values bound to a table schema. It is filled
//! by `append` until it holds one value per column, after which it is complete and
//! further appends fail.

use crate::error::{Error, Result};
use crate::schema::Table;
use crate::value::Value;
use alloc::rc::Rc;
use alloc::vec::Vec;

/// Handle through which rows move between a producer and its consumer.
///
/// Whoever holds a `RowRef` owns that reference; dropping it releases the row
/// once no container or consumer still refers to it.
pub type RowRef = Rc<Row>;

/// A row of values bound to a table schema.
#[derive(Clone, Debug)]
pub struct Row {
    /// Schema this row conforms to.
    schema: Rc<Table>,
    /// Values stored in this row, indexed by column position.
    values: Vec<Value>,
}

impl Row {
    /// Creates an empty row for the given schema.
    pub fn new(schema: Rc<Table>) -> Self {
        let capacity = schema.arity();
        Self {
            schema,
            values: Vec::with_capacity(capacity),
        }
    }

    /// Creates a row by appending each value in turn.
    pub fn from_values(schema: Rc<Table>, values: impl IntoIterator<Item = Value>) -> Result<Self> {
        let mut row = Self::new(schema);
        for value in values {
            row.append(value)?;
        }
        Ok(row)
    }

    /// Returns the schema this row is bound to.
    #[inline]
    pub fn schema(&self) -> &Rc<Table> {
        &self.schema
    }

    /// Appends a value for the next column.
    pub fn append(&mut self, value: Value) -> Result<()> {
        let position = self.values.len();
        let column = match self.schema.columns().get(position) {
            Some(column) => column,
            None => {
                return Err(Error::TooManyValues {
                    table: self.schema.name().into(),
                    arity: self.schema.arity(),
                })
            }
        };
        match value.data_type() {
            None if !column.is_nullable() => return Err(Error::null_constraint(column.name())),
            Some(got) if got != column.data_type() => {
                return Err(Error::type_mismatch(column.name(), column.data_type(), got))
            }
            _ => {}
        }
        self.values.push(value);
        Ok(())
    }

    /// Returns the value at column position `i`.
    pub fn at(&self, i: usize) -> Result<&Value> {
        self.values
            .get(i)
            .ok_or_else(|| Error::column_out_of_range(i, self.values.len()))
    }

    /// Returns the value of the named column.
    pub fn value(&self, column: &str) -> Result<&Value> {
        let position = self.schema.require_position(column)?;
        self.at(position)
    }

    /// Gets a value at the given column index.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    /// Returns a reference to the values.
    #[inline]
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Consumes the row, returning its values.
    pub fn into_values(self) -> Vec<Value> {
        self.values
    }

    /// Returns the number of values in this row.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if this row has no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns true once the row holds a value for every column.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.values.len() == self.schema.arity()
    }
}

/// Rows are equal when their schemas have the same column names and their
/// values are equal.
impl PartialEq for Row {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
            && (Rc::ptr_eq(&self.schema, &other.schema) || self.schema.same_shape(&other.schema))
    }
}

impl Eq for Row {}
