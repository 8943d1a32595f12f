//! Project operator.

use crate::executor::{ColumnSelector, Operator};
use alloc::rc::Rc;
use alloc::vec::Vec;
use rowflow_core::schema::Table;
use rowflow_core::{Result, Row, RowRef};

/// Project operator - keeps a subset of the child's columns, in requested order.
///
/// Each output row is a freshly allocated row; the source row is released as
/// soon as its values are copied.
pub struct Project<I> {
    child: I,
    selector: ColumnSelector,
    schema: Rc<Table>,
}

impl<I: Operator> Project<I> {
    /// Creates a projection onto the given child column positions.
    pub fn new(child: I, columns: &[usize]) -> Result<Self> {
        let input = child.schema().clone();
        let selector = ColumnSelector::new(input.arity(), columns)?;
        let schema = Rc::new(Table::derived(
            input.name(),
            selector
                .selected_columns()
                .iter()
                .map(|&c| input.columns()[c].clone())
                .collect(),
        ));
        Ok(Self {
            child,
            selector,
            schema,
        })
    }

    /// Creates a projection onto the named child columns.
    pub fn by_name(child: I, columns: &[&str]) -> Result<Self> {
        let positions = columns
            .iter()
            .map(|name| child.schema().require_position(name))
            .collect::<Result<Vec<_>>>()?;
        Self::new(child, &positions)
    }
}

impl<I: Operator> Operator for Project<I> {
    fn open(&mut self) -> Result<()> {
        self.child.open()
    }

    fn next(&mut self) -> Result<Option<RowRef>> {
        match self.child.next()? {
            Some(row) => {
                let values = self.selector.select(&row)?;
                Ok(Some(Rc::new(Row::from_values(self.schema.clone(), values)?)))
            }
            None => Ok(None),
        }
    }

    fn close(&mut self) {
        self.child.close();
    }

    fn schema(&self) -> &Rc<Table> {
        &self.schema
    }
}
