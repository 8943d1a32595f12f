//! Nested loops equi-join.

use crate::executor::{ColumnSelector, Operator};
use alloc::format;
use alloc::rc::Rc;
use alloc::vec::Vec;
use rowflow_core::schema::Table;
use rowflow_core::{Result, Row, RowRef};

/// Nested loops equi-join.
///
/// Holds one left row at a time and pulls right rows against it. When the right
/// child runs out, the next left row is fetched and the right child is restarted
/// with `close()` then `open()`. Output is left-major, right-minor, and keeps
/// duplicates.
///
/// Each output row is the full left row followed by the right row's non-join
/// columns, allocated fresh for every match.
pub struct NestedLoopsJoin<L, R> {
    left: L,
    right: R,
    left_keys: ColumnSelector,
    right_keys: ColumnSelector,
    schema: Rc<Table>,
    current: Option<RowRef>,
    restarts: usize,
}

impl<L: Operator, R: Operator> NestedLoopsJoin<L, R> {
    /// Creates a join on `left[left_columns[i]] == right[right_columns[i]]` for
    /// every `i`.
    ///
    /// # Panics
    ///
    /// Panics if the two column lists differ in length.
    pub fn new(left: L, left_columns: &[usize], right: R, right_columns: &[usize]) -> Result<Self> {
        assert_eq!(
            left_columns.len(),
            right_columns.len(),
            "join column lists must have the same length"
        );
        let left_keys = ColumnSelector::new(left.arity(), left_columns)?;
        let right_keys = ColumnSelector::new(right.arity(), right_columns)?;

        let left_schema = left.schema();
        let right_schema = right.schema();
        let columns = left_schema
            .columns()
            .iter()
            .cloned()
            .chain(
                right_keys
                    .unselected_columns()
                    .iter()
                    .map(|&c| right_schema.columns()[c].clone()),
            )
            .collect();
        let schema = Rc::new(Table::derived(
            format!("{}_{}", left_schema.name(), right_schema.name()),
            columns,
        ));

        Ok(Self {
            left,
            right,
            left_keys,
            right_keys,
            schema,
            current: None,
            restarts: 0,
        })
    }

    fn output_row(&self, left: &Row, right: &Row) -> Result<Row> {
        let mut values = Vec::with_capacity(self.schema.arity());
        values.extend_from_slice(left.values());
        values.extend(self.right_keys.reject(right)?);
        Row::from_values(self.schema.clone(), values)
    }
}

fn keys_match(
    left: &Row,
    left_keys: &ColumnSelector,
    right: &Row,
    right_keys: &ColumnSelector,
) -> Result<bool> {
    for (&l, &r) in left_keys
        .selected_columns()
        .iter()
        .zip(right_keys.selected_columns())
    {
        if left.at(l)? != right.at(r)? {
            return Ok(false);
        }
    }
    Ok(true)
}

impl<L: Operator, R: Operator> Operator for NestedLoopsJoin<L, R> {
    fn open(&mut self) -> Result<()> {
        self.left.open()?;
        self.right.open()?;
        self.current = self.left.next()?;
        self.restarts = 0;
        Ok(())
    }

    fn next(&mut self) -> Result<Option<RowRef>> {
        loop {
            let left = match self.current.as_ref() {
                Some(row) => row,
                None => return Ok(None),
            };

            match self.right.next()? {
                Some(right) => {
                    if keys_match(left, &self.left_keys, &right, &self.right_keys)? {
                        trace_row!("join matched {:?} with {:?}", left.values(), right.values());
                        return Ok(Some(Rc::new(self.output_row(left, &right)?)));
                    }
                }
                None => {
                    self.current = self.left.next()?;
                    if self.current.is_none() {
                        return Ok(None);
                    }
                    self.right.close();
                    self.right.open()?;
                    self.restarts += 1;
                }
            }
        }
    }

    fn close(&mut self) {
        log::debug!(
            "join {} restarted right side {} times",
            self.schema.name(),
            self.restarts
        );
        self.current = None;
        self.left.close();
        self.right.close();
    }

    fn schema(&self) -> &Rc<Table> {
        &self.schema
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::fixtures::{labels, people, schema, values};
    use crate::executor::{collect, TableScan};
    use alloc::vec;
    use rowflow_core::{DataType, Error, Value};
    use rowflow_storage::RowStore;

    fn row(id: i64, name: &str, label: &str) -> Vec<Value> {
        vec![Value::Int64(id), name.into(), label.into()]
    }

    #[test]
    fn test_join_on_name() {
        let people = people();
        let labels = labels();
        let mut join =
            NestedLoopsJoin::new(TableScan::new(&people), &[1], TableScan::new(&labels), &[0])
                .unwrap();
        assert_eq!(join.arity(), 3);
        assert_eq!(join.schema().name(), "t_d");

        // labels iterate as (a, again), (a, alpha), (b, beta).
        let rows = collect(&mut join).unwrap();
        assert_eq!(
            values(&rows),
            vec![
                row(1, "a", "again"),
                row(1, "a", "alpha"),
                row(2, "b", "beta"),
                row(3, "a", "again"),
                row(3, "a", "alpha"),
            ]
        );
        assert_eq!(rows[0].value("label").unwrap(), &Value::from("again"));
    }

    #[test]
    fn test_join_empty_side() {
        let people = people();
        let empty = RowStore::new(labels().schema().clone());

        let mut join =
            NestedLoopsJoin::new(TableScan::new(&people), &[1], TableScan::new(&empty), &[0])
                .unwrap();
        assert!(collect(&mut join).unwrap().is_empty());

        let mut join =
            NestedLoopsJoin::new(TableScan::new(&empty), &[0], TableScan::new(&people), &[1])
                .unwrap();
        assert!(collect(&mut join).unwrap().is_empty());
        assert!(join.next().unwrap().is_none());
    }

    #[test]
    fn test_join_on_no_columns_is_cartesian() {
        let people = people();
        let labels = labels();
        let mut join =
            NestedLoopsJoin::new(TableScan::new(&people), &[], TableScan::new(&labels), &[])
                .unwrap();
        assert_eq!(join.arity(), 4);
        assert_eq!(collect(&mut join).unwrap().len(), 9);
    }

    #[test]
    fn test_join_on_multiple_columns() {
        let left = {
            let mut store = RowStore::new(schema("l", &[("x", DataType::Int64), ("y", DataType::Int64)]));
            for (x, y) in [(1, 1), (1, 2), (2, 2)] {
                store.insert_values(vec![Value::Int64(x), Value::Int64(y)]).unwrap();
            }
            store
        };
        let right = {
            let mut store = RowStore::new(schema(
                "r",
                &[("y", DataType::Int64), ("z", DataType::String), ("x", DataType::Int64)],
            ));
            store.insert_values(vec![Value::Int64(2), "p".into(), Value::Int64(1)]).unwrap();
            store.insert_values(vec![Value::Int64(2), "q".into(), Value::Int64(2)]).unwrap();
            store
        };

        let mut join =
            NestedLoopsJoin::new(TableScan::new(&left), &[0, 1], TableScan::new(&right), &[2, 0])
                .unwrap();
        assert_eq!(join.arity(), 3);
        assert_eq!(
            values(&collect(&mut join).unwrap()),
            vec![
                vec![Value::Int64(1), Value::Int64(2), "p".into()],
                vec![Value::Int64(2), Value::Int64(2), "q".into()],
            ]
        );
    }

    #[test]
    fn test_join_restart() {
        let people = people();
        let labels = labels();
        let mut join =
            NestedLoopsJoin::new(TableScan::new(&people), &[1], TableScan::new(&labels), &[0])
                .unwrap();
        let first = collect(&mut join).unwrap();
        let second = collect(&mut join).unwrap();
        assert_eq!(values(&first), values(&second));
    }

    #[test]
    fn test_join_rows_are_independent() {
        let people = people();
        let labels = labels();
        let mut join =
            NestedLoopsJoin::new(TableScan::new(&people), &[1], TableScan::new(&labels), &[0])
                .unwrap();
        join.open().unwrap();
        let a = join.next().unwrap().unwrap();
        let b = join.next().unwrap().unwrap();
        assert_eq!(a.values(), &row(1, "a", "again")[..]);
        assert_eq!(b.values(), &row(1, "a", "alpha")[..]);
        join.close();
        assert!(people.rows().chain(labels.rows()).all(|r| Rc::strong_count(r) == 1));
    }

    #[test]
    fn test_join_bad_column() {
        let people = people();
        let labels = labels();
        assert!(matches!(
            NestedLoopsJoin::new(TableScan::new(&people), &[5], TableScan::new(&labels), &[0]),
            Err(Error::ColumnIndexOutOfRange { index: 5, arity: 2 })
        ));
    }

    #[test]
    #[should_panic(expected = "join column lists must have the same length")]
    fn test_join_column_count_mismatch_panics() {
        let people = people();
        let labels = labels();
        let _ = NestedLoopsJoin::new(TableScan::new(&people), &[0, 1], TableScan::new(&labels), &[0]);
    }
}
