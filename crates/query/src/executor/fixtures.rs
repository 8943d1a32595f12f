//! Shared test tables.

use alloc::rc::Rc;
use alloc::vec::Vec;
use rowflow_core::schema::{Table, TableBuilder};
use rowflow_core::{DataType, RowRef, Value};
use rowflow_storage::RowStore;

pub fn schema(name: &str, columns: &[(&str, DataType)]) -> Rc<Table> {
    let mut builder = TableBuilder::new(name).unwrap();
    for (column, data_type) in columns {
        builder = builder.add_column(*column, *data_type).unwrap();
    }
    Rc::new(builder.build().unwrap())
}

/// T(id, name) = {(1, "a"), (2, "b"), (3, "a")}
pub fn people() -> RowStore {
    let mut store = RowStore::new(schema(
        "t",
        &[("id", DataType::Int64), ("name", DataType::String)],
    ));
    for (id, name) in [(1, "a"), (2, "b"), (3, "a")] {
        store
            .insert_values(alloc::vec![Value::Int64(id), name.into()])
            .unwrap();
    }
    store
}

/// D(name, label) = {("a", "alpha"), ("b", "beta"), ("a", "again")}
pub fn labels() -> RowStore {
    let mut store = RowStore::new(schema(
        "d",
        &[("name", DataType::String), ("label", DataType::String)],
    ));
    for (name, label) in [("a", "alpha"), ("b", "beta"), ("a", "again")] {
        store
            .insert_values(alloc::vec![name.into(), label.into()])
            .unwrap();
    }
    store
}

/// First column of each row as an integer.
pub fn ids(rows: &[RowRef]) -> Vec<i64> {
    rows.iter()
        .map(|row| row.at(0).unwrap().as_i64().unwrap())
        .collect()
}

/// Every row as its list of values.
pub fn values(rows: &[RowRef]) -> Vec<Vec<Value>> {
    rows.iter().map(|row| row.values().to_vec()).collect()
}
