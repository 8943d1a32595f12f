//! Rowflow Query - Pull-based query execution for rowflow.
//!
//! This crate provides the execution operators that run over a `RowStore`:
//!
//! - `executor`: the `Operator` contract and its implementations (table scan,
//!   index scan, select, project, nested loops join, sort, unique)
//! - `predicate`: row predicates consumed by `Select`
//!
//! An operator tree is built bottom-up and driven from its root: `open()` once,
//! `next()` until it returns `Ok(None)`, then `close()`.
//!
//! # Example
//!
//! ```rust
//! use rowflow_core::schema::TableBuilder;
//! use rowflow_core::{DataType, Row, Value};
//! use rowflow_query::executor::{collect, Select, TableScan};
//! use rowflow_storage::RowStore;
//! use std::rc::Rc;
//!
//! let schema = TableBuilder::new("t")
//!     .unwrap()
//!     .add_column("id", DataType::Int64)
//!     .unwrap()
//!     .add_column("name", DataType::String)
//!     .unwrap()
//!     .build()
//!     .unwrap();
//! let mut t = RowStore::new(Rc::new(schema));
//! t.insert_values(vec![Value::Int64(1), "a".into()]).unwrap();
//! t.insert_values(vec![Value::Int64(2), "b".into()]).unwrap();
//! t.insert_values(vec![Value::Int64(3), "a".into()]).unwrap();
//!
//! let mut select = Select::new(TableScan::new(&t), |row: &Row| {
//!     row.value("name").map(|v| v.as_str() == Some("a")).unwrap_or(false)
//! });
//! let ids: Vec<i64> = collect(&mut select)
//!     .unwrap()
//!     .iter()
//!     .map(|row| row.at(0).unwrap().as_i64().unwrap())
//!     .collect();
//! assert_eq!(ids, vec![1, 3]);
//! ```

#![no_std]

extern crate alloc;

pub mod executor;
pub mod predicate;
