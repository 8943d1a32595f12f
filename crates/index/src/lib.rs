//! Rowflow Index - Row ordering and ordered indexes for rowflow.
//!
//! This crate provides:
//!
//! - `RowComparator`: Total order over rows restricted to a set of key columns
//! - `KeyRange`: Bounds for range queries
//! - `OrderedIndex`: Ordered secondary index over a column subset, with
//!   `lower_bound`/`upper_bound` and range queries by key row
//!
//! # Example
//!
//! ```rust
//! use rowflow_core::schema::TableBuilder;
//! use rowflow_core::{DataType, Row, Value};
//! use rowflow_index::{KeyRange, OrderedIndex};
//! use std::rc::Rc;
//!
//! let table = Rc::new(
//!     TableBuilder::new("users").unwrap()
//!         .add_column("id", DataType::Int64).unwrap()
//!         .add_column("age", DataType::Int64).unwrap()
//!         .build().unwrap(),
//! );
//!
//! let mut index = OrderedIndex::new("by_age", &table, &["age"]).unwrap();
//! for (id, age) in [(1, 30), (2, 20), (3, 40)] {
//!     let row = Row::from_values(table.clone(), vec![Value::Int64(id), Value::Int64(age)]).unwrap();
//!     index.insert(&row).unwrap();
//! }
//!
//! let range = KeyRange::bound(vec![Value::Int64(20)], vec![Value::Int64(30)], false, false);
//! let ages: Vec<_> = index.range(&range).unwrap().map(|r| r.at(0).unwrap().clone()).collect();
//! assert_eq!(ages, vec![Value::Int64(20), Value::Int64(30)]);
//! ```

#![no_std]

extern crate alloc;

pub mod comparator;
pub mod ordered;
pub mod range;

pub use comparator::{Comparator, Order, RowComparator};
pub use ordered::{IndexEntry, IndexRange, OrderedIndex};
pub use range::KeyRange;
