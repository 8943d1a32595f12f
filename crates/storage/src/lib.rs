//! Rowflow Storage - In-memory table storage for rowflow.
//!
//! This crate provides `RowStore`, the row container scans read from. A store
//! keeps its rows unique and ordered by value, and maintains any number of named
//! `OrderedIndex`es over column subsets.
//!
//! # Example
//!
//! ```rust
//! use rowflow_core::schema::TableBuilder;
//! use rowflow_core::{DataType, Value};
//! use rowflow_storage::RowStore;
//! use std::rc::Rc;
//!
//! let schema = TableBuilder::new("users")
//!     .unwrap()
//!     .add_column("id", DataType::Int64)
//!     .unwrap()
//!     .add_column("name", DataType::String)
//!     .unwrap()
//!     .build()
//!     .unwrap();
//!
//! let mut users = RowStore::new(Rc::new(schema));
//! assert!(users.insert_values(vec![Value::Int64(1), "Alice".into()]).unwrap());
//! // Duplicate rows are not stored twice.
//! assert!(!users.insert_values(vec![Value::Int64(1), "Alice".into()]).unwrap());
//!
//! users.create_index("by_name", &["name"]).unwrap();
//! assert_eq!(users.index("by_name").unwrap().n_columns(), 1);
//! ```

#![no_std]

extern crate alloc;

mod row_store;

pub use row_store::{RowStore, Rows};
