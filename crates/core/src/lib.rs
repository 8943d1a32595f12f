//! Rowflow Core - Value, row and schema types shared by the rowflow crates.
//!
//! This crate provides the data model the execution engine runs over:
//!
//! - `DataType`: Supported column types (Boolean, Int32, Int64, Float64, String, DateTime, Bytes)
//! - `Value`: Runtime values stored in row cells
//! - `Row`: A schema-bound, append-only sequence of values
//! - `schema`: Table schema definitions (Column, Table, TableBuilder)
//! - `Error`: Error types for schema and row access violations
//!
//! # Example
//!
//! ```rust
//! use rowflow_core::{DataType, Value, Row};
//! use rowflow_core::schema::TableBuilder;
//! use std::rc::Rc;
//!
//! let users = Rc::new(
//!     TableBuilder::new("users")
//!         .unwrap()
//!         .add_column("id", DataType::Int64)
//!         .unwrap()
//!         .add_column("name", DataType::String)
//!         .unwrap()
//!         .build()
//!         .unwrap(),
//! );
//!
//! let mut row = Row::new(users);
//! row.append(Value::Int64(1)).unwrap();
//! row.append("Alice".into()).unwrap();
//!
//! assert!(row.is_complete());
//! assert_eq!(row.value("name").unwrap(), &Value::String("Alice".into()));
//! assert!(row.append(Value::Int64(2)).is_err());
//! ```

#![no_std]

extern crate alloc;

mod error;
mod row;
pub mod schema;
mod types;
mod value;

pub use error::{Error, Result};
pub use row::{Row, RowRef};
pub use types::DataType;
pub use value::Value;
