//! Schema module for rowflow.
//!
//! This module contains the table schema definitions rows are bound to.

mod column;
mod table;

pub use column::Column;
pub use table::{Table, TableBuilder};
