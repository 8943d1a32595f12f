//! Query executor module.

/// Per-row trace logging, enabled by the `debug-log` feature.
macro_rules! trace_row {
    ($($arg:tt)*) => {
        if cfg!(feature = "debug-log") {
            log::trace!($($arg)*);
        }
    };
}

#[cfg(test)]
mod fixtures;
mod filter;
pub mod join;
mod operator;
mod project;
mod scan;
mod selector;
mod sort;
mod unique;

pub use filter::Select;
pub use join::NestedLoopsJoin;
pub use operator::{collect, BoxedOperator, Operator};
pub use project::Project;
pub use scan::{IndexScan, TableScan};
pub use selector::ColumnSelector;
pub use sort::Sort;
pub use unique::Unique;
