//! Join operators.

mod nested;

pub use nested::NestedLoopsJoin;
