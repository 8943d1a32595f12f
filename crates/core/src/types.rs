//! Column types.

use core::fmt;

/// The type a column declares. `Value::Null` is accepted by any nullable column,
/// whatever its type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DataType {
    Boolean,
    Int32,
    Int64,
    Float64,
    String,
    /// Milliseconds since the Unix epoch.
    DateTime,
    Bytes,
}

impl DataType {
    /// Whether values of this type can form an index key.
    pub fn is_indexable(self) -> bool {
        self != DataType::Bytes
    }

    /// Columns of non-indexable types accept nulls unless told otherwise.
    pub(crate) fn default_nullable(self) -> bool {
        !self.is_indexable()
    }

    /// SQL-style type name.
    pub fn name(self) -> &'static str {
        match self {
            DataType::Boolean => "BOOLEAN",
            DataType::Int32 => "INT",
            DataType::Int64 => "BIGINT",
            DataType::Float64 => "DOUBLE",
            DataType::String => "VARCHAR",
            DataType::DateTime => "TIMESTAMP",
            DataType::Bytes => "BLOB",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
