//! Error types for rowflow.

use crate::types::DataType;
use alloc::string::String;
use core::fmt;

/// Result type alias for rowflow operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Error types for schema, row and index operations.
///
/// Running out of rows is never an error: operators report exhaustion as `Ok(None)`.
#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    /// Type mismatch error.
    TypeMismatch {
        column: String,
        expected: DataType,
        got: DataType,
    },
    /// Null constraint violation.
    NullConstraint {
        column: String,
    },
    /// Invalid schema definition.
    InvalidSchema {
        message: String,
    },
    /// Column name not present in the schema.
    ColumnNotFound {
        table: String,
        column: String,
    },
    /// Column position outside `[0, arity)`.
    ColumnIndexOutOfRange {
        index: usize,
        arity: usize,
    },
    /// Append on a row that already holds a value for every column.
    TooManyValues {
        table: String,
        arity: usize,
    },
    /// A row or key with the wrong number of values.
    ArityMismatch {
        table: String,
        expected: usize,
        got: usize,
    },
    /// The same column position requested twice.
    DuplicateColumn {
        index: usize,
    },
    /// Index not found.
    IndexNotFound {
        table: String,
        index: String,
    },
    /// Invalid operation.
    InvalidOperation {
        message: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::TypeMismatch {
                column,
                expected,
                got,
            } => {
                write!(
                    f,
                    "Type mismatch on column {}: expected {}, got {}",
                    column, expected, got
                )
            }
            Error::NullConstraint { column } => {
                write!(f, "Null constraint violation on column: {}", column)
            }
            Error::InvalidSchema { message } => {
                write!(f, "Invalid schema: {}", message)
            }
            Error::ColumnNotFound { table, column } => {
                write!(f, "Column {} not found in table {}", column, table)
            }
            Error::ColumnIndexOutOfRange { index, arity } => {
                write!(f, "Column index {} out of range for arity {}", index, arity)
            }
            Error::TooManyValues { table, arity } => {
                write!(f, "Too many values for table {} with {} columns", table, arity)
            }
            Error::ArityMismatch {
                table,
                expected,
                got,
            } => {
                write!(
                    f,
                    "Arity mismatch for table {}: expected {} values, got {}",
                    table, expected, got
                )
            }
            Error::DuplicateColumn { index } => {
                write!(f, "Column {} selected more than once", index)
            }
            Error::IndexNotFound { table, index } => {
                write!(f, "Index {} not found in table {}", index, table)
            }
            Error::InvalidOperation { message } => {
                write!(f, "Invalid operation: {}", message)
            }
        }
    }
}

impl Error {
    /// Creates a type mismatch error.
    pub fn type_mismatch(column: impl Into<String>, expected: DataType, got: DataType) -> Self {
        Error::TypeMismatch {
            column: column.into(),
            expected,
            got,
        }
    }

    /// Creates a null constraint error.
    pub fn null_constraint(column: impl Into<String>) -> Self {
        Error::NullConstraint {
            column: column.into(),
        }
    }

    /// Creates an invalid schema error.
    pub fn invalid_schema(message: impl Into<String>) -> Self {
        Error::InvalidSchema {
            message: message.into(),
        }
    }

    /// Creates a column not found error.
    pub fn column_not_found(table: impl Into<String>, column: impl Into<String>) -> Self {
        Error::ColumnNotFound {
            table: table.into(),
            column: column.into(),
        }
    }

    /// Creates a column index out of range error.
    pub fn column_out_of_range(index: usize, arity: usize) -> Self {
        Error::ColumnIndexOutOfRange { index, arity }
    }

    /// Creates an arity mismatch error.
    pub fn arity_mismatch(table: impl Into<String>, expected: usize, got: usize) -> Self {
        Error::ArityMismatch {
            table: table.into(),
            expected,
            got,
        }
    }

    /// Creates an index not found error.
    pub fn index_not_found(table: impl Into<String>, index: impl Into<String>) -> Self {
        Error::IndexNotFound {
            table: table.into(),
            index: index.into(),
        }
    }

    /// Creates an invalid operation error.
    pub fn invalid_operation(message: impl Into<String>) -> Self {
        Error::InvalidOperation {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_error_display() {
        let err = Error::type_mismatch("age", DataType::Int32, DataType::String);
        assert!(err.to_string().contains("Type mismatch"));
        assert!(err.to_string().contains("age"));
        assert!(err.to_string().ends_with("expected INT, got VARCHAR"));

        let err = Error::column_out_of_range(5, 2);
        assert!(err.to_string().contains("5"));

        let err = Error::arity_mismatch("users", 2, 3);
        assert!(err.to_string().contains("users"));
    }

    #[test]
    fn test_error_constructors() {
        let err = Error::column_not_found("users", "email");
        match err {
            Error::ColumnNotFound { column, .. } => assert_eq!(column, "email"),
            _ => panic!("Wrong error type"),
        }
    }
}
