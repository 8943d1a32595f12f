//! Row predicates used by `Select`.

use core::fmt;
use rowflow_core::schema::Table;
use rowflow_core::{Result, Row, Value};

/// Comparison applied by a `ValuePredicate`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EvalType {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

/// A predicate that can be evaluated against rows.
///
/// Implemented for every `Fn(&Row) -> bool`, so closures can be passed to
/// `Select` directly.
pub trait Predicate {
    /// Evaluates the predicate against a row.
    fn eval(&self, row: &Row) -> bool;
}

impl<F> Predicate for F
where
    F: Fn(&Row) -> bool,
{
    #[inline]
    fn eval(&self, row: &Row) -> bool {
        self(row)
    }
}

/// A value predicate compares a column to a literal value.
#[derive(Clone, Debug)]
pub struct ValuePredicate {
    pub column: usize,
    pub eval_type: EvalType,
    pub value: Value,
}

impl ValuePredicate {
    pub fn new(column: usize, eval_type: EvalType, value: Value) -> Self {
        Self {
            column,
            eval_type,
            value,
        }
    }

    /// Resolves `column` by name against `schema`.
    pub fn by_name(schema: &Table, column: &str, eval_type: EvalType, value: Value) -> Result<Self> {
        let column = schema.require_position(column)?;
        Ok(Self::new(column, eval_type, value))
    }

    pub fn eq(column: usize, value: Value) -> Self {
        Self::new(column, EvalType::Eq, value)
    }

    pub fn ne(column: usize, value: Value) -> Self {
        Self::new(column, EvalType::Ne, value)
    }

    pub fn lt(column: usize, value: Value) -> Self {
        Self::new(column, EvalType::Lt, value)
    }

    pub fn le(column: usize, value: Value) -> Self {
        Self::new(column, EvalType::Le, value)
    }

    pub fn gt(column: usize, value: Value) -> Self {
        Self::new(column, EvalType::Gt, value)
    }

    pub fn ge(column: usize, value: Value) -> Self {
        Self::new(column, EvalType::Ge, value)
    }
}

impl Predicate for ValuePredicate {
    fn eval(&self, row: &Row) -> bool {
        let row_value = match row.get(self.column) {
            Some(v) => v,
            None => return false,
        };

        match self.eval_type {
            EvalType::Eq => row_value == &self.value,
            EvalType::Ne => row_value != &self.value,
            EvalType::Lt => row_value < &self.value,
            EvalType::Le => row_value <= &self.value,
            EvalType::Gt => row_value > &self.value,
            EvalType::Ge => row_value >= &self.value,
        }
    }
}

impl fmt::Display for ValuePredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = match self.eval_type {
            EvalType::Eq => "=",
            EvalType::Ne => "!=",
            EvalType::Lt => "<",
            EvalType::Le => "<=",
            EvalType::Gt => ">",
            EvalType::Ge => ">=",
        };
        write!(f, "#{} {} {}", self.column, op, self.value)
    }
}
