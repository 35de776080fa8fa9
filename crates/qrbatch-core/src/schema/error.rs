//! Header/template mismatches.

use std::fmt;

/// The header row does not satisfy the template. No row is processed when this is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// Superset policy: one or more declared columns are absent.
    MissingColumns { missing: Vec<String> },
    /// Exact-arity policy: the header has the wrong number of columns.
    WrongColumnCount {
        expected: usize,
        found: usize,
        expected_columns: Vec<String>,
    },
    /// Exact-arity policy: the list column is not where the template declares it.
    WrongListColumn {
        position: usize,
        expected: String,
        found: String,
    },
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaError::MissingColumns { missing } => {
                write!(f, "CSV must have a header named ")?;
                for (i, name) in missing.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "\"{name}\"")?;
                }
                write!(f, ".")
            }
            SchemaError::WrongColumnCount {
                expected,
                found,
                expected_columns,
            } => write!(
                f,
                "CSV must have exactly {expected} columns ({}), found {found}.",
                expected_columns.join(", ")
            ),
            SchemaError::WrongListColumn {
                position,
                expected,
                found,
            } => write!(
                f,
                "column {position} must be named \"{expected}\", found \"{found}\"."
            ),
        }
    }
}

impl std::error::Error for SchemaError {}
