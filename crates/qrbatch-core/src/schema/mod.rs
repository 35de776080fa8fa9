//! Header validation against a template.
//!
//! Validation is a pure function of the header and the template. On success it yields a
//! [`ColumnBinding`], which is the only way rows are read afterwards.

mod error;

use crate::records::{Row, Value};
use crate::template::{Template, ValidationPolicy};

pub use error::SchemaError;

/// Column index for each template field, in the template's declared order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnBinding {
    columns: Vec<usize>,
}

impl ColumnBinding {
    /// Header column bound to the field at declared position `field`.
    pub fn column(&self, field: usize) -> usize {
        self.columns[field]
    }

    /// Cell for the field at declared position `field`.
    pub fn value<'r>(&self, row: &'r Row, field: usize) -> &'r Value {
        row.get(self.column(field))
    }

    pub fn columns(&self) -> &[usize] {
        &self.columns
    }
}

/// Check `header` against `template` under the template's policy.
pub fn validate(header: &[String], template: &Template) -> Result<ColumnBinding, SchemaError> {
    match template.policy {
        ValidationPolicy::Superset => validate_superset(header, template),
        ValidationPolicy::ExactArity => validate_exact(header, template),
    }
}

fn validate_superset(header: &[String], template: &Template) -> Result<ColumnBinding, SchemaError> {
    let mut columns = Vec::with_capacity(template.arity());
    let mut missing = Vec::new();
    for field in &template.fields {
        match header.iter().position(|h| *h == field.column) {
            Some(idx) => columns.push(idx),
            None => missing.push(field.column.clone()),
        }
    }
    if !missing.is_empty() {
        return Err(SchemaError::MissingColumns { missing });
    }
    Ok(ColumnBinding { columns })
}

fn validate_exact(header: &[String], template: &Template) -> Result<ColumnBinding, SchemaError> {
    if header.len() != template.arity() {
        return Err(SchemaError::WrongColumnCount {
            expected: template.arity(),
            found: header.len(),
            expected_columns: template.fields.iter().map(|f| f.column.clone()).collect(),
        });
    }
    if let Some(list) = &template.list_field {
        if let Some(pos) = template.position_of(list) {
            if header[pos] != *list {
                return Err(SchemaError::WrongListColumn {
                    position: pos + 1,
                    expected: list.clone(),
                    found: header[pos].clone(),
                });
            }
        }
    }
    Ok(ColumnBinding {
        columns: (0..template.arity()).collect(),
    })
}
