//! Templates: the declared schema a record set must satisfy and how its rows are rendered.

mod builtin;
mod error;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub use builtin::builtin_templates;
pub use error::TemplateError;

/// How the header row is checked against a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationPolicy {
    /// Every declared field must be present by name; extra columns are ignored.
    #[default]
    Superset,
    /// The column count must equal the field count and the list column must match by name.
    /// Fields bind to columns by position.
    ExactArity,
}

/// One required field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateField {
    /// Column name in the header row.
    pub column: String,
    /// Label used in the payload; defaults to the column name.
    #[serde(default)]
    pub label: Option<String>,
    /// Encode only the value, without a `label: ` prefix.
    #[serde(default)]
    pub bare: bool,
}

impl TemplateField {
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            label: None,
            bare: false,
        }
    }

    pub fn labeled(column: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::new(column)
        }
    }

    pub fn bare(column: impl Into<String>) -> Self {
        Self {
            bare: true,
            ..Self::new(column)
        }
    }

    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.column)
    }
}

fn default_true() -> bool {
    true
}

/// Declared schema plus caption and archive-naming rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub fields: Vec<TemplateField>,
    /// Column whose value is a comma/semicolon delimited list, rendered as bullets.
    #[serde(default)]
    pub list_field: Option<String>,
    /// Column whose value becomes the caption and the archive-name token.
    pub primary_field: String,
    #[serde(default)]
    pub caption_prefix: String,
    /// Fixed token placed between the row index and the primary value in entry names.
    #[serde(default)]
    pub entry_tag: Option<String>,
    /// Append the primary value to entry names (`qr_<i>_<value>.png`).
    #[serde(default = "default_true")]
    pub name_by_primary: bool,
    #[serde(default)]
    pub policy: ValidationPolicy,
}

impl Template {
    /// Number of declared fields.
    pub fn arity(&self) -> usize {
        self.fields.len()
    }

    /// Declared position of a field by column name.
    pub fn position_of(&self, column: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.column == column)
    }

    pub fn is_list_field(&self, field: &TemplateField) -> bool {
        self.list_field.as_deref() == Some(field.column.as_str())
    }

    /// Check the template's own invariants.
    pub fn check(&self) -> Result<(), TemplateError> {
        if self.name.trim().is_empty() {
            return Err(TemplateError::EmptyName);
        }
        if self.fields.is_empty() {
            return Err(TemplateError::NoFields(self.name.clone()));
        }
        let mut seen = HashSet::new();
        for f in &self.fields {
            if !seen.insert(f.column.as_str()) {
                return Err(TemplateError::DuplicateField {
                    template: self.name.clone(),
                    field: f.column.clone(),
                });
            }
        }
        if let Some(list) = &self.list_field {
            if self.position_of(list).is_none() {
                return Err(TemplateError::UndeclaredField {
                    template: self.name.clone(),
                    role: "list_field",
                    field: list.clone(),
                });
            }
        }
        if self.position_of(&self.primary_field).is_none() {
            return Err(TemplateError::UndeclaredField {
                template: self.name.clone(),
                role: "primary_field",
                field: self.primary_field.clone(),
            });
        }
        Ok(())
    }

    /// Sample CSV: header row plus one illustrative data row.
    pub fn sample_csv(&self) -> Result<String, csv::Error> {
        let mut wtr = csv::WriterBuilder::new()
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(Vec::new());
        let header: Vec<&str> = self.fields.iter().map(|f| f.column.as_str()).collect();
        let example: Vec<String> = self
            .fields
            .iter()
            .enumerate()
            .map(|(i, f)| {
                if self.is_list_field(f) {
                    "item one; item two".to_string()
                } else if f.column == self.primary_field {
                    "101".to_string()
                } else {
                    format!("example {}", i + 1)
                }
            })
            .collect();
        wtr.write_record(&header)?;
        wtr.write_record(&example)?;
        let bytes = wtr
            .into_inner()
            .map_err(|e| csv::Error::from(e.into_error()))?;
        // Every field written is a `str`, so the bytes are UTF-8.
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(name: &str) -> Template {
        Template {
            name: name.into(),
            description: String::new(),
            fields: vec![TemplateField::labeled("ID", "ID")],
            list_field: None,
            primary_field: "ID".into(),
            caption_prefix: String::new(),
            entry_tag: None,
            name_by_primary: true,
            policy: ValidationPolicy::Superset,
        }
    }

    #[test]
    fn label_defaults_to_column() {
        assert_eq!(TemplateField::new("Name").label(), "Name");
        assert_eq!(TemplateField::labeled("Name", "Who").label(), "Who");
    }

    #[test]
    fn check_accepts_valid() {
        single("ok").check().unwrap();
    }

    #[test]
    fn check_rejects_duplicates() {
        let mut t = single("dup");
        t.fields.push(TemplateField::new("ID"));
        assert!(matches!(
            t.check(),
            Err(TemplateError::DuplicateField { .. })
        ));
    }

    #[test]
    fn check_rejects_undeclared_list_and_primary() {
        let mut t = single("bad");
        t.list_field = Some("Items".into());
        assert!(matches!(
            t.check(),
            Err(TemplateError::UndeclaredField {
                role: "list_field",
                ..
            })
        ));
        let mut t = single("bad");
        t.primary_field = "Other".into();
        assert!(matches!(
            t.check(),
            Err(TemplateError::UndeclaredField {
                role: "primary_field",
                ..
            })
        ));
    }

    #[test]
    fn check_rejects_empty() {
        let mut t = single("empty");
        t.fields.clear();
        assert!(matches!(t.check(), Err(TemplateError::NoFields(_))));
        assert!(matches!(single(" ").check(), Err(TemplateError::EmptyName)));
    }

    #[test]
    fn template_from_toml_uses_defaults() {
        let t: Template = toml::from_str(
            r#"
                name = "member"
                primary_field = "Member"
                fields = [{ column = "Member" }]
            "#,
        )
        .unwrap();
        assert!(t.name_by_primary);
        assert_eq!(t.policy, ValidationPolicy::Superset);
        assert!(t.list_field.is_none());
        assert_eq!(t.fields[0].label(), "Member");
    }

    #[test]
    fn sample_csv_has_header_and_row() {
        let csv = single("s").sample_csv().unwrap();
        assert_eq!(csv, "ID\n101\n");
    }
}
