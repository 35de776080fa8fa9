//! Row → payload text.
//!
//! Each template field becomes one `label: value` line in declared order. The list field is
//! flattened into a header line followed by one bullet line per item.

mod list;

use crate::records::Row;
use crate::schema::ColumnBinding;
use crate::template::Template;

pub use list::split_list;

/// Prefix for each flattened list item.
pub const BULLET: &str = "- ";

/// Immutable, ordered payload lines for one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    lines: Vec<String>,
}

impl Payload {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The text handed to the symbol encoder.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Compose the payload for `row`. Never fails for a validated row.
pub fn compose(row: &Row, template: &Template, binding: &ColumnBinding) -> Payload {
    let mut lines = Vec::with_capacity(template.arity());
    for (i, field) in template.fields.iter().enumerate() {
        let value = binding.value(row, i).to_string();
        if template.is_list_field(field) {
            lines.push(format!("{}:", field.label()));
            lines.extend(
                split_list(&value)
                    .into_iter()
                    .map(|item| format!("{BULLET}{item}")),
            );
        } else if field.bare {
            lines.push(value);
        } else {
            lines.push(format!("{}: {}", field.label(), value));
        }
    }
    Payload { lines }
}

/// Caption text for `row`: the template's prefix followed by the primary value.
pub fn caption(row: &Row, template: &Template, binding: &ColumnBinding) -> String {
    format!("{}{}", template.caption_prefix, primary_value(row, template, binding))
}

/// Rendered primary-field value, used for captions and entry names.
pub fn primary_value(row: &Row, template: &Template, binding: &ColumnBinding) -> String {
    template
        .position_of(&template.primary_field)
        .map(|i| binding.value(row, i).to_string())
        .unwrap_or_default()
}
