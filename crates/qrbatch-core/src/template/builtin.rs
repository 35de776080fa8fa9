//! Template variants that ship with qrbatch.

use super::{Template, TemplateField, ValidationPolicy};

/// Single `Tiffin Number` column; the code carries the bare number.
fn tiffin() -> Template {
    Template {
        name: "tiffin".into(),
        description: "One tiffin number per row; the code holds only the number.".into(),
        fields: vec![TemplateField::bare("Tiffin Number")],
        list_field: None,
        primary_field: "Tiffin Number".into(),
        caption_prefix: "Tiffin #: ".into(),
        entry_tag: Some("tiffin".into()),
        name_by_primary: true,
        policy: ValidationPolicy::Superset,
    }
}

/// Exactly three positional columns rendered as labeled lines.
fn contact() -> Template {
    Template {
        name: "contact".into(),
        description: "Name, phone and address, matched by column position.".into(),
        fields: vec![
            TemplateField::new("Name"),
            TemplateField::new("Phone"),
            TemplateField::new("Address"),
        ],
        list_field: None,
        primary_field: "Name".into(),
        caption_prefix: String::new(),
        entry_tag: None,
        name_by_primary: false,
        policy: ValidationPolicy::ExactArity,
    }
}

/// Exactly five columns; `Items` is a delimited list flattened into bullets.
fn meal() -> Template {
    Template {
        name: "meal".into(),
        description: "Tiffin number, customer details and a list of items.".into(),
        fields: vec![
            TemplateField::new("Tiffin Number"),
            TemplateField::new("Name"),
            TemplateField::new("Phone"),
            TemplateField::new("Address"),
            TemplateField::new("Items"),
        ],
        list_field: Some("Items".into()),
        primary_field: "Tiffin Number".into(),
        caption_prefix: "Tiffin #: ".into(),
        entry_tag: Some("tiffin".into()),
        name_by_primary: true,
        policy: ValidationPolicy::ExactArity,
    }
}

pub fn builtin_templates() -> Vec<Template> {
    vec![tiffin(), contact(), meal()]
}
