use qrbatch_core::config::QrBatchConfig;
use qrbatch_core::template::{Template, ValidationPolicy};

fn describe_fields(t: &Template) -> String {
    t.fields
        .iter()
        .map(|f| {
            if t.is_list_field(f) {
                format!("{}[list]", f.column)
            } else {
                f.column.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Print built-in and configured templates.
pub fn run_templates(cfg: &QrBatchConfig) {
    println!("{:<12} {:<12} FIELDS", "NAME", "POLICY");
    for t in cfg.templates() {
        let policy = match t.policy {
            ValidationPolicy::Superset => "superset",
            ValidationPolicy::ExactArity => "exact_arity",
        };
        let marker = if t.name == cfg.default_template { "*" } else { "" };
        println!(
            "{:<12} {:<12} {}",
            format!("{}{}", t.name, marker),
            policy,
            describe_fields(&t)
        );
        if !t.description.is_empty() {
            println!("{:<12} {}", "", t.description);
        }
    }
}
