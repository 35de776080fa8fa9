//! Archive entry names: `qr_<i>[_<tag>][_<primary>].png`.

use crate::template::Template;

/// Replaces path separators, NUL, and control characters with `_` so a value never turns an
/// entry into a nested path. Everything else, spaces included, is kept as-is.
pub fn sanitize_token(value: &str) -> String {
    value
        .chars()
        .map(|c| {
            if c == '/' || c == '\\' || c == '\0' || c.is_control() {
                '_'
            } else {
                c
            }
        })
        .collect()
}

/// Deterministic entry name for 1-based row `index`. The index alone keeps names unique.
pub fn entry_name(index: usize, template: &Template, primary: &str) -> String {
    let mut name = format!("qr_{index}");
    if let Some(tag) = &template.entry_tag {
        name.push('_');
        name.push_str(&sanitize_token(tag));
    }
    if template.name_by_primary {
        name.push('_');
        name.push_str(&sanitize_token(primary));
    }
    name.push_str(".png");
    name
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::builtin_templates;

    fn builtin(name: &str) -> Template {
        builtin_templates()
            .into_iter()
            .find(|t| t.name == name)
            .unwrap()
    }

    #[test]
    fn tiffin_names_carry_tag_and_value() {
        assert_eq!(entry_name(1, &builtin("tiffin"), "42"), "qr_1_tiffin_42.png");
    }

    #[test]
    fn primary_only() {
        let mut t = builtin("tiffin");
        t.entry_tag = None;
        assert_eq!(entry_name(3, &t, "C"), "qr_3_C.png");
    }

    #[test]
    fn index_only() {
        assert_eq!(entry_name(7, &builtin("contact"), "Asha"), "qr_7.png");
    }

    #[test]
    fn values_are_interpolated_as_is() {
        let mut t = builtin("tiffin");
        t.entry_tag = None;
        assert_eq!(entry_name(2, &t, "A B.c"), "qr_2_A B.c.png");
        assert_eq!(entry_name(2, &t, "nan"), "qr_2_nan.png");
    }

    #[test]
    fn separators_cannot_create_directories() {
        assert_eq!(sanitize_token("../etc/passwd"), ".._etc_passwd");
        assert_eq!(sanitize_token("a\\b\nc\0d"), "a_b_c_d");
    }
}
