//! Delimited list flattening.

/// Split on commas and semicolons, trim each item, and drop empty items.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.replace(';', ",")
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
