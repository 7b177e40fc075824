//! Inflection utilities for summary text.
//!
//! The table summary is derived from the resource name as
//! `"Table for " + capitalize(pluralize(resource))`. Only the rules below are
//! supported; anything fancier belongs to a dedicated inflection library.

/// Uppercases the first character of a string, leaving the rest unchanged.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Pluralizes an English noun.
///
/// Rules, in order:
/// - a small irregular table (person/people, child/children, man/men,
///   woman/women)
/// - words already ending in `s` pass through unchanged ("users" stays
///   "users")
/// - sibilant endings (`x`, `z`, `ch`, `sh`) take `es`
/// - consonant + `y` becomes `ies`
/// - everything else takes `s`
pub fn pluralize(s: &str) -> String {
    if s.is_empty() {
        return String::new();
    }

    match s {
        "person" => return "people".to_string(),
        "child" => return "children".to_string(),
        "man" => return "men".to_string(),
        "woman" => return "women".to_string(),
        _ => {}
    }

    if s.ends_with('s') {
        return s.to_string();
    }

    if s.ends_with('x') || s.ends_with('z') || s.ends_with("ch") || s.ends_with("sh") {
        return format!("{s}es");
    }

    if let Some(stem) = s.strip_suffix('y') {
        let before_y = stem.chars().last();
        if before_y.is_some_and(|c| !matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')) {
            return format!("{stem}ies");
        }
    }

    format!("{s}s")
}
