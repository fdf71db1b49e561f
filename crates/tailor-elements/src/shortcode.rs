//! Shortcode text helpers.
//!
//! A shortcode is the bracketed directive `[tag attr="v" ...]content[/tag]`
//! the host later expands into rendered markup. This module owns attribute
//! serialization and the cleanup applied to host-side rich text around
//! shortcode tokens.

use indexmap::IndexMap;

/// Serialize an ordered attribute map as `key="value"` pairs.
///
/// Attributes with empty values are skipped. Values are interpolated
/// directly, callers pre-sanitize.
pub fn attributes(atts: &IndexMap<String, String>) -> String {
    attributes_with_prefix(atts, "")
}

/// Serialize attributes with a key prefix, e.g. `data-`.
pub fn attributes_with_prefix(atts: &IndexMap<String, String>, prefix: &str) -> String {
    atts.iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| format!(r#"{prefix}{key}="{value}""#))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Remove the paragraph and line-break tags a rich-text host wraps around
/// shortcode tokens.
pub fn clean_content(content: &str) -> String {
    content
        .replace("<p>[", "[")
        .replace("]</p>", "]")
        .replace("]<br />", "]")
}
