//! Custom-property extraction from theme blocks.
//!
//! Theme CSS arrives as free-form text with two interesting selectors:
//!
//! ```css
//! :root {
//!     --background: hsl(0 0% 100%);
//! }
//!
//! .dark {
//!     --background: hsl(0 0% 10%);
//! }
//! ```
//!
//! [`parse_theme_css`] finds those blocks and [`parse_variable_block`] scans
//! each body for `--name: value;` declarations. Both scanners are lenient:
//! anything that does not match the expected shape is skipped, never a parse
//! error.

use std::collections::HashMap;

use super::values::parse_value;
use crate::types::theme::ParsedTheme;
use crate::types::value::ParsedValue;

/// Parses a CSS theme into its light and dark variable maps.
///
/// The light map comes from the first matching `:root { … }` block, the dark
/// map from the first matching `.dark { … }` block. A missing block leaves
/// its map empty; whether an empty theme is an error is the caller's call.
///
/// Block bodies end at the first `}`, so nested rules (`@media`, nested
/// selectors) are not supported: declarations after an inner `}` are lost.
pub fn parse_theme_css(css: &str) -> ParsedTheme {
    let mut theme = ParsedTheme::default();
    if let Some(block) = extract_block(css, ":root") {
        theme.light = parse_variable_block(block);
    }
    if let Some(block) = extract_block(css, ".dark") {
        theme.dark = parse_variable_block(block);
    }
    theme
}

/// Finds the body of the first `selector { … }` occurrence with a non-empty,
/// closed body. Occurrences that are not followed by `{`, or whose body
/// would be empty, are skipped and the scan continues at the next one.
fn extract_block<'a>(css: &'a str, selector: &str) -> Option<&'a str> {
    let mut from = 0;
    while let Some(found) = css[from..].find(selector) {
        let after = from + found + selector.len();
        let rest = css[after..].trim_start();
        if let Some(body) = rest.strip_prefix('{') {
            if let Some(end) = body.find('}') {
                if end > 0 {
                    return Some(&body[..end]);
                }
            }
        }
        from = after;
    }
    None
}

/// Scans a block body for `--name: value;` declarations.
///
/// The name is one or more of `[A-Za-z0-9-]`; the colon may be padded with
/// whitespace; the value runs to the next `;`, which is required. A
/// declaration without its terminating semicolon is dropped. Values are
/// trimmed before classification, and a name declared twice keeps the later
/// value.
pub fn parse_variable_block(block: &str) -> HashMap<String, ParsedValue> {
    let mut variables = HashMap::new();
    let mut cursor = 0;
    while let Some(found) = block[cursor..].find("--") {
        let start = cursor + found + 2;
        match scan_declaration(&block[start..]) {
            Some((name, raw, consumed)) => {
                variables.insert(name.to_string(), parse_value(raw));
                cursor = start + consumed;
            }
            None => cursor = start,
        }
    }
    variables
}

/// Parses one declaration starting just after its `--` marker. Returns the
/// name, the trimmed raw value, and the bytes consumed through the `;`.
fn scan_declaration(input: &str) -> Option<(&str, &str, usize)> {
    let name_end = input
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-'))
        .unwrap_or(input.len());
    if name_end == 0 {
        return None;
    }
    let name = &input[..name_end];

    let after_name = &input[name_end..];
    let colon_at = name_end + (after_name.len() - after_name.trim_start().len());
    if !input[colon_at..].starts_with(':') {
        return None;
    }

    let value_start = colon_at + 1;
    let semi = input[value_start..].find(';')?;
    if semi == 0 {
        return None;
    }
    let raw = input[value_start..value_start + semi].trim();
    Some((name, raw, value_start + semi + 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::value::ValueKind;

    #[test]
    fn test_extract_block_basic() {
        let css = ":root { --a: 1px; }";
        assert_eq!(extract_block(css, ":root"), Some(" --a: 1px; "));
    }

    #[test]
    fn test_extract_block_skips_empty_occurrence() {
        let css = ":root {}\n:root { --x: 1px; }";
        assert_eq!(extract_block(css, ":root"), Some(" --x: 1px; "));
    }

    #[test]
    fn test_extract_block_requires_brace_and_close() {
        assert_eq!(extract_block(":root .dark", ":root"), None);
        assert_eq!(extract_block(":root { --a: 1px;", ":root"), None);
    }

    #[test]
    fn test_extract_block_ignores_selector_suffix() {
        // `.darker` contains no `.dark` followed by `{`.
        assert_eq!(extract_block(".darker { --a: 1px; }", ".dark"), None);
    }

    #[test]
    fn test_declaration_needs_semicolon() {
        let block = "--a: red";
        assert!(parse_variable_block(block).is_empty());
    }

    #[test]
    fn test_declaration_shapes() {
        let block = "--a:1px;\n  --b :  2px ;\n--c-long-name: hsl(0 0% 50%);";
        let variables = parse_variable_block(block);
        assert_eq!(variables.len(), 3);
        assert_eq!(variables["a"].raw, "1px");
        assert_eq!(variables["b"].raw, "2px");
        assert_eq!(variables["c-long-name"].kind(), ValueKind::Color);
    }

    #[test]
    fn test_declaration_duplicate_last_wins() {
        let variables = parse_variable_block("--a: 1px; --a: 2px;");
        assert_eq!(variables["a"].raw, "2px");
    }

    #[test]
    fn test_declaration_empty_value_dropped() {
        assert!(parse_variable_block("--a:;").is_empty());
        // A whitespace-only value still matches; it trims to empty.
        let variables = parse_variable_block("--a: ;");
        assert_eq!(variables["a"].raw, "");
        assert_eq!(variables["a"].kind(), ValueKind::Unknown);
    }

    #[test]
    fn test_value_swallows_following_declaration_without_semicolon() {
        // The value runs to the next `;`, even across lines.
        let variables = parse_variable_block("--a: 1px\n--b: 2px;");
        assert_eq!(variables.len(), 1);
        assert_eq!(variables["a"].raw, "1px\n--b: 2px");
    }

    #[test]
    fn test_parse_theme_css_modes() {
        let css = ":root { --a: 1rem; } .dark { --a: 2rem; --b: #fff; }";
        let theme = parse_theme_css(css);
        assert_eq!(theme.light.len(), 1);
        assert_eq!(theme.dark.len(), 2);
        assert_eq!(theme.dark["b"].kind(), ValueKind::Color);
    }

    #[test]
    fn test_parse_theme_css_root_only() {
        let theme = parse_theme_css(":root { --a: 1rem; }");
        assert!(!theme.light.is_empty());
        assert!(theme.dark.is_empty());
    }

    #[test]
    fn test_nested_braces_truncate_block() {
        let css = ":root { --a: 1rem; @media (min-width: 600px) { } --b: 2rem; }";
        let theme = parse_theme_css(css);
        assert!(theme.light.contains_key("a"));
        assert!(!theme.light.contains_key("b"));
    }
}
