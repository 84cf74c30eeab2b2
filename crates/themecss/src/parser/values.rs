//! Classification of declaration values.
//!
//! Values are classified in a fixed priority order: color, dimension, shadow,
//! font, unknown. The color and dimension parses are structural; shadow and
//! font are substring heuristics, which is why order matters. A value that
//! contains `hsl(…)` anywhere is a color even if the rest of it looks like a
//! shadow, and a comma-separated value that no color notation accepts ends up
//! classified as a font stack.

use nom::{
    IResult,
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::{char, multispace0, multispace1, satisfy},
    combinator::{map, map_res, opt},
};

use crate::types::color::ColorValue;
use crate::types::dimension::{DimensionValue, Unit};
use crate::types::value::{ParsedValue, Value};

/// Parse a CSS number: digits and dots only, no sign, no exponent.
fn css_number(input: &str) -> IResult<&str, f64> {
    map_res(
        take_while1(|c: char| c.is_ascii_digit() || c == '.'),
        |s: &str| s.parse::<f64>(),
    )(input)
}

/// One comma or whitespace separator, optionally padded with whitespace.
fn list_sep(input: &str) -> IResult<&str, ()> {
    let (input, _) = multispace0(input)?;
    let (input, _) = satisfy(|c| c == ',' || c.is_whitespace())(input)?;
    let (input, _) = multispace0(input)?;
    Ok((input, ()))
}

/// Argument list of `hsl(h, s%, l%)` / `hsl(h s% l%)`, starting after the
/// opening parenthesis. The `%` signs are optional.
fn hsl_args(input: &str) -> IResult<&str, ColorValue> {
    let (input, _) = multispace0(input)?;
    let (input, h) = css_number(input)?;
    let (input, _) = list_sep(input)?;
    let (input, s) = css_number(input)?;
    let (input, _) = opt(char('%'))(input)?;
    let (input, _) = list_sep(input)?;
    let (input, l) = css_number(input)?;
    let (input, _) = opt(char('%'))(input)?;
    let (input, _) = multispace0(input)?;
    let (input, _) = char(')')(input)?;
    Ok((input, ColorValue::from_hsl(h, s, l)))
}

/// Argument list of `oklch(l c h)`; whitespace separators only.
fn oklch_args(input: &str) -> IResult<&str, ColorValue> {
    let (input, _) = multispace0(input)?;
    let (input, l) = css_number(input)?;
    let (input, _) = multispace1(input)?;
    let (input, c) = css_number(input)?;
    let (input, _) = multispace1(input)?;
    let (input, h) = css_number(input)?;
    let (input, _) = multispace0(input)?;
    let (input, _) = char(')')(input)?;
    Ok((input, ColorValue::from_oklch(l, c, h)))
}

/// Argument list of `rgb(r, g, b)` / `rgb(r g b)` on the 0-255 scale.
/// Slash-alpha notation is not accepted, so shadow colors fall through.
fn rgb_args(input: &str) -> IResult<&str, ColorValue> {
    let (input, _) = multispace0(input)?;
    let (input, r) = css_number(input)?;
    let (input, _) = list_sep(input)?;
    let (input, g) = css_number(input)?;
    let (input, _) = list_sep(input)?;
    let (input, b) = css_number(input)?;
    let (input, _) = multispace0(input)?;
    let (input, _) = char(')')(input)?;
    Ok((input, ColorValue::from_rgb_255(r, g, b)))
}

/// Byte offsets where `needle` occurs in `raw`, case-insensitively; returns
/// the input slices starting right after each occurrence.
fn after_occurrences<'a>(raw: &'a str, needle: &str) -> Vec<&'a str> {
    let lower = raw.to_ascii_lowercase();
    lower
        .match_indices(needle)
        .map(|(at, _)| &raw[at + needle.len()..])
        .collect()
}

/// Anchored hex literal: `#` followed by 3 to 8 hex digits and nothing else.
fn parse_hex(raw: &str) -> Option<ColorValue> {
    let digits = raw.strip_prefix('#')?;
    let valid = (3..=8).contains(&digits.len())
        && digits.chars().all(|c| c.is_ascii_hexdigit());
    valid.then(|| ColorValue::from_hex_digits(digits))
}

/// Parses any supported color notation out of a raw value.
///
/// The function notations may sit anywhere inside the string (the first
/// occurrence that parses wins); hex must be the entire string. Returns
/// `None` for everything else, including named colors.
pub fn parse_color(raw: &str) -> Option<ColorValue> {
    for rest in after_occurrences(raw, "hsl(") {
        if let Ok((_, color)) = hsl_args(rest) {
            return Some(color);
        }
    }
    for rest in after_occurrences(raw, "oklch(") {
        if let Ok((_, color)) = oklch_args(rest) {
            return Some(color);
        }
    }
    for rest in after_occurrences(raw, "rgb(") {
        if let Ok((_, color)) = rgb_args(rest) {
            return Some(color);
        }
    }
    parse_hex(raw)
}

fn dimension(input: &str) -> IResult<&str, DimensionValue> {
    let (input, value) = css_number(input)?;
    let (input, unit) = alt((
        map(tag("rem"), |_| Unit::Rem),
        map(tag("px"), |_| Unit::Px),
        map(tag("em"), |_| Unit::Em),
        map(char('%'), |_| Unit::Percent),
    ))(input)?;
    Ok((input, DimensionValue { value, unit }))
}

/// Parses a dimension such as `0.5rem`. Anchored: leading or trailing
/// characters (including whitespace) make the parse fail.
pub fn parse_dimension(raw: &str) -> Option<DimensionValue> {
    match dimension(raw) {
        Ok(("", parsed)) => Some(parsed),
        _ => None,
    }
}

/// Classifies a single declaration value.
pub fn parse_value(raw: &str) -> ParsedValue {
    if let Some(color) = parse_color(raw) {
        return ParsedValue::new(raw, Value::Color(color));
    }
    if let Some(parsed) = parse_dimension(raw) {
        return ParsedValue::new(raw, Value::Dimension(parsed));
    }
    if raw.contains("rgb") && raw.contains("px") {
        return ParsedValue::new(raw, Value::Shadow(raw.to_string()));
    }
    if raw.contains(',') || raw.contains("sans") || raw.contains("serif") || raw.contains("mono") {
        return ParsedValue::new(raw, Value::Font(raw.to_string()));
    }
    ParsedValue::new(raw, Value::Unknown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::value::ValueKind;

    #[test]
    fn test_hsl_forms() {
        let spaces = parse_color("hsl(222.2 47.4% 11.2%)").unwrap();
        let commas = parse_color("hsl(222.2, 47.4%, 11.2%)").unwrap();
        assert_eq!(spaces, commas);
        assert_eq!(spaces.hex, "#0F172A");

        let bare = parse_color("hsl(210, 40, 98)").unwrap();
        assert_eq!(bare, parse_color("hsl(210 40% 98%)").unwrap());
    }

    #[test]
    fn test_function_notation_found_anywhere() {
        let color = parse_color("0 1px 2px hsl(0 0% 0%)").unwrap();
        assert_eq!(color.hex, "#000000");
        assert!(parse_color("HSL(120 100% 50%)").is_some());
    }

    #[test]
    fn test_rgb_forms() {
        let color = parse_color("rgb(255 255 255)").unwrap();
        assert_eq!(color.hex, "#FFFFFF");
        assert_eq!(parse_color("rgb(30, 144, 255)").unwrap().hex, "#1E90FF");

        // Slash-alpha shadow colors are not plain rgb() triples.
        assert!(parse_color("rgb(0 0 0 / 0.05)").is_none());
    }

    #[test]
    fn test_hex_is_anchored() {
        assert!(parse_color("#1E90FF").is_some());
        assert!(parse_color(" #1E90FF").is_none());
        assert!(parse_color("#1E90FF ").is_none());
        assert!(parse_color("#12").is_none());
        assert!(parse_color("#123456789").is_none());
        assert!(parse_color("#12345g").is_none());
    }

    #[test]
    fn test_named_colors_unsupported() {
        assert!(parse_color("red").is_none());
        assert!(parse_color("transparent").is_none());
    }

    #[test]
    fn test_dimension_units() {
        assert_eq!(
            parse_dimension("0.5rem"),
            Some(DimensionValue::new(0.5, Unit::Rem))
        );
        assert_eq!(
            parse_dimension("12px"),
            Some(DimensionValue::new(12.0, Unit::Px))
        );
        assert_eq!(
            parse_dimension("1.5em"),
            Some(DimensionValue::new(1.5, Unit::Em))
        );
        assert_eq!(
            parse_dimension("50%"),
            Some(DimensionValue::new(50.0, Unit::Percent))
        );
    }

    #[test]
    fn test_dimension_rejects_padding_and_signs() {
        assert!(parse_dimension(" 1rem").is_none());
        assert!(parse_dimension("1rem ").is_none());
        assert!(parse_dimension("-1px").is_none());
        assert!(parse_dimension("1 rem").is_none());
        assert!(parse_dimension("1.2.3px").is_none());
    }

    #[test]
    fn test_classification_priority() {
        assert_eq!(parse_value("hsl(0 0% 100%)").kind(), ValueKind::Color);
        assert_eq!(parse_value("0.75rem").kind(), ValueKind::Dimension);
        assert_eq!(
            parse_value("0 1px 3px 0 rgb(0 0 0 / 0.1), 0 1px 2px -1px rgb(0 0 0 / 0.1)").kind(),
            ValueKind::Shadow
        );
        assert_eq!(
            parse_value("Poppins, ui-sans-serif, system-ui, sans-serif").kind(),
            ValueKind::Font
        );
        assert_eq!(parse_value("sans").kind(), ValueKind::Font);
        assert_eq!(parse_value("12deg").kind(), ValueKind::Unknown);
        assert_eq!(parse_value("calc(1rem + 2px)").kind(), ValueKind::Unknown);
    }

    #[test]
    fn test_comma_separated_oklch_classifies_as_font() {
        // oklch() takes whitespace separators only; with commas the color
        // parse fails and the comma heuristic wins.
        let value = parse_value("oklch(0.5, 0.1, 20)");
        assert_eq!(value.kind(), ValueKind::Font);
    }

    #[test]
    fn test_known_oklch_values() {
        let white = parse_color("oklch(1 0 0)").unwrap();
        assert_eq!(white.hex, "#FFFFFF");
        let black = parse_color("oklch(0 0 0)").unwrap();
        assert_eq!(black.hex, "#000000");
    }
}
