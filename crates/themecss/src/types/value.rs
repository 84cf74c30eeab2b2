//! The tagged value a declaration classifies into.

use std::fmt;

use super::color::ColorValue;
use super::dimension::DimensionValue;

/// The classified payload of a declaration value.
///
/// Shadow and font values stay textual: shadows are rendered from fixed
/// presets downstream, and font stacks are split only when a variable is
/// created from them.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Color(ColorValue),
    Dimension(DimensionValue),
    Shadow(String),
    Font(String),
    Unknown,
}

/// Discriminant of [`Value`], handy for logging and assertions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueKind {
    Color,
    Dimension,
    Shadow,
    Font,
    Unknown,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Color => "color",
            ValueKind::Dimension => "dimension",
            ValueKind::Shadow => "shadow",
            ValueKind::Font => "font",
            ValueKind::Unknown => "unknown",
        };
        write!(f, "{}", name)
    }
}

/// A declaration value: the raw text as written plus its classification.
#[derive(Clone, Debug, PartialEq)]
pub struct ParsedValue {
    pub raw: String,
    pub value: Value,
}

impl ParsedValue {
    pub fn new(raw: impl Into<String>, value: Value) -> Self {
        Self {
            raw: raw.into(),
            value,
        }
    }

    pub fn kind(&self) -> ValueKind {
        match self.value {
            Value::Color(_) => ValueKind::Color,
            Value::Dimension(_) => ValueKind::Dimension,
            Value::Shadow(_) => ValueKind::Shadow,
            Value::Font(_) => ValueKind::Font,
            Value::Unknown => ValueKind::Unknown,
        }
    }

    pub fn as_color(&self) -> Option<&ColorValue> {
        match &self.value {
            Value::Color(color) => Some(color),
            _ => None,
        }
    }

    pub fn as_dimension(&self) -> Option<&DimensionValue> {
        match &self.value {
            Value::Dimension(dimension) => Some(dimension),
            _ => None,
        }
    }

    pub fn as_font(&self) -> Option<&str> {
        match &self.value {
            Value::Font(stack) => Some(stack),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_matches_value() {
        let color = ParsedValue::new("#fff", Value::Color(ColorValue::from_hex_digits("fff")));
        assert_eq!(color.kind(), ValueKind::Color);
        assert!(color.as_color().is_some());
        assert!(color.as_dimension().is_none());

        let unknown = ParsedValue::new("12deg", Value::Unknown);
        assert_eq!(unknown.kind(), ValueKind::Unknown);
        assert_eq!(unknown.raw, "12deg");
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(ValueKind::Dimension.to_string(), "dimension");
        assert_eq!(ValueKind::Unknown.to_string(), "unknown");
    }
}
