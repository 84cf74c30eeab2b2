//! Dimension values with CSS units.

use std::fmt;
use std::str::FromStr;

use crate::error::ThemeCssError;

/// Units accepted for dimension declarations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Unit {
    Rem,
    Px,
    Em,
    Percent,
}

impl Unit {
    /// The unit's suffix as written in CSS.
    pub fn suffix(&self) -> &'static str {
        match self {
            Unit::Rem => "rem",
            Unit::Px => "px",
            Unit::Em => "em",
            Unit::Percent => "%",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.suffix())
    }
}

impl FromStr for Unit {
    type Err = ThemeCssError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rem" => Ok(Unit::Rem),
            "px" => Ok(Unit::Px),
            "em" => Ok(Unit::Em),
            "%" => Ok(Unit::Percent),
            other => Err(ThemeCssError::UnknownUnit(other.to_string())),
        }
    }
}

/// A parsed dimension such as `0.5rem` or `12px`.
///
/// The numeric value is stored as written; nothing is resolved to pixels at
/// parse time. Consumers that need pixels call [`px`](DimensionValue::px)
/// with their rem base.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DimensionValue {
    pub value: f64,
    pub unit: Unit,
}

impl DimensionValue {
    pub fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }

    /// Resolves the dimension against a rem base. Only `rem` values scale;
    /// every other unit passes its number through unchanged.
    pub fn px(&self, rem_base: f64) -> f64 {
        match self.unit {
            Unit::Rem => self.value * rem_base,
            _ => self.value,
        }
    }
}

impl fmt::Display for DimensionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_round_trip() {
        for unit in [Unit::Rem, Unit::Px, Unit::Em, Unit::Percent] {
            assert_eq!(unit.suffix().parse::<Unit>().unwrap(), unit);
        }
        assert!("pt".parse::<Unit>().is_err());
    }

    #[test]
    fn test_px_scales_rem_only() {
        assert_eq!(DimensionValue::new(0.5, Unit::Rem).px(16.0), 8.0);
        assert_eq!(DimensionValue::new(12.0, Unit::Px).px(16.0), 12.0);
        assert_eq!(DimensionValue::new(1.5, Unit::Em).px(16.0), 1.5);
        assert_eq!(DimensionValue::new(50.0, Unit::Percent).px(16.0), 50.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(DimensionValue::new(0.75, Unit::Rem).to_string(), "0.75rem");
        assert_eq!(DimensionValue::new(50.0, Unit::Percent).to_string(), "50%");
    }
}
