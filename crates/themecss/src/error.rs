//! Error types for theme CSS parsing.
//!
//! The block and declaration scanners are lenient by design and never fail;
//! these errors belong to the strict entry points (`ColorValue::parse`,
//! `Unit::from_str`) that callers use outside the classification pipeline.

use thiserror::Error;

/// Errors that can occur when parsing theme values strictly.
///
/// # Examples
///
/// ```rust
/// use themecss::ColorValue;
///
/// // Named colors are not part of the supported syntax.
/// let result = ColorValue::parse("red");
/// assert!(result.is_err());
/// ```
#[derive(Error, Debug)]
pub enum ThemeCssError {
    /// The string is not one of the supported color notations
    /// (`hsl()`, `oklch()`, `rgb()`, or hex).
    #[error("Unsupported color value: {0}")]
    UnsupportedColor(String),

    /// The string is not one of the supported dimension units
    /// (`rem`, `px`, `em`, `%`).
    #[error("Unknown dimension unit: {0}")]
    UnknownUnit(String),
}
