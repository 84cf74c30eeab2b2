//! # themecss - CSS Theme Parser
//!
//! Parses shadcn/Tailwind-style theme CSS (custom properties under `:root`
//! and `.dark`) into a typed, two-mode theme model. This crate provides:
//!
//! - **Parsing**: Extract per-mode variable maps from raw CSS text
//! - **Classification**: Tag each value as color, dimension, shadow, font,
//!   or unknown
//! - **Color conversion**: Normalize `hsl()`, `oklch()`, `rgb()`, and hex
//!   notations to one canonical RGBA form
//!
//! ## Quick Start
//!
//! ```rust
//! use themecss::{Value, parse_theme_css};
//!
//! let theme = parse_theme_css(
//!     r#"
//!     :root {
//!         --primary: hsl(222.2 47.4% 11.2%);
//!         --radius: 0.5rem;
//!     }
//!
//!     .dark {
//!         --primary: hsl(210 40% 98%);
//!     }
//!     "#,
//! );
//!
//! assert_eq!(theme.light.len(), 2);
//! match &theme.light["primary"].value {
//!     Value::Color(color) => assert_eq!(color.hex, "#0F172A"),
//!     other => panic!("expected a color, got {:?}", other),
//! }
//! ```
//!
//! ## What is deliberately not handled
//!
//! - Nested rules: block bodies end at the first `}`
//! - Named colors (`red`, `rebeccapurple`)
//! - `calc()` and other CSS functions; they classify as unknown
//!
//! ## Modules
//!
//! - [`parser`]: block extraction and value classification
//! - [`types`]: the theme model (colors, dimensions, tagged values)
//! - [`classify`]: variable-name category predicates
//! - [`error`]: error types for the strict parsing entry points

pub mod classify;
pub mod error;
pub mod parser;
pub mod types;

pub use error::ThemeCssError;
pub use parser::{parse_color, parse_dimension, parse_theme_css, parse_value};
pub use types::{
    ColorValue, DEFAULT_THEME_CSS, DimensionValue, ParsedTheme, ParsedValue, Unit, Value,
    ValueKind, rgb_to_hex,
};
