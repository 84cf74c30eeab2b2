//! Theme CSS parsing.
//!
//! Parsing happens in two layers:
//!
//! - [`variables`]: block extraction (`:root` / `.dark`) and declaration
//!   scanning, producing raw name/value pairs
//! - [`values`]: classification of each raw value into a
//!   [`ParsedValue`](crate::types::ParsedValue)
//!
//! The layers are deliberately forgiving. Theme CSS is pasted by hand more
//! often than it is generated, so malformed pieces are skipped instead of
//! failing the whole parse.

pub mod values;
pub mod variables;

pub use values::{parse_color, parse_dimension, parse_value};
pub use variables::{parse_theme_css, parse_variable_block};
