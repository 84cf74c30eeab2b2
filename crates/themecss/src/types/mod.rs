pub mod color;
pub mod dimension;
pub mod theme;
pub mod value;

pub use color::{ColorValue, HslComponents, OklchComponents, rgb_to_hex};
pub use dimension::{DimensionValue, Unit};
pub use theme::{DEFAULT_THEME_CSS, ParsedTheme};
pub use value::{ParsedValue, Value, ValueKind};
