//! # tokenloom - Design tokens from CSS themes
//!
//! Takes a two-mode theme parsed by [`themecss`] and materializes it inside
//! a design document: a "Theme" variable collection with Light and Dark
//! modes, plus a rendered style-guide page showing palette, typography,
//! effects, and button variants.
//!
//! All document access goes through the [`DesignHost`] trait, so the same
//! pipeline runs against a real editor bridge or the bundled [`MemoryHost`].
//!
//! ```ignore
//! let host = MemoryHost::new();
//! let theme = parse_theme_css(css);
//!
//! let batch = create_variables_from_theme(&host, &theme).await?;
//! generate_style_guide(&host, &theme, &batch.binding).await?;
//! println!("created {} variables", batch.variable_count);
//! ```
//!
//! Interactive use goes through [`Session`], which speaks the plugin-style
//! message protocol (`GENERATE_THEME` in, `PROGRESS`/`GENERATION_COMPLETE`
//! out) over tokio channels.

pub mod error;
pub mod host;
mod log_init;
pub mod memory;
pub mod naming;
pub mod node;
pub mod session;
pub mod style_guide;
pub mod variables;

pub use error::{HostError, HostResult, PipelineError};
pub use host::{
    Collection, CollectionId, DesignHost, FontRef, Mode, ModeId, Rgba, Variable, VariableId,
    VariableKind, VariableValue,
};
pub use log_init::init_logger;
pub use memory::{HostOp, MemoryHost};
pub use naming::grouped_color_name;
pub use node::{
    AutoLayout, AxisAlign, Effect, LayoutDirection, NodeId, NodeKind, NodeSpec, Padding,
    SizingMode, SolidPaint, Stroke, TextSpan, Vec2,
};
pub use session::{Command, Event, Session};
pub use style_guide::generate_style_guide;
pub use variables::{
    COLLECTION_NAME, DARK_MODE_NAME, LIGHT_MODE_NAME, ModeBinding, REM_BASE, TokenBatch,
    clear_theme_variables, create_variables_from_theme, ensure_collection, ensure_variable,
    existing_theme_variables,
};

// Re-export the log crate so users can use tokenloom::log::info!, etc.
pub use log;
pub use themecss::{DEFAULT_THEME_CSS, ParsedTheme, parse_theme_css};
