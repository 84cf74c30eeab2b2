//! The design-canvas host boundary.
//!
//! Everything the pipeline does to the outside world goes through
//! [`DesignHost`]: variable-collection bookkeeping on one side, scene-graph
//! construction on the other. A session issues host calls strictly one at a
//! time and awaits each to completion, so implementations never see
//! concurrent calls from the same run.

use std::fmt;

use async_trait::async_trait;
use themecss::ColorValue;

use crate::error::HostResult;
use crate::node::{NodeId, NodeSpec, SolidPaint};

/// Opaque handle to a variable collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CollectionId(pub String);

impl fmt::Display for CollectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque handle to a mode column of a collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModeId(pub String);

impl fmt::Display for ModeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque handle to a variable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VariableId(pub String);

impl fmt::Display for VariableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An RGBA color in the host's `0..=1` channel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from three channels.
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Black at the given alpha, the usual shadow color.
    pub const fn black(a: f64) -> Self {
        Self::new(0.0, 0.0, 0.0, a)
    }
}

impl From<&ColorValue> for Rgba {
    fn from(color: &ColorValue) -> Self {
        Self::new(color.r, color.g, color.b, color.a)
    }
}

/// One mode column of a collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mode {
    pub id: ModeId,
    pub name: String,
}

/// A variable collection with its modes.
///
/// A collection always carries at least one mode; hosts create collections
/// with a single default mode and offer no way to remove the last one.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection {
    pub id: CollectionId,
    pub name: String,
    pub modes: Vec<Mode>,
}

impl Collection {
    /// Find a mode by display name.
    pub fn mode_named(&self, name: &str) -> Option<&Mode> {
        self.modes.iter().find(|mode| mode.name == name)
    }
}

/// Resolved type of a variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableKind {
    Color,
    Float,
    Text,
}

/// A value written into one mode of a variable.
#[derive(Debug, Clone, PartialEq)]
pub enum VariableValue {
    Color(Rgba),
    Float(f64),
    Text(String),
}

impl VariableValue {
    /// The kind this value satisfies.
    pub fn kind(&self) -> VariableKind {
        match self {
            VariableValue::Color(_) => VariableKind::Color,
            VariableValue::Float(_) => VariableKind::Float,
            VariableValue::Text(_) => VariableKind::Text,
        }
    }
}

/// A design token living inside a collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    pub id: VariableId,
    pub name: String,
    pub collection: CollectionId,
    pub kind: VariableKind,
}

/// A font family/style pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FontRef {
    pub family: String,
    pub style: String,
}

impl FontRef {
    pub fn new(family: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            style: style.into(),
        }
    }
}

/// The injected canvas/document API.
///
/// The pipeline awaits every call to completion before issuing the next one;
/// implementations may assume strictly sequential access from a session and
/// need no internal ordering of their own.
#[async_trait]
pub trait DesignHost: Send + Sync {
    /// Look up a local collection by display name.
    async fn collection_named(&self, name: &str) -> HostResult<Option<Collection>>;

    /// Create a collection. The new collection starts with a single default
    /// mode whose name is host-defined.
    async fn create_collection(&self, name: &str) -> HostResult<Collection>;

    /// Rename a mode of a collection.
    async fn rename_mode(
        &self,
        collection: &CollectionId,
        mode: &ModeId,
        name: &str,
    ) -> HostResult<()>;

    /// Add a mode and return its id. Hosts may refuse past their mode limit.
    async fn add_mode(&self, collection: &CollectionId, name: &str) -> HostResult<ModeId>;

    /// All variables belonging to a collection.
    async fn variables_in_collection(&self, collection: &CollectionId)
    -> HostResult<Vec<Variable>>;

    /// Create a variable in a collection.
    async fn create_variable(
        &self,
        collection: &CollectionId,
        name: &str,
        kind: VariableKind,
    ) -> HostResult<Variable>;

    /// Write a variable's value for one mode. The value must match the
    /// variable's kind.
    async fn set_mode_value(
        &self,
        variable: &VariableId,
        mode: &ModeId,
        value: VariableValue,
    ) -> HostResult<()>;

    /// Delete a variable.
    async fn remove_variable(&self, variable: &VariableId) -> HostResult<()>;

    /// Make a font available. Must complete before any text node using the
    /// font is created.
    async fn load_font(&self, font: &FontRef) -> HostResult<()>;

    /// Create a node, appended to `parent` when given and top-level
    /// otherwise, and return its id.
    async fn create_node(&self, parent: Option<&NodeId>, spec: NodeSpec) -> HostResult<NodeId>;

    /// Bring a node into view (selection, scroll, zoom). Hosts without a
    /// viewport treat this as a no-op.
    async fn focus_node(&self, node: &NodeId) -> HostResult<()>;

    /// Attach a variable to a paint, keeping the static color as fallback.
    fn bind_paint(&self, paint: SolidPaint, variable: &Variable) -> SolidPaint {
        paint.bound_to(variable.id.clone())
    }
}
