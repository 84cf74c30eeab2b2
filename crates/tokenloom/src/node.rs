//! Scene-graph building blocks handed to the host.
//!
//! A [`NodeSpec`] describes one node the way the style guide wants it drawn;
//! the host materializes it and hands back an opaque [`NodeId`]. Specs are
//! plain data, so tests can assert on exactly what was requested.

use std::fmt;

use crate::host::{FontRef, Rgba, VariableId};

/// Opaque handle to a created node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeId(pub String);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What kind of node to create.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Frame,
    Rectangle,
    Text,
}

/// A 2D offset or extent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Per-edge padding of an auto-layout frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Padding {
    pub const fn all(value: f64) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    pub const fn symmetric(vertical: f64, horizontal: f64) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }
}

/// Main axis of an auto-layout frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutDirection {
    Horizontal,
    Vertical,
}

/// How one axis of an auto-layout frame sizes itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizingMode {
    /// Hug contents.
    Auto,
    /// Keep the explicit size.
    Fixed,
}

/// Child alignment along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisAlign {
    Min,
    Center,
}

/// Auto-layout settings of a frame.
#[derive(Debug, Clone, PartialEq)]
pub struct AutoLayout {
    pub direction: LayoutDirection,
    pub padding: Padding,
    pub item_spacing: f64,
    pub primary_sizing: SizingMode,
    pub counter_sizing: SizingMode,
    pub primary_align: AxisAlign,
    pub counter_align: AxisAlign,
}

impl AutoLayout {
    /// Vertical hug-contents layout.
    pub fn vertical() -> Self {
        Self::directed(LayoutDirection::Vertical)
    }

    /// Horizontal hug-contents layout.
    pub fn horizontal() -> Self {
        Self::directed(LayoutDirection::Horizontal)
    }

    fn directed(direction: LayoutDirection) -> Self {
        Self {
            direction,
            padding: Padding::default(),
            item_spacing: 0.0,
            primary_sizing: SizingMode::Auto,
            counter_sizing: SizingMode::Auto,
            primary_align: AxisAlign::Min,
            counter_align: AxisAlign::Min,
        }
    }

    pub fn padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    pub fn spacing(mut self, spacing: f64) -> Self {
        self.item_spacing = spacing;
        self
    }

    /// Fix the counter axis, e.g. an explicit width on a vertical frame.
    pub fn fixed_counter(mut self) -> Self {
        self.counter_sizing = SizingMode::Fixed;
        self
    }

    pub fn center_primary(mut self) -> Self {
        self.primary_align = AxisAlign::Center;
        self
    }

    pub fn center_counter(mut self) -> Self {
        self.counter_align = AxisAlign::Center;
        self
    }
}

/// A solid paint, optionally driven by a variable.
#[derive(Debug, Clone, PartialEq)]
pub struct SolidPaint {
    pub color: Rgba,
    pub opacity: Option<f64>,
    pub bound_variable: Option<VariableId>,
}

impl SolidPaint {
    pub fn solid(color: Rgba) -> Self {
        Self {
            color,
            opacity: None,
            bound_variable: None,
        }
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    /// Drive the paint from a variable; the static color stays as fallback.
    pub fn bound_to(mut self, variable: VariableId) -> Self {
        self.bound_variable = Some(variable);
        self
    }
}

/// An outline stroke.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub paint: SolidPaint,
    pub weight: f64,
}

impl Stroke {
    pub fn new(paint: SolidPaint, weight: f64) -> Self {
        Self { paint, weight }
    }
}

/// A visual effect applied to a node.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    DropShadow {
        color: Rgba,
        offset: Vec2,
        radius: f64,
        spread: f64,
    },
}

/// Text content of a text node.
#[derive(Debug, Clone, PartialEq)]
pub struct TextSpan {
    pub characters: String,
    pub font: FontRef,
    pub font_size: f64,
}

impl TextSpan {
    pub fn new(characters: impl Into<String>, font: FontRef, font_size: f64) -> Self {
        Self {
            characters: characters.into(),
            font,
            font_size,
        }
    }
}

/// Full description of a node to create.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeSpec {
    pub name: String,
    pub kind: NodeKind,
    pub layout: Option<AutoLayout>,
    pub size: Option<Vec2>,
    pub corner_radius: Option<f64>,
    pub fills: Vec<SolidPaint>,
    pub strokes: Vec<Stroke>,
    pub effects: Vec<Effect>,
    pub text: Option<TextSpan>,
    /// Stretch across the counter axis of the parent's auto-layout.
    pub stretch: bool,
}

impl NodeSpec {
    /// An empty, unfilled frame.
    pub fn frame(name: impl Into<String>) -> Self {
        Self::bare(name, NodeKind::Frame)
    }

    /// A rectangle.
    pub fn rectangle(name: impl Into<String>) -> Self {
        Self::bare(name, NodeKind::Rectangle)
    }

    /// A text node. The span's font must already be loaded on the host.
    pub fn text(name: impl Into<String>, span: TextSpan) -> Self {
        let mut spec = Self::bare(name, NodeKind::Text);
        spec.text = Some(span);
        spec
    }

    fn bare(name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            layout: None,
            size: None,
            corner_radius: None,
            fills: Vec::new(),
            strokes: Vec::new(),
            effects: Vec::new(),
            text: None,
            stretch: false,
        }
    }

    pub fn layout(mut self, layout: AutoLayout) -> Self {
        self.layout = Some(layout);
        self
    }

    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.size = Some(Vec2::new(width, height));
        self
    }

    pub fn corner_radius(mut self, radius: f64) -> Self {
        self.corner_radius = Some(radius);
        self
    }

    pub fn fill(mut self, paint: SolidPaint) -> Self {
        self.fills.push(paint);
        self
    }

    pub fn stroke(mut self, stroke: Stroke) -> Self {
        self.strokes.push(stroke);
        self
    }

    pub fn effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    pub fn stretch(mut self) -> Self {
        self.stretch = true;
        self
    }
}
