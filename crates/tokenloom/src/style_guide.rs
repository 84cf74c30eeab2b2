//! Style-guide rendering.
//!
//! Draws one `🎨 Theme Style Guide` frame with a fixed section sequence:
//! header, color palette, typography scale, effect previews, and button
//! variants. Swatches and buttons bind their paints to the generated
//! variables through the same [`grouped_color_name`] the token batch used,
//! so the guide and the tokens can never disagree on names.

use themecss::{ColorValue, ParsedTheme, ParsedValue};

use crate::error::HostResult;
use crate::host::{DesignHost, FontRef, Rgba, Variable};
use crate::naming::grouped_color_name;
use crate::node::{AutoLayout, Effect, NodeId, NodeSpec, Padding, SolidPaint, Stroke, TextSpan, Vec2};
use crate::variables::{ModeBinding, REM_BASE};

// Layout constants.
const PADDING: f64 = 64.0;
const SECTION_GAP: f64 = 48.0;
const ITEM_GAP: f64 = 16.0;
const SWATCH_SIZE: f64 = 80.0;
const SWATCH_GAP: f64 = 24.0;

// Colors of the guide chrome itself, not of the theme.
const FRAME_BG: Rgba = Rgba::rgb(0.98, 0.98, 0.98);
const SECTION_BG: Rgba = Rgba::rgb(1.0, 1.0, 1.0);
const TEXT_COLOR: Rgba = Rgba::rgb(0.1, 0.1, 0.1);
const MUTED_TEXT: Rgba = Rgba::rgb(0.5, 0.5, 0.5);

/// Swatch groups in render order. The Base row carries the ungrouped keys;
/// every other group lists the key and its `-foreground` partner.
const PALETTE_GROUPS: [(&str, &[&str]); 8] = [
    ("Base", &["background", "foreground", "border", "input", "ring"]),
    ("Primary", &["primary", "primary-foreground"]),
    ("Secondary", &["secondary", "secondary-foreground"]),
    ("Accent", &["accent", "accent-foreground"]),
    ("Muted", &["muted", "muted-foreground"]),
    ("Destructive", &["destructive", "destructive-foreground"]),
    ("Card", &["card", "card-foreground"]),
    ("Popover", &["popover", "popover-foreground"]),
];

/// The size ramp, with the px fallback used when the theme has no entry.
const TYPE_SCALE: [(&str, &str, f64); 9] = [
    ("text-5xl", "Display", 48.0),
    ("text-4xl", "Heading 1", 36.0),
    ("text-3xl", "Heading 2", 30.0),
    ("text-2xl", "Heading 3", 24.0),
    ("text-xl", "Large", 20.0),
    ("text-lg", "Body Large", 18.0),
    ("text-base", "Body", 16.0),
    ("text-sm", "Small", 14.0),
    ("text-xs", "Extra Small", 12.0),
];

/// Radius previews with their fallback px values.
const RADIUS_PREVIEWS: [(&str, f64); 5] = [
    ("radius-sm", 6.0),
    ("radius-md", 8.0),
    ("radius", 8.0),
    ("radius-lg", 12.0),
    ("radius-xl", 16.0),
];

/// Shadow presets as (name, blur, y offset, opacity). The previews are
/// illustrative and deliberately not derived from the theme's shadow values.
const SHADOW_PRESETS: [(&str, f64, f64, f64); 5] = [
    ("sm", 2.0, 1.0, 0.05),
    ("md", 6.0, 4.0, 0.1),
    ("lg", 15.0, 10.0, 0.1),
    ("xl", 25.0, 20.0, 0.1),
    ("2xl", 50.0, 25.0, 0.25),
];

/// The five button variants: name, background key, text key, border key.
const BUTTON_VARIANTS: [(&str, Option<&str>, &str, Option<&str>); 5] = [
    ("Primary", Some("primary"), "primary-foreground", None),
    ("Secondary", Some("secondary"), "secondary-foreground", None),
    ("Destructive", Some("destructive"), "destructive-foreground", None),
    ("Outline", None, "foreground", Some("border")),
    ("Ghost", None, "foreground", None),
];

/// Render the style guide and return the root frame's id.
///
/// Fonts load up front, so every text node created afterwards only refers to
/// loaded fonts. Once the tree is complete the host is asked to focus the
/// root frame.
pub async fn generate_style_guide(
    host: &dyn DesignHost,
    theme: &ParsedTheme,
    binding: &ModeBinding,
) -> HostResult<NodeId> {
    log::debug!("Rendering style guide");

    for style in ["Regular", "Medium", "Bold"] {
        host.load_font(&inter(style)).await?;
    }

    let root = host
        .create_node(
            None,
            NodeSpec::frame("🎨 Theme Style Guide")
                .size(1200.0, 100.0)
                .fill(SolidPaint::solid(FRAME_BG))
                .layout(
                    AutoLayout::vertical()
                        .fixed_counter()
                        .padding(Padding::all(PADDING))
                        .spacing(SECTION_GAP),
                ),
        )
        .await?;

    render_header(host, &root).await?;
    render_color_palette(host, &root, theme, binding).await?;
    render_typography(host, &root, theme).await?;
    render_effects(host, &root, theme).await?;
    render_buttons(host, &root, theme, binding).await?;

    host.focus_node(&root).await?;
    Ok(root)
}

fn inter(style: &str) -> FontRef {
    FontRef::new("Inter", style)
}

/// A text node named after its content, the way text layers name themselves.
fn label(characters: &str, size: f64, style: &str, color: Rgba) -> NodeSpec {
    NodeSpec::text(characters, TextSpan::new(characters, inter(style), size))
        .fill(SolidPaint::solid(color))
}

/// Look up the variable a paint should bind to, by grouped name.
async fn find_variable(
    host: &dyn DesignHost,
    binding: &ModeBinding,
    grouped: &str,
) -> HostResult<Option<Variable>> {
    let variables = host.variables_in_collection(&binding.collection.id).await?;
    Ok(variables.into_iter().find(|variable| variable.name == grouped))
}

/// A paint for a theme color, bound to its variable when one exists.
async fn theme_paint(
    host: &dyn DesignHost,
    binding: &ModeBinding,
    name: &str,
    color: &ColorValue,
) -> HostResult<SolidPaint> {
    let mut paint = SolidPaint::solid(Rgba::from(color));
    if let Some(variable) = find_variable(host, binding, &grouped_color_name(name)).await? {
        paint = host.bind_paint(paint, &variable);
    }
    Ok(paint)
}

/// Resolved pixel value of a dimension entry in the light map.
fn theme_px(theme: &ParsedTheme, name: &str) -> Option<f64> {
    theme
        .light
        .get(name)
        .and_then(ParsedValue::as_dimension)
        .map(|dimension| dimension.px(REM_BASE))
}

async fn render_header(host: &dyn DesignHost, parent: &NodeId) -> HostResult<()> {
    let header = host
        .create_node(
            Some(parent),
            NodeSpec::frame("Header").layout(AutoLayout::horizontal()),
        )
        .await?;
    host.create_node(
        Some(&header),
        label("Theme Style Guide", 32.0, "Bold", TEXT_COLOR),
    )
    .await?;
    Ok(())
}

/// The white card every section sits in, with its title already added.
async fn render_section(
    host: &dyn DesignHost,
    parent: &NodeId,
    name: &str,
    title: &str,
) -> HostResult<NodeId> {
    let section = host
        .create_node(
            Some(parent),
            NodeSpec::frame(name)
                .stretch()
                .fill(SolidPaint::solid(SECTION_BG))
                .corner_radius(12.0)
                .effect(Effect::DropShadow {
                    color: Rgba::black(0.08),
                    offset: Vec2::new(0.0, 2.0),
                    radius: 8.0,
                    spread: 0.0,
                })
                .layout(
                    AutoLayout::vertical()
                        .fixed_counter()
                        .padding(Padding::all(32.0))
                        .spacing(24.0),
                ),
        )
        .await?;
    host.create_node(Some(&section), label(title, 20.0, "Bold", TEXT_COLOR))
        .await?;
    Ok(section)
}

async fn render_color_palette(
    host: &dyn DesignHost,
    parent: &NodeId,
    theme: &ParsedTheme,
    binding: &ModeBinding,
) -> HostResult<()> {
    let section = render_section(host, parent, "Color Palette", "Color Palette").await?;

    for (group, keys) in PALETTE_GROUPS {
        let frame = host
            .create_node(
                Some(&section),
                NodeSpec::frame(format!("{} Colors", group))
                    .layout(AutoLayout::vertical().spacing(12.0)),
            )
            .await?;
        host.create_node(Some(&frame), label(group, 14.0, "Medium", MUTED_TEXT))
            .await?;

        let row = host
            .create_node(
                Some(&frame),
                NodeSpec::frame("Swatches").layout(AutoLayout::horizontal().spacing(SWATCH_GAP)),
            )
            .await?;

        for key in keys {
            if let Some(color) = theme.light.get(*key).and_then(ParsedValue::as_color) {
                render_swatch(host, &row, binding, key, color).await?;
            }
        }
    }

    Ok(())
}

async fn render_swatch(
    host: &dyn DesignHost,
    parent: &NodeId,
    binding: &ModeBinding,
    name: &str,
    color: &ColorValue,
) -> HostResult<()> {
    let swatch = host
        .create_node(
            Some(parent),
            NodeSpec::frame(name).layout(AutoLayout::vertical().spacing(8.0)),
        )
        .await?;

    let fill = theme_paint(host, binding, name, color).await?;
    host.create_node(
        Some(&swatch),
        NodeSpec::rectangle("Color")
            .size(SWATCH_SIZE, SWATCH_SIZE)
            .corner_radius(8.0)
            .fill(fill)
            .stroke(Stroke::new(
                SolidPaint::solid(Rgba::rgb(0.0, 0.0, 0.0)).with_opacity(0.1),
                1.0,
            )),
    )
    .await?;

    host.create_node(Some(&swatch), label(name, 12.0, "Medium", TEXT_COLOR))
        .await?;
    host.create_node(Some(&swatch), label(&color.hex, 10.0, "Regular", MUTED_TEXT))
        .await?;
    Ok(())
}

async fn render_typography(
    host: &dyn DesignHost,
    parent: &NodeId,
    theme: &ParsedTheme,
) -> HostResult<()> {
    let section = render_section(host, parent, "Typography", "Typography Scale").await?;

    for (name, sample, fallback) in TYPE_SCALE {
        let size = theme_px(theme, name).unwrap_or(fallback);

        let row = host
            .create_node(
                Some(&section),
                NodeSpec::frame(name)
                    .layout(AutoLayout::horizontal().spacing(24.0).center_counter()),
            )
            .await?;
        host.create_node(Some(&row), label(sample, size, "Regular", TEXT_COLOR))
            .await?;
        host.create_node(
            Some(&row),
            label(
                &format!("--{} ({}px)", name, size),
                12.0,
                "Regular",
                MUTED_TEXT,
            ),
        )
        .await?;
    }

    if let Some(stack) = theme.light.get("font-sans").and_then(ParsedValue::as_font) {
        let family = stack.split(',').next().unwrap_or(stack).trim();
        host.create_node(
            Some(&section),
            label(&format!("Font: {}", family), 14.0, "Medium", MUTED_TEXT),
        )
        .await?;
    }

    Ok(())
}

async fn render_effects(
    host: &dyn DesignHost,
    parent: &NodeId,
    theme: &ParsedTheme,
) -> HostResult<()> {
    let section = render_section(host, parent, "Effects", "Effects").await?;

    let radius_container = host
        .create_node(
            Some(&section),
            NodeSpec::frame("Radius").layout(AutoLayout::vertical().spacing(12.0)),
        )
        .await?;
    host.create_node(
        Some(&radius_container),
        label("Border Radius", 14.0, "Medium", MUTED_TEXT),
    )
    .await?;
    let radius_row = host
        .create_node(
            Some(&radius_container),
            NodeSpec::frame("Radius Examples").layout(AutoLayout::horizontal().spacing(ITEM_GAP)),
        )
        .await?;

    for (name, fallback) in RADIUS_PREVIEWS {
        let radius = theme_px(theme, name).unwrap_or(fallback);
        let item = host
            .create_node(
                Some(&radius_row),
                NodeSpec::frame(name).layout(AutoLayout::vertical().spacing(8.0).center_counter()),
            )
            .await?;
        host.create_node(
            Some(&item),
            NodeSpec::rectangle("Rectangle")
                .size(48.0, 48.0)
                .corner_radius(radius)
                .fill(SolidPaint::solid(Rgba::rgb(0.9, 0.9, 0.95)))
                .stroke(Stroke::new(SolidPaint::solid(Rgba::rgb(0.7, 0.7, 0.8)), 1.0)),
        )
        .await?;
        let caption = name.replacen("radius-", "", 1).replacen("radius", "default", 1);
        host.create_node(Some(&item), label(&caption, 10.0, "Regular", MUTED_TEXT))
            .await?;
    }

    let shadow_container = host
        .create_node(
            Some(&section),
            NodeSpec::frame("Shadows").layout(AutoLayout::vertical().spacing(12.0)),
        )
        .await?;
    host.create_node(
        Some(&shadow_container),
        label("Shadows", 14.0, "Medium", MUTED_TEXT),
    )
    .await?;
    let shadow_row = host
        .create_node(
            Some(&shadow_container),
            NodeSpec::frame("Shadow Examples").layout(
                AutoLayout::horizontal()
                    .spacing(24.0)
                    .padding(Padding::symmetric(16.0, 0.0)),
            ),
        )
        .await?;

    for (name, blur, y, opacity) in SHADOW_PRESETS {
        let item = host
            .create_node(
                Some(&shadow_row),
                NodeSpec::frame(format!("shadow-{}", name))
                    .layout(AutoLayout::vertical().spacing(8.0).center_counter()),
            )
            .await?;
        host.create_node(
            Some(&item),
            NodeSpec::rectangle("Rectangle")
                .size(64.0, 48.0)
                .corner_radius(8.0)
                .fill(SolidPaint::solid(Rgba::rgb(1.0, 1.0, 1.0)))
                .effect(Effect::DropShadow {
                    color: Rgba::black(opacity),
                    offset: Vec2::new(0.0, y),
                    radius: blur,
                    spread: 0.0,
                }),
        )
        .await?;
        host.create_node(Some(&item), label(name, 10.0, "Regular", MUTED_TEXT))
            .await?;
    }

    Ok(())
}

async fn render_buttons(
    host: &dyn DesignHost,
    parent: &NodeId,
    theme: &ParsedTheme,
    binding: &ModeBinding,
) -> HostResult<()> {
    let section = render_section(host, parent, "Button Variants", "Button Variants").await?;
    let row = host
        .create_node(
            Some(&section),
            NodeSpec::frame("Buttons").layout(AutoLayout::horizontal().spacing(ITEM_GAP)),
        )
        .await?;

    for variant in BUTTON_VARIANTS {
        render_button(host, &row, theme, binding, variant).await?;
    }
    Ok(())
}

async fn render_button(
    host: &dyn DesignHost,
    parent: &NodeId,
    theme: &ParsedTheme,
    binding: &ModeBinding,
    variant: (&str, Option<&str>, &str, Option<&str>),
) -> HostResult<()> {
    let (name, bg, fg, border) = variant;
    let mut spec = NodeSpec::frame(format!("Button / {}", name))
        .corner_radius(8.0)
        .layout(
            AutoLayout::horizontal()
                .padding(Padding::symmetric(10.0, 16.0))
                .center_primary()
                .center_counter(),
        );

    if let Some(bg) = bg {
        if let Some(color) = theme.light.get(bg).and_then(ParsedValue::as_color) {
            let paint = theme_paint(host, binding, bg, color).await?;
            spec = spec.fill(paint);
        }
    }

    if let Some(border) = border {
        if let Some(color) = theme.light.get(border).and_then(ParsedValue::as_color) {
            spec = spec.stroke(Stroke::new(SolidPaint::solid(Rgba::from(color)), 1.0));
        }
    }

    let button = host.create_node(Some(parent), spec).await?;

    let mut text = label(name, 14.0, "Medium", TEXT_COLOR);
    if let Some(color) = theme.light.get(fg).and_then(ParsedValue::as_color) {
        let paint = theme_paint(host, binding, fg, color).await?;
        text.fills = vec![paint];
    }
    host.create_node(Some(&button), text).await?;
    Ok(())
}
