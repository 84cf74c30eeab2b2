//! Shared token naming.
//!
//! The token generator and the style-guide renderer must agree on variable
//! names, otherwise swatches would silently lose their bindings. Both route
//! through [`grouped_color_name`].

/// Substring groups, checked in order once the prefix routes have passed.
const COLOR_GROUPS: [&str; 7] = [
    "primary",
    "secondary",
    "destructive",
    "accent",
    "muted",
    "card",
    "popover",
];

/// Slash-grouped variable name for a color, e.g. `primary` becomes
/// `colors/primary/primary` and `background` becomes
/// `colors/base/background`.
///
/// `sidebar-` and `chart-` prefixes route to their own groups before any
/// substring match, so `sidebar-primary` lands under sidebar, not primary.
pub fn grouped_color_name(name: &str) -> String {
    if name.starts_with("sidebar-") {
        return format!("colors/sidebar/{}", name);
    }
    if name.starts_with("chart-") {
        return format!("colors/chart/{}", name);
    }
    for group in COLOR_GROUPS {
        if name.contains(group) {
            return format!("colors/{}/{}", group, name);
        }
    }
    format!("colors/base/{}", name)
}
