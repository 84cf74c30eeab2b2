//! Variable-name classification.
//!
//! Token generation routes a variable by its name before looking at its
//! value: `--primary` is a color candidate, `--radius-sm` a radius, and so
//! on. Names are matched loosely (substrings and prefixes), so one name can
//! belong to several categories at once; [`Categories`] keeps the full set
//! and the predicate helpers answer the common single-category questions.

use bitflags::bitflags;

/// Name fragments that mark a variable as a color candidate.
const COLOR_NAME_PATTERNS: &[&str] = &[
    "background",
    "foreground",
    "primary",
    "secondary",
    "accent",
    "muted",
    "destructive",
    "border",
    "input",
    "ring",
    "card",
    "popover",
    "sidebar",
    "chart",
];

bitflags! {
    /// The categories a variable name matches.
    ///
    /// # Example
    ///
    /// ```
    /// use themecss::classify::{Categories, categories};
    ///
    /// assert_eq!(categories("primary-foreground"), Categories::COLOR);
    /// assert_eq!(categories("radius-sm"), Categories::RADIUS);
    ///
    /// // Loose matching can put a name in more than one category.
    /// let both = categories("shadow-border");
    /// assert!(both.contains(Categories::SHADOW));
    /// assert!(both.contains(Categories::COLOR));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Categories: u8 {
        const COLOR = 1 << 0;
        const RADIUS = 1 << 1;
        const SHADOW = 1 << 2;
        const TYPOGRAPHY = 1 << 3;
    }
}

/// Classifies a variable name into the categories it matches.
pub fn categories(name: &str) -> Categories {
    let mut set = Categories::empty();
    if COLOR_NAME_PATTERNS
        .iter()
        .any(|pattern| name.contains(pattern))
    {
        set |= Categories::COLOR;
    }
    if name.starts_with("radius") {
        set |= Categories::RADIUS;
    }
    if name.starts_with("shadow") {
        set |= Categories::SHADOW;
    }
    if name.starts_with("text-") || name.starts_with("font-") {
        set |= Categories::TYPOGRAPHY;
    }
    set
}

/// True when the name contains one of the known color fragments.
pub fn is_color_variable(name: &str) -> bool {
    categories(name).contains(Categories::COLOR)
}

/// True when the name starts with `radius`.
pub fn is_radius_variable(name: &str) -> bool {
    categories(name).contains(Categories::RADIUS)
}

/// True when the name starts with `shadow`.
pub fn is_shadow_variable(name: &str) -> bool {
    categories(name).contains(Categories::SHADOW)
}

/// True when the name starts with `text-` or `font-`.
pub fn is_typography_variable(name: &str) -> bool {
    categories(name).contains(Categories::TYPOGRAPHY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_names() {
        for name in ["background", "primary-foreground", "chart-2", "sidebar-ring"] {
            assert!(is_color_variable(name), "{}", name);
        }
        assert!(!is_color_variable("radius-sm"));
        assert!(!is_color_variable("text-lg"));
    }

    #[test]
    fn test_prefix_categories() {
        assert!(is_radius_variable("radius"));
        assert!(is_radius_variable("radius-xl"));
        assert!(!is_radius_variable("border-radius"));

        assert!(is_shadow_variable("shadow-2xl"));
        assert!(!is_shadow_variable("drop-shadow"));

        assert!(is_typography_variable("text-base"));
        assert!(is_typography_variable("font-mono"));
        assert!(!is_typography_variable("subtext-1"));
    }

    #[test]
    fn test_overlapping_categories() {
        let set = categories("shadow-border");
        assert_eq!(set, Categories::SHADOW | Categories::COLOR);
        assert_eq!(categories("spacing-1"), Categories::empty());
    }
}
