//! Canonical RGBA color value with conversion from CSS notations.
//!
//! This module provides the [`ColorValue`] type that every color in a theme
//! normalizes to. Channels are kept as floats in `[0, 1]` so the value can be
//! handed to a design canvas without further scaling, and the uppercase
//! `#RRGGBB` string shown in labels is derived from the channels at
//! construction time.
//!
//! ## Supported Color Formats
//!
//! - **HSL**: `hsl(222.2 47.4% 11.2%)` or `hsl(222.2, 47.4%, 11.2%)`
//! - **OKLCH**: `oklch(0.9882 0.0024 95.7755)` (space-separated)
//! - **RGB**: `rgb(255, 255, 255)` or `rgb(255 255 255)` (0-255 scale)
//! - **Hex**: `#RGB`, `#RRGGBB` (other digit counts degrade to black)
//!
//! Named colors are deliberately not supported; a theme written with them
//! classifies those declarations as unknown and they are skipped downstream.

use std::fmt;

use crate::error::ThemeCssError;

/// HSL components as written in the source. `h` is in degrees, `s` and `l`
/// stay on the 0-100 scale of the declaration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HslComponents {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

/// OKLCH components as written in the source (`l` 0-1, `c` chroma, `h` degrees).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OklchComponents {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

/// A canonical RGBA color.
///
/// All constructors clamp the channels to `[0, 1]` and derive [`hex`]
/// via [`rgb_to_hex`], so `color.hex == rgb_to_hex(color.r, color.g,
/// color.b)` holds for every value that can exist.
///
/// The optional [`hsl`] and [`oklch`] fields keep the components the color
/// was written with, for diagnostics and round-trip display.
///
/// [`hex`]: ColorValue::hex
/// [`hsl`]: ColorValue::hsl
/// [`oklch`]: ColorValue::oklch
///
/// # Examples
///
/// ```
/// use themecss::ColorValue;
///
/// let color = ColorValue::parse("hsl(0 0% 100%)").unwrap();
/// assert_eq!(color.hex, "#FFFFFF");
/// assert_eq!(color.a, 1.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ColorValue {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
    pub hex: String,
    pub hsl: Option<HslComponents>,
    pub oklch: Option<OklchComponents>,
}

impl ColorValue {
    /// Creates a color from channels in `[0, 1]`. Out-of-range values clamp.
    pub fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        let (r, g, b) = (clamp01(r), clamp01(g), clamp01(b));
        Self {
            r,
            g,
            b,
            a: clamp01(a),
            hex: rgb_to_hex(r, g, b),
            hsl: None,
            oklch: None,
        }
    }

    /// Creates an opaque color from `hsl()` components (`s` and `l` on the
    /// 0-100 scale), recording the source components.
    pub fn from_hsl(h: f64, s: f64, l: f64) -> Self {
        let (r, g, b) = hsl_to_rgb(h, s / 100.0, l / 100.0);
        Self {
            hsl: Some(HslComponents { h, s, l }),
            ..Self::rgba(r, g, b, 1.0)
        }
    }

    /// Creates an opaque color from `oklch()` components, recording the
    /// source components. Out-of-gamut results clamp per channel.
    pub fn from_oklch(l: f64, c: f64, h: f64) -> Self {
        let (r, g, b) = oklch_to_rgb(l, c, h);
        Self {
            oklch: Some(OklchComponents { l, c, h }),
            ..Self::rgba(r, g, b, 1.0)
        }
    }

    /// Creates an opaque color from `rgb()` components on the 0-255 scale.
    pub fn from_rgb_255(r: f64, g: f64, b: f64) -> Self {
        Self::rgba(r / 255.0, g / 255.0, b / 255.0, 1.0)
    }

    /// Creates an opaque color from the digits of a hex literal (no `#`).
    ///
    /// Three digits expand nibble-wise (`abc` reads as `aabbcc`), six digits
    /// read as channel pairs. Any other length degrades to opaque black
    /// rather than failing; malformed colors are tolerated, not fatal.
    pub fn from_hex_digits(digits: &str) -> Self {
        let nibbles: Vec<u32> = digits.chars().filter_map(|c| c.to_digit(16)).collect();
        let channels = match (digits.len(), nibbles.as_slice()) {
            (3, [r, g, b]) => Some((expand_nibble(*r), expand_nibble(*g), expand_nibble(*b))),
            (6, [r1, r0, g1, g0, b1, b0]) => Some((
                f64::from(r1 * 16 + r0),
                f64::from(g1 * 16 + g0),
                f64::from(b1 * 16 + b0),
            )),
            _ => None,
        };
        let (r, g, b) = channels.unwrap_or((0.0, 0.0, 0.0));
        Self::from_rgb_255(r, g, b)
    }

    /// Parses any supported color notation, strictly.
    ///
    /// This is the fallible counterpart of the classification pipeline: where
    /// [`parse_value`](crate::parser::parse_value) silently classifies
    /// non-colors as other kinds, this returns an error for anything that is
    /// not a color.
    ///
    /// # Examples
    ///
    /// ```
    /// use themecss::ColorValue;
    ///
    /// let navy = ColorValue::parse("#1E90FF").unwrap();
    /// assert_eq!(navy.hex, "#1E90FF");
    /// assert!(ColorValue::parse("0.5rem").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self, ThemeCssError> {
        crate::parser::parse_color(raw)
            .ok_or_else(|| ThemeCssError::UnsupportedColor(raw.to_string()))
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hex)
    }
}

/// Formats `[0, 1]` channels as an uppercase `#RRGGBB` string.
///
/// Each channel is scaled to 0-255 and rounded to the nearest integer, so a
/// color built from a 6-digit hex literal formats back to the same literal.
pub fn rgb_to_hex(r: f64, g: f64, b: f64) -> String {
    let byte = |c: f64| (c * 255.0).round() as u8;
    format!("#{:02X}{:02X}{:02X}", byte(r), byte(g), byte(b))
}

fn clamp01(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

fn expand_nibble(n: u32) -> f64 {
    f64::from(n * 16 + n)
}

/// HSL to RGB. `h` in degrees, `s` and `l` in `[0, 1]`; returns channels in
/// `[0, 1]`. A hue outside `[0, 360)` falls through every sector and yields
/// the lightness offset alone.
fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = if (0.0..60.0).contains(&h) {
        (c, x, 0.0)
    } else if (60.0..120.0).contains(&h) {
        (x, c, 0.0)
    } else if (120.0..180.0).contains(&h) {
        (0.0, c, x)
    } else if (180.0..240.0).contains(&h) {
        (0.0, x, c)
    } else if (240.0..300.0).contains(&h) {
        (x, 0.0, c)
    } else if (300.0..360.0).contains(&h) {
        (c, 0.0, x)
    } else {
        (0.0, 0.0, 0.0)
    };

    (clamp01(r + m), clamp01(g + m), clamp01(b + m))
}

/// OKLCH to RGB through OKLab and linear sRGB (Björn Ottosson's matrices).
fn oklch_to_rgb(l: f64, c: f64, h: f64) -> (f64, f64, f64) {
    let h_rad = h.to_radians();
    let a = c * h_rad.cos();
    let b = c * h_rad.sin();

    let l_ = l + 0.3963377774 * a + 0.2158037573 * b;
    let m_ = l - 0.1055613458 * a - 0.0638541728 * b;
    let s_ = l - 0.0894841775 * a - 1.2914855480 * b;

    let l3 = l_ * l_ * l_;
    let m3 = m_ * m_ * m_;
    let s3 = s_ * s_ * s_;

    let r = 4.0767416621 * l3 - 3.3077115913 * m3 + 0.2309699292 * s3;
    let g = -1.2684380046 * l3 + 2.6097574011 * m3 - 0.3413193965 * s3;
    let b = -0.0041960863 * l3 - 0.7034186147 * m3 + 1.7076147010 * s3;

    (
        clamp01(linear_to_srgb(r)),
        clamp01(linear_to_srgb(g)),
        clamp01(linear_to_srgb(b)),
    )
}

/// Gamma-encodes one linear sRGB channel.
fn linear_to_srgb(x: f64) -> f64 {
    if x <= 0.0031308 {
        12.92 * x
    } else {
        1.055 * x.powf(1.0 / 2.4) - 0.055
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    // ==================== HEX ====================

    #[test]
    fn test_hex_6_digit() {
        let color = ColorValue::from_hex_digits("1E90FF");
        assert_close(color.r, 30.0 / 255.0);
        assert_close(color.g, 144.0 / 255.0);
        assert_close(color.b, 1.0);
        assert_eq!(color.hex, "#1E90FF");
        assert_eq!(color.a, 1.0);
    }

    #[test]
    fn test_hex_3_digit_expands() {
        let color = ColorValue::from_hex_digits("abc");
        assert_close(color.r, 170.0 / 255.0);
        assert_close(color.g, 187.0 / 255.0);
        assert_close(color.b, 204.0 / 255.0);
        assert_eq!(color.hex, "#AABBCC");
    }

    #[test]
    fn test_hex_degenerate_lengths_degrade_to_black() {
        for digits in ["abcd", "12345", "1234567", "12345678"] {
            let color = ColorValue::from_hex_digits(digits);
            assert_eq!((color.r, color.g, color.b), (0.0, 0.0, 0.0));
            assert_eq!(color.hex, "#000000");
        }
    }

    #[test]
    fn test_hex_round_trip() {
        for hex in ["#000000", "#FFFFFF", "#1E90FF", "#0A141E", "#C81E32"] {
            let color = ColorValue::from_hex_digits(&hex[1..]);
            assert_eq!(rgb_to_hex(color.r, color.g, color.b), *hex);
            assert_eq!(color.hex, *hex);
        }
    }

    // ==================== HSL ====================

    #[test]
    fn test_hsl_primaries() {
        assert_eq!(ColorValue::from_hsl(0.0, 100.0, 50.0).hex, "#FF0000");
        assert_eq!(ColorValue::from_hsl(120.0, 100.0, 50.0).hex, "#00FF00");
        assert_eq!(ColorValue::from_hsl(240.0, 100.0, 50.0).hex, "#0000FF");
    }

    #[test]
    fn test_hsl_grays() {
        let white = ColorValue::from_hsl(0.0, 0.0, 100.0);
        assert_eq!(white.hex, "#FFFFFF");
        let ten_percent = ColorValue::from_hsl(0.0, 0.0, 10.0);
        assert_eq!(ten_percent.hex, "#1A1A1A");
    }

    #[test]
    fn test_hsl_channels_stay_in_range() {
        for h in (0..360).step_by(15) {
            for s in [0.0, 25.0, 50.0, 75.0, 100.0] {
                for l in [0.0, 25.0, 50.0, 75.0, 100.0] {
                    let color = ColorValue::from_hsl(f64::from(h), s, l);
                    for channel in [color.r, color.g, color.b] {
                        assert!((0.0..=1.0).contains(&channel), "hsl({} {}% {}%)", h, s, l);
                    }
                }
            }
        }
    }

    #[test]
    fn test_hsl_hue_360_falls_through_sectors() {
        // 360 is outside every sector, leaving only the lightness offset.
        let color = ColorValue::from_hsl(360.0, 100.0, 50.0);
        assert_eq!(color.hex, "#000000");
    }

    #[test]
    fn test_hsl_records_source_components() {
        let color = ColorValue::from_hsl(222.2, 47.4, 11.2);
        let hsl = color.hsl.unwrap();
        assert_close(hsl.h, 222.2);
        assert_close(hsl.s, 47.4);
        assert_close(hsl.l, 11.2);
        assert!(color.oklch.is_none());
    }

    // ==================== OKLCH ====================

    #[test]
    fn test_oklch_white_and_black() {
        let white = ColorValue::from_oklch(1.0, 0.0, 0.0);
        assert_eq!(white.hex, "#FFFFFF");
        assert!(white.r > 0.999 && white.g > 0.999 && white.b > 0.999);

        let black = ColorValue::from_oklch(0.0, 0.0, 0.0);
        assert_eq!(black.hex, "#000000");
    }

    #[test]
    fn test_oklch_out_of_gamut_clamps() {
        let color = ColorValue::from_oklch(0.5, 0.4, 150.0);
        for channel in [color.r, color.g, color.b] {
            assert!((0.0..=1.0).contains(&channel));
        }
    }

    #[test]
    fn test_oklch_records_source_components() {
        let color = ColorValue::from_oklch(0.9882, 0.0024, 95.7755);
        let oklch = color.oklch.unwrap();
        assert_close(oklch.l, 0.9882);
        assert_close(oklch.c, 0.0024);
        assert_close(oklch.h, 95.7755);
        assert!(color.hsl.is_none());
    }

    // ==================== RGB / INVARIANTS ====================

    #[test]
    fn test_rgb_255_scale() {
        let color = ColorValue::from_rgb_255(255.0, 128.0, 0.0);
        assert_close(color.r, 1.0);
        assert_close(color.g, 128.0 / 255.0);
        assert_eq!(color.hex, "#FF8000");
    }

    #[test]
    fn test_rgb_out_of_range_clamps() {
        let color = ColorValue::from_rgb_255(300.0, -5.0, 0.0);
        assert_eq!(color.r, 1.0);
        assert_eq!(color.g, 0.0);
        assert_eq!(color.hex, "#FF0000");
    }

    #[test]
    fn test_hex_field_matches_channels() {
        let samples = [
            ColorValue::from_hsl(210.0, 40.0, 98.0),
            ColorValue::from_oklch(0.7, 0.1, 250.0),
            ColorValue::from_rgb_255(12.0, 200.0, 99.0),
            ColorValue::from_hex_digits("fa0"),
        ];
        for color in samples {
            assert_eq!(color.hex, rgb_to_hex(color.r, color.g, color.b));
        }
    }

    #[test]
    fn test_display_is_hex() {
        let color = ColorValue::from_hex_digits("1E90FF");
        assert_eq!(color.to_string(), "#1E90FF");
    }
}
