use std::sync::LazyLock;

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;
use regex::{Captures, Regex};

use super::conversion::{hsl_to_rgb, percent_to_byte};
use crate::{named, Color};

// Argument grammars. Every argument has exactly one capture group.
const BYTE: &str = r"([0-9]{1,3})";
const PERCENT: &str = r"([0-9]{1,3}(?:\.[0-9]+)?|\.[0-9]+)%";
const ALPHA: &str = r"([0-9]+(?:\.[0-9]+)?|\.[0-9]+)";
const HUE: &str = r"([0-9]{1,3}(?:\.[0-9]+)?|\.[0-9]+)(?:deg)?";

/// Compile the grammar for the CSS function with the given name and
/// comma-separated arguments.
///
/// The regular expression ignores ASCII case, is anchored at both ends, and
/// admits white space around the function name, parentheses, and commas. The
/// regex crate guarantees matching in time linear in the length of the input,
/// so adversarial strings cannot trigger catastrophic backtracking.
fn compile(name: &str, arguments: &[&str]) -> Regex {
    let pattern = format!(
        r"(?i)^\s*{}\s*\(\s*{}\s*\)\s*$",
        name,
        arguments.join(r"\s*,\s*")
    );
    Regex::new(&pattern).expect("color grammar should be a valid regular expression")
}

static RGB: LazyLock<Regex> = LazyLock::new(|| compile("rgb", &[BYTE, BYTE, BYTE]));
static RGB_PERCENT: LazyLock<Regex> =
    LazyLock::new(|| compile("rgb", &[PERCENT, PERCENT, PERCENT]));
static RGBA: LazyLock<Regex> = LazyLock::new(|| compile("rgba", &[BYTE, BYTE, BYTE, ALPHA]));
static RGBA_PERCENT: LazyLock<Regex> =
    LazyLock::new(|| compile("rgba", &[PERCENT, PERCENT, PERCENT, ALPHA]));
static HSL: LazyLock<Regex> = LazyLock::new(|| compile("hsl", &[HUE, PERCENT, PERCENT]));
static HSLA: LazyLock<Regex> = LazyLock::new(|| compile("hsla", &[HUE, PERCENT, PERCENT, ALPHA]));

// --------------------------------------------------------------------------------------------------------------------

/// Extract the number captured by the group with the given index, provided it
/// falls into the given range.
fn number(captures: &Captures<'_>, index: usize, max: f64) -> Option<f64> {
    let value = captures.get(index)?.as_str().parse::<f64>().ok()?;
    (value <= max).then_some(value)
}

fn byte(captures: &Captures<'_>, index: usize) -> Option<u8> {
    captures.get(index)?.as_str().parse::<u8>().ok()
}

fn percent(captures: &Captures<'_>, index: usize) -> Option<f64> {
    number(captures, index, 100.0)
}

fn alpha(captures: &Captures<'_>, index: usize) -> Option<f64> {
    number(captures, index, 1.0)
}

fn hue(captures: &Captures<'_>, index: usize) -> Option<f64> {
    number(captures, index, 360.0)
}

fn parse_rgb(s: &str) -> Option<Color> {
    let c = RGB.captures(s)?;
    Some(Color::new(byte(&c, 1)?, byte(&c, 2)?, byte(&c, 3)?, 1.0))
}

fn parse_rgb_percent(s: &str) -> Option<Color> {
    let c = RGB_PERCENT.captures(s)?;
    Some(Color::new(
        percent_to_byte(percent(&c, 1)?),
        percent_to_byte(percent(&c, 2)?),
        percent_to_byte(percent(&c, 3)?),
        1.0,
    ))
}

fn parse_rgba(s: &str) -> Option<Color> {
    let c = RGBA.captures(s)?;
    Some(Color::new(
        byte(&c, 1)?,
        byte(&c, 2)?,
        byte(&c, 3)?,
        alpha(&c, 4)?,
    ))
}

fn parse_rgba_percent(s: &str) -> Option<Color> {
    let c = RGBA_PERCENT.captures(s)?;
    Some(Color::new(
        percent_to_byte(percent(&c, 1)?),
        percent_to_byte(percent(&c, 2)?),
        percent_to_byte(percent(&c, 3)?),
        alpha(&c, 4)?,
    ))
}

fn parse_hsl(s: &str) -> Option<Color> {
    let c = HSL.captures(s)?;
    let [r, g, b] = hsl_to_rgb(hue(&c, 1)?, percent(&c, 2)?, percent(&c, 3)?);
    Some(Color::new(r, g, b, 1.0))
}

fn parse_hsla(s: &str) -> Option<Color> {
    let c = HSLA.captures(s)?;
    let [r, g, b] = hsl_to_rgb(hue(&c, 1)?, percent(&c, 2)?, percent(&c, 3)?);
    Some(Color::new(r, g, b, alpha(&c, 4)?))
}

/// Parse a 24-bit color in hashed hexadecimal format with the given number of
/// digits per coordinate. Single digits are repeated, i.e., `#123` is the same
/// as `#112233`.
fn parse_hashed(s: &str, digits: usize) -> Option<Color> {
    let t = s.trim().strip_prefix('#')?;
    if t.len() != 3 * digits || !t.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let coordinate = |index: usize| -> Option<u8> {
        let n = u8::from_str_radix(t.get(digits * index..digits * (index + 1))?, 16).ok()?;
        Some(if digits == 1 { 16 * n + n } else { n })
    };

    Some(Color::new(coordinate(0)?, coordinate(1)?, coordinate(2)?, 1.0))
}

// ====================================================================================================================

/// A textual color format.
///
/// Each variant is one strategy for turning a string into a [`Color`]. All
/// numeric formats admit white space around the function name, parentheses,
/// and commas, and they ignore the case of the function name. Out-of-range
/// numbers, such as `256` in `rgb()` or `101%`, do not match.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "cssrgba")
)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ColorFormat {
    /// `rgb(r, g, b)` with bytes `0..=255`.
    Rgb,
    /// `rgb(r%, g%, b%)` with percentages `0..=100`.
    RgbPercent,
    /// `rgba(r, g, b, a)` with bytes and an alpha `0..=1`.
    Rgba,
    /// `rgba(r%, g%, b%, a)` with percentages and an alpha.
    RgbaPercent,
    /// `#rrggbb` with two hexadecimal digits per coordinate.
    Hex6,
    /// `#rgb` with one hexadecimal digit per coordinate.
    Hex3,
    /// `hsl(h, s%, l%)` with the hue in degrees `0..=360`.
    Hsl,
    /// `hsla(h, s%, l%, a)` with the hue in degrees and an alpha.
    Hsla,
    /// A CSS color keyword such as `rebeccapurple`, ignoring case.
    Named,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl ColorFormat {
    /// Get a human-readable name for this format.
    pub const fn name(&self) -> &'static str {
        use ColorFormat::*;

        match *self {
            Rgb => "rgb",
            RgbPercent => "rgb%",
            Rgba => "rgba",
            RgbaPercent => "rgba%",
            Hex6 => "hex6",
            Hex3 => "hex3",
            Hsl => "hsl",
            Hsla => "hsla",
            Named => "named",
        }
    }
}

impl ColorFormat {
    /// All formats in the order in which [`Color::try_parse`] tries them.
    pub const ALL: [ColorFormat; 9] = [
        ColorFormat::Rgb,
        ColorFormat::RgbPercent,
        ColorFormat::Rgba,
        ColorFormat::RgbaPercent,
        ColorFormat::Hex6,
        ColorFormat::Hex3,
        ColorFormat::Hsl,
        ColorFormat::Hsla,
        ColorFormat::Named,
    ];

    /// Try parsing the entire string in this format.
    ///
    /// ```
    /// # use cssrgba::{Color, ColorFormat};
    /// assert_eq!(ColorFormat::Hex3.parse("#abc"), Some(Color::new(0xaa, 0xbb, 0xcc, 1.0)));
    /// assert_eq!(ColorFormat::Hex6.parse("#abc"), None);
    /// ```
    pub fn parse(&self, s: &str) -> Option<Color> {
        use ColorFormat::*;

        match *self {
            Rgb => parse_rgb(s),
            RgbPercent => parse_rgb_percent(s),
            Rgba => parse_rgba(s),
            RgbaPercent => parse_rgba_percent(s),
            Hex6 => parse_hashed(s, 2),
            Hex3 => parse_hashed(s, 1),
            Hsl => parse_hsl(s),
            Hsla => parse_hsla(s),
            Named => named::try_get(s),
        }
    }

    /// Determine the first format that accepts the string.
    ///
    /// ```
    /// # use cssrgba::ColorFormat;
    /// assert_eq!(ColorFormat::detect("HSLA(0, 0%, 100%, .5)"), Some(ColorFormat::Hsla));
    /// assert_eq!(ColorFormat::detect("hsl(0, 0%)"), None);
    /// ```
    pub fn detect(s: &str) -> Option<ColorFormat> {
        parse(s).map(|(format, _)| format)
    }
}

impl std::fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.name())
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Parse the string into a color.
///
/// This function tries every format in [`ColorFormat::ALL`] and returns the
/// first success together with the accepting format. Empty and all white
/// space strings never parse.
pub(crate) fn parse(s: &str) -> Option<(ColorFormat, Color)> {
    if s.trim().is_empty() {
        return None;
    }

    let result = ColorFormat::ALL
        .iter()
        .find_map(|format| format.parse(s).map(|color| (*format, color)));
    if let Some((format, color)) = result {
        log::trace!("parsed {:?} in {} format as {:?}", s, format, color);
    }
    result
}

// --------------------------------------------------------------------------------------------------------------------

/// Format the color as CSS `rgb()` function, dropping the alpha.
pub(crate) fn format_rgb(color: &Color) -> String {
    format!("rgb({}, {}, {})", color.red(), color.green(), color.blue())
}

/// Format the color as CSS `rgba()` function.
///
/// Rust formats floating point numbers without exponent and with the fewest
/// digits that still round trip. Hence the result always parses again and
/// restores the exact same alpha.
pub(crate) fn format_rgba(color: &Color, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_fmt(format_args!(
        "rgba({}, {}, {}, {})",
        color.red(),
        color.green(),
        color.blue(),
        color.alpha()
    ))
}

/// Format the color in hashed hexadecimal notation, dropping the alpha.
pub(crate) fn format_hex(color: &Color) -> String {
    format!(
        "#{:02x}{:02x}{:02x}",
        color.red(),
        color.green(),
        color.blue()
    )
}

// ====================================================================================================================
