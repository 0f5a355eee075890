use std::str::FromStr;

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::{format_hex, format_rgb, format_rgba, parse, unit_to_byte, ColorFormat};
use crate::error::ColorError;
use crate::interop::Rgba8;
use crate::named;

/// Replace not-a-number and negative alphas with zero and clamp the rest to
/// unit range. Negative zero maps to positive zero so that it formats as `0`.
#[inline]
fn sanitize_alpha(alpha: f64) -> f64 {
    if alpha.is_nan() || alpha <= 0.0 {
        0.0
    } else if 1.0 < alpha {
        1.0
    } else {
        alpha
    }
}

/// A canonical color.
///
/// Every color has 24-bit sRGB coordinates and an alpha. No matter what
/// textual format a color was parsed from, `rgb(255, 0, 0)`, `#f00`,
/// `hsl(0, 100%, 50%)`, or `red`, it ends up with the same canonical form.
/// Colors are immutable.
///
/// # Alpha
///
/// The alpha always is `0.0..=1.0`. [`Color::new`] silently clamps larger and
/// smaller values and replaces not-a-number with zero.
///
/// # Equality Testing and Hashing
///
/// Two colors are equal if their red, green, and blue coordinates are
/// identical and their alphas are identical *after* rounding to a byte with
/// [`Color::alpha_as_byte`]. That way, fractional alphas that went through a
/// round trip via some other representation still compare equal. Hashing
/// uses the same four bytes.
///
/// Colors can also be compared with any foreign color representation that
/// implements [`Rgba8`] with [`Color::same_as_rgba8`] and with color strings
/// with [`Color::same_as_str`].
#[cfg_attr(feature = "pyffi", pyclass(eq, frozen, hash, module = "cssrgba"))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "String", try_from = "String")
)]
#[derive(Clone, Copy)]
pub struct Color {
    red: u8,
    green: u8,
    blue: u8,
    alpha: f64,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl Color {
    /// Instantiate a new color from its coordinates and alpha.
    ///
    /// ```
    /// # use cssrgba::Color;
    /// let ghost = Color::new(248, 248, 255, 0.5);
    /// assert_eq!(ghost.alpha(), 0.5);
    /// assert_eq!(Color::new(1, 2, 3, -5.0).alpha(), 0.0);
    /// assert_eq!(Color::new(1, 2, 3, 5.0).alpha(), 1.0);
    /// ```
    #[cfg(feature = "pyffi")]
    #[new]
    #[pyo3(signature = (red, green, blue, alpha=1.0))]
    pub fn new(red: u8, green: u8, blue: u8, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: sanitize_alpha(alpha),
        }
    }

    /// Instantiate a new color from its coordinates and alpha.
    ///
    /// ```
    /// # use cssrgba::Color;
    /// let ghost = Color::new(248, 248, 255, 0.5);
    /// assert_eq!(ghost.alpha(), 0.5);
    /// assert_eq!(Color::new(1, 2, 3, -5.0).alpha(), 0.0);
    /// assert_eq!(Color::new(1, 2, 3, 5.0).alpha(), 1.0);
    /// ```
    #[cfg(not(feature = "pyffi"))]
    pub fn new(red: u8, green: u8, blue: u8, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: sanitize_alpha(alpha),
        }
    }

    /// Parse the string into a color. <i class=python-only>Python only!</i>
    ///
    /// This method implements the same functionality as [`Color::parse`].
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    #[pyo3(name = "parse", signature = (text))]
    pub fn py_parse(text: Option<&str>) -> Result<Color, ColorError> {
        Color::parse(text)
    }

    /// Try parsing the string into a color. <i class=python-only>Python
    /// only!</i>
    ///
    /// This method implements the same functionality as [`Color::try_parse`].
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    #[pyo3(name = "try_parse", signature = (text))]
    pub fn py_try_parse(text: Option<&str>) -> Option<Color> {
        Color::try_parse(text)
    }

    /// Get the red coordinate.
    #[inline]
    pub const fn red(&self) -> u8 {
        self.red
    }

    /// Get the green coordinate.
    #[inline]
    pub const fn green(&self) -> u8 {
        self.green
    }

    /// Get the blue coordinate.
    #[inline]
    pub const fn blue(&self) -> u8 {
        self.blue
    }

    /// Get the alpha, which is `0.0..=1.0`.
    #[inline]
    pub const fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Get the alpha rounded to an unsigned byte.
    ///
    /// Equality testing and hashing use this byte instead of the alpha itself.
    ///
    /// ```
    /// # use cssrgba::Color;
    /// assert_eq!(Color::new(0, 0, 0, 0.5).alpha_as_byte(), 128);
    /// assert_eq!(Color::new(0, 0, 0, 0.501).alpha_as_byte(), 128);
    /// ```
    #[inline]
    pub fn alpha_as_byte(&self) -> u8 {
        unit_to_byte(self.alpha)
    }

    /// Determine whether this color is fully opaque.
    #[inline]
    pub fn is_opaque(&self) -> bool {
        self.alpha_as_byte() == 0xff
    }

    /// Format this color as a CSS `rgb()` function.
    ///
    /// Since the alpha is omitted, parsing the result restores the same color
    /// only if it is opaque.
    ///
    /// ```
    /// # use cssrgba::Color;
    /// assert_eq!(Color::new(255, 0, 0, 0.5).to_rgb_string(), "rgb(255, 0, 0)");
    /// ```
    pub fn to_rgb_string(&self) -> String {
        format_rgb(self)
    }

    /// Format this color as a CSS `rgba()` function.
    ///
    /// This is the only lossless format. It is the same as the [`Color as
    /// Display`](struct.Color.html#impl-Display-for-Color) output.
    ///
    /// ```
    /// # use cssrgba::Color;
    /// assert_eq!(Color::new(0, 128, 0, 0.5).to_rgba_string(), "rgba(0, 128, 0, 0.5)");
    /// assert_eq!(Color::new(0, 128, 0, 1.0).to_rgba_string(), "rgba(0, 128, 0, 1)");
    /// ```
    pub fn to_rgba_string(&self) -> String {
        self.to_string()
    }

    /// Format this color in hashed hexadecimal notation.
    ///
    /// Every coordinate has exactly two lowercase digits. The alpha is omitted.
    ///
    /// ```
    /// # use cssrgba::Color;
    /// assert_eq!(Color::new(5, 160, 255, 1.0).to_hex_string(), "#05a0ff");
    /// ```
    pub fn to_hex_string(&self) -> String {
        format_hex(self)
    }

    /// Convert this color to red, green, blue, and alpha bytes.
    #[inline]
    pub fn to_rgba8(&self) -> [u8; 4] {
        [self.red, self.green, self.blue, self.alpha_as_byte()]
    }

    /// Look up the name of this color.
    ///
    /// If several names denote the same color, e.g., `aqua` and `cyan`, this
    /// method returns the name that comes first in
    /// [`NAMED_COLORS`](crate::named::NAMED_COLORS).
    ///
    /// ```
    /// # use cssrgba::Color;
    /// assert_eq!(Color::new(100, 149, 237, 1.0).name(), Some("cornflowerblue"));
    /// assert_eq!(Color::new(100, 149, 237, 0.3).name(), None);
    /// ```
    pub fn name(&self) -> Option<&'static str> {
        named::name_of(self)
    }

    /// Convert this color to its debug representation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }

    /// Convert this color to its `rgba()` representation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> String {
        self.to_string()
    }
}

impl Color {
    /// Fully transparent black.
    pub const TRANSPARENT: Color = Color {
        red: 0,
        green: 0,
        blue: 0,
        alpha: 0.0,
    };

    /// Instantiate a new opaque color. <i class=rust-only>Rust only!</i>
    ///
    /// Unlike [`Color::new`], this function is safe to use in const
    /// expressions.
    #[inline]
    pub const fn opaque(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: 1.0,
        }
    }

    /// Instantiate a new color from red, green, blue, and alpha bytes.
    ///
    /// The alpha becomes `alpha / 255`.
    #[inline]
    pub fn from_rgba8(rgba: [u8; 4]) -> Self {
        let [r, g, b, a] = rgba;
        Self::new(r, g, b, a as f64 / 255.0)
    }

    /// Try parsing the text as a color.
    ///
    /// This function tries the formats listed in [`ColorFormat::ALL`] in
    /// order and returns the first successful result. It returns `None` for
    /// absent, empty, all white space, and unrecognized strings.
    ///
    /// ```
    /// # use cssrgba::Color;
    /// let red = Color::new(255, 0, 0, 1.0);
    /// assert_eq!(Color::try_parse("hsl(0, 100%, 50%)"), Some(red));
    /// assert_eq!(Color::try_parse(Some("RED")), Some(red));
    /// assert_eq!(Color::try_parse("not-a-color"), None);
    /// assert_eq!(Color::try_parse(None::<&str>), None);
    /// ```
    pub fn try_parse<'a, T: Into<Option<&'a str>>>(text: T) -> Option<Self> {
        Self::try_parse_with_format(text).map(|(_, color)| color)
    }

    /// Try parsing the text as a color, also returning the accepting format.
    ///
    /// ```
    /// # use cssrgba::{Color, ColorFormat};
    /// assert_eq!(
    ///     Color::try_parse_with_format("#abc"),
    ///     Some((ColorFormat::Hex3, Color::new(0xaa, 0xbb, 0xcc, 1.0)))
    /// );
    /// ```
    pub fn try_parse_with_format<'a, T: Into<Option<&'a str>>>(
        text: T,
    ) -> Option<(ColorFormat, Self)> {
        parse(text.into()?)
    }

    /// Parse the text as a color.
    ///
    /// Unlike [`Color::try_parse`], this function signals absent text with
    /// [`ColorError::NullInput`] and any text it does not recognize with
    /// [`ColorError::UnrecognizedFormat`].
    ///
    /// ```
    /// # use cssrgba::Color;
    /// # use cssrgba::error::ColorError;
    /// assert_eq!(Color::parse("rgb(50%, 50%, 50%)")?, Color::new(128, 128, 128, 1.0));
    /// assert_eq!(Color::parse(None::<&str>), Err(ColorError::NullInput));
    /// # Ok::<(), ColorError>(())
    /// ```
    pub fn parse<'a, T: Into<Option<&'a str>>>(text: T) -> Result<Self, ColorError> {
        let text = text.into().ok_or(ColorError::NullInput)?;
        Self::try_parse(text).ok_or_else(|| {
            log::debug!("could not parse {:?} as color", text);
            ColorError::UnrecognizedFormat(text.to_owned())
        })
    }

    /// Determine whether this color is the same as the other color.
    ///
    /// This method is equivalent to `==`.
    #[inline]
    pub fn same_as(&self, other: &Color) -> bool {
        self == other
    }

    /// Determine whether this color is the same as the foreign color.
    ///
    /// The two colors are the same if their red, green, blue, and alpha bytes
    /// are identical.
    ///
    /// ```
    /// # use cssrgba::Color;
    /// # use cssrgba::interop::PackedArgb;
    /// let navy = Color::parse("navy")?;
    /// assert!(navy.same_as_rgba8(&PackedArgb::new(0xff00_0080)));
    /// assert!(navy.same_as_rgba8(&[0_u8, 0, 128, 255]));
    /// # Ok::<(), cssrgba::error::ColorError>(())
    /// ```
    pub fn same_as_rgba8<C: Rgba8 + ?Sized>(&self, other: &C) -> bool {
        self.to_rgba8() == other.to_rgba8()
    }

    /// Determine whether this color is the same as the color string.
    ///
    /// Absent and unparsable strings are never the same as any color.
    ///
    /// ```
    /// # use cssrgba::Color;
    /// let lime = Color::new(0, 255, 0, 1.0);
    /// assert!(lime.same_as_str("hsl(120, 100%, 50%)"));
    /// assert!(lime.same_as_str("#0F0"));
    /// assert!(!lime.same_as_str("lime-ish"));
    /// assert!(!lime.same_as_str(None::<&str>));
    /// ```
    pub fn same_as_str<'a, T: Into<Option<&'a str>>>(&self, text: T) -> bool {
        Self::try_parse(text).is_some_and(|other| *self == other)
    }
}

impl std::str::FromStr for Color {
    type Err = ColorError;

    /// Instantiate a color from its string representation.
    ///
    /// This method implements the same functionality as [`Color::parse`] for
    /// text that is known to be present.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse(s)
    }
}

impl TryFrom<&str> for Color {
    type Error = ColorError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Color::from_str(value)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::from_str(value.as_str())
    }
}

impl From<Color> for String {
    fn from(value: Color) -> Self {
        value.to_string()
    }
}

impl From<[u8; 4]> for Color {
    fn from(value: [u8; 4]) -> Self {
        Color::from_rgba8(value)
    }
}

impl From<Color> for [u8; 4] {
    fn from(value: Color) -> Self {
        value.to_rgba8()
    }
}

impl std::hash::Hash for Color {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.to_rgba8().hash(state);
    }
}

impl PartialEq for Color {
    /// Determine whether this color equals the other color.
    ///
    /// The comparison uses the alpha rounded to a byte, which keeps `eq`
    /// consistent with [`Color as
    /// Hash`](struct.Color.html#impl-Hash-for-Color).
    ///
    /// ```
    /// # use cssrgba::Color;
    /// assert_eq!(Color::new(1, 2, 3, 0.5), Color::new(1, 2, 3, 0.501));
    /// assert_ne!(Color::new(1, 2, 3, 0.5), Color::new(1, 2, 3, 0.51));
    /// ```
    fn eq(&self, other: &Self) -> bool {
        self.to_rgba8() == other.to_rgba8()
    }
}

impl Eq for Color {}

impl std::fmt::Debug for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "Color({}, {}, {}, {})",
            self.red, self.green, self.blue, self.alpha
        ))
    }
}

impl std::fmt::Display for Color {
    /// Format this color as a CSS `rgba()` function.
    ///
    /// The alpha is formatted without trailing zeros, i.e., as `0`, `1`, or a
    /// fraction such as `0.25`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        format_rgba(self, f)
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::Color;
    use crate::error::ColorError;
    use crate::interop::PackedArgb;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::collections::HashSet;

    #[test]
    fn test_sanitize_alpha() {
        assert_eq!(Color::new(1, 2, 3, -5.0).alpha(), 0.0);
        assert_eq!(Color::new(1, 2, 3, 5.0).alpha(), 1.0);
        assert_eq!(Color::new(1, 2, 3, 0.3).alpha(), 0.3);
        assert_eq!(Color::new(1, 2, 3, f64::NAN).alpha(), 0.0);
        assert_eq!(Color::new(1, 2, 3, f64::INFINITY).alpha(), 1.0);
        assert_eq!(Color::new(1, 2, 3, -0.0).to_string(), "rgba(1, 2, 3, 0)");
    }

    #[test]
    fn test_equality() {
        let c1 = Color::new(10, 20, 30, 0.5);
        let c2 = Color::new(10, 20, 30, 128.0 / 255.0);
        assert_eq!(c1, c2);
        assert!(c1.same_as(&c2));
        assert_ne!(c1, Color::new(10, 20, 31, 0.5));
        assert_ne!(c1, Color::new(10, 20, 30, 1.0));

        let mut set = HashSet::new();
        set.insert(c1);
        assert!(set.contains(&c2));
        assert!(!set.contains(&Color::new(10, 20, 30, 0.49)));
    }

    #[test]
    fn test_same_as_str() {
        let olive = Color::new(128, 128, 0, 1.0);
        assert!(olive.same_as_str("olive"));
        assert!(olive.same_as_str("  rgb( 128 , 128 , 0 )  "));
        assert!(olive.same_as_str(Some("#808000")));
        assert!(!olive.same_as_str("rgba(128, 128, 0, 0.5)"));
        assert!(!olive.same_as_str(""));
        assert!(!olive.same_as_str(None::<&str>));
    }

    #[test]
    fn test_same_as_rgba8() {
        let tomato = Color::new(255, 99, 71, 0.5);
        assert!(tomato.same_as_rgba8(&[255_u8, 99, 71, 128]));
        assert!(tomato.same_as_rgba8(&PackedArgb::from_argb(128, 255, 99, 71)));
        assert!(!tomato.same_as_rgba8(&PackedArgb::from_argb(255, 255, 99, 71)));
    }

    #[test]
    fn test_rgba8_conversion() {
        let color = Color::new(1, 2, 3, 0.25);
        let bytes: [u8; 4] = color.into();
        assert_eq!(bytes, [1, 2, 3, 64]);

        let back = Color::from(bytes);
        assert_eq!(back, color);
        assert_eq!(back.alpha(), 64.0 / 255.0);

        let packed = PackedArgb::from(color);
        assert_eq!(packed.value(), 0x4001_0203);
        assert_eq!(Color::from(packed), color);
    }

    #[test]
    fn test_format() {
        let color = Color::new(0, 128, 0, 0.5);
        assert_eq!(color.to_rgb_string(), "rgb(0, 128, 0)");
        assert_eq!(color.to_rgba_string(), "rgba(0, 128, 0, 0.5)");
        assert_eq!(color.to_string(), color.to_rgba_string());
        assert_eq!(color.to_hex_string(), "#008000");
        assert_eq!(format!("{:?}", color), "Color(0, 128, 0, 0.5)");

        assert_eq!(Color::TRANSPARENT.to_string(), "rgba(0, 0, 0, 0)");
        assert_eq!(Color::opaque(1, 2, 3).to_string(), "rgba(1, 2, 3, 1)");
        assert_eq!(Color::opaque(1, 2, 3).to_hex_string(), "#010203");
        assert_eq!(Color::opaque(255, 15, 16).to_hex_string(), "#ff0f10");
    }

    #[test]
    fn test_round_trip() -> Result<(), ColorError> {
        for alpha in [0.0, 1.0, 0.5, 0.25] {
            for value in 0..=255_u8 {
                for color in [
                    Color::new(value, 0, 0, alpha),
                    Color::new(0, value, 0, alpha),
                    Color::new(0, 0, value, alpha),
                    Color::new(value, value, value, alpha),
                ] {
                    assert_eq!(Color::parse(color.to_rgba_string().as_str())?, color);
                }
            }
        }

        let mut rng = StdRng::seed_from_u64(0x00c0_ffee);
        for _ in 0..10_000 {
            let color = Color::new(rng.random(), rng.random(), rng.random(), rng.random());
            let text = color.to_rgba_string();
            assert_eq!(Color::parse(text.as_str())?, color, "{}", text);
        }

        Ok(())
    }

    #[test]
    fn test_lossy_round_trip() -> Result<(), ColorError> {
        let opaque = Color::new(12, 34, 56, 1.0);
        assert_eq!(Color::parse(opaque.to_rgb_string().as_str())?, opaque);
        assert_eq!(Color::parse(opaque.to_hex_string().as_str())?, opaque);

        let translucent = Color::new(12, 34, 56, 0.75);
        assert_ne!(Color::parse(translucent.to_rgb_string().as_str())?, translucent);
        assert_ne!(Color::parse(translucent.to_hex_string().as_str())?, translucent);
        Ok(())
    }

    #[test]
    fn test_conversions() -> Result<(), ColorError> {
        let maroon: Color = "maroon".parse()?;
        assert_eq!(maroon, Color::opaque(128, 0, 0));
        assert_eq!(Color::try_from("#800000")?, maroon);
        assert_eq!(Color::try_from(String::from("rgb(128, 0, 0)"))?, maroon);
        assert_eq!(String::from(maroon), "rgba(128, 0, 0, 1)");
        assert!(maroon.is_opaque());
        assert!(!Color::TRANSPARENT.is_opaque());

        assert_eq!(
            Color::parse("nope"),
            Err(ColorError::UnrecognizedFormat("nope".to_owned()))
        );
        assert_eq!("".parse::<Color>(), Err(ColorError::UnrecognizedFormat(String::new())));
        Ok(())
    }

    #[test]
    fn test_name() {
        assert_eq!(Color::opaque(0, 255, 255).name(), Some("aqua"));
        assert_eq!(Color::TRANSPARENT.name(), Some("transparent"));
        assert_eq!(Color::opaque(1, 2, 3).name(), None);
    }

    #[cfg(feature = "pyffi")]
    #[test]
    fn test_py_parse() -> Result<(), ColorError> {
        assert_eq!(Color::py_parse(Some("#f00"))?, Color::opaque(255, 0, 0));
        assert_eq!(Color::py_parse(None), Err(ColorError::NullInput));
        assert_eq!(Color::py_try_parse(None), None);
        assert_eq!(Color::py_try_parse(Some("teal")), Some(Color::opaque(0, 128, 128)));
        Ok(())
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde() -> Result<(), serde_json::Error> {
        let color = Color::new(250, 128, 114, 0.5);
        let json = serde_json::to_string(&color)?;
        assert_eq!(json, "\"rgba(250, 128, 114, 0.5)\"");
        assert_eq!(serde_json::from_str::<Color>(&json)?, color);
        assert_eq!(serde_json::from_str::<Color>("\"salmon\"")?, Color::opaque(250, 128, 114));
        assert!(serde_json::from_str::<Color>("\"salmonish\"").is_err());
        Ok(())
    }
}
