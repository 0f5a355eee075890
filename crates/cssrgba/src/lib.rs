//! # cssrgba
//!
//! Canonical colors for comparing what a rendering engine reports with what a
//! test expects.
//!
//! Browsers report computed CSS colors as strings, and they don't much care
//! which of the many equivalent notations they use. A test, in turn, may
//! expect `red`, `#f00`, or `hsl(0, 100%, 50%)`. This crate parses all of them
//! into one canonical [`Color`] with 24-bit sRGB coordinates and an alpha,
//! compares colors irrespective of their original notation, and formats them
//! again for reports.
//!
//!
//! ## 1. Overview
//!
//! The main abstractions are:
//!
//!   * [`Color`] is the **canonical, immutable color value**. Its equality
//!     uses the alpha rounded to a byte, so that colors that went through a
//!     round trip still compare equal. It formats as `rgb()`, `rgba()`, and
//!     hashed hexadecimal.
//!   * [`ColorFormat`] enumerates the **supported textual formats** in the
//!     order in which [`Color::try_parse`] tries them: `rgb()` with bytes and
//!     with percentages, `rgba()` with bytes and with percentages, `#rrggbb`,
//!     `#rgb`, `hsl()`, `hsla()`, and color keywords.
//!   * The [`named`] module is the **catalog of CSS color keywords**.
//!   * The [`interop`] module connects to **foreign color types** through the
//!     [`Rgba8`](interop::Rgba8) trait.
//!
//!
//! ## 2. Parse, Compare, Format
//!
//! ```
//! # use cssrgba::Color;
//! # use cssrgba::error::ColorError;
//! // A computed style as reported by the browser
//! let reported = Color::parse("rgba(100, 149, 237, 1)")?;
//!
//! // What the test expects
//! assert!(reported.same_as_str("CornflowerBlue"));
//! assert_eq!(reported, Color::parse("#6495ed")?);
//!
//! // What the report shows
//! assert_eq!(reported.to_hex_string(), "#6495ed");
//! assert_eq!(reported.to_string(), "rgba(100, 149, 237, 1)");
//! # Ok::<(), ColorError>(())
//! ```
//!
//! Unset CSS properties have no value at all. Hence [`Color::parse`] and
//! [`Color::try_parse`] accept `Option<&str>` as well as `&str`, with the
//! former failing with [`ColorError::NullInput`](error::ColorError::NullInput)
//! and the latter returning `None`.
//!
//!
//! ## 3. Optional Features
//!
//! This crate supports two feature flags:
//!
//!   - **`serde`** implements `Serialize` and `Deserialize` for [`Color`]
//!     using its `rgba()` string. This feature is disabled by default.
//!   - **`pyffi`** controls Python integration through
//!     [PyO3](https://pyo3.rs/). This feature is disabled by default.
//!
//! Parsing logs through the [log](https://crates.io/crates/log) facade. It
//! traces the format accepting a string and records strings and names that
//! could not be resolved at debug level.

mod color;
mod core;
pub mod error;
pub mod interop;
pub mod named;

pub use color::Color;
pub use core::ColorFormat;

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

#[doc(hidden)]
#[cfg(feature = "pyffi")]
#[pymodule]
pub fn cssrgba(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<Color>()?;
    m.add_class::<ColorFormat>()?;
    m.add_function(wrap_pyfunction!(named_color, m)?)?;
    Ok(())
}

/// Look up the color with the given name. <i class=python-only>Python
/// only!</i>
#[cfg(feature = "pyffi")]
#[pyfunction]
#[pyo3(signature = (name))]
fn named_color(name: Option<&str>) -> Result<Color, error::ColorError> {
    named::get(name)
}

#[cfg(all(test, feature = "pyffi"))]
mod test {
    use super::named_color;
    use crate::error::ColorError;
    use crate::Color;

    #[test]
    fn test_named_color() -> Result<(), ColorError> {
        assert_eq!(named_color(Some("Navy"))?, Color::opaque(0, 0, 128));
        assert_eq!(named_color(None), Err(ColorError::NullInput));
        Ok(())
    }
}
