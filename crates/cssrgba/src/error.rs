//! Utility module with cssrgba's errors.

#[cfg(feature = "pyffi")]
use pyo3::{exceptions::PyValueError, prelude::*};

/// An erroneous color string or color name.
///
/// Every assertive operation, i.e., [`Color::parse`](crate::Color::parse) and
/// [`named::get`](crate::named::get), fails with exactly one of these
/// variants. Their peeking counterparts
/// [`Color::try_parse`](crate::Color::try_parse) and
/// [`named::try_get`](crate::named::try_get) never fail and return `None`
/// instead.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    /// A required string is absent. Rendering engines report an unset CSS
    /// property as no value at all, which shows up here as `None`.
    #[error("color string should be present but is missing")]
    NullInput,

    /// A color string that matches none of the supported formats. For
    /// example, `rgb(1, 2)` is missing a coordinate, whereas `#12345` has one
    /// hexadecimal digit too few.
    #[error(
        "color string should use rgb(), rgba(), hsl(), hsla(), hashed hexadecimal, \
        or a color name but `{0}` does not"
    )]
    UnrecognizedFormat(String),

    /// A color name that is not defined by CSS. For example, `reddish` is not
    /// a color name.
    #[error("color name should be a CSS color keyword but `{0}` is not")]
    UnknownColorName(String),
}

#[cfg(feature = "pyffi")]
impl From<ColorError> for PyErr {
    fn from(value: ColorError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

#[cfg(test)]
mod test {
    use super::ColorError;

    #[test]
    fn test_messages() {
        assert_eq!(
            ColorError::NullInput.to_string(),
            "color string should be present but is missing"
        );
        assert_eq!(
            ColorError::UnknownColorName("reddish".to_owned()).to_string(),
            "color name should be a CSS color keyword but `reddish` is not"
        );
        assert!(ColorError::UnrecognizedFormat("rgb(1, 2)".to_owned())
            .to_string()
            .ends_with("but `rgb(1, 2)` does not"));
    }
}
