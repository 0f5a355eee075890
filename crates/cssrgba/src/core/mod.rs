mod conversion;
mod string;

// conversion
pub(crate) use conversion::unit_to_byte;

// string
pub use string::ColorFormat;
pub(crate) use string::{format_hex, format_rgb, format_rgba, parse};
