#![allow(clippy::print_stdout)]

use cssrgba::Color;

/// Print the canonical forms of every color given on the command line.
///
/// Run with `RUST_LOG=trace` to see which format accepted each string.
fn main() {
    env_logger::init();

    for text in std::env::args().skip(1) {
        match Color::try_parse_with_format(text.as_str()) {
            Some((format, color)) => println!(
                "{:<28} {:<6} {}  {}  {}",
                text,
                format,
                color,
                color.to_hex_string(),
                color.name().unwrap_or("-")
            ),
            None => println!("{:<28} unrecognized", text),
        }
    }
}
