//! SGR escape sequence synthesis.
//!
//! Every sequence is `ESC [ <params> m`. Colors use the indexed form
//! `38;5;N` (foreground) and `48;5;N` (background).

use crate::style::{Attributes, TextStyle};

/// The escape byte (0x1B).
pub const ESC: char = '\x1b';

/// Sequence that clears all color and style state.
pub const RESET: &str = "\x1b[0m";

/// `ESC[<params>m`.
#[must_use]
pub fn sgr(params: impl std::fmt::Display) -> String {
    format!("{ESC}[{params}m")
}

/// Indexed foreground color.
#[must_use]
pub fn foreground(index: u8) -> String {
    sgr(format_args!("38;5;{index}"))
}

/// Indexed background color.
#[must_use]
pub fn background(index: u8) -> String {
    sgr(format_args!("48;5;{index}"))
}

/// Style sequence, or an empty string for `None`.
#[must_use]
pub fn style(style: Option<TextStyle>) -> String {
    style.map(|s| sgr(s.code())).unwrap_or_default()
}

/// One style sequence per enabled attribute, in ascending code order.
#[must_use]
pub fn attributes(attrs: Attributes) -> String {
    attrs.to_sgr_codes().into_iter().map(sgr).collect()
}

/// Background (if any) followed by foreground.
///
/// Foreground comes last so it is the final color applied.
#[must_use]
pub fn colors(fg: u8, bg: Option<u8>) -> String {
    let mut out = String::with_capacity(24);
    if let Some(bg) = bg {
        out.push_str(&background(bg));
    }
    out.push_str(&foreground(fg));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset() {
        assert_eq!(RESET, "\x1b[0m");
        assert_eq!(RESET.as_bytes()[0], 0x1b);
    }

    #[test]
    fn test_color_sequences() {
        assert_eq!(foreground(196), "\x1b[38;5;196m");
        assert_eq!(background(0), "\x1b[48;5;0m");
    }

    #[test]
    fn test_style_sequences() {
        assert_eq!(style(Some(TextStyle::Bold)), "\x1b[1m");
        assert_eq!(style(Some(TextStyle::Normal)), "\x1b[0m");
        assert_eq!(style(None), "");
    }

    #[test]
    fn test_attribute_sequences() {
        assert_eq!(
            attributes(Attributes::ITALIC | Attributes::DIM),
            "\x1b[2m\x1b[3m"
        );
        assert_eq!(attributes(Attributes::empty()), "");
    }

    #[test]
    fn test_background_before_foreground() {
        assert_eq!(colors(1, Some(2)), "\x1b[48;5;2m\x1b[38;5;1m");
        assert_eq!(colors(1, None), "\x1b[38;5;1m");
    }
}
