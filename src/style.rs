//! Text styles and their SGR codes.
//!
//! A style can be named (`"bold"`) or given by code (`1`). Lookups are total:
//! anything unrecognized resolves to `None` and contributes nothing to the
//! output, since styling is cosmetic.

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;

/// A single text style with a fixed SGR code.
///
/// SGR 6 (rapid blink) is deliberately absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TextStyle {
    Normal = 0,
    Bold = 1,
    Dim = 2,
    Italic = 3,
    Underline = 4,
    Blink = 5,
    Reverse = 7,
}

impl TextStyle {
    /// Every style, in code order.
    pub const ALL: [Self; 7] = [
        Self::Normal,
        Self::Bold,
        Self::Dim,
        Self::Italic,
        Self::Underline,
        Self::Blink,
        Self::Reverse,
    ];

    /// SGR code for this style.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Lowercase name of this style.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Bold => "bold",
            Self::Dim => "dim",
            Self::Italic => "italic",
            Self::Underline => "underline",
            Self::Blink => "blink",
            Self::Reverse => "reverse",
        }
    }

    /// Style with the given SGR code, if it is one of ours.
    #[must_use]
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|style| style.code() == code)
    }

    /// Style with the given name (case-insensitive, surrounding whitespace ignored).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|style| style.name().eq_ignore_ascii_case(name))
    }

    /// The attribute flag for this style. `Normal` maps to the empty set.
    #[must_use]
    pub const fn attribute(self) -> Attributes {
        match self {
            Self::Normal => Attributes::empty(),
            Self::Bold => Attributes::BOLD,
            Self::Dim => Attributes::DIM,
            Self::Italic => Attributes::ITALIC,
            Self::Underline => Attributes::UNDERLINE,
            Self::Blink => Attributes::BLINK,
            Self::Reverse => Attributes::REVERSE,
        }
    }
}

impl fmt::Display for TextStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown style name with [`FromStr`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStyle(pub String);

impl fmt::Display for UnknownStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown style: {}", self.0)
    }
}

impl std::error::Error for UnknownStyle {}

impl FromStr for TextStyle {
    type Err = UnknownStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownStyle(s.to_string()))
    }
}

/// A style as callers supply it: by name or by numeric code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleArg<'a> {
    Name(&'a str),
    Code(u8),
    Style(TextStyle),
}

impl StyleArg<'_> {
    /// Resolve to a known style. Unknown names and codes give `None`.
    #[must_use]
    pub fn resolve(self) -> Option<TextStyle> {
        let resolved = match self {
            Self::Name(name) => TextStyle::from_name(name),
            Self::Code(code) => TextStyle::from_code(code),
            Self::Style(style) => Some(style),
        };
        if resolved.is_none() {
            log::debug!("ignoring unrecognized style {self:?}");
        }
        resolved
    }
}

impl<'a> From<&'a str> for StyleArg<'a> {
    fn from(name: &'a str) -> Self {
        Self::Name(name)
    }
}

impl<'a> From<&'a String> for StyleArg<'a> {
    fn from(name: &'a String) -> Self {
        Self::Name(name.as_str())
    }
}

impl From<u8> for StyleArg<'_> {
    fn from(code: u8) -> Self {
        Self::Code(code)
    }
}

impl From<TextStyle> for StyleArg<'_> {
    fn from(style: TextStyle) -> Self {
        Self::Style(style)
    }
}

bitflags! {
    /// A set of text styles, for emitting several at once.
    ///
    /// Each flag corresponds to one SGR code.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Attributes: u8 {
        /// Bold/bright text (SGR 1).
        const BOLD      = 1 << 0;
        /// Dim/faint text (SGR 2).
        const DIM       = 1 << 1;
        /// Italic text (SGR 3).
        const ITALIC    = 1 << 2;
        /// Single underline (SGR 4).
        const UNDERLINE = 1 << 3;
        /// Blinking text (SGR 5).
        const BLINK     = 1 << 4;
        /// Reverse video (SGR 7).
        const REVERSE   = 1 << 5;
    }
}

impl Attributes {
    /// Map of attribute flags to their styles, in SGR code order.
    const STYLES: [(Self, TextStyle); 6] = [
        (Self::BOLD, TextStyle::Bold),
        (Self::DIM, TextStyle::Dim),
        (Self::ITALIC, TextStyle::Italic),
        (Self::UNDERLINE, TextStyle::Underline),
        (Self::BLINK, TextStyle::Blink),
        (Self::REVERSE, TextStyle::Reverse),
    ];

    /// Enabled styles in ascending SGR code order.
    #[must_use]
    pub fn styles(&self) -> Vec<TextStyle> {
        Self::STYLES
            .iter()
            .filter(|(attr, _)| self.contains(*attr))
            .map(|&(_, style)| style)
            .collect()
    }

    /// SGR codes for enabled styles.
    #[must_use]
    pub fn to_sgr_codes(&self) -> Vec<u8> {
        self.styles().into_iter().map(TextStyle::code).collect()
    }
}

impl From<TextStyle> for Attributes {
    fn from(style: TextStyle) -> Self {
        style.attribute()
    }
}
