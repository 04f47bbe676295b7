//! RGB color values and hex parsing.
//!
//! Colors enter the crate as 6-digit hex strings and leave it as palette
//! indices or lowercase hex. This module owns the conversion between the two
//! textual forms and the [`Rgb`] triplet used everywhere else, plus the
//! crate-wide [`ColorError`].
//!
//! # Examples
//!
//! ```
//! use ansi_rgb::color::Rgb;
//!
//! let orange = Rgb::parse("#FF8700").unwrap();
//! assert_eq!(orange, Rgb::new(0xff, 0x87, 0x00));
//! assert_eq!(orange.hex(), "ff8700");
//!
//! // `0x` prefixes are accepted too
//! assert_eq!(Rgb::parse("0x005faf").unwrap().hex(), "005faf");
//!
//! assert!(Rgb::parse("zzzzzz").is_err());
//! ```

use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// RGB color triplet with values 0-255.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    /// Create a new triplet from RGB components.
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Parse a 6-digit hex color.
    ///
    /// Accepts an optional `#` or `0x` prefix and either letter case;
    /// surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidColorFormat`] when the remaining text is not
    /// exactly six hex digits.
    pub fn parse(hex: &str) -> Result<Self, ColorError> {
        static HEX_RE: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"^(?:#|0[xX])?([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})$")
                .expect("valid regex")
        });

        let caps = HEX_RE
            .captures(hex.trim())
            .ok_or_else(|| ColorError::InvalidColorFormat(hex.to_string()))?;

        let channel = |i: usize| {
            u8::from_str_radix(&caps[i], 16)
                .map_err(|_| ColorError::InvalidColorFormat(hex.to_string()))
        };

        Ok(Self::new(channel(1)?, channel(2)?, channel(3)?))
    }

    /// Lowercase `rrggbb`, without any prefix.
    #[must_use]
    pub fn hex(&self) -> String {
        self.to_string()
    }

    /// The three channels in red, green, blue order.
    #[must_use]
    pub const fn channels(&self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::new(red, green, blue)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self::new(red, green, blue)
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Rgb {
    type Error = ColorError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

/// Error type for color parsing and palette lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// Input is not a 6-digit hex color.
    InvalidColorFormat(String),
    /// Index outside `0..=255`.
    IndexOutOfRange(u32),
    /// Index inside the 256-color range with no RGB value here (the grayscale ramp).
    UnmappedIndex(u32),
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidColorFormat(s) => write!(f, "Invalid hex color: {s:?}"),
            Self::IndexOutOfRange(i) => write!(f, "Color index out of range (0-255): {i}"),
            Self::UnmappedIndex(i) => write!(f, "Color index has no RGB mapping: {i}"),
        }
    }
}

impl std::error::Error for ColorError {}
