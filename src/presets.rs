//! Ready-made named colors.
//!
//! Three shades per hue plus a small gray ramp, some with a style attached.
//! Render one with [`Colorizer::preset`](crate::Colorizer::preset).

use std::fmt;

use crate::color::Rgb;
use crate::style::TextStyle;

/// A predefined color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    Red,
    Red2,
    Red3,
    Green,
    Green2,
    Green3,
    Blue,
    Blue2,
    Blue3,
    Cyan,
    Cyan2,
    Cyan3,
    Purple,
    Purple2,
    Purple3,
    Yellow,
    Yellow2,
    Yellow3,
    Orange,
    Orange2,
    Orange3,
    White,
    Black,
    Grey,
    Grey2,
    Grey3,
    Grey4,
}

impl Preset {
    /// Every preset, grouped by hue.
    pub const ALL: [Self; 27] = [
        Self::Red,
        Self::Red2,
        Self::Red3,
        Self::Green,
        Self::Green2,
        Self::Green3,
        Self::Blue,
        Self::Blue2,
        Self::Blue3,
        Self::Cyan,
        Self::Cyan2,
        Self::Cyan3,
        Self::Purple,
        Self::Purple2,
        Self::Purple3,
        Self::Yellow,
        Self::Yellow2,
        Self::Yellow3,
        Self::Orange,
        Self::Orange2,
        Self::Orange3,
        Self::White,
        Self::Black,
        Self::Grey,
        Self::Grey2,
        Self::Grey3,
        Self::Grey4,
    ];

    /// Source color before quantization.
    #[must_use]
    pub const fn rgb(self) -> Rgb {
        match self {
            Self::Red => Rgb::new(0xff, 0x00, 0x00),
            Self::Red2 => Rgb::new(0xaf, 0x00, 0x00),
            Self::Red3 => Rgb::new(0x5f, 0x00, 0x00),
            Self::Green => Rgb::new(0x00, 0xff, 0x00),
            Self::Green2 => Rgb::new(0x00, 0xaf, 0x00),
            Self::Green3 => Rgb::new(0x00, 0x5f, 0x00),
            Self::Blue => Rgb::new(0x00, 0xd7, 0xff),
            Self::Blue2 => Rgb::new(0x00, 0x87, 0xff),
            Self::Blue3 => Rgb::new(0x00, 0x5f, 0xaf),
            Self::Cyan => Rgb::new(0xaf, 0xff, 0xff),
            Self::Cyan2 => Rgb::new(0x87, 0xff, 0xff),
            Self::Cyan3 => Rgb::new(0x1f, 0x99, 0x99),
            Self::Purple => Rgb::new(0xaf, 0x5f, 0xff),
            Self::Purple2 => Rgb::new(0xaf, 0x00, 0xaf),
            Self::Purple3 => Rgb::new(0x87, 0x00, 0x5f),
            Self::Yellow => Rgb::new(0xd7, 0xff, 0x00),
            Self::Yellow2 => Rgb::new(0xd7, 0xaf, 0x00),
            Self::Yellow3 => Rgb::new(0xd7, 0x5f, 0x00),
            Self::Orange => Rgb::new(0xff, 0x87, 0x00),
            Self::Orange2 => Rgb::new(0xff, 0x5f, 0x00),
            Self::Orange3 => Rgb::new(0x87, 0x5f, 0x00),
            Self::White => Rgb::new(0xff, 0xff, 0xff),
            Self::Black => Rgb::new(0x00, 0x00, 0x00),
            Self::Grey => Rgb::new(0xa8, 0xa8, 0xa8),
            Self::Grey2 => Rgb::new(0x6c, 0x6c, 0x6c),
            Self::Grey3 => Rgb::new(0x44, 0x44, 0x44),
            Self::Grey4 => Rgb::new(0x30, 0x30, 0x30),
        }
    }

    /// Style applied along with the color, if any.
    #[must_use]
    pub const fn style(self) -> Option<TextStyle> {
        match self {
            Self::Green3 | Self::Cyan3 => Some(TextStyle::Underline),
            Self::Blue2 | Self::Orange2 => Some(TextStyle::Bold),
            Self::Grey4 => Some(TextStyle::Dim),
            _ => None,
        }
    }

    /// Snake-case name, e.g. `"red_2"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Red2 => "red_2",
            Self::Red3 => "red_3",
            Self::Green => "green",
            Self::Green2 => "green_2",
            Self::Green3 => "green_3",
            Self::Blue => "blue",
            Self::Blue2 => "blue_2",
            Self::Blue3 => "blue_3",
            Self::Cyan => "cyan",
            Self::Cyan2 => "cyan_2",
            Self::Cyan3 => "cyan_3",
            Self::Purple => "purple",
            Self::Purple2 => "purple_2",
            Self::Purple3 => "purple_3",
            Self::Yellow => "yellow",
            Self::Yellow2 => "yellow_2",
            Self::Yellow3 => "yellow_3",
            Self::Orange => "orange",
            Self::Orange2 => "orange_2",
            Self::Orange3 => "orange_3",
            Self::White => "white",
            Self::Black => "black",
            Self::Grey => "grey",
            Self::Grey2 => "grey_2",
            Self::Grey3 => "grey_3",
            Self::Grey4 => "grey_4",
        }
    }

    /// Preset with the given name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|preset| preset.name() == name)
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
