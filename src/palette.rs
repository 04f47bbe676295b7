//! The indexed 232-entry palette.
//!
//! Indices 0-15 are the sixteen basic colors, given as literal values.
//! Indices 16-231 are the 6x6x6 color cube, enumerated red-outermost and
//! blue-innermost so that `index = 16 + 36*r + 6*g + b` as in the standard
//! 256-color layout. The grayscale ramp (232-255) is not part of the palette.
//!
//! A [`Palette`] is built once and never mutated. Reverse lookups are
//! precomputed hash maps.
//!
//! # Examples
//!
//! ```
//! use ansi_rgb::color::Rgb;
//! use ansi_rgb::palette::Palette;
//!
//! let palette = Palette::new();
//! assert_eq!(palette.len(), 232);
//! assert_eq!(palette.rgb_of(16), Some(Rgb::new(0, 0, 0)));
//! assert_eq!(palette.rgb_of(231), Some(Rgb::new(255, 255, 255)));
//! assert_eq!(palette.index_of("5f87af"), Some(67));
//! ```

use std::collections::HashMap;

use crate::color::Rgb;

/// Number of palette entries (basic 16 + 216 cube).
pub const PALETTE_SIZE: usize = 232;

/// First cube index.
pub const CUBE_START: u8 = 16;

/// Last cube index.
pub const CUBE_END: u8 = 231;

/// The six channel levels of the color cube.
pub const CUBE_LEVELS: [u8; 6] = [0x00, 0x5f, 0x87, 0xaf, 0xd7, 0xff];

/// The sixteen basic colors: eight standard followed by eight bright.
pub const BASIC_COLORS: [Rgb; 16] = [
    Rgb::new(0x00, 0x00, 0x00), // 0: Black
    Rgb::new(0x80, 0x00, 0x00), // 1: Maroon
    Rgb::new(0x00, 0x80, 0x00), // 2: Green
    Rgb::new(0x80, 0x80, 0x00), // 3: Olive
    Rgb::new(0x00, 0x00, 0x80), // 4: Navy
    Rgb::new(0x80, 0x00, 0x80), // 5: Purple
    Rgb::new(0x00, 0x80, 0x80), // 6: Teal
    Rgb::new(0xc0, 0xc0, 0xc0), // 7: Silver
    Rgb::new(0x80, 0x80, 0x80), // 8: Grey
    Rgb::new(0xff, 0x00, 0x00), // 9: Red
    Rgb::new(0x00, 0xff, 0x00), // 10: Lime
    Rgb::new(0xff, 0xff, 0x00), // 11: Yellow
    Rgb::new(0x00, 0x00, 0xff), // 12: Blue
    Rgb::new(0xff, 0x00, 0xff), // 13: Fuchsia
    Rgb::new(0x00, 0xff, 0xff), // 14: Aqua
    Rgb::new(0xff, 0xff, 0xff), // 15: White
];

/// Index of a cube entry from its per-channel level indices (each `0..6`).
#[must_use]
pub const fn cube_index(r_level: u8, g_level: u8, b_level: u8) -> u8 {
    CUBE_START + 36 * r_level + 6 * g_level + b_level
}

/// Immutable indexed palette with precomputed reverse lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    entries: [Rgb; PALETTE_SIZE],
    /// Every entry, lowest index wins on duplicate colors.
    by_color: HashMap<Rgb, u8>,
    /// Cube entries only. Complete for every triplet on the level grid.
    by_cube_color: HashMap<Rgb, u8>,
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}

impl Palette {
    /// Build the palette.
    #[must_use]
    pub fn new() -> Self {
        let mut entries = [Rgb::default(); PALETTE_SIZE];
        entries[..BASIC_COLORS.len()].copy_from_slice(&BASIC_COLORS);

        let mut index = usize::from(CUBE_START);
        for &r in &CUBE_LEVELS {
            for &g in &CUBE_LEVELS {
                for &b in &CUBE_LEVELS {
                    entries[index] = Rgb::new(r, g, b);
                    index += 1;
                }
            }
        }

        let mut by_color = HashMap::with_capacity(PALETTE_SIZE);
        let mut by_cube_color = HashMap::with_capacity(PALETTE_SIZE - BASIC_COLORS.len());
        for (i, &rgb) in entries.iter().enumerate() {
            #[expect(clippy::cast_possible_truncation, reason = "PALETTE_SIZE is 232")]
            let i = i as u8;
            by_color.entry(rgb).or_insert(i);
            if i >= CUBE_START {
                by_cube_color.insert(rgb, i);
            }
        }

        log::debug!(
            "built palette: {} entries, {} distinct colors",
            entries.len(),
            by_color.len()
        );

        Self {
            entries,
            by_color,
            by_cube_color,
        }
    }

    /// Number of entries (always 232).
    #[must_use]
    pub const fn len(&self) -> usize {
        PALETTE_SIZE
    }

    /// Always false; present for API symmetry with `len`.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// RGB value at `index`, or `None` past the end of the palette.
    #[must_use]
    pub fn rgb_of(&self, index: u8) -> Option<Rgb> {
        self.entries.get(usize::from(index)).copied()
    }

    /// Lowest index holding the given hex color, if any.
    ///
    /// Malformed hex simply yields `None`.
    #[must_use]
    pub fn index_of(&self, hex: &str) -> Option<u8> {
        Rgb::parse(hex).ok().and_then(|rgb| self.index_of_rgb(rgb))
    }

    /// Lowest index holding `rgb`, if any.
    #[must_use]
    pub fn index_of_rgb(&self, rgb: Rgb) -> Option<u8> {
        self.by_color.get(&rgb).copied()
    }

    /// Cube index holding `rgb`, if `rgb` lies on the cube grid.
    #[must_use]
    pub fn cube_index_of(&self, rgb: Rgb) -> Option<u8> {
        self.by_cube_color.get(&rgb).copied()
    }

    /// Whether `index` falls in the cube sub-range.
    #[must_use]
    pub const fn is_cube(index: u8) -> bool {
        index >= CUBE_START && index <= CUBE_END
    }

    /// `(index, color)` pairs in index order.
    pub fn entries(&self) -> impl Iterator<Item = (u8, Rgb)> + '_ {
        (0u8..).zip(self.entries.iter().copied())
    }
}
