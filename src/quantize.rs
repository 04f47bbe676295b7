//! Nearest-color matching onto the color cube.
//!
//! Each channel is snapped independently to the closer of the two cube levels
//! that bracket it. Ties go to the higher level. The snapped triplet always
//! lies on the cube grid, so resolving it against the cube sub-range cannot
//! fail.

use crate::color::Rgb;
use crate::palette::{CUBE_LEVELS, Palette, cube_index};

/// How a snapped triplet is resolved to a palette index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MatchPolicy {
    /// Resolve against the cube (16-231) only. Total for every input.
    #[default]
    CubeOnly,
    /// Resolve against the whole palette, lowest index first, so a snapped
    /// color equal to a basic literal (e.g. `ff0000`) yields the basic index.
    /// Falls back to the cube when no basic color matches.
    PreferBasic,
}

/// Level index (`0..6`) of the cube level nearest to `value`.
///
/// Scans adjacent level pairs in order and stops at the first pair that
/// brackets `value`; the lower level wins only when strictly closer.
#[must_use]
pub fn nearest_level(value: u8) -> u8 {
    for (i, pair) in (0u8..).zip(CUBE_LEVELS.windows(2)) {
        let (lo, hi) = (pair[0], pair[1]);
        if (lo..=hi).contains(&value) {
            return if value.abs_diff(lo) < value.abs_diff(hi) { i } else { i + 1 };
        }
    }
    // Levels span 0x00..=0xff, so every value is bracketed above
    5
}

/// Snap a single channel value to the nearest cube level.
#[must_use]
pub fn snap_channel(value: u8) -> u8 {
    CUBE_LEVELS[usize::from(nearest_level(value))]
}

/// Snap every channel of `rgb` onto the cube grid.
#[must_use]
pub fn snap_to_cube(rgb: Rgb) -> Rgb {
    Rgb::new(
        snap_channel(rgb.red),
        snap_channel(rgb.green),
        snap_channel(rgb.blue),
    )
}

/// Map `rgb` to its nearest palette index under `policy`.
#[must_use]
pub fn nearest_index(palette: &Palette, rgb: Rgb, policy: MatchPolicy) -> u8 {
    let snapped = snap_to_cube(rgb);
    let cube = cube_index(
        nearest_level(rgb.red),
        nearest_level(rgb.green),
        nearest_level(rgb.blue),
    );
    debug_assert_eq!(palette.cube_index_of(snapped), Some(cube));

    let index = match policy {
        MatchPolicy::CubeOnly => cube,
        MatchPolicy::PreferBasic => palette.index_of_rgb(snapped).unwrap_or(cube),
    };

    log::trace!("quantized {rgb} -> {snapped} -> {index} ({policy:?})");
    index
}
