//! The public colorizing surface.
//!
//! A [`Colorizer`] owns an immutable [`Palette`] and turns hex colors or
//! palette indices plus an optional style into escape sequences. It holds no
//! mutable state and can be shared across threads freely.
//!
//! # Examples
//!
//! ```
//! use ansi_rgb::Colorizer;
//!
//! let colorizer = Colorizer::new();
//!
//! assert_eq!(colorizer.quantize("#ff8700").unwrap(), 208);
//! assert_eq!(
//!     colorizer.color_by_index(1, Some(2), Some("bold")),
//!     "\x1b[0m\x1b[1m\x1b[48;5;2m\x1b[38;5;1m"
//! );
//!
//! let warning = colorizer.color_by_rgb("#FFFF55", Some("#000088"), None::<&str>).unwrap();
//! print!("{warning}careful{}", colorizer.reset());
//! ```

use crate::color::{ColorError, Rgb};
use crate::escape;
use crate::palette::{PALETTE_SIZE, Palette};
use crate::presets::Preset;
use crate::quantize::{self, MatchPolicy};
use crate::style::{Attributes, StyleArg};

/// Highest index of the 256-color space.
const MAX_INDEX: u32 = 255;

/// Builder for [`Colorizer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorizerBuilder {
    match_policy: MatchPolicy,
    reset_prefix: bool,
}

impl Default for ColorizerBuilder {
    fn default() -> Self {
        Self {
            match_policy: MatchPolicy::default(),
            reset_prefix: true,
        }
    }
}

impl ColorizerBuilder {
    /// Create a builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// How quantized colors resolve to indices.
    #[must_use]
    pub fn match_policy(mut self, policy: MatchPolicy) -> Self {
        self.match_policy = policy;
        self
    }

    /// Whether color sequences start with a reset. Enabled by default.
    #[must_use]
    pub fn reset_prefix(mut self, enabled: bool) -> Self {
        self.reset_prefix = enabled;
        self
    }

    /// Build the colorizer, constructing its palette.
    #[must_use]
    pub fn build(self) -> Colorizer {
        Colorizer {
            palette: Palette::new(),
            match_policy: self.match_policy,
            reset_prefix: self.reset_prefix,
        }
    }
}

/// Converts colors to terminal escape sequences using the indexed palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Colorizer {
    palette: Palette,
    match_policy: MatchPolicy,
    reset_prefix: bool,
}

impl Default for Colorizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Colorizer {
    /// Create a colorizer with default settings.
    #[must_use]
    pub fn new() -> Self {
        ColorizerBuilder::default().build()
    }

    /// Start configuring a colorizer.
    #[must_use]
    pub fn builder() -> ColorizerBuilder {
        ColorizerBuilder::default()
    }

    /// The palette colors are matched against.
    #[must_use]
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    /// How quantized colors resolve to indices.
    #[must_use]
    pub const fn match_policy(&self) -> MatchPolicy {
        self.match_policy
    }

    /// Number of palette entries (232).
    #[must_use]
    pub const fn palette_size(&self) -> usize {
        PALETTE_SIZE
    }

    /// `ESC[0m`.
    #[must_use]
    pub fn reset(&self) -> &'static str {
        escape::RESET
    }

    /// Style sequence, or `""` when the style is unrecognized.
    #[must_use]
    pub fn style<'a>(&self, style: impl Into<StyleArg<'a>>) -> String {
        escape::style(style.into().resolve())
    }

    /// One style sequence per attribute in `attrs`.
    #[must_use]
    pub fn styles(&self, attrs: Attributes) -> String {
        escape::attributes(attrs)
    }

    /// The cube color nearest to `hex`.
    ///
    /// # Errors
    ///
    /// [`ColorError::InvalidColorFormat`] if `hex` is not a 6-digit hex color.
    pub fn closest_rgb(&self, hex: &str) -> Result<Rgb, ColorError> {
        Ok(quantize::snap_to_cube(Rgb::parse(hex)?))
    }

    /// Palette index nearest to `hex`.
    ///
    /// Every well-formed input resolves; see [`MatchPolicy`] for which index
    /// is chosen when a basic color and a cube entry coincide.
    ///
    /// # Errors
    ///
    /// [`ColorError::InvalidColorFormat`] if `hex` is not a 6-digit hex color.
    pub fn quantize(&self, hex: &str) -> Result<u8, ColorError> {
        Ok(self.quantize_rgb(Rgb::parse(hex)?))
    }

    /// Palette index nearest to `rgb`.
    #[must_use]
    pub fn quantize_rgb(&self, rgb: Rgb) -> u8 {
        quantize::nearest_index(&self.palette, rgb, self.match_policy)
    }

    /// RGB value of a palette index.
    ///
    /// # Errors
    ///
    /// - [`ColorError::IndexOutOfRange`] for indices above 255.
    /// - [`ColorError::UnmappedIndex`] for the grayscale ramp (232-255).
    pub fn ansi_to_rgb(&self, index: u32) -> Result<Rgb, ColorError> {
        if index > MAX_INDEX {
            return Err(ColorError::IndexOutOfRange(index));
        }
        u8::try_from(index)
            .ok()
            .and_then(|i| self.palette.rgb_of(i))
            .ok_or(ColorError::UnmappedIndex(index))
    }

    /// Color sequences only (no reset or style) for hex colors.
    ///
    /// # Errors
    ///
    /// Propagates [`ColorError::InvalidColorFormat`] from either color.
    pub fn rgb_to_ansi(&self, fg: &str, bg: Option<&str>) -> Result<String, ColorError> {
        let fg = self.quantize(fg)?;
        let bg = bg.map(|bg| self.quantize(bg)).transpose()?;
        Ok(escape::colors(fg, bg))
    }

    /// Reset, style, background, then foreground.
    #[must_use]
    pub fn color_by_index<'a, S>(&self, fg: u8, bg: Option<u8>, style: Option<S>) -> String
    where
        S: Into<StyleArg<'a>>,
    {
        let mut out = String::with_capacity(32);
        if self.reset_prefix {
            out.push_str(escape::RESET);
        }
        if let Some(style) = style {
            out.push_str(&self.style(style));
        }
        out.push_str(&escape::colors(fg, bg));
        out
    }

    /// Quantize `fg` and `bg`, then behave like [`Self::color_by_index`].
    ///
    /// # Errors
    ///
    /// Propagates [`ColorError::InvalidColorFormat`] from either color.
    pub fn color_by_rgb<'a, S>(
        &self,
        fg: &str,
        bg: Option<&str>,
        style: Option<S>,
    ) -> Result<String, ColorError>
    where
        S: Into<StyleArg<'a>>,
    {
        let fg = self.quantize(fg)?;
        let bg = bg.map(|bg| self.quantize(bg)).transpose()?;
        Ok(self.color_by_index(fg, bg, style))
    }

    /// Sequence for a predefined color.
    #[must_use]
    pub fn preset(&self, preset: Preset) -> String {
        self.color_by_index(self.quantize_rgb(preset.rgb()), None, preset.style())
    }
}
