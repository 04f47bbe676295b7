//! # ansi_rgb
//!
//! Approximate 24-bit RGB colors with the indexed 256-color terminal palette
//! and build the SGR escape sequences that display them.
//!
//! ## Quick Start
//!
//! ```rust
//! use ansi_rgb::prelude::*;
//!
//! let colorizer = Colorizer::new();
//! let heading = colorizer.color_by_rgb("#FF3100", Some("#DDDDDD"), Some("bold")).unwrap();
//! println!("{heading}Style and colors{}", colorizer.reset());
//! ```
//!
//! ## Core Concepts
//!
//! - **Palette**: the 16 basic colors plus the 6x6x6 color cube (indices 0-231)
//! - **Quantization**: snapping each channel to the nearest cube level
//! - **Colorizer**: the entry point producing escape sequences
//! - **Style**: bold, dim, italic, underline, blink, reverse (or normal)

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod color;
pub mod palette;
pub mod quantize;
pub mod style;
pub mod escape;
pub mod colorizer;
pub mod presets;

/// Re-exports for convenient usage
pub mod prelude {
    pub use crate::color::{ColorError, Rgb};
    pub use crate::colorizer::{Colorizer, ColorizerBuilder};
    pub use crate::palette::Palette;
    pub use crate::presets::Preset;
    pub use crate::quantize::MatchPolicy;
    pub use crate::style::{Attributes, StyleArg, TextStyle};
}

// Re-export key types at crate root
pub use color::{ColorError, Rgb};
pub use colorizer::{Colorizer, ColorizerBuilder};
pub use palette::Palette;
pub use quantize::MatchPolicy;
pub use style::{Attributes, TextStyle};
