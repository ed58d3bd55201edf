//! Theme - Typography and Fonts
//!
//! - [`typography`]: the fixed table of named text styles
//! - [`fonts`]: face resolution with system fallback, and the process-wide [`Typography`]

pub mod fonts;
pub mod typography;

pub use fonts::{
    AppliedText, FontResolver, FontSource, ResolvedFont, SYSTEM_FONT_FAMILY, Typography,
    TypographySlot,
};
pub use typography::{
    ButtonSize, Emphasis, FontFamily, StyleGroup, StyleName, TextStyle, WeightToken, text_style,
};
