//! Components - Reusable UI Helpers
//!
//! Pure UI helpers that don't do I/O.

pub mod text_style;

pub use text_style::{TextStyleTarget, TypographyExt, apply, apply_with};
