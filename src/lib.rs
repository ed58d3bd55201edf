//! Typekit Library
//!
//! Semantic typography for GPUI applications: a fixed table of named text
//! styles (body, caption, title, button, ...), font resolution against bundled
//! faces with a system-font fallback, and helpers that apply a style to any
//! styled element.
//!
//! ```ignore
//! use typekit::components::TypographyExt;
//! use typekit::theme::{Emphasis, StyleName};
//!
//! div().typography().body().bold().child("Hello");
//! div().text_style_named(StyleName::Caption1(Emphasis::Default)).child("12:30");
//! ```

pub mod app;
pub mod assets;
pub mod components;
pub mod constants;
pub mod error;
pub mod helpers;
pub mod states;
pub mod theme;
pub mod views;
