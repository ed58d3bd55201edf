//! State Management Layer
//!
//! Persisted settings loaded at startup.

mod settings;

pub use settings::*;
