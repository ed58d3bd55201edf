//! Views

pub mod specimen;

pub use specimen::Specimen;
