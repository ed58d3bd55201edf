//! UI Constants

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 960.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 820.0;

/// Sample line rendered for every style in the specimen
pub const SPECIMEN_SAMPLE: &str =
    "The quick brown fox jumps over the lazy dog 다람쥐 헌 쳇바퀴에 타고파";

/// Width of the style key column in the specimen
pub const SPECIMEN_KEY_WIDTH: f32 = 180.0;
