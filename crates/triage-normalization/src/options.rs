//! Normalization options.

use crate::narrative::NarrativeFallbacks;
use crate::orientation::Orientation;

/// How the table layout is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrientationMode {
    /// Infer from the first column (see [`crate::detect_orientation`]).
    #[default]
    Detect,
    /// Use the given layout regardless of content.
    Force(Orientation),
}

#[derive(Debug, Clone, Default)]
pub struct NormalizeOptions {
    pub orientation: OrientationMode,
    pub fallbacks: NarrativeFallbacks,
}

impl NormalizeOptions {
    #[must_use]
    pub fn with_orientation(mut self, mode: OrientationMode) -> Self {
        self.orientation = mode;
        self
    }

    #[must_use]
    pub fn with_fallbacks(mut self, fallbacks: NarrativeFallbacks) -> Self {
        self.fallbacks = fallbacks;
        self
    }
}
