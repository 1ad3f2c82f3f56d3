// SPDX-License-Identifier: MPL-2.0
//! Fragment newtypes.
//!
//! Type-safe wrappers for fragment and panel values, ensuring they are always
//! within valid ranges.

// =============================================================================
// Opacity
// =============================================================================

/// Fragment opacity, guaranteed to be within 0.0–1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Opacity(f32);

impl Opacity {
    /// Fully opaque.
    pub const OPAQUE: Self = Self(1.0);

    /// Creates a new opacity, clamping the value to 0.0–1.0.
    ///
    /// NaN is treated as fully opaque.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::OPAQUE;
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Creates an opacity from a slider percentage (values above 100 clamp).
    #[must_use]
    pub fn from_percent(percent: u8) -> Self {
        Self::new(f32::from(percent) / 100.0)
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns the opacity as a whole percentage (0–100).
    #[must_use]
    pub fn percent(self) -> u8 {
        // The clamp guarantees 0.0..=100.0, so the cast cannot truncate.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let percent = (self.0 * 100.0).round() as u8;
        percent
    }
}

impl Default for Opacity {
    fn default() -> Self {
        Self::OPAQUE
    }
}

// =============================================================================
// AngleDegrees
// =============================================================================

/// Free rotation bounds (-360° to +360°).
pub mod angle_bounds {
    pub const MIN: f64 = -360.0;
    pub const MAX: f64 = 360.0;
}

/// Free rotation angle as typed into the angle input.
///
/// Clamped to -360°..=360° and rounded to one decimal place.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AngleDegrees(f64);

impl AngleDegrees {
    #[must_use]
    pub fn new(degrees: f64) -> Self {
        if degrees.is_nan() {
            return Self(0.0);
        }
        let clamped = degrees.clamp(angle_bounds::MIN, angle_bounds::MAX);
        Self((clamped * 10.0).round() / 10.0)
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

// =============================================================================
// NudgeStep
// =============================================================================

/// Arrow-button translation step bounds, in document units.
pub mod nudge_bounds {
    pub const MIN: f64 = 1.0;
    pub const MAX: f64 = 500.0;
    pub const DEFAULT: f64 = 10.0;
}

/// Distance moved by one press of an arrow button.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NudgeStep(f64);

impl NudgeStep {
    #[must_use]
    pub fn new(units: f64) -> Self {
        if units.is_nan() {
            return Self::default();
        }
        Self(units.clamp(nudge_bounds::MIN, nudge_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for NudgeStep {
    fn default() -> Self {
        Self(nudge_bounds::DEFAULT)
    }
}

// =============================================================================
// AngleStep
// =============================================================================

/// Quick-rotation button bounds, in degrees.
pub mod angle_step_bounds {
    pub const MIN: f64 = 1.0;
    pub const MAX: f64 = 180.0;
    pub const DEFAULT: f64 = 45.0;
}

/// Rotation applied by the `±45°` quick buttons.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleStep(f64);

impl AngleStep {
    #[must_use]
    pub fn new(degrees: f64) -> Self {
        if degrees.is_nan() {
            return Self::default();
        }
        Self(degrees.clamp(angle_step_bounds::MIN, angle_step_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for AngleStep {
    fn default() -> Self {
        Self(angle_step_bounds::DEFAULT)
    }
}
