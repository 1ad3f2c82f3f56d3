// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! The bounds themselves live on the domain newtypes; this module re-exports
//! them under configuration-oriented names so settings code has one place to
//! look.

use crate::domain::fragment::{angle_step_bounds, nudge_bounds};

// ==========================================================================
// Panel Defaults
// ==========================================================================

/// Default arrow-button translation distance (document units).
pub const DEFAULT_NUDGE_STEP: f64 = nudge_bounds::DEFAULT;

/// Minimum arrow-button translation distance.
pub const MIN_NUDGE_STEP: f64 = nudge_bounds::MIN;

/// Maximum arrow-button translation distance.
pub const MAX_NUDGE_STEP: f64 = nudge_bounds::MAX;

/// Default rotation of the quick angle buttons (degrees).
pub const DEFAULT_ANGLE_STEP: f64 = angle_step_bounds::DEFAULT;

/// Minimum rotation of the quick angle buttons.
pub const MIN_ANGLE_STEP: f64 = angle_step_bounds::MIN;

/// Maximum rotation of the quick angle buttons.
pub const MAX_ANGLE_STEP: f64 = angle_step_bounds::MAX;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_lie_within_bounds() {
        assert!((MIN_NUDGE_STEP..=MAX_NUDGE_STEP).contains(&DEFAULT_NUDGE_STEP));
        assert!((MIN_ANGLE_STEP..=MAX_ANGLE_STEP).contains(&DEFAULT_ANGLE_STEP));
    }

    #[test]
    fn arrow_buttons_move_ten_units_by_default() {
        assert_eq!(DEFAULT_NUDGE_STEP, 10.0);
        assert_eq!(DEFAULT_ANGLE_STEP, 45.0);
    }
}
