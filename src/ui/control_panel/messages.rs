// SPDX-License-Identifier: MPL-2.0
//! Panel message/event types re-exported by the facade.

use crate::domain::fragment::{FragmentId, Opacity};

/// Arrow-button directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NudgeDirection {
    Up,
    Down,
    Left,
    Right,
}

impl NudgeDirection {
    /// Translation produced by one press, for a step of `step` units.
    #[must_use]
    pub fn delta(self, step: f64) -> (f64, f64) {
        match self {
            NudgeDirection::Up => (0.0, -step),
            NudgeDirection::Down => (0.0, step),
            NudgeDirection::Left => (-step, 0.0),
            NudgeDirection::Right => (step, 0.0),
        }
    }
}

/// Messages emitted directly by the panel widgets.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    RotateClockwise,
    RotateCounterClockwise,
    /// Quick rotation by `+angle_step` degrees.
    RotateStepForward,
    /// Quick rotation by `-angle_step` degrees.
    RotateStepBackward,
    AngleInputChanged(String),
    AngleInputSubmitted,
    FlipHorizontal,
    FlipVertical,
    XInputChanged(String),
    YInputChanged(String),
    PositionSubmitted,
    Nudge(NudgeDirection),
    Center,
    VisibilityToggled(bool),
    OpacityChanged(u8),
    ResetTransforms,
}

/// Addressee of a transform request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Fragment(FragmentId),
    /// A multi-fragment selection, in selection order.
    Group(Vec<FragmentId>),
}

/// The transform a collaborator is asked to perform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransformKind {
    RotateCw,
    RotateCcw,
    /// Relative rotation in degrees.
    RotateAngle(f64),
    FlipHorizontal,
    FlipVertical,
    /// Relative translation. `(0, 0)` asks the collaborator to recenter.
    Translate {
        dx: f64,
        dy: f64,
    },
    /// Absolute rotation in degrees.
    SetRotation(f64),
    SetVisibility(bool),
}

impl TransformKind {
    /// Stable snake_case name, used in logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            TransformKind::RotateCw => "rotate_cw",
            TransformKind::RotateCcw => "rotate_ccw",
            TransformKind::RotateAngle(_) => "rotate_angle",
            TransformKind::FlipHorizontal => "flip_horizontal",
            TransformKind::FlipVertical => "flip_vertical",
            TransformKind::Translate { .. } => "translate",
            TransformKind::SetRotation(_) => "set_rotation",
            TransformKind::SetVisibility(_) => "set_visibility",
        }
    }

    /// Whether a group selection may request this transform.
    #[must_use]
    pub fn applies_to_group(&self) -> bool {
        matches!(
            self,
            TransformKind::RotateCw | TransformKind::RotateCcw | TransformKind::Translate { .. }
        )
    }
}

/// Events propagated to the owner of the fragments.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    TransformRequested { target: Target, kind: TransformKind },
    ResetRequested(FragmentId),
    /// The opacity slider moved. The panel already updated its own snapshot.
    OpacityChanged { id: FragmentId, opacity: Opacity },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nudge_directions_follow_screen_axes() {
        assert_eq!(NudgeDirection::Up.delta(10.0), (0.0, -10.0));
        assert_eq!(NudgeDirection::Down.delta(10.0), (0.0, 10.0));
        assert_eq!(NudgeDirection::Left.delta(10.0), (-10.0, 0.0));
        assert_eq!(NudgeDirection::Right.delta(10.0), (10.0, 0.0));
    }

    #[test]
    fn only_coarse_transforms_apply_to_groups() {
        assert!(TransformKind::RotateCw.applies_to_group());
        assert!(TransformKind::Translate { dx: 1.0, dy: 0.0 }.applies_to_group());
        assert!(!TransformKind::FlipVertical.applies_to_group());
        assert!(!TransformKind::RotateAngle(45.0).applies_to_group());
        assert!(!TransformKind::SetVisibility(true).applies_to_group());
    }

    #[test]
    fn transform_names_are_snake_case() {
        assert_eq!(TransformKind::SetRotation(0.0).name(), "set_rotation");
        assert_eq!(TransformKind::FlipHorizontal.name(), "flip_horizontal");
    }
}
