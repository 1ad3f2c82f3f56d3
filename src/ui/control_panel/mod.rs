// SPDX-License-Identifier: MPL-2.0
//! Fragment control panel.
//!
//! The panel follows the same "state down, messages up" pattern as the rest of
//! the UI. The owner pushes fragment snapshots in with [`State::set_selection`]
//! or [`State::set_group_selection`]; user edits come back out of
//! [`State::update`] as [`Event`]s. The panel never applies a transform itself.
//!
//! Pushing a selection rewrites the edit buffers directly and produces no
//! message, so refreshing the controls can never echo an event back to the
//! owner.

mod messages;
mod selection;
mod view;

pub use messages::{Event, Message, NudgeDirection, Target, TransformKind};
pub use selection::{ControlEnablement, Selection, SelectionMode};
pub use view::ViewContext;

use crate::config::PanelConfig;
use crate::domain::fragment::{
    AngleDegrees, AngleStep, Fragment, FragmentId, NudgeStep, Opacity,
};
use iced::Element;
use tracing::debug;

/// Position inputs accept values within ±this bound.
pub const POSITION_LIMIT: f64 = 999_999.0;

/// Local UI state for the control panel.
#[derive(Debug, Clone)]
pub struct State {
    selection: Selection,
    /// Text of the X input.
    x_input: String,
    /// Text of the Y input.
    y_input: String,
    /// Text of the angle input.
    angle_input: String,
    visible: bool,
    opacity_percent: u8,
    nudge_step: NudgeStep,
    angle_step: AngleStep,
}

impl Default for State {
    fn default() -> Self {
        Self::new(NudgeStep::default(), AngleStep::default())
    }
}

impl State {
    #[must_use]
    pub fn new(nudge_step: NudgeStep, angle_step: AngleStep) -> Self {
        Self {
            selection: Selection::None,
            x_input: String::new(),
            y_input: String::new(),
            angle_input: String::new(),
            visible: true,
            opacity_percent: Opacity::OPAQUE.percent(),
            nudge_step,
            angle_step,
        }
    }

    #[must_use]
    pub fn from_config(config: &PanelConfig) -> Self {
        Self::new(config.nudge_step(), config.angle_step())
    }

    /// Shows a single fragment, or nothing.
    pub fn set_selection(&mut self, fragment: Option<Fragment>) {
        self.selection = Selection::single(fragment);
        self.refresh_controls();
    }

    /// Shows a multi-fragment selection.
    ///
    /// `fragments` only needs to contain the first selected fragment; the
    /// rest are not displayed.
    pub fn set_group_selection(&mut self, ids: Vec<FragmentId>, fragments: Vec<Fragment>) {
        self.selection = Selection::group(ids, fragments);
        self.refresh_controls();
    }

    /// Update the state and return the events for the owner.
    pub fn update(&mut self, message: Message) -> Vec<Event> {
        let enabled = self.enablement();
        let events = match message {
            Message::RotateClockwise if enabled.rotate_90 => {
                self.request_transform(TransformKind::RotateCw)
            }
            Message::RotateCounterClockwise if enabled.rotate_90 => {
                self.request_transform(TransformKind::RotateCcw)
            }
            Message::RotateStepForward if enabled.free_angle => {
                self.request_transform(TransformKind::RotateAngle(self.angle_step.value()))
            }
            Message::RotateStepBackward if enabled.free_angle => {
                self.request_transform(TransformKind::RotateAngle(-self.angle_step.value()))
            }
            Message::AngleInputChanged(value) if enabled.free_angle => {
                self.angle_input = value;
                Vec::new()
            }
            Message::AngleInputSubmitted if enabled.free_angle => self.submit_angle(),
            Message::FlipHorizontal if enabled.flip => {
                self.request_transform(TransformKind::FlipHorizontal)
            }
            Message::FlipVertical if enabled.flip => {
                self.request_transform(TransformKind::FlipVertical)
            }
            Message::XInputChanged(value) if enabled.position => {
                self.x_input = value;
                Vec::new()
            }
            Message::YInputChanged(value) if enabled.position => {
                self.y_input = value;
                Vec::new()
            }
            Message::PositionSubmitted if enabled.position => self.submit_position(),
            Message::Nudge(direction) if enabled.arrows => {
                let (dx, dy) = direction.delta(self.nudge_step.value());
                self.request_transform(TransformKind::Translate { dx, dy })
            }
            Message::Center if enabled.arrows => {
                self.request_transform(TransformKind::Translate { dx: 0.0, dy: 0.0 })
            }
            Message::VisibilityToggled(visible) if enabled.display => {
                self.toggle_visibility(visible)
            }
            Message::OpacityChanged(percent) if enabled.display => self.change_opacity(percent),
            Message::ResetTransforms if enabled.reset => self.request_reset(),
            ignored => {
                debug!(?ignored, "message for a disabled control");
                Vec::new()
            }
        };

        for event in &events {
            debug!(?event, "control panel event");
        }
        events
    }

    /// Render the panel.
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        view::panel(self, ctx)
    }

    /// Builds the events for `kind` against the current selection.
    ///
    /// Group rotation becomes one event addressed to the whole group; group
    /// translation becomes one event per member with the same delta. Other
    /// transforms are not available to groups and yield nothing.
    #[must_use]
    pub fn request_transform(&self, kind: TransformKind) -> Vec<Event> {
        match &self.selection {
            Selection::None => Vec::new(),
            Selection::Single(fragment) => vec![Event::TransformRequested {
                target: Target::Fragment(fragment.id.clone()),
                kind,
            }],
            Selection::Group { .. } if !kind.applies_to_group() => Vec::new(),
            Selection::Group { ids, .. } => match kind {
                TransformKind::Translate { .. } => ids
                    .iter()
                    .map(|id| Event::TransformRequested {
                        target: Target::Fragment(id.clone()),
                        kind,
                    })
                    .collect(),
                _ => vec![Event::TransformRequested {
                    target: Target::Group(ids.clone()),
                    kind,
                }],
            },
        }
    }

    /// One reset request per selected fragment.
    #[must_use]
    pub fn request_reset(&self) -> Vec<Event> {
        self.selection
            .ids()
            .into_iter()
            .map(Event::ResetRequested)
            .collect()
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    #[must_use]
    pub fn mode(&self) -> SelectionMode {
        self.selection.mode()
    }

    #[must_use]
    pub fn enablement(&self) -> ControlEnablement {
        ControlEnablement::for_mode(self.mode())
    }

    #[must_use]
    pub fn x_input(&self) -> &str {
        &self.x_input
    }

    #[must_use]
    pub fn y_input(&self) -> &str {
        &self.y_input
    }

    #[must_use]
    pub fn angle_input(&self) -> &str {
        &self.angle_input
    }

    #[must_use]
    pub fn is_visible_checked(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn opacity_percent(&self) -> u8 {
        self.opacity_percent
    }

    #[must_use]
    pub fn opacity_label(&self) -> String {
        format!("{}%", self.opacity_percent)
    }

    #[must_use]
    pub fn nudge_step(&self) -> NudgeStep {
        self.nudge_step
    }

    #[must_use]
    pub fn angle_step(&self) -> AngleStep {
        self.angle_step
    }

    /// Pushes the selection into the edit buffers.
    fn refresh_controls(&mut self) {
        match self.selection.fragment() {
            Some(fragment) => {
                self.x_input = format_decimal(fragment.x);
                self.y_input = format_decimal(fragment.y);
                self.angle_input = format_decimal(AngleDegrees::new(fragment.rotation).value());
                self.visible = fragment.visible;
                self.opacity_percent = fragment.opacity.percent();
            }
            None => {
                self.x_input.clear();
                self.y_input.clear();
                self.angle_input.clear();
                self.visible = true;
                self.opacity_percent = Opacity::OPAQUE.percent();
            }
        }
    }

    fn submit_position(&mut self) -> Vec<Event> {
        let Some(fragment) = self.selection.fragment() else {
            return Vec::new();
        };
        let (x, y) = (fragment.x, fragment.y);
        let dx = axis_delta(&self.x_input, x);
        let dy = axis_delta(&self.y_input, y);

        // Normalize what was typed, restoring anything unparsable.
        self.x_input = format_decimal(x + dx.unwrap_or(0.0));
        self.y_input = format_decimal(y + dy.unwrap_or(0.0));

        let (dx, dy) = (dx.unwrap_or(0.0), dy.unwrap_or(0.0));
        if dx == 0.0 && dy == 0.0 {
            return Vec::new();
        }
        self.request_transform(TransformKind::Translate { dx, dy })
    }

    fn submit_angle(&mut self) -> Vec<Event> {
        let Some(fragment) = self.selection.fragment() else {
            return Vec::new();
        };
        let current = AngleDegrees::new(fragment.rotation);
        let Some(typed) = parse_decimal(self.angle_input.trim_end_matches('°')) else {
            self.angle_input = format_decimal(current.value());
            return Vec::new();
        };
        let angle = AngleDegrees::new(typed);
        self.angle_input = format_decimal(angle.value());
        if angle == current {
            return Vec::new();
        }
        self.request_transform(TransformKind::SetRotation(angle.value()))
    }

    fn toggle_visibility(&mut self, visible: bool) -> Vec<Event> {
        self.visible = visible;
        self.request_transform(TransformKind::SetVisibility(visible))
    }

    fn change_opacity(&mut self, percent: u8) -> Vec<Event> {
        let opacity = Opacity::from_percent(percent);
        let Some(fragment) = self.selection.fragment_mut() else {
            return Vec::new();
        };
        fragment.opacity = opacity;
        let id = fragment.id.clone();
        self.opacity_percent = opacity.percent();
        vec![Event::OpacityChanged { id, opacity }]
    }
}

/// One decimal place, matching the precision of the inputs.
fn format_decimal(value: f64) -> String {
    format!("{value:.1}")
}

fn parse_decimal(input: &str) -> Option<f64> {
    input
        .trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Delta between a typed coordinate and the current one.
///
/// An input still showing the current value yields zero even when the stored
/// coordinate has more precision than the input displays. `None` means the
/// text could not be parsed.
fn axis_delta(input: &str, current: f64) -> Option<f64> {
    if input.trim() == format_decimal(current) {
        return Some(0.0);
    }
    let typed = parse_decimal(input)?.clamp(-POSITION_LIMIT, POSITION_LIMIT);
    Some(typed - current)
}
