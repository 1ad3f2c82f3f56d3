// SPDX-License-Identifier: MPL-2.0
//! Panel layout: info, transformations, position and display sections.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{
    button, checkbox, container, progress_bar, rule, scrollable, slider, text, text_input,
    tooltip, Column, Row, Space, Text,
};
use iced::{Element, Length};

use super::{Message, NudgeDirection, Selection, State};

/// Contextual data needed to render the panel.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// The three lines of the info section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoLines {
    pub title: String,
    pub size: String,
    pub file: String,
}

impl InfoLines {
    pub fn from_state(state: &State, i18n: &I18n) -> Self {
        match state.selection() {
            Selection::None => Self {
                title: i18n.tr("panel-no-selection"),
                size: i18n.tr_with_args("panel-size", &[("size", "-")]),
                file: i18n.tr_with_args("panel-file", &[("file", "-")]),
            },
            Selection::Group { ids, .. } => {
                let multiple = i18n.tr("panel-multiple");
                Self {
                    title: i18n.tr_with_args("panel-group-title", &[("count", &ids.len().to_string())]),
                    size: i18n.tr_with_args("panel-size", &[("size", &multiple)]),
                    file: i18n.tr_with_args("panel-file", &[("file", &multiple)]),
                }
            }
            Selection::Single(fragment) => {
                let title = fragment.display_name().map_or_else(
                    || i18n.tr_with_args("panel-fallback-name", &[("id", fragment.id.short())]),
                    ToString::to_string,
                );
                let (width, height) = fragment.original_size;
                let size = format!("{width} × {height}");
                let file = fragment.file_path.display().to_string();
                Self {
                    title,
                    size: i18n.tr_with_args("panel-size", &[("size", &size)]),
                    file: i18n.tr_with_args("panel-file", &[("file", &file)]),
                }
            }
        }
    }
}

pub fn panel<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .push(info_section(state, &ctx))
        .push(transform_section(state, &ctx))
        .push(position_section(state, &ctx))
        .push(display_section(state, &ctx));

    container(scrollable(content).height(Length::Fill))
        .width(Length::Fixed(sizing::SIDEBAR_WIDTH))
        .height(Length::Fill)
        .style(styles::container::sidebar)
        .into()
}

fn section<'a>(title: String, body: Column<'a, Message>) -> Element<'a, Message> {
    container(
        Column::new()
            .spacing(spacing::XS)
            .push(text(title).size(typography::BODY_LG))
            .push(rule::horizontal(1))
            .push(body),
    )
    .padding(spacing::SM)
    .width(Length::Fill)
    .style(styles::container::panel)
    .into()
}

fn info_section<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let lines = InfoLines::from_state(state, ctx.i18n);

    let body = Column::new()
        .spacing(spacing::XXS)
        .push(text(lines.title).size(typography::TITLE_SM))
        .push(text(lines.size).size(typography::BODY))
        .push(text(lines.file).size(typography::BODY_SM));

    section(ctx.i18n.tr("panel-info-title"), body)
}

fn labeled<'a>(label: String, control: impl Into<Element<'a, Message>>) -> Row<'a, Message> {
    Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(
            text(label)
                .size(typography::BODY)
                .width(Length::Fixed(sizing::ARROW_BUTTON * 2.0)),
        )
        .push(control)
}

fn action_button<'a>(label: String, message: Option<Message>) -> button::Button<'a, Message> {
    button(text(label).size(typography::BODY))
        .on_press_maybe(message)
        .padding(spacing::XS)
        .style(button::secondary)
}

fn with_tooltip<'a>(
    content: impl Into<Element<'a, Message>>,
    hint: String,
) -> Element<'a, Message> {
    tooltip(content, Text::new(hint), tooltip::Position::Top)
        .gap(4)
        .into()
}

fn transform_section<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let enabled = state.enablement();
    let i18n = ctx.i18n;
    let when = |on: bool, message: Message| on.then_some(message);

    let rotate_row = Row::new()
        .spacing(spacing::XS)
        .push(with_tooltip(
            action_button(
                "↺ 90°".to_string(),
                when(enabled.rotate_90, Message::RotateCounterClockwise),
            ),
            i18n.tr("panel-rotate-ccw-tooltip"),
        ))
        .push(with_tooltip(
            action_button(
                "↻ 90°".to_string(),
                when(enabled.rotate_90, Message::RotateClockwise),
            ),
            i18n.tr("panel-rotate-cw-tooltip"),
        ));

    let step = state.angle_step().value();
    let angle_input = text_input("0.0", state.angle_input())
        .on_input_maybe(enabled.free_angle.then_some(Message::AngleInputChanged))
        .on_submit(Message::AngleInputSubmitted)
        .padding(spacing::XXS)
        .size(typography::BODY)
        .width(Length::Fill);
    let angle_row = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(angle_input)
        .push(text("°").size(typography::BODY))
        .push(with_tooltip(
            action_button(
                format!("{step}°"),
                when(enabled.free_angle, Message::RotateStepForward),
            ),
            i18n.tr_with_args("panel-rotate-step-tooltip", &[("angle", &format!("{step}"))]),
        ))
        .push(with_tooltip(
            action_button(
                format!("-{step}°"),
                when(enabled.free_angle, Message::RotateStepBackward),
            ),
            i18n.tr_with_args("panel-rotate-step-tooltip", &[("angle", &format!("-{step}"))]),
        ));

    let fragment = state.selection().fragment();
    let flipped_h = fragment.is_some_and(|f| f.flip_horizontal);
    let flipped_v = fragment.is_some_and(|f| f.flip_vertical);
    let flip_button = |label: String, message: Message, active: bool| {
        let btn = action_button(label, when(enabled.flip, message));
        if active {
            btn.style(styles::button::toggled)
        } else {
            btn
        }
    };
    let flip_row = Row::new()
        .spacing(spacing::XS)
        .push(flip_button(
            format!("↔ {}", i18n.tr("panel-flip-horizontal")),
            Message::FlipHorizontal,
            flipped_h,
        ))
        .push(flip_button(
            format!("↕ {}", i18n.tr("panel-flip-vertical")),
            Message::FlipVertical,
            flipped_v,
        ));

    let reset_button = button(text(i18n.tr("panel-reset")).size(typography::BODY))
        .on_press_maybe(when(enabled.reset, Message::ResetTransforms))
        .padding(spacing::XS)
        .width(Length::Fill)
        .style(styles::button::danger);

    let body = Column::new()
        .spacing(spacing::XS)
        .push(labeled(i18n.tr("panel-rotation-label"), rotate_row))
        .push(labeled(i18n.tr("panel-angle-label"), angle_row))
        .push(labeled(i18n.tr("panel-flip-label"), flip_row))
        .push(reset_button);

    section(i18n.tr("panel-transform-title"), body)
}

fn position_section<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let enabled = state.enablement();
    let i18n = ctx.i18n;

    let coordinate_input = |value: &'a str, on_input: fn(String) -> Message| {
        text_input("0.0", value)
            .on_input_maybe(enabled.position.then_some(on_input))
            .on_submit(Message::PositionSubmitted)
            .padding(spacing::XXS)
            .size(typography::BODY)
            .width(Length::Fill)
    };

    let arrow = |label: &'static str, message: Message| {
        button(text(label).size(typography::BODY))
            .on_press_maybe(enabled.arrows.then_some(message))
            .width(Length::Fixed(sizing::ARROW_BUTTON))
            .height(Length::Fixed(sizing::ARROW_BUTTON))
            .style(button::secondary)
    };
    let gap = || {
        Space::new()
            .width(Length::Fixed(sizing::ARROW_BUTTON))
            .height(Length::Fixed(sizing::ARROW_BUTTON))
    };

    let pad = Column::new()
        .spacing(spacing::XXS)
        .push(
            Row::new()
                .spacing(spacing::XXS)
                .push(gap())
                .push(arrow("↑", Message::Nudge(NudgeDirection::Up)))
                .push(gap()),
        )
        .push(
            Row::new()
                .spacing(spacing::XXS)
                .push(arrow("←", Message::Nudge(NudgeDirection::Left)))
                .push(with_tooltip(
                    arrow("⌂", Message::Center),
                    i18n.tr("panel-center-tooltip"),
                ))
                .push(arrow("→", Message::Nudge(NudgeDirection::Right))),
        )
        .push(
            Row::new()
                .spacing(spacing::XXS)
                .push(gap())
                .push(arrow("↓", Message::Nudge(NudgeDirection::Down)))
                .push(gap()),
        );

    let body = Column::new()
        .spacing(spacing::XS)
        .push(labeled(
            i18n.tr("panel-x-label"),
            coordinate_input(state.x_input(), Message::XInputChanged),
        ))
        .push(labeled(
            i18n.tr("panel-y-label"),
            coordinate_input(state.y_input(), Message::YInputChanged),
        ))
        .push(container(pad).center_x(Length::Fill));

    section(i18n.tr("panel-position-title"), body)
}

fn display_section<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let enabled = state.enablement();
    let i18n = ctx.i18n;

    let visible = checkbox(state.is_visible_checked()).label(i18n.tr("panel-visible"));
    let visible = if enabled.display {
        visible.on_toggle(Message::VisibilityToggled)
    } else {
        visible
    };

    let opacity: Element<'a, Message> = if enabled.display {
        slider(0..=100u8, state.opacity_percent(), Message::OpacityChanged)
            .step(1u8)
            .width(Length::Fill)
            .into()
    } else {
        progress_bar(0.0..=100.0, f32::from(state.opacity_percent())).into()
    };

    let opacity_row = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(text(i18n.tr("panel-opacity-label")).size(typography::BODY))
        .push(opacity)
        .push(
            text(state.opacity_label())
                .size(typography::BODY)
                .width(Length::Fixed(sizing::OPACITY_LABEL_WIDTH)),
        );

    let body = Column::new()
        .spacing(spacing::XS)
        .push(visible)
        .push(opacity_row);

    section(i18n.tr("panel-display-title"), body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fragment::Fragment;

    fn english() -> I18n {
        I18n::with_locale("en-US")
    }

    #[test]
    fn panel_renders_in_every_mode() {
        let i18n = english();
        let mut state = State::default();
        let _ = panel(&state, ViewContext { i18n: &i18n });

        state.set_selection(Some(Fragment::new("a", "a.png", (2, 2))));
        let _ = panel(&state, ViewContext { i18n: &i18n });

        state.set_group_selection(
            vec!["a".into(), "b".into()],
            vec![Fragment::new("a", "a.png", (2, 2))],
        );
        let _ = panel(&state, ViewContext { i18n: &i18n });
    }

    #[test]
    fn info_lines_without_selection() {
        let lines = InfoLines::from_state(&State::default(), &english());
        assert_eq!(lines.title, "No selection");
        assert_eq!(lines.size, "Size: -");
        assert_eq!(lines.file, "File: -");
    }

    #[test]
    fn info_lines_for_named_fragment() {
        let mut state = State::default();
        state.set_selection(Some(
            Fragment::new("a", "scans/piece.png", (640, 480)).with_name("Corner"),
        ));
        let lines = InfoLines::from_state(&state, &english());
        assert_eq!(lines.title, "Corner");
        assert_eq!(lines.size, "Size: 640 × 480");
        assert_eq!(
            lines.file,
            format!("File: {}", std::path::Path::new("scans/piece.png").display())
        );
    }

    #[test]
    fn info_lines_fall_back_to_short_id() {
        let mut state = State::default();
        state.set_selection(Some(Fragment::new("0123456789", "a.png", (1, 1))));
        let lines = InfoLines::from_state(&state, &english());
        assert_eq!(lines.title, "Fragment 01234567");
    }

    #[test]
    fn info_lines_for_group() {
        let mut state = State::default();
        state.set_group_selection(
            vec!["a".into(), "b".into(), "c".into()],
            vec![Fragment::new("a", "a.png", (1, 1))],
        );
        let lines = InfoLines::from_state(&state, &english());
        assert_eq!(lines.title, "Group Selection (3 fragments)");
        assert_eq!(lines.size, "Size: Multiple");
        assert_eq!(lines.file, "File: Multiple");
    }
}
