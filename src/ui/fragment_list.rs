// SPDX-License-Identifier: MPL-2.0
//! Fragment list shown next to the control panel.
//!
//! Clicking a row selects that fragment alone; the checkbox on each row adds
//! or removes it from the multi-fragment selection.

use crate::domain::fragment::{Fragment, FragmentId};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{button, checkbox, container, scrollable, text, Column, Row};
use iced::{Element, Length};

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Row clicked.
    Select(FragmentId),
    /// Row checkbox toggled.
    ToggleInGroup(FragmentId, bool),
    ClearSelection,
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub fragments: &'a [Fragment],
    /// Selected ids, in selection order.
    pub selected: &'a [FragmentId],
}

fn row_label(fragment: &Fragment, i18n: &I18n) -> String {
    fragment.display_name().map_or_else(
        || i18n.tr_with_args("panel-fallback-name", &[("id", fragment.id.short())]),
        ToString::to_string,
    )
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut rows = Column::new().spacing(spacing::XXS);

    for fragment in ctx.fragments {
        let id = fragment.id.clone();
        let in_selection = ctx.selected.contains(&fragment.id);

        let toggle_id = id.clone();
        let member = checkbox(in_selection)
            .on_toggle(move |checked| Message::ToggleInGroup(toggle_id.clone(), checked));

        let label = button(text(row_label(fragment, ctx.i18n)).size(typography::BODY))
            .on_press(Message::Select(id))
            .width(Length::Fill)
            .padding(spacing::XXS);
        let label = if in_selection {
            label.style(styles::button::toggled)
        } else {
            label.style(button::text)
        };

        rows = rows.push(
            Row::new()
                .spacing(spacing::XS)
                .align_y(Vertical::Center)
                .push(member)
                .push(label),
        );
    }

    let clear = button(text(ctx.i18n.tr("list-clear-selection")).size(typography::BODY_SM))
        .on_press_maybe((!ctx.selected.is_empty()).then_some(Message::ClearSelection))
        .padding(spacing::XXS)
        .style(button::secondary);

    let content = Column::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .push(text(ctx.i18n.tr("list-title")).size(typography::TITLE_SM))
        .push(scrollable(rows).height(Length::Fill))
        .push(clear);

    container(content)
        .width(Length::Fixed(sizing::FRAGMENT_LIST_WIDTH))
        .height(Length::Fill)
        .style(styles::container::sidebar)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_prefers_display_name() {
        let i18n = I18n::with_locale("en-US");
        let named = Fragment::new("abcdef123456", "a.png", (1, 1)).with_name("Rim");
        let unnamed = Fragment::new("abcdef123456", "a.png", (1, 1));

        assert_eq!(row_label(&named, &i18n), "Rim");
        assert_eq!(row_label(&unnamed, &i18n), "Fragment abcdef12");
    }

    #[test]
    fn list_renders_with_selection() {
        let i18n = I18n::with_locale("en-US");
        let fragments = vec![
            Fragment::new("a", "a.png", (1, 1)),
            Fragment::new("b", "b.png", (1, 1)),
        ];
        let selected = vec![FragmentId::new("b")];
        let _ = view(ViewContext {
            i18n: &i18n,
            fragments: &fragments,
            selected: &selected,
        });
    }
}
