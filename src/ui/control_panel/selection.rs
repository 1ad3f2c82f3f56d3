// SPDX-License-Identifier: MPL-2.0
//! Selection state and the control enablement policy derived from it.

use crate::domain::fragment::{Fragment, FragmentId};

/// Coarse selection mode, the only input of the enablement policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    None,
    Single,
    Group,
}

/// What the panel currently shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Selection {
    #[default]
    None,
    /// Snapshot of the selected fragment.
    Single(Fragment),
    /// More than one fragment. `display` is the first fragment, shown only
    /// for shared information.
    Group {
        ids: Vec<FragmentId>,
        display: Option<Fragment>,
    },
}

impl Selection {
    #[must_use]
    pub fn single(fragment: Option<Fragment>) -> Self {
        fragment.map_or(Selection::None, Selection::Single)
    }

    /// Builds a selection from an id list.
    ///
    /// Group mode requires more than one id; with one id or fewer the first
    /// fragment (if any) becomes a single selection.
    #[must_use]
    pub fn group(ids: Vec<FragmentId>, fragments: Vec<Fragment>) -> Self {
        let first = fragments.into_iter().next();
        if ids.len() > 1 {
            Selection::Group {
                ids,
                display: first,
            }
        } else {
            Selection::single(first)
        }
    }

    #[must_use]
    pub fn mode(&self) -> SelectionMode {
        match self {
            Selection::None => SelectionMode::None,
            Selection::Single(_) => SelectionMode::Single,
            Selection::Group { .. } => SelectionMode::Group,
        }
    }

    /// The single selected fragment; `None` in group mode.
    #[must_use]
    pub fn fragment(&self) -> Option<&Fragment> {
        match self {
            Selection::Single(fragment) => Some(fragment),
            _ => None,
        }
    }

    pub(super) fn fragment_mut(&mut self) -> Option<&mut Fragment> {
        match self {
            Selection::Single(fragment) => Some(fragment),
            _ => None,
        }
    }

    /// Every selected id, in selection order.
    #[must_use]
    pub fn ids(&self) -> Vec<FragmentId> {
        match self {
            Selection::None => Vec::new(),
            Selection::Single(fragment) => vec![fragment.id.clone()],
            Selection::Group { ids, .. } => ids.clone(),
        }
    }
}

/// Which controls accept input.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlEnablement {
    pub rotate_90: bool,
    /// Angle input and the quick `±45°` buttons.
    pub free_angle: bool,
    pub flip: bool,
    /// X/Y inputs.
    pub position: bool,
    /// Arrow buttons and center.
    pub arrows: bool,
    /// Visibility checkbox and opacity slider.
    pub display: bool,
    pub reset: bool,
}

impl ControlEnablement {
    #[must_use]
    pub const fn for_mode(mode: SelectionMode) -> Self {
        match mode {
            SelectionMode::None => Self {
                rotate_90: false,
                free_angle: false,
                flip: false,
                position: false,
                arrows: false,
                display: false,
                reset: false,
            },
            SelectionMode::Single => Self {
                rotate_90: true,
                free_angle: true,
                flip: true,
                position: true,
                arrows: true,
                display: true,
                reset: true,
            },
            SelectionMode::Group => Self {
                rotate_90: true,
                free_angle: false,
                flip: false,
                position: false,
                arrows: true,
                display: false,
                reset: true,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fragment(id: &str) -> Fragment {
        Fragment::new(id, format!("{id}.png"), (10, 10))
    }

    #[test]
    fn group_needs_more_than_one_id() {
        let selection = Selection::group(vec!["a".into()], vec![fragment("a")]);
        assert_eq!(selection.mode(), SelectionMode::Single);

        let selection = Selection::group(
            vec!["a".into(), "b".into()],
            vec![fragment("a"), fragment("b")],
        );
        assert_eq!(selection.mode(), SelectionMode::Group);
    }

    #[test]
    fn empty_group_is_no_selection() {
        assert_eq!(Selection::group(Vec::new(), Vec::new()), Selection::None);
    }

    #[test]
    fn group_keeps_first_fragment_for_display() {
        let selection = Selection::group(
            vec!["a".into(), "b".into()],
            vec![fragment("a"), fragment("b")],
        );
        match selection {
            Selection::Group { display, .. } => {
                assert_eq!(display.map(|f| f.id), Some(FragmentId::new("a")));
            }
            other => panic!("expected group, got {other:?}"),
        }
    }

    #[test]
    fn group_exposes_no_single_fragment() {
        let selection = Selection::group(
            vec!["a".into(), "b".into()],
            vec![fragment("a"), fragment("b")],
        );
        assert!(selection.fragment().is_none());
        assert_eq!(selection.ids().len(), 2);
    }

    #[test]
    fn enablement_table() {
        let none = ControlEnablement::for_mode(SelectionMode::None);
        assert!(!none.rotate_90 && !none.free_angle && !none.flip);
        assert!(!none.position && !none.arrows && !none.display && !none.reset);

        let single = ControlEnablement::for_mode(SelectionMode::Single);
        assert!(single.rotate_90 && single.free_angle && single.flip);
        assert!(single.position && single.arrows && single.display && single.reset);

        let group = ControlEnablement::for_mode(SelectionMode::Group);
        assert!(group.rotate_90 && group.arrows && group.reset);
        assert!(!group.free_angle && !group.flip && !group.position && !group.display);
    }
}
