// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern.
//!
//! - [`control_panel`] - Transform and display controls for the selected fragments
//! - [`fragment_list`] - Fragment list with single and group selection
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod control_panel;
pub mod design_tokens;
pub mod fragment_list;
pub mod styles;
pub mod theming;
