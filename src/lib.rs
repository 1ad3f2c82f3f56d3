// SPDX-License-Identifier: MPL-2.0
//! `fragment_panel` is a control panel for positioning image fragments, built
//! with the Iced GUI framework.
//!
//! The panel shows the selected fragment (or group of fragments) and turns
//! user edits into transform requests for whoever owns the fragments. A small
//! host application with an in-memory scene drives it.

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod ui;
