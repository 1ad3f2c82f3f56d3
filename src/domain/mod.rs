// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core business logic with ZERO external dependencies.
//!
//! This module contains pure domain types and value objects. It has no
//! dependencies on external crates (except `std`) so it can be tested in
//! isolation from the UI toolkit.
//!
//! # Modules
//!
//! - [`fragment`]: Fragment entity ([`Fragment`](fragment::Fragment),
//!   [`FragmentId`](fragment::FragmentId)) and its value objects
//!   ([`Opacity`](fragment::Opacity), [`AngleDegrees`](fragment::AngleDegrees),
//!   [`NudgeStep`](fragment::NudgeStep), [`AngleStep`](fragment::AngleStep))

pub mod fragment;
