// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::control_panel;
use crate::ui::fragment_list;

/// Top-level messages consumed by `App::update`. The variants forward
/// component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Panel(control_panel::Message),
    List(fragment_list::Message),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `FRAGMENT_PANEL_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional TOML scene file; the demo scene is used otherwise.
    pub scene: Option<String>,
    /// Overrides the configured arrow-button step.
    pub nudge_step: Option<f64>,
}
