// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the fragment list, the
//! control panel and the scene.
//!
//! The panel only requests changes. `App` applies them to the [`Scene`] and
//! pushes fresh snapshots back into the panel, so the panel always displays
//! what the scene holds.

mod message;
pub mod paths;
pub mod scene;

pub use message::{Flags, Message};
pub use scene::Scene;

use crate::config::{self, Config};
use crate::domain::fragment::{FragmentId, NudgeStep};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::ui::control_panel::{self, ViewContext};
use crate::ui::fragment_list;
use crate::ui::theming::ThemeMode;
use iced::widget::Row;
use iced::{window, Element, Length, Task, Theme};
use std::fmt;
use std::path::Path;
use tracing::{info, warn};

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    scene: Scene,
    panel: control_panel::State,
    /// Selected ids, in selection order.
    selected: Vec<FragmentId>,
    theme_mode: ThemeMode,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("fragments", &self.scene.fragments().len())
            .field("selected", &self.selected)
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 640;
pub const WINDOW_DEFAULT_WIDTH: u32 = 640;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 600;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot closure; the flags are consumed on first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()
}

/// Reads the scene file, falling back to the demo scene.
fn load_scene(path: Option<&str>) -> Scene {
    let Some(path) = path else {
        return Scene::demo();
    };
    match Scene::load_from_path(Path::new(path)) {
        Ok(scene) => {
            info!(path, fragments = scene.fragments().len(), "loaded scene");
            scene
        }
        Err(Error::Scene(err)) => {
            warn!(path, key = err.i18n_key(), %err, "invalid scene file, using the demo scene");
            Scene::demo()
        }
        Err(err) => {
            warn!(path, %err, "could not read scene file, using the demo scene");
            Scene::demo()
        }
    }
}

impl App {
    /// Initializes application state from the config file and CLI flags.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (mut config, config_warning) = config::load();
        if let Some(key) = config_warning {
            warn!(key, "falling back to default settings");
        }
        if let Some(step) = flags.nudge_step {
            config.panel.nudge_step = Some(NudgeStep::new(step).value());
        }

        let i18n = I18n::new(flags.lang, &config);
        let scene = load_scene(flags.scene.as_deref());
        (Self::from_parts(i18n, &config, scene), Task::none())
    }

    /// Assembles the application from already loaded parts.
    pub fn from_parts(i18n: I18n, config: &Config, scene: Scene) -> Self {
        Self {
            i18n,
            scene,
            panel: control_panel::State::from_config(&config.panel),
            selected: Vec::new(),
            theme_mode: config.general.theme_mode,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn panel(&self) -> &control_panel::State {
        &self.panel
    }

    pub fn selected(&self) -> &[FragmentId] {
        &self.selected
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.panel.selection().fragment() {
            Some(fragment) => {
                let name = fragment
                    .display_name()
                    .unwrap_or_else(|| fragment.id.short());
                format!("{name} - {app_name}")
            }
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_theme()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::List(message) => self.handle_list(message),
            Message::Panel(message) => {
                let events = self.panel.update(message);
                let mut changed = false;
                for event in &events {
                    changed |= self.scene.apply(event);
                }
                if changed {
                    self.sync_panel();
                }
            }
        }
        Task::none()
    }

    fn handle_list(&mut self, message: fragment_list::Message) {
        match message {
            fragment_list::Message::Select(id) => self.selected = vec![id],
            fragment_list::Message::ToggleInGroup(id, true) => {
                if !self.selected.contains(&id) {
                    self.selected.push(id);
                }
            }
            fragment_list::Message::ToggleInGroup(id, false) => {
                self.selected.retain(|selected| selected != &id);
            }
            fragment_list::Message::ClearSelection => self.selected.clear(),
        }
        self.sync_panel();
    }

    /// Pushes the current scene snapshots for the selection into the panel.
    fn sync_panel(&mut self) {
        match self.selected.as_slice() {
            [] => self.panel.set_selection(None),
            [id] => self.panel.set_selection(self.scene.get(id).cloned()),
            ids => {
                let snapshots = self.scene.snapshots(ids);
                self.panel.set_group_selection(ids.to_vec(), snapshots);
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let list = fragment_list::view(fragment_list::ViewContext {
            i18n: &self.i18n,
            fragments: self.scene.fragments(),
            selected: &self.selected,
        })
        .map(Message::List);

        let panel = self
            .panel
            .view(ViewContext { i18n: &self.i18n })
            .map(Message::Panel);

        Row::new()
            .push(list)
            .push(panel)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fragment::Fragment;
    use crate::ui::control_panel::{NudgeDirection, SelectionMode};

    fn app() -> App {
        let scene = Scene::new(vec![
            Fragment::new("a", "a.png", (10, 10))
                .with_name("Rim")
                .with_position(10.0, 0.0),
            Fragment::new("b", "b.png", (10, 10)),
            Fragment::new("c", "c.png", (10, 10)),
        ])
        .expect("valid scene");
        App::from_parts(I18n::with_locale("en-US"), &Config::default(), scene)
    }

    fn select(app: &mut App, id: &str) {
        let _ = app.update(Message::List(fragment_list::Message::Select(id.into())));
    }

    fn toggle(app: &mut App, id: &str, checked: bool) {
        let _ = app.update(Message::List(fragment_list::Message::ToggleInGroup(
            id.into(),
            checked,
        )));
    }

    #[test]
    fn starts_without_selection() {
        let app = app();
        assert_eq!(app.panel().mode(), SelectionMode::None);
        assert_eq!(app.title(), "Fragment Panel");
    }

    #[test]
    fn clicking_a_row_selects_one_fragment() {
        let mut app = app();
        select(&mut app, "a");
        assert_eq!(app.panel().mode(), SelectionMode::Single);
        assert_eq!(app.panel().x_input(), "10.0");
        assert_eq!(app.title(), "Rim - Fragment Panel");
    }

    #[test]
    fn checkboxes_build_a_group() {
        let mut app = app();
        select(&mut app, "a");
        toggle(&mut app, "b", true);
        assert_eq!(app.panel().mode(), SelectionMode::Group);

        toggle(&mut app, "a", false);
        assert_eq!(app.panel().mode(), SelectionMode::Single);
        assert_eq!(app.selected(), &[FragmentId::new("b")]);

        let _ = app.update(Message::List(fragment_list::Message::ClearSelection));
        assert_eq!(app.panel().mode(), SelectionMode::None);
    }

    #[test]
    fn panel_edits_reach_the_scene_and_come_back() {
        let mut app = app();
        select(&mut app, "a");
        let _ = app.update(Message::Panel(control_panel::Message::Nudge(
            NudgeDirection::Right,
        )));

        let a = app.scene().get(&"a".into()).expect("fragment a");
        assert_eq!(a.x, 20.0);
        assert_eq!(app.panel().x_input(), "20.0");
    }

    #[test]
    fn group_rotation_updates_every_member() {
        let mut app = app();
        toggle(&mut app, "b", true);
        toggle(&mut app, "c", true);
        let _ = app.update(Message::Panel(control_panel::Message::RotateClockwise));

        for id in ["b", "c"] {
            assert_eq!(app.scene().get(&id.into()).map(|f| f.rotation), Some(90.0));
        }
        assert_eq!(app.scene().get(&"a".into()).map(|f| f.rotation), Some(0.0));
    }

    #[test]
    fn view_renders() {
        let mut app = app();
        let _ = app.view();
        select(&mut app, "a");
        let _ = app.view();
    }

    #[test]
    fn missing_scene_file_falls_back_to_demo() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("missing.toml");
        let scene = load_scene(path.to_str());
        assert_eq!(scene, Scene::demo());
    }
}
