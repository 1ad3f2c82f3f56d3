// SPDX-License-Identifier: MPL-2.0
//! In-memory fragment scene hosting the control panel.
//!
//! The scene owns the fragments and applies the panel's requests with plain
//! arithmetic. A scene can be read from a TOML file:
//!
//! ```toml
//! [[fragment]]
//! id = "f-001"
//! name = "Upper rim"
//! path = "scans/rim.png"
//! width = 640
//! height = 480
//! x = 12.0
//! rotation = 90.0
//! ```

use crate::domain::fragment::{Fragment, FragmentId, Opacity};
use crate::error::{Result, SceneError};
use crate::ui::control_panel::{Event, Target, TransformKind};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Rotations are kept within the open interval (-360°, 360°).
const FULL_TURN: f64 = 360.0;

#[derive(Debug, Deserialize)]
struct SceneFile {
    #[serde(default, rename = "fragment")]
    fragments: Vec<FragmentEntry>,
}

#[derive(Debug, Deserialize)]
struct FragmentEntry {
    id: String,
    #[serde(default)]
    name: String,
    path: PathBuf,
    width: u32,
    height: u32,
    #[serde(default)]
    x: f64,
    #[serde(default)]
    y: f64,
    #[serde(default)]
    rotation: f64,
    #[serde(default)]
    flip_horizontal: bool,
    #[serde(default)]
    flip_vertical: bool,
    #[serde(default = "default_visible")]
    visible: bool,
    #[serde(default = "default_opacity")]
    opacity: f32,
}

fn default_visible() -> bool {
    true
}

fn default_opacity() -> f32 {
    Opacity::OPAQUE.value()
}

impl From<FragmentEntry> for Fragment {
    fn from(entry: FragmentEntry) -> Self {
        let mut fragment = Fragment::new(entry.id, entry.path, (entry.width, entry.height))
            .with_name(entry.name)
            .with_position(entry.x, entry.y);
        fragment.rotation = normalize_rotation(entry.rotation);
        fragment.flip_horizontal = entry.flip_horizontal;
        fragment.flip_vertical = entry.flip_vertical;
        fragment.visible = entry.visible;
        fragment.opacity = Opacity::new(entry.opacity);
        fragment
    }
}

/// Ordered collection of fragments with unique ids.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    fragments: Vec<Fragment>,
}

impl Scene {
    /// Builds a scene, rejecting empty lists, blank ids and duplicate ids.
    pub fn new(fragments: Vec<Fragment>) -> Result<Self> {
        if fragments.is_empty() {
            return Err(SceneError::Empty.into());
        }
        let mut seen = HashSet::new();
        for fragment in &fragments {
            if fragment.id.as_str().trim().is_empty() {
                return Err(SceneError::MissingId.into());
            }
            if !seen.insert(&fragment.id) {
                return Err(SceneError::DuplicateId(fragment.id.to_string()).into());
            }
        }
        Ok(Self { fragments })
    }

    /// Built-in scene used when no scene file is given.
    #[must_use]
    pub fn demo() -> Self {
        let mut shard = Fragment::new("7f3a9c21-demo", "demo/shard.png", (320, 240))
            .with_position(-150.0, 40.0);
        shard.rotation = 45.0;
        Self {
            fragments: vec![
                Fragment::new("a1b2c3d4-demo", "demo/rim.png", (640, 480))
                    .with_name("Upper rim")
                    .with_position(0.0, -120.0),
                Fragment::new("e5f6a7b8-demo", "demo/base.png", (512, 512))
                    .with_name("Base")
                    .with_position(80.0, 200.0),
                shard,
            ],
        }
    }

    pub fn parse(source: &str) -> Result<Self> {
        let file: SceneFile =
            toml::from_str(source).map_err(|err| SceneError::Malformed(err.to_string()))?;
        Self::new(file.fragments.into_iter().map(Fragment::from).collect())
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path)?;
        Self::parse(&source)
    }

    #[must_use]
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    #[must_use]
    pub fn get(&self, id: &FragmentId) -> Option<&Fragment> {
        self.fragments.iter().find(|fragment| &fragment.id == id)
    }

    fn get_mut(&mut self, id: &FragmentId) -> Option<&mut Fragment> {
        self.fragments.iter_mut().find(|fragment| &fragment.id == id)
    }

    /// Current snapshots for `ids`, skipping unknown ids.
    #[must_use]
    pub fn snapshots(&self, ids: &[FragmentId]) -> Vec<Fragment> {
        ids.iter().filter_map(|id| self.get(id)).cloned().collect()
    }

    /// Applies one panel event. Returns whether any fragment changed.
    pub fn apply(&mut self, event: &Event) -> bool {
        match event {
            Event::TransformRequested { target, kind } => {
                let ids = match target {
                    Target::Fragment(id) => std::slice::from_ref(id),
                    Target::Group(ids) => ids.as_slice(),
                };
                let mut changed = false;
                for id in ids {
                    changed |= self.update_fragment(id, |fragment| apply_transform(fragment, *kind));
                }
                debug!(transform = kind.name(), count = ids.len(), changed, "applied transform");
                changed
            }
            Event::ResetRequested(id) => self.update_fragment(id, Fragment::reset_transform),
            Event::OpacityChanged { id, opacity } => {
                let opacity = *opacity;
                self.update_fragment(id, |fragment| fragment.opacity = opacity)
            }
        }
    }

    fn update_fragment(&mut self, id: &FragmentId, change: impl FnOnce(&mut Fragment)) -> bool {
        let Some(fragment) = self.get_mut(id) else {
            warn!(%id, "request for unknown fragment");
            return false;
        };
        let before = fragment.clone();
        change(fragment);
        *fragment != before
    }
}

fn apply_transform(fragment: &mut Fragment, kind: TransformKind) {
    match kind {
        TransformKind::RotateCw => fragment.rotation = normalize_rotation(fragment.rotation + 90.0),
        TransformKind::RotateCcw => {
            fragment.rotation = normalize_rotation(fragment.rotation - 90.0);
        }
        TransformKind::RotateAngle(delta) => {
            fragment.rotation = normalize_rotation(fragment.rotation + delta);
        }
        TransformKind::SetRotation(angle) => fragment.rotation = normalize_rotation(angle),
        TransformKind::FlipHorizontal => fragment.flip_horizontal = !fragment.flip_horizontal,
        TransformKind::FlipVertical => fragment.flip_vertical = !fragment.flip_vertical,
        TransformKind::Translate { dx, dy } if dx == 0.0 && dy == 0.0 => {
            fragment.x = 0.0;
            fragment.y = 0.0;
        }
        TransformKind::Translate { dx, dy } => {
            fragment.x += dx;
            fragment.y += dy;
        }
        TransformKind::SetVisibility(visible) => fragment.visible = visible,
    }
}

fn normalize_rotation(degrees: f64) -> f64 {
    if degrees.is_finite() {
        degrees % FULL_TURN
    } else {
        0.0
    }
}
