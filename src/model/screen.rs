//! Screen models
//!
//! A screen owns several scenes and shows one at a time. Explore 1D keys
//! its scenes by graph orientation; the other screens key them by
//! coordinate snap mode. Visibility toggles and the component style are
//! shared by every scene of the screen.

use super::component_vector::ComponentPair;
use super::scene::Scene;
use super::vector_set::VectorRef;
use crate::enums::{ComponentVectorStyle, CoordinateSnapMode, GraphOrientation, ScreenKind};
use crate::error::{Result, VectorAdditionError};
use crate::notification::{EventKind, EventLog, SimEvent};
use crate::property::Property;
use crate::types::VectorSetId;
use bitflags::bitflags;
use indexmap::IndexMap;
use std::fmt;

bitflags! {
    /// Visibility toggles shared by all scenes of a screen.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ViewToggles: u8 {
        /// Sum vectors are drawn.
        const SUM = 0x1;
        /// The values panel shows numbers.
        const VALUES = 0x2;
        /// Angle arcs are drawn.
        const ANGLES = 0x4;
        /// The graph grid is drawn.
        const GRID = 0x8;
        /// Base vectors are drawn (Equations screen).
        const BASE_VECTORS = 0x10;
    }
}

/// How a screen tells its scenes apart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneKey {
    Orientation(GraphOrientation),
    SnapMode(CoordinateSnapMode),
}

impl fmt::Display for SceneKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Orientation(o) => write!(f, "{o}"),
            Self::SnapMode(m) => write!(f, "{m}"),
        }
    }
}

pub struct ScreenModel {
    kind: ScreenKind,
    scenes: IndexMap<SceneKey, Scene>,
    selected: SceneKey,
    initial_selected: SceneKey,
    toggles: Property<ViewToggles>,
    component_style: Property<ComponentVectorStyle>,
    events: EventLog,
}

impl ScreenModel {
    /// Build a screen; the first scene is the one shown initially
    pub fn new(kind: ScreenKind, scenes: Vec<(SceneKey, Scene)>, toggles: ViewToggles) -> Result<Self> {
        let selected = scenes
            .first()
            .map(|(key, _)| *key)
            .ok_or_else(|| VectorAdditionError::invariant(format!("{kind} screen has no scenes")))?;
        Ok(Self {
            kind,
            scenes: scenes.into_iter().collect(),
            selected,
            initial_selected: selected,
            toggles: Property::new(toggles),
            component_style: Property::new(ComponentVectorStyle::default()),
            events: EventLog::new(),
        })
    }

    pub fn kind(&self) -> ScreenKind {
        self.kind
    }

    /// Scene keys in display order
    pub fn scene_keys(&self) -> impl Iterator<Item = SceneKey> + '_ {
        self.scenes.keys().copied()
    }

    pub fn scene(&self, key: SceneKey) -> Result<&Scene> {
        self.scenes
            .get(&key)
            .ok_or_else(|| VectorAdditionError::UnknownScene(key.to_string()))
    }

    pub fn scene_mut(&mut self, key: SceneKey) -> Result<&mut Scene> {
        self.scenes
            .get_mut(&key)
            .ok_or_else(|| VectorAdditionError::UnknownScene(key.to_string()))
    }

    pub fn selected_key(&self) -> SceneKey {
        self.selected
    }

    /// The scene currently shown
    pub fn current_scene(&self) -> Result<&Scene> {
        self.scene(self.selected)
    }

    pub fn current_scene_mut(&mut self) -> Result<&mut Scene> {
        self.scene_mut(self.selected)
    }

    /// Show another scene
    ///
    /// Input in progress on the scene being left is interrupted first. The
    /// vectors of either scene are otherwise untouched.
    pub fn select_scene(&mut self, key: SceneKey) -> Result<()> {
        self.scene(key)?;
        if key == self.selected {
            return Ok(());
        }
        self.current_scene_mut()?.interrupt_input()?;
        let previous = std::mem::replace(&mut self.selected, key);
        self.events.record(
            EventKind::SceneSelected,
            format!("{}: {previous} -> {key}", self.kind),
        );
        Ok(())
    }

    /// Shorthand for snap-mode keyed screens
    pub fn select_snap_mode(&mut self, mode: CoordinateSnapMode) -> Result<()> {
        self.select_scene(SceneKey::SnapMode(mode))
    }

    pub fn toggles(&self) -> ViewToggles {
        *self.toggles.get()
    }

    pub fn is_visible(&self, toggle: ViewToggles) -> bool {
        self.toggles.get().contains(toggle)
    }

    /// Turn a toggle on or off; returns whether anything changed
    pub fn set_toggle(&mut self, toggle: ViewToggles, on: bool) -> bool {
        let changed = self.toggles.update(|t| {
            let mut next = *t;
            next.set(toggle, on);
            next
        });
        if changed {
            self.events.record(
                EventKind::ToggleChanged,
                format!("{}: {toggle:?} {}", self.kind, if on { "on" } else { "off" }),
            );
        }
        changed
    }

    /// The toggles property, for registering listeners
    pub fn toggles_property(&mut self) -> &mut Property<ViewToggles> {
        &mut self.toggles
    }

    pub fn component_style(&self) -> ComponentVectorStyle {
        *self.component_style.get()
    }

    pub fn set_component_style(&mut self, style: ComponentVectorStyle) -> bool {
        let changed = self.component_style.set(style);
        if changed {
            self.events.record(
                EventKind::ToggleChanged,
                format!("{}: component style {style:?}", self.kind),
            );
        }
        changed
    }

    pub fn component_style_property(&mut self) -> &mut Property<ComponentVectorStyle> {
        &mut self.component_style
    }

    /// Whether a set's sum is drawn: toggled on and has contributors
    pub fn is_sum_visible(&self, set: VectorSetId) -> Result<bool> {
        let defined = self.current_scene()?.vector_set(set)?.sum_is_defined();
        Ok(defined && self.is_visible(ViewToggles::SUM))
    }

    /// Component vectors in the current scene, in the shared style
    pub fn component_vectors(&self, set: VectorSetId, target: VectorRef) -> Result<Option<ComponentPair>> {
        self.current_scene()?
            .component_vectors(set, target, self.component_style())
    }

    /// Advance the current scene's animations
    pub fn step(&mut self, dt: f64) -> Result<()> {
        self.current_scene_mut()?.step(dt);
        Ok(())
    }

    /// Reset every scene, every toggle and the selected scene
    pub fn reset(&mut self) {
        for scene in self.scenes.values_mut() {
            scene.reset();
        }
        self.toggles.reset();
        self.component_style.reset();
        self.selected = self.initial_selected;
        self.events.record(EventKind::Reset, format!("{} reset", self.kind));
    }

    pub fn events(&self) -> &EventLog {
        &self.events
    }

    pub fn drain_events(&mut self) -> Vec<SimEvent> {
        self.events.drain()
    }
}

impl fmt::Debug for ScreenModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScreenModel")
            .field("kind", &self.kind)
            .field("scenes", &self.scenes.keys().collect::<Vec<_>>())
            .field("selected", &self.selected)
            .field("toggles", self.toggles.get())
            .field("component_style", self.component_style.get())
            .finish()
    }
}
