//! Scenes
//!
//! A scene is one graph in one coordinate snap mode. It is the entry point
//! for every user interaction (drags, drops, equation controls, erase,
//! reset) and records what each interaction did in its [`EventLog`].

use super::component_vector::ComponentPair;
use super::graph::Graph;
use super::vector::SnapContext;
use super::vector_set::{DropOutcome, VectorRef, VectorSet};
use crate::config::VectorAdditionConfig;
use crate::enums::{ComponentVectorStyle, CoordinateSnapMode, EquationType};
use crate::error::Result;
use crate::notification::{EventKind, EventLog, SimEvent};
use crate::types::{Vector2, VectorId, VectorSetId};

#[derive(Debug, Clone)]
pub struct Scene {
    name: String,
    snap_mode: CoordinateSnapMode,
    graph: Graph,
    config: VectorAdditionConfig,
    events: EventLog,
}

impl Scene {
    pub fn new(
        name: impl Into<String>,
        snap_mode: CoordinateSnapMode,
        graph: Graph,
        config: VectorAdditionConfig,
    ) -> Self {
        Self {
            name: name.into(),
            snap_mode,
            graph,
            config,
            events: EventLog::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn snap_mode(&self) -> CoordinateSnapMode {
        self.snap_mode
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn config(&self) -> &VectorAdditionConfig {
        &self.config
    }

    pub fn vector_set(&self, id: VectorSetId) -> Result<&VectorSet> {
        self.graph.vector_set(id)
    }

    /// Events recorded since the last drain
    pub fn events(&self) -> &EventLog {
        &self.events
    }

    pub fn drain_events(&mut self) -> Vec<SimEvent> {
        self.events.drain()
    }

    /// Find a pooled vector by symbol across every set
    pub fn find(&self, symbol: &str) -> Option<(VectorSetId, VectorId)> {
        self.graph
            .vector_sets()
            .iter()
            .find_map(|s| s.find_by_symbol(symbol).map(|id| (s.id(), id)))
    }

    fn context(&self, set: VectorSetId, exclude: Option<VectorRef>) -> Result<SnapContext> {
        self.graph
            .snap_context(set, exclude, self.snap_mode, &self.config)
    }

    fn label(&self, set: VectorSetId, id: VectorId) -> String {
        match self
            .graph
            .vector_set(set)
            .ok()
            .and_then(|s| s.vector(id).ok())
            .and_then(|v| v.symbol())
        {
            Some(symbol) => format!("{}/{set}{id} '{symbol}'", self.name),
            None => format!("{}/{set}{id}", self.name),
        }
    }

    fn deselect_if_gone(&mut self) {
        if self.graph.prune_selection() {
            self.events
                .record(EventKind::SelectionChanged, format!("{}: selection cleared", self.name));
        }
    }

    // ------------------------------------------------------------------
    // Drag lifecycle
    // ------------------------------------------------------------------

    /// Pull the next free vector of `set` out of its toolbox
    pub fn create_vector(&mut self, set: VectorSetId, tail: Vector2) -> Result<VectorId> {
        let id = self.graph.vector_set_mut(set)?.create_vector(tail)?;
        let label = self.label(set, id);
        self.events
            .record(EventKind::VectorCreated, format!("{label} created at {tail}"));
        Ok(id)
    }

    /// Pull a specific toolbox vector out and start dragging it
    pub fn take_from_toolbox(&mut self, set: VectorSetId, id: VectorId, tail: Vector2) -> Result<()> {
        self.graph.vector_set_mut(set)?.take_from_toolbox(id, tail)?;
        let label = self.label(set, id);
        self.events
            .record(EventKind::VectorCreated, format!("{label} taken from the toolbox at {tail}"));
        Ok(())
    }

    pub fn begin_drag(&mut self, set: VectorSetId, id: VectorId) -> Result<()> {
        self.graph.vector_set_mut(set)?.begin_drag(id)
    }

    pub fn drag_to(&mut self, set: VectorSetId, id: VectorId, tail: Vector2) -> Result<()> {
        let ctx = self.context(set, Some(VectorRef::Pooled(id)))?;
        self.graph.vector_set_mut(set)?.drag_to(id, tail, &ctx)?;
        self.deselect_if_gone();
        Ok(())
    }

    /// Release a dragged vector
    pub fn drop_vector(&mut self, set: VectorSetId, id: VectorId) -> Result<DropOutcome> {
        let ctx = self.context(set, Some(VectorRef::Pooled(id)))?;
        let outcome = self.graph.vector_set_mut(set)?.drop_vector(id, &ctx)?;
        let label = self.label(set, id);
        match outcome {
            DropOutcome::Activated => {
                let tail = self.graph.vector_set(set)?.vector(id)?.tail_position();
                self.events
                    .record(EventKind::VectorActivated, format!("{label} dropped at {tail}"));
            }
            DropOutcome::Returning => {
                self.events.record(
                    EventKind::VectorReturning,
                    format!("{label} dropped off the graph"),
                );
                self.deselect_if_gone();
            }
        }
        Ok(outcome)
    }

    /// Drag, then drop, in one call
    pub fn place_vector(&mut self, set: VectorSetId, tail: Vector2) -> Result<(VectorId, DropOutcome)> {
        let id = self.create_vector(set, tail)?;
        self.drag_to(set, id, tail)?;
        let outcome = self.drop_vector(set, id)?;
        Ok((id, outcome))
    }

    /// Drag a vector's tip; returns false when the tip snapped to a zero vector
    pub fn drag_tip_to(&mut self, set: VectorSetId, id: VectorId, tip: Vector2) -> Result<bool> {
        let ctx = self.context(set, Some(VectorRef::Pooled(id)))?;
        self.graph.vector_set_mut(set)?.drag_tip_to(id, tip, &ctx)
    }

    pub fn drag_sum_to(&mut self, set: VectorSetId, tail: Vector2) -> Result<()> {
        let ctx = self.context(set, Some(VectorRef::Sum))?;
        self.graph.vector_set_mut(set)?.drag_sum_to(tail, &ctx)
    }

    /// Type in a free vector's components; returns false when they snap to zero
    pub fn set_components(&mut self, set: VectorSetId, id: VectorId, components: Vector2) -> Result<bool> {
        let ctx = self.context(set, Some(VectorRef::Pooled(id)))?;
        self.graph
            .vector_set_mut(set)?
            .set_components(id, components, &ctx)
    }

    /// Send an active vector back to its toolbox
    pub fn remove_vector(&mut self, set: VectorSetId, target: VectorRef) -> Result<()> {
        self.graph.vector_set_mut(set)?.remove_vector(target)?;
        if let VectorRef::Pooled(id) = target {
            let label = self.label(set, id);
            self.events
                .record(EventKind::VectorReturning, format!("{label} removed"));
        }
        self.deselect_if_gone();
        Ok(())
    }

    pub fn select(&mut self, set: VectorSetId, target: VectorRef) -> Result<()> {
        self.graph.select(set, target)?;
        self.events.record(
            EventKind::SelectionChanged,
            format!("{}: selected {set} {target:?}", self.name),
        );
        Ok(())
    }

    pub fn deselect(&mut self) {
        if self.graph.deselect() {
            self.events
                .record(EventKind::SelectionChanged, format!("{}: selection cleared", self.name));
        }
    }

    /// Move the graph origin; returns the shift applied to everything
    pub fn move_origin(&mut self, point: Vector2) -> Result<Vector2> {
        let delta = self.graph.move_origin(point)?;
        if !delta.is_zero() {
            self.events.record(
                EventKind::OriginMoved,
                format!("{}: origin moved by {delta}", self.name),
            );
        }
        Ok(delta)
    }

    /// Advance animations by `dt` seconds; returns the vectors that arrived
    pub fn step(&mut self, dt: f64) -> Vec<(VectorSetId, VectorId)> {
        let speed = self.config.animate_back_speed;
        let mut arrived = Vec::new();
        for set in self.graph.vector_sets_mut() {
            let set_id = set.id();
            arrived.extend(set.step(dt, speed).into_iter().map(|id| (set_id, id)));
        }
        for &(set, id) in &arrived {
            let label = self.label(set, id);
            self.events
                .record(EventKind::VectorReturned, format!("{label} back in the toolbox"));
        }
        arrived
    }

    /// Cancel drags and animations in progress
    pub fn interrupt_input(&mut self) -> Result<()> {
        let ids: Vec<VectorSetId> = self.graph.vector_sets().iter().map(|s| s.id()).collect();
        let mut settled = 0;
        for set in ids {
            let contexts = self
                .graph
                .vector_set(set)?
                .dragging_on_graph()
                .into_iter()
                .map(|id| Ok((id, self.context(set, Some(VectorRef::Pooled(id)))?)))
                .collect::<Result<Vec<_>>>()?;
            settled += self.graph.vector_set_mut(set)?.interrupt(&contexts).len();
        }
        if settled > 0 {
            self.events.record(
                EventKind::Interrupted,
                format!("{}: {settled} vector(s) settled", self.name),
            );
            self.deselect_if_gone();
        }
        Ok(())
    }

    /// Clear every removable vector from the graph
    pub fn erase(&mut self) {
        let erased: usize = self.graph.vector_sets_mut().map(|s| s.erase().len()).sum();
        self.graph.deselect();
        self.events
            .record(EventKind::Erased, format!("{}: {erased} vector(s) erased", self.name));
    }

    /// Initial vectors, bounds and equation types
    pub fn reset(&mut self) {
        self.graph.reset();
        self.events.record(EventKind::Reset, format!("{} reset", self.name));
    }

    // ------------------------------------------------------------------
    // Equation controls
    // ------------------------------------------------------------------

    pub fn set_equation_type(&mut self, set: VectorSetId, equation_type: EquationType) -> Result<()> {
        self.graph.vector_set_mut(set)?.set_equation_type(equation_type);
        self.events.record(
            EventKind::EquationChanged,
            format!("{}/{set}: equation type {equation_type}", self.name),
        );
        Ok(())
    }

    pub fn set_coefficient(&mut self, set: VectorSetId, id: VectorId, coefficient: i32) -> Result<()> {
        self.graph
            .vector_set_mut(set)?
            .set_coefficient(id, coefficient, &self.config)?;
        self.record_equation_change(set, id, format!("coefficient {coefficient}"));
        Ok(())
    }

    pub fn set_base_x(&mut self, set: VectorSetId, id: VectorId, x: i32) -> Result<()> {
        self.graph.vector_set_mut(set)?.set_base_x(id, x, &self.config)?;
        self.record_equation_change(set, id, format!("base x {x}"));
        Ok(())
    }

    pub fn set_base_y(&mut self, set: VectorSetId, id: VectorId, y: i32) -> Result<()> {
        self.graph.vector_set_mut(set)?.set_base_y(id, y, &self.config)?;
        self.record_equation_change(set, id, format!("base y {y}"));
        Ok(())
    }

    pub fn set_base_magnitude(&mut self, set: VectorSetId, id: VectorId, magnitude: i32) -> Result<()> {
        self.graph
            .vector_set_mut(set)?
            .set_base_magnitude(id, magnitude, &self.config)?;
        self.record_equation_change(set, id, format!("base magnitude {magnitude}"));
        Ok(())
    }

    pub fn set_base_angle(&mut self, set: VectorSetId, id: VectorId, degrees: f64) -> Result<()> {
        self.graph
            .vector_set_mut(set)?
            .set_base_angle(id, degrees, &self.config)?;
        self.record_equation_change(set, id, format!("base angle {degrees}°"));
        Ok(())
    }

    fn record_equation_change(&mut self, set: VectorSetId, id: VectorId, what: String) {
        let label = self.label(set, id);
        self.events
            .record(EventKind::EquationChanged, format!("{label} {what}"));
    }

    /// Component vectors of a pooled vector or sum, per display style
    pub fn component_vectors(
        &self,
        set: VectorSetId,
        target: VectorRef,
        style: ComponentVectorStyle,
    ) -> Result<Option<ComponentPair>> {
        let vector = self.graph.vector_set(set)?.get(target)?;
        if !vector.is_on_graph() {
            return Ok(None);
        }
        Ok(vector.component_vectors(style, self.graph.origin()))
    }
}
