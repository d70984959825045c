//! Graphs
//!
//! A graph is the grid vectors are placed on: model bounds, an orientation,
//! the vector sets drawn on it and the currently selected vector. The
//! origin is always model `(0, 0)`; moving it shifts the bounds and every
//! vector instead, so nothing moves on screen.

use super::vector::SnapContext;
use super::vector_set::{VectorRef, VectorSet};
use crate::config::VectorAdditionConfig;
use crate::enums::{CoordinateSnapMode, GraphOrientation};
use crate::error::{Result, VectorAdditionError};
use crate::types::{Bounds2, ModelViewTransform, Vector2, VectorSetId};

/// View units per model unit
pub const VIEW_SCALE: f64 = 12.5;

/// The vector a values panel is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectedVector {
    pub set: VectorSetId,
    pub target: VectorRef,
}

#[derive(Debug, Clone)]
pub struct Graph {
    bounds: Bounds2,
    initial_bounds: Bounds2,
    orientation: GraphOrientation,
    view_bounds: Bounds2,
    model_view_transform: ModelViewTransform,
    initial_transform: ModelViewTransform,
    vector_sets: Vec<VectorSet>,
    selected: Option<SelectedVector>,
}

impl Graph {
    /// Create an empty graph; the view rectangle is sized from the bounds
    pub fn new(bounds: Bounds2, orientation: GraphOrientation) -> Result<Self> {
        let view_bounds = Bounds2::from_coords(
            0.0,
            0.0,
            bounds.width() * VIEW_SCALE,
            bounds.height() * VIEW_SCALE,
        );
        let model_view_transform = mapping(bounds, view_bounds)?;
        Ok(Self {
            bounds,
            initial_bounds: bounds,
            orientation,
            view_bounds,
            model_view_transform,
            initial_transform: model_view_transform,
            vector_sets: Vec::new(),
            selected: None,
        })
    }

    /// Add a vector set; its id must be the next free index
    pub fn with_vector_set(mut self, set: VectorSet) -> Self {
        debug_assert_eq!(set.id().index(), self.vector_sets.len());
        self.vector_sets.push(set);
        self
    }

    pub fn bounds(&self) -> Bounds2 {
        self.bounds
    }

    pub fn orientation(&self) -> GraphOrientation {
        self.orientation
    }

    /// Always model `(0, 0)`
    pub fn origin(&self) -> Vector2 {
        Vector2::ZERO
    }

    pub fn view_bounds(&self) -> Bounds2 {
        self.view_bounds
    }

    pub fn model_view_transform(&self) -> &ModelViewTransform {
        &self.model_view_transform
    }

    pub fn vector_sets(&self) -> &[VectorSet] {
        &self.vector_sets
    }

    pub fn vector_set(&self, id: VectorSetId) -> Result<&VectorSet> {
        self.vector_sets
            .get(id.index())
            .ok_or(VectorAdditionError::UnknownVectorSet(id))
    }

    pub(crate) fn vector_set_mut(&mut self, id: VectorSetId) -> Result<&mut VectorSet> {
        self.vector_sets
            .get_mut(id.index())
            .ok_or(VectorAdditionError::UnknownVectorSet(id))
    }

    pub(crate) fn vector_sets_mut(&mut self) -> impl Iterator<Item = &mut VectorSet> {
        self.vector_sets.iter_mut()
    }

    /// Snap settings for a drag in `set`, with every other active vector of
    /// the graph as a polar snap target
    pub fn snap_context(
        &self,
        set: VectorSetId,
        exclude: Option<VectorRef>,
        snap_mode: CoordinateSnapMode,
        config: &VectorAdditionConfig,
    ) -> Result<SnapContext> {
        self.vector_set(set)?;
        let references = self
            .vector_sets
            .iter()
            .flat_map(|s| s.snap_references(if s.id() == set { exclude } else { None }))
            .collect();
        Ok(SnapContext {
            bounds: self.bounds,
            orientation: self.orientation,
            snap_mode,
            polar_angle_interval: config.polar_angle_interval,
            polar_snap_distance: config.polar_snap_distance,
            drag_threshold: config.drag_threshold,
            references,
        })
    }

    /// Move the origin to `point` (rounded and clamped); returns the shift
    /// applied to the bounds and to every vector
    pub fn move_origin(&mut self, point: Vector2) -> Result<Vector2> {
        let point = self.bounds.closest_point_to(point.rounded());
        let delta = -point;
        if delta.is_zero() {
            return Ok(Vector2::ZERO);
        }
        let bounds = self.bounds.shifted(delta);
        self.model_view_transform = mapping(bounds, self.view_bounds)?;
        self.bounds = bounds;
        for set in &mut self.vector_sets {
            set.translate(delta);
        }
        Ok(delta)
    }

    pub fn selected(&self) -> Option<SelectedVector> {
        self.selected
    }

    /// Select a vector on the graph
    pub fn select(&mut self, set: VectorSetId, target: VectorRef) -> Result<()> {
        let vector = self.vector_set(set)?.get(target)?;
        if !vector.is_on_graph() {
            return Err(VectorAdditionError::invariant(format!(
                "cannot select a vector that is not on the graph ({set})"
            )));
        }
        self.selected = Some(SelectedVector { set, target });
        Ok(())
    }

    pub fn deselect(&mut self) -> bool {
        self.selected.take().is_some()
    }

    /// Drop the selection if its vector has left the graph
    pub(crate) fn prune_selection(&mut self) -> bool {
        let Some(selected) = self.selected else {
            return false;
        };
        let still_on_graph = self
            .vector_set(selected.set)
            .and_then(|s| s.get(selected.target))
            .map(|v| v.is_on_graph())
            .unwrap_or(false);
        if !still_on_graph {
            self.selected = None;
        }
        !still_on_graph
    }

    /// Initial bounds, initial vectors, nothing selected
    pub fn reset(&mut self) {
        self.bounds = self.initial_bounds;
        self.model_view_transform = self.initial_transform;
        for set in &mut self.vector_sets {
            set.reset();
        }
        self.selected = None;
    }
}

fn mapping(bounds: Bounds2, view_bounds: Bounds2) -> Result<ModelViewTransform> {
    ModelViewTransform::rectangle_inverted_mapping(bounds, view_bounds).ok_or_else(|| {
        VectorAdditionError::invariant(format!("graph bounds {bounds} have zero area"))
    })
}
