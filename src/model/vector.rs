//! Simulation vectors
//!
//! A [`Vector`] is a tail position plus xy-components. Everything else
//! (tip, magnitude, angle) is derived. Vectors live in a vector set's pool
//! and are only mutated through that set, so the set can keep its resultant
//! in step with every change.

use super::component_vector::{self, ComponentPair};
use super::equation::EquationTerm;
use crate::angles::{
    round_to_interval, signed_angle_degrees, signed_to_unsigned_degrees, snap_to_zero,
};
use crate::enums::{ComponentVectorStyle, CoordinateSnapMode, GraphOrientation, VectorState};
use crate::types::{Bounds2, Vector2};

/// What a vector is for
#[derive(Debug, Clone, PartialEq)]
pub enum VectorRole {
    /// Placed and edited freely by the student
    Free,
    /// `coefficient × base`, edited only through numeric controls
    Equation(EquationTerm),
    /// The resultant of a vector set
    Sum,
}

/// Where a vector starts, and returns to on reset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub tail_position: Vector2,
    pub xy_components: Vector2,
    pub on_graph: bool,
}

/// Another vector's geometry, used as a polar snap target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapReference {
    pub tail_position: Vector2,
    pub xy_components: Vector2,
}

impl SnapReference {
    pub fn tip_position(&self) -> Vector2 {
        self.tail_position + self.xy_components
    }
}

/// Everything a drag needs to know about the graph it happens on
#[derive(Debug, Clone, PartialEq)]
pub struct SnapContext {
    pub bounds: Bounds2,
    pub orientation: GraphOrientation,
    pub snap_mode: CoordinateSnapMode,
    pub polar_angle_interval: f64,
    pub polar_snap_distance: f64,
    /// How far past the bounds a drop still lands on the graph
    pub drag_threshold: f64,
    /// Active vectors the dragged one may snap to (excluding itself)
    pub references: Vec<SnapReference>,
}

impl SnapContext {
    /// Graph bounds dilated by the drag threshold
    pub fn landing_zone(&self) -> Bounds2 {
        self.bounds.dilated(self.drag_threshold)
    }
}

/// A vector on (or off) the graph
#[derive(Debug, Clone, PartialEq)]
pub struct Vector {
    pub(crate) symbol: Option<String>,
    pub(crate) role: VectorRole,
    pub(crate) tail_position: Vector2,
    pub(crate) xy_components: Vector2,
    pub(crate) is_on_graph: bool,
    pub(crate) is_removable: bool,
    pub(crate) is_tip_draggable: bool,
    pub(crate) state: VectorState,
    pub(crate) animate_back_target: Option<Vector2>,
    pub(crate) initial: Placement,
    pub(crate) initial_role: VectorRole,
}

impl Vector {
    /// Create a vector at its initial placement
    ///
    /// Vectors placed on the graph start `Active`; others start `Inactive`.
    pub fn new(symbol: Option<String>, role: VectorRole, placement: Placement) -> Self {
        let (removable, tip_draggable) = match role {
            VectorRole::Free => (true, true),
            VectorRole::Equation(_) | VectorRole::Sum => (false, false),
        };
        let xy_components = match &role {
            VectorRole::Equation(term) => term.scaled_components(),
            _ => placement.xy_components,
        };
        Self {
            symbol,
            initial_role: role.clone(),
            role,
            tail_position: placement.tail_position,
            xy_components,
            is_on_graph: placement.on_graph,
            is_removable: removable,
            is_tip_draggable: tip_draggable,
            state: if placement.on_graph {
                VectorState::Active
            } else {
                VectorState::Inactive
            },
            animate_back_target: None,
            initial: placement,
        }
    }

    /// Mark a free vector as non-removable (it can never go back to the toolbox)
    pub fn pinned(mut self) -> Self {
        self.is_removable = false;
        self
    }

    pub fn symbol(&self) -> Option<&str> {
        self.symbol.as_deref()
    }

    pub fn role(&self) -> &VectorRole {
        &self.role
    }

    /// The equation term, for equation vectors
    pub fn equation_term(&self) -> Option<&EquationTerm> {
        match &self.role {
            VectorRole::Equation(term) => Some(term),
            _ => None,
        }
    }

    pub fn is_sum(&self) -> bool {
        matches!(self.role, VectorRole::Sum)
    }

    pub fn tail_position(&self) -> Vector2 {
        self.tail_position
    }

    pub fn xy_components(&self) -> Vector2 {
        self.xy_components
    }

    /// Tail plus components
    pub fn tip_position(&self) -> Vector2 {
        self.tail_position + self.xy_components
    }

    pub fn x_component(&self) -> f64 {
        snap_to_zero(self.xy_components.x)
    }

    pub fn y_component(&self) -> f64 {
        snap_to_zero(self.xy_components.y)
    }

    pub fn magnitude(&self) -> f64 {
        snap_to_zero(self.xy_components.magnitude())
    }

    /// Signed angle in degrees, (-180, 180]; `None` when the magnitude is zero
    pub fn angle_degrees(&self) -> Option<f64> {
        signed_angle_degrees(self.xy_components.x, self.xy_components.y)
    }

    /// Unsigned angle in degrees, [0, 360); `None` when the magnitude is zero
    pub fn unsigned_angle_degrees(&self) -> Option<f64> {
        self.angle_degrees().map(signed_to_unsigned_degrees)
    }

    pub fn is_on_graph(&self) -> bool {
        self.is_on_graph
    }

    pub fn is_removable(&self) -> bool {
        self.is_removable
    }

    pub fn is_tip_draggable(&self) -> bool {
        self.is_tip_draggable
    }

    pub fn state(&self) -> VectorState {
        self.state
    }

    /// Where an animate-back is heading, while one is in progress
    pub fn animate_back_target(&self) -> Option<Vector2> {
        self.animate_back_target
    }

    /// Component vectors for a display style; `origin` is the graph origin
    pub fn component_vectors(&self, style: ComponentVectorStyle, origin: Vector2) -> Option<ComponentPair> {
        component_vector::project(self.tail_position, self.xy_components, style, origin)
    }

    /// As a snap target for other vectors
    pub fn as_snap_reference(&self) -> SnapReference {
        SnapReference {
            tail_position: self.tail_position,
            xy_components: self.xy_components,
        }
    }

    /// Store components, zero-snapping each one
    pub(crate) fn set_xy_components(&mut self, components: Vector2) {
        self.xy_components = Vector2::new(snap_to_zero(components.x), snap_to_zero(components.y));
    }

    /// Recompute derived components of an equation vector from its term
    pub(crate) fn refresh_equation_components(&mut self) {
        if let VectorRole::Equation(term) = &self.role {
            let scaled = term.scaled_components();
            self.xy_components = scaled;
        }
    }

    /// Move the tip towards `tip`, snapping per the context
    ///
    /// Returns false (and leaves the vector unchanged) when the snapped
    /// result would be the zero vector.
    pub(crate) fn set_tip_with_snap(&mut self, tip: Vector2, ctx: &SnapContext) -> bool {
        let tip = ctx.bounds.closest_point_to(tip);
        let raw = tip - self.tail_position;
        let (x, y) = ctx.orientation.constrain(raw.x, raw.y);
        let snapped = snap_components(Vector2::new(x, y), ctx);
        if snapped.is_zero() {
            return false;
        }
        self.set_xy_components(snapped);
        true
    }

    /// Move the tail for a body drag
    ///
    /// On the graph the tail is clamped into bounds, then either snapped to a
    /// nearby vector (polar) or rounded to grid coordinates. A removable
    /// vector pulled past the landing zone leaves the graph; off the graph it
    /// follows the pointer freely until it is dropped.
    pub(crate) fn move_tail_with_snap(&mut self, tail: Vector2, ctx: &SnapContext) {
        if self.is_removable && !ctx.landing_zone().contains(tail) {
            self.is_on_graph = false;
        }
        if !self.is_on_graph && !ctx.bounds.contains(tail) {
            self.tail_position = tail;
            return;
        }
        let tail = ctx.bounds.closest_point_to(tail);

        if ctx.snap_mode == CoordinateSnapMode::Polar {
            if let Some((snapped_tail, snapped_components)) =
                polar_snap(tail, self.xy_components, ctx)
            {
                self.tail_position = ctx.bounds.closest_point_to(snapped_tail);
                if matches!(self.role, VectorRole::Free) {
                    self.set_xy_components(snapped_components);
                }
                return;
            }
        }
        self.tail_position = ctx.bounds.closest_point_to(tail.rounded());
    }

    /// Start travelling back to the toolbox
    pub(crate) fn begin_animate_back(&mut self, target: Vector2) {
        self.is_on_graph = false;
        self.state = VectorState::AnimatingBack;
        self.animate_back_target = Some(target);
    }

    /// Advance an animate-back by `dt` seconds; true when it has arrived
    pub(crate) fn step_animate_back(&mut self, dt: f64, speed: f64) -> bool {
        let Some(target) = self.animate_back_target else {
            return false;
        };
        let remaining = target - self.tail_position;
        let travel = speed * dt;
        if remaining.magnitude() <= travel {
            self.return_to_toolbox(target);
            true
        } else {
            self.tail_position += remaining.with_magnitude(travel);
            false
        }
    }

    /// Back to the toolbox at `toolbox`: inactive, with the slot's initial components
    pub(crate) fn return_to_toolbox(&mut self, toolbox: Vector2) {
        self.state = VectorState::Inactive;
        self.is_on_graph = false;
        self.animate_back_target = None;
        self.tail_position = toolbox;
        self.role = self.initial_role.clone();
        self.xy_components = self.initial.xy_components;
        self.refresh_equation_components();
    }

    /// Restore the initial placement exactly
    pub(crate) fn reset(&mut self) {
        self.role = self.initial_role.clone();
        self.tail_position = self.initial.tail_position;
        self.xy_components = self.initial.xy_components;
        self.refresh_equation_components();
        self.is_on_graph = self.initial.on_graph;
        self.animate_back_target = None;
        self.state = if self.initial.on_graph {
            VectorState::Active
        } else {
            VectorState::Inactive
        };
    }
}

/// Snap raw components to the grid (Cartesian) or to integer magnitude
/// and interval angle (polar)
pub(crate) fn snap_components(raw: Vector2, ctx: &SnapContext) -> Vector2 {
    match ctx.snap_mode {
        CoordinateSnapMode::Cartesian => {
            let r = raw.rounded();
            Vector2::new(snap_to_zero(r.x), snap_to_zero(r.y))
        }
        CoordinateSnapMode::Polar => {
            let magnitude = raw.magnitude().round();
            let angle = round_to_interval(raw.angle().to_degrees(), ctx.polar_angle_interval);
            let v = Vector2::from_polar_degrees(magnitude, angle);
            let (x, y) = ctx.orientation.constrain(snap_to_zero(v.x), snap_to_zero(v.y));
            Vector2::new(x, y)
        }
    }
}

/// Find a reference the dragged vector should snap to
///
/// If the dragged tail or tip is within the snap distance of a reference's
/// tail or tip, the dragged vector takes the reference's angle (keeping its
/// own magnitude) and is moved so the close point lands exactly on the
/// reference point. Returns the new tail and components.
pub(crate) fn polar_snap(
    tail: Vector2,
    components: Vector2,
    ctx: &SnapContext,
) -> Option<(Vector2, Vector2)> {
    let tip = tail + components;
    let magnitude = components.magnitude();

    for reference in &ctx.references {
        let aligned = if reference.xy_components.is_zero() {
            components
        } else {
            let v = Vector2::from_polar(magnitude, reference.xy_components.angle());
            Vector2::new(snap_to_zero(v.x), snap_to_zero(v.y))
        };
        for point in [reference.tail_position, reference.tip_position()] {
            if tail.distance(&point) < ctx.polar_snap_distance {
                return Some((point, aligned));
            }
            if tip.distance(&point) < ctx.polar_snap_distance {
                return Some((point - aligned, aligned));
            }
        }
    }
    None
}
