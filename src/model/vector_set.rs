//! Vector sets
//!
//! A vector set owns a fixed pool of vectors and the resultant (sum) of the
//! ones currently on the graph. Pool slots are never destroyed: a vector
//! removed from the graph is reset and waits in the toolbox to be reused.
//!
//! Every mutating method ends by recomputing the sum, so the sum is always
//! consistent with the active vectors and the equation type.

use super::equation::EquationTerm;
use super::vector::{snap_components, Placement, SnapContext, SnapReference, Vector, VectorRole};
use crate::config::VectorAdditionConfig;
use crate::enums::{CoordinateSnapMode, EquationType, VectorState};
use crate::error::{Result, VectorAdditionError};
use crate::types::{Vector2, VectorColorPalette, VectorId, VectorSetId};

/// Either a pooled vector or the set's sum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VectorRef {
    Pooled(VectorId),
    Sum,
}

/// What happened when a dragged vector was released
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// Landed on the graph and joined the sum
    Activated,
    /// Released off the graph; now heading back to the toolbox
    Returning,
}

/// How an interrupted vector was settled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterruptOutcome {
    /// Was dragged on the graph, now active where it was
    Settled,
    /// Was off the graph (dragging or animating), now back in the toolbox
    ReturnedToToolbox,
}

/// Combine active components into a resultant per the equation type
pub fn combine(equation_type: EquationType, components: &[Vector2]) -> Vector2 {
    match equation_type {
        EquationType::Addition => components.iter().copied().sum(),
        EquationType::Subtraction => match components.split_first() {
            Some((first, rest)) => *first - rest.iter().copied().sum::<Vector2>(),
            None => Vector2::ZERO,
        },
        EquationType::Negation => -components.iter().copied().sum::<Vector2>(),
    }
}

/// A pool of vectors plus their resultant
#[derive(Debug, Clone)]
pub struct VectorSet {
    id: VectorSetId,
    snap_mode: CoordinateSnapMode,
    palette: VectorColorPalette,
    equation_type: EquationType,
    initial_equation_type: EquationType,
    vectors: Vec<Vector>,
    sum: Vector,
    toolbox_position: Vector2,
}

impl VectorSet {
    /// Create an empty set whose sum starts at `sum_tail`
    pub fn new(
        id: VectorSetId,
        snap_mode: CoordinateSnapMode,
        palette: VectorColorPalette,
        sum_symbol: Option<String>,
        sum_tail: Vector2,
    ) -> Self {
        let sum = Vector::new(
            sum_symbol,
            VectorRole::Sum,
            Placement {
                tail_position: sum_tail,
                xy_components: Vector2::ZERO,
                on_graph: false,
            },
        );
        let mut set = Self {
            id,
            snap_mode,
            palette,
            equation_type: EquationType::Addition,
            initial_equation_type: EquationType::Addition,
            vectors: Vec::new(),
            sum,
            toolbox_position: Vector2::ZERO,
        };
        set.update_sum();
        set
    }

    /// Set the equation type the set starts (and resets) with
    pub fn with_equation_type(mut self, equation_type: EquationType) -> Self {
        self.equation_type = equation_type;
        self.initial_equation_type = equation_type;
        self.update_sum();
        self
    }

    /// Where removed vectors travel back to
    pub fn with_toolbox_position(mut self, position: Vector2) -> Self {
        self.toolbox_position = position;
        self
    }

    /// Add a pre-allocated vector to the pool
    pub fn with_vector(mut self, vector: Vector) -> Self {
        debug_assert!(!vector.is_sum(), "sum vectors are owned by the set");
        self.vectors.push(vector);
        self.update_sum();
        self
    }

    /// Add `count` identical free slots that start in the toolbox
    pub fn with_pool(mut self, count: usize, symbol_prefix: Option<&str>, components: Vector2) -> Self {
        let start = self.vectors.len();
        for i in 0..count {
            let symbol = symbol_prefix.map(|p| format!("{p}{}", start + i + 1));
            self.vectors.push(Vector::new(
                symbol,
                VectorRole::Free,
                Placement {
                    tail_position: self.toolbox_position,
                    xy_components: components,
                    on_graph: false,
                },
            ));
        }
        self
    }

    pub fn id(&self) -> VectorSetId {
        self.id
    }

    pub fn snap_mode(&self) -> CoordinateSnapMode {
        self.snap_mode
    }

    pub fn palette(&self) -> &VectorColorPalette {
        &self.palette
    }

    pub fn equation_type(&self) -> EquationType {
        self.equation_type
    }

    pub fn toolbox_position(&self) -> Vector2 {
        self.toolbox_position
    }

    /// Total number of pool slots
    pub fn capacity(&self) -> usize {
        self.vectors.len()
    }

    /// Slots currently in the toolbox
    pub fn inactive_count(&self) -> usize {
        self.vectors
            .iter()
            .filter(|v| v.state == VectorState::Inactive)
            .count()
    }

    /// All pool slots, in pool order
    pub fn vectors(&self) -> impl Iterator<Item = (VectorId, &Vector)> {
        self.vectors
            .iter()
            .enumerate()
            .map(|(i, v)| (VectorId::new(i), v))
    }

    /// Vectors on the graph, in pool order
    pub fn active_vectors(&self) -> impl Iterator<Item = (VectorId, &Vector)> {
        self.vectors().filter(|(_, v)| v.is_on_graph)
    }

    pub fn vector(&self, id: VectorId) -> Result<&Vector> {
        self.vectors
            .get(id.index())
            .ok_or(VectorAdditionError::UnknownVector(id))
    }

    /// A pooled vector or the sum
    pub fn get(&self, target: VectorRef) -> Result<&Vector> {
        match target {
            VectorRef::Pooled(id) => self.vector(id),
            VectorRef::Sum => Ok(&self.sum),
        }
    }

    /// Find a pooled vector by its symbol
    pub fn find_by_symbol(&self, symbol: &str) -> Option<VectorId> {
        self.vectors
            .iter()
            .position(|v| v.symbol() == Some(symbol))
            .map(VectorId::new)
    }

    /// The resultant vector
    pub fn sum(&self) -> &Vector {
        &self.sum
    }

    /// Whether the sum has any contributing vector
    pub fn sum_is_defined(&self) -> bool {
        self.sum.is_on_graph
    }

    fn vector_mut(&mut self, id: VectorId) -> Result<&mut Vector> {
        self.vectors
            .get_mut(id.index())
            .ok_or(VectorAdditionError::UnknownVector(id))
    }

    fn expect_state(&self, id: VectorId, expected: VectorState) -> Result<()> {
        let actual = self.vector(id)?.state;
        if actual != expected {
            return Err(VectorAdditionError::InvalidState {
                id,
                expected: expected.to_string(),
                actual: actual.to_string(),
            });
        }
        Ok(())
    }

    /// Recompute the resultant from the active vectors
    fn update_sum(&mut self) {
        let components: Vec<Vector2> = self
            .vectors
            .iter()
            .filter(|v| v.is_on_graph)
            .map(|v| v.xy_components)
            .collect();
        self.sum.set_xy_components(combine(self.equation_type, &components));
        self.sum.is_on_graph = !components.is_empty();
        self.sum.state = if self.sum.is_on_graph {
            VectorState::Active
        } else {
            VectorState::Inactive
        };
    }

    /// Geometry of every active vector other than `exclude`, for polar snapping
    pub fn snap_references(&self, exclude: Option<VectorRef>) -> Vec<SnapReference> {
        let mut refs: Vec<_> = self
            .active_vectors()
            .filter(|(id, _)| exclude != Some(VectorRef::Pooled(*id)))
            .map(|(_, v)| v.as_snap_reference())
            .collect();
        if self.sum_is_defined() && exclude != Some(VectorRef::Sum) {
            refs.push(self.sum.as_snap_reference());
        }
        refs
    }

    // ------------------------------------------------------------------
    // Drag lifecycle
    // ------------------------------------------------------------------

    /// Take the first free slot out of the toolbox and start dragging it
    pub fn create_vector(&mut self, tail: Vector2) -> Result<VectorId> {
        let index = self
            .vectors
            .iter()
            .position(|v| v.state == VectorState::Inactive && v.is_removable)
            .ok_or(VectorAdditionError::PoolExhausted {
                capacity: self.vectors.len(),
            })?;
        let id = VectorId::new(index);
        self.take_from_toolbox(id, tail)?;
        Ok(id)
    }

    /// Take a specific slot out of the toolbox and start dragging it
    pub fn take_from_toolbox(&mut self, id: VectorId, tail: Vector2) -> Result<()> {
        self.expect_state(id, VectorState::Inactive)?;
        let vector = self.vector_mut(id)?;
        vector.state = VectorState::Dragging;
        vector.is_on_graph = false;
        vector.tail_position = tail;
        Ok(())
    }

    /// Start a body drag of a vector already on the graph
    pub fn begin_drag(&mut self, id: VectorId) -> Result<()> {
        self.expect_state(id, VectorState::Active)?;
        self.vector_mut(id)?.state = VectorState::Dragging;
        Ok(())
    }

    /// Move a dragged vector's tail
    pub fn drag_to(&mut self, id: VectorId, tail: Vector2, ctx: &SnapContext) -> Result<()> {
        self.expect_state(id, VectorState::Dragging)?;
        self.vector_mut(id)?.move_tail_with_snap(tail, ctx);
        self.update_sum();
        Ok(())
    }

    /// Release a dragged vector
    ///
    /// Inside the context's landing zone it lands on the graph. Outside, a
    /// removable vector heads back to the toolbox and a non-removable one is
    /// pulled back onto the graph.
    pub fn drop_vector(&mut self, id: VectorId, ctx: &SnapContext) -> Result<DropOutcome> {
        self.expect_state(id, VectorState::Dragging)?;
        let toolbox = self.toolbox_position;
        let vector = self.vector_mut(id)?;
        let landing_zone = ctx.landing_zone();

        let outcome = if landing_zone.contains(vector.tail_position) || !vector.is_removable {
            vector.is_on_graph = true;
            let tail = vector.tail_position;
            vector.move_tail_with_snap(tail, ctx);
            vector.state = VectorState::Active;
            DropOutcome::Activated
        } else {
            vector.begin_animate_back(toolbox);
            DropOutcome::Returning
        };
        self.update_sum();
        Ok(outcome)
    }

    /// Send an on-graph vector back to the toolbox
    pub fn remove_vector(&mut self, target: VectorRef) -> Result<()> {
        let id = match target {
            VectorRef::Sum => {
                return Err(VectorAdditionError::invariant(
                    "sum vectors are never removed from the graph",
                ))
            }
            VectorRef::Pooled(id) => id,
        };
        let toolbox = self.toolbox_position;
        let vector = self.vector_mut(id)?;
        if !vector.is_removable {
            return Err(VectorAdditionError::invariant(format!(
                "vector {id} is not removable"
            )));
        }
        if !vector.is_on_graph {
            return Err(VectorAdditionError::InvalidState {
                id,
                expected: VectorState::Active.to_string(),
                actual: vector.state.to_string(),
            });
        }
        vector.begin_animate_back(toolbox);
        self.update_sum();
        Ok(())
    }

    /// Drag a vector's tip
    pub fn drag_tip_to(&mut self, id: VectorId, tip: Vector2, ctx: &SnapContext) -> Result<bool> {
        let vector = self.vector(id)?;
        if !vector.is_tip_draggable {
            return Err(VectorAdditionError::invariant(format!(
                "vector {id} is not tip-draggable"
            )));
        }
        if !vector.is_on_graph {
            return Err(VectorAdditionError::InvalidState {
                id,
                expected: VectorState::Active.to_string(),
                actual: vector.state.to_string(),
            });
        }
        let changed = self.vector_mut(id)?.set_tip_with_snap(tip, ctx);
        self.update_sum();
        Ok(changed)
    }

    /// Body-drag the sum vector
    pub fn drag_sum_to(&mut self, tail: Vector2, ctx: &SnapContext) -> Result<()> {
        if !self.sum_is_defined() {
            return Err(VectorAdditionError::invariant("the sum is not on the graph"));
        }
        self.sum.move_tail_with_snap(tail, ctx);
        Ok(())
    }

    /// Set a free vector's components, snapped like a tip drag
    ///
    /// Returns false (and keeps the old components) when the snapped value
    /// is the zero vector.
    pub fn set_components(&mut self, id: VectorId, components: Vector2, ctx: &SnapContext) -> Result<bool> {
        let vector = self.vector_mut(id)?;
        if !matches!(vector.role, VectorRole::Free) {
            return Err(VectorAdditionError::invariant(format!(
                "vector {id} has derived components"
            )));
        }
        let (x, y) = ctx.orientation.constrain(components.x, components.y);
        let snapped = snap_components(Vector2::new(x, y), ctx);
        if snapped.is_zero() {
            return Ok(false);
        }
        vector.set_xy_components(snapped);
        self.update_sum();
        Ok(true)
    }

    /// Advance return-to-toolbox animations; returns the vectors that arrived
    pub fn step(&mut self, dt: f64, speed: f64) -> Vec<VectorId> {
        let arrived: Vec<VectorId> = self
            .vectors
            .iter_mut()
            .enumerate()
            .filter(|(_, v)| v.state == VectorState::AnimatingBack)
            .filter_map(|(i, v)| v.step_animate_back(dt, speed).then_some(VectorId::new(i)))
            .collect();
        if !arrived.is_empty() {
            self.update_sum();
        }
        arrived
    }

    /// Vectors being dragged while still on the graph
    pub fn dragging_on_graph(&self) -> Vec<VectorId> {
        self.vectors()
            .filter(|(_, v)| v.state == VectorState::Dragging && v.is_on_graph)
            .map(|(id, _)| id)
            .collect()
    }

    /// Cancel in-flight drags and animations
    ///
    /// A vector dragged on the graph settles in place, snapped with its own
    /// entry in `contexts` (see [`VectorSet::dragging_on_graph`]).
    pub fn interrupt(&mut self, contexts: &[(VectorId, SnapContext)]) -> Vec<(VectorId, InterruptOutcome)> {
        let toolbox = self.toolbox_position;
        let mut settled = Vec::new();
        for (i, vector) in self.vectors.iter_mut().enumerate() {
            let id = VectorId::new(i);
            let outcome = match vector.state {
                VectorState::Dragging if vector.is_on_graph => {
                    if let Some((_, ctx)) = contexts.iter().find(|(c, _)| *c == id) {
                        let tail = vector.tail_position;
                        vector.move_tail_with_snap(tail, ctx);
                    }
                    vector.state = VectorState::Active;
                    InterruptOutcome::Settled
                }
                VectorState::Dragging | VectorState::AnimatingBack => {
                    vector.return_to_toolbox(toolbox);
                    InterruptOutcome::ReturnedToToolbox
                }
                VectorState::Active | VectorState::Inactive => continue,
            };
            settled.push((id, outcome));
        }
        self.update_sum();
        settled
    }

    /// Clear every removable vector off the graph, immediately
    pub fn erase(&mut self) -> Vec<VectorId> {
        let toolbox = self.toolbox_position;
        let mut erased = Vec::new();
        for (i, vector) in self.vectors.iter_mut().enumerate() {
            if vector.is_removable && vector.state != VectorState::Inactive {
                vector.return_to_toolbox(toolbox);
                erased.push(VectorId::new(i));
            }
        }
        self.update_sum();
        erased
    }

    /// Restore every vector, the sum and the equation type
    pub fn reset(&mut self) {
        for vector in &mut self.vectors {
            vector.reset();
        }
        self.sum.reset();
        self.equation_type = self.initial_equation_type;
        self.update_sum();
    }

    /// Shift every vector (and the sum) by `delta`
    pub fn translate(&mut self, delta: Vector2) {
        for vector in &mut self.vectors {
            if vector.is_on_graph || vector.state == VectorState::Dragging {
                vector.tail_position += delta;
            }
            if let VectorRole::Equation(term) = &mut vector.role {
                term.base.tail_position += delta;
            }
        }
        self.sum.tail_position += delta;
    }

    // ------------------------------------------------------------------
    // Equation controls
    // ------------------------------------------------------------------

    pub fn set_equation_type(&mut self, equation_type: EquationType) {
        self.equation_type = equation_type;
        self.update_sum();
    }

    fn term_mut(&mut self, id: VectorId) -> Result<&mut EquationTerm> {
        match &mut self.vector_mut(id)?.role {
            VectorRole::Equation(term) => Ok(term),
            _ => Err(VectorAdditionError::invariant(format!(
                "vector {id} is not an equation vector"
            ))),
        }
    }

    /// Apply a change to an equation term, then refresh its vector and the sum
    fn edit_term(
        &mut self,
        id: VectorId,
        edit: impl FnOnce(&mut EquationTerm) -> Result<()>,
    ) -> Result<()> {
        edit(self.term_mut(id)?)?;
        self.vector_mut(id)?.refresh_equation_components();
        self.update_sum();
        Ok(())
    }

    pub fn set_coefficient(&mut self, id: VectorId, coefficient: i32, config: &VectorAdditionConfig) -> Result<()> {
        self.edit_term(id, |term| term.set_coefficient(coefficient, config))
    }

    pub fn set_base_x(&mut self, id: VectorId, x: i32, config: &VectorAdditionConfig) -> Result<()> {
        self.edit_term(id, |term| term.base.set_x(x, config))
    }

    pub fn set_base_y(&mut self, id: VectorId, y: i32, config: &VectorAdditionConfig) -> Result<()> {
        self.edit_term(id, |term| term.base.set_y(y, config))
    }

    pub fn set_base_magnitude(&mut self, id: VectorId, magnitude: i32, config: &VectorAdditionConfig) -> Result<()> {
        self.edit_term(id, |term| term.base.set_magnitude(magnitude, config))
    }

    pub fn set_base_angle(&mut self, id: VectorId, degrees: f64, config: &VectorAdditionConfig) -> Result<()> {
        self.edit_term(id, |term| term.base.set_angle(degrees, config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::GraphOrientation;
    use crate::types::Bounds2;

    fn ctx() -> SnapContext {
        SnapContext {
            bounds: Bounds2::from_coords(-10.0, -10.0, 10.0, 10.0),
            orientation: GraphOrientation::TwoDimensional,
            snap_mode: CoordinateSnapMode::Cartesian,
            polar_angle_interval: 5.0,
            polar_snap_distance: 1.0,
            drag_threshold: 1.0,
            references: Vec::new(),
        }
    }

    fn on_graph(tail: Vector2, components: Vector2) -> Vector {
        Vector::new(
            None,
            VectorRole::Free,
            Placement {
                tail_position: tail,
                xy_components: components,
                on_graph: true,
            },
        )
    }

    fn pool_set(count: usize) -> VectorSet {
        VectorSet::new(
            VectorSetId::new(0),
            CoordinateSnapMode::Cartesian,
            VectorColorPalette::blue(),
            Some("s".to_string()),
            Vector2::ZERO,
        )
        .with_toolbox_position(Vector2::new(15.0, 0.0))
        .with_pool(count, Some("v"), Vector2::new(3.0, 4.0))
    }

    #[test]
    fn test_combine() {
        let parts = [Vector2::new(6.0, 8.0), Vector2::new(8.0, 6.0)];
        assert_eq!(combine(EquationType::Addition, &parts), Vector2::new(14.0, 14.0));
        assert_eq!(combine(EquationType::Subtraction, &parts), Vector2::new(-2.0, 2.0));
        assert_eq!(combine(EquationType::Negation, &parts), Vector2::new(-14.0, -14.0));
        assert_eq!(combine(EquationType::Subtraction, &[]), Vector2::ZERO);
    }

    #[test]
    fn test_sum_of_preplaced_vectors() {
        let set = pool_set(0)
            .with_vector(on_graph(Vector2::ZERO, Vector2::new(6.0, 8.0)))
            .with_vector(on_graph(Vector2::ZERO, Vector2::new(8.0, 6.0)));
        let sum = set.sum();
        assert_eq!(sum.xy_components(), Vector2::new(14.0, 14.0));
        assert!((sum.magnitude() - 14.0 * 2f64.sqrt()).abs() < 1e-12);
        assert!((sum.angle_degrees().unwrap() - 45.0).abs() < 1e-9);
        assert!(set.sum_is_defined());
    }

    #[test]
    fn test_empty_sum_is_undefined() {
        let set = pool_set(3);
        assert!(!set.sum_is_defined());
        assert_eq!(set.sum().xy_components(), Vector2::ZERO);
        assert_eq!(set.sum().angle_degrees(), None);
    }

    #[test]
    fn test_create_drop_activates() {
        let mut set = pool_set(2);
        let id = set.create_vector(Vector2::new(12.0, 0.0)).unwrap();
        assert_eq!(set.vector(id).unwrap().state(), VectorState::Dragging);
        assert!(!set.sum_is_defined());

        set.drag_to(id, Vector2::new(2.2, 1.7), &ctx()).unwrap();
        assert_eq!(set.drop_vector(id, &ctx()).unwrap(), DropOutcome::Activated);

        let v = set.vector(id).unwrap();
        assert_eq!(v.state(), VectorState::Active);
        assert_eq!(v.tail_position(), Vector2::new(2.0, 2.0));
        assert_eq!(set.sum().xy_components(), Vector2::new(3.0, 4.0));
    }

    #[test]
    fn test_drop_within_threshold_is_clamped() {
        let mut set = pool_set(1);
        let id = set.create_vector(Vector2::new(10.6, 3.0)).unwrap();
        assert_eq!(set.drop_vector(id, &ctx()).unwrap(), DropOutcome::Activated);
        assert_eq!(set.vector(id).unwrap().tail_position(), Vector2::new(10.0, 3.0));
    }

    #[test]
    fn test_drop_outside_returns_to_toolbox() {
        let mut set = pool_set(1).with_vector(on_graph(Vector2::ZERO, Vector2::new(1.0, 1.0)));
        let before = set.sum().xy_components();

        let id = set.create_vector(Vector2::new(14.0, 0.0)).unwrap();
        assert_eq!(set.drop_vector(id, &ctx()).unwrap(), DropOutcome::Returning);
        assert_eq!(set.vector(id).unwrap().state(), VectorState::AnimatingBack);
        assert_eq!(set.sum().xy_components(), before);

        let mut arrived = Vec::new();
        for _ in 0..10 {
            arrived.extend(set.step(0.1, 20.0));
        }
        assert_eq!(arrived, vec![id]);
        assert_eq!(set.vector(id).unwrap().state(), VectorState::Inactive);
        assert_eq!(set.sum().xy_components(), before);
    }

    #[test]
    fn test_pinned_vector_clamped_on_drop() {
        let mut set = pool_set(0).with_vector(on_graph(Vector2::ZERO, Vector2::new(1.0, 1.0)).pinned());
        let id = VectorId::new(0);
        set.begin_drag(id).unwrap();
        set.drag_to(id, Vector2::new(30.0, 30.0), &ctx()).unwrap();
        assert_eq!(set.drop_vector(id, &ctx()).unwrap(), DropOutcome::Activated);
        assert_eq!(set.vector(id).unwrap().tail_position(), Vector2::new(10.0, 10.0));
    }

    #[test]
    fn test_body_drag_off_graph_returns_to_toolbox() {
        let mut set = pool_set(0).with_vector(on_graph(Vector2::ZERO, Vector2::new(3.0, 1.0)));
        let id = VectorId::new(0);
        set.begin_drag(id).unwrap();
        set.drag_to(id, Vector2::new(6.0, 6.0), &ctx()).unwrap();
        assert_eq!(set.sum().xy_components(), Vector2::new(3.0, 1.0));

        set.drag_to(id, Vector2::new(40.0, 40.0), &ctx()).unwrap();
        assert_eq!(set.vector(id).unwrap().tail_position(), Vector2::new(40.0, 40.0));
        assert!(!set.sum_is_defined());

        assert_eq!(set.drop_vector(id, &ctx()).unwrap(), DropOutcome::Returning);
        set.step(10.0, 20.0);
        let v = set.vector(id).unwrap();
        assert_eq!(v.state(), VectorState::Inactive);
        assert_eq!(v.tail_position(), Vector2::new(15.0, 0.0));
    }

    #[test]
    fn test_set_components_snaps_to_mode() {
        let mut set = pool_set(0).with_vector(on_graph(Vector2::ZERO, Vector2::new(1.0, 1.0)));
        let id = VectorId::new(0);
        assert!(set.set_components(id, Vector2::new(2.6, -1.2), &ctx()).unwrap());
        assert_eq!(set.sum().xy_components(), Vector2::new(3.0, -1.0));

        assert!(!set.set_components(id, Vector2::new(0.3, 0.1), &ctx()).unwrap());
        assert_eq!(set.vector(id).unwrap().xy_components(), Vector2::new(3.0, -1.0));

        let mut polar = ctx();
        polar.snap_mode = CoordinateSnapMode::Polar;
        set.set_components(id, Vector2::new(1.3, 2.7), &polar).unwrap();
        let v = set.vector(id).unwrap();
        assert!((v.magnitude() - 3.0).abs() < 1e-9);
        assert!((v.angle_degrees().unwrap() - 65.0).abs() < 1e-9);
    }

    #[test]
    fn test_interrupt_rounds_with_own_context() {
        let mut set = pool_set(0).with_vector(on_graph(Vector2::new(2.4, 1.6), Vector2::new(3.0, 0.0)));
        let id = VectorId::new(0);
        set.begin_drag(id).unwrap();
        assert_eq!(set.dragging_on_graph(), vec![id]);

        let mut polar = ctx();
        polar.snap_mode = CoordinateSnapMode::Polar;
        polar.references = set.snap_references(Some(VectorRef::Pooled(id)));
        let outcomes = set.interrupt(&[(id, polar)]);
        assert_eq!(outcomes, vec![(id, InterruptOutcome::Settled)]);
        assert_eq!(set.vector(id).unwrap().tail_position(), Vector2::new(2.0, 2.0));
    }

    #[test]
    fn test_pool_exhausted() {
        let mut set = pool_set(1);
        set.create_vector(Vector2::ZERO).unwrap();
        let err = set.create_vector(Vector2::ZERO).unwrap_err();
        assert_eq!(err, VectorAdditionError::PoolExhausted { capacity: 1 });
    }

    #[test]
    fn test_slot_reused_after_return() {
        let mut set = pool_set(1);
        let first = set.create_vector(Vector2::ZERO).unwrap();
        set.drop_vector(first, &ctx()).unwrap();
        set.remove_vector(VectorRef::Pooled(first)).unwrap();
        set.step(10.0, 20.0);
        let second = set.create_vector(Vector2::ZERO).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_sum_is_never_removed() {
        let mut set = pool_set(1);
        let err = set.remove_vector(VectorRef::Sum).unwrap_err();
        assert!(matches!(err, VectorAdditionError::InvariantViolation(_)));
    }

    #[test]
    fn test_invalid_state_transitions() {
        let mut set = pool_set(1);
        let id = VectorId::new(0);
        assert!(set.begin_drag(id).is_err());
        assert!(set.drag_to(id, Vector2::ZERO, &ctx()).is_err());
        assert!(set.remove_vector(VectorRef::Pooled(id)).is_err());
        assert!(set.vector(VectorId::new(9)).is_err());
    }

    #[test]
    fn test_tip_drag_updates_sum() {
        let mut set = pool_set(0).with_vector(on_graph(Vector2::ZERO, Vector2::new(1.0, 1.0)));
        assert!(set.drag_tip_to(VectorId::new(0), Vector2::new(4.2, -2.9), &ctx()).unwrap());
        assert_eq!(set.sum().xy_components(), Vector2::new(4.0, -3.0));
    }

    #[test]
    fn test_equation_type_change() {
        let mut set = pool_set(0)
            .with_vector(on_graph(Vector2::ZERO, Vector2::new(0.0, 5.0)))
            .with_vector(on_graph(Vector2::ZERO, Vector2::new(5.0, 5.0)));
        set.set_equation_type(EquationType::Negation);
        assert_eq!(set.sum().xy_components(), Vector2::new(-5.0, -10.0));
        set.set_equation_type(EquationType::Subtraction);
        assert_eq!(set.sum().xy_components(), Vector2::new(-5.0, 0.0));
        set.reset();
        assert_eq!(set.equation_type(), EquationType::Addition);
        assert_eq!(set.sum().xy_components(), Vector2::new(5.0, 10.0));
    }

    #[test]
    fn test_erase_and_interrupt() {
        let mut set = pool_set(3);
        let a = set.create_vector(Vector2::ZERO).unwrap();
        set.drop_vector(a, &ctx()).unwrap();
        let b = set.create_vector(Vector2::new(14.0, 0.0)).unwrap();

        let outcomes = set.interrupt(&[]);
        assert_eq!(outcomes, vec![(b, InterruptOutcome::ReturnedToToolbox)]);
        assert_eq!(set.vector(b).unwrap().state(), VectorState::Inactive);

        assert_eq!(set.erase(), vec![a]);
        assert!(!set.sum_is_defined());
        assert_eq!(set.inactive_count(), 3);
    }
}
