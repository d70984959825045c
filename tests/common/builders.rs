//! Scene builders for integration tests.

use vector_addition::model::{Placement, VectorRole};
use vector_addition::{
    Bounds2, CoordinateSnapMode, EquationType, Graph, GraphOrientation, Scene, Vector,
    Vector2, VectorAdditionConfig, VectorColorPalette, VectorSet, VectorSetId,
};

/// Graph bounds used by the builders
pub const BOUNDS: (f64, f64, f64, f64) = (-20.0, -20.0, 20.0, 20.0);
/// Where removed vectors go; well outside `BOUNDS`
pub const TOOLBOX: Vector2 = Vector2::new(30.0, 0.0);

/// A free vector already on the graph
pub fn placed(tail: Vector2, components: Vector2) -> Vector {
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

/// Builder for a single-set scene
pub struct SceneBuilder {
    snap_mode: CoordinateSnapMode,
    orientation: GraphOrientation,
    equation_type: EquationType,
    pool: usize,
    pool_components: Vector2,
    placed: Vec<Vector>,
}

impl SceneBuilder {
    pub fn new(snap_mode: CoordinateSnapMode) -> Self {
        Self {
            snap_mode,
            orientation: GraphOrientation::TwoDimensional,
            equation_type: EquationType::Addition,
            pool: 5,
            pool_components: Vector2::new(3.0, 4.0),
            placed: Vec::new(),
        }
    }

    pub fn orientation(mut self, orientation: GraphOrientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn equation_type(mut self, equation_type: EquationType) -> Self {
        self.equation_type = equation_type;
        self
    }

    pub fn pool(mut self, size: usize, components: Vector2) -> Self {
        self.pool = size;
        self.pool_components = components;
        self
    }

    /// Pre-place a vector; placed vectors come before pool slots
    pub fn with_placed(mut self, tail: Vector2, components: Vector2) -> Self {
        self.placed.push(placed(tail, components));
        self
    }

    pub fn build(self) -> Scene {
        self.build_with(VectorAdditionConfig::default())
    }

    pub fn build_with(self, config: VectorAdditionConfig) -> Scene {
        let mut set = VectorSet::new(
            VectorSetId::new(0),
            self.snap_mode,
            VectorColorPalette::blue(),
            Some("s".to_string()),
            Vector2::ZERO,
        )
        .with_equation_type(self.equation_type)
        .with_toolbox_position(TOOLBOX);
        for vector in self.placed {
            set = set.with_vector(vector);
        }
        let set = set.with_pool(self.pool, None, self.pool_components);

        let (min_x, min_y, max_x, max_y) = BOUNDS;
        let graph = Graph::new(Bounds2::from_coords(min_x, min_y, max_x, max_y), self.orientation)
            .unwrap()
            .with_vector_set(set);
        Scene::new("test", self.snap_mode, graph, config)
    }
}
