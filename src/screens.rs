//! Screen factories
//!
//! Builds the initial model of each of the four screens: graph bounds,
//! vector sets, pre-placed vectors, palettes and default toggles.

use crate::config::VectorAdditionConfig;
use crate::enums::{CoordinateSnapMode, EquationType, GraphOrientation, ScreenKind};
use crate::error::Result;
use crate::model::equation::{polar_components, BaseVector, EquationTerm};
use crate::model::graph::Graph;
use crate::model::scene::Scene;
use crate::model::screen::{SceneKey, ScreenModel, ViewToggles};
use crate::model::vector::{Placement, Vector, VectorRole};
use crate::model::vector_set::VectorSet;
use crate::types::{Bounds2, Vector2, VectorColorPalette, VectorSetId};

/// Explore 2D and Lab graph bounds
const PLANE_BOUNDS: (f64, f64, f64, f64) = (-5.0, -5.0, 55.0, 35.0);
/// Equations graph bounds
const EQUATIONS_BOUNDS: (f64, f64, f64, f64) = (-5.0, -5.0, 35.0, 25.0);
/// Slots per vector set on the Lab screen
const LAB_POOL_SIZE: usize = 10;

fn bounds((min_x, min_y, max_x, max_y): (f64, f64, f64, f64)) -> Bounds2 {
    Bounds2::from_coords(min_x, min_y, max_x, max_y)
}

fn in_toolbox(symbol: &str, toolbox: Vector2, components: Vector2) -> Vector {
    Vector::new(
        Some(symbol.to_string()),
        VectorRole::Free,
        Placement {
            tail_position: toolbox,
            xy_components: components,
            on_graph: false,
        },
    )
}

fn on_graph(symbol: &str, tail: Vector2, components: Vector2) -> Vector {
    Vector::new(
        Some(symbol.to_string()),
        VectorRole::Free,
        Placement {
            tail_position: tail,
            xy_components: components,
            on_graph: true,
        },
    )
}

impl ScreenModel {
    /// Build the initial model for a screen
    pub fn for_kind(kind: ScreenKind, config: &VectorAdditionConfig) -> Result<Self> {
        match kind {
            ScreenKind::Explore1D => explore_1d(config),
            ScreenKind::Explore2D => explore_2d(config),
            ScreenKind::Lab => lab(config),
            ScreenKind::Equations => equations(config),
        }
    }
}

/// Two one-dimensional graphs, keyed by orientation
pub fn explore_1d(config: &VectorAdditionConfig) -> Result<ScreenModel> {
    let horizontal = {
        let toolbox = Vector2::new(36.0, 0.0);
        let unit = Vector2::new(5.0, 0.0);
        let set = VectorSet::new(
            VectorSetId::new(0),
            CoordinateSnapMode::Cartesian,
            VectorColorPalette::blue(),
            Some("s".to_string()),
            Vector2::new(-25.0, 2.0),
        )
        .with_toolbox_position(toolbox)
        .with_vector(in_toolbox("a", toolbox, unit))
        .with_vector(in_toolbox("b", toolbox, unit))
        .with_vector(in_toolbox("c", toolbox, unit));
        let graph = Graph::new(
            Bounds2::from_coords(-30.0, -5.0, 30.0, 5.0),
            GraphOrientation::Horizontal,
        )?
        .with_vector_set(set);
        Scene::new("explore-1d horizontal", CoordinateSnapMode::Cartesian, graph, config.clone())
    };

    let vertical = {
        let toolbox = Vector2::new(0.0, -36.0);
        let unit = Vector2::new(0.0, 5.0);
        let set = VectorSet::new(
            VectorSetId::new(0),
            CoordinateSnapMode::Cartesian,
            VectorColorPalette::blue(),
            Some("s".to_string()),
            Vector2::new(2.0, -25.0),
        )
        .with_toolbox_position(toolbox)
        .with_vector(in_toolbox("d", toolbox, unit))
        .with_vector(in_toolbox("e", toolbox, unit))
        .with_vector(in_toolbox("f", toolbox, unit));
        let graph = Graph::new(
            Bounds2::from_coords(-5.0, -30.0, 5.0, 30.0),
            GraphOrientation::Vertical,
        )?
        .with_vector_set(set);
        Scene::new("explore-1d vertical", CoordinateSnapMode::Cartesian, graph, config.clone())
    };

    ScreenModel::new(
        ScreenKind::Explore1D,
        vec![
            (SceneKey::Orientation(GraphOrientation::Horizontal), horizontal),
            (SceneKey::Orientation(GraphOrientation::Vertical), vertical),
        ],
        ViewToggles::SUM | ViewToggles::GRID,
    )
}

/// One labelled set per snap mode, with one vector already on each graph
pub fn explore_2d(config: &VectorAdditionConfig) -> Result<ScreenModel> {
    let toolbox = Vector2::new(60.0, 15.0);

    let cartesian = {
        let set = VectorSet::new(
            VectorSetId::new(0),
            CoordinateSnapMode::Cartesian,
            VectorColorPalette::blue(),
            Some("s".to_string()),
            Vector2::new(25.0, 5.0),
        )
        .with_toolbox_position(toolbox)
        .with_vector(on_graph("a", Vector2::new(5.0, 5.0), Vector2::new(10.0, 5.0)))
        .with_vector(in_toolbox("b", toolbox, Vector2::new(5.0, 10.0)))
        .with_vector(in_toolbox("c", toolbox, Vector2::new(10.0, -5.0)));
        let graph = Graph::new(bounds(PLANE_BOUNDS), GraphOrientation::TwoDimensional)?
            .with_vector_set(set);
        Scene::new("explore-2d cartesian", CoordinateSnapMode::Cartesian, graph, config.clone())
    };

    let polar = {
        let set = VectorSet::new(
            VectorSetId::new(0),
            CoordinateSnapMode::Polar,
            VectorColorPalette::pink(),
            Some("s".to_string()),
            Vector2::new(25.0, 5.0),
        )
        .with_toolbox_position(toolbox)
        .with_vector(on_graph("d", Vector2::new(5.0, 5.0), polar_components(10.0, 30.0)))
        .with_vector(in_toolbox("e", toolbox, polar_components(8.0, 90.0)))
        .with_vector(in_toolbox("f", toolbox, polar_components(6.0, 180.0)));
        let graph = Graph::new(bounds(PLANE_BOUNDS), GraphOrientation::TwoDimensional)?
            .with_vector_set(set);
        Scene::new("explore-2d polar", CoordinateSnapMode::Polar, graph, config.clone())
    };

    ScreenModel::new(
        ScreenKind::Explore2D,
        vec![
            (SceneKey::SnapMode(CoordinateSnapMode::Cartesian), cartesian),
            (SceneKey::SnapMode(CoordinateSnapMode::Polar), polar),
        ],
        ViewToggles::SUM | ViewToggles::GRID,
    )
}

/// Two unlabelled pools per snap mode, told apart by colour
pub fn lab(config: &VectorAdditionConfig) -> Result<ScreenModel> {
    let scene = |mode: CoordinateSnapMode, name: &str| -> Result<Scene> {
        let components = match mode {
            CoordinateSnapMode::Cartesian => Vector2::new(8.0, 6.0),
            CoordinateSnapMode::Polar => polar_components(8.0, 45.0),
        };
        let pools = [
            (VectorColorPalette::blue(), "s1", Vector2::new(60.0, 25.0), Vector2::new(25.0, 5.0)),
            (VectorColorPalette::orange(), "s2", Vector2::new(60.0, 5.0), Vector2::new(25.0, 20.0)),
        ];
        let mut graph = Graph::new(bounds(PLANE_BOUNDS), GraphOrientation::TwoDimensional)?;
        for (index, (palette, sum_symbol, toolbox, sum_tail)) in pools.into_iter().enumerate() {
            let set = VectorSet::new(
                VectorSetId::new(index),
                mode,
                palette,
                Some(sum_symbol.to_string()),
                sum_tail,
            )
            .with_toolbox_position(toolbox)
            .with_pool(LAB_POOL_SIZE, None, components);
            graph = graph.with_vector_set(set);
        }
        Ok(Scene::new(name, mode, graph, config.clone()))
    };

    ScreenModel::new(
        ScreenKind::Lab,
        vec![
            (
                SceneKey::SnapMode(CoordinateSnapMode::Cartesian),
                scene(CoordinateSnapMode::Cartesian, "lab cartesian")?,
            ),
            (
                SceneKey::SnapMode(CoordinateSnapMode::Polar),
                scene(CoordinateSnapMode::Polar, "lab polar")?,
            ),
        ],
        ViewToggles::SUM | ViewToggles::GRID,
    )
}

/// Coefficient × base equation vectors and their combination
pub fn equations(config: &VectorAdditionConfig) -> Result<ScreenModel> {
    let scene = |mode: CoordinateSnapMode,
                 name: &str,
                 symbols: [&str; 3],
                 bases: [BaseVector; 2],
                 palette: VectorColorPalette|
     -> Result<Scene> {
        let tails = [Vector2::new(5.0, 5.0), Vector2::new(15.0, 5.0)];
        let mut set = VectorSet::new(
            VectorSetId::new(0),
            mode,
            palette,
            Some(symbols[2].to_string()),
            Vector2::new(25.0, 5.0),
        )
        .with_equation_type(EquationType::Addition);
        for ((symbol, mut base), tail) in symbols.iter().zip(bases).zip(tails) {
            base.tail_position = tail + Vector2::new(0.0, 10.0);
            let vector = Vector::new(
                Some(symbol.to_string()),
                VectorRole::Equation(EquationTerm::new(base, 1)),
                Placement {
                    tail_position: tail,
                    xy_components: Vector2::ZERO,
                    on_graph: true,
                },
            );
            set = set.with_vector(vector);
        }
        let graph = Graph::new(bounds(EQUATIONS_BOUNDS), GraphOrientation::TwoDimensional)?
            .with_vector_set(set);
        Ok(Scene::new(name, mode, graph, config.clone()))
    };

    let cartesian = scene(
        CoordinateSnapMode::Cartesian,
        "equations cartesian",
        ["a", "b", "c"],
        [
            BaseVector::new(Vector2::ZERO, Vector2::new(0.0, 5.0), CoordinateSnapMode::Cartesian),
            BaseVector::new(Vector2::ZERO, Vector2::new(5.0, 5.0), CoordinateSnapMode::Cartesian),
        ],
        VectorColorPalette::pink(),
    )?;
    let polar = scene(
        CoordinateSnapMode::Polar,
        "equations polar",
        ["d", "e", "f"],
        [
            BaseVector::polar(Vector2::ZERO, 5, 90.0),
            BaseVector::polar(Vector2::ZERO, 7, 45.0),
        ],
        VectorColorPalette::teal(),
    )?;

    ScreenModel::new(
        ScreenKind::Equations,
        vec![
            (SceneKey::SnapMode(CoordinateSnapMode::Cartesian), cartesian),
            (SceneKey::SnapMode(CoordinateSnapMode::Polar), polar),
        ],
        ViewToggles::SUM | ViewToggles::GRID,
    )
}
