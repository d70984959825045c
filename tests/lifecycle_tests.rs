//! Drag, drop, return-to-toolbox and interrupt lifecycle

mod common;

use common::builders::{SceneBuilder, TOOLBOX};
use common::{geometry, run_until_idle, sum_components, SET};
use vector_addition::{
    CoordinateSnapMode, DropOutcome, EventKind, GraphOrientation, Vector2, VectorAdditionConfig,
    VectorAdditionError, VectorId, VectorRef, VectorState,
};

#[test]
fn test_drop_outside_returns_without_touching_sum() {
    let mut scene = SceneBuilder::new(CoordinateSnapMode::Cartesian)
        .with_placed(Vector2::ZERO, Vector2::new(2.0, 2.0))
        .build();
    let before = sum_components(&scene, SET);

    let id = scene.create_vector(SET, Vector2::new(18.0, 0.0)).unwrap();
    scene.drag_to(SET, id, Vector2::new(25.0, -3.0)).unwrap();
    assert_eq!(sum_components(&scene, SET), before);
    assert_eq!(scene.drop_vector(SET, id).unwrap(), DropOutcome::Returning);
    assert_eq!(sum_components(&scene, SET), before);

    let frames = run_until_idle(&mut scene);
    assert!(frames > 0);
    let vector = scene.vector_set(SET).unwrap().vector(id).unwrap();
    assert_eq!(vector.state(), VectorState::Inactive);
    assert_eq!(vector.tail_position(), TOOLBOX);
    assert_eq!(sum_components(&scene, SET), before);
    assert_eq!(scene.events().count(EventKind::VectorReturned), 1);
}

#[test]
fn test_drop_just_outside_lands_within_threshold() {
    let mut scene = SceneBuilder::new(CoordinateSnapMode::Cartesian).build();
    let id = scene.create_vector(SET, Vector2::new(20.8, -20.4)).unwrap();
    assert_eq!(scene.drop_vector(SET, id).unwrap(), DropOutcome::Activated);
    assert_eq!(geometry(&scene, SET, id).0, Vector2::new(20.0, -20.0));
}

#[test]
fn test_custom_drag_threshold() {
    let config = VectorAdditionConfig::from_query_string("dragThreshold=0.5").unwrap();
    let mut scene = SceneBuilder::new(CoordinateSnapMode::Cartesian).build_with(config);
    let id = scene.create_vector(SET, Vector2::new(20.8, 0.0)).unwrap();
    assert_eq!(scene.drop_vector(SET, id).unwrap(), DropOutcome::Returning);
}

#[test]
fn test_pool_exhaustion_and_reuse() {
    let mut scene = SceneBuilder::new(CoordinateSnapMode::Cartesian)
        .pool(2, Vector2::new(1.0, 0.0))
        .build();
    let (a, _) = scene.place_vector(SET, Vector2::ZERO).unwrap();
    scene.place_vector(SET, Vector2::new(5.0, 5.0)).unwrap();

    let err = scene.create_vector(SET, Vector2::ZERO).unwrap_err();
    assert_eq!(err, VectorAdditionError::PoolExhausted { capacity: 2 });

    scene.remove_vector(SET, VectorRef::Pooled(a)).unwrap();
    // still animating, so the slot is not free yet
    assert!(scene.create_vector(SET, Vector2::ZERO).is_err());
    run_until_idle(&mut scene);
    assert_eq!(scene.create_vector(SET, Vector2::ZERO).unwrap(), a);
}

#[test]
fn test_body_drag_keeps_vector_in_sum() {
    let mut scene = SceneBuilder::new(CoordinateSnapMode::Cartesian)
        .with_placed(Vector2::ZERO, Vector2::new(3.0, 1.0))
        .build();
    let id = VectorId::new(0);
    scene.begin_drag(SET, id).unwrap();
    // inside the drag threshold: clamped onto the edge
    scene.drag_to(SET, id, Vector2::new(20.6, 19.4)).unwrap();
    assert_eq!(sum_components(&scene, SET), Vector2::new(3.0, 1.0));
    assert_eq!(geometry(&scene, SET, id).0, Vector2::new(20.0, 19.0));
    assert_eq!(scene.drop_vector(SET, id).unwrap(), DropOutcome::Activated);
}

#[test]
fn test_body_drag_off_graph_returns_to_toolbox() {
    let mut scene = SceneBuilder::new(CoordinateSnapMode::Cartesian)
        .with_placed(Vector2::ZERO, Vector2::new(3.0, 1.0))
        .with_placed(Vector2::new(5.0, 5.0), Vector2::new(2.0, 2.0))
        .build();
    let id = VectorId::new(0);
    scene.begin_drag(SET, id).unwrap();
    scene.drag_to(SET, id, Vector2::new(40.0, 40.0)).unwrap();
    assert_eq!(geometry(&scene, SET, id).0, Vector2::new(40.0, 40.0));
    assert_eq!(sum_components(&scene, SET), Vector2::new(2.0, 2.0));

    assert_eq!(scene.drop_vector(SET, id).unwrap(), DropOutcome::Returning);
    run_until_idle(&mut scene);
    let vector = scene.vector_set(SET).unwrap().vector(id).unwrap();
    assert_eq!(vector.state(), VectorState::Inactive);
    assert_eq!(vector.tail_position(), TOOLBOX);
    assert_eq!(sum_components(&scene, SET), Vector2::new(2.0, 2.0));

    // the slot can come back out of the toolbox
    scene.take_from_toolbox(SET, id, TOOLBOX).unwrap();
    scene.drag_to(SET, id, Vector2::new(1.0, 1.0)).unwrap();
    assert_eq!(scene.drop_vector(SET, id).unwrap(), DropOutcome::Activated);
    assert_eq!(sum_components(&scene, SET), Vector2::new(5.0, 3.0));
}

#[test]
fn test_body_drag_back_onto_graph_before_drop() {
    let mut scene = SceneBuilder::new(CoordinateSnapMode::Cartesian)
        .with_placed(Vector2::ZERO, Vector2::new(3.0, 1.0))
        .build();
    let id = VectorId::new(0);
    scene.begin_drag(SET, id).unwrap();
    scene.drag_to(SET, id, Vector2::new(35.0, 0.0)).unwrap();
    assert!(!scene.vector_set(SET).unwrap().sum_is_defined());
    scene.drag_to(SET, id, Vector2::new(4.2, -3.8)).unwrap();
    assert_eq!(scene.drop_vector(SET, id).unwrap(), DropOutcome::Activated);
    assert_eq!(geometry(&scene, SET, id).0, Vector2::new(4.0, -4.0));
    assert_eq!(sum_components(&scene, SET), Vector2::new(3.0, 1.0));
}

#[test]
fn test_interrupt_input() {
    let mut scene = SceneBuilder::new(CoordinateSnapMode::Cartesian)
        .with_placed(Vector2::ZERO, Vector2::new(1.0, 1.0))
        .build();
    let on_graph = VectorId::new(0);
    scene.begin_drag(SET, on_graph).unwrap();
    scene.drag_to(SET, on_graph, Vector2::new(7.4, -2.6)).unwrap();

    let from_toolbox = scene.create_vector(SET, Vector2::new(28.0, 5.0)).unwrap();
    let (returning, _) = scene.place_vector(SET, Vector2::new(1.0, 1.0)).unwrap();
    scene.remove_vector(SET, VectorRef::Pooled(returning)).unwrap();

    scene.interrupt_input().unwrap();
    let set = scene.vector_set(SET).unwrap();
    assert_eq!(set.vector(on_graph).unwrap().state(), VectorState::Active);
    assert_eq!(set.vector(on_graph).unwrap().tail_position(), Vector2::new(7.0, -3.0));
    assert_eq!(set.vector(from_toolbox).unwrap().state(), VectorState::Inactive);
    assert_eq!(set.vector(returning).unwrap().state(), VectorState::Inactive);
    assert_eq!(sum_components(&scene, SET), Vector2::new(1.0, 1.0));
}

#[test]
fn test_polar_typed_components_are_snapped() {
    let mut scene = SceneBuilder::new(CoordinateSnapMode::Polar)
        .with_placed(Vector2::ZERO, Vector2::new(5.0, 0.0))
        .build();
    let id = VectorId::new(0);
    assert!(scene.set_components(SET, id, Vector2::new(1.3, 2.7)).unwrap());
    let v = scene.vector_set(SET).unwrap().vector(id).unwrap();
    assert!((v.magnitude() - 3.0).abs() < 1e-9);
    assert!((v.angle_degrees().unwrap() - 65.0).abs() < 1e-9);

    assert!(!scene.set_components(SET, id, Vector2::new(0.2, 0.3)).unwrap());
    assert!((geometry(&scene, SET, id).1.magnitude() - 3.0).abs() < 1e-9);
}

#[test]
fn test_horizontal_graph_flattens_components() {
    let mut scene = SceneBuilder::new(CoordinateSnapMode::Cartesian)
        .orientation(GraphOrientation::Horizontal)
        .pool(2, Vector2::new(4.0, 0.0))
        .build();
    let (id, _) = scene.place_vector(SET, Vector2::ZERO).unwrap();
    scene.drag_tip_to(SET, id, Vector2::new(-6.0, 9.0)).unwrap();
    assert_eq!(geometry(&scene, SET, id).1, Vector2::new(-6.0, 0.0));
    scene.set_components(SET, id, Vector2::new(2.0, 2.0)).unwrap();
    assert_eq!(sum_components(&scene, SET), Vector2::new(2.0, 0.0));
}

#[test]
fn test_tip_drag_to_tail_is_ignored() {
    let mut scene = SceneBuilder::new(CoordinateSnapMode::Cartesian)
        .with_placed(Vector2::new(2.0, 2.0), Vector2::new(3.0, 0.0))
        .build();
    let id = VectorId::new(0);
    assert!(!scene.drag_tip_to(SET, id, Vector2::new(2.3, 1.8)).unwrap());
    assert_eq!(geometry(&scene, SET, id).1, Vector2::new(3.0, 0.0));
}

#[test]
fn test_sum_drag_and_origin_move() {
    let mut scene = SceneBuilder::new(CoordinateSnapMode::Cartesian)
        .with_placed(Vector2::ZERO, Vector2::new(3.0, 4.0))
        .build();
    scene.drag_sum_to(SET, Vector2::new(-5.2, 6.9)).unwrap();
    let sum = scene.vector_set(SET).unwrap().sum();
    assert_eq!(sum.tail_position(), Vector2::new(-5.0, 7.0));
    assert!(!sum.is_tip_draggable());
    assert!(!sum.is_removable());

    let delta = scene.move_origin(Vector2::new(-5.0, 7.0)).unwrap();
    assert_eq!(delta, Vector2::new(5.0, -7.0));
    assert_eq!(scene.vector_set(SET).unwrap().sum().tail_position(), Vector2::ZERO);
    assert_eq!(geometry(&scene, SET, VectorId::new(0)).0, Vector2::new(5.0, -7.0));
}

#[test]
fn test_erase_then_reset() {
    let mut scene = SceneBuilder::new(CoordinateSnapMode::Cartesian)
        .with_placed(Vector2::ZERO, Vector2::new(3.0, 4.0))
        .build();
    scene.place_vector(SET, Vector2::new(5.0, 5.0)).unwrap();
    scene.erase();
    assert!(!scene.vector_set(SET).unwrap().sum_is_defined());

    scene.reset();
    assert_eq!(sum_components(&scene, SET), Vector2::new(3.0, 4.0));
    assert_eq!(scene.vector_set(SET).unwrap().active_vectors().count(), 1);
}
