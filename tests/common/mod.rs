//! Shared test utilities for vector-addition integration tests.
//!
//! Scene builders and small query helpers that all test crates import via
//! `mod common;`.

#![allow(dead_code)]

pub mod builders;

use vector_addition::{Scene, Vector2, VectorId, VectorSetId};

/// The first (and on most screens only) vector set
pub const SET: VectorSetId = VectorSetId::new(0);

/// Components of a set's sum
pub fn sum_components(scene: &Scene, set: VectorSetId) -> Vector2 {
    scene.vector_set(set).unwrap().sum().xy_components()
}

/// Components of every vector on the graph, in pool order
pub fn active_components(scene: &Scene, set: VectorSetId) -> Vec<Vector2> {
    scene
        .vector_set(set)
        .unwrap()
        .active_vectors()
        .map(|(_, v)| v.xy_components())
        .collect()
}

/// Tail and components of one vector
pub fn geometry(scene: &Scene, set: VectorSetId, id: VectorId) -> (Vector2, Vector2) {
    let v = scene.vector_set(set).unwrap().vector(id).unwrap();
    (v.tail_position(), v.xy_components())
}

/// Step `scene` until nothing is animating, with a frame cap
pub fn run_until_idle(scene: &mut Scene) -> usize {
    let mut frames = 0;
    while frames < 10_000 {
        let animating = scene
            .graph()
            .vector_sets()
            .iter()
            .any(|s| s.vectors().any(|(_, v)| v.animate_back_target().is_some()));
        if !animating {
            break;
        }
        scene.step(1.0 / 60.0);
        frames += 1;
    }
    frames
}

pub fn assert_vec_close(actual: Vector2, expected: Vector2) {
    assert!(
        actual.approx_eq(&expected, 1e-9),
        "expected {expected}, got {actual}"
    );
}
