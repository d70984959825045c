//! Simulation model
//!
//! Ownership runs top-down: a [`ScreenModel`] owns its scenes, a [`Scene`]
//! its [`Graph`], the graph its [`VectorSet`]s, and each set its pooled
//! [`Vector`]s and its sum.

pub mod component_vector;
pub mod equation;
pub mod graph;
pub mod scene;
pub mod screen;
pub mod vector;
pub mod vector_set;

pub use component_vector::{ComponentPair, ComponentVector};
pub use equation::{BaseVector, EquationTerm};
pub use graph::{Graph, SelectedVector};
pub use scene::Scene;
pub use screen::{SceneKey, ScreenModel, ViewToggles};
pub use vector::{Placement, SnapContext, SnapReference, Vector, VectorRole};
pub use vector_set::{DropOutcome, InterruptOutcome, VectorRef, VectorSet};
