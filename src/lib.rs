//! # vector-addition
//!
//! The model layer of an interactive vector-addition simulation: vectors
//! dragged onto a graph, snapped to a Cartesian or polar grid, and summed
//! (or subtracted, or negated) into a resultant that is always up to date.
//!
//! ## Features
//!
//! - Cartesian and polar snapping for tip and body drags
//! - Fixed vector pools with a toolbox lifecycle
//!   (inactive, dragging, active, animating back)
//! - Addition, subtraction and negation resultants
//! - Coefficient × base equation vectors
//! - Component vectors in invisible, parallelogram, triangle and on-axis styles
//! - Four screens: Explore 1D, Explore 2D, Lab and Equations
//!
//! ## Quick Start
//!
//! ```rust
//! use vector_addition::{ScreenKind, ScreenModel, Vector2, VectorAdditionConfig, VectorSetId};
//!
//! let config = VectorAdditionConfig::default();
//! let mut screen = ScreenModel::for_kind(ScreenKind::Lab, &config)?;
//! let scene = screen.current_scene_mut()?;
//!
//! let set = VectorSetId::new(0);
//! scene.place_vector(set, Vector2::new(2.0, 3.0))?;
//! scene.place_vector(set, Vector2::new(10.0, 3.0))?;
//!
//! let sum = scene.vector_set(set)?.sum();
//! assert_eq!(sum.xy_components(), Vector2::new(16.0, 12.0));
//! # Ok::<(), vector_addition::VectorAdditionError>(())
//! ```
//!
//! ## Architecture
//!
//! - `types` - value types: `Vector2`, `Bounds2`, transforms, colors, ids
//! - `model` - vectors, vector sets, graphs, scenes and screens
//! - `screens` - the initial state of each screen
//! - `config` - tuning parameters, validated once at startup
//! - `notification` - the per-scene event log

#![allow(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod angles;
pub mod config;
pub mod enums;
pub mod error;
pub mod model;
pub mod notification;
pub mod property;
pub mod screens;
pub mod types;

// Re-export commonly used types
pub use config::VectorAdditionConfig;
pub use error::{Result, VectorAdditionError};
pub use types::{Bounds2, ModelViewTransform, Rgb, Vector2, VectorColorPalette, VectorId, VectorSetId};

pub use enums::{
    ComponentVectorStyle, ComponentVectorType, CoordinateSnapMode, EquationType, GraphOrientation,
    ScreenKind, VectorState,
};

pub use model::{
    DropOutcome, Graph, Scene, SceneKey, ScreenModel, Vector, VectorRef, VectorSet, ViewToggles,
};

pub use notification::{EventKind, EventLog, SimEvent};
pub use property::Property;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_default_screen_creation() {
        let screen = ScreenModel::for_kind(ScreenKind::Explore2D, &VectorAdditionConfig::default()).unwrap();
        assert_eq!(screen.selected_key(), SceneKey::SnapMode(CoordinateSnapMode::Cartesian));
    }
}
