//! Core geometric and identity types

pub mod bounds;
pub mod color;
pub mod handle;
pub mod transform;
pub mod vector;

pub use bounds::Bounds2;
pub use color::{Rgb, VectorColorPalette};
pub use handle::{VectorId, VectorSetId};
pub use transform::ModelViewTransform;
pub use vector::Vector2;
