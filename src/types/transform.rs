//! Model-view transform
//!
//! Maps model coordinates (y up, units of the graph grid) to view
//! coordinates (y down, pixels). Backed by a homogeneous 3x3 matrix.

use crate::types::{Bounds2, Vector2};
use nalgebra as na;

/// Affine transform from model space to view space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelViewTransform {
    matrix: na::Matrix3<f64>,
    inverse: na::Matrix3<f64>,
}

impl ModelViewTransform {
    /// Identity transform
    pub fn identity() -> Self {
        Self {
            matrix: na::Matrix3::identity(),
            inverse: na::Matrix3::identity(),
        }
    }

    /// Map `model_bounds` onto `view_bounds`, inverting the y axis
    ///
    /// The model's max y lands on the view's min y (top edge).
    /// Returns `None` when either bounds has zero area.
    pub fn rectangle_inverted_mapping(model_bounds: Bounds2, view_bounds: Bounds2) -> Option<Self> {
        if model_bounds.width() <= 0.0 || model_bounds.height() <= 0.0 {
            return None;
        }
        let sx = view_bounds.width() / model_bounds.width();
        let sy = view_bounds.height() / model_bounds.height();
        let tx = view_bounds.min.x - sx * model_bounds.min.x;
        let ty = view_bounds.min.y + sy * model_bounds.max.y;

        #[rustfmt::skip]
        let matrix = na::Matrix3::new(
            sx,  0.0, tx,
            0.0, -sy, ty,
            0.0, 0.0, 1.0,
        );
        let inverse = matrix.try_inverse()?;
        Some(Self { matrix, inverse })
    }

    /// Uniform scale from model units to view units along x
    pub fn scale_x(&self) -> f64 {
        self.matrix[(0, 0)]
    }

    /// Scale from model units to view units along y (negative when inverted)
    pub fn scale_y(&self) -> f64 {
        self.matrix[(1, 1)]
    }

    /// Transform a model position into view coordinates
    pub fn model_to_view_position(&self, position: Vector2) -> Vector2 {
        let p = self.matrix.transform_point(&na::Point2::new(position.x, position.y));
        Vector2::new(p.x, p.y)
    }

    /// Transform a view position into model coordinates
    pub fn view_to_model_position(&self, position: Vector2) -> Vector2 {
        let p = self.inverse.transform_point(&na::Point2::new(position.x, position.y));
        Vector2::new(p.x, p.y)
    }

    /// Transform a model displacement (ignores translation)
    pub fn model_to_view_delta(&self, delta: Vector2) -> Vector2 {
        let v = self.matrix.transform_vector(&na::Vector2::new(delta.x, delta.y));
        Vector2::new(v.x, v.y)
    }

    /// Transform a view displacement into model space
    pub fn view_to_model_delta(&self, delta: Vector2) -> Vector2 {
        let v = self.inverse.transform_vector(&na::Vector2::new(delta.x, delta.y));
        Vector2::new(v.x, v.y)
    }

    /// Transform model bounds into view bounds (normalized so min <= max)
    pub fn model_to_view_bounds(&self, bounds: Bounds2) -> Bounds2 {
        let a = self.model_to_view_position(bounds.min);
        let b = self.model_to_view_position(bounds.max);
        Bounds2::new(
            Vector2::new(a.x.min(b.x), a.y.min(b.y)),
            Vector2::new(a.x.max(b.x), a.y.max(b.y)),
        )
    }
}

impl Default for ModelViewTransform {
    fn default() -> Self {
        Self::identity()
    }
}
