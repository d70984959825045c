//! Rectangular bounds in model coordinates

use super::Vector2;
use std::fmt;

/// Axis-aligned 2D bounds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds2 {
    /// Minimum point (lower-left corner in model space)
    pub min: Vector2,
    /// Maximum point (upper-right corner in model space)
    pub max: Vector2,
}

impl Bounds2 {
    /// Create new bounds from min and max points
    pub fn new(min: Vector2, max: Vector2) -> Self {
        debug_assert!(min.x <= max.x && min.y <= max.y, "min must not exceed max");
        Bounds2 { min, max }
    }

    /// Create bounds from min x, min y, max x, max y
    pub fn from_coords(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Bounds2::new(Vector2::new(min_x, min_y), Vector2::new(max_x, max_y))
    }

    /// Create bounds that contain all given points
    pub fn from_points(points: &[Vector2]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bounds = Bounds2 {
            min: *first,
            max: *first,
        };
        for point in rest {
            bounds.expand_to_include(*point);
        }
        Some(bounds)
    }

    /// Get the width of the bounds
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Get the height of the bounds
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Get the center point of the bounds
    pub fn center(&self) -> Vector2 {
        Vector2::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
        )
    }

    /// Check if these bounds contain a point (edges inclusive)
    pub fn contains(&self, point: Vector2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// The point inside the bounds closest to `point`
    pub fn closest_point_to(&self, point: Vector2) -> Vector2 {
        Vector2::new(
            point.x.clamp(self.min.x, self.max.x),
            point.y.clamp(self.min.y, self.max.y),
        )
    }

    /// Grow the bounds by `margin` on every side
    pub fn dilated(&self, margin: f64) -> Bounds2 {
        Bounds2 {
            min: Vector2::new(self.min.x - margin, self.min.y - margin),
            max: Vector2::new(self.max.x + margin, self.max.y + margin),
        }
    }

    /// Shrink the bounds by `margin` on every side, collapsing to the center if too small
    pub fn eroded(&self, margin: f64) -> Bounds2 {
        let center = self.center();
        let half_w = (self.width() / 2.0 - margin).max(0.0);
        let half_h = (self.height() / 2.0 - margin).max(0.0);
        Bounds2 {
            min: Vector2::new(center.x - half_w, center.y - half_h),
            max: Vector2::new(center.x + half_w, center.y + half_h),
        }
    }

    /// Bounds translated by `delta`
    pub fn shifted(&self, delta: Vector2) -> Bounds2 {
        Bounds2 {
            min: self.min + delta,
            max: self.max + delta,
        }
    }

    /// Expand the bounds to include another point
    pub fn expand_to_include(&mut self, point: Vector2) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
    }
}

impl fmt::Display for Bounds2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bounds2[{} -> {}]", self.min, self.max)
    }
}
