//! Component vectors
//!
//! Every vector can be decomposed into an x and a y component vector. Where
//! those components are drawn depends on the screen's
//! [`ComponentVectorStyle`]; their lengths never do.

use crate::enums::{ComponentVectorStyle, ComponentVectorType};
use crate::types::Vector2;

/// One axis-aligned projection of a parent vector
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComponentVector {
    pub component_type: ComponentVectorType,
    pub tail_position: Vector2,
    pub xy_components: Vector2,
}

impl ComponentVector {
    /// Tip position (tail + components)
    pub fn tip_position(&self) -> Vector2 {
        self.tail_position + self.xy_components
    }

    /// Signed length along its axis
    pub fn scalar(&self) -> f64 {
        match self.component_type {
            ComponentVectorType::X => self.xy_components.x,
            ComponentVectorType::Y => self.xy_components.y,
        }
    }
}

/// The x and y components of one parent vector
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComponentPair {
    pub x: ComponentVector,
    pub y: ComponentVector,
}

/// Project a parent vector into its components for a display style
///
/// Returns `None` for [`ComponentVectorStyle::Invisible`]. `origin` is the
/// graph origin, used by the on-axis style.
pub fn project(
    tail: Vector2,
    components: Vector2,
    style: ComponentVectorStyle,
    origin: Vector2,
) -> Option<ComponentPair> {
    let x_components = Vector2::new(components.x, 0.0);
    let y_components = Vector2::new(0.0, components.y);

    let (x_tail, y_tail) = match style {
        ComponentVectorStyle::Invisible => return None,
        ComponentVectorStyle::Parallelogram => (tail, tail),
        ComponentVectorStyle::Triangle => (tail, tail + x_components),
        ComponentVectorStyle::OnAxis => (
            Vector2::new(tail.x, origin.y),
            Vector2::new(origin.x, tail.y),
        ),
    };

    Some(ComponentPair {
        x: ComponentVector {
            component_type: ComponentVectorType::X,
            tail_position: x_tail,
            xy_components: x_components,
        },
        y: ComponentVector {
            component_type: ComponentVectorType::Y,
            tail_position: y_tail,
            xy_components: y_components,
        },
    })
}
