//! Base vectors and equation terms (Equations screen)
//!
//! Each equation vector is `coefficient × base`. The base vector is edited
//! through numeric controls only: x/y in Cartesian scenes, magnitude/angle
//! in polar scenes. The equation vector's components are always derived.
//!
//! A polar base vector keeps its magnitude and angle controls as its state,
//! so the angle survives a zero magnitude.

use crate::angles::{round_to_interval, signed_angle_degrees, snap_to_zero};
use crate::config::VectorAdditionConfig;
use crate::enums::CoordinateSnapMode;
use crate::error::{Result, VectorAdditionError};
use crate::types::Vector2;

/// A vector set by spinners, scaled by a coefficient to produce an equation vector
#[derive(Debug, Clone, PartialEq)]
pub struct BaseVector {
    pub(crate) tail_position: Vector2,
    pub(crate) xy_components: Vector2,
    pub(crate) snap_mode: CoordinateSnapMode,
    polar_magnitude: i32,
    polar_angle: f64,
}

impl BaseVector {
    /// Polar base vectors round `xy_components` to an integer magnitude
    pub fn new(tail_position: Vector2, xy_components: Vector2, snap_mode: CoordinateSnapMode) -> Self {
        let polar_magnitude = xy_components.magnitude().round() as i32;
        let polar_angle = signed_angle_degrees(xy_components.x, xy_components.y).unwrap_or(0.0);
        let xy_components = match snap_mode {
            CoordinateSnapMode::Cartesian => xy_components,
            CoordinateSnapMode::Polar => polar_components(polar_magnitude as f64, polar_angle),
        };
        Self {
            tail_position,
            xy_components,
            snap_mode,
            polar_magnitude,
            polar_angle,
        }
    }

    /// A polar base vector from its control values
    pub fn polar(tail_position: Vector2, magnitude: i32, angle_degrees: f64) -> Self {
        Self {
            tail_position,
            xy_components: polar_components(magnitude as f64, angle_degrees),
            snap_mode: CoordinateSnapMode::Polar,
            polar_magnitude: magnitude,
            polar_angle: angle_degrees,
        }
    }

    pub fn tail_position(&self) -> Vector2 {
        self.tail_position
    }

    pub fn xy_components(&self) -> Vector2 {
        self.xy_components
    }

    pub fn magnitude(&self) -> f64 {
        match self.snap_mode {
            CoordinateSnapMode::Cartesian => snap_to_zero(self.xy_components.magnitude()),
            CoordinateSnapMode::Polar => self.polar_magnitude as f64,
        }
    }

    /// Signed angle in degrees
    ///
    /// Cartesian: `None` for a zero base vector. Polar: the angle control,
    /// even at zero magnitude.
    pub fn angle_degrees(&self) -> Option<f64> {
        match self.snap_mode {
            CoordinateSnapMode::Cartesian => {
                signed_angle_degrees(self.xy_components.x, self.xy_components.y)
            }
            CoordinateSnapMode::Polar => Some(self.polar_angle),
        }
    }

    fn require_mode(&self, mode: CoordinateSnapMode, control: &str) -> Result<()> {
        if self.snap_mode != mode {
            return Err(VectorAdditionError::invariant(format!(
                "{control} control is not available in {} mode",
                self.snap_mode
            )));
        }
        Ok(())
    }

    pub(crate) fn set_x(&mut self, x: i32, config: &VectorAdditionConfig) -> Result<()> {
        self.require_mode(CoordinateSnapMode::Cartesian, "x component")?;
        check_range("x component", x, &config.component_range)?;
        self.xy_components.x = x as f64;
        Ok(())
    }

    pub(crate) fn set_y(&mut self, y: i32, config: &VectorAdditionConfig) -> Result<()> {
        self.require_mode(CoordinateSnapMode::Cartesian, "y component")?;
        check_range("y component", y, &config.component_range)?;
        self.xy_components.y = y as f64;
        Ok(())
    }

    pub(crate) fn set_magnitude(&mut self, magnitude: i32, config: &VectorAdditionConfig) -> Result<()> {
        self.require_mode(CoordinateSnapMode::Polar, "magnitude")?;
        check_range("magnitude", magnitude, &config.magnitude_range)?;
        self.polar_magnitude = magnitude;
        self.xy_components = polar_components(magnitude as f64, self.polar_angle);
        Ok(())
    }

    pub(crate) fn set_angle(&mut self, degrees: f64, config: &VectorAdditionConfig) -> Result<()> {
        self.require_mode(CoordinateSnapMode::Polar, "angle")?;
        if !(-180.0..=180.0).contains(&degrees) {
            return Err(VectorAdditionError::OutOfRange {
                name: "angle",
                value: degrees,
                min: -180.0,
                max: 180.0,
            });
        }
        let snapped = round_to_interval(degrees, config.polar_angle_interval);
        if snapped != degrees {
            return Err(VectorAdditionError::invariant(format!(
                "angle {degrees} is not a multiple of {}",
                config.polar_angle_interval
            )));
        }
        self.polar_angle = degrees;
        self.xy_components = polar_components(self.polar_magnitude as f64, degrees);
        Ok(())
    }
}

/// A coefficient applied to a base vector
#[derive(Debug, Clone, PartialEq)]
pub struct EquationTerm {
    pub(crate) base: BaseVector,
    pub(crate) coefficient: i32,
}

impl EquationTerm {
    pub fn new(base: BaseVector, coefficient: i32) -> Self {
        Self { base, coefficient }
    }

    pub fn base(&self) -> &BaseVector {
        &self.base
    }

    pub fn coefficient(&self) -> i32 {
        self.coefficient
    }

    /// Components of the equation vector this term produces
    pub fn scaled_components(&self) -> Vector2 {
        let scaled = self.base.xy_components * self.coefficient as f64;
        Vector2::new(snap_to_zero(scaled.x), snap_to_zero(scaled.y))
    }

    pub(crate) fn set_coefficient(&mut self, coefficient: i32, config: &VectorAdditionConfig) -> Result<()> {
        check_range("coefficient", coefficient, &config.coefficient_range)?;
        self.coefficient = coefficient;
        Ok(())
    }
}

/// Components for a polar (magnitude, signed degrees) pair, zero-snapped
pub(crate) fn polar_components(magnitude: f64, degrees: f64) -> Vector2 {
    let v = Vector2::from_polar_degrees(magnitude, degrees);
    Vector2::new(snap_to_zero(v.x), snap_to_zero(v.y))
}

fn check_range(name: &'static str, value: i32, range: &std::ops::RangeInclusive<i32>) -> Result<()> {
    if !range.contains(&value) {
        return Err(VectorAdditionError::OutOfRange {
            name,
            value: value as f64,
            min: *range.start() as f64,
            max: *range.end() as f64,
        });
    }
    Ok(())
}
