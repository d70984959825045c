//! Developer tuning parameters
//!
//! Arrow geometry and interaction thresholds can be overridden with a
//! query-string style argument such as
//! `vectorHeadWidth=12&polarSnapDistance=0.5`. Every value must be a positive
//! finite number, and arrow tails must be narrower than their heads.
//! Validation happens once, at startup; nothing downstream re-checks.

use crate::error::{Result, VectorAdditionError};
use once_cell::sync::OnceCell;
use std::ops::RangeInclusive;

static GLOBAL: OnceCell<VectorAdditionConfig> = OnceCell::new();

/// Arrow dimensions, in view units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowGeometry {
    pub head_width: f64,
    pub head_height: f64,
    pub tail_width: f64,
}

impl ArrowGeometry {
    fn validate(&self, prefix: &str) -> Result<()> {
        if self.tail_width >= self.head_width {
            return Err(VectorAdditionError::invalid_config(
                format!("{prefix}TailWidth"),
                format!(
                    "tail width {} must be less than head width {}",
                    self.tail_width, self.head_width
                ),
            ));
        }
        Ok(())
    }
}

/// Tuning parameters for the whole simulation
#[derive(Debug, Clone, PartialEq)]
pub struct VectorAdditionConfig {
    /// Main and sum vector arrows
    pub vector_arrow: ArrowGeometry,
    /// Component vector arrows
    pub component_arrow: ArrowGeometry,
    /// How far outside the graph (model units) a drop still lands on it
    pub drag_threshold: f64,
    /// Distance (model units) within which polar drags snap to other vectors
    pub polar_snap_distance: f64,
    /// Angle step for polar editing, degrees
    pub polar_angle_interval: f64,
    /// Speed of the return-to-toolbox animation, model units per second
    pub animate_back_speed: f64,
    /// Allowed x/y for Cartesian base vectors
    pub component_range: RangeInclusive<i32>,
    /// Allowed magnitude for polar base vectors
    pub magnitude_range: RangeInclusive<i32>,
    /// Allowed equation coefficients
    pub coefficient_range: RangeInclusive<i32>,
}

impl Default for VectorAdditionConfig {
    fn default() -> Self {
        Self {
            vector_arrow: ArrowGeometry {
                head_width: 9.0,
                head_height: 10.0,
                tail_width: 3.5,
            },
            component_arrow: ArrowGeometry {
                head_width: 6.0,
                head_height: 6.0,
                tail_width: 1.5,
            },
            drag_threshold: 1.0,
            polar_snap_distance: 1.0,
            polar_angle_interval: 5.0,
            animate_back_speed: 20.0,
            component_range: -10..=10,
            magnitude_range: 0..=10,
            coefficient_range: -5..=5,
        }
    }
}

impl VectorAdditionConfig {
    /// Parse overrides from `key=value&key=value`, on top of the defaults
    ///
    /// A leading `?` is ignored. Unknown keys and malformed values fail.
    pub fn from_query_string(query: &str) -> Result<Self> {
        let mut config = Self::default();
        let query = query.strip_prefix('?').unwrap_or(query);

        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, raw) = pair
                .split_once('=')
                .ok_or_else(|| VectorAdditionError::invalid_config(pair, "expected key=value"))?;
            let value = parse_positive(key, raw)?;

            let slot = match key {
                "vectorHeadWidth" => &mut config.vector_arrow.head_width,
                "vectorHeadHeight" => &mut config.vector_arrow.head_height,
                "vectorTailWidth" => &mut config.vector_arrow.tail_width,
                "componentHeadWidth" => &mut config.component_arrow.head_width,
                "componentHeadHeight" => &mut config.component_arrow.head_height,
                "componentTailWidth" => &mut config.component_arrow.tail_width,
                "dragThreshold" => &mut config.drag_threshold,
                "polarSnapDistance" => &mut config.polar_snap_distance,
                "polarAngleInterval" => &mut config.polar_angle_interval,
                "animateBackSpeed" => &mut config.animate_back_speed,
                _ => return Err(VectorAdditionError::invalid_config(key, "unknown parameter")),
            };
            *slot = value;
        }

        config.validate()?;
        Ok(config)
    }

    /// Check every invariant between values
    pub fn validate(&self) -> Result<()> {
        let positives = [
            ("vectorHeadWidth", self.vector_arrow.head_width),
            ("vectorHeadHeight", self.vector_arrow.head_height),
            ("vectorTailWidth", self.vector_arrow.tail_width),
            ("componentHeadWidth", self.component_arrow.head_width),
            ("componentHeadHeight", self.component_arrow.head_height),
            ("componentTailWidth", self.component_arrow.tail_width),
            ("dragThreshold", self.drag_threshold),
            ("polarSnapDistance", self.polar_snap_distance),
            ("polarAngleInterval", self.polar_angle_interval),
            ("animateBackSpeed", self.animate_back_speed),
        ];
        for (key, value) in positives {
            if !(value.is_finite() && value > 0.0) {
                return Err(VectorAdditionError::invalid_config(
                    key,
                    format!("{value} is not a positive number"),
                ));
            }
        }

        self.vector_arrow.validate("vector")?;
        self.component_arrow.validate("component")?;

        if 360.0 % self.polar_angle_interval != 0.0 {
            return Err(VectorAdditionError::invalid_config(
                "polarAngleInterval",
                "must divide 360 evenly",
            ));
        }
        if self.magnitude_range.start() < &0 {
            return Err(VectorAdditionError::invalid_config(
                "magnitudeRange",
                "magnitudes cannot be negative",
            ));
        }
        Ok(())
    }
}

fn parse_positive(key: &str, raw: &str) -> Result<f64> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| VectorAdditionError::invalid_config(key, format!("'{raw}' is not a number")))?;
    if !(value.is_finite() && value > 0.0) {
        return Err(VectorAdditionError::invalid_config(
            key,
            format!("{value} is not a positive number"),
        ));
    }
    Ok(value)
}

/// Install the process-wide config; may only be called once
pub fn init(config: VectorAdditionConfig) -> Result<()> {
    config.validate()?;
    GLOBAL
        .set(config)
        .map_err(|_| VectorAdditionError::ConfigAlreadyInitialized)
}

/// The process-wide config, or the defaults if none was installed
pub fn global() -> &'static VectorAdditionConfig {
    GLOBAL.get_or_init(VectorAdditionConfig::default)
}
