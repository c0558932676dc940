//! Visualizer configuration.

use serde::{Deserialize, Serialize};

use crate::error::HandVizError;
use crate::hand::Handedness;
use crate::scene::PrimitiveShape;

/// Uniform local scale applied to every marker.
pub const DEFAULT_MARKER_SCALE: f32 = 0.015;

/// Fixed for the lifetime of a visualizer; never re-read per frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizerConfig {
    pub handedness: Handedness,
    pub marker_scale: f32,
    pub marker_shape: PrimitiveShape,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            handedness: Handedness::Right,
            marker_scale: DEFAULT_MARKER_SCALE,
            marker_shape: PrimitiveShape::Sphere,
        }
    }
}

impl VisualizerConfig {
    pub fn new(handedness: Handedness) -> Self {
        Self {
            handedness,
            ..Self::default()
        }
    }

    /// Config whose handedness is derived from the owning instance's name.
    pub fn for_instance(name: &str) -> Self {
        Self::new(Handedness::from_instance_name(name))
    }

    pub fn with_marker_scale(mut self, scale: f32) -> Self {
        self.marker_scale = scale;
        self
    }

    pub fn with_marker_shape(mut self, shape: PrimitiveShape) -> Self {
        self.marker_shape = shape;
        self
    }

    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(s: &str) -> Result<Self, HandVizError> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), HandVizError> {
        if !self.marker_scale.is_finite() || self.marker_scale <= 0.0 {
            return Err(HandVizError::InvalidMarkerScale(self.marker_scale));
        }
        Ok(())
    }
}
