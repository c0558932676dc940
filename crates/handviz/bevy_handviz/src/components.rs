use bevy::prelude::*;
use handviz_core::{HandVizError, VisualizerConfig};

/// Root of one hand's marker subtree. Markers are spawned as its children.
#[derive(Component, Debug, Clone, Default)]
pub struct HandVisualizer(pub handviz_core::HandVisualizer<Entity>);

impl HandVisualizer {
    pub fn new(config: VisualizerConfig) -> Self {
        Self(handviz_core::HandVisualizer::new(config))
    }
}

/// Tag for marker entities spawned by a [`HandVisualizer`].
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct HandMarker;

/// World-space pose of a marker as last read from the device. Components
/// that were unavailable keep their previous value.
/// `sync_marker_transforms` turns this into the local `Transform`.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct MarkerPose {
    pub translation: Vec3,
    pub rotation: Quat,
}

impl Default for MarkerPose {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

#[derive(Bundle, Clone)]
pub struct HandVisualizerBundle {
    pub visualizer: HandVisualizer,
    pub name: Name,
    pub spatial: SpatialBundle,
}

impl HandVisualizerBundle {
    pub fn new(config: VisualizerConfig) -> Self {
        let name = format!("{:?}HandVisualizer", config.handedness);
        Self {
            visualizer: HandVisualizer::new(config),
            name: Name::new(name),
            spatial: SpatialBundle::default(),
        }
    }

    /// Validating variant of [`Self::new`].
    pub fn try_new(config: VisualizerConfig) -> Result<Self, HandVizError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Handedness follows the name: names containing "Left" track the left hand.
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            visualizer: HandVisualizer::new(VisualizerConfig::for_instance(&name)),
            name: Name::new(name),
            spatial: SpatialBundle::default(),
        }
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.spatial = SpatialBundle::from_transform(transform);
        self
    }
}
