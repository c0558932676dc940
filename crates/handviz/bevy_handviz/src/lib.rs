//! Bevy adapter for handviz-core.
//!
//! Add [`HandVisualizerPlugin`], spawn a [`HandVisualizerBundle`] per hand and
//! have the XR backend refresh [`XrHandDevices`] in [`HandVizSet::Ingest`].
//! Markers appear as children of the visualizer entity.

use bevy::prelude::*;
use bevy::transform::TransformSystem;

pub mod components;
pub mod resources;
pub mod scene;
pub mod systems;

pub use components::{HandMarker, HandVisualizer, HandVisualizerBundle, MarkerPose};
pub use resources::{MarkerAssets, MarkerStyle, XrHandDevices};
pub use scene::WorldScene;

pub use handviz_core::{
    Bone, DeviceCharacteristics, DeviceRegistry, HandFinger, HandSnapshot, Handedness,
    PrimitiveShape, TrackedDevice, VisualizerConfig,
};

/// Device ingest then marker update run in `Update`; transform sync runs in
/// `PostUpdate` before transform propagation.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum HandVizSet {
    Ingest,
    Visualize,
    Sync,
}

#[derive(Default)]
pub struct HandVisualizerPlugin {
    pub style: MarkerStyle,
}

impl Plugin for HandVisualizerPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.style.clone())
            .init_resource::<XrHandDevices>()
            .configure_sets(Update, (HandVizSet::Ingest, HandVizSet::Visualize).chain())
            .configure_sets(
                PostUpdate,
                HandVizSet::Sync.before(TransformSystem::TransformPropagate),
            )
            .add_systems(Startup, systems::setup_marker_assets)
            .add_systems(
                Update,
                systems::update_hand_visualizers.in_set(HandVizSet::Visualize),
            )
            .add_systems(
                PostUpdate,
                systems::sync_marker_transforms.in_set(HandVizSet::Sync),
            );
        info!("handviz: hand visualizer plugin registered");
    }
}
