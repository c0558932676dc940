//! Per-frame hand visualizer.

use crate::config::VisualizerConfig;
use crate::device::{find_tracked_hand, DeviceSource};
use crate::error::HandVizError;
use crate::hand::{Bone, HandFinger, HandPose, Handedness};
use crate::markers::MarkerSet;
use crate::math::uniform;
use crate::scene::SceneGraph;

/// Keeps one marker per tracked joint of one hand.
///
/// Call [`HandVisualizer::update`] once per frame. Markers are created the
/// first time their joint is read and only moved afterwards. Every read that
/// fails skips exactly the write that depended on it; nothing is reported.
#[derive(Clone, Debug)]
pub struct HandVisualizer<N> {
    config: VisualizerConfig,
    markers: MarkerSet<N>,
    // reused bone list
    bones: Vec<Bone>,
}

impl<N: Copy> Default for HandVisualizer<N> {
    fn default() -> Self {
        Self::new(VisualizerConfig::default())
    }
}

impl<N: Copy> HandVisualizer<N> {
    /// Build a visualizer. The config is taken as-is; see [`Self::try_new`].
    pub fn new(config: VisualizerConfig) -> Self {
        Self {
            config,
            markers: MarkerSet::new(),
            bones: Vec::new(),
        }
    }

    pub fn try_new(config: VisualizerConfig) -> Result<Self, HandVizError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &VisualizerConfig {
        &self.config
    }

    pub fn handedness(&self) -> Handedness {
        self.config.handedness
    }

    pub fn markers(&self) -> &MarkerSet<N> {
        &self.markers
    }

    /// Find this visualizer's hand in `source` and sync markers to it. Does
    /// nothing when no tracked hand of the configured handedness is found.
    pub fn update<S, G>(&mut self, source: &S, scene: &mut G)
    where
        S: DeviceSource,
        G: SceneGraph<Node = N>,
    {
        if let Some(hand) = find_tracked_hand(source, self.config.handedness) {
            self.update_hand(hand, scene);
        }
    }

    /// Sync markers to an already located hand.
    pub fn update_hand<H, G>(&mut self, hand: &H, scene: &mut G)
    where
        H: HandPose + ?Sized,
        G: SceneGraph<Node = N>,
    {
        let Self {
            config,
            markers,
            bones,
        } = self;

        if let Some(palm) = hand.root_bone() {
            let marker = markers.palm_or_insert_with(|| {
                log::debug!("handviz: creating palm marker ({:?})", config.handedness);
                instantiate_marker(config, scene)
            });
            write_bone(scene, marker, &palm);
        }

        for finger in HandFinger::ALL {
            if !hand.finger_bones(finger, bones) {
                continue;
            }
            if markers.finger(finger).is_none() {
                log::debug!(
                    "handviz: creating {} joint markers for {:?} ({:?})",
                    bones.len(),
                    finger,
                    config.handedness
                );
            }
            let joints = markers.finger_or_insert_with(finger, bones.len(), |_| {
                instantiate_marker(config, scene)
            });
            if joints.len() != bones.len() {
                log::debug!(
                    "handviz: {:?} reported {} bones, keeping {} markers",
                    finger,
                    bones.len(),
                    joints.len()
                );
            }
            for (&marker, bone) in joints.iter().zip(bones.iter()) {
                write_bone(scene, marker, bone);
            }
        }
    }
}

/// Visual-only primitive, scaled and parented under the scene root.
fn instantiate_marker<G: SceneGraph>(config: &VisualizerConfig, scene: &mut G) -> G::Node {
    let node = scene.create_primitive(config.marker_shape);
    scene.remove_collider(node);
    scene.set_local_scale(node, uniform(config.marker_scale));
    let root = scene.root();
    scene.set_parent(node, root);
    node
}

/// Write whichever components were read; the others keep their last value.
fn write_bone<G: SceneGraph>(scene: &mut G, node: G::Node, bone: &Bone) {
    if let Some(position) = bone.position {
        scene.set_world_position(node, position);
    }
    if let Some(rotation) = bone.rotation {
        scene.set_world_rotation(node, rotation);
    }
}
