//! handviz core (engine-agnostic)
//!
//! Reads hand-tracking poses from a [`DeviceSource`] every frame and keeps a
//! set of marker primitives in a [`SceneGraph`] aligned with the palm and the
//! finger joints of one hand. Adapters (Bevy, custom hosts) implement the two
//! traits and call [`HandVisualizer::update`] once per tick.

pub mod config;
pub mod device;
pub mod error;
pub mod hand;
pub mod markers;
pub mod math;
pub mod scene;
pub mod visualizer;

// Re-exports for consumers (adapters)
pub use config::{VisualizerConfig, DEFAULT_MARKER_SCALE};
pub use device::{
    find_tracked_hand, DeviceCharacteristics, DeviceRegistry, DeviceSource, InputDevice,
    TrackedDevice,
};
pub use error::HandVizError;
pub use hand::{Bone, HandFinger, HandPose, HandSnapshot, Handedness};
pub use markers::{MarkerSet, MarkerSlot};
pub use math::{Quat, Vec3, QUAT_IDENTITY, VEC3_ONE, VEC3_ZERO};
pub use scene::{MarkerArena, NodeId, PrimitiveShape, SceneGraph, SceneNode};
pub use visualizer::HandVisualizer;
