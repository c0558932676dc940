//! Hand pose data model: handedness, finger identifiers, bones and the
//! [`HandPose`] read contract.

use std::str::FromStr;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::device::DeviceCharacteristics;
use crate::error::HandVizError;
use crate::math::{Quat, Vec3};

/// Which physical hand a visualizer follows.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Handedness {
    Left,
    #[default]
    Right,
}

impl Handedness {
    /// Derive handedness from the owning object's name: any name containing
    /// `"Left"` follows the left hand, everything else the right hand.
    pub fn from_instance_name(name: &str) -> Self {
        if name.contains("Left") {
            Handedness::Left
        } else {
            Handedness::Right
        }
    }

    /// Device filter bit for this hand.
    pub fn characteristics(self) -> DeviceCharacteristics {
        match self {
            Handedness::Left => DeviceCharacteristics::LEFT,
            Handedness::Right => DeviceCharacteristics::RIGHT,
        }
    }
}

impl FromStr for Handedness {
    type Err = HandVizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Handedness::Left),
            "right" => Ok(Handedness::Right),
            _ => Err(HandVizError::UnknownHandedness(s.to_string())),
        }
    }
}

/// Finger identifiers in their fixed enumeration order.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandFinger {
    Thumb,
    Index,
    Middle,
    Ring,
    Pinky,
}

impl HandFinger {
    pub const COUNT: usize = 5;

    pub const ALL: [HandFinger; HandFinger::COUNT] = [
        HandFinger::Thumb,
        HandFinger::Index,
        HandFinger::Middle,
        HandFinger::Ring,
        HandFinger::Pinky,
    ];

    /// Dense index in `0..COUNT`, matching the position in [`HandFinger::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// One bone pose. Position and rotation are read independently and either may
/// be missing for a given frame.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Bone {
    #[serde(default)]
    pub position: Option<Vec3>,
    #[serde(default)]
    pub rotation: Option<Quat>,
}

impl Bone {
    pub fn new(position: Option<Vec3>, rotation: Option<Quat>) -> Self {
        Self { position, rotation }
    }

    /// Bone with a position and no rotation.
    pub fn at(position: Vec3) -> Self {
        Self {
            position: Some(position),
            rotation: None,
        }
    }

    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = Some(rotation);
        self
    }

    /// True when neither component could be read.
    pub fn is_empty(&self) -> bool {
        self.position.is_none() && self.rotation.is_none()
    }
}

/// Read access to the hand tracked this frame.
///
/// Implementations are only expected to be valid for the current frame.
pub trait HandPose {
    /// Root (palm) bone, or `None` when unavailable this frame.
    fn root_bone(&self) -> Option<Bone>;

    /// Clears `out` and fills it with the finger's bones in order.
    /// Returns `false` when the finger cannot be read this frame.
    fn finger_bones(&self, finger: HandFinger, out: &mut Vec<Bone>) -> bool;
}

/// Owned hand pose, as published by a backend or loaded from a recording.
/// A finger missing from `fingers` is unavailable for the frame.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HandSnapshot {
    #[serde(default)]
    pub root: Option<Bone>,
    #[serde(default)]
    pub fingers: HashMap<HandFinger, Vec<Bone>>,
}

impl HandSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_root(mut self, root: Bone) -> Self {
        self.root = Some(root);
        self
    }

    pub fn with_finger(mut self, finger: HandFinger, bones: Vec<Bone>) -> Self {
        self.fingers.insert(finger, bones);
        self
    }
}

impl HandPose for HandSnapshot {
    fn root_bone(&self) -> Option<Bone> {
        self.root
    }

    fn finger_bones(&self, finger: HandFinger, out: &mut Vec<Bone>) -> bool {
        out.clear();
        match self.fingers.get(&finger) {
            Some(bones) => {
                out.extend_from_slice(bones);
                true
            }
            None => false,
        }
    }
}
