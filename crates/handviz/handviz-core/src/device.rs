//! Device enumeration contract and an owned registry implementation.

use std::ops::{BitOr, BitOrAssign};

use serde::{Deserialize, Serialize};

use crate::error::HandVizError;
use crate::hand::{HandPose, HandSnapshot, Handedness};

/// Capability bits a device advertises. Queries match devices whose bits
/// contain every bit of the filter.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceCharacteristics(pub u32);

impl DeviceCharacteristics {
    pub const NONE: Self = Self(0);
    pub const HEAD_MOUNTED: Self = Self(1 << 0);
    pub const CAMERA: Self = Self(1 << 1);
    pub const HELD_IN_HAND: Self = Self(1 << 2);
    pub const HAND_TRACKING: Self = Self(1 << 3);
    pub const EYE_TRACKING: Self = Self(1 << 4);
    pub const TRACKED_DEVICE: Self = Self(1 << 5);
    pub const CONTROLLER: Self = Self(1 << 6);
    pub const LEFT: Self = Self(1 << 8);
    pub const RIGHT: Self = Self(1 << 9);

    #[inline]
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    pub fn bits(self) -> u32 {
        self.0
    }
}

impl BitOr for DeviceCharacteristics {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for DeviceCharacteristics {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// A connected input device. Every feature lookup may be unavailable.
pub trait InputDevice {
    type Hand: HandPose;

    fn characteristics(&self) -> DeviceCharacteristics;

    /// `None` when the tracked flag cannot be read.
    fn is_tracked(&self) -> Option<bool>;

    /// `None` when the device exposes no readable hand pose this frame.
    fn hand_data(&self) -> Option<&Self::Hand>;
}

/// Enumerates connected devices.
pub trait DeviceSource {
    type Device: InputDevice;

    /// Clears `out` and pushes every device matching `filter`, in the
    /// source's enumeration order.
    fn devices_with_characteristics<'s>(
        &'s self,
        filter: DeviceCharacteristics,
        out: &mut Vec<&'s Self::Device>,
    );
}

/// Owned device state published by a backend for the current frame.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackedDevice {
    #[serde(default)]
    pub name: String,
    pub characteristics: DeviceCharacteristics,
    #[serde(default)]
    pub is_tracked: Option<bool>,
    #[serde(default)]
    pub hand: Option<HandSnapshot>,
}

impl TrackedDevice {
    /// Hand-tracking device for `handedness`, tracked, carrying `hand`.
    pub fn hand_tracker(name: impl Into<String>, handedness: Handedness, hand: HandSnapshot) -> Self {
        Self {
            name: name.into(),
            characteristics: DeviceCharacteristics::HAND_TRACKING
                | DeviceCharacteristics::TRACKED_DEVICE
                | handedness.characteristics(),
            is_tracked: Some(true),
            hand: Some(hand),
        }
    }
}

impl InputDevice for TrackedDevice {
    type Hand = HandSnapshot;

    fn characteristics(&self) -> DeviceCharacteristics {
        self.characteristics
    }

    fn is_tracked(&self) -> Option<bool> {
        self.is_tracked
    }

    fn hand_data(&self) -> Option<&HandSnapshot> {
        self.hand.as_ref()
    }
}

/// Device list for one frame; implements [`DeviceSource`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceRegistry {
    #[serde(default)]
    pub devices: Vec<TrackedDevice>,
}

impl DeviceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(s: &str) -> Result<Self, HandVizError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn push(&mut self, device: TrackedDevice) {
        self.devices.push(device);
    }

    pub fn clear(&mut self) {
        self.devices.clear();
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }
}

impl DeviceSource for DeviceRegistry {
    type Device = TrackedDevice;

    fn devices_with_characteristics<'s>(
        &'s self,
        filter: DeviceCharacteristics,
        out: &mut Vec<&'s TrackedDevice>,
    ) {
        out.clear();
        out.extend(
            self.devices
                .iter()
                .filter(|d| d.characteristics.contains(filter)),
        );
    }
}

/// Locate the hand to visualize: the first hand-tracking device of the given
/// handedness that reports tracked and exposes readable hand data.
pub fn find_tracked_hand<S: DeviceSource>(
    source: &S,
    handedness: Handedness,
) -> Option<&<S::Device as InputDevice>::Hand> {
    let mut devices = Vec::new();
    source.devices_with_characteristics(
        DeviceCharacteristics::HAND_TRACKING | handedness.characteristics(),
        &mut devices,
    );
    devices
        .into_iter()
        .filter(|d| d.is_tracked() == Some(true))
        .find_map(|d| d.hand_data())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hand::Bone;

    fn hand_at(y: f32) -> HandSnapshot {
        HandSnapshot::new().with_root(Bone::at([0.0, y, 0.0]))
    }

    #[test]
    fn contains_requires_all_bits() {
        let c = DeviceCharacteristics::HAND_TRACKING | DeviceCharacteristics::LEFT;
        assert!(c.contains(DeviceCharacteristics::LEFT));
        assert!(c.contains(DeviceCharacteristics::NONE));
        assert!(!c.contains(DeviceCharacteristics::HAND_TRACKING | DeviceCharacteristics::RIGHT));
    }

    #[test]
    fn or_assign_accumulates_bits() {
        let mut c = DeviceCharacteristics::NONE;
        c |= DeviceCharacteristics::HAND_TRACKING;
        c |= DeviceCharacteristics::TRACKED_DEVICE;
        c |= DeviceCharacteristics::RIGHT;
        assert_eq!(c.bits(), 552);
        let tracker = TrackedDevice::hand_tracker("r", Handedness::Right, hand_at(1.0));
        assert_eq!(c, tracker.characteristics);
    }

    #[test]
    fn clear_empties_registry_between_frames() {
        let mut reg = DeviceRegistry::new();
        reg.push(TrackedDevice::hand_tracker("r", Handedness::Right, hand_at(1.0)));
        assert!(find_tracked_hand(&reg, Handedness::Right).is_some());
        reg.clear();
        assert!(reg.is_empty());
        assert!(find_tracked_hand(&reg, Handedness::Right).is_none());
    }

    #[test]
    fn filter_respects_handedness() {
        let mut reg = DeviceRegistry::new();
        reg.push(TrackedDevice::hand_tracker("l", Handedness::Left, hand_at(1.0)));
        reg.push(TrackedDevice::hand_tracker("r", Handedness::Right, hand_at(2.0)));
        let mut out = Vec::new();
        reg.devices_with_characteristics(
            DeviceCharacteristics::HAND_TRACKING | DeviceCharacteristics::RIGHT,
            &mut out,
        );
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "r");
    }

    #[test]
    fn scan_skips_untracked_and_handless_devices() {
        let mut reg = DeviceRegistry::new();
        let mut untracked = TrackedDevice::hand_tracker("a", Handedness::Left, hand_at(1.0));
        untracked.is_tracked = Some(false);
        let mut unknown = TrackedDevice::hand_tracker("b", Handedness::Left, hand_at(2.0));
        unknown.is_tracked = None;
        let mut handless = TrackedDevice::hand_tracker("c", Handedness::Left, hand_at(3.0));
        handless.hand = None;
        reg.push(untracked);
        reg.push(unknown);
        reg.push(handless);
        reg.push(TrackedDevice::hand_tracker("d", Handedness::Left, hand_at(4.0)));
        reg.push(TrackedDevice::hand_tracker("e", Handedness::Left, hand_at(5.0)));

        let hand = find_tracked_hand(&reg, Handedness::Left).expect("device d qualifies");
        assert_eq!(hand.root, Some(Bone::at([0.0, 4.0, 0.0])));
    }

    #[test]
    fn no_hand_tracking_device_yields_none() {
        let mut reg = DeviceRegistry::new();
        reg.push(TrackedDevice {
            name: "controller".into(),
            characteristics: DeviceCharacteristics::CONTROLLER | DeviceCharacteristics::LEFT,
            is_tracked: Some(true),
            hand: Some(hand_at(1.0)),
        });
        assert!(find_tracked_hand(&reg, Handedness::Left).is_none());
        assert!(find_tracked_hand(&DeviceRegistry::new(), Handedness::Right).is_none());
    }

    #[test]
    fn registry_from_json() {
        let reg = DeviceRegistry::from_json(
            r#"{ "devices": [ { "name": "hand", "characteristics": 552, "is_tracked": true } ] }"#,
        )
        .unwrap();
        assert_eq!(reg.len(), 1);
        assert!(reg.devices[0]
            .characteristics
            .contains(DeviceCharacteristics::HAND_TRACKING | DeviceCharacteristics::RIGHT));
        assert!(reg.devices[0].hand.is_none());
    }
}
