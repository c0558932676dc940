//! Lazily populated marker storage.
//!
//! Slots go from empty to filled exactly once; filled slots are never
//! replaced, removed or resized.

use crate::hand::HandFinger;

/// Position of a marker within the hand.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum MarkerSlot {
    Palm,
    Joint { finger: HandFinger, bone: usize },
}

#[derive(Clone, Debug)]
pub struct MarkerSet<N> {
    palm: Option<N>,
    fingers: [Option<Box<[N]>>; HandFinger::COUNT],
}

impl<N> Default for MarkerSet<N> {
    fn default() -> Self {
        Self {
            palm: None,
            fingers: [None, None, None, None, None],
        }
    }
}

impl<N: Copy> MarkerSet<N> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn palm(&self) -> Option<N> {
        self.palm
    }

    pub fn finger(&self, finger: HandFinger) -> Option<&[N]> {
        self.fingers[finger.index()].as_deref()
    }

    /// Palm marker, created with `make` if the slot is still empty.
    pub fn palm_or_insert_with(&mut self, make: impl FnOnce() -> N) -> N {
        *self.palm.get_or_insert_with(make)
    }

    /// Joint markers for `finger`, allocated with `make(bone_index)` for
    /// `bone_count` bones on first access. Later calls return the existing
    /// array whatever `bone_count` is.
    pub fn finger_or_insert_with(
        &mut self,
        finger: HandFinger,
        bone_count: usize,
        mut make: impl FnMut(usize) -> N,
    ) -> &[N] {
        self.fingers[finger.index()].get_or_insert_with(|| (0..bone_count).map(&mut make).collect())
    }

    /// Total number of markers created so far.
    pub fn len(&self) -> usize {
        usize::from(self.palm.is_some())
            + self
                .fingers
                .iter()
                .flatten()
                .map(|joints| joints.len())
                .sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every created marker with its slot: palm first, then fingers in
    /// enumeration order and bones in order.
    pub fn iter(&self) -> impl Iterator<Item = (MarkerSlot, N)> + '_ {
        let palm = self.palm.map(|n| (MarkerSlot::Palm, n));
        let joints = HandFinger::ALL.into_iter().flat_map(move |finger| {
            self.finger(finger)
                .unwrap_or(&[])
                .iter()
                .enumerate()
                .map(move |(bone, &n)| (MarkerSlot::Joint { finger, bone }, n))
        });
        palm.into_iter().chain(joints)
    }
}
