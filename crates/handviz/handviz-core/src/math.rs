//! Plain array math types shared with adapters.
//!
//! Quaternions are stored as `[x, y, z, w]`.

pub type Vec3 = [f32; 3];
pub type Quat = [f32; 4];

pub const VEC3_ZERO: Vec3 = [0.0, 0.0, 0.0];
pub const VEC3_ONE: Vec3 = [1.0, 1.0, 1.0];
pub const QUAT_IDENTITY: Quat = [0.0, 0.0, 0.0, 1.0];

#[inline]
pub fn uniform(s: f32) -> Vec3 {
    [s, s, s]
}
