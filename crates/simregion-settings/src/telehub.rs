//! Telehub state: the region's designated arrival point and its spawn points.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::SettingsError;

/// What the telehub rotation reads as while the region has no telehub.
///
/// Older simulators returned a degenerate quaternion from this path: all four
/// stored components were written into X one after another, leaving
/// `(w, 0, 0, 0)`. `Legacy` reproduces that value for parity with data and
/// tools that depend on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RotationFallback {
    /// Return the stored rotation unchanged.
    #[default]
    Stored,
    /// Return `(w, 0, 0, 0)` built from the stored W component.
    Legacy,
}

/// Raw telehub storage. Gating on `enabled` happens in the record accessors;
/// this struct always holds what was last written.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct TelehubState {
    pub enabled: bool,
    pub object: Uuid,
    pub name: String,
    pub pos_x: f32,
    pub pos_y: f32,
    pub pos_z: f32,
    pub rot_x: f32,
    pub rot_y: f32,
    pub rot_z: f32,
    pub rot_w: f32,
    /// Offsets relative to the telehub, not region coordinates.
    pub spawn_points: Vec<Vec3>,
}

impl TelehubState {
    pub fn position(&self) -> Vec3 {
        Vec3::new(self.pos_x, self.pos_y, self.pos_z)
    }

    pub fn set_position(&mut self, pos: Vec3) {
        self.pos_x = pos.x;
        self.pos_y = pos.y;
        self.pos_z = pos.z;
    }

    pub fn rotation(&self) -> Quat {
        Quat::from_xyzw(self.rot_x, self.rot_y, self.rot_z, self.rot_w)
    }

    pub fn set_rotation(&mut self, rot: Quat) {
        self.rot_x = rot.x;
        self.rot_y = rot.y;
        self.rot_z = rot.z;
        self.rot_w = rot.w;
    }

    /// Rotation reported while the telehub is disabled.
    pub fn fallback_rotation(&self, fallback: RotationFallback) -> Quat {
        match fallback {
            RotationFallback::Stored => self.rotation(),
            RotationFallback::Legacy => Quat::from_xyzw(self.rot_w, 0.0, 0.0, 0.0),
        }
    }

    pub fn remove_spawn_point(&mut self, index: usize) -> Result<Vec3, SettingsError> {
        let len = self.spawn_points.len();
        if index >= len {
            return Err(SettingsError::IndexOutOfRange { index, len });
        }
        Ok(self.spawn_points.remove(index))
    }
}
