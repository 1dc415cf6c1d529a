//! Model matrix composition.
//!
//! A [`TransformSpec`] carries scale, per-axis rotation in degrees and a
//! position. [`TransformSpec::compose`] combines them as
//!
//! ```text
//! model = T(position) * Rz(z) * Ry(y) * Rx(x) * S(scale)
//! ```
//!
//! so a vertex is scaled in object space first, then rotated about X, then Y,
//! then Z, and finally moved into place. Callers picking per-axis angles have
//! to reason in that order.

use cgmath::{Deg, Matrix4, Vector3};

/// Per-object placement, consumed once per draw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformSpec {
    pub scale: [f32; 3],
    pub rotation_x: f32,
    pub rotation_y: f32,
    pub rotation_z: f32,
    pub position: [f32; 3],
}

impl TransformSpec {
    /// Create a new transform. `rotation` holds the X, Y and Z angles in degrees.
    pub const fn new(scale: [f32; 3], rotation: [f32; 3], position: [f32; 3]) -> Self {
        Self {
            scale,
            rotation_x: rotation[0],
            rotation_y: rotation[1],
            rotation_z: rotation[2],
            position,
        }
    }

    /// Identity transformation (no move, rotate, or scale).
    pub const fn identity() -> Self {
        Self::new([1.0; 3], [0.0; 3], [0.0; 3])
    }

    pub fn compose(&self) -> Matrix4<f32> {
        compose(self)
    }
}

impl Default for TransformSpec {
    fn default() -> Self {
        Self::identity()
    }
}

/// Build the model matrix for `spec`.
pub fn compose(spec: &TransformSpec) -> Matrix4<f32> {
    let [sx, sy, sz] = spec.scale;
    let scale = Matrix4::from_nonuniform_scale(sx, sy, sz);
    let rotation_x = Matrix4::from_angle_x(Deg(spec.rotation_x));
    let rotation_y = Matrix4::from_angle_y(Deg(spec.rotation_y));
    let rotation_z = Matrix4::from_angle_z(Deg(spec.rotation_z));
    let translation = Matrix4::from_translation(Vector3::from(spec.position));

    translation * rotation_z * rotation_y * rotation_x * scale
}
