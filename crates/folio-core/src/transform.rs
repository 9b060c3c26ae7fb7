//! Object transforms and the camera description fed to the renderer.
//!
//! These types avoid platform-specific APIs so both the web and native
//! frontends can build model/view/projection matrices from them.

use glam::{EulerRot, Mat4, Quat, Vec3};

/// Position, XYZ Euler rotation (radians) and per-axis scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = Vec3::splat(scale);
        self
    }

    pub fn matrix(&self) -> Mat4 {
        let q = Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z);
        Mat4::from_scale_rotation_translation(self.scale, q, self.position)
    }
}

/// Wrap an angle into [0, 2π).
#[inline]
pub fn wrap_angle(a: f32) -> f32 {
    a.rem_euclid(std::f32::consts::TAU)
}

/// `t * freq` reduced into [0, 2π) before narrowing to f32, so idle motion
/// stays smooth however long the clock has been running.
#[inline]
pub fn clock_phase(t: f64, freq: f32) -> f32 {
    (t * f64::from(freq)).rem_euclid(std::f64::consts::TAU) as f32
}

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn looking_at_origin(eye: Vec3, aspect: f32, fovy_radians: f32) -> Self {
        Self {
            eye,
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians,
            znear: 0.1,
            zfar: 100.0,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect.max(1e-3), self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_phase_keeps_frame_resolution_after_days() {
        let t = 6.5 * 86_400.0;
        let a = clock_phase(t, 1.0);
        let b = clock_phase(t + 1.0 / 60.0, 1.0);
        assert!((0.0..std::f32::consts::TAU).contains(&a));
        assert!((wrap_angle(b - a) - 1.0 / 60.0).abs() < 1e-5);
    }
}
