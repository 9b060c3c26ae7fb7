use crate::transform::Camera;
use glam::{Vec2, Vec3, Vec4};

/// Distance along `ray_dir` (unit length) to the first hit on the sphere, if any.
#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

/// Compute a world-space ray from a normalized pointer position (-1..1, +Y up).
///
/// Returns `(ray_origin, ray_direction)`; the origin is the camera eye.
pub fn screen_to_world_ray(ndc: Vec2, camera: &Camera) -> (Vec3, Vec3) {
    let inv = camera.view_projection().inverse();
    let p_far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
    let p1: Vec3 = p_far.truncate() / p_far.w;
    let ro = camera.eye;
    let rd = (p1 - ro).normalize_or_zero();
    (ro, rd)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centre_ray_hits_sphere_at_origin() {
        let cam = Camera::looking_at_origin(Vec3::new(0.0, 0.0, 5.0), 1.0, 60f32.to_radians());
        let (ro, rd) = screen_to_world_ray(Vec2::ZERO, &cam);
        assert!((rd - Vec3::NEG_Z).length() < 1e-4);
        let t = ray_sphere(ro, rd, Vec3::ZERO, 1.0).unwrap_or(f32::NAN);
        assert!((t - 4.0).abs() < 1e-3);
    }

    #[test]
    fn miss_and_behind_return_none() {
        assert!(ray_sphere(Vec3::ZERO, Vec3::X, Vec3::new(0.0, 5.0, 0.0), 1.0).is_none());
        assert!(ray_sphere(Vec3::ZERO, Vec3::X, Vec3::new(-5.0, 0.0, 0.0), 1.0).is_none());
    }
}
