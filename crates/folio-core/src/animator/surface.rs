//! Procedural wavy surface.
//!
//! Each vertex keeps its rest position from the flat grid; the displaced Z is
//! recomputed from scratch every frame from rest XY, time and pointer, so the
//! field never accumulates anything between frames.

use super::{FrameInputs, TransformProvider};
use crate::clock::FrameInfo;
use crate::constants::*;
use crate::error::{finite, positive, ConfigError};
use crate::mesh::{plane_grid, MeshData};
use crate::transform::{clock_phase, wrap_angle, Transform};
use glam::{Vec2, Vec3};
use noise::{NoiseFn, Perlin};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceParams {
    pub size: f32,
    pub segments: u32,
    /// Multiplier from clock seconds to wave time.
    pub wave_speed: f32,
    pub wave_freq: f32,
    pub wave_amplitude: f32,
    pub noise_amplitude: f32,
    pub noise_scale: f32,
    pub bump_amplitude: f32,
    /// Distance at which the pointer bump fades to zero.
    pub bump_radius: f32,
}

impl Default for SurfaceParams {
    fn default() -> Self {
        Self {
            size: SURFACE_SIZE,
            segments: SURFACE_SEGMENTS,
            wave_speed: 1.0,
            wave_freq: SURFACE_WAVE_FREQ,
            wave_amplitude: SURFACE_WAVE_AMPLITUDE,
            noise_amplitude: SURFACE_NOISE_AMPLITUDE,
            noise_scale: SURFACE_NOISE_SCALE,
            bump_amplitude: SURFACE_BUMP_AMPLITUDE,
            bump_radius: SURFACE_BUMP_RADIUS,
        }
    }
}

impl SurfaceParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.segments == 0 {
            return Err(ConfigError::NoSegments);
        }
        positive("surface size", self.size)?;
        positive("bump radius", self.bump_radius)?;
        finite("wave speed", self.wave_speed)?;
        finite("wave frequency", self.wave_freq)?;
        finite("wave amplitude", self.wave_amplitude)?;
        finite("noise amplitude", self.noise_amplitude)?;
        finite("noise scale", self.noise_scale)?;
        finite("bump amplitude", self.bump_amplitude)
    }

    /// Factor from normalized pointer (-1..1) to surface units.
    pub fn pointer_scale(&self) -> f32 {
        self.size * 0.5
    }
}

/// Radially decaying bump: `max(0, 1 - d / max_distance) * amplitude`.
#[inline]
pub fn pointer_bump(rest: Vec2, pointer: Vec2, max_distance: f32, amplitude: f32) -> f32 {
    let d = rest.distance(pointer);
    (1.0 - d / max_distance).max(0.0) * amplitude
}

/// Z displacement of one vertex at clock time `elapsed`.
///
/// `pointer` is the normalized pointer; it is scaled into surface units here.
pub fn displacement(
    params: &SurfaceParams,
    noise: &Perlin,
    rest: Vec2,
    elapsed: f64,
    pointer: Option<Vec2>,
) -> f32 {
    let t = clock_phase(elapsed, params.wave_speed);
    let k = params.wave_freq;
    let waves = (rest.x * k + t).sin() * params.wave_amplitude
        + (rest.y * k + t).cos() * params.wave_amplitude;
    let s = params.noise_scale as f64;
    let z = elapsed * f64::from(params.wave_speed) * s;
    let n = noise.get([rest.x as f64 * s, rest.y as f64 * s, z]) as f32;
    let bump = pointer.map_or(0.0, |p| {
        pointer_bump(
            rest,
            p * params.pointer_scale(),
            params.bump_radius,
            params.bump_amplitude,
        )
    });
    waves + n * params.noise_amplitude + bump
}

pub struct WavySurface {
    params: SurfaceParams,
    noise: Perlin,
    rest: Vec<Vec3>,
    mesh: MeshData,
    spin: f32,
}

impl WavySurface {
    pub fn new(params: SurfaceParams, seed: u32) -> Result<Self, ConfigError> {
        params.validate()?;
        let mesh = plane_grid(params.size, params.segments);
        log::debug!(
            "[surface] {}x{} grid, {} vertices",
            params.segments,
            params.segments,
            mesh.vertex_count()
        );
        Ok(Self {
            params,
            noise: Perlin::new(seed),
            rest: mesh.positions.clone(),
            mesh,
            spin: 0.0,
        })
    }

    pub fn params(&self) -> &SurfaceParams {
        &self.params
    }

    pub fn mesh(&self) -> &MeshData {
        &self.mesh
    }

    pub fn rest_positions(&self) -> &[Vec3] {
        &self.rest
    }

    /// Recompute every vertex for the given time and pointer, then the normals.
    pub fn update(&mut self, elapsed: f64, pointer: Option<Vec2>) {
        for (pos, rest) in self.mesh.positions.iter_mut().zip(&self.rest) {
            let z = displacement(&self.params, &self.noise, rest.truncate(), elapsed, pointer);
            *pos = Vec3::new(rest.x, rest.y, z);
        }
        self.mesh.compute_vertex_normals();
    }

    /// Displacement of a single rest point, without touching the mesh.
    pub fn sample(&self, rest: Vec2, elapsed: f64, pointer: Option<Vec2>) -> f32 {
        displacement(&self.params, &self.noise, rest, elapsed, pointer)
    }
}

impl TransformProvider for WavySurface {
    fn advance(&mut self, frame: &FrameInfo, inputs: &FrameInputs, target: &mut Transform) {
        self.update(frame.elapsed, inputs.pointer);
        self.spin = wrap_angle(self.spin + SURFACE_SPIN_PER_FRAME);
        target.rotation.z = self.spin;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bump_peaks_at_pointer_and_vanishes_at_radius() {
        let p = Vec2::new(1.0, -0.5);
        assert_eq!(pointer_bump(p, p, 2.5, 0.6), 0.6);
        assert_eq!(pointer_bump(p + Vec2::new(2.5, 0.0), p, 2.5, 0.6), 0.0);
        assert_eq!(pointer_bump(p + Vec2::new(9.0, 9.0), p, 2.5, 0.6), 0.0);
    }

    #[test]
    fn zero_segments_rejected() {
        let params = SurfaceParams {
            segments: 0,
            ..SurfaceParams::default()
        };
        assert!(matches!(
            WavySurface::new(params, 0),
            Err(ConfigError::NoSegments)
        ));
    }

    #[test]
    fn update_keeps_rest_xy() {
        let mut s = WavySurface::new(SurfaceParams::default(), 3).unwrap();
        s.update(1.25, Some(Vec2::new(0.2, 0.3)));
        for (p, r) in s.mesh().positions.iter().zip(s.rest_positions()) {
            assert_eq!(p.truncate(), r.truncate());
            assert!(p.z.is_finite());
        }
        assert!(s.mesh().normals.iter().all(|n| (n.length() - 1.0).abs() < 1e-4));
    }
}
