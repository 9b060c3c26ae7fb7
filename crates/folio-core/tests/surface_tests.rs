// Host-side tests for the procedural surface: purity of the displacement
// field and the shape of the pointer bump.

use folio_core::animator::{displacement, pointer_bump, SurfaceParams, WavySurface};
use folio_core::clock::FrameInfo;
use folio_core::{FrameInputs, Transform, TransformProvider};
use glam::Vec2;
use noise::Perlin;

#[test]
fn displacement_has_no_hidden_accumulation() {
    let pointer = Some(Vec2::new(0.3, -0.4));
    let mut stepped = WavySurface::new(SurfaceParams::default(), 11).unwrap();
    for t in [0.1, 0.7, 2.3, 5.0] {
        stepped.update(t, pointer);
    }
    let mut direct = WavySurface::new(SurfaceParams::default(), 11).unwrap();
    direct.update(5.0, pointer);
    assert_eq!(stepped.mesh().positions, direct.mesh().positions);
    assert_eq!(stepped.mesh().normals, direct.mesh().normals);
}

#[test]
fn surface_frames_match_direct_evaluation() {
    let mut surface = WavySurface::new(SurfaceParams::default(), 5).unwrap();
    let mut transform = Transform::default();
    let inputs = FrameInputs {
        pointer: Some(Vec2::new(-0.5, 0.25)),
    };
    for i in 1..=90u64 {
        let frame = FrameInfo {
            elapsed: i as f64 / 60.0,
            delta: 1.0 / 60.0,
            index: i,
        };
        surface.advance(&frame, &inputs, &mut transform);
    }
    let t = 90.0 / 60.0;
    for rest in surface.rest_positions().iter().step_by(37) {
        let z = surface.sample(rest.truncate(), t, inputs.pointer);
        let shown = surface
            .mesh()
            .positions
            .iter()
            .find(|p| p.truncate() == rest.truncate())
            .map(|p| p.z);
        assert_eq!(shown, Some(z));
    }
    // 90 frames of the constant per-frame spin
    assert!((transform.rotation.z - 90.0 * 0.0005).abs() < 1e-5);
}

#[test]
fn bump_is_max_at_pointer_and_zero_beyond_radius() {
    let params = SurfaceParams::default();
    let pointer = Vec2::new(0.4, 0.2);
    let at = pointer * params.pointer_scale();
    assert_eq!(
        pointer_bump(at, at, params.bump_radius, params.bump_amplitude),
        params.bump_amplitude
    );
    for d in [params.bump_radius, params.bump_radius * 1.5, 100.0] {
        let p = at + Vec2::new(0.0, d);
        assert_eq!(
            pointer_bump(p, at, params.bump_radius, params.bump_amplitude),
            0.0
        );
    }
}

#[test]
fn pointer_only_changes_points_within_reach() {
    let params = SurfaceParams::default();
    let noise = Perlin::new(3);
    let pointer = Vec2::new(0.5, 0.5);
    let near = pointer * params.pointer_scale();
    let far = Vec2::new(-4.0, -4.0);
    let t = 1.7;
    let with = |p| displacement(&params, &noise, p, t, Some(pointer));
    let without = |p| displacement(&params, &noise, p, t, None);
    assert!((with(near) - without(near) - params.bump_amplitude).abs() < 1e-5);
    assert_eq!(with(far), without(far));
}
