// Host-side sanity checks on tuning constants and their relationships.

use folio_core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn cursor_radii_are_ordered() {
    assert!(CURSOR_CLICK_RADIUS < CURSOR_INDICATOR_SIZE * 0.5);
    assert!(CURSOR_INDICATOR_SIZE * 0.5 < CURSOR_HOVER_RADIUS);
    assert!(CURSOR_HOVER_RADIUS < CURSOR_TEXT_RADIUS);
    // the dot must lead the outline
    assert!(CURSOR_DOT_FOLLOW_SEC < CURSOR_OUTLINE_FOLLOW_SEC);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn stretch_keeps_indicator_visible() {
    // at full speed the perpendicular scale must stay positive
    assert!(1.0 + CURSOR_STRETCH_ACROSS > 0.0);
    assert!(CURSOR_STRETCH_ALONG > 0.0);
    assert!(MIN_SAMPLE_DT_SEC > 0.0 && MIN_SAMPLE_DT_SEC < FIXED_FRAME_STEP);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn surface_constants_are_positive() {
    assert!(SURFACE_SIZE > 0.0);
    assert!(SURFACE_SEGMENTS > 0);
    assert!(SURFACE_BUMP_RADIUS > 0.0);
    // the bump must be able to reach past a single grid cell
    assert!(SURFACE_BUMP_RADIUS > SURFACE_SIZE / SURFACE_SEGMENTS as f32);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn hit_spheres_enclose_their_shapes() {
    use folio_core::animator::HoverPreset;
    for preset in [HoverPreset::Cube, HoverPreset::Ring, HoverPreset::Orb] {
        assert!(preset.hit_radius() >= preset.shape().bounding_radius() * 0.99);
    }
}
