// Host-side tests for pointer velocity and the cursor controller.

use folio_core::cursor::{
    CursorController, CursorParams, CursorVariant, ElementHandle, InteractiveMeta,
};
use folio_core::VelocityTracker;
use glam::Vec2;

const NORMALIZER: f32 = 4000.0;

#[test]
fn speed_is_independent_of_event_splitting() {
    let mut whole = VelocityTracker::new(NORMALIZER);
    whole.sample(Vec2::ZERO, 0.0);
    whole.sample(Vec2::new(100.0, 0.0), 0.05);

    let mut split = VelocityTracker::new(NORMALIZER);
    split.sample(Vec2::ZERO, 0.0);
    split.sample(Vec2::new(50.0, 0.0), 0.025);
    split.sample(Vec2::new(100.0, 0.0), 0.05);

    assert!((whole.speed() - 0.5).abs() < 1e-5);
    assert!((whole.speed() - split.speed()).abs() < 1e-5);
    assert_eq!(whole.heading(), split.heading());
}

#[test]
fn speed_is_clamped_to_one() {
    let mut v = VelocityTracker::new(NORMALIZER);
    v.sample(Vec2::ZERO, 0.0);
    v.sample(Vec2::new(1000.0, 0.0), 0.01);
    assert_eq!(v.speed(), 1.0);
}

#[test]
fn same_tick_move_keeps_previous_estimate() {
    let mut v = VelocityTracker::new(NORMALIZER);
    v.sample(Vec2::ZERO, 0.0);
    v.sample(Vec2::new(30.0, 40.0), 0.05);
    let (speed, heading) = (v.speed(), v.heading());
    assert!(!v.sample(Vec2::new(500.0, -500.0), 0.05));
    assert_eq!(v.speed(), speed);
    assert_eq!(v.heading(), heading);
    assert!(v.speed().is_finite() && v.heading().is_finite());
}

#[test]
fn labeled_element_ends_in_text_variant() {
    let params = CursorParams {
        indicator_size: 32.0,
        ..CursorParams::default()
    };
    let mut cursor = CursorController::new(params).unwrap();
    let card = ElementHandle(7);
    cursor.register_interactive(card, InteractiveMeta::labeled("View Project"));

    cursor.pointer_move(Vec2::ZERO, 0.0);
    cursor.pointer_move(Vec2::new(100.0, 0.0), 0.05);
    cursor.pointer_enter(card, 0.05);

    let frame = cursor.frame(1.05);
    assert_eq!(frame.variant, CursorVariant::Text);
    assert_eq!(frame.variant.as_str(), "text");
    assert_eq!(frame.label, Some("View Project"));
    assert_eq!(frame.radius, 96.0);
    assert_eq!(frame.outline, Vec2::new(100.0, 0.0));
}

#[test]
fn stretch_follows_speed_and_relaxes() {
    let mut cursor = CursorController::new(CursorParams::default()).unwrap();
    cursor.pointer_move(Vec2::ZERO, 0.0);
    cursor.pointer_move(Vec2::new(100.0, 0.0), 0.05);
    let f = cursor.frame(0.06);
    let p = CursorParams::default();
    assert!((f.stretch_along - (1.0 + 0.5 * p.stretch_along)).abs() < 1e-5);
    assert!((f.stretch_across - (1.0 + 0.5 * p.stretch_across)).abs() < 1e-5);
    assert_eq!(f.heading, 0.0);
    let f = cursor.frame(2.0);
    assert_eq!(f.stretch_along, 1.0);
    assert_eq!(f.stretch_across, 1.0);
}

#[test]
fn default_radius_is_restored_after_leave() {
    let mut cursor = CursorController::new(CursorParams::default()).unwrap();
    let link = ElementHandle(1);
    cursor.register_interactive(link, InteractiveMeta::plain());
    cursor.pointer_move(Vec2::new(10.0, 10.0), 0.0);
    cursor.pointer_enter(link, 0.1);
    assert_eq!(cursor.frame(1.0).radius, 20.0);
    cursor.pointer_leave(link, 1.0);
    assert_eq!(cursor.frame(2.0).radius, 16.0);
    assert_eq!(cursor.frame(2.0).label, None);
}
