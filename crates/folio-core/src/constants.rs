use glam::Vec3;

// Shared animation and interaction tuning constants used by the web and native frontends.

// Clock
pub const FIXED_FRAME_STEP: f32 = 1.0 / 60.0; // seconds per frame when stepping deterministically

// Camera
pub const CAMERA_Z: f32 = 5.0; // eye distance from the look-at target
pub const CAMERA_FOV_DEG: f32 = 60.0;
pub const CAMERA_SENSITIVITY: f32 = 0.1; // pointer (-1..1) to eye offset
pub const CAMERA_FOLLOW_SEC: f32 = 1.0; // re-triggered every frame
pub const LOOK_AT: Vec3 = Vec3::ZERO;

// Per-frame rotation increments (radians per frame, not per second)
pub const SHAPE_SPIN_PER_FRAME: f32 = 0.01;
pub const FLOAT_SPIN_X_PER_FRAME: f32 = 0.01; // scaled by element speed
pub const FLOAT_SPIN_Y_PER_FRAME: f32 = 0.005; // scaled by element speed
pub const SURFACE_SPIN_PER_FRAME: f32 = 0.0005;

// Floating elements
pub const FLOAT_PHASE_STEP: f32 = 0.01; // phase accumulator advance per frame
pub const FLOAT_PHASE_SEED_MAX: f32 = 100.0; // initial phase drawn from [0, max)
pub const FLOAT_PHASE_PERIOD: f32 = 10.0 * std::f32::consts::PI; // common period of the three drift terms
pub const FLOAT_Y_AMPLITUDE: f32 = 0.2;
pub const FLOAT_XZ_AMPLITUDE: f32 = 0.05;
pub const FLOAT_X_FREQ: f32 = 0.6;
pub const FLOAT_Z_FREQ: f32 = 0.8;

// Hover shapes
pub const CUBE_TILT_FREQ: f32 = 0.3;
pub const RING_TILT_FREQ: f32 = 0.4;
pub const IDLE_TILT_AMPLITUDE: f32 = 0.2;
pub const RING_TILT_OFFSET: f32 = 0.2;
pub const ORB_BOB_AMPLITUDE: f32 = 0.2;
pub const CUBE_TURN_SEC: f32 = 1.5;
pub const CUBE_LIFT: f32 = 0.5;
pub const CUBE_LIFT_SEC: f32 = 0.5; // per leg
pub const RING_TURN_SEC: f32 = 1.0;
pub const RING_BACK_OVERSHOOT: f32 = 1.7;
pub const ORB_SWELL_SCALE: f32 = 1.2;
pub const ORB_SWELL_SEC: f32 = 0.3; // per leg
pub const CUBE_HIT_RADIUS: f32 = 1.3; // encloses a 1.5 unit cube
pub const RING_HIT_RADIUS: f32 = 1.5;
pub const ORB_HIT_RADIUS: f32 = 1.0;

// Wavy surface
pub const SURFACE_SIZE: f32 = 10.0;
pub const SURFACE_SEGMENTS: u32 = 20;
pub const SURFACE_WAVE_FREQ: f32 = 2.0; // k1 and k2
pub const SURFACE_WAVE_AMPLITUDE: f32 = 0.3; // A1 and A2
pub const SURFACE_NOISE_AMPLITUDE: f32 = 0.08; // A3
pub const SURFACE_NOISE_SCALE: f32 = 0.35; // spatial frequency of the noise term
pub const SURFACE_BUMP_AMPLITUDE: f32 = 0.6; // A4
pub const SURFACE_BUMP_RADIUS: f32 = 2.5; // maxDistance in surface units

// Cursor
pub const CURSOR_INDICATOR_SIZE: f32 = 32.0; // outline diameter in CSS px
pub const CURSOR_DOT_SIZE: f32 = 5.0;
pub const CURSOR_HOVER_RADIUS: f32 = 20.0;
pub const CURSOR_TEXT_RADIUS: f32 = 96.0;
pub const CURSOR_CLICK_RADIUS: f32 = 12.0;
pub const CURSOR_DOT_FOLLOW_SEC: f32 = 0.15;
pub const CURSOR_OUTLINE_FOLLOW_SEC: f32 = 0.4;
pub const CURSOR_RADIUS_SEC: f32 = 0.3;
pub const CURSOR_DOT_SCALE_SEC: f32 = 0.2;
pub const CURSOR_BACK_OVERSHOOT: f32 = 1.7;
pub const CURSOR_SPEED_NORMALIZER: f32 = 4000.0; // px/s mapped to speed 1.0
pub const CURSOR_STRETCH_ALONG: f32 = 0.5; // k1
pub const CURSOR_STRETCH_ACROSS: f32 = -0.3; // k2
pub const MIN_SAMPLE_DT_SEC: f32 = 1.0e-4; // below this a move is treated as same-tick
pub const SPEED_IDLE_RESET_SEC: f32 = 0.1; // stretch relaxes after this long without movement

// Scroll reveal
pub const REVEAL_START_OFFSET_PX: f32 = 100.0; // trigger at viewport bottom minus this
pub const REVEAL_FADE_SEC: f32 = 1.0;
pub const REVEAL_FADE_SHIFT_PX: f32 = 50.0;
pub const REVEAL_STAGGER_SEC: f32 = 0.8;
pub const REVEAL_STAGGER_SHIFT_PX: f32 = 20.0;
pub const REVEAL_STAGGER_STEP_SEC: f32 = 0.1;
pub const PARALLAX_SHIFT_PX: f32 = -50.0;

// Default palette
pub const COLOR_VIOLET: [f32; 3] = [0.545, 0.361, 0.965]; // #8B5CF6
pub const COLOR_ORANGE: [f32; 3] = [0.976, 0.451, 0.086]; // #F97316
pub const COLOR_SKY: [f32; 3] = [0.055, 0.647, 0.914]; // #0EA5E9
pub const COLOR_PINK: [f32; 3] = [0.925, 0.282, 0.600]; // #EC4899
