use crate::constants::FIXED_FRAME_STEP;

/// What every frame callback sees for the current display refresh.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameInfo {
    /// Seconds since the clock started (or was last reset). Kept in f64;
    /// formulas narrow to f32 only after reducing it to a bounded phase.
    pub elapsed: f64,
    /// Seconds since the previous frame.
    pub delta: f32,
    /// Number of frames advanced so far, starting at 1 for the first frame.
    pub index: u64,
}

/// Monotonic scene clock, advanced once per rendered frame by the host loop.
#[derive(Clone, Debug, Default)]
pub struct FrameClock {
    elapsed: f64,
    frame: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by `dt` seconds. Negative or non-finite deltas count as zero so
    /// the clock never runs backwards.
    pub fn advance(&mut self, dt: f32) -> FrameInfo {
        let delta = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.elapsed += f64::from(delta);
        self.frame += 1;
        self.info(delta)
    }

    pub fn advance_fixed(&mut self) -> FrameInfo {
        self.advance(FIXED_FRAME_STEP)
    }

    /// Rewind to zero. Only used on a full scene reset.
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
        self.frame = 0;
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    fn info(&self, delta: f32) -> FrameInfo {
        FrameInfo {
            elapsed: self.elapsed,
            delta,
            index: self.frame,
        }
    }
}
