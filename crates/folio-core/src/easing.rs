/// Easing curves used by tweens.
///
/// The `PowerN` names follow the usual animation-library convention where
/// `Power1` is quadratic, `Power2` cubic, `Power3` quartic and `Power4`
/// quintic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ease {
    Linear,
    Power1Out,
    Power2Out,
    Power2InOut,
    Power3Out,
    Power4Out,
    /// Overshoots past the target before settling; the value is the overshoot amount.
    BackOut(f32),
    /// CSS-style cubic bezier with control points (x1, y1) and (x2, y2).
    CubicBezier(f32, f32, f32, f32),
}

impl Ease {
    /// Apply the ease to a progress value; input is clamped to 0..=1.
    pub fn apply(&self, t: f32) -> f32 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match *self {
            Ease::Linear => t,
            Ease::Power1Out => 1.0 - (1.0 - t).powi(2),
            Ease::Power2Out => 1.0 - (1.0 - t).powi(3),
            Ease::Power2InOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Ease::Power3Out => 1.0 - (1.0 - t).powi(4),
            Ease::Power4Out => 1.0 - (1.0 - t).powi(5),
            Ease::BackOut(s) => {
                let u = t - 1.0;
                1.0 + (s + 1.0) * u * u * u + s * u * u
            }
            Ease::CubicBezier(x1, y1, x2, y2) => cubic_bezier(x1, y1, x2, y2, t),
        }
    }
}

#[inline]
fn bezier_axis(a1: f32, a2: f32, s: f32) -> f32 {
    // B(s) with P0 = 0 and P3 = 1
    let inv = 1.0 - s;
    3.0 * inv * inv * s * a1 + 3.0 * inv * s * s * a2 + s * s * s
}

#[inline]
fn bezier_axis_slope(a1: f32, a2: f32, s: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * a1 + 6.0 * inv * s * (a2 - a1) + 3.0 * s * s * (1.0 - a2)
}

fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, x: f32) -> f32 {
    if x <= 0.0 || x >= 1.0 {
        return x;
    }
    // Newton first, bisection if the slope flattens out.
    let mut s = x;
    for _ in 0..8 {
        let err = bezier_axis(x1, x2, s) - x;
        if err.abs() < 1e-6 {
            return bezier_axis(y1, y2, s);
        }
        let slope = bezier_axis_slope(x1, x2, s);
        if slope.abs() < 1e-6 {
            break;
        }
        s -= err / slope;
    }
    let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
    s = x;
    for _ in 0..32 {
        let v = bezier_axis(x1, x2, s);
        if (v - x).abs() < 1e-6 {
            break;
        }
        if v < x {
            lo = s;
        } else {
            hi = s;
        }
        s = 0.5 * (lo + hi);
    }
    bezier_axis(y1, y2, s)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Ease; 8] = [
        Ease::Linear,
        Ease::Power1Out,
        Ease::Power2Out,
        Ease::Power2InOut,
        Ease::Power3Out,
        Ease::Power4Out,
        Ease::BackOut(1.7),
        Ease::CubicBezier(0.215, 0.61, 0.355, 1.0),
    ];

    #[test]
    fn endpoints_are_fixed() {
        for ease in ALL {
            assert!(ease.apply(0.0).abs() < 1e-5, "{:?} at 0", ease);
            assert!((ease.apply(1.0) - 1.0).abs() < 1e-5, "{:?} at 1", ease);
        }
    }

    #[test]
    fn back_out_overshoots() {
        let peak = (1..100)
            .map(|i| Ease::BackOut(1.7).apply(i as f32 / 100.0))
            .fold(f32::MIN, f32::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn out_curves_lead_linear() {
        for ease in [Ease::Power1Out, Ease::Power2Out, Ease::Power3Out, Ease::Power4Out] {
            assert!(ease.apply(0.3) > 0.3, "{:?}", ease);
        }
    }

    #[test]
    fn linear_bezier_is_identity() {
        let ease = Ease::CubicBezier(0.25, 0.25, 0.75, 0.75);
        for i in 0..=10 {
            let t = i as f32 / 10.0;
            assert!((ease.apply(t) - t).abs() < 1e-3);
        }
    }

    #[test]
    fn out_of_range_input_is_clamped() {
        assert_eq!(Ease::Power2Out.apply(-3.0), 0.0);
        assert_eq!(Ease::Power2Out.apply(7.0), 1.0);
        assert_eq!(Ease::Linear.apply(f32::NAN), 0.0);
    }
}
