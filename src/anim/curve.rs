use super::AnimCurve;

/// Evaluate an easing curve at progress `t` in `[0, 1]`.
///
/// Out-of-range input is clamped. Every curve maps 0 to 0 and 1 to 1;
/// `Overshoot` exceeds 1.0 on the way in, which is why callers interpolate
/// with the returned factor instead of clamping the result.
pub fn curve_value(curve: AnimCurve, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    match curve {
        AnimCurve::Linear => t,
        AnimCurve::EaseIn => t * t * t,
        AnimCurve::EaseOut => {
            let inv = 1.0 - t;
            1.0 - inv * inv * inv
        }
        AnimCurve::EaseInOut => t * t * (3.0 - 2.0 * t),
        AnimCurve::Step => {
            if t < 1.0 {
                0.0
            } else {
                1.0
            }
        }
        AnimCurve::Overshoot => {
            const BACK: f32 = 1.70158;
            let inv = t - 1.0;
            1.0 + (BACK + 1.0) * inv * inv * inv + BACK * inv * inv
        }
        AnimCurve::Bounce => bounce_out(t),
    }
}

fn bounce_out(t: f32) -> f32 {
    const N: f32 = 7.5625;
    const D: f32 = 2.75;
    if t < 1.0 / D {
        N * t * t
    } else if t < 2.0 / D {
        let t = t - 1.5 / D;
        N * t * t + 0.75
    } else if t < 2.5 / D {
        let t = t - 2.25 / D;
        N * t * t + 0.9375
    } else {
        let t = t - 2.625 / D;
        N * t * t + 0.984375
    }
}

#[cfg(test)]
mod tests {
    use super::super::AnimCurve;
    use super::curve_value;

    const ALL: [AnimCurve; 7] = [
        AnimCurve::Linear,
        AnimCurve::EaseIn,
        AnimCurve::EaseOut,
        AnimCurve::EaseInOut,
        AnimCurve::Step,
        AnimCurve::Overshoot,
        AnimCurve::Bounce,
    ];

    #[test]
    fn every_curve_hits_both_endpoints() {
        for curve in ALL {
            assert_eq!(curve_value(curve, 0.0), 0.0, "{curve:?} at 0");
            let end = curve_value(curve, 1.0);
            assert!((end - 1.0).abs() < 1e-4, "{curve:?} at 1 was {end}");
        }
    }

    #[test]
    fn input_is_clamped() {
        for curve in ALL {
            assert_eq!(curve_value(curve, -4.0), curve_value(curve, 0.0));
            assert_eq!(curve_value(curve, 9.0), curve_value(curve, 1.0));
        }
    }

    #[test]
    fn step_holds_until_the_end() {
        assert_eq!(curve_value(AnimCurve::Step, 0.99), 0.0);
        assert_eq!(curve_value(AnimCurve::Step, 1.0), 1.0);
    }

    #[test]
    fn overshoot_exceeds_target_midway() {
        let peak = (0..100)
            .map(|i| curve_value(AnimCurve::Overshoot, i as f32 / 100.0))
            .fold(f32::MIN, f32::max);
        assert!(peak > 1.0, "overshoot peak was {peak}");
    }

    #[test]
    fn ease_in_starts_slower_than_linear() {
        assert!(curve_value(AnimCurve::EaseIn, 0.25) < curve_value(AnimCurve::Linear, 0.25));
        assert!(curve_value(AnimCurve::EaseOut, 0.25) > curve_value(AnimCurve::Linear, 0.25));
    }
}
