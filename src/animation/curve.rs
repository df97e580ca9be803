/// Easing curve applied to an animation transaction's progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimingFunction {
    /// Constant speed, no easing
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInEaseOut,
    /// Overshoots the target and settles with diminishing bounces
    Bounce,
    /// Fast start with strong deceleration
    PowerDecel,
}

impl TimingFunction {
    /// Map linear progress `t` in 0.0-1.0 to eased progress.
    ///
    /// Input is clamped; every curve returns exactly 0.0 at `t = 0` and 1.0 at `t = 1`.
    pub fn evaluate(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            TimingFunction::Linear => t,
            TimingFunction::EaseIn => t * t,
            TimingFunction::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            TimingFunction::EaseInEaseOut => t * t * (3.0 - 2.0 * t),
            TimingFunction::Bounce => bounce_out(t),
            TimingFunction::PowerDecel => 1.0 - (1.0 - t).powi(3),
        }
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
    } else if t < 1.0 {
        let t = t - 2.625 / D;
        N * t * t + 0.984375
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [TimingFunction; 6] = [
        TimingFunction::Linear,
        TimingFunction::EaseIn,
        TimingFunction::EaseOut,
        TimingFunction::EaseInEaseOut,
        TimingFunction::Bounce,
        TimingFunction::PowerDecel,
    ];

    #[test]
    fn test_endpoints() {
        for curve in ALL {
            assert_eq!(curve.evaluate(0.0), 0.0, "{:?}", curve);
            assert_eq!(curve.evaluate(1.0), 1.0, "{:?}", curve);
        }
    }

    #[test]
    fn test_input_is_clamped() {
        for curve in ALL {
            assert_eq!(curve.evaluate(-3.0), 0.0);
            assert_eq!(curve.evaluate(7.0), 1.0);
        }
    }

    #[test]
    fn test_ease_in_out_is_symmetric() {
        let curve = TimingFunction::EaseInEaseOut;
        assert_eq!(curve.evaluate(0.5), 0.5);
        assert!(curve.evaluate(0.25) < 0.25);
        assert!(curve.evaluate(0.75) > 0.75);
    }

    #[test]
    fn test_monotonic_curves() {
        for curve in [
            TimingFunction::Linear,
            TimingFunction::EaseIn,
            TimingFunction::EaseOut,
            TimingFunction::EaseInEaseOut,
            TimingFunction::PowerDecel,
        ] {
            let mut previous = 0.0;
            for step in 1..=100 {
                let value = curve.evaluate(step as f32 / 100.0);
                assert!(value >= previous, "{:?} decreased at step {}", curve, step);
                previous = value;
            }
        }
    }
}
