/// Maps normalized elapsed time in `[0, 1]` to normalized progress in `[0, 1]`.
#[derive(Clone, Copy, Debug)]
pub enum Easing {
    /// Constant velocity.
    Linear,
    /// Symmetric cubic ease-in/ease-out.
    CubicInOut,
    /// Caller-supplied curve. The page itself ships only the built-in profiles.
    #[cfg_attr(not(test), allow(dead_code))]
    Custom(fn(f64) -> f64),
}

impl Easing {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::CubicInOut => cubic_in_out(t),
            Easing::Custom(curve) => curve(t).clamp(0.0, 1.0),
        }
    }
}

impl PartialEq for Easing {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Easing::Linear, Easing::Linear) => true,
            (Easing::CubicInOut, Easing::CubicInOut) => true,
            // Function pointers have no stable identity.
            _ => false,
        }
    }
}

fn cubic_in_out(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_monotonic(easing: Easing) {
        let mut previous = easing.apply(0.0);
        for step in 1..=1000 {
            let value = easing.apply(step as f64 / 1000.0);
            assert!(
                value + 1e-12 >= previous,
                "{:?} decreased at step {}: {} < {}",
                easing,
                step,
                value,
                previous
            );
            previous = value;
        }
    }

    #[test]
    fn endpoints_are_fixed() {
        for easing in [Easing::Linear, Easing::CubicInOut] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn curves_never_move_backwards() {
        assert_monotonic(Easing::Linear);
        assert_monotonic(Easing::CubicInOut);
    }

    #[test]
    fn cubic_is_symmetric_around_the_midpoint() {
        let easing = Easing::CubicInOut;
        assert!((easing.apply(0.5) - 0.5).abs() < 1e-12);
        assert!((easing.apply(0.25) - 0.0625).abs() < 1e-12);
        assert!((easing.apply(0.25) + easing.apply(0.75) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn input_outside_unit_range_is_clamped() {
        assert_eq!(Easing::Linear.apply(-0.3), 0.0);
        assert_eq!(Easing::CubicInOut.apply(1.7), 1.0);
    }

    #[test]
    fn custom_curves_are_pluggable() {
        fn quadratic(t: f64) -> f64 {
            t * t
        }
        let easing = Easing::Custom(quadratic);
        assert_eq!(easing.apply(0.5), 0.25);
        assert_ne!(easing, Easing::Linear);
    }

    #[test]
    fn custom_curves_never_compare_equal() {
        fn quadratic(t: f64) -> f64 {
            t * t
        }
        assert_ne!(Easing::Custom(quadratic), Easing::Custom(quadratic));
        assert_eq!(Easing::CubicInOut, Easing::CubicInOut);
    }
}
