/// Quadratic ease-in-out.
///
/// Accelerates over the first half and decelerates over the second:
///
/// ```text
/// f(t) = 2t²              for t < 0.5
/// f(t) = -1 + (4 - 2t)t   otherwise
/// ```
///
/// Maps 0 to 0, 0.5 to 0.5, and 1 to 1. The function and its derivative are
/// continuous at `t = 0.5`, and it is monotonically increasing on `[0, 1]`.
/// Inputs outside `[0, 1]` are not clamped.
#[must_use]
pub fn ease_in_out_quad(t: f64) -> f64 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn endpoints_and_midpoint() {
        assert_relative_eq!(ease_in_out_quad(0.0), 0.0);
        assert_relative_eq!(ease_in_out_quad(0.5), 0.5);
        assert_relative_eq!(ease_in_out_quad(1.0), 1.0);
    }

    #[test]
    fn continuous_across_midpoint() {
        let below = ease_in_out_quad(0.5 - 1e-9);
        let above = ease_in_out_quad(0.5 + 1e-9);
        assert_relative_eq!(below, above, epsilon = 1e-8);
    }

    #[test]
    fn slow_start_and_finish() {
        assert!(ease_in_out_quad(0.1) < 0.1);
        assert!(ease_in_out_quad(0.9) > 0.9);
    }

    proptest! {
        #[test]
        fn monotonic_on_unit_interval(a in 0.0..=1.0_f64, b in 0.0..=1.0_f64) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(ease_in_out_quad(lo) <= ease_in_out_quad(hi) + 1e-12);
        }

        #[test]
        fn stays_in_unit_interval(t in 0.0..=1.0_f64) {
            let eased = ease_in_out_quad(t);
            prop_assert!((0.0..=1.0).contains(&eased));
        }
    }
}
