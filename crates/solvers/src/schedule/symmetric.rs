use std::num::NonZeroUsize;

use rand::Rng;
use tandem_core::{Point, Scale, SolverKind, ease_in_out_quad};

use super::{Sample, Schedule};

/// Wobble amplitude on small problems.
pub const SMALL_WOBBLE: f64 = 10.0;

/// Wobble amplitude on large problems up to [`WOBBLE_ESCALATION_ITERATION`].
pub const LARGE_WOBBLE: f64 = 50.0;

/// Wobble amplitude on large problems after [`WOBBLE_ESCALATION_ITERATION`].
pub const LARGE_LATE_WOBBLE: f64 = 80.0;

/// Last iteration at which a large problem still uses [`LARGE_WOBBLE`].
pub const WOBBLE_ESCALATION_ITERATION: usize = 100;

/// Lower bound on the residual while running.
pub const ERROR_FLOOR: f64 = 1e-4;

/// Upper bound of the uniform noise added to the residual.
pub const ERROR_NOISE: f64 = 0.1;

/// Residual reported once converged.
pub const CONVERGED_ERROR: f64 = 1e-5;

/// Iterations per radian of wobble phase.
const WOBBLE_PERIOD: f64 = 5.0;

/// The symmetric interior point solver.
///
/// Progress follows [`ease_in_out_quad`] from start to optimum. On top of that
/// the point circles with amplitude `wobble × (1 − progress)`, so the noise dies
/// out as the solver finishes. The residual is `1 − eased` plus up to 0.1 of
/// uniform noise, floored at [`ERROR_FLOOR`].
///
/// Runs while `iteration < total_steps` and converges on `total_steps`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symmetric {
    total_steps: NonZeroUsize,
    scale: Scale,
}

impl Symmetric {
    /// Creates a schedule converging after `total_steps` iterations.
    #[must_use]
    pub fn new(total_steps: NonZeroUsize, scale: Scale) -> Self {
        Self { total_steps, scale }
    }

    /// Returns the problem scale this schedule was built for.
    #[must_use]
    pub fn scale(&self) -> Scale {
        self.scale
    }

    /// Returns the wobble amplitude at `iteration`.
    ///
    /// Large problems get worse after [`WOBBLE_ESCALATION_ITERATION`].
    #[must_use]
    pub fn wobble(&self, iteration: usize) -> f64 {
        match self.scale {
            Scale::Small => SMALL_WOBBLE,
            Scale::Large if iteration > WOBBLE_ESCALATION_ITERATION => LARGE_LATE_WOBBLE,
            Scale::Large => LARGE_WOBBLE,
        }
    }
}

impl Schedule for Symmetric {
    fn kind(&self) -> SolverKind {
        SolverKind::Symmetric
    }

    fn total_steps(&self) -> usize {
        self.total_steps.get()
    }

    fn is_finished(&self, iteration: usize) -> bool {
        iteration >= self.total_steps()
    }

    #[allow(clippy::cast_precision_loss)]
    fn sample<R: Rng + ?Sized>(
        &self,
        iteration: usize,
        start: Point,
        optimal: Point,
        rng: &mut R,
    ) -> Sample {
        let progress = iteration as f64 / self.total_steps() as f64;
        let eased = ease_in_out_quad(progress);
        let base = start.lerp(optimal, eased);

        let phase = iteration as f64 / WOBBLE_PERIOD;
        let amplitude = self.wobble(iteration) * (1.0 - progress);
        let point = base + Point::new(phase.sin(), phase.cos()) * amplitude;

        let noise = rng.r#gen::<f64>() * ERROR_NOISE;
        let error = (1.0 - eased + noise).max(ERROR_FLOOR);

        Sample { point, error }
    }

    fn converged_error(&self) -> f64 {
        CONVERGED_ERROR
    }

    fn reported_iteration(&self, iteration: usize) -> usize {
        iteration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use rand::{SeedableRng, rngs::StdRng};

    fn schedule(steps: usize, scale: Scale) -> Symmetric {
        Symmetric::new(NonZeroUsize::new(steps).unwrap(), scale)
    }

    #[test]
    fn wobble_by_scale_and_iteration() {
        let small = schedule(50, Scale::Small);
        assert_relative_eq!(small.wobble(1), 10.0);
        assert_relative_eq!(small.wobble(200), 10.0);

        let large = schedule(400, Scale::Large);
        assert_relative_eq!(large.wobble(1), 50.0);
        assert_relative_eq!(large.wobble(100), 50.0);
        assert_relative_eq!(large.wobble(101), 80.0);
        assert_relative_eq!(large.wobble(399), 80.0);
    }

    #[test]
    fn finishes_on_total_steps() {
        let s = schedule(50, Scale::Small);
        assert!(!s.is_finished(49));
        assert!(s.is_finished(50));
        assert_eq!(s.reported_iteration(50), 50);
    }

    #[test]
    fn sample_offset_has_decaying_amplitude() {
        let s = schedule(400, Scale::Large);
        let start = Point::new(80.0, 320.0);
        let optimal = Point::new(320.0, 80.0);
        let mut rng = StdRng::seed_from_u64(9);

        for (iteration, wobble) in [(40, 50.0), (100, 50.0), (101, 80.0), (300, 80.0)] {
            let progress = iteration as f64 / 400.0;
            let base = start.lerp(optimal, ease_in_out_quad(progress));
            let sample = s.sample(iteration, start, optimal, &mut rng);

            let offset = sample.point - base;
            let radius = offset.x.hypot(offset.y);
            assert_relative_eq!(radius, wobble * (1.0 - progress), epsilon = 1e-9);
        }
    }

    #[test]
    fn error_is_noisy_but_floored() {
        let s = schedule(50, Scale::Small);
        let mut rng = StdRng::seed_from_u64(21);

        for iteration in 1..50 {
            let eased = ease_in_out_quad(iteration as f64 / 50.0);
            let sample = s.sample(iteration, Point::default(), Point::new(1.0, 1.0), &mut rng);

            assert!(sample.error >= ERROR_FLOOR);
            assert!(sample.error >= 1.0 - eased);
            assert!(sample.error < 1.0 - eased + ERROR_NOISE + ERROR_FLOOR);
        }
    }
}
