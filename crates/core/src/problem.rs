use rand::Rng;

use crate::Point;

/// Number of decorative constraints in every generated problem.
pub const CONSTRAINT_COUNT: usize = 5;

/// A decorative constraint line drawn across the problem canvas.
///
/// Constraints do not influence either trajectory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraint {
    pub p1: Point,
    pub p2: Point,
}

/// The 2D optimization problem both solvers race across.
///
/// A problem is generated once per run and is read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Problem {
    /// Where both trajectories begin.
    pub start: Point,

    /// Where both trajectories end once converged.
    pub optimal: Point,

    /// Decorative constraint lines, in generation order.
    pub constraints: Vec<Constraint>,

    /// Canvas width the problem was generated for.
    pub width: f64,

    /// Canvas height the problem was generated for.
    pub height: f64,
}

impl Problem {
    /// Generates a problem for a `width` × `height` canvas.
    ///
    /// The start point sits at `(0.2w, 0.8h)` and the optimum at `(0.8w, 0.2h)`;
    /// only the [`CONSTRAINT_COUNT`] constraint endpoints are random, each drawn
    /// uniformly from `[0, width) × [0, height)`.
    ///
    /// Non-positive dimensions produce a degenerate problem rather than an error.
    pub fn generate<R: Rng + ?Sized>(width: f64, height: f64, rng: &mut R) -> Self {
        let constraints = (0..CONSTRAINT_COUNT)
            .map(|_| Constraint {
                p1: random_point(width, height, rng),
                p2: random_point(width, height, rng),
            })
            .collect();

        Self {
            start: Point::new(width * 0.2, height * 0.8),
            optimal: Point::new(width * 0.8, height * 0.2),
            constraints,
            width,
            height,
        }
    }
}

fn random_point<R: Rng + ?Sized>(width: f64, height: f64, rng: &mut R) -> Point {
    Point::new(rng.r#gen::<f64>() * width, rng.r#gen::<f64>() * height)
}
