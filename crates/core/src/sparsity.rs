//! Decorative sparsity patterns for the matrix strips beside each solver.
//!
//! Nothing here is derived from a real matrix. A pattern is a strong diagonal,
//! a scatter of upper-triangle entries (mirrored below the diagonal for the
//! symmetric solver), and for the asymmetric solver a set of lower-triangle
//! perturbations that break the symmetry.

use rand::Rng;

use crate::{Point, SolverKind};

const DIAGONAL_SPACING: f64 = 3.0;
const MAX_DIAGONAL_MARKS: usize = 1_000;
const DIAGONAL_SIZE: f64 = 3.0;
const ENTRY_COUNT: usize = 300;
const ENTRY_SIZE: f64 = 2.0;
const PERTURBATION_ATTEMPTS: usize = 150;
const PERTURBATION_SIZE: f64 = 3.0;
const PERTURBATION_REACH: f64 = 0.8;
const PERTURBATION_OFFSET: f64 = 5.0;

/// What part of the matrix structure a [`Mark`] illustrates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkRole {
    /// A cell on the main diagonal.
    Diagonal,

    /// An off-diagonal entry (or its mirror image).
    Entry,

    /// A lower-triangle entry that breaks symmetry.
    Perturbation,
}

/// A filled square in a sparsity strip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mark {
    /// Top-left corner of the square.
    pub origin: Point,

    /// Side length of the square.
    pub size: f64,

    pub role: MarkRole,
}

/// The marks making up one solver's sparsity strip, in drawing order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparsityPattern {
    pub width: f64,
    pub height: f64,
    pub marks: Vec<Mark>,
}

impl SparsityPattern {
    /// Generates a pattern for a `width` × `height` strip.
    ///
    /// Returns an empty pattern if either dimension is not a positive finite
    /// number. The pattern never holds more than a fixed number of marks,
    /// however wide the strip.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss
    )]
    pub fn generate<R: Rng + ?Sized>(kind: SolverKind, width: f64, height: f64, rng: &mut R) -> Self {
        let mut pattern = Self {
            width,
            height,
            marks: Vec::new(),
        };
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return pattern;
        }

        let aspect = height / width;

        // Wide strips spread a bounded number of diagonal marks further apart.
        let spacing = DIAGONAL_SPACING.max(width / MAX_DIAGONAL_MARKS as f64);
        let diagonal_marks = ((width / spacing).ceil() as usize).min(MAX_DIAGONAL_MARKS);
        for i in 0..diagonal_marks {
            let x = i as f64 * spacing;
            pattern.push(x, x * aspect, DIAGONAL_SIZE, MarkRole::Diagonal);
        }

        for _ in 0..ENTRY_COUNT {
            let x = rng.r#gen::<f64>() * width;
            let y = rng.r#gen::<f64>() * (x * aspect);
            pattern.push(x, y, ENTRY_SIZE, MarkRole::Entry);

            if kind == SolverKind::Symmetric {
                pattern.push(y / aspect, x * aspect, ENTRY_SIZE, MarkRole::Entry);
            }
        }

        if kind == SolverKind::Asymmetric {
            for _ in 0..PERTURBATION_ATTEMPTS {
                let x = rng.r#gen::<f64>() * width * PERTURBATION_REACH;
                let min_y = x * aspect + PERTURBATION_OFFSET;
                let y = min_y + rng.r#gen::<f64>() * (height - min_y);
                if y < height {
                    pattern.push(x, y, PERTURBATION_SIZE, MarkRole::Perturbation);
                }
            }
        }

        pattern
    }

    /// Returns an iterator over marks with the given role.
    pub fn marks_with(&self, role: MarkRole) -> impl Iterator<Item = &Mark> {
        self.marks.iter().filter(move |m| m.role == role)
    }

    fn push(&mut self, x: f64, y: f64, size: f64, role: MarkRole) {
        self.marks.push(Mark {
            origin: Point::new(x, y),
            size,
            role,
        });
    }
}
