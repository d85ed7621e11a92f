use std::fmt;

/// Identifies one of the two solvers being compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolverKind {
    /// The symmetric interior point solver: slow and noisy on large problems.
    Symmetric,

    /// The asymmetric solver: fast, linear, and noise-free at every scale.
    Asymmetric,
}

impl SolverKind {
    /// Both kinds, in the order the clock advances them.
    pub const ALL: [Self; 2] = [Self::Symmetric, Self::Asymmetric];

    /// Returns the `[min, max]` range of the logarithmic residual-error axis
    /// renderers should use for this solver.
    ///
    /// The asymmetric axis reaches deeper because its residual decays to 1e-10.
    #[must_use]
    pub fn error_axis(self) -> [f64; 2] {
        match self {
            Self::Symmetric => [1e-6, 10.0],
            Self::Asymmetric => [1e-12, 10.0],
        }
    }
}

impl fmt::Display for SolverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Symmetric => "symmetric",
            Self::Asymmetric => "asymmetric",
        })
    }
}
