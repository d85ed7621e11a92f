use rand::{SeedableRng, rngs::StdRng};
use thiserror::Error;

/// Dimensions of a drawing surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

impl Canvas {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    fn is_finite(self) -> bool {
        self.width.is_finite() && self.height.is_finite()
    }
}

/// Configuration for a [`SimulationClock`](crate::SimulationClock).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    canvas: Canvas,
    matrix: Canvas,
    seed: Option<u64>,
}

/// Errors that can occur when validating an engine config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("problem canvas dimensions must be finite")]
    Canvas,

    #[error("matrix canvas dimensions must be finite")]
    Matrix,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(Canvas::new(400.0, 400.0), Canvas::new(300.0, 60.0)).unwrap()
    }
}

impl Config {
    /// Creates a new config with validated canvases and no fixed seed.
    ///
    /// Zero or negative dimensions are accepted; they produce degenerate
    /// problems and empty sparsity patterns rather than errors.
    ///
    /// # Errors
    ///
    /// Returns an error if any dimension is NaN or infinite.
    pub fn new(canvas: Canvas, matrix: Canvas) -> Result<Self, ConfigError> {
        if !canvas.is_finite() {
            return Err(ConfigError::Canvas);
        }
        if !matrix.is_finite() {
            return Err(ConfigError::Matrix);
        }

        Ok(Self {
            canvas,
            matrix,
            seed: None,
        })
    }

    /// Fixes the random seed so runs are reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Returns the canvas problems are generated for.
    #[must_use]
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Returns the canvas sparsity patterns are generated for.
    #[must_use]
    pub fn matrix(&self) -> Canvas {
        self.matrix
    }

    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Builds the random number generator this config describes.
    ///
    /// Seeded configs always yield the same sequence; unseeded configs draw
    /// their seed from the operating system.
    #[must_use]
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
