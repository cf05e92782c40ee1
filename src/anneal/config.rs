//! Annealing configuration.

use crate::error::Error;

/// Configuration for the multi-pass annealing run.
///
/// The temperature parameters describe a family of cooling schedules: each
/// pass cools from a starting temperature down to `T0 / end_factor`, and
/// successive passes shrink the starting temperature by `reduction_factor`
/// until it drops below `temperature_floor`.
///
/// # Examples
///
/// ```
/// use tsp_anneal::anneal::AnnealConfig;
///
/// let config = AnnealConfig::default()
///     .with_initial_temperature(100.0)
///     .with_steps_per_pass(10_000)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealConfig {
    /// Starting temperature before the first pass's reduction.
    pub initial_temperature: f64,

    /// Metropolis iterations per pass; also the schedule length.
    pub steps_per_pass: usize,

    /// Ratio between a pass's start and end temperature (`Te > 1`).
    pub end_factor: f64,

    /// Per-pass starting-temperature reduction factor (`Tf > 1`).
    pub reduction_factor: f64,

    /// Shape exponent of the cooling curve (`Tpow > 0`); 1 is linear,
    /// 0.5 bends the curve convex, 2 concave.
    pub shape_exponent: f64,

    /// Stop once the starting temperature falls below this floor.
    pub temperature_floor: f64,

    /// Hard cap on the number of passes.
    pub max_passes: usize,

    /// Emit a snapshot every this many iterations.
    pub report_every: usize,

    /// Also emit the working tour at each reporting interval.
    pub report_tours: bool,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 10_000.0,
            steps_per_pass: 100_000,
            end_factor: 20.0,
            reduction_factor: 2.0,
            shape_exponent: 0.5,
            temperature_floor: 0.001,
            max_passes: 1000,
            report_every: 10_000,
            report_tours: false,
            seed: None,
        }
    }
}

impl AnnealConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_steps_per_pass(mut self, n: usize) -> Self {
        self.steps_per_pass = n;
        self
    }

    pub fn with_end_factor(mut self, te: f64) -> Self {
        self.end_factor = te;
        self
    }

    pub fn with_reduction_factor(mut self, tf: f64) -> Self {
        self.reduction_factor = tf;
        self
    }

    pub fn with_shape_exponent(mut self, p: f64) -> Self {
        self.shape_exponent = p;
        self
    }

    pub fn with_temperature_floor(mut self, eps: f64) -> Self {
        self.temperature_floor = eps;
        self
    }

    pub fn with_max_passes(mut self, n: usize) -> Self {
        self.max_passes = n;
        self
    }

    pub fn with_report_every(mut self, n: usize) -> Self {
        self.report_every = n;
        self
    }

    pub fn with_report_tours(mut self, enabled: bool) -> Self {
        self.report_tours = enabled;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), Error> {
        if self.initial_temperature <= 0.0 {
            return Err(Error::InvalidParameters(format!(
                "initial_temperature must be positive, got {}",
                self.initial_temperature
            )));
        }
        if self.steps_per_pass == 0 {
            return Err(Error::InvalidParameters(
                "steps_per_pass must be positive".into(),
            ));
        }
        if self.end_factor <= 1.0 {
            return Err(Error::InvalidParameters(format!(
                "end_factor must be greater than 1, got {}",
                self.end_factor
            )));
        }
        if self.reduction_factor <= 1.0 {
            return Err(Error::InvalidParameters(format!(
                "reduction_factor must be greater than 1, got {}",
                self.reduction_factor
            )));
        }
        if self.shape_exponent <= 0.0 {
            return Err(Error::InvalidParameters(format!(
                "shape_exponent must be positive, got {}",
                self.shape_exponent
            )));
        }
        if self.temperature_floor <= 0.0 {
            return Err(Error::InvalidParameters(format!(
                "temperature_floor must be positive, got {}",
                self.temperature_floor
            )));
        }
        if self.max_passes == 0 {
            return Err(Error::InvalidParameters("max_passes must be positive".into()));
        }
        if self.report_every == 0 {
            return Err(Error::InvalidParameters(
                "report_every must be positive".into(),
            ));
        }
        Ok(())
    }
}
